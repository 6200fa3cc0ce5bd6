//! Query layer over a loaded review set
//!
//! Every function borrows the reviews read-only and returns a freshly owned
//! result. Filters keep the input order; only the product-id projection sorts.

use std::collections::HashMap;

use crate::consts::{HOME_CATEGORY, HOME_MAX_PRICE, TECH_CATEGORY, TECH_MIN_PRICE};
use crate::core::types::Review;

/// Fold a string for case-insensitive comparison (Unicode default mapping, no locale)
fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

fn category_matches(review: &Review, folded_category: &str) -> bool {
    review
        .category
        .as_deref()
        .is_some_and(|c| fold_case(c) == folded_category)
}

/// Reviews with `min <= price <= max`, in input order.
/// An inverted range simply matches nothing.
pub(crate) fn filter_by_price_range(reviews: &[Review], min: f64, max: f64) -> Vec<&Review> {
    let matched: Vec<&Review> = reviews
        .iter()
        .filter(|r| r.price >= min && r.price <= max)
        .collect();
    tracing::debug!(min, max, matched = matched.len(), "price range filter");
    matched
}

/// Number of reviews per product id
pub(crate) fn count_by_product_id(reviews: &[Review]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for review in reviews {
        *counts.entry(review.product_id.clone()).or_default() += 1;
    }

    tracing::debug!(products = counts.len(), "counted reviews by product");
    counts
}

/// Reviews whose title contains `keyword`, ignoring case.
/// Reviews without a title never match; an empty keyword matches every titled review.
pub(crate) fn find_by_keyword_in_title<'a>(
    reviews: &'a [Review],
    keyword: &str,
) -> Vec<&'a Review> {
    let needle = fold_case(keyword);
    let matched: Vec<&Review> = reviews
        .iter()
        .filter(|r| {
            r.title
                .as_deref()
                .is_some_and(|t| fold_case(t).contains(&needle))
        })
        .collect();
    tracing::debug!(keyword, matched = matched.len(), "keyword title search");
    matched
}

/// Upper-cased titles of reviews in `category` priced strictly above `min_price_exclusive`
pub(crate) fn titles_by_category_over_price(
    reviews: &[Review],
    category: &str,
    min_price_exclusive: f64,
) -> Vec<String> {
    let folded = fold_case(category);
    let titles: Vec<String> = reviews
        .iter()
        .filter(|r| category_matches(r, &folded))
        .filter(|r| r.price > min_price_exclusive)
        .filter_map(|r| r.title.as_deref())
        .map(str::to_uppercase)
        .collect();
    tracing::debug!(category, min_price_exclusive, matched = titles.len(), "category titles");
    titles
}

/// Product ids of reviews in `category` priced strictly below `max_price_exclusive`,
/// cheapest first. Equal prices keep their input order.
pub(crate) fn product_ids_by_category_under_price(
    reviews: &[Review],
    category: &str,
    max_price_exclusive: f64,
) -> Vec<String> {
    let folded = fold_case(category);
    let mut selected: Vec<&Review> = reviews
        .iter()
        .filter(|r| category_matches(r, &folded))
        .filter(|r| r.price < max_price_exclusive)
        .collect();

    // sort_by is stable
    selected.sort_by(|a, b| a.price.total_cmp(&b.price));

    tracing::debug!(
        category,
        max_price_exclusive,
        matched = selected.len(),
        "category product ids"
    );
    selected.into_iter().map(|r| r.product_id.clone()).collect()
}

pub(crate) fn tech_titles_over_50_dollars(reviews: &[Review]) -> Vec<String> {
    titles_by_category_over_price(reviews, TECH_CATEGORY, TECH_MIN_PRICE)
}

pub(crate) fn home_product_ids_under_100(reviews: &[Review]) -> Vec<String> {
    product_ids_by_category_under_price(reviews, HOME_CATEGORY, HOME_MAX_PRICE)
}
