use serde::Serialize;

use crate::core::Review;
use crate::output::counts::ProductCount;

#[derive(Debug, Serialize)]
struct PriceRangeSection<'a> {
    min: f64,
    max: f64,
    reviews: &'a [&'a Review],
}

#[derive(Debug, Serialize)]
struct KeywordSection<'a> {
    keyword: &'a str,
    reviews: &'a [&'a Review],
}

/// Everything the default report shows, borrowed from the query results
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReportData<'a> {
    pub(crate) reviews: &'a [&'a Review],
    pub(crate) min_price: f64,
    pub(crate) max_price: f64,
    pub(crate) in_price_range: &'a [&'a Review],
    pub(crate) counts: &'a [ProductCount<'a>],
    pub(crate) keyword: &'a str,
    pub(crate) keyword_matches: &'a [&'a Review],
    pub(crate) tech_titles: &'a [String],
    pub(crate) home_product_ids: &'a [String],
}

#[derive(Serialize)]
struct ReportJson<'a> {
    reviews: &'a [&'a Review],
    price_range: PriceRangeSection<'a>,
    counts: &'a [ProductCount<'a>],
    keyword: KeywordSection<'a>,
    tech_titles_over_50: &'a [String],
    home_product_ids_under_100: &'a [String],
}

pub(crate) fn output_reviews_json(reviews: &[&Review]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reviews)
}

pub(crate) fn output_counts_json(counts: &[ProductCount<'_>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(counts)
}

pub(crate) fn output_values_json(values: &[String]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(values)
}

pub(crate) fn output_report_json(data: ReportData<'_>) -> serde_json::Result<String> {
    let report = ReportJson {
        reviews: data.reviews,
        price_range: PriceRangeSection {
            min: data.min_price,
            max: data.max_price,
            reviews: data.in_price_range,
        },
        counts: data.counts,
        keyword: KeywordSection {
            keyword: data.keyword,
            reviews: data.keyword_matches,
        },
        tech_titles_over_50: data.tech_titles,
        home_product_ids_under_100: data.home_product_ids,
    };
    serde_json::to_string_pretty(&report)
}
