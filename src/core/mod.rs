//! Core module - the review model and the query layer

mod query;
mod types;

pub(crate) use query::{
    count_by_product_id, filter_by_price_range, find_by_keyword_in_title,
    home_product_ids_under_100, product_ids_by_category_under_price, tech_titles_over_50_dollars,
    titles_by_category_over_price,
};
pub(crate) use types::{LoadResult, Review};
