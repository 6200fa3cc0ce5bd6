use std::collections::HashMap;

use serde::Serialize;

use crate::cli::SortOrder;

/// One product's review count, ready for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct ProductCount<'a> {
    pub(crate) product_id: &'a str,
    pub(crate) reviews: usize,
}

/// Flatten the unordered count map into rows sorted by product id
pub(crate) fn sorted_counts(
    counts: &HashMap<String, usize>,
    order: SortOrder,
) -> Vec<ProductCount<'_>> {
    let mut rows: Vec<ProductCount<'_>> = counts
        .iter()
        .map(|(product_id, &reviews)| ProductCount {
            product_id: product_id.as_str(),
            reviews,
        })
        .collect();
    match order {
        SortOrder::Asc => rows.sort_by(|a, b| a.product_id.cmp(b.product_id)),
        SortOrder::Desc => rows.sort_by(|a, b| b.product_id.cmp(a.product_id)),
    }
    rows
}
