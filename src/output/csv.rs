use std::fmt::Write;

use crate::consts::{COL_CATEGORY, COL_PRICE, COL_PRODUCT_ID, COL_REVIEW_ID, COL_TITLE};
use crate::core::Review;
use crate::output::counts::ProductCount;

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Reviews as CSV with the same header the loader expects, so output can be fed back in
pub(crate) fn output_reviews_csv(reviews: &[&Review]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{COL_REVIEW_ID},{COL_TITLE},{COL_CATEGORY},{COL_PRODUCT_ID},{COL_PRICE}"
    );

    for r in reviews {
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            r.id,
            csv_escape(r.title.as_deref().unwrap_or_default()),
            csv_escape(r.category.as_deref().unwrap_or_default()),
            csv_escape(&r.product_id),
            r.price,
        );
    }

    out
}

pub(crate) fn output_counts_csv(counts: &[ProductCount<'_>]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{COL_PRODUCT_ID},reviews");
    for c in counts {
        let _ = writeln!(out, "{},{}", csv_escape(c.product_id), c.reviews);
    }
    out
}

pub(crate) fn output_values_csv(header: &str, values: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", csv_escape(header));
    for v in values {
        let _ = writeln!(out, "{}", csv_escape(v));
    }
    out
}
