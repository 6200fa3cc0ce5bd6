//! Load a review source into memory, all or nothing

use std::time::Instant;

use crate::core::LoadResult;
use crate::error::LoadError;
use crate::source::{ReviewSource, parse_reviews};

/// Read and parse every review from `source`.
/// Any malformed row fails the whole load; no partial result is returned.
pub(crate) fn load_reviews(source: &dyn ReviewSource) -> Result<LoadResult, LoadError> {
    let load_start = Instant::now();

    let reader = source.open()?;
    let reviews = parse_reviews(reader)?;

    let elapsed_ms = load_start.elapsed().as_secs_f64() * 1000.0;
    tracing::info!(
        source = %source.display_name(),
        reviews = reviews.len(),
        "Loaded reviews ({:.2}ms)",
        elapsed_ms
    );

    Ok(LoadResult {
        reviews,
        elapsed_ms,
    })
}
