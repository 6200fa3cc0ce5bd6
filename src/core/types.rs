//! Core data types shared by the loader, the query layer and the renderers
//!
//! A `Review` is created once by the loader and never mutated afterwards.

use serde::Serialize;

/// One product review as loaded from the source file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Review {
    /// `reviewId` column; not guaranteed unique
    pub(crate) id: i64,
    pub(crate) title: Option<String>,
    pub(crate) category: Option<String>,
    /// Several reviews may share one product
    pub(crate) product_id: String,
    pub(crate) price: f64,
}

/// Loading result with statistics
#[derive(Debug, Default)]
pub(crate) struct LoadResult {
    /// Reviews in file order
    pub(crate) reviews: Vec<Review>,
    /// Parse time in milliseconds
    pub(crate) elapsed_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn review_is_shareable_across_threads() {
        assert_send_sync::<Review>();
        assert_send_sync::<&[Review]>();
    }

    #[test]
    fn review_serializes_absent_title_as_null() {
        let review = Review {
            id: 5,
            title: None,
            category: Some("Tech".to_string()),
            product_id: "P005".to_string(),
            price: 200.0,
        };
        let json = serde_json::to_value(&review).unwrap();
        assert!(json["title"].is_null());
        assert_eq!(json["product_id"].as_str(), Some("P005"));
        assert_eq!(json["price"].as_f64(), Some(200.0));
    }

    #[test]
    fn load_result_default_is_empty() {
        let result = LoadResult::default();
        assert!(result.reviews.is_empty());
        assert_eq!(result.elapsed_ms, 0.0);
    }
}
