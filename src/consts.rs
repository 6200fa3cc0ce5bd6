/// Default inclusive price range for the report
pub(crate) const DEFAULT_MIN_PRICE: f64 = 20.0;
pub(crate) const DEFAULT_MAX_PRICE: f64 = 100.0;

/// Default title keyword for the report
pub(crate) const DEFAULT_KEYWORD: &str = "great";

pub(crate) const TECH_CATEGORY: &str = "Tech";
pub(crate) const TECH_MIN_PRICE: f64 = 50.0;

pub(crate) const HOME_CATEGORY: &str = "Home";
pub(crate) const HOME_MAX_PRICE: f64 = 100.0;

/// Header names expected in the review CSV
pub(crate) const COL_REVIEW_ID: &str = "reviewId";
pub(crate) const COL_TITLE: &str = "title";
pub(crate) const COL_CATEGORY: &str = "category";
pub(crate) const COL_PRODUCT_ID: &str = "productId";
pub(crate) const COL_PRICE: &str = "price";
