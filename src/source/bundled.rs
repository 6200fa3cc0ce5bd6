//! Sample dataset compiled into the binary
//!
//! Used when no input file is given on the command line or in the config.

use std::io::{Cursor, Read};

use crate::error::LoadError;
use crate::source::ReviewSource;

const BUNDLED_REVIEWS: &str = include_str!("../../data/reviews.csv");

pub(crate) struct BundledSource;

impl ReviewSource for BundledSource {
    fn display_name(&self) -> String {
        "bundled reviews.csv".to_string()
    }

    fn open(&self) -> Result<Box<dyn Read>, LoadError> {
        Ok(Box::new(Cursor::new(BUNDLED_REVIEWS.as_bytes())))
    }
}
