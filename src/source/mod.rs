//! Review source abstraction layer
//!
//! A source hands the loader a byte stream of CSV; the loader turns it
//! into reviews. Implemented for files on disk and the bundled sample.

pub(crate) mod bundled;
pub(crate) mod file;
pub(crate) mod loader;
pub(crate) mod parser;

use std::io::Read;
use std::path::Path;

use crate::error::LoadError;

use bundled::BundledSource;
use file::FileSource;

/// Where review CSV comes from
pub(crate) trait ReviewSource {
    /// Human-readable origin for logs and error messages
    fn display_name(&self) -> String;

    /// Open the underlying CSV stream
    fn open(&self) -> Result<Box<dyn Read>, LoadError>;
}

/// Box type for dynamic dispatch
pub(crate) type BoxedSource = Box<dyn ReviewSource>;

/// File source when a path is given, the bundled sample otherwise
pub(crate) fn resolve_source(path: Option<&Path>) -> BoxedSource {
    match path {
        Some(p) => Box::new(FileSource::new(p)),
        None => Box::new(BundledSource),
    }
}

pub(crate) use loader::load_reviews;
pub(crate) use parser::parse_reviews;
