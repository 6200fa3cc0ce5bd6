//! Review CSV file on disk

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use crate::error::LoadError;
use crate::source::ReviewSource;

/// Reviews read from a user-supplied CSV path
pub(crate) struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReviewSource for FileSource {
    fn display_name(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> Result<Box<dyn Read>, LoadError> {
        let file = File::open(&self.path).map_err(|source| LoadError::Open {
            path: self.path.clone(),
            source,
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}
