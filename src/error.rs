use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to load reviews from {origin}: {error}")]
    Load { origin: String, error: LoadError },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("{format} output is not supported for the {command} command")]
    UnsupportedFormat {
        format: &'static str,
        command: &'static str,
    },

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fatal problems while turning the input file into reviews
#[derive(Debug, Error)]
pub(crate) enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("header is missing required column \"{column}\"")]
    MissingColumn { column: &'static str },

    #[error("line {line}: missing value for \"{column}\"")]
    MissingField { line: u64, column: &'static str },

    #[error("line {line}: invalid price \"{value}\"")]
    InvalidPrice { line: u64, value: String },

    #[error("line {line}: invalid reviewId \"{value}\"")]
    InvalidId { line: u64, value: String },
}
