//! CSV parser for review files
//!
//! Columns are bound by header name, so any column order is accepted.
//! Header names match case-insensitively and unknown columns are ignored.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};

use crate::consts::{COL_CATEGORY, COL_PRICE, COL_PRODUCT_ID, COL_REVIEW_ID, COL_TITLE};
use crate::core::Review;
use crate::error::LoadError;

/// Position of each known column within a row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    review_id: usize,
    title: usize,
    category: usize,
    product_id: usize,
    price: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(column))
                .ok_or(LoadError::MissingColumn { column })
        };

        Ok(ColumnIndex {
            review_id: find(COL_REVIEW_ID)?,
            title: find(COL_TITLE)?,
            category: find(COL_CATEGORY)?,
            product_id: find(COL_PRODUCT_ID)?,
            price: find(COL_PRICE)?,
        })
    }

    fn parse_row(&self, record: &StringRecord, line: u64) -> Result<Review, LoadError> {
        let required = |idx: usize, column: &'static str| {
            text_field(record, idx).ok_or(LoadError::MissingField { line, column })
        };

        let raw_id = required(self.review_id, COL_REVIEW_ID)?;
        let id = raw_id
            .trim_end()
            .parse::<i64>()
            .map_err(|_| LoadError::InvalidId {
                line,
                value: raw_id.to_string(),
            })?;

        let raw_price = required(self.price, COL_PRICE)?;
        let price = parse_price(raw_price).ok_or_else(|| LoadError::InvalidPrice {
            line,
            value: raw_price.to_string(),
        })?;

        Ok(Review {
            id,
            title: text_field(record, self.title).map(str::to_string),
            category: text_field(record, self.category).map(str::to_string),
            product_id: required(self.product_id, COL_PRODUCT_ID)?.to_string(),
            price,
        })
    }
}

/// Value with leading whitespace removed; empty cells are absent
fn text_field(record: &StringRecord, idx: usize) -> Option<&str> {
    record
        .get(idx)
        .map(str::trim_start)
        .filter(|v| !v.is_empty())
}

/// Plain decimal price. NaN and infinities are rejected.
fn parse_price(raw: &str) -> Option<f64> {
    raw.trim_end()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
}

/// Drop blanks between the start of a field and its opening quote, so that
/// `1, "a, b"` reads as a quoted field. Line breaks are never touched.
fn skip_blanks_before_quotes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut field_start = true;
    let mut quoted = false;

    while let Some(c) = chars.next() {
        if quoted {
            out.push(c);
            if c == '"' {
                // "" is an escaped quote inside a quoted field
                if chars.peek() == Some(&'"') {
                    chars.next();
                    out.push('"');
                } else {
                    quoted = false;
                }
            }
            continue;
        }

        if field_start && matches!(c, ' ' | '\t') {
            let mut blanks = String::from(c);
            while let Some(&next @ (' ' | '\t')) = chars.peek() {
                blanks.push(next);
                chars.next();
            }
            if chars.peek() != Some(&'"') {
                out.push_str(&blanks);
                field_start = false;
            }
            continue;
        }

        match c {
            '"' if field_start => {
                quoted = true;
                field_start = false;
            }
            ',' | '\n' | '\r' => field_start = true,
            _ => field_start = false,
        }
        out.push(c);
    }

    out
}

/// Parse a whole CSV document into reviews, in file order.
/// The first bad row aborts the load.
pub(crate) fn parse_reviews<R: Read>(mut reader: R) -> Result<Vec<Review>, LoadError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw).map_err(csv::Error::from)?;
    let text = skip_blanks_before_quotes(&raw);

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = csv_reader.headers()?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut reviews = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        reviews.push(columns.parse_row(&record, line)?);
    }

    Ok(reviews)
}
