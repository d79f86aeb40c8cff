//! In-memory bundle model: header geometry plus body lines.
//!
//! Lines keep their original terminators so that blocks can be written back
//! byte-for-byte. The header encodes block geometry in two single-digit
//! columns: column 0 is `row_count`, column 2 is `col_count`. Only column 0
//! affects splitting; `col_count` is reported but otherwise unused.
use std::path::Path;

use crate::error::{Error, HeaderField, Result};

/// Parsed first line of a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleHeader {
    /// Header line exactly as read, terminator included
    pub raw: String,
    pub row_count: u8,
    pub col_count: u8,
}

impl BundleHeader {
    /// Parse a header line; `path` is only used for error context.
    pub fn parse(path: &Path, line: &str) -> Result<Self> {
        let row_count = header_digit(path, line, 0, HeaderField::RowCount)?;
        let col_count = header_digit(path, line, 2, HeaderField::ColCount)?;
        Ok(Self {
            raw: line.to_string(),
            row_count,
            col_count,
        })
    }

    /// Body lines consumed per block.
    pub fn matrix_length(&self) -> usize {
        usize::from(self.row_count) + 1
    }
}

fn header_digit(path: &Path, line: &str, column: usize, field: HeaderField) -> Result<u8> {
    let malformed = |reason: String| Error::MalformedHeader {
        path: path.to_path_buf(),
        field,
        reason,
    };

    let ch = line.chars().nth(column).ok_or_else(|| {
        malformed(format!(
            "header has {} characters, expected at least {}",
            line.chars().count(),
            column + 1
        ))
    })?;

    ch.to_digit(10)
        .and_then(|d| u8::try_from(d).ok())
        .ok_or_else(|| malformed(format!("{:?} is not a decimal digit", ch)))
}

/// A whole bundle held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub header: BundleHeader,
    pub body: Vec<String>,
}

impl Bundle {
    /// Split `text` into lines (terminators kept) and parse the header.
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let mut lines = text.split_inclusive('\n');
        let first = lines.next().ok_or_else(|| Error::EmptyInput {
            path: path.to_path_buf(),
        })?;
        let header = BundleHeader::parse(path, first)?;
        let body = lines.map(str::to_string).collect();
        Ok(Self { header, body })
    }

    /// Diagnostic line count: the header once plus every body line.
    pub fn line_total(&self) -> usize {
        1 + self.body.len()
    }
}
