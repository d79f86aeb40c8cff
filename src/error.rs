//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Every variant carries the offending input path so batch reports can name it,
//! and `ErrorKind` gives the coarse classification used in those reports.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}: input is empty, no header line", path.display())]
    EmptyInput { path: PathBuf },

    #[error("{}: malformed header field {field}: {reason}", path.display())]
    MalformedHeader {
        path: PathBuf,
        field: HeaderField,
        reason: String,
    },

    #[error("{}: I/O error: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: input is not valid UTF-8 text", path.display())]
    NotUtf8 { path: PathBuf },

    #[error("{}: invalid configuration: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Header position that failed to parse.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderField {
    RowCount,
    ColCount,
}

impl std::fmt::Display for HeaderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderField::RowCount => write!(f, "row_count (column 0)"),
            HeaderField::ColCount => write!(f, "col_count (column 2)"),
        }
    }
}

/// Coarse error classification reported per failed input.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    EmptyInput,
    MalformedHeader,
    IoError,
    Config,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::EmptyInput => "EMPTY_INPUT",
            ErrorKind::MalformedHeader => "MALFORMED_HEADER",
            ErrorKind::IoError => "IO_ERROR",
            ErrorKind::Config => "CONFIG",
        };
        write!(f, "{}", s)
    }
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyInput { .. } => ErrorKind::EmptyInput,
            Error::MalformedHeader { .. } => ErrorKind::MalformedHeader,
            Error::Io { .. } | Error::NotUtf8 { .. } => ErrorKind::IoError,
            Error::Config { .. } => ErrorKind::Config,
        }
    }

    /// Path of the input (or config file) the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::EmptyInput { path }
            | Error::MalformedHeader { path, .. }
            | Error::Io { path, .. }
            | Error::NotUtf8 { path }
            | Error::Config { path, .. } => path.as_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_header_message_names_path_and_field() {
        let err = Error::MalformedHeader {
            path: PathBuf::from("/data/bundle.txt"),
            field: HeaderField::RowCount,
            reason: "'x' is not a decimal digit".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/bundle.txt"));
        assert!(msg.contains("row_count"));
        assert_eq!(err.kind(), ErrorKind::MalformedHeader);
    }

    #[test]
    fn not_utf8_is_classified_as_io() {
        let err = Error::NotUtf8 {
            path: PathBuf::from("a"),
        };
        assert_eq!(err.kind(), ErrorKind::IoError);
        assert_eq!(err.kind().to_string(), "IO_ERROR");
    }

    #[test]
    fn kind_serializes_with_taxonomy_names() {
        let json = serde_json::to_string(&ErrorKind::EmptyInput).unwrap();
        assert_eq!(json, "\"EMPTY_INPUT\"");
    }
}
