//! Shared types and enums used across matsplit.
//! Currently `BlockArithmetic`, the rule deciding how many blocks a bundle holds.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the number of blocks in a bundle is derived from its line count.
///
/// Both variants consume `matrix_length = row_count + 1` body lines per block;
/// they differ only in the count:
///
/// - `BodyLength`: `body_lines / matrix_length`, every complete block. This is
///   the default and matches historical output counts.
/// - `LineTotal`: `(line_total - 2) / matrix_length`, where `line_total` counts
///   the header once plus every body line. One line short of `BodyLength`, so
///   an exact bundle loses its last block.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BlockArithmetic {
    LineTotal,
    #[default]
    BodyLength,
}

impl std::fmt::Display for BlockArithmetic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BlockArithmetic::LineTotal => "line-total",
            BlockArithmetic::BodyLength => "body-length",
        };
        write!(f, "{}", s)
    }
}

impl BlockArithmetic {
    /// Number of whole blocks for a bundle with `body_lines` lines below the header.
    pub fn block_count(self, body_lines: usize, matrix_length: usize) -> usize {
        if matrix_length == 0 {
            return 0;
        }
        match self {
            BlockArithmetic::LineTotal => {
                let line_total = body_lines + 1;
                line_total.saturating_sub(2) / matrix_length
            }
            BlockArithmetic::BodyLength => body_lines / matrix_length,
        }
    }
}
