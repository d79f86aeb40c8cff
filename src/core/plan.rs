use serde::Serialize;

use crate::core::bundle::Bundle;
use crate::types::BlockArithmetic;

/// Block geometry derived from a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitPlan {
    pub line_total: usize,
    pub matrix_length: usize,
    pub col_count: u8,
    pub block_count: usize,
    /// Body lines left over after the last written block
    pub dropped_lines: usize,
    pub arithmetic: BlockArithmetic,
}

impl SplitPlan {
    pub fn for_bundle(bundle: &Bundle, arithmetic: BlockArithmetic) -> Self {
        let matrix_length = bundle.header.matrix_length();
        let body_lines = bundle.body.len();
        let block_count = arithmetic.block_count(body_lines, matrix_length);
        Self {
            line_total: bundle.line_total(),
            matrix_length,
            col_count: bundle.header.col_count,
            block_count,
            dropped_lines: body_lines - block_count * matrix_length,
            arithmetic,
        }
    }

    /// Body line slices, one per block, in order.
    pub fn blocks(self, bundle: &Bundle) -> impl Iterator<Item = &[String]> {
        bundle
            .body
            .chunks_exact(self.matrix_length)
            .take(self.block_count)
    }
}

/// Header followed by the block's lines, as UTF-8 bytes.
pub fn render_block(header: &str, lines: &[String]) -> Vec<u8> {
    let len = header.len() + lines.iter().map(String::len).sum::<usize>();
    let mut buf = String::with_capacity(len);
    buf.push_str(header);
    for line in lines {
        buf.push_str(line);
    }
    buf.into_bytes()
}
