#![doc = r#"
matsplit — split matrix bundle files into one file per matrix block.

A bundle is a text file whose first line is a header describing block geometry
and whose remaining lines are a sequence of equal-sized matrix blocks. Column 0
of the header is a digit `row_count`; each block spans `row_count + 1` body
lines. Column 2 is a digit `col_count`, reported but not used for splitting.

For an input `path`, blocks are written to `path.d/out_n_1`, `path.d/out_n_2`,
and so on, each file holding the header line followed by the block's lines,
byte-for-byte with original line terminators.

Quick start: split a bundle on disk
-----------------------------------
```rust,no_run
use std::path::Path;
use matsplit::{split_bundle, SplitParams};

fn main() -> matsplit::Result<()> {
    let outcome = split_bundle(Path::new("/data/matrices.txt"), &SplitParams::default())?;
    println!("wrote {} files to {:?}", outcome.files.len(), outcome.output_dir);
    Ok(())
}
```

Plan in memory
--------------
```rust
use std::path::Path;
use matsplit::{plan_bundle_text, SplitParams};

let buffers =
    plan_bundle_text(Path::new("inline"), "1 1\na\nb\nc\nd\n", &SplitParams::default()).unwrap();
assert_eq!(buffers.blocks.len(), 2);
assert_eq!(buffers.blocks[1], b"1 1\nc\nd\n");
```

Block arithmetic
----------------
The default `BlockArithmetic::BodyLength` writes every complete block:
`body_lines / matrix_length`. This reproduces historical output counts.
`BlockArithmetic::LineTotal` counts `(line_total - 2) / matrix_length` instead,
where `line_total` is the body length plus one; it is one line short, so the
final block of a bundle whose body is an exact multiple of the block size is
dropped. Trailing lines that do not fill a block are dropped in both modes and
reported in `SplitPlan::dropped_lines`.

Error handling
--------------
All public functions return `matsplit::Result<T>`. Every `matsplit::Error`
names the offending path; `Error::kind()` gives the coarse classification
(`EMPTY_INPUT`, `MALFORMED_HEADER`, `IO_ERROR`, `CONFIG`).

```rust,no_run
use std::path::Path;
use matsplit::{split_bundle, Error, SplitParams};

match split_bundle(Path::new("/data/bad.txt"), &SplitParams::default()) {
    Ok(_) => {}
    Err(Error::MalformedHeader { path, field, .. }) => eprintln!("{path:?}: bad {field}"),
    Err(other) => eprintln!("{other}"),
}
```

Useful modules
--------------
- [`api`] — high-level entry points and batch helpers.
- [`core`] — bundle model, block planning and parameters.
- [`io`] — bundle reader and block writers.
- [`types`] — shared enums (`BlockArithmetic`).
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use core::bundle::{Bundle, BundleHeader};
pub use core::params::SplitParams;
pub use core::plan::SplitPlan;
pub use error::{Error, ErrorKind, HeaderField, Result};
pub use types::BlockArithmetic;

// High-level API re-exports
pub use api::{
    BatchReport, InputFailure, SplitBuffers, SplitOutcome, plan_bundle_text, split_bundle,
    split_bundles, write_diagnostics,
};
