//! I/O layer: reading bundle files into memory and writing split blocks.
pub mod reader;
pub use reader::{read_bundle, read_bundle_text};

pub mod writers;
pub use writers::blocks::{ensure_output_dir, output_dir_for, write_block_file};
