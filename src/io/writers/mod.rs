//! Output writers. `blocks` places one file per split block inside the
//! per-input output directory.
pub mod blocks;
