//! Core splitting building blocks: the in-memory bundle model, block planning,
//! and splitting parameters. These are consumed by the high-level `api` module.
pub mod bundle;
pub mod params;
pub mod plan;
