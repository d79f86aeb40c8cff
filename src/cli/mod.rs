//! Command Line Interface (CLI) layer for matsplit.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that resolves parameters and
//! splits each input in turn. It wires user-provided options to the
//! library functionality exposed via `matsplit::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
