use clap::Parser;
use std::path::PathBuf;

use matsplit::BlockArithmetic;

#[derive(Parser, Debug)]
#[command(
    name = "matsplit",
    version,
    about = "Split matrix bundle files into one file per block"
)]
pub struct CliArgs {
    /// Bundle files to split, processed in order. Blocks of FILE go to FILE.d/
    #[arg(required = true, value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Enable logging (filter with RUST_LOG, default debug)
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// JSON file with splitting parameters; flags below override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress the body listing on stdout and the line counts on stderr
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Suppress only the body listing on stdout
    #[arg(long, default_value_t = false)]
    pub no_echo_body: bool,

    /// Block count rule (line-total or body-length)
    #[arg(long, value_enum)]
    pub arithmetic: Option<BlockArithmetic>,

    /// Stop at the first failing input instead of continuing with the rest
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,

    /// Write a JSON summary of the run to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}
