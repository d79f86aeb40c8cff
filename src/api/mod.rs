//! High-level, ergonomic library API: split a bundle file to its output
//! directory, plan a bundle held in memory, and batch helpers for several
//! inputs. Prefer these entrypoints over the low-level `core` and `io` modules.
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::core::bundle::Bundle;
use crate::core::params::SplitParams;
use crate::core::plan::{SplitPlan, render_block};
use crate::error::{Error, ErrorKind, Result};
use crate::io::{ensure_output_dir, output_dir_for, read_bundle, write_block_file};

/// Result of splitting one input file
#[derive(Debug, Clone, Serialize)]
pub struct SplitOutcome {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Written block files, in block order
    pub files: Vec<PathBuf>,
    pub plan: SplitPlan,
}

/// Result of in-memory planning
#[derive(Debug, Clone)]
pub struct SplitBuffers {
    pub bundle: Bundle,
    pub plan: SplitPlan,
    /// Header plus block lines, one buffer per block
    pub blocks: Vec<Vec<u8>>,
}

/// Parse and plan a bundle held in memory (no disk I/O).
/// `label` stands in for the input path in errors.
pub fn plan_bundle_text(label: &Path, text: &str, params: &SplitParams) -> Result<SplitBuffers> {
    let bundle = Bundle::parse(label, text)?;
    let plan = SplitPlan::for_bundle(&bundle, params.arithmetic);
    let blocks = plan
        .blocks(&bundle)
        .map(|lines| render_block(&bundle.header.raw, lines))
        .collect();
    Ok(SplitBuffers {
        bundle,
        plan,
        blocks,
    })
}

/// Quote one line for the body listing: single quotes unless the line holds a
/// single quote and no double quote; backslash, the active quote, tabs, line
/// breaks and other non-printing characters are escaped.
fn quote_line(line: &str) -> String {
    let quote = if line.contains('\'') && !line.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(line.len() + 2);
    out.push(quote);
    for c in line.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() || (c.is_whitespace() && c != ' ') => {
                let code = u32::from(c);
                if code < 0x100 {
                    out.push_str(&format!("\\x{code:02x}"));
                } else if code < 0x10000 {
                    out.push_str(&format!("\\u{code:04x}"));
                } else {
                    out.push_str(&format!("\\U{code:08x}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Bracketed, comma-separated listing of quoted body lines.
fn body_listing(body: &[String]) -> String {
    let quoted: Vec<String> = body.iter().map(|l| quote_line(l)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Write the per-input diagnostics: geometry counts to `err`, the residual
/// body lines to `out`. Each half is gated by its flag in `params`.
pub fn write_diagnostics<O: Write, E: Write>(
    bundle: &Bundle,
    plan: &SplitPlan,
    params: &SplitParams,
    out: &mut O,
    err: &mut E,
) -> std::io::Result<()> {
    if params.echo_body {
        writeln!(out, "{}", body_listing(&bundle.body))?;
    }
    if params.diagnostics {
        writeln!(err, "no. of lines =  {}", plan.line_total)?;
        writeln!(err, "matrix length =  {}", plan.matrix_length)?;
        writeln!(err, "matrix width =  {}", plan.col_count)?;
    }
    Ok(())
}

/// Split the bundle at `input` into one file per block under `<input><dir_suffix>/`.
pub fn split_bundle(input: &Path, params: &SplitParams) -> Result<SplitOutcome> {
    info!("Splitting: {:?}", input);

    let bundle = read_bundle(input)?;
    let plan = SplitPlan::for_bundle(&bundle, params.arithmetic);

    if params.echo_body || params.diagnostics {
        write_diagnostics(
            &bundle,
            &plan,
            params,
            &mut std::io::stdout().lock(),
            &mut std::io::stderr().lock(),
        )
        .map_err(|e| Error::io(input, e))?;
    }

    if plan.dropped_lines > 0 {
        warn!(
            "{:?}: {} trailing body line(s) do not fill a block of {} and are dropped",
            input, plan.dropped_lines, plan.matrix_length
        );
    }

    let output_dir = output_dir_for(input, &params.dir_suffix);
    ensure_output_dir(&output_dir)?;

    let mut files = Vec::with_capacity(plan.block_count);
    for (i, lines) in plan.blocks(&bundle).enumerate() {
        let bytes = render_block(&bundle.header.raw, lines);
        files.push(write_block_file(
            &output_dir,
            &params.block_file_name(i),
            &bytes,
        )?);
    }

    info!(
        "Wrote {} block(s) of {} line(s) to {:?}",
        files.len(),
        plan.matrix_length,
        output_dir
    );

    Ok(SplitOutcome {
        input: input.to_path_buf(),
        output_dir,
        files,
        plan,
    })
}

/// One input that failed during a batch
#[derive(Debug, Clone, Serialize)]
pub struct InputFailure {
    pub path: PathBuf,
    pub kind: ErrorKind,
    pub message: String,
}

impl InputFailure {
    fn from_error(path: &Path, e: &Error) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

/// Batch processing report
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub processed: usize,
    pub errors: usize,
    pub blocks_written: usize,
    pub dropped_lines: usize,
    pub outcomes: Vec<SplitOutcome>,
    pub failures: Vec<InputFailure>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BatchReport {
    fn start() -> Self {
        let now = Utc::now();
        Self {
            processed: 0,
            errors: 0,
            blocks_written: 0,
            dropped_lines: 0,
            outcomes: Vec::new(),
            failures: Vec::new(),
            started_at: now,
            finished_at: now,
        }
    }

    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    /// Write the report as pretty JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_vec_pretty(self)
            .map_err(|e| Error::io(path, std::io::Error::other(e)))?;
        std::fs::write(path, json).map_err(|e| Error::io(path, e))
    }
}

/// Split every input in order.
/// If `continue_on_error` is true, failures are recorded in the report and processing continues; otherwise, the first error is returned.
pub fn split_bundles<P: AsRef<Path>>(
    inputs: &[P],
    params: &SplitParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    let mut report = BatchReport::start();

    for input in inputs {
        let input = input.as_ref();
        match split_bundle(input, params) {
            Ok(outcome) => {
                report.processed += 1;
                report.blocks_written += outcome.files.len();
                report.dropped_lines += outcome.plan.dropped_lines;
                report.outcomes.push(outcome);
            }
            Err(e) => {
                warn!("Error splitting {:?}: {}", input, e);
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
                report.failures.push(InputFailure::from_error(input, &e));
            }
        }
    }

    report.finished_at = Utc::now();
    Ok(report)
}
