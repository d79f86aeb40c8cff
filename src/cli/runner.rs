use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use matsplit::{SplitParams, split_bundles};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve splitting parameters: config file first, then flag overrides.
pub fn resolve_params(args: &CliArgs) -> Result<SplitParams, AppError> {
    let mut params = match &args.config {
        Some(path) => SplitParams::load_from_path(path)?,
        None => SplitParams::default(),
    };

    if args.quiet {
        params.echo_body = false;
        params.diagnostics = false;
    }
    if args.no_echo_body {
        params.echo_body = false;
    }
    if let Some(arithmetic) = args.arithmetic {
        params.arithmetic = arithmetic;
    }
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let params = resolve_params(&args)?;
    info!(
        "Splitting {} input(s), arithmetic: {}",
        args.inputs.len(),
        params.arithmetic
    );

    let report = split_bundles(args.inputs.as_slice(), &params, !args.fail_fast)
        .map_err(AppError::from)?;

    for failure in &report.failures {
        eprintln!("error [{}]: {}", failure.kind, failure.message);
    }

    info!("Splitting complete!");
    info!("Processed: {}", report.processed);
    info!("Blocks written: {}", report.blocks_written);
    info!("Errors: {}", report.errors);

    if let Some(path) = &args.report {
        report.save_json(path).map_err(|source| AppError::Report {
            path: path.clone(),
            source,
        })?;
        info!("Report written to {:?}", path);
    }

    if !report.is_success() {
        warn!("{} input(s) failed", report.errors);
        return Err(AppError::InputsFailed {
            failed: report.errors,
            total: args.inputs.len(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use matsplit::BlockArithmetic;
    use std::ffi::OsStr;
    use std::io::Write;

    #[test]
    fn defaults_keep_historical_output() {
        let args = CliArgs::try_parse_from(["matsplit", "a.txt"]).unwrap();
        let params = resolve_params(&args).unwrap();
        assert_eq!(params, SplitParams::default());
        assert_eq!(params.arithmetic, BlockArithmetic::BodyLength);
    }

    #[test]
    fn inputs_are_required() {
        assert!(CliArgs::try_parse_from(["matsplit"]).is_err());
    }

    #[test]
    fn flags_override_config_file() {
        let mut cfg = tempfile::NamedTempFile::new().unwrap();
        write!(cfg, r#"{{ "arithmetic": "line-total", "dir_suffix": ".blocks" }}"#).unwrap();
        let cfg_path = cfg.path().to_str().unwrap().to_string();

        let args = CliArgs::try_parse_from([
            "matsplit",
            "--config",
            cfg_path.as_str(),
            "--quiet",
            "--arithmetic",
            "body-length",
            "a.txt",
            "b.txt",
        ])
        .unwrap();
        let params = resolve_params(&args).unwrap();

        assert_eq!(args.inputs.len(), 2);
        assert!(!params.echo_body);
        assert!(!params.diagnostics);
        assert_eq!(params.arithmetic, BlockArithmetic::BodyLength);
        assert_eq!(params.dir_suffix, ".blocks");
    }

    #[test]
    fn no_echo_body_keeps_diagnostics() {
        let args = CliArgs::try_parse_from(["matsplit", "--no-echo-body", "a.txt"]).unwrap();
        let params = resolve_params(&args).unwrap();
        assert!(!params.echo_body);
        assert!(params.diagnostics);
    }

    #[test]
    fn run_fails_when_any_input_fails_but_still_splits_the_rest() {
        let tmp = tempfile::TempDir::new().unwrap();
        let bad = tmp.path().join("bad.txt");
        let good = tmp.path().join("good.txt");
        let report = tmp.path().join("report.json");
        std::fs::write(&bad, "").unwrap();
        std::fs::write(&good, "0 0\na\nb\n").unwrap();

        let args = CliArgs::try_parse_from([
            OsStr::new("matsplit"),
            OsStr::new("--quiet"),
            OsStr::new("--report"),
            report.as_os_str(),
            bad.as_os_str(),
            good.as_os_str(),
        ])
        .unwrap();

        assert!(run(args).is_err());
        assert!(tmp.path().join("good.txt.d/out_n_1").is_file());

        let json: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&report).unwrap()).unwrap();
        assert_eq!(json["errors"], 1);
        assert_eq!(json["failures"][0]["kind"], "EMPTY_INPUT");
    }
}
