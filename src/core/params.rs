use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::BlockArithmetic;

/// Splitting parameters suitable for config files and CLI overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitParams {
    /// Print the residual body lines of each input to stdout
    pub echo_body: bool,
    /// Print line total and block geometry of each input to stderr
    pub diagnostics: bool,
    pub arithmetic: BlockArithmetic,
    /// Appended to the input path to name its output directory
    pub dir_suffix: String,
    /// Output file name prefix, followed by the 1-based block index
    pub file_prefix: String,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            echo_body: true,
            diagnostics: true,
            arithmetic: BlockArithmetic::BodyLength,
            dir_suffix: ".d".to_string(),
            file_prefix: "out_n_".to_string(),
        }
    }
}

impl SplitParams {
    /// Load parameters from a JSON file. Missing keys keep their defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Name of the output file holding block `index` (0-based).
    pub fn block_file_name(&self, index: usize) -> String {
        format!("{}{}", self.file_prefix, index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_historical_behavior() {
        let params = SplitParams::default();
        assert!(params.echo_body);
        assert!(params.diagnostics);
        assert_eq!(params.arithmetic, BlockArithmetic::BodyLength);
        assert_eq!(params.block_file_name(0), "out_n_1");
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "echo_body": false, "arithmetic": "line-total" }}"#).unwrap();

        let params = SplitParams::load_from_path(file.path()).unwrap();
        assert!(!params.echo_body);
        assert!(params.diagnostics);
        assert_eq!(params.arithmetic, BlockArithmetic::LineTotal);
        assert_eq!(params.dir_suffix, ".d");
    }

    #[test]
    fn invalid_config_reports_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = SplitParams::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert_eq!(err.path(), file.path());
    }

    #[test]
    fn missing_config_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SplitParams::load_from_path(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
