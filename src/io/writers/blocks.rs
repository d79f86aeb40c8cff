use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Output directory for `input`: the input path with `suffix` appended.
pub fn output_dir_for(input: &Path, suffix: &str) -> PathBuf {
    let mut dir = input.as_os_str().to_owned();
    dir.push(suffix);
    PathBuf::from(dir)
}

/// Create `dir` and any missing parents. Existing directories are reused.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

/// Write one block file, replacing any previous content.
pub fn write_block_file(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, bytes).map_err(|e| Error::io(&path, e))?;
    debug!("Wrote {} bytes to {:?}", bytes.len(), path);
    Ok(path)
}
