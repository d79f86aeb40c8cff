use std::path::Path;

use crate::core::bundle::Bundle;
use crate::error::{Error, Result};

/// Read the whole file at `path` as UTF-8 text.
pub fn read_bundle_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    String::from_utf8(bytes).map_err(|_| Error::NotUtf8 {
        path: path.to_path_buf(),
    })
}

/// Read and parse the bundle at `path`.
pub fn read_bundle(path: &Path) -> Result<Bundle> {
    let text = read_bundle_text(path)?;
    Bundle::parse(path, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_bundle_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("m.txt");
        fs::write(&path, "1 2\nx\ny\n").unwrap();

        let bundle = read_bundle(&path).unwrap();
        assert_eq!(bundle.header.row_count, 1);
        assert_eq!(bundle.body.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error_with_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.txt");
        let err = read_bundle(&path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bin.txt");
        fs::write(&path, [b'1', b' ', b'1', b'\n', 0xff, 0xfe]).unwrap();
        assert!(matches!(read_bundle(&path), Err(Error::NotUtf8 { .. })));
    }

    #[test]
    fn empty_file_is_empty_input() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.txt");
        fs::write(&path, "").unwrap();
        assert!(matches!(read_bundle(&path), Err(Error::EmptyInput { .. })));
    }
}
