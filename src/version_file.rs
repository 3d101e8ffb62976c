use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{is_valid_version, Version};
use crate::error::{Result, VersionGateError};

/// Default name of the file holding the release version.
pub const DEFAULT_VERSION_FILE: &str = "VERSION";

/// Reads a version file and validates its trimmed content.
///
/// # Returns
/// * `Ok(Version)` - The file holds exactly one strict version
/// * `Err(VersionFileNotFound)` - The path does not exist
/// * `Err(InvalidVersionFile)` - The content is not a strict version
/// * `Err(ReadVersionFile)` - Any other I/O failure
pub fn read_version_file(path: impl AsRef<Path>) -> Result<Version> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => VersionGateError::VersionFileNotFound {
            path: path_str.clone(),
        },
        _ => VersionGateError::ReadVersionFile {
            path: path_str.clone(),
            source: e,
        },
    })?;

    let content = raw.trim();
    if !is_valid_version(content) {
        return Err(VersionGateError::InvalidVersionFile {
            path: path_str,
            content: content.to_string(),
        });
    }

    tracing::debug!(path = %path.display(), version = content, "read version file");
    Version::parse(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_reads_trimmed_version() {
        let file = file_with(" 1.0.0 \n");
        assert_eq!(read_version_file(file.path()).unwrap(), Version::new(1, 0, 0));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_version_file(dir.path().join("VERSION")).unwrap_err();
        assert!(matches!(err, VersionGateError::VersionFileNotFound { .. }));
        assert!(err.to_string().ends_with("file not found"));
    }

    #[test]
    fn test_invalid_content() {
        let file = file_with("1.0\n");
        let err = read_version_file(file.path()).unwrap_err();
        match err {
            VersionGateError::InvalidVersionFile { content, .. } => assert_eq!(content, "1.0"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = read_version_file(dir.path()).unwrap_err();
        assert!(matches!(err, VersionGateError::ReadVersionFile { .. }));
    }

    #[test]
    fn test_reads_components_wider_than_u64() {
        let file = file_with("20260101000000000000.0.0\n");
        let version = read_version_file(file.path()).unwrap();
        assert_eq!(version.to_string(), "20260101000000000000.0.0");
    }

    #[test]
    fn test_empty_file_is_invalid() {
        let file = file_with("");
        assert!(matches!(
            read_version_file(file.path()),
            Err(VersionGateError::InvalidVersionFile { .. })
        ));
    }
}
