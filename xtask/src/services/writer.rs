use crate::error::{CodegenErrorExt, Result};
use crate::services::utils::ensure_parent_dir;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persists generated artifacts.
pub trait FileWriter {
    /// Writes `content` to `path`, replacing any previous file.
    ///
    /// # Errors
    /// Returns [`CodegenError::Io`](crate::error::CodegenError::Io) if the file cannot be
    /// created or written.
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;
}

/// Writes to the local filesystem through a sibling temporary file that is renamed over
/// the target, so a failed run never leaves a truncated artifact behind. The staging file
/// is synced before the rename and removed when either step fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFileWriter;

impl FileWriter for FsFileWriter {
    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        ensure_parent_dir(path)?;

        let staging = staging_path(path);
        debug!(path = %staging.display(), bytes = content.len(), "Writing staging file");

        let result = write_synced(&staging, content).and_then(|()| {
            fs::rename(&staging, path).context(format!("Failed to replace {}", path.display()))
        });

        if result.is_err() {
            // Best effort: the staging file is useless once the write or rename failed.
            let _ = fs::remove_file(&staging);
        }
        result
    }
}

fn write_synced(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).context(format!("Failed to create {}", path.display()))?;
    file.write_all(content).context(format!("Failed to write {}", path.display()))?;
    file.sync_all().context(format!("Failed to sync {}", path.display()))
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodegenError;
    use tempfile::tempdir;

    #[test]
    fn writes_and_replaces_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("countries_data.rs");

        FsFileWriter.write(&path, b"first").unwrap();
        FsFileWriter.write(&path, b"second").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second");
        assert!(!staging_path(&path).exists(), "staging file must not be left behind");
    }

    #[test]
    fn failed_write_keeps_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("countries_data.rs");
        fs::write(&path, b"previous").unwrap();

        // A directory where the staging file should go makes the write fail.
        fs::create_dir(staging_path(&path)).unwrap();

        let err = FsFileWriter.write(&path, b"next").unwrap_err();

        assert!(matches!(err, CodegenError::Io { .. }));
        assert_eq!(fs::read(&path).unwrap(), b"previous");
    }

    #[test]
    fn staging_file_is_hidden_sibling() {
        let staging = staging_path(Path::new("src/generated/countries_data.rs"));
        assert_eq!(staging, Path::new("src/generated/.countries_data.rs.tmp"));
    }

    #[test]
    fn failed_rename_removes_staging_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("countries_data.rs");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), b"occupied").unwrap();

        let err = FsFileWriter.write(&path, b"next").unwrap_err();

        assert!(err.to_string().contains("Failed to replace"), "{err}");
        assert!(!staging_path(&path).exists());
        assert!(path.join("keep.txt").exists());
    }
}
