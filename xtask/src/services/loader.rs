//! # Source Loaders
//!
//! Supplies the raw bytes of the two datasets. Loaders do not transform data; a failure
//! here aborts the run.

use crate::error::{CodegenError, Result};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const EMBEDDED_PRIMARY: &[u8] = include_bytes!("../../data/iso3166.json");
const EMBEDDED_ALTERNATE: &[u8] = include_bytes!("../../data/country_currencies.json");

/// Provides the bytes of the ISO-3166 dataset and of the currency/capital dataset.
pub trait DataLoader {
    /// Loads the primary (ISO-3166) dataset.
    ///
    /// # Errors
    /// Returns [`CodegenError::Load`] if the source cannot be read.
    fn load_primary(&self) -> Result<Cow<'static, [u8]>>;

    /// Loads the alternate (currency, capital, continent) dataset.
    ///
    /// # Errors
    /// Returns [`CodegenError::Load`] if the source cannot be read.
    fn load_alternate(&self) -> Result<Cow<'static, [u8]>>;
}

/// Serves the datasets compiled into the `xtask` binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedDataLoader;

impl DataLoader for EmbeddedDataLoader {
    fn load_primary(&self) -> Result<Cow<'static, [u8]>> {
        Ok(Cow::Borrowed(EMBEDDED_PRIMARY))
    }

    fn load_alternate(&self) -> Result<Cow<'static, [u8]>> {
        Ok(Cow::Borrowed(EMBEDDED_ALTERNATE))
    }
}

/// Reads the datasets from disk, falling back to the embedded copy for any path left unset.
#[derive(Debug, Default, Clone)]
pub struct FileDataLoader {
    primary: Option<PathBuf>,
    alternate: Option<PathBuf>,
}

impl FileDataLoader {
    #[must_use]
    pub const fn new(primary: Option<PathBuf>, alternate: Option<PathBuf>) -> Self {
        Self { primary, alternate }
    }

    fn read(
        path: Option<&Path>,
        fallback: fn() -> Result<Cow<'static, [u8]>>,
    ) -> Result<Cow<'static, [u8]>> {
        let Some(path) = path else {
            return fallback();
        };

        debug!(path = %path.display(), "Reading data source");
        fs::read(path).map(Cow::Owned).map_err(|source| CodegenError::Load {
            source,
            context: Some(format!("Failed to read {}", path.display()).into()),
        })
    }
}

impl DataLoader for FileDataLoader {
    fn load_primary(&self) -> Result<Cow<'static, [u8]>> {
        Self::read(self.primary.as_deref(), || EmbeddedDataLoader.load_primary())
    }

    fn load_alternate(&self) -> Result<Cow<'static, [u8]>> {
        Self::read(self.alternate.as_deref(), || EmbeddedDataLoader.load_alternate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_sources_are_present() {
        let primary = EmbeddedDataLoader.load_primary().unwrap();
        let alternate = EmbeddedDataLoader.load_alternate().unwrap();

        assert!(String::from_utf8_lossy(&primary).contains("United States of America"));
        assert!(String::from_utf8_lossy(&alternate).contains("USD"));
    }

    #[test]
    fn file_loader_reads_given_path_and_falls_back_otherwise() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();

        let loader = FileDataLoader::new(Some(file.path().to_path_buf()), None);

        assert_eq!(loader.load_primary().unwrap().as_ref(), b"[]");
        assert_eq!(loader.load_alternate().unwrap().as_ref(), EMBEDDED_ALTERNATE);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let loader = FileDataLoader::new(Some(PathBuf::from("/nonexistent/iso3166.json")), None);
        let err = loader.load_primary().unwrap_err();

        assert!(matches!(err, CodegenError::Load { .. }));
        assert!(err.to_string().contains("/nonexistent/iso3166.json"));
    }
}
