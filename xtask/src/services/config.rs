use crate::error::{CodegenErrorExt, Result};
use config::{Config, Environment, File, Map};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration file read when `--config` is not given. Optional.
pub const DEFAULT_CONFIG_PATH: &str = "xtask/codegen.toml";

const ENV_PREFIX: &str = "COUNTRIES";

/// Settings for the country catalog generator.
///
/// Relative paths are resolved against the workspace root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Destination of the generated module.
    pub output_path: PathBuf,
    /// Repository URL recorded in the generated header.
    pub repo_url: String,
    /// ISO-3166 JSON source. The embedded dataset is used when unset.
    pub primary_source: Option<PathBuf>,
    /// Currency/capital JSON source. The embedded dataset is used when unset.
    pub alternate_source: Option<PathBuf>,
    /// Module template. The embedded template is used when unset.
    pub template: Option<PathBuf>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("crates/countries/src/generated/countries_data.rs"),
            repo_url: "https://github.com/AnatoliiShliakhto/countries".to_owned(),
            primary_source: None,
            alternate_source: None,
            template: None,
        }
    }
}

/// Loads [`CodegenConfig`] from a TOML file overlaid with `COUNTRIES__*` environment
/// variables (e.g. `COUNTRIES__OUTPUT_PATH`).
///
/// An explicit `path` must exist. Without one, `default_path` is read if present.
///
/// # Errors
/// Returns [`CodegenError::Config`](crate::error::CodegenError::Config) if an explicit file is
/// missing, or if a source is malformed or does not match [`CodegenConfig`].
pub fn load_config(path: Option<&Path>, default_path: &Path) -> Result<CodegenConfig> {
    load_config_with_env(path, default_path, None)
}

/// Like [`load_config`], but reads the `COUNTRIES__*` variables from `env` instead of the
/// process environment when it is given.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env(
    path: Option<&Path>,
    default_path: &Path,
    env: Option<Map<String, String>>,
) -> Result<CodegenConfig> {
    let (effective_path, required) = path.map_or((default_path, false), |p| (p, true));

    if required || effective_path.exists() {
        info!("Loading codegen config from {}", effective_path.display());
    } else {
        debug!(path = %effective_path.display(), "No codegen config file, using defaults");
    }

    Config::builder()
        .add_source(File::from(effective_path).required(required))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").source(env))
        .build()
        .context("Failed to build codegen config")?
        .try_deserialize::<CodegenConfig>()
        .context("Failed to deserialize codegen config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodegenError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_default_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = load_config(None, &dir.path().join("codegen.toml")).unwrap();

        assert_eq!(config, CodegenConfig::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("codegen.toml");
        fs::write(
            &path,
            "output_path = \"out/data.rs\"\nrepo_url = \"https://example.com/repo\"\nprimary_source = \"data/iso.json\"\n",
        )
        .unwrap();

        let config = load_config(Some(&path), Path::new("unused.toml")).unwrap();

        assert_eq!(config.output_path, PathBuf::from("out/data.rs"));
        assert_eq!(config.repo_url, "https://example.com/repo");
        assert_eq!(config.primary_source, Some(PathBuf::from("data/iso.json")));
        assert_eq!(config.alternate_source, None);
    }

    #[test]
    fn explicit_missing_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("absent.toml")), Path::new("unused.toml")).unwrap_err();

        assert!(matches!(err, CodegenError::Config { .. }));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("codegen.toml");
        fs::write(&path, "output_path = [").unwrap();

        assert!(matches!(load_config(Some(&path), &path), Err(CodegenError::Config { .. })));
    }

    fn env(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs.iter().map(|&(k, v)| (k.to_owned(), v.to_owned())).collect()
    }

    #[test]
    fn environment_overrides_file_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("codegen.toml");
        fs::write(&path, "output_path = \"out/file.rs\"\nrepo_url = \"https://file.example/repo\"\n").unwrap();

        let config = load_config_with_env(
            Some(&path),
            Path::new("unused.toml"),
            Some(env(&[
                ("COUNTRIES__REPO_URL", "https://env.example/repo"),
                ("COUNTRIES__OUTPUT_PATH", "out/env.rs"),
            ])),
        )
        .unwrap();

        assert_eq!(config.repo_url, "https://env.example/repo");
        assert_eq!(config.output_path, PathBuf::from("out/env.rs"));
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let dir = tempdir().unwrap();

        let config = load_config_with_env(
            None,
            &dir.path().join("codegen.toml"),
            Some(env(&[("REPO_URL", "https://elsewhere.example"), ("CARGO__REPO_URL", "x")])),
        )
        .unwrap();

        assert_eq!(config, CodegenConfig::default());
    }
}
