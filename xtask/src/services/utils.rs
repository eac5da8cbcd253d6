use crate::error::{CodegenErrorExt, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the root directory of the project.
///
/// # Result
/// Returns the workspace root path as `PathBuf`.
///
/// # Errors
/// Returns an error if the manifest directory does not have a parent.
pub fn get_project_root() -> Result<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
        .context("Could not find project root from xtask manifest")
}

/// Creates the parent directory of `path` when it does not exist yet.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .context(format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

/// Escapes a value for use inside a Rust string literal.
#[must_use]
pub fn escape_str(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_str_handles_quotes_and_control_chars() {
        assert_eq!(escape_str(r#"Côte d'Ivoire"#), "Côte d'Ivoire");
        assert_eq!(escape_str(r#"a "b" \c"#), r#"a \"b\" \\c"#);
        assert_eq!(escape_str("line\nbreak\t"), "line\\nbreak\\t");
    }

    #[test]
    fn project_root_contains_xtask() {
        let root = get_project_root().unwrap();
        assert!(root.join("xtask").join("Cargo.toml").exists());
    }
}
