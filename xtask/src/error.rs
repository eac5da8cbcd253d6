use std::borrow::Cow;
use std::path::PathBuf;

/// Result alias for the generation pipeline.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors raised while generating the country catalog.
///
/// Every failure is fatal to a run: sources and templates are static, so retrying with
/// the same input would only reproduce the same error.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// A data source could not be read.
    #[error("Load error{}: {source}", format_context(.context))]
    Load { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// A data source is not valid JSON or does not match its schema.
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The template is missing, malformed, or refers to unknown variables or filters.
    #[error("Template error{}: {message}", format_context(.context))]
    Template { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The rendered artifact is not valid Rust source.
    #[error("Format error{}: {source}", format_context(.context))]
    Format { source: syn::Error, context: Option<Cow<'static, str>> },

    /// The artifact could not be created or written.
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The codegen configuration could not be loaded.
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// The artifact on disk differs from a fresh rendering.
    #[error("Generated file is out of date{}: {}", format_context(.context), .path.display())]
    OutOfDate { path: PathBuf, context: Option<Cow<'static, str>> },
}

/// Attaches a human-readable context to a failed pipeline step.
pub trait CodegenErrorExt<T> {
    /// Wraps the error (if any) into a [`CodegenError`] carrying `context`.
    ///
    /// # Errors
    /// Returns the original error, converted and annotated.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T> CodegenErrorExt<T> for Result<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                CodegenError::Load { context: c, .. }
                | CodegenError::Parse { context: c, .. }
                | CodegenError::Template { context: c, .. }
                | CodegenError::Format { context: c, .. }
                | CodegenError::Io { context: c, .. }
                | CodegenError::Config { context: c, .. }
                | CodegenError::OutOfDate { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> CodegenErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| CodegenError::Io { source, context: Some(context.into()) })
    }
}

impl<T> CodegenErrorExt<T> for std::result::Result<T, serde_json::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| CodegenError::Parse { source, context: Some(context.into()) })
    }
}

impl<T> CodegenErrorExt<T> for std::result::Result<T, syn::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| CodegenError::Format { source, context: Some(context.into()) })
    }
}

impl<T> CodegenErrorExt<T> for std::result::Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| CodegenError::Config { source, context: Some(context.into()) })
    }
}

impl<T> CodegenErrorExt<T> for std::result::Result<T, liquid::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|e| CodegenError::Template {
            message: e.to_string().into(),
            context: Some(context.into()),
        })
    }
}

impl From<std::io::Error> for CodegenError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source, context: None }
    }
}

impl From<serde_json::Error> for CodegenError {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse { source, context: None }
    }
}

impl From<syn::Error> for CodegenError {
    fn from(source: syn::Error) -> Self {
        Self::Format { source, context: None }
    }
}

impl From<config::ConfigError> for CodegenError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

impl CodegenError {
    /// Builds a [`CodegenError::Template`] from a message.
    pub fn template(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Template { message: message.into(), context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_rendered_in_display() {
        let err: Result<()> = Err(CodegenError::template("Unknown variable 'foo'"));
        let err = err.context("Rendering countries template").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Template error (Rendering countries template): Unknown variable 'foo'"
        );
    }

    #[test]
    fn io_results_convert_with_context() {
        let res: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        let err = res.context("Writing output").unwrap_err();

        assert!(matches!(err, CodegenError::Io { context: Some(_), .. }));
        assert!(err.to_string().starts_with("IO error (Writing output)"));
    }

    #[test]
    fn json_errors_map_to_parse() {
        let err: CodegenError = serde_json::from_str::<Vec<u8>>("invalid json").unwrap_err().into();
        assert!(matches!(err, CodegenError::Parse { context: None, .. }));
    }
}
