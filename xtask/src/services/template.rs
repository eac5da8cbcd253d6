//! # Templates
//!
//! The generated module is rendered with [Liquid](https://shopify.github.io/liquid/). The
//! standard filters are available, plus `rust_str`, which escapes a value for use inside
//! a Rust string literal.

use crate::error::{CodegenError, CodegenErrorExt, Result};
use crate::services::utils::escape_str;
use liquid_core::{Display_filter, Filter, FilterReflection, ParseFilter, Runtime, Value, ValueView};
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

const EMBEDDED_TEMPLATE: &str = include_str!("../../templates/countries_data.rs.tmpl");

/// Provides the text of the countries module template.
pub trait TemplateProvider {
    /// Returns the template source.
    ///
    /// # Errors
    /// Returns [`CodegenError::Template`] if the template cannot be obtained.
    fn template(&self) -> Result<Cow<'static, str>>;
}

/// Serves the template compiled into the `xtask` binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTemplateProvider;

impl TemplateProvider for DefaultTemplateProvider {
    fn template(&self) -> Result<Cow<'static, str>> {
        Ok(Cow::Borrowed(EMBEDDED_TEMPLATE))
    }
}

/// Reads the template from disk, or uses the embedded one when no path is set.
#[derive(Debug, Default, Clone)]
pub struct FileTemplateProvider {
    path: Option<PathBuf>,
}

impl FileTemplateProvider {
    #[must_use]
    pub const fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl TemplateProvider for FileTemplateProvider {
    fn template(&self) -> Result<Cow<'static, str>> {
        let Some(path) = &self.path else {
            return DefaultTemplateProvider.template();
        };

        fs::read_to_string(path).map(Cow::Owned).map_err(|e| CodegenError::Template {
            message: e.to_string().into(),
            context: Some(format!("Failed to read template {}", path.display()).into()),
        })
    }
}

/// Renders `source` against `globals`.
///
/// # Errors
/// Returns [`CodegenError::Template`] if the template is empty, does not parse, or refers
/// to a variable or filter that does not exist.
pub fn render(source: &str, globals: &liquid::Object) -> Result<String> {
    if source.trim().is_empty() {
        return Err(CodegenError::template("Template is empty"));
    }

    let parser = liquid::ParserBuilder::with_stdlib()
        .filter(RustStr)
        .build()
        .context("Failed to build template parser")?;

    parser
        .parse(source)
        .context("Failed to parse countries template")?
        .render(globals)
        .context("Failed to render countries template")
}

#[derive(Clone, ParseFilter, FilterReflection)]
#[filter(
    name = "rust_str",
    description = "Escapes a value for use inside a Rust string literal.",
    parsed(RustStrFilter)
)]
struct RustStr;

#[derive(Debug, Default, Display_filter)]
#[name = "rust_str"]
struct RustStrFilter;

impl Filter for RustStrFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> liquid_core::Result<Value> {
        Ok(Value::scalar(escape_str(input.to_kstr().as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liquid::object;

    #[test]
    fn renders_loops_and_filters() {
        let globals = object!({ "names": ["Åland Islands", "Côte d'Ivoire"] });
        let source = "{%- for name in names %}\n({{ name | downcase }}, {{ forloop.index0 }})\n{%- endfor %}";

        let out = render(source, &globals).unwrap();

        assert_eq!(out, "\n(åland islands, 0)\n(côte d'ivoire, 1)");
    }

    #[test]
    fn rust_str_escapes_quotes_and_control_chars() {
        let globals = object!({ "value": "a \"b\" \\c\n" });

        let out = render("\"{{ value | rust_str }}\"", &globals).unwrap();

        assert_eq!(out, r#""a \"b\" \\c\n""#);
    }

    #[test]
    fn raw_blocks_keep_braces() {
        let out = render("{% raw %}format!(\"{{}}\", x){% endraw %}", &object!({})).unwrap();
        assert_eq!(out, "format!(\"{{}}\", x)");
    }

    #[test]
    fn unknown_variable_is_a_template_error() {
        let err = render("{{ missing }}", &object!({})).unwrap_err();
        assert!(matches!(err, CodegenError::Template { .. }), "{err}");
    }

    #[test]
    fn unknown_filter_and_bad_syntax_are_template_errors() {
        let globals = object!({ "x": "1" });

        assert!(matches!(render("{{ x | shout }}", &globals), Err(CodegenError::Template { .. })));
        assert!(matches!(render("{% for x in %}", &globals), Err(CodegenError::Template { .. })));
    }

    #[test]
    fn empty_template_is_rejected() {
        assert!(matches!(render("  \n", &object!({})), Err(CodegenError::Template { .. })));
    }

    #[test]
    fn missing_template_file_is_a_template_error() {
        let provider = FileTemplateProvider::new(Some(PathBuf::from("/nonexistent/countries.tmpl")));
        assert!(matches!(provider.template(), Err(CodegenError::Template { .. })));
    }
}
