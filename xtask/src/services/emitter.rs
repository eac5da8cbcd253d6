//! # Code Emitter
//!
//! Renders the merged catalog and its capital index through the module template, then
//! validates the result as Rust source.

use crate::error::{CodegenErrorExt, Result};
use crate::models::country::{CapitalIndexEntry, CountryRecord};
use crate::services::template;
use fxhash::FxHashSet;
use serde::Serialize;

/// Everything the module template can refer to.
#[derive(Debug, Serialize)]
struct CatalogContext<'a> {
    repo_url: String,
    countries: &'a [CountryRecord],
    capitals: &'a [CapitalIndexEntry],
    alpha2_codes: Vec<&'a str>,
    alpha3_codes: Vec<&'a str>,
}

/// Renders the generated module.
///
/// The template loops over `countries` in catalog order to build the record table and
/// the name, alpha-2, alpha-3, code and ISO-3166-2 tables, without deduplication. The
/// capital table is taken as-is from `capitals`.
///
/// # Errors
/// Returns [`CodegenError::Template`](crate::error::CodegenError::Template) when the
/// template is malformed and [`CodegenError::Format`](crate::error::CodegenError::Format)
/// when the rendered text is not valid Rust.
pub fn emit(
    countries: &[CountryRecord],
    capitals: &[CapitalIndexEntry],
    repo_url: &str,
    template_source: &str,
) -> Result<String> {
    let context = CatalogContext {
        repo_url: repo_url.replace(['\r', '\n'], " "),
        countries,
        capitals,
        alpha2_codes: constant_names(countries.iter().map(|c| c.alpha2.as_str())),
        alpha3_codes: constant_names(countries.iter().map(|c| c.alpha3.as_str())),
    };
    let globals = liquid::to_object(&context).context("Failed to build template context")?;

    let rendered = template::render(template_source, &globals)?;
    format_source(&rendered)
}

/// Checks that `source` parses as a Rust file and trims the whitespace around it, ending
/// the file with exactly one newline. Everything between the first and last character
/// is kept as rendered.
///
/// # Errors
/// Returns [`CodegenError::Format`](crate::error::CodegenError::Format) if `source` is not
/// valid Rust.
pub fn format_source(source: &str) -> Result<String> {
    syn::parse_file(source).context("Generated source is not valid Rust")?;
    let mut out = source.trim().to_owned();
    out.push('\n');
    Ok(out)
}

// Codes that cannot form an identifier, and repeats, are left out.
fn constant_names<'a>(codes: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = FxHashSet::default();
    codes.filter(|code| is_constant_name(code) && seen.insert(*code)).collect()
}

fn is_constant_name(code: &str) -> bool {
    code.starts_with(|c: char| c.is_ascii_uppercase())
        && code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::template::{DefaultTemplateProvider, TemplateProvider};

    fn country(alpha2: &str, alpha3: &str, name: &str, capital: &str) -> CountryRecord {
        CountryRecord {
            alpha2: alpha2.to_owned(),
            alpha3: alpha3.to_owned(),
            name: name.to_owned(),
            country_code: "999".to_owned(),
            iso_3166_2: format!("ISO 3166-2:{alpha2}"),
            capital: capital.to_owned(),
            ..CountryRecord::default()
        }
    }

    fn emit_default(countries: &[CountryRecord], capitals: &[CapitalIndexEntry]) -> Result<String> {
        let template = DefaultTemplateProvider.template()?;
        emit(countries, capitals, "https://github.com/test/repo", &template)
    }

    #[test]
    fn emits_catalog_indices_and_constants() {
        let countries = vec![country("TC", "TST", "Test Country", "Test Capital")];
        let capitals = vec![CapitalIndexEntry { key: "test capital".to_owned(), index: 0 }];

        let code = emit_default(&countries, &capitals).unwrap();

        assert!(code.starts_with("//! Auto-generated by `cargo xtask codegen countries`."));
        assert!(code.contains("//! Source: https://github.com/test/repo"));
        assert!(code.contains("        name: \"Test Country\",\n"));
        assert!(code.contains("    (\"test country\", 0),\n"));
        assert!(code.contains("    (\"TC\", 0),\n"));
        assert!(code.contains("    (\"ISO 3166-2:TC\", 0),\n"));
        assert!(code.contains("    (\"test capital\", 0),\n"));
        assert!(code.contains("    pub const TC: &str = \"TC\";\n"));
        assert!(code.contains("    pub const TST: &str = \"TST\";\n"));
        assert!(code.ends_with("}\n"));
    }

    #[test]
    fn duplicate_keys_are_emitted_in_catalog_order() {
        let countries = vec![
            country("AA", "AAA", "Twin", "One"),
            country("BB", "BBB", "Twin", "Two"),
        ];

        let code = emit_default(&countries, &[]).unwrap();
        let first = code.find("(\"twin\", 0)").unwrap();
        let second = code.find("(\"twin\", 1)").unwrap();

        assert!(first < second);
    }

    #[test]
    fn quotes_in_values_are_escaped() {
        let countries = vec![country("QQ", "QQQ", r#"The "Quoted" Land"#, "")];

        let code = emit_default(&countries, &[]).unwrap();

        assert!(code.contains(r#"name: "The \"Quoted\" Land","#));
    }

    #[test]
    fn codes_without_identifier_form_are_not_constants() {
        let countries = vec![country("", "", "Nowhere", ""), country("1A", "X-Y", "Odd", "")];

        let code = emit_default(&countries, &[]).unwrap();

        assert!(!code.contains("pub const 1A"));
        assert!(!code.contains("pub const X-Y"));
        assert!(!code.contains("pub const :"));
    }

    #[test]
    fn output_is_deterministic() {
        let countries = vec![
            country("AA", "AAA", "Alpha", "Acity"),
            country("BB", "BBB", "Beta", "Bcity"),
        ];
        let capitals = vec![
            CapitalIndexEntry { key: "acity".to_owned(), index: 0 },
            CapitalIndexEntry { key: "bcity".to_owned(), index: 1 },
        ];

        assert_eq!(emit_default(&countries, &capitals).unwrap(), emit_default(&countries, &capitals).unwrap());
    }

    #[test]
    fn malformed_template_output_is_a_format_error() {
        let err = emit(&[], &[], "url", "//! {{ repo_url }}\nfn broken(").unwrap_err();
        assert!(matches!(err, crate::error::CodegenError::Format { .. }));
    }

    #[test]
    fn template_with_unknown_variable_is_a_template_error() {
        let err = emit(&[], &[], "url", "//! {{ repo_urls }}\n").unwrap_err();
        assert!(matches!(err, crate::error::CodegenError::Template { .. }));
    }

    #[test]
    fn custom_template_sees_the_same_context() {
        let countries = vec![country("TC", "TST", "Test Country", "Test Capital")];
        let template = "pub static N: usize = {{ countries | size }};\n\
                        pub static C: &str = \"{{ alpha3_codes | join: \",\" }}\";";

        let code = emit(&countries, &[], "url", template).unwrap();

        assert_eq!(code, "pub static N: usize = 1;\npub static C: &str = \"TST\";\n");
    }

    #[test]
    fn string_literals_are_kept_verbatim() {
        let source = "pub const S: &str = \"line one   \n\n\n\nline two\";\n";
        assert_eq!(format_source(source).unwrap(), source);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_to_one_newline() {
        assert_eq!(format_source("\n\nfn a() {}\n\n\nfn b() {}  \n\n").unwrap(), "fn a() {}\n\n\nfn b() {}\n");
    }
}
