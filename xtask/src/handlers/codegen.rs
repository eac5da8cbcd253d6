use crate::error::{CodegenError, CodegenErrorExt, Result};
use crate::models::args::CountriesArgs;
use crate::models::country::{AlternateRecord, CapitalIndexEntry, CountryRecord};
use crate::services::config::{DEFAULT_CONFIG_PATH, load_config};
use crate::services::emitter;
use crate::services::loader::{DataLoader, FileDataLoader};
use crate::services::template::{FileTemplateProvider, TemplateProvider};
use crate::services::utils::get_project_root;
use crate::services::writer::{FileWriter, FsFileWriter};
use fxhash::FxHashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

// --- Public API ---

/// Regenerates the country catalog module of the `countries` crate.
///
/// Settings are layered: CLI arguments win over the configuration file and `COUNTRIES__*`
/// environment variables, which win over the built-in defaults. Paths from the
/// configuration are relative to the workspace root; CLI paths to the working directory.
///
/// With `--check`, nothing is written and the rendered module is compared to the file on
/// disk instead.
///
/// # Result
/// The rendered [`Artifact`].
///
/// # Errors
/// Fails on any pipeline error (see [`CodegenError`]), or with
/// [`CodegenError::OutOfDate`] when `--check` finds a stale or missing file.
pub fn codegen_countries(args: &CountriesArgs) -> Result<Artifact> {
    let root = get_project_root()?;
    let config = load_config(args.config.as_deref(), &root.join(DEFAULT_CONFIG_PATH))?;

    let from_config = |path: Option<PathBuf>| path.map(|p| root.join(p));
    let primary = args.primary.clone().or_else(|| from_config(config.primary_source));
    let alternate = args.alternate.clone().or_else(|| from_config(config.alternate_source));
    let template = args.template.clone().or_else(|| from_config(config.template));
    let output_path = args.output.clone().unwrap_or_else(|| root.join(&config.output_path));
    let repo_url = args.repo_url.clone().unwrap_or(config.repo_url);

    let generator = Generator::new(
        GeneratorConfig { output_path, repo_url },
        FileDataLoader::new(primary, alternate),
        FsFileWriter,
        FileTemplateProvider::new(template),
    );

    debug!(path = %generator.output_path().display(), check = args.check, "Country codegen");
    if !args.check {
        return generator.generate();
    }

    let artifact = generator.render()?;
    verify(&artifact)?;
    Ok(artifact)
}

/// Compares a rendered artifact with the file at its path.
///
/// # Errors
/// Returns [`CodegenError::OutOfDate`] if the file is missing or differs, and
/// [`CodegenError::Io`] if it exists but cannot be read.
pub fn verify(artifact: &Artifact) -> Result<()> {
    let current = match fs::read(&artifact.path) {
        Ok(bytes) => Some(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            return Err(e).context(format!("Failed to read {}", artifact.path.display()));
        },
    };

    if current.as_deref() != Some(artifact.source.as_bytes()) {
        warn!(path = %artifact.path.display(), "Country catalog is out of date");
        return Err(CodegenError::OutOfDate {
            path: artifact.path.clone(),
            context: Some("run `cargo xtask codegen countries`".into()),
        });
    }

    info!(path = %artifact.path.display(), "Country catalog is up to date");
    Ok(())
}

/// Where and how the generated module is produced.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub output_path: PathBuf,
    pub repo_url: String,
}

/// A rendered country module and what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub source: String,
    pub countries: usize,
    pub enriched: usize,
    pub capitals: usize,
}

/// Runs the load, parse, merge, index and emit steps over pluggable sources and sinks.
#[derive(Debug)]
pub struct Generator<L, W, T> {
    config: GeneratorConfig,
    loader: L,
    writer: W,
    templates: T,
}

impl<L, W, T> Generator<L, W, T>
where
    L: DataLoader,
    W: FileWriter,
    T: TemplateProvider,
{
    pub const fn new(config: GeneratorConfig, loader: L, writer: W, templates: T) -> Self {
        Self { config, loader, writer, templates }
    }

    /// Loads and parses the ISO-3166 dataset.
    ///
    /// # Errors
    /// Returns [`CodegenError::Load`] or [`CodegenError::Parse`].
    pub fn load_countries(&self) -> Result<Vec<CountryRecord>> {
        parse_primary(&self.loader.load_primary()?)
    }

    /// Loads and parses the currency/capital dataset.
    ///
    /// # Errors
    /// Returns [`CodegenError::Load`] or [`CodegenError::Parse`].
    pub fn load_alternates(&self) -> Result<Vec<AlternateRecord>> {
        parse_alternate(&self.loader.load_alternate()?)
    }

    /// Produces the module source without writing it.
    ///
    /// # Errors
    /// Propagates the first failing step.
    pub fn render(&self) -> Result<Artifact> {
        let mut countries = self.load_countries()?;
        let alternates = self.load_alternates()?;
        debug!(countries = countries.len(), alternates = alternates.len(), "Sources parsed");

        let enriched = merge(&mut countries, &alternates);
        if enriched < countries.len() {
            debug!(missing = countries.len() - enriched, "Countries without alternate data");
        }

        let capitals = build_capital_index(&countries);
        let template = self.templates.template()?;
        let source = emitter::emit(&countries, &capitals, &self.config.repo_url, &template)?;

        info!(
            countries = countries.len(),
            enriched,
            capitals = capitals.len(),
            "Rendered country catalog"
        );

        Ok(Artifact {
            path: self.config.output_path.clone(),
            source,
            countries: countries.len(),
            enriched,
            capitals: capitals.len(),
        })
    }

    /// Renders the module and writes it to the configured output path.
    ///
    /// # Errors
    /// Propagates the first failing step, including the write.
    pub fn generate(&self) -> Result<Artifact> {
        let artifact = self.render()?;
        self.writer.write(&artifact.path, artifact.source.as_bytes())?;
        info!(path = %artifact.path.display(), bytes = artifact.source.len(), "Country catalog written");
        Ok(artifact)
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.config.output_path
    }
}

// --- Logic: Parsing ---

/// Decodes the ISO-3166 dataset, keeping the record order of the source.
///
/// # Errors
/// Returns [`CodegenError::Parse`] if `data` is not a JSON array of country objects.
pub fn parse_primary(data: &[u8]) -> Result<Vec<CountryRecord>> {
    serde_json::from_slice(data).context("Failed to unmarshal countries data")
}

/// Decodes the currency/capital dataset.
///
/// # Errors
/// Returns [`CodegenError::Parse`] if `data` is not a JSON array of country objects.
pub fn parse_alternate(data: &[u8]) -> Result<Vec<AlternateRecord>> {
    serde_json::from_slice(data).context("Failed to unmarshal currency data")
}

// --- Logic: Merge & Index ---

/// Copies capital, continent and currency from the first alternate record whose country
/// code equals each country's alpha-2 code. Countries without a match keep empty fields.
///
/// Returns the number of enriched countries.
pub fn merge(countries: &mut [CountryRecord], alternates: &[AlternateRecord]) -> usize {
    let mut enriched = 0;
    for country in countries.iter_mut() {
        if let Some(alt) = alternates.iter().find(|alt| alt.country_code == country.alpha2) {
            country.capital.clone_from(&alt.capital);
            country.continent_name.clone_from(&alt.continent_name);
            country.currency_code.clone_from(&alt.currency_code);
            enriched += 1;
        }
    }
    enriched
}

/// Maps each lowercased, non-empty capital to the position of the first country that has
/// it. Entries are sorted by key.
#[must_use]
pub fn build_capital_index(countries: &[CountryRecord]) -> Vec<CapitalIndexEntry> {
    let mut seen = FxHashSet::default();
    let mut entries: Vec<CapitalIndexEntry> = countries
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.capital.is_empty())
        .filter_map(|(index, c)| {
            let key = c.capital.to_lowercase();
            if seen.insert(key.clone()) {
                Some(CapitalIndexEntry { key, index })
            } else {
                debug!(capital = %c.capital, index, "Capital already indexed, keeping first country");
                None
            }
        })
        .collect();

    entries.sort_by(|a, b| a.key.cmp(&b.key));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::template::DefaultTemplateProvider;
    use std::borrow::Cow;
    use std::cell::RefCell;

    const PRIMARY: &str = r#"[
        {"name": "Test Country", "alpha-2": "TC", "alpha-3": "TST", "country-code": "999", "iso_3166-2": "ISO 3166-2:TC"},
        {"name": "Another Country", "alpha-2": "AC", "alpha-3": "ANO", "country-code": "998", "iso_3166-2": "ISO 3166-2:AC"}
    ]"#;

    const ALTERNATE: &str = r#"[
        {"countryCode": "TC", "countryName": "Test Country", "currencyCode": "TST", "population": "1000", "capital": "Test Capital", "continentName": "Test Continent"},
        {"countryCode": "AC", "countryName": "Another Country", "currencyCode": "ANO", "population": "2000", "capital": "Another Capital", "continentName": "Another Continent"}
    ]"#;

    struct MemoryLoader {
        primary: &'static str,
        alternate: &'static str,
    }

    impl DataLoader for MemoryLoader {
        fn load_primary(&self) -> Result<Cow<'static, [u8]>> {
            Ok(Cow::Borrowed(self.primary.as_bytes()))
        }

        fn load_alternate(&self) -> Result<Cow<'static, [u8]>> {
            Ok(Cow::Borrowed(self.alternate.as_bytes()))
        }
    }

    struct FailingLoader;

    impl DataLoader for FailingLoader {
        fn load_primary(&self) -> Result<Cow<'static, [u8]>> {
            Err(CodegenError::Load { source: std::io::Error::other("source unavailable"), context: None })
        }

        fn load_alternate(&self) -> Result<Cow<'static, [u8]>> {
            Ok(Cow::Borrowed(b"[]"))
        }
    }

    #[derive(Default)]
    struct MemoryWriter {
        files: RefCell<Vec<(PathBuf, Vec<u8>)>>,
    }

    impl FileWriter for MemoryWriter {
        fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
            self.files.borrow_mut().push((path.to_path_buf(), content.to_vec()));
            Ok(())
        }
    }

    struct StaticTemplate(&'static str);

    impl TemplateProvider for StaticTemplate {
        fn template(&self) -> Result<Cow<'static, str>> {
            Ok(Cow::Borrowed(self.0))
        }
    }

    fn generator<L: DataLoader, T: TemplateProvider>(
        loader: L,
        templates: T,
    ) -> Generator<L, MemoryWriter, T> {
        Generator::new(
            GeneratorConfig {
                output_path: PathBuf::from("out/countries_data.rs"),
                repo_url: "https://github.com/test/repo".to_owned(),
            },
            loader,
            MemoryWriter::default(),
            templates,
        )
    }

    fn country(alpha2: &str, capital: &str) -> CountryRecord {
        CountryRecord { alpha2: alpha2.to_owned(), capital: capital.to_owned(), ..CountryRecord::default() }
    }

    #[test]
    fn parse_primary_reads_records_in_order() {
        let countries = parse_primary(PRIMARY.as_bytes()).unwrap();

        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].name, "Test Country");
        assert_eq!(countries[0].alpha3, "TST");
        assert_eq!(countries[1].country_code, "998");
        assert_eq!(countries[1].iso_3166_2, "ISO 3166-2:AC");
        assert!(countries[0].capital.is_empty());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = parse_primary(b"{ not json").unwrap_err();

        assert!(matches!(err, CodegenError::Parse { .. }));
        assert!(err.to_string().contains("Failed to unmarshal countries data"));
        assert!(matches!(parse_alternate(b"{}"), Err(CodegenError::Parse { .. })));
    }

    #[test]
    fn merge_copies_alternate_fields_by_alpha2() {
        let mut countries = parse_primary(PRIMARY.as_bytes()).unwrap();
        let alternates = parse_alternate(ALTERNATE.as_bytes()).unwrap();

        assert_eq!(merge(&mut countries, &alternates), 2);

        assert_eq!(countries[0].capital, "Test Capital");
        assert_eq!(countries[0].continent_name, "Test Continent");
        assert_eq!(countries[0].currency_code, "TST");
        assert_eq!(countries[1].capital, "Another Capital");
        assert_eq!(countries[1].continent_name, "Another Continent");
        assert_eq!(countries[1].currency_code, "ANO");
    }

    #[test]
    fn merge_uses_first_matching_alternate_and_skips_unmatched() {
        let mut countries = vec![country("TC", ""), country("ZZ", "")];
        let alternates = vec![
            AlternateRecord { country_code: "TC".into(), capital: "First".into(), ..Default::default() },
            AlternateRecord { country_code: "TC".into(), capital: "Second".into(), ..Default::default() },
        ];

        assert_eq!(merge(&mut countries, &alternates), 1);
        assert_eq!(countries[0].capital, "First");
        assert_eq!(countries[1], country("ZZ", ""));
    }

    #[test]
    fn capital_index_is_lowercased_deduplicated_and_sorted() {
        let countries = vec![
            country("US", "Washington"),
            country("CA", "Ottawa"),
            country("DE", "Berlin"),
            country("AQ", ""),
            country("XX", "Washington"),
        ];

        let index = build_capital_index(&countries);

        assert_eq!(
            index,
            vec![
                CapitalIndexEntry { key: "berlin".into(), index: 2 },
                CapitalIndexEntry { key: "ottawa".into(), index: 1 },
                CapitalIndexEntry { key: "washington".into(), index: 0 },
            ]
        );
    }

    #[test]
    fn duplicate_capital_points_at_earliest_country() {
        let mut countries: Vec<CountryRecord> =
            (0..100).map(|i| country(&format!("C{i}"), &format!("Capital {i}"))).collect();
        countries[5].capital = "Washington".to_owned();
        countries[80].capital = "Washington".to_owned();

        let index = build_capital_index(&countries);
        let washington: Vec<_> = index.iter().filter(|e| e.key == "washington").collect();

        assert_eq!(washington, vec![&CapitalIndexEntry { key: "washington".into(), index: 5 }]);
        assert_eq!(index.len(), 99);
    }

    #[test]
    fn capital_index_keeps_first_position_across_case_variants() {
        let countries = vec![country("AA", "SAN JOSÉ"), country("BB", "San José")];

        let index = build_capital_index(&countries);

        assert_eq!(index, vec![CapitalIndexEntry { key: "san josé".into(), index: 0 }]);
    }

    #[test]
    fn render_reports_counts_without_writing() {
        let generator = generator(MemoryLoader { primary: PRIMARY, alternate: ALTERNATE }, DefaultTemplateProvider);

        let artifact = generator.render().unwrap();

        assert_eq!(artifact.countries, 2);
        assert_eq!(artifact.enriched, 2);
        assert_eq!(artifact.capitals, 2);
        assert!(artifact.source.contains("(\"another capital\", 1)"));
        assert!(generator.writer.files.borrow().is_empty());
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let generator = generator(MemoryLoader { primary: PRIMARY, alternate: ALTERNATE }, DefaultTemplateProvider);

        assert_eq!(generator.render().unwrap().source, generator.render().unwrap().source);
    }

    #[test]
    fn generate_writes_rendered_source_to_output_path() {
        let generator = generator(MemoryLoader { primary: PRIMARY, alternate: ALTERNATE }, DefaultTemplateProvider);

        let artifact = generator.generate().unwrap();
        let files = generator.writer.files.borrow();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, generator.output_path());
        assert_eq!(files[0].1, artifact.source.as_bytes());
    }

    #[test]
    fn load_failure_stops_the_pipeline() {
        let generator = generator(FailingLoader, DefaultTemplateProvider);

        assert!(matches!(generator.generate(), Err(CodegenError::Load { .. })));
        assert!(generator.writer.files.borrow().is_empty());
    }

    #[test]
    fn invalid_template_output_is_not_written() {
        let template = StaticTemplate("//! {{ repo_url }}\npub static N: usize = {{ countries | size }}");
        let generator = generator(MemoryLoader { primary: PRIMARY, alternate: ALTERNATE }, template);

        assert!(matches!(generator.generate(), Err(CodegenError::Format { .. })));
        assert!(generator.writer.files.borrow().is_empty());
    }

    fn artifact_at(path: PathBuf, source: &str) -> Artifact {
        Artifact { path, source: source.to_owned(), countries: 0, enriched: 0, capitals: 0 }
    }

    #[test]
    fn verify_accepts_identical_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries_data.rs");
        fs::write(&path, "fn a() {}\n").unwrap();

        verify(&artifact_at(path, "fn a() {}\n")).unwrap();
    }

    #[test]
    fn verify_reports_stale_or_missing_file_as_out_of_date() {
        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join("stale.rs");
        fs::write(&stale, "// stale\n").unwrap();

        let stale_err = verify(&artifact_at(stale, "fn a() {}\n")).unwrap_err();
        let missing_err = verify(&artifact_at(dir.path().join("absent.rs"), "fn a() {}\n")).unwrap_err();

        assert!(matches!(stale_err, CodegenError::OutOfDate { .. }));
        assert!(matches!(missing_err, CodegenError::OutOfDate { .. }));
    }

    #[test]
    fn verify_propagates_read_errors() {
        let dir = tempfile::tempdir().unwrap();

        let err = verify(&artifact_at(dir.path().to_path_buf(), "fn a() {}\n")).unwrap_err();

        assert!(matches!(err, CodegenError::Io { .. }), "{err}");
        assert!(err.to_string().contains("Failed to read"));
    }
}
