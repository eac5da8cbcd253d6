//! Process-wide, read-only country catalog.
//!
//! The catalog and its hash indices are built once, on first access, from the generated
//! tables and never mutated afterwards. Lookups are safe from any thread without locking.

use crate::country::Country;
use crate::generated::countries_data::{
    BY_ALPHA2, BY_ALPHA3, BY_CAPITAL, BY_CODE, BY_ISO31662, BY_NAME, COUNTRIES,
};
use fxhash::FxHashMap;
use std::sync::LazyLock;
use tracing::debug;

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

/// Lookup keys the catalog is indexed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Index {
    Name,
    Alpha2,
    Alpha3,
    CountryCode,
    Iso31662,
    Capital,
}

/// The immutable country catalog plus one hash index per lookup key.
#[derive(Debug)]
pub struct Catalog {
    countries: &'static [Country],
    by_name: FxHashMap<&'static str, usize>,
    by_alpha2: FxHashMap<&'static str, usize>,
    by_alpha3: FxHashMap<&'static str, usize>,
    by_code: FxHashMap<&'static str, usize>,
    by_iso31662: FxHashMap<&'static str, usize>,
    by_capital: FxHashMap<&'static str, usize>,
}

impl Catalog {
    /// Returns the shared catalog, building it on the first call.
    #[must_use]
    pub fn global() -> &'static Self {
        &CATALOG
    }

    fn build() -> Self {
        let catalog = Self {
            countries: COUNTRIES,
            by_name: index(BY_NAME),
            by_alpha2: index(BY_ALPHA2),
            by_alpha3: index(BY_ALPHA3),
            by_code: index(BY_CODE),
            by_iso31662: index(BY_ISO31662),
            by_capital: index(BY_CAPITAL),
        };

        debug!(
            countries = catalog.countries.len(),
            capitals = catalog.by_capital.len(),
            "Country catalog initialized"
        );

        catalog
    }

    /// Case-insensitive lookup by English short name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&'static Country> {
        self.find(&self.by_name, &name.to_lowercase())
    }

    /// Case-insensitive lookup by ISO-3166-1 alpha-2 code.
    #[must_use]
    pub fn by_alpha2(&self, alpha2: &str) -> Option<&'static Country> {
        self.find(&self.by_alpha2, &alpha2.to_uppercase())
    }

    /// Case-insensitive lookup by ISO-3166-1 alpha-3 code.
    #[must_use]
    pub fn by_alpha3(&self, alpha3: &str) -> Option<&'static Country> {
        self.find(&self.by_alpha3, &alpha3.to_uppercase())
    }

    /// Exact lookup by ISO-3166-1 numeric code (`"840"`, not `"0840"` or `"840 "`).
    #[must_use]
    pub fn by_country_code(&self, code: &str) -> Option<&'static Country> {
        self.find(&self.by_code, code)
    }

    /// Case-insensitive lookup by ISO-3166-2 code (e.g. `ISO 3166-2:US`).
    #[must_use]
    pub fn by_iso31662(&self, iso: &str) -> Option<&'static Country> {
        self.find(&self.by_iso31662, &iso.to_uppercase())
    }

    /// Case-insensitive lookup by capital city.
    ///
    /// When several countries share a capital name, the first one in catalog order wins.
    #[must_use]
    pub fn by_capital(&self, capital: &str) -> Option<&'static Country> {
        self.find(&self.by_capital, &capital.to_lowercase())
    }

    /// Number of countries in the catalog.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.countries.len()
    }

    /// Number of distinct keys held by the given index.
    #[must_use]
    pub fn index_len(&self, index: Index) -> usize {
        match index {
            Index::Name => self.by_name.len(),
            Index::Alpha2 => self.by_alpha2.len(),
            Index::Alpha3 => self.by_alpha3.len(),
            Index::CountryCode => self.by_code.len(),
            Index::Iso31662 => self.by_iso31662.len(),
            Index::Capital => self.by_capital.len(),
        }
    }

    /// Iterates the catalog in source order.
    pub fn iter(&self) -> std::slice::Iter<'static, Country> {
        self.countries.iter()
    }

    /// Returns an owned copy of the catalog that callers may freely modify.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Country> {
        self.countries.to_vec()
    }

    fn find(&self, index: &FxHashMap<&'static str, usize>, key: &str) -> Option<&'static Country> {
        index.get(key).and_then(|&position| self.countries.get(position))
    }
}

// Tables are applied in catalog order, so a repeated key resolves to its last record.
fn index(table: &[(&'static str, usize)]) -> FxHashMap<&'static str, usize> {
    table.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_resolve_to_last_entry() {
        let table = [("aa", 0), ("bb", 1), ("aa", 2)];
        let map = index(&table);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("aa"), Some(&2));
        assert_eq!(map.get("bb"), Some(&1));
    }

    #[test]
    fn every_table_points_inside_the_catalog() {
        let len = COUNTRIES.len();
        for table in [BY_NAME, BY_ALPHA2, BY_ALPHA3, BY_CODE, BY_ISO31662, BY_CAPITAL] {
            assert!(table.iter().all(|&(_, position)| position < len));
        }
    }

    #[test]
    fn capital_table_is_sorted_and_unique() {
        let keys: Vec<&str> = BY_CAPITAL.iter().map(|&(key, _)| key).collect();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn global_returns_the_same_instance() {
        assert!(std::ptr::eq(Catalog::global(), Catalog::global()));
    }
}
