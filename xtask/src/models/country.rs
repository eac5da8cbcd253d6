//! # Source Records
//!
//! Typed views of the two JSON datasets the catalog is built from. Unknown fields are
//! ignored and missing ones default to an empty string.

use serde::{Deserialize, Serialize};

/// A country from the ISO-3166 dataset, later enriched by [`merge`](crate::handlers::codegen::merge).
///
/// Serializes with its Rust field names, which is how the template refers to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryRecord {
    #[serde(rename(deserialize = "alpha-2"))]
    pub alpha2: String,
    #[serde(rename(deserialize = "alpha-3"))]
    pub alpha3: String,
    #[serde(rename(deserialize = "country-code"))]
    pub country_code: String,
    #[serde(rename(deserialize = "iso_3166-2"))]
    pub iso_3166_2: String,
    pub name: String,
    pub region: String,
    #[serde(rename(deserialize = "region-code"))]
    pub region_code: String,
    #[serde(rename(deserialize = "sub-region"))]
    pub sub_region: String,
    #[serde(rename(deserialize = "sub-region-code"))]
    pub sub_region_code: String,
    #[serde(rename(deserialize = "intermediate-region"))]
    pub intermediate_region: String,
    #[serde(rename(deserialize = "intermediate-region-code"))]
    pub intermediate_region_code: String,

    // Populated by the merge step only.
    #[serde(skip_deserializing)]
    pub capital: String,
    #[serde(skip_deserializing)]
    pub continent_name: String,
    #[serde(skip_deserializing)]
    pub currency_code: String,
}

/// A country from the currency/capital dataset. Only used while merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlternateRecord {
    pub country_code: String,
    pub country_name: String,
    pub currency_code: String,
    pub population: String,
    pub capital: String,
    pub continent_name: String,
}

/// A capital-name key pointing at its country's position in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapitalIndexEntry {
    pub key: String,
    pub index: usize,
}
