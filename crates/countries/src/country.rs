use serde::Serialize;

/// A single country of the ISO-3166 catalog, enriched with capital, continent and currency.
///
/// Every field borrows from the generated static catalog, so copies are cheap and the
/// record never changes after the catalog is built. Fields absent in the source data are
/// empty strings (e.g. Antarctica has no region and no capital).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Country {
    #[serde(rename = "alpha-2")]
    pub alpha2: &'static str,
    #[serde(rename = "alpha-3")]
    pub alpha3: &'static str,
    /// ISO-3166 numeric code, zero-padded to three digits.
    #[serde(rename = "country-code")]
    pub country_code: &'static str,
    pub name: &'static str,
    #[serde(rename = "iso_3166-2")]
    pub iso_3166_2: &'static str,
    pub region: &'static str,
    #[serde(rename = "region-code")]
    pub region_code: &'static str,
    #[serde(rename = "sub-region")]
    pub sub_region: &'static str,
    #[serde(rename = "sub-region-code")]
    pub sub_region_code: &'static str,
    #[serde(rename = "intermediate-region")]
    pub intermediate_region: &'static str,
    #[serde(rename = "intermediate-region-code")]
    pub intermediate_region_code: &'static str,
    pub capital: &'static str,
    pub continent_name: &'static str,
    pub currency_code: &'static str,
}
