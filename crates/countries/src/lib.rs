//! # Countries
//!
//! A complete, ready-to-use list of ISO-3166 countries with constant-time lookups by
//! name, alpha-2, alpha-3, numeric code, ISO-3166-2 code and capital city.
//!
//! The data lives in a generated module (`cargo xtask codegen countries`) that merges the
//! ISO-3166 dataset with capital, continent and currency information. The lookup indices
//! are built once, on first use, and are read-only afterwards.
//!
//! ## Example
//!
//! ```rust
//! use countries::{alpha2, get_by_alpha2, get_by_name};
//!
//! let usa = get_by_name("united states of america").unwrap();
//! assert_eq!(usa.alpha2, alpha2::US);
//!
//! let same = get_by_alpha2("us").unwrap();
//! assert_eq!(same.alpha3, "USA");
//! assert_eq!(same.capital, "Washington");
//! ```

mod catalog;
mod country;
mod generated;

pub use crate::catalog::{Catalog, Index};
pub use crate::country::Country;
pub use crate::generated::countries_data::{alpha2, alpha3};

/// Returns the country with the given name, ignoring case.
#[must_use]
pub fn get_by_name(name: &str) -> Option<&'static Country> {
    Catalog::global().by_name(name)
}

/// Returns the country with the given alpha-2 code, ignoring case.
#[must_use]
pub fn get_by_alpha2(alpha2: &str) -> Option<&'static Country> {
    Catalog::global().by_alpha2(alpha2)
}

/// Returns the country with the given alpha-3 code, ignoring case.
#[must_use]
pub fn get_by_alpha3(alpha3: &str) -> Option<&'static Country> {
    Catalog::global().by_alpha3(alpha3)
}

/// Returns the country with the given numeric code. The match is exact.
#[must_use]
pub fn get_by_country_code(code: &str) -> Option<&'static Country> {
    Catalog::global().by_country_code(code)
}

/// Returns the country with the given ISO-3166-2 code, ignoring case.
#[must_use]
pub fn get_by_iso31662(iso: &str) -> Option<&'static Country> {
    Catalog::global().by_iso31662(iso)
}

/// Returns the country with the given capital, ignoring case.
#[must_use]
pub fn get_by_capital(capital: &str) -> Option<&'static Country> {
    Catalog::global().by_capital(capital)
}

/// Returns every country in catalog order.
///
/// The vector is a fresh copy: modifying it does not affect later calls.
#[must_use]
pub fn get_all() -> Vec<Country> {
    Catalog::global().to_vec()
}
