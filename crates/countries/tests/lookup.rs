use countries::{
    Catalog, Country, Index, alpha2, alpha3, get_all, get_by_alpha2, get_by_alpha3, get_by_capital,
    get_by_country_code, get_by_iso31662, get_by_name,
};

fn usa() -> Country {
    Country {
        alpha2: "US",
        alpha3: "USA",
        country_code: "840",
        name: "United States of America",
        iso_3166_2: "ISO 3166-2:US",
        region: "Americas",
        region_code: "019",
        sub_region: "Northern America",
        sub_region_code: "021",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Washington",
        continent_name: "North America",
        currency_code: "USD",
    }
}

#[test]
fn every_lookup_finds_the_full_record() {
    let expected = usa();

    assert_eq!(get_by_name("United States of America"), Some(&expected));
    assert_eq!(get_by_alpha2("US"), Some(&expected));
    assert_eq!(get_by_alpha3("USA"), Some(&expected));
    assert_eq!(get_by_country_code("840"), Some(&expected));
    assert_eq!(get_by_iso31662("ISO 3166-2:US"), Some(&expected));
    assert_eq!(get_by_capital("Washington"), Some(&expected));
}

#[test]
fn lookups_ignore_case_except_numeric_code() {
    assert_eq!(get_by_name("UNITED STATES OF AMERICA").map(|c| c.alpha2), Some("US"));
    assert_eq!(get_by_name("united states of america").map(|c| c.alpha2), Some("US"));
    assert_eq!(get_by_alpha2("us").map(|c| c.alpha3), Some("USA"));
    assert_eq!(get_by_alpha3("uSa").map(|c| c.alpha2), Some("US"));
    assert_eq!(get_by_iso31662("iso 3166-2:us").map(|c| c.alpha2), Some("US"));
    assert_eq!(get_by_capital("WASHINGTON").map(|c| c.alpha2), Some("US"));
}

#[test]
fn non_ascii_names_are_found() {
    let aland = get_by_name("Åland Islands").expect("Åland Islands should exist");
    assert_eq!(aland.country_code, "248");
    assert_eq!(get_by_name("åland islands"), Some(aland));
    assert_eq!(get_by_country_code("248"), Some(aland));

    assert_eq!(get_by_name("CÔTE D'IVOIRE").map(|c| c.alpha2), Some("CI"));
    assert_eq!(get_by_name("türkiye").map(|c| c.alpha3), Some("TUR"));
}

#[test]
fn unknown_keys_are_absent() {
    assert!(get_by_name("Atlantis").is_none());
    assert!(get_by_alpha2("ZZ").is_none());
    assert!(get_by_alpha3("ZZZ").is_none());
    assert!(get_by_country_code("000").is_none());
    assert!(get_by_country_code("00000").is_none());
    assert!(get_by_iso31662("ISO 3166-2:ZZ").is_none());
    assert!(get_by_capital("Atlantis City").is_none());
}

#[test]
fn numeric_code_must_match_exactly() {
    assert!(get_by_country_code("0840").is_none());
    assert!(get_by_country_code("840 ").is_none());
    assert_eq!(get_by_country_code("004").map(|c| c.name), Some("Afghanistan"));
    assert!(get_by_country_code("4").is_none());
}

#[test]
fn empty_capital_is_not_indexed() {
    assert!(get_by_capital("").is_none());

    let antarctica = get_by_alpha2("AQ").expect("Antarctica should exist");
    assert_eq!(antarctica.capital, "");
    assert_eq!(antarctica.region, "");
}

#[test]
fn shared_capital_resolves_to_first_country() {
    assert_eq!(get_by_capital("Kingston").map(|c| c.alpha2), Some("JM"));
    assert_eq!(get_by_alpha2("NF").map(|c| c.capital), Some("Kingston"));
}

#[test]
fn get_all_returns_an_independent_copy() {
    let mut all = get_all();
    assert_eq!(all.len(), 249);
    assert_eq!(all.first().map(|c| c.name), Some("Afghanistan"));
    assert_eq!(all.last().map(|c| c.name), Some("Zimbabwe"));

    all[0].name = "Modified";
    all.truncate(1);

    let fresh = get_all();
    assert_eq!(fresh.len(), 249);
    assert_eq!(fresh[0].name, "Afghanistan");
}

#[test]
fn catalog_exposes_index_sizes() {
    let catalog = Catalog::global();

    assert_eq!(catalog.len(), 249);
    for index in [Index::Name, Index::Alpha2, Index::Alpha3, Index::CountryCode, Index::Iso31662] {
        assert_eq!(catalog.index_len(index), 249, "{index:?}");
    }
    assert!(catalog.index_len(Index::Capital) >= 240);
    assert!(catalog.index_len(Index::Capital) <= catalog.len());
}

#[test]
fn every_record_is_reachable_by_its_codes() {
    for country in Catalog::global().iter() {
        assert_eq!(get_by_alpha2(country.alpha2), Some(country), "{}", country.name);
        assert_eq!(get_by_alpha3(country.alpha3), Some(country), "{}", country.name);
        assert_eq!(get_by_country_code(country.country_code), Some(country), "{}", country.name);
        assert_eq!(get_by_name(country.name), Some(country), "{}", country.name);

        assert_eq!(country.alpha2.len(), 2);
        assert_eq!(country.alpha3.len(), 3);
        assert!(country.alpha2.chars().all(|c| c.is_ascii_uppercase()));
        assert_eq!(country.iso_3166_2, format!("ISO 3166-2:{}", country.alpha2));
    }
}

#[test]
fn code_constants_match_the_catalog() {
    assert_eq!(alpha2::US, "US");
    assert_eq!(alpha3::GBR, "GBR");
    assert_eq!(get_by_alpha2(alpha2::DE).map(|c| c.alpha3), Some(alpha3::DEU));
    assert_eq!(get_by_alpha3(alpha3::JPN).map(|c| c.capital), Some("Tokyo"));
}

#[test]
fn country_serializes_with_source_field_names() {
    let json = serde_json::to_value(usa()).expect("country should serialize");

    assert_eq!(json["alpha-2"], "US");
    assert_eq!(json["alpha-3"], "USA");
    assert_eq!(json["country-code"], "840");
    assert_eq!(json["iso_3166-2"], "ISO 3166-2:US");
    assert_eq!(json["sub-region"], "Northern America");
    assert_eq!(json["intermediate-region-code"], "");
    assert_eq!(json["capital"], "Washington");
    assert_eq!(json["currency_code"], "USD");
}

#[test]
fn lookups_are_consistent_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| get_by_alpha2("US").map(|c| c as *const Country as usize)))
        .collect();

    let addresses: Vec<_> = handles.into_iter().map(|h| h.join().expect("thread panicked")).collect();
    assert!(addresses.iter().all(|a| a.is_some() && *a == addresses[0]));
}
