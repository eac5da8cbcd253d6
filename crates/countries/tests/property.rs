use countries::{Catalog, get_by_alpha2, get_by_alpha3, get_by_capital, get_by_name};
use proptest::prelude::*;

fn recase(value: &str, mask: u64) -> String {
    value
        .chars()
        .enumerate()
        .map(|(i, c)| if mask >> (i % 64) & 1 == 1 { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
        .collect()
}

proptest! {
    #[test]
    fn code_lookups_ignore_case(position in 0usize..249, mask in any::<u64>()) {
        let country = Catalog::global().iter().nth(position).unwrap();

        prop_assert_eq!(get_by_alpha2(&recase(country.alpha2, mask)), Some(country));
        prop_assert_eq!(get_by_alpha3(&recase(country.alpha3, mask)), Some(country));
    }

    #[test]
    fn name_lookup_ignores_ascii_case(position in 0usize..249, mask in any::<u64>()) {
        let country = Catalog::global().iter().nth(position).unwrap();

        prop_assert_eq!(get_by_name(&recase(country.name, mask)), Some(country));
    }

    #[test]
    fn capital_lookup_returns_a_country_with_that_capital(position in 0usize..249, mask in any::<u64>()) {
        let country = Catalog::global().iter().nth(position).unwrap();
        prop_assume!(!country.capital.is_empty());

        let found = get_by_capital(&recase(country.capital, mask)).unwrap();
        prop_assert_eq!(found.capital.to_lowercase(), country.capital.to_lowercase());
    }

    #[test]
    fn arbitrary_input_never_panics(input in ".{0,64}") {
        if let Some(country) = get_by_name(&input) {
            prop_assert_eq!(country.name.to_lowercase(), input.to_lowercase());
        }
        let _ = get_by_alpha2(&input);
        let _ = get_by_capital(&input);
    }
}
