//! Auto-generated by `cargo xtask codegen countries`.
//! Source: https://github.com/AnatoliiShliakhto/countries
//! Do not edit by hand.

use crate::country::Country;

pub(crate) static COUNTRIES: &[Country] = &[
    Country {
        alpha2: "AF",
        alpha3: "AFG",
        country_code: "004",
        name: "Afghanistan",
        iso_3166_2: "ISO 3166-2:AF",
        region: "Asia",
        region_code: "142",
        sub_region: "Southern Asia",
        sub_region_code: "034",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Kabul",
        continent_name: "Asia",
        currency_code: "AFN",
    },
    Country {
        alpha2: "AX",
        alpha3: "ALA",
        country_code: "248",
        name: "Åland Islands",
        iso_3166_2: "ISO 3166-2:AX",
        region: "Europe",
        region_code: "150",
        sub_region: "Northern Europe",
        sub_region_code: "154",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Mariehamn",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "AL",
        alpha3: "ALB",
        country_code: "008",
        name: "Albania",
        iso_3166_2: "ISO 3166-2:AL",
        region: "Europe",
        region_code: "150",
        sub_region: "Southern Europe",
        sub_region_code: "039",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Tirana",
        continent_name: "Europe",
        currency_code: "ALL",
    },
    Country {
        alpha2: "DZ",
        alpha3: "DZA",
        country_code: "012",
        name: "Algeria",
        iso_3166_2: "ISO 3166-2:DZ",
        region: "Africa",
        region_code: "002",
        sub_region: "Northern Africa",
        sub_region_code: "015",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Algiers",
        continent_name: "Africa",
        currency_code: "DZD",
    },
    Country {
        alpha2: "AS",
        alpha3: "ASM",
        country_code: "016",
        name: "American Samoa",
        iso_3166_2: "ISO 3166-2:AS",
        region: "Oceania",
        region_code: "009",
        sub_region: "Polynesia",
        sub_region_code: "061",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Pago Pago",
        continent_name: "Oceania",
        currency_code: "USD",
    },
    Country {
        alpha2: "AD",
        alpha3: "AND",
        country_code: "020",
        name: "Andorra",
        iso_3166_2: "ISO 3166-2:AD",
        region: "Europe",
        region_code: "150",
        sub_region: "Southern Europe",
        sub_region_code: "039",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Andorra la Vella",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "AO",
        alpha3: "AGO",
        country_code: "024",
        name: "Angola",
        iso_3166_2: "ISO 3166-2:AO",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Middle Africa",
        intermediate_region_code: "017",
        capital: "Luanda",
        continent_name: "Africa",
        currency_code: "AOA",
    },
    Country {
        alpha2: "AI",
        alpha3: "AIA",
        country_code: "660",
        name: "Anguilla",
        iso_3166_2: "ISO 3166-2:AI",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "The Valley",
        continent_name: "North America",
        currency_code: "XCD",
    },
    Country {
        alpha2: "AQ",
        alpha3: "ATA",
        country_code: "010",
        name: "Antarctica",
        iso_3166_2: "ISO 3166-2:AQ",
        region: "",
        region_code: "",
        sub_region: "",
        sub_region_code: "",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "",
        continent_name: "Antarctica",
        currency_code: "",
    },
    Country {
        alpha2: "AG",
        alpha3: "ATG",
        country_code: "028",
        name: "Antigua and Barbuda",
        iso_3166_2: "ISO 3166-2:AG",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "St. John's",
        continent_name: "North America",
        currency_code: "XCD",
    },
    Country {
        alpha2: "AR",
        alpha3: "ARG",
        country_code: "032",
        name: "Argentina",
        iso_3166_2: "ISO 3166-2:AR",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "South America",
        intermediate_region_code: "005",
        capital: "Buenos Aires",
        continent_name: "South America",
        currency_code: "ARS",
    },
    Country {
        alpha2: "AM",
        alpha3: "ARM",
        country_code: "051",
        name: "Armenia",
        iso_3166_2: "ISO 3166-2:AM",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Yerevan",
        continent_name: "Asia",
        currency_code: "AMD",
    },
    Country {
        alpha2: "AW",
        alpha3: "ABW",
        country_code: "533",
        name: "Aruba",
        iso_3166_2: "ISO 3166-2:AW",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Oranjestad",
        continent_name: "North America",
        currency_code: "AWG",
    },
    Country {
        alpha2: "AU",
        alpha3: "AUS",
        country_code: "036",
        name: "Australia",
        iso_3166_2: "ISO 3166-2:AU",
        region: "Oceania",
        region_code: "009",
        sub_region: "Australia and New Zealand",
        sub_region_code: "053",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Canberra",
        continent_name: "Oceania",
        currency_code: "AUD",
    },
    Country {
        alpha2: "AT",
        alpha3: "AUT",
        country_code: "040",
        name: "Austria",
        iso_3166_2: "ISO 3166-2:AT",
        region: "Europe",
        region_code: "150",
        sub_region: "Western Europe",
        sub_region_code: "155",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Vienna",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "AZ",
        alpha3: "AZE",
        country_code: "031",
        name: "Azerbaijan",
        iso_3166_2: "ISO 3166-2:AZ",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Baku",
        continent_name: "Asia",
        currency_code: "AZN",
    },
    Country {
        alpha2: "BS",
        alpha3: "BHS",
        country_code: "044",
        name: "Bahamas",
        iso_3166_2: "ISO 3166-2:BS",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Nassau",
        continent_name: "North America",
        currency_code: "BSD",
    },
    Country {
        alpha2: "BH",
        alpha3: "BHR",
        country_code: "048",
        name: "Bahrain",
        iso_3166_2: "ISO 3166-2:BH",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Manama",
        continent_name: "Asia",
        currency_code: "BHD",
    },
    Country {
        alpha2: "BD",
        alpha3: "BGD",
        country_code: "050",
        name: "Bangladesh",
        iso_3166_2: "ISO 3166-2:BD",
        region: "Asia",
        region_code: "142",
        sub_region: "Southern Asia",
        sub_region_code: "034",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Dhaka",
        continent_name: "Asia",
        currency_code: "BDT",
    },
    Country {
        alpha2: "BB",
        alpha3: "BRB",
        country_code: "052",
        name: "Barbados",
        iso_3166_2: "ISO 3166-2:BB",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Bridgetown",
        continent_name: "North America",
        currency_code: "BBD",
    },
    Country {
        alpha2: "BY",
        alpha3: "BLR",
        country_code: "112",
        name: "Belarus",
        iso_3166_2: "ISO 3166-2:BY",
        region: "Europe",
        region_code: "150",
        sub_region: "Eastern Europe",
        sub_region_code: "151",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Minsk",
        continent_name: "Europe",
        currency_code: "BYN",
    },
    Country {
        alpha2: "BE",
        alpha3: "BEL",
        country_code: "056",
        name: "Belgium",
        iso_3166_2: "ISO 3166-2:BE",
        region: "Europe",
        region_code: "150",
        sub_region: "Western Europe",
        sub_region_code: "155",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Brussels",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "BZ",
        alpha3: "BLZ",
        country_code: "084",
        name: "Belize",
        iso_3166_2: "ISO 3166-2:BZ",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Central America",
        intermediate_region_code: "013",
        capital: "Belmopan",
        continent_name: "North America",
        currency_code: "BZD",
    },
    Country {
        alpha2: "BJ",
        alpha3: "BEN",
        country_code: "204",
        name: "Benin",
        iso_3166_2: "ISO 3166-2:BJ",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Western Africa",
        intermediate_region_code: "011",
        capital: "Porto-Novo",
        continent_name: "Africa",
        currency_code: "XOF",
    },
    Country {
        alpha2: "BM",
        alpha3: "BMU",
        country_code: "060",
        name: "Bermuda",
        iso_3166_2: "ISO 3166-2:BM",
        region: "Americas",
        region_code: "019",
        sub_region: "Northern America",
        sub_region_code: "021",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Hamilton",
        continent_name: "North America",
        currency_code: "BMD",
    },
    Country {
        alpha2: "BT",
        alpha3: "BTN",
        country_code: "064",
        name: "Bhutan",
        iso_3166_2: "ISO 3166-2:BT",
        region: "Asia",
        region_code: "142",
        sub_region: "Southern Asia",
        sub_region_code: "034",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Thimphu",
        continent_name: "Asia",
        currency_code: "BTN",
    },
    Country {
        alpha2: "BO",
        alpha3: "BOL",
        country_code: "068",
        name: "Bolivia (Plurinational State of)",
        iso_3166_2: "ISO 3166-2:BO",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "South America",
        intermediate_region_code: "005",
        capital: "Sucre",
        continent_name: "South America",
        currency_code: "BOB",
    },
    Country {
        alpha2: "BQ",
        alpha3: "BES",
        country_code: "535",
        name: "Bonaire, Sint Eustatius and Saba",
        iso_3166_2: "ISO 3166-2:BQ",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Kralendijk",
        continent_name: "North America",
        currency_code: "USD",
    },
    Country {
        alpha2: "BA",
        alpha3: "BIH",
        country_code: "070",
        name: "Bosnia and Herzegovina",
        iso_3166_2: "ISO 3166-2:BA",
        region: "Europe",
        region_code: "150",
        sub_region: "Southern Europe",
        sub_region_code: "039",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Sarajevo",
        continent_name: "Europe",
        currency_code: "BAM",
    },
    Country {
        alpha2: "BW",
        alpha3: "BWA",
        country_code: "072",
        name: "Botswana",
        iso_3166_2: "ISO 3166-2:BW",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Southern Africa",
        intermediate_region_code: "018",
        capital: "Gaborone",
        continent_name: "Africa",
        currency_code: "BWP",
    },
    Country {
        alpha2: "BV",
        alpha3: "BVT",
        country_code: "074",
        name: "Bouvet Island",
        iso_3166_2: "ISO 3166-2:BV",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "South America",
        intermediate_region_code: "005",
        capital: "",
        continent_name: "Antarctica",
        currency_code: "NOK",
    },
    Country {
        alpha2: "BR",
        alpha3: "BRA",
        country_code: "076",
        name: "Brazil",
        iso_3166_2: "ISO 3166-2:BR",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "South America",
        intermediate_region_code: "005",
        capital: "Brasilia",
        continent_name: "South America",
        currency_code: "BRL",
    },
    Country {
        alpha2: "IO",
        alpha3: "IOT",
        country_code: "086",
        name: "British Indian Ocean Territory",
        iso_3166_2: "ISO 3166-2:IO",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Diego Garcia",
        continent_name: "Asia",
        currency_code: "USD",
    },
    Country {
        alpha2: "BN",
        alpha3: "BRN",
        country_code: "096",
        name: "Brunei Darussalam",
        iso_3166_2: "ISO 3166-2:BN",
        region: "Asia",
        region_code: "142",
        sub_region: "South-eastern Asia",
        sub_region_code: "035",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Bandar Seri Begawan",
        continent_name: "Asia",
        currency_code: "BND",
    },
    Country {
        alpha2: "BG",
        alpha3: "BGR",
        country_code: "100",
        name: "Bulgaria",
        iso_3166_2: "ISO 3166-2:BG",
        region: "Europe",
        region_code: "150",
        sub_region: "Eastern Europe",
        sub_region_code: "151",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Sofia",
        continent_name: "Europe",
        currency_code: "BGN",
    },
    Country {
        alpha2: "BF",
        alpha3: "BFA",
        country_code: "854",
        name: "Burkina Faso",
        iso_3166_2: "ISO 3166-2:BF",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Western Africa",
        intermediate_region_code: "011",
        capital: "Ouagadougou",
        continent_name: "Africa",
        currency_code: "XOF",
    },
    Country {
        alpha2: "BI",
        alpha3: "BDI",
        country_code: "108",
        name: "Burundi",
        iso_3166_2: "ISO 3166-2:BI",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Gitega",
        continent_name: "Africa",
        currency_code: "BIF",
    },
    Country {
        alpha2: "CV",
        alpha3: "CPV",
        country_code: "132",
        name: "Cabo Verde",
        iso_3166_2: "ISO 3166-2:CV",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Western Africa",
        intermediate_region_code: "011",
        capital: "Praia",
        continent_name: "Africa",
        currency_code: "CVE",
    },
    Country {
        alpha2: "KH",
        alpha3: "KHM",
        country_code: "116",
        name: "Cambodia",
        iso_3166_2: "ISO 3166-2:KH",
        region: "Asia",
        region_code: "142",
        sub_region: "South-eastern Asia",
        sub_region_code: "035",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Phnom Penh",
        continent_name: "Asia",
        currency_code: "KHR",
    },
    Country {
        alpha2: "CM",
        alpha3: "CMR",
        country_code: "120",
        name: "Cameroon",
        iso_3166_2: "ISO 3166-2:CM",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Middle Africa",
        intermediate_region_code: "017",
        capital: "Yaounde",
        continent_name: "Africa",
        currency_code: "XAF",
    },
    Country {
        alpha2: "CA",
        alpha3: "CAN",
        country_code: "124",
        name: "Canada",
        iso_3166_2: "ISO 3166-2:CA",
        region: "Americas",
        region_code: "019",
        sub_region: "Northern America",
        sub_region_code: "021",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Ottawa",
        continent_name: "North America",
        currency_code: "CAD",
    },
    Country {
        alpha2: "KY",
        alpha3: "CYM",
        country_code: "136",
        name: "Cayman Islands",
        iso_3166_2: "ISO 3166-2:KY",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "George Town",
        continent_name: "North America",
        currency_code: "KYD",
    },
    Country {
        alpha2: "CF",
        alpha3: "CAF",
        country_code: "140",
        name: "Central African Republic",
        iso_3166_2: "ISO 3166-2:CF",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Middle Africa",
        intermediate_region_code: "017",
        capital: "Bangui",
        continent_name: "Africa",
        currency_code: "XAF",
    },
    Country {
        alpha2: "TD",
        alpha3: "TCD",
        country_code: "148",
        name: "Chad",
        iso_3166_2: "ISO 3166-2:TD",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Middle Africa",
        intermediate_region_code: "017",
        capital: "N'Djamena",
        continent_name: "Africa",
        currency_code: "XAF",
    },
    Country {
        alpha2: "CL",
        alpha3: "CHL",
        country_code: "152",
        name: "Chile",
        iso_3166_2: "ISO 3166-2:CL",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "South America",
        intermediate_region_code: "005",
        capital: "Santiago",
        continent_name: "South America",
        currency_code: "CLP",
    },
    Country {
        alpha2: "CN",
        alpha3: "CHN",
        country_code: "156",
        name: "China",
        iso_3166_2: "ISO 3166-2:CN",
        region: "Asia",
        region_code: "142",
        sub_region: "Eastern Asia",
        sub_region_code: "030",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Beijing",
        continent_name: "Asia",
        currency_code: "CNY",
    },
    Country {
        alpha2: "CX",
        alpha3: "CXR",
        country_code: "162",
        name: "Christmas Island",
        iso_3166_2: "ISO 3166-2:CX",
        region: "Oceania",
        region_code: "009",
        sub_region: "Australia and New Zealand",
        sub_region_code: "053",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Flying Fish Cove",
        continent_name: "Oceania",
        currency_code: "AUD",
    },
    Country {
        alpha2: "CC",
        alpha3: "CCK",
        country_code: "166",
        name: "Cocos (Keeling) Islands",
        iso_3166_2: "ISO 3166-2:CC",
        region: "Oceania",
        region_code: "009",
        sub_region: "Australia and New Zealand",
        sub_region_code: "053",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "West Island",
        continent_name: "Asia",
        currency_code: "AUD",
    },
    Country {
        alpha2: "CO",
        alpha3: "COL",
        country_code: "170",
        name: "Colombia",
        iso_3166_2: "ISO 3166-2:CO",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "South America",
        intermediate_region_code: "005",
        capital: "Bogota",
        continent_name: "South America",
        currency_code: "COP",
    },
    Country {
        alpha2: "KM",
        alpha3: "COM",
        country_code: "174",
        name: "Comoros",
        iso_3166_2: "ISO 3166-2:KM",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Moroni",
        continent_name: "Africa",
        currency_code: "KMF",
    },
    Country {
        alpha2: "CG",
        alpha3: "COG",
        country_code: "178",
        name: "Congo",
        iso_3166_2: "ISO 3166-2:CG",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Middle Africa",
        intermediate_region_code: "017",
        capital: "Brazzaville",
        continent_name: "Africa",
        currency_code: "XAF",
    },
    Country {
        alpha2: "CD",
        alpha3: "COD",
        country_code: "180",
        name: "Congo, Democratic Republic of the",
        iso_3166_2: "ISO 3166-2:CD",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Middle Africa",
        intermediate_region_code: "017",
        capital: "Kinshasa",
        continent_name: "Africa",
        currency_code: "CDF",
    },
    Country {
        alpha2: "CK",
        alpha3: "COK",
        country_code: "184",
        name: "Cook Islands",
        iso_3166_2: "ISO 3166-2:CK",
        region: "Oceania",
        region_code: "009",
        sub_region: "Polynesia",
        sub_region_code: "061",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Avarua",
        continent_name: "Oceania",
        currency_code: "NZD",
    },
    Country {
        alpha2: "CR",
        alpha3: "CRI",
        country_code: "188",
        name: "Costa Rica",
        iso_3166_2: "ISO 3166-2:CR",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Central America",
        intermediate_region_code: "013",
        capital: "San Jose",
        continent_name: "North America",
        currency_code: "CRC",
    },
    Country {
        alpha2: "CI",
        alpha3: "CIV",
        country_code: "384",
        name: "Côte d'Ivoire",
        iso_3166_2: "ISO 3166-2:CI",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Western Africa",
        intermediate_region_code: "011",
        capital: "Yamoussoukro",
        continent_name: "Africa",
        currency_code: "XOF",
    },
    Country {
        alpha2: "HR",
        alpha3: "HRV",
        country_code: "191",
        name: "Croatia",
        iso_3166_2: "ISO 3166-2:HR",
        region: "Europe",
        region_code: "150",
        sub_region: "Southern Europe",
        sub_region_code: "039",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Zagreb",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "CU",
        alpha3: "CUB",
        country_code: "192",
        name: "Cuba",
        iso_3166_2: "ISO 3166-2:CU",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Havana",
        continent_name: "North America",
        currency_code: "CUP",
    },
    Country {
        alpha2: "CW",
        alpha3: "CUW",
        country_code: "531",
        name: "Curaçao",
        iso_3166_2: "ISO 3166-2:CW",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Willemstad",
        continent_name: "North America",
        currency_code: "ANG",
    },
    Country {
        alpha2: "CY",
        alpha3: "CYP",
        country_code: "196",
        name: "Cyprus",
        iso_3166_2: "ISO 3166-2:CY",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Nicosia",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "CZ",
        alpha3: "CZE",
        country_code: "203",
        name: "Czechia",
        iso_3166_2: "ISO 3166-2:CZ",
        region: "Europe",
        region_code: "150",
        sub_region: "Eastern Europe",
        sub_region_code: "151",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Prague",
        continent_name: "Europe",
        currency_code: "CZK",
    },
    Country {
        alpha2: "DK",
        alpha3: "DNK",
        country_code: "208",
        name: "Denmark",
        iso_3166_2: "ISO 3166-2:DK",
        region: "Europe",
        region_code: "150",
        sub_region: "Northern Europe",
        sub_region_code: "154",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Copenhagen",
        continent_name: "Europe",
        currency_code: "DKK",
    },
    Country {
        alpha2: "DJ",
        alpha3: "DJI",
        country_code: "262",
        name: "Djibouti",
        iso_3166_2: "ISO 3166-2:DJ",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Djibouti",
        continent_name: "Africa",
        currency_code: "DJF",
    },
    Country {
        alpha2: "DM",
        alpha3: "DMA",
        country_code: "212",
        name: "Dominica",
        iso_3166_2: "ISO 3166-2:DM",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Roseau",
        continent_name: "North America",
        currency_code: "XCD",
    },
    Country {
        alpha2: "DO",
        alpha3: "DOM",
        country_code: "214",
        name: "Dominican Republic",
        iso_3166_2: "ISO 3166-2:DO",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Santo Domingo",
        continent_name: "North America",
        currency_code: "DOP",
    },
    Country {
        alpha2: "EC",
        alpha3: "ECU",
        country_code: "218",
        name: "Ecuador",
        iso_3166_2: "ISO 3166-2:EC",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "South America",
        intermediate_region_code: "005",
        capital: "Quito",
        continent_name: "South America",
        currency_code: "USD",
    },
    Country {
        alpha2: "EG",
        alpha3: "EGY",
        country_code: "818",
        name: "Egypt",
        iso_3166_2: "ISO 3166-2:EG",
        region: "Africa",
        region_code: "002",
        sub_region: "Northern Africa",
        sub_region_code: "015",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Cairo",
        continent_name: "Africa",
        currency_code: "EGP",
    },
    Country {
        alpha2: "SV",
        alpha3: "SLV",
        country_code: "222",
        name: "El Salvador",
        iso_3166_2: "ISO 3166-2:SV",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Central America",
        intermediate_region_code: "013",
        capital: "San Salvador",
        continent_name: "North America",
        currency_code: "USD",
    },
    Country {
        alpha2: "GQ",
        alpha3: "GNQ",
        country_code: "226",
        name: "Equatorial Guinea",
        iso_3166_2: "ISO 3166-2:GQ",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Middle Africa",
        intermediate_region_code: "017",
        capital: "Malabo",
        continent_name: "Africa",
        currency_code: "XAF",
    },
    Country {
        alpha2: "ER",
        alpha3: "ERI",
        country_code: "232",
        name: "Eritrea",
        iso_3166_2: "ISO 3166-2:ER",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Asmara",
        continent_name: "Africa",
        currency_code: "ERN",
    },
    Country {
        alpha2: "EE",
        alpha3: "EST",
        country_code: "233",
        name: "Estonia",
        iso_3166_2: "ISO 3166-2:EE",
        region: "Europe",
        region_code: "150",
        sub_region: "Northern Europe",
        sub_region_code: "154",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Tallinn",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "SZ",
        alpha3: "SWZ",
        country_code: "748",
        name: "Eswatini",
        iso_3166_2: "ISO 3166-2:SZ",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Southern Africa",
        intermediate_region_code: "018",
        capital: "Mbabane",
        continent_name: "Africa",
        currency_code: "SZL",
    },
    Country {
        alpha2: "ET",
        alpha3: "ETH",
        country_code: "231",
        name: "Ethiopia",
        iso_3166_2: "ISO 3166-2:ET",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Addis Ababa",
        continent_name: "Africa",
        currency_code: "ETB",
    },
    Country {
        alpha2: "FK",
        alpha3: "FLK",
        country_code: "238",
        name: "Falkland Islands (Malvinas)",
        iso_3166_2: "ISO 3166-2:FK",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "South America",
        intermediate_region_code: "005",
        capital: "Stanley",
        continent_name: "South America",
        currency_code: "FKP",
    },
    Country {
        alpha2: "FO",
        alpha3: "FRO",
        country_code: "234",
        name: "Faroe Islands",
        iso_3166_2: "ISO 3166-2:FO",
        region: "Europe",
        region_code: "150",
        sub_region: "Northern Europe",
        sub_region_code: "154",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Torshavn",
        continent_name: "Europe",
        currency_code: "DKK",
    },
    Country {
        alpha2: "FJ",
        alpha3: "FJI",
        country_code: "242",
        name: "Fiji",
        iso_3166_2: "ISO 3166-2:FJ",
        region: "Oceania",
        region_code: "009",
        sub_region: "Melanesia",
        sub_region_code: "054",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Suva",
        continent_name: "Oceania",
        currency_code: "FJD",
    },
    Country {
        alpha2: "FI",
        alpha3: "FIN",
        country_code: "246",
        name: "Finland",
        iso_3166_2: "ISO 3166-2:FI",
        region: "Europe",
        region_code: "150",
        sub_region: "Northern Europe",
        sub_region_code: "154",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Helsinki",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "FR",
        alpha3: "FRA",
        country_code: "250",
        name: "France",
        iso_3166_2: "ISO 3166-2:FR",
        region: "Europe",
        region_code: "150",
        sub_region: "Western Europe",
        sub_region_code: "155",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Paris",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "GF",
        alpha3: "GUF",
        country_code: "254",
        name: "French Guiana",
        iso_3166_2: "ISO 3166-2:GF",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "South America",
        intermediate_region_code: "005",
        capital: "Cayenne",
        continent_name: "South America",
        currency_code: "EUR",
    },
    Country {
        alpha2: "PF",
        alpha3: "PYF",
        country_code: "258",
        name: "French Polynesia",
        iso_3166_2: "ISO 3166-2:PF",
        region: "Oceania",
        region_code: "009",
        sub_region: "Polynesia",
        sub_region_code: "061",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Papeete",
        continent_name: "Oceania",
        currency_code: "XPF",
    },
    Country {
        alpha2: "TF",
        alpha3: "ATF",
        country_code: "260",
        name: "French Southern Territories",
        iso_3166_2: "ISO 3166-2:TF",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Port-aux-Francais",
        continent_name: "Antarctica",
        currency_code: "EUR",
    },
    Country {
        alpha2: "GA",
        alpha3: "GAB",
        country_code: "266",
        name: "Gabon",
        iso_3166_2: "ISO 3166-2:GA",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Middle Africa",
        intermediate_region_code: "017",
        capital: "Libreville",
        continent_name: "Africa",
        currency_code: "XAF",
    },
    Country {
        alpha2: "GM",
        alpha3: "GMB",
        country_code: "270",
        name: "Gambia",
        iso_3166_2: "ISO 3166-2:GM",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Western Africa",
        intermediate_region_code: "011",
        capital: "Banjul",
        continent_name: "Africa",
        currency_code: "GMD",
    },
    Country {
        alpha2: "GE",
        alpha3: "GEO",
        country_code: "268",
        name: "Georgia",
        iso_3166_2: "ISO 3166-2:GE",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Tbilisi",
        continent_name: "Asia",
        currency_code: "GEL",
    },
    Country {
        alpha2: "DE",
        alpha3: "DEU",
        country_code: "276",
        name: "Germany",
        iso_3166_2: "ISO 3166-2:DE",
        region: "Europe",
        region_code: "150",
        sub_region: "Western Europe",
        sub_region_code: "155",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Berlin",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "GH",
        alpha3: "GHA",
        country_code: "288",
        name: "Ghana",
        iso_3166_2: "ISO 3166-2:GH",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Western Africa",
        intermediate_region_code: "011",
        capital: "Accra",
        continent_name: "Africa",
        currency_code: "GHS",
    },
    Country {
        alpha2: "GI",
        alpha3: "GIB",
        country_code: "292",
        name: "Gibraltar",
        iso_3166_2: "ISO 3166-2:GI",
        region: "Europe",
        region_code: "150",
        sub_region: "Southern Europe",
        sub_region_code: "039",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Gibraltar",
        continent_name: "Europe",
        currency_code: "GIP",
    },
    Country {
        alpha2: "GR",
        alpha3: "GRC",
        country_code: "300",
        name: "Greece",
        iso_3166_2: "ISO 3166-2:GR",
        region: "Europe",
        region_code: "150",
        sub_region: "Southern Europe",
        sub_region_code: "039",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Athens",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "GL",
        alpha3: "GRL",
        country_code: "304",
        name: "Greenland",
        iso_3166_2: "ISO 3166-2:GL",
        region: "Americas",
        region_code: "019",
        sub_region: "Northern America",
        sub_region_code: "021",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Nuuk",
        continent_name: "North America",
        currency_code: "DKK",
    },
    Country {
        alpha2: "GD",
        alpha3: "GRD",
        country_code: "308",
        name: "Grenada",
        iso_3166_2: "ISO 3166-2:GD",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "St. George's",
        continent_name: "North America",
        currency_code: "XCD",
    },
    Country {
        alpha2: "GP",
        alpha3: "GLP",
        country_code: "312",
        name: "Guadeloupe",
        iso_3166_2: "ISO 3166-2:GP",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Basse-Terre",
        continent_name: "North America",
        currency_code: "EUR",
    },
    Country {
        alpha2: "GU",
        alpha3: "GUM",
        country_code: "316",
        name: "Guam",
        iso_3166_2: "ISO 3166-2:GU",
        region: "Oceania",
        region_code: "009",
        sub_region: "Micronesia",
        sub_region_code: "057",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Hagatna",
        continent_name: "Oceania",
        currency_code: "USD",
    },
    Country {
        alpha2: "GT",
        alpha3: "GTM",
        country_code: "320",
        name: "Guatemala",
        iso_3166_2: "ISO 3166-2:GT",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Central America",
        intermediate_region_code: "013",
        capital: "Guatemala City",
        continent_name: "North America",
        currency_code: "GTQ",
    },
    Country {
        alpha2: "GG",
        alpha3: "GGY",
        country_code: "831",
        name: "Guernsey",
        iso_3166_2: "ISO 3166-2:GG",
        region: "Europe",
        region_code: "150",
        sub_region: "Northern Europe",
        sub_region_code: "154",
        intermediate_region: "Channel Islands",
        intermediate_region_code: "830",
        capital: "St Peter Port",
        continent_name: "Europe",
        currency_code: "GBP",
    },
    Country {
        alpha2: "GN",
        alpha3: "GIN",
        country_code: "324",
        name: "Guinea",
        iso_3166_2: "ISO 3166-2:GN",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Western Africa",
        intermediate_region_code: "011",
        capital: "Conakry",
        continent_name: "Africa",
        currency_code: "GNF",
    },
    Country {
        alpha2: "GW",
        alpha3: "GNB",
        country_code: "624",
        name: "Guinea-Bissau",
        iso_3166_2: "ISO 3166-2:GW",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Western Africa",
        intermediate_region_code: "011",
        capital: "Bissau",
        continent_name: "Africa",
        currency_code: "XOF",
    },
    Country {
        alpha2: "GY",
        alpha3: "GUY",
        country_code: "328",
        name: "Guyana",
        iso_3166_2: "ISO 3166-2:GY",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "South America",
        intermediate_region_code: "005",
        capital: "Georgetown",
        continent_name: "South America",
        currency_code: "GYD",
    },
    Country {
        alpha2: "HT",
        alpha3: "HTI",
        country_code: "332",
        name: "Haiti",
        iso_3166_2: "ISO 3166-2:HT",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Port-au-Prince",
        continent_name: "North America",
        currency_code: "HTG",
    },
    Country {
        alpha2: "HM",
        alpha3: "HMD",
        country_code: "334",
        name: "Heard Island and McDonald Islands",
        iso_3166_2: "ISO 3166-2:HM",
        region: "Oceania",
        region_code: "009",
        sub_region: "Australia and New Zealand",
        sub_region_code: "053",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "",
        continent_name: "Antarctica",
        currency_code: "AUD",
    },
    Country {
        alpha2: "VA",
        alpha3: "VAT",
        country_code: "336",
        name: "Holy See",
        iso_3166_2: "ISO 3166-2:VA",
        region: "Europe",
        region_code: "150",
        sub_region: "Southern Europe",
        sub_region_code: "039",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Vatican City",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "HN",
        alpha3: "HND",
        country_code: "340",
        name: "Honduras",
        iso_3166_2: "ISO 3166-2:HN",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Central America",
        intermediate_region_code: "013",
        capital: "Tegucigalpa",
        continent_name: "North America",
        currency_code: "HNL",
    },
    Country {
        alpha2: "HK",
        alpha3: "HKG",
        country_code: "344",
        name: "Hong Kong",
        iso_3166_2: "ISO 3166-2:HK",
        region: "Asia",
        region_code: "142",
        sub_region: "Eastern Asia",
        sub_region_code: "030",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Hong Kong",
        continent_name: "Asia",
        currency_code: "HKD",
    },
    Country {
        alpha2: "HU",
        alpha3: "HUN",
        country_code: "348",
        name: "Hungary",
        iso_3166_2: "ISO 3166-2:HU",
        region: "Europe",
        region_code: "150",
        sub_region: "Eastern Europe",
        sub_region_code: "151",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Budapest",
        continent_name: "Europe",
        currency_code: "HUF",
    },
    Country {
        alpha2: "IS",
        alpha3: "ISL",
        country_code: "352",
        name: "Iceland",
        iso_3166_2: "ISO 3166-2:IS",
        region: "Europe",
        region_code: "150",
        sub_region: "Northern Europe",
        sub_region_code: "154",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Reykjavik",
        continent_name: "Europe",
        currency_code: "ISK",
    },
    Country {
        alpha2: "IN",
        alpha3: "IND",
        country_code: "356",
        name: "India",
        iso_3166_2: "ISO 3166-2:IN",
        region: "Asia",
        region_code: "142",
        sub_region: "Southern Asia",
        sub_region_code: "034",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "New Delhi",
        continent_name: "Asia",
        currency_code: "INR",
    },
    Country {
        alpha2: "ID",
        alpha3: "IDN",
        country_code: "360",
        name: "Indonesia",
        iso_3166_2: "ISO 3166-2:ID",
        region: "Asia",
        region_code: "142",
        sub_region: "South-eastern Asia",
        sub_region_code: "035",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Jakarta",
        continent_name: "Asia",
        currency_code: "IDR",
    },
    Country {
        alpha2: "IR",
        alpha3: "IRN",
        country_code: "364",
        name: "Iran (Islamic Republic of)",
        iso_3166_2: "ISO 3166-2:IR",
        region: "Asia",
        region_code: "142",
        sub_region: "Southern Asia",
        sub_region_code: "034",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Tehran",
        continent_name: "Asia",
        currency_code: "IRR",
    },
    Country {
        alpha2: "IQ",
        alpha3: "IRQ",
        country_code: "368",
        name: "Iraq",
        iso_3166_2: "ISO 3166-2:IQ",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Baghdad",
        continent_name: "Asia",
        currency_code: "IQD",
    },
    Country {
        alpha2: "IE",
        alpha3: "IRL",
        country_code: "372",
        name: "Ireland",
        iso_3166_2: "ISO 3166-2:IE",
        region: "Europe",
        region_code: "150",
        sub_region: "Northern Europe",
        sub_region_code: "154",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Dublin",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "IM",
        alpha3: "IMN",
        country_code: "833",
        name: "Isle of Man",
        iso_3166_2: "ISO 3166-2:IM",
        region: "Europe",
        region_code: "150",
        sub_region: "Northern Europe",
        sub_region_code: "154",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Douglas",
        continent_name: "Europe",
        currency_code: "GBP",
    },
    Country {
        alpha2: "IL",
        alpha3: "ISR",
        country_code: "376",
        name: "Israel",
        iso_3166_2: "ISO 3166-2:IL",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Jerusalem",
        continent_name: "Asia",
        currency_code: "ILS",
    },
    Country {
        alpha2: "IT",
        alpha3: "ITA",
        country_code: "380",
        name: "Italy",
        iso_3166_2: "ISO 3166-2:IT",
        region: "Europe",
        region_code: "150",
        sub_region: "Southern Europe",
        sub_region_code: "039",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Rome",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "JM",
        alpha3: "JAM",
        country_code: "388",
        name: "Jamaica",
        iso_3166_2: "ISO 3166-2:JM",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Kingston",
        continent_name: "North America",
        currency_code: "JMD",
    },
    Country {
        alpha2: "JP",
        alpha3: "JPN",
        country_code: "392",
        name: "Japan",
        iso_3166_2: "ISO 3166-2:JP",
        region: "Asia",
        region_code: "142",
        sub_region: "Eastern Asia",
        sub_region_code: "030",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Tokyo",
        continent_name: "Asia",
        currency_code: "JPY",
    },
    Country {
        alpha2: "JE",
        alpha3: "JEY",
        country_code: "832",
        name: "Jersey",
        iso_3166_2: "ISO 3166-2:JE",
        region: "Europe",
        region_code: "150",
        sub_region: "Northern Europe",
        sub_region_code: "154",
        intermediate_region: "Channel Islands",
        intermediate_region_code: "830",
        capital: "Saint Helier",
        continent_name: "Europe",
        currency_code: "GBP",
    },
    Country {
        alpha2: "JO",
        alpha3: "JOR",
        country_code: "400",
        name: "Jordan",
        iso_3166_2: "ISO 3166-2:JO",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Amman",
        continent_name: "Asia",
        currency_code: "JOD",
    },
    Country {
        alpha2: "KZ",
        alpha3: "KAZ",
        country_code: "398",
        name: "Kazakhstan",
        iso_3166_2: "ISO 3166-2:KZ",
        region: "Asia",
        region_code: "142",
        sub_region: "Central Asia",
        sub_region_code: "143",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Astana",
        continent_name: "Asia",
        currency_code: "KZT",
    },
    Country {
        alpha2: "KE",
        alpha3: "KEN",
        country_code: "404",
        name: "Kenya",
        iso_3166_2: "ISO 3166-2:KE",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Nairobi",
        continent_name: "Africa",
        currency_code: "KES",
    },
    Country {
        alpha2: "KI",
        alpha3: "KIR",
        country_code: "296",
        name: "Kiribati",
        iso_3166_2: "ISO 3166-2:KI",
        region: "Oceania",
        region_code: "009",
        sub_region: "Micronesia",
        sub_region_code: "057",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Tarawa",
        continent_name: "Oceania",
        currency_code: "AUD",
    },
    Country {
        alpha2: "KP",
        alpha3: "PRK",
        country_code: "408",
        name: "Korea (Democratic People's Republic of)",
        iso_3166_2: "ISO 3166-2:KP",
        region: "Asia",
        region_code: "142",
        sub_region: "Eastern Asia",
        sub_region_code: "030",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Pyongyang",
        continent_name: "Asia",
        currency_code: "KPW",
    },
    Country {
        alpha2: "KR",
        alpha3: "KOR",
        country_code: "410",
        name: "Korea, Republic of",
        iso_3166_2: "ISO 3166-2:KR",
        region: "Asia",
        region_code: "142",
        sub_region: "Eastern Asia",
        sub_region_code: "030",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Seoul",
        continent_name: "Asia",
        currency_code: "KRW",
    },
    Country {
        alpha2: "KW",
        alpha3: "KWT",
        country_code: "414",
        name: "Kuwait",
        iso_3166_2: "ISO 3166-2:KW",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Kuwait City",
        continent_name: "Asia",
        currency_code: "KWD",
    },
    Country {
        alpha2: "KG",
        alpha3: "KGZ",
        country_code: "417",
        name: "Kyrgyzstan",
        iso_3166_2: "ISO 3166-2:KG",
        region: "Asia",
        region_code: "142",
        sub_region: "Central Asia",
        sub_region_code: "143",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Bishkek",
        continent_name: "Asia",
        currency_code: "KGS",
    },
    Country {
        alpha2: "LA",
        alpha3: "LAO",
        country_code: "418",
        name: "Lao People's Democratic Republic",
        iso_3166_2: "ISO 3166-2:LA",
        region: "Asia",
        region_code: "142",
        sub_region: "South-eastern Asia",
        sub_region_code: "035",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Vientiane",
        continent_name: "Asia",
        currency_code: "LAK",
    },
    Country {
        alpha2: "LV",
        alpha3: "LVA",
        country_code: "428",
        name: "Latvia",
        iso_3166_2: "ISO 3166-2:LV",
        region: "Europe",
        region_code: "150",
        sub_region: "Northern Europe",
        sub_region_code: "154",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Riga",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "LB",
        alpha3: "LBN",
        country_code: "422",
        name: "Lebanon",
        iso_3166_2: "ISO 3166-2:LB",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Beirut",
        continent_name: "Asia",
        currency_code: "LBP",
    },
    Country {
        alpha2: "LS",
        alpha3: "LSO",
        country_code: "426",
        name: "Lesotho",
        iso_3166_2: "ISO 3166-2:LS",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Southern Africa",
        intermediate_region_code: "018",
        capital: "Maseru",
        continent_name: "Africa",
        currency_code: "LSL",
    },
    Country {
        alpha2: "LR",
        alpha3: "LBR",
        country_code: "430",
        name: "Liberia",
        iso_3166_2: "ISO 3166-2:LR",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Western Africa",
        intermediate_region_code: "011",
        capital: "Monrovia",
        continent_name: "Africa",
        currency_code: "LRD",
    },
    Country {
        alpha2: "LY",
        alpha3: "LBY",
        country_code: "434",
        name: "Libya",
        iso_3166_2: "ISO 3166-2:LY",
        region: "Africa",
        region_code: "002",
        sub_region: "Northern Africa",
        sub_region_code: "015",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Tripoli",
        continent_name: "Africa",
        currency_code: "LYD",
    },
    Country {
        alpha2: "LI",
        alpha3: "LIE",
        country_code: "438",
        name: "Liechtenstein",
        iso_3166_2: "ISO 3166-2:LI",
        region: "Europe",
        region_code: "150",
        sub_region: "Western Europe",
        sub_region_code: "155",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Vaduz",
        continent_name: "Europe",
        currency_code: "CHF",
    },
    Country {
        alpha2: "LT",
        alpha3: "LTU",
        country_code: "440",
        name: "Lithuania",
        iso_3166_2: "ISO 3166-2:LT",
        region: "Europe",
        region_code: "150",
        sub_region: "Northern Europe",
        sub_region_code: "154",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Vilnius",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "LU",
        alpha3: "LUX",
        country_code: "442",
        name: "Luxembourg",
        iso_3166_2: "ISO 3166-2:LU",
        region: "Europe",
        region_code: "150",
        sub_region: "Western Europe",
        sub_region_code: "155",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Luxembourg",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "MO",
        alpha3: "MAC",
        country_code: "446",
        name: "Macao",
        iso_3166_2: "ISO 3166-2:MO",
        region: "Asia",
        region_code: "142",
        sub_region: "Eastern Asia",
        sub_region_code: "030",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Macao",
        continent_name: "Asia",
        currency_code: "MOP",
    },
    Country {
        alpha2: "MG",
        alpha3: "MDG",
        country_code: "450",
        name: "Madagascar",
        iso_3166_2: "ISO 3166-2:MG",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Antananarivo",
        continent_name: "Africa",
        currency_code: "MGA",
    },
    Country {
        alpha2: "MW",
        alpha3: "MWI",
        country_code: "454",
        name: "Malawi",
        iso_3166_2: "ISO 3166-2:MW",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Lilongwe",
        continent_name: "Africa",
        currency_code: "MWK",
    },
    Country {
        alpha2: "MY",
        alpha3: "MYS",
        country_code: "458",
        name: "Malaysia",
        iso_3166_2: "ISO 3166-2:MY",
        region: "Asia",
        region_code: "142",
        sub_region: "South-eastern Asia",
        sub_region_code: "035",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Kuala Lumpur",
        continent_name: "Asia",
        currency_code: "MYR",
    },
    Country {
        alpha2: "MV",
        alpha3: "MDV",
        country_code: "462",
        name: "Maldives",
        iso_3166_2: "ISO 3166-2:MV",
        region: "Asia",
        region_code: "142",
        sub_region: "Southern Asia",
        sub_region_code: "034",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Male",
        continent_name: "Asia",
        currency_code: "MVR",
    },
    Country {
        alpha2: "ML",
        alpha3: "MLI",
        country_code: "466",
        name: "Mali",
        iso_3166_2: "ISO 3166-2:ML",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Western Africa",
        intermediate_region_code: "011",
        capital: "Bamako",
        continent_name: "Africa",
        currency_code: "XOF",
    },
    Country {
        alpha2: "MT",
        alpha3: "MLT",
        country_code: "470",
        name: "Malta",
        iso_3166_2: "ISO 3166-2:MT",
        region: "Europe",
        region_code: "150",
        sub_region: "Southern Europe",
        sub_region_code: "039",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Valletta",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "MH",
        alpha3: "MHL",
        country_code: "584",
        name: "Marshall Islands",
        iso_3166_2: "ISO 3166-2:MH",
        region: "Oceania",
        region_code: "009",
        sub_region: "Micronesia",
        sub_region_code: "057",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Majuro",
        continent_name: "Oceania",
        currency_code: "USD",
    },
    Country {
        alpha2: "MQ",
        alpha3: "MTQ",
        country_code: "474",
        name: "Martinique",
        iso_3166_2: "ISO 3166-2:MQ",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Fort-de-France",
        continent_name: "North America",
        currency_code: "EUR",
    },
    Country {
        alpha2: "MR",
        alpha3: "MRT",
        country_code: "478",
        name: "Mauritania",
        iso_3166_2: "ISO 3166-2:MR",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Western Africa",
        intermediate_region_code: "011",
        capital: "Nouakchott",
        continent_name: "Africa",
        currency_code: "MRU",
    },
    Country {
        alpha2: "MU",
        alpha3: "MUS",
        country_code: "480",
        name: "Mauritius",
        iso_3166_2: "ISO 3166-2:MU",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Port Louis",
        continent_name: "Africa",
        currency_code: "MUR",
    },
    Country {
        alpha2: "YT",
        alpha3: "MYT",
        country_code: "175",
        name: "Mayotte",
        iso_3166_2: "ISO 3166-2:YT",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Mamoudzou",
        continent_name: "Africa",
        currency_code: "EUR",
    },
    Country {
        alpha2: "MX",
        alpha3: "MEX",
        country_code: "484",
        name: "Mexico",
        iso_3166_2: "ISO 3166-2:MX",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Central America",
        intermediate_region_code: "013",
        capital: "Mexico City",
        continent_name: "North America",
        currency_code: "MXN",
    },
    Country {
        alpha2: "FM",
        alpha3: "FSM",
        country_code: "583",
        name: "Micronesia (Federated States of)",
        iso_3166_2: "ISO 3166-2:FM",
        region: "Oceania",
        region_code: "009",
        sub_region: "Micronesia",
        sub_region_code: "057",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Palikir",
        continent_name: "Oceania",
        currency_code: "USD",
    },
    Country {
        alpha2: "MD",
        alpha3: "MDA",
        country_code: "498",
        name: "Moldova, Republic of",
        iso_3166_2: "ISO 3166-2:MD",
        region: "Europe",
        region_code: "150",
        sub_region: "Eastern Europe",
        sub_region_code: "151",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Chisinau",
        continent_name: "Europe",
        currency_code: "MDL",
    },
    Country {
        alpha2: "MC",
        alpha3: "MCO",
        country_code: "492",
        name: "Monaco",
        iso_3166_2: "ISO 3166-2:MC",
        region: "Europe",
        region_code: "150",
        sub_region: "Western Europe",
        sub_region_code: "155",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Monaco",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "MN",
        alpha3: "MNG",
        country_code: "496",
        name: "Mongolia",
        iso_3166_2: "ISO 3166-2:MN",
        region: "Asia",
        region_code: "142",
        sub_region: "Eastern Asia",
        sub_region_code: "030",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Ulaanbaatar",
        continent_name: "Asia",
        currency_code: "MNT",
    },
    Country {
        alpha2: "ME",
        alpha3: "MNE",
        country_code: "499",
        name: "Montenegro",
        iso_3166_2: "ISO 3166-2:ME",
        region: "Europe",
        region_code: "150",
        sub_region: "Southern Europe",
        sub_region_code: "039",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Podgorica",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "MS",
        alpha3: "MSR",
        country_code: "500",
        name: "Montserrat",
        iso_3166_2: "ISO 3166-2:MS",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Plymouth",
        continent_name: "North America",
        currency_code: "XCD",
    },
    Country {
        alpha2: "MA",
        alpha3: "MAR",
        country_code: "504",
        name: "Morocco",
        iso_3166_2: "ISO 3166-2:MA",
        region: "Africa",
        region_code: "002",
        sub_region: "Northern Africa",
        sub_region_code: "015",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Rabat",
        continent_name: "Africa",
        currency_code: "MAD",
    },
    Country {
        alpha2: "MZ",
        alpha3: "MOZ",
        country_code: "508",
        name: "Mozambique",
        iso_3166_2: "ISO 3166-2:MZ",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Maputo",
        continent_name: "Africa",
        currency_code: "MZN",
    },
    Country {
        alpha2: "MM",
        alpha3: "MMR",
        country_code: "104",
        name: "Myanmar",
        iso_3166_2: "ISO 3166-2:MM",
        region: "Asia",
        region_code: "142",
        sub_region: "South-eastern Asia",
        sub_region_code: "035",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Nay Pyi Taw",
        continent_name: "Asia",
        currency_code: "MMK",
    },
    Country {
        alpha2: "NA",
        alpha3: "NAM",
        country_code: "516",
        name: "Namibia",
        iso_3166_2: "ISO 3166-2:NA",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Southern Africa",
        intermediate_region_code: "018",
        capital: "Windhoek",
        continent_name: "Africa",
        currency_code: "NAD",
    },
    Country {
        alpha2: "NR",
        alpha3: "NRU",
        country_code: "520",
        name: "Nauru",
        iso_3166_2: "ISO 3166-2:NR",
        region: "Oceania",
        region_code: "009",
        sub_region: "Micronesia",
        sub_region_code: "057",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Yaren",
        continent_name: "Oceania",
        currency_code: "AUD",
    },
    Country {
        alpha2: "NP",
        alpha3: "NPL",
        country_code: "524",
        name: "Nepal",
        iso_3166_2: "ISO 3166-2:NP",
        region: "Asia",
        region_code: "142",
        sub_region: "Southern Asia",
        sub_region_code: "034",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Kathmandu",
        continent_name: "Asia",
        currency_code: "NPR",
    },
    Country {
        alpha2: "NL",
        alpha3: "NLD",
        country_code: "528",
        name: "Netherlands",
        iso_3166_2: "ISO 3166-2:NL",
        region: "Europe",
        region_code: "150",
        sub_region: "Western Europe",
        sub_region_code: "155",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Amsterdam",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "NC",
        alpha3: "NCL",
        country_code: "540",
        name: "New Caledonia",
        iso_3166_2: "ISO 3166-2:NC",
        region: "Oceania",
        region_code: "009",
        sub_region: "Melanesia",
        sub_region_code: "054",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Noumea",
        continent_name: "Oceania",
        currency_code: "XPF",
    },
    Country {
        alpha2: "NZ",
        alpha3: "NZL",
        country_code: "554",
        name: "New Zealand",
        iso_3166_2: "ISO 3166-2:NZ",
        region: "Oceania",
        region_code: "009",
        sub_region: "Australia and New Zealand",
        sub_region_code: "053",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Wellington",
        continent_name: "Oceania",
        currency_code: "NZD",
    },
    Country {
        alpha2: "NI",
        alpha3: "NIC",
        country_code: "558",
        name: "Nicaragua",
        iso_3166_2: "ISO 3166-2:NI",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Central America",
        intermediate_region_code: "013",
        capital: "Managua",
        continent_name: "North America",
        currency_code: "NIO",
    },
    Country {
        alpha2: "NE",
        alpha3: "NER",
        country_code: "562",
        name: "Niger",
        iso_3166_2: "ISO 3166-2:NE",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Western Africa",
        intermediate_region_code: "011",
        capital: "Niamey",
        continent_name: "Africa",
        currency_code: "XOF",
    },
    Country {
        alpha2: "NG",
        alpha3: "NGA",
        country_code: "566",
        name: "Nigeria",
        iso_3166_2: "ISO 3166-2:NG",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Western Africa",
        intermediate_region_code: "011",
        capital: "Abuja",
        continent_name: "Africa",
        currency_code: "NGN",
    },
    Country {
        alpha2: "NU",
        alpha3: "NIU",
        country_code: "570",
        name: "Niue",
        iso_3166_2: "ISO 3166-2:NU",
        region: "Oceania",
        region_code: "009",
        sub_region: "Polynesia",
        sub_region_code: "061",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Alofi",
        continent_name: "Oceania",
        currency_code: "NZD",
    },
    Country {
        alpha2: "NF",
        alpha3: "NFK",
        country_code: "574",
        name: "Norfolk Island",
        iso_3166_2: "ISO 3166-2:NF",
        region: "Oceania",
        region_code: "009",
        sub_region: "Australia and New Zealand",
        sub_region_code: "053",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Kingston",
        continent_name: "Oceania",
        currency_code: "AUD",
    },
    Country {
        alpha2: "MK",
        alpha3: "MKD",
        country_code: "807",
        name: "North Macedonia",
        iso_3166_2: "ISO 3166-2:MK",
        region: "Europe",
        region_code: "150",
        sub_region: "Southern Europe",
        sub_region_code: "039",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Skopje",
        continent_name: "Europe",
        currency_code: "MKD",
    },
    Country {
        alpha2: "MP",
        alpha3: "MNP",
        country_code: "580",
        name: "Northern Mariana Islands",
        iso_3166_2: "ISO 3166-2:MP",
        region: "Oceania",
        region_code: "009",
        sub_region: "Micronesia",
        sub_region_code: "057",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Saipan",
        continent_name: "Oceania",
        currency_code: "USD",
    },
    Country {
        alpha2: "NO",
        alpha3: "NOR",
        country_code: "578",
        name: "Norway",
        iso_3166_2: "ISO 3166-2:NO",
        region: "Europe",
        region_code: "150",
        sub_region: "Northern Europe",
        sub_region_code: "154",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Oslo",
        continent_name: "Europe",
        currency_code: "NOK",
    },
    Country {
        alpha2: "OM",
        alpha3: "OMN",
        country_code: "512",
        name: "Oman",
        iso_3166_2: "ISO 3166-2:OM",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Muscat",
        continent_name: "Asia",
        currency_code: "OMR",
    },
    Country {
        alpha2: "PK",
        alpha3: "PAK",
        country_code: "586",
        name: "Pakistan",
        iso_3166_2: "ISO 3166-2:PK",
        region: "Asia",
        region_code: "142",
        sub_region: "Southern Asia",
        sub_region_code: "034",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Islamabad",
        continent_name: "Asia",
        currency_code: "PKR",
    },
    Country {
        alpha2: "PW",
        alpha3: "PLW",
        country_code: "585",
        name: "Palau",
        iso_3166_2: "ISO 3166-2:PW",
        region: "Oceania",
        region_code: "009",
        sub_region: "Micronesia",
        sub_region_code: "057",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Ngerulmud",
        continent_name: "Oceania",
        currency_code: "USD",
    },
    Country {
        alpha2: "PS",
        alpha3: "PSE",
        country_code: "275",
        name: "Palestine, State of",
        iso_3166_2: "ISO 3166-2:PS",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "East Jerusalem",
        continent_name: "Asia",
        currency_code: "ILS",
    },
    Country {
        alpha2: "PA",
        alpha3: "PAN",
        country_code: "591",
        name: "Panama",
        iso_3166_2: "ISO 3166-2:PA",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Central America",
        intermediate_region_code: "013",
        capital: "Panama City",
        continent_name: "North America",
        currency_code: "PAB",
    },
    Country {
        alpha2: "PG",
        alpha3: "PNG",
        country_code: "598",
        name: "Papua New Guinea",
        iso_3166_2: "ISO 3166-2:PG",
        region: "Oceania",
        region_code: "009",
        sub_region: "Melanesia",
        sub_region_code: "054",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Port Moresby",
        continent_name: "Oceania",
        currency_code: "PGK",
    },
    Country {
        alpha2: "PY",
        alpha3: "PRY",
        country_code: "600",
        name: "Paraguay",
        iso_3166_2: "ISO 3166-2:PY",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "South America",
        intermediate_region_code: "005",
        capital: "Asuncion",
        continent_name: "South America",
        currency_code: "PYG",
    },
    Country {
        alpha2: "PE",
        alpha3: "PER",
        country_code: "604",
        name: "Peru",
        iso_3166_2: "ISO 3166-2:PE",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "South America",
        intermediate_region_code: "005",
        capital: "Lima",
        continent_name: "South America",
        currency_code: "PEN",
    },
    Country {
        alpha2: "PH",
        alpha3: "PHL",
        country_code: "608",
        name: "Philippines",
        iso_3166_2: "ISO 3166-2:PH",
        region: "Asia",
        region_code: "142",
        sub_region: "South-eastern Asia",
        sub_region_code: "035",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Manila",
        continent_name: "Asia",
        currency_code: "PHP",
    },
    Country {
        alpha2: "PN",
        alpha3: "PCN",
        country_code: "612",
        name: "Pitcairn",
        iso_3166_2: "ISO 3166-2:PN",
        region: "Oceania",
        region_code: "009",
        sub_region: "Polynesia",
        sub_region_code: "061",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Adamstown",
        continent_name: "Oceania",
        currency_code: "NZD",
    },
    Country {
        alpha2: "PL",
        alpha3: "POL",
        country_code: "616",
        name: "Poland",
        iso_3166_2: "ISO 3166-2:PL",
        region: "Europe",
        region_code: "150",
        sub_region: "Eastern Europe",
        sub_region_code: "151",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Warsaw",
        continent_name: "Europe",
        currency_code: "PLN",
    },
    Country {
        alpha2: "PT",
        alpha3: "PRT",
        country_code: "620",
        name: "Portugal",
        iso_3166_2: "ISO 3166-2:PT",
        region: "Europe",
        region_code: "150",
        sub_region: "Southern Europe",
        sub_region_code: "039",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Lisbon",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "PR",
        alpha3: "PRI",
        country_code: "630",
        name: "Puerto Rico",
        iso_3166_2: "ISO 3166-2:PR",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "San Juan",
        continent_name: "North America",
        currency_code: "USD",
    },
    Country {
        alpha2: "QA",
        alpha3: "QAT",
        country_code: "634",
        name: "Qatar",
        iso_3166_2: "ISO 3166-2:QA",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Doha",
        continent_name: "Asia",
        currency_code: "QAR",
    },
    Country {
        alpha2: "RE",
        alpha3: "REU",
        country_code: "638",
        name: "Réunion",
        iso_3166_2: "ISO 3166-2:RE",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Saint-Denis",
        continent_name: "Africa",
        currency_code: "EUR",
    },
    Country {
        alpha2: "RO",
        alpha3: "ROU",
        country_code: "642",
        name: "Romania",
        iso_3166_2: "ISO 3166-2:RO",
        region: "Europe",
        region_code: "150",
        sub_region: "Eastern Europe",
        sub_region_code: "151",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Bucharest",
        continent_name: "Europe",
        currency_code: "RON",
    },
    Country {
        alpha2: "RU",
        alpha3: "RUS",
        country_code: "643",
        name: "Russian Federation",
        iso_3166_2: "ISO 3166-2:RU",
        region: "Europe",
        region_code: "150",
        sub_region: "Eastern Europe",
        sub_region_code: "151",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Moscow",
        continent_name: "Europe",
        currency_code: "RUB",
    },
    Country {
        alpha2: "RW",
        alpha3: "RWA",
        country_code: "646",
        name: "Rwanda",
        iso_3166_2: "ISO 3166-2:RW",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Kigali",
        continent_name: "Africa",
        currency_code: "RWF",
    },
    Country {
        alpha2: "BL",
        alpha3: "BLM",
        country_code: "652",
        name: "Saint Barthélemy",
        iso_3166_2: "ISO 3166-2:BL",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Gustavia",
        continent_name: "North America",
        currency_code: "EUR",
    },
    Country {
        alpha2: "SH",
        alpha3: "SHN",
        country_code: "654",
        name: "Saint Helena, Ascension and Tristan da Cunha",
        iso_3166_2: "ISO 3166-2:SH",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Western Africa",
        intermediate_region_code: "011",
        capital: "Jamestown",
        continent_name: "Africa",
        currency_code: "SHP",
    },
    Country {
        alpha2: "KN",
        alpha3: "KNA",
        country_code: "659",
        name: "Saint Kitts and Nevis",
        iso_3166_2: "ISO 3166-2:KN",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Basseterre",
        continent_name: "North America",
        currency_code: "XCD",
    },
    Country {
        alpha2: "LC",
        alpha3: "LCA",
        country_code: "662",
        name: "Saint Lucia",
        iso_3166_2: "ISO 3166-2:LC",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Castries",
        continent_name: "North America",
        currency_code: "XCD",
    },
    Country {
        alpha2: "MF",
        alpha3: "MAF",
        country_code: "663",
        name: "Saint Martin (French part)",
        iso_3166_2: "ISO 3166-2:MF",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Marigot",
        continent_name: "North America",
        currency_code: "EUR",
    },
    Country {
        alpha2: "PM",
        alpha3: "SPM",
        country_code: "666",
        name: "Saint Pierre and Miquelon",
        iso_3166_2: "ISO 3166-2:PM",
        region: "Americas",
        region_code: "019",
        sub_region: "Northern America",
        sub_region_code: "021",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Saint-Pierre",
        continent_name: "North America",
        currency_code: "EUR",
    },
    Country {
        alpha2: "VC",
        alpha3: "VCT",
        country_code: "670",
        name: "Saint Vincent and the Grenadines",
        iso_3166_2: "ISO 3166-2:VC",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Kingstown",
        continent_name: "North America",
        currency_code: "XCD",
    },
    Country {
        alpha2: "WS",
        alpha3: "WSM",
        country_code: "882",
        name: "Samoa",
        iso_3166_2: "ISO 3166-2:WS",
        region: "Oceania",
        region_code: "009",
        sub_region: "Polynesia",
        sub_region_code: "061",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Apia",
        continent_name: "Oceania",
        currency_code: "WST",
    },
    Country {
        alpha2: "SM",
        alpha3: "SMR",
        country_code: "674",
        name: "San Marino",
        iso_3166_2: "ISO 3166-2:SM",
        region: "Europe",
        region_code: "150",
        sub_region: "Southern Europe",
        sub_region_code: "039",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "San Marino",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "ST",
        alpha3: "STP",
        country_code: "678",
        name: "Sao Tome and Principe",
        iso_3166_2: "ISO 3166-2:ST",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Middle Africa",
        intermediate_region_code: "017",
        capital: "Sao Tome",
        continent_name: "Africa",
        currency_code: "STN",
    },
    Country {
        alpha2: "SA",
        alpha3: "SAU",
        country_code: "682",
        name: "Saudi Arabia",
        iso_3166_2: "ISO 3166-2:SA",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Riyadh",
        continent_name: "Asia",
        currency_code: "SAR",
    },
    Country {
        alpha2: "SN",
        alpha3: "SEN",
        country_code: "686",
        name: "Senegal",
        iso_3166_2: "ISO 3166-2:SN",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Western Africa",
        intermediate_region_code: "011",
        capital: "Dakar",
        continent_name: "Africa",
        currency_code: "XOF",
    },
    Country {
        alpha2: "RS",
        alpha3: "SRB",
        country_code: "688",
        name: "Serbia",
        iso_3166_2: "ISO 3166-2:RS",
        region: "Europe",
        region_code: "150",
        sub_region: "Southern Europe",
        sub_region_code: "039",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Belgrade",
        continent_name: "Europe",
        currency_code: "RSD",
    },
    Country {
        alpha2: "SC",
        alpha3: "SYC",
        country_code: "690",
        name: "Seychelles",
        iso_3166_2: "ISO 3166-2:SC",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Victoria",
        continent_name: "Africa",
        currency_code: "SCR",
    },
    Country {
        alpha2: "SL",
        alpha3: "SLE",
        country_code: "694",
        name: "Sierra Leone",
        iso_3166_2: "ISO 3166-2:SL",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Western Africa",
        intermediate_region_code: "011",
        capital: "Freetown",
        continent_name: "Africa",
        currency_code: "SLE",
    },
    Country {
        alpha2: "SG",
        alpha3: "SGP",
        country_code: "702",
        name: "Singapore",
        iso_3166_2: "ISO 3166-2:SG",
        region: "Asia",
        region_code: "142",
        sub_region: "South-eastern Asia",
        sub_region_code: "035",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Singapore",
        continent_name: "Asia",
        currency_code: "SGD",
    },
    Country {
        alpha2: "SX",
        alpha3: "SXM",
        country_code: "534",
        name: "Sint Maarten (Dutch part)",
        iso_3166_2: "ISO 3166-2:SX",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Philipsburg",
        continent_name: "North America",
        currency_code: "ANG",
    },
    Country {
        alpha2: "SK",
        alpha3: "SVK",
        country_code: "703",
        name: "Slovakia",
        iso_3166_2: "ISO 3166-2:SK",
        region: "Europe",
        region_code: "150",
        sub_region: "Eastern Europe",
        sub_region_code: "151",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Bratislava",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "SI",
        alpha3: "SVN",
        country_code: "705",
        name: "Slovenia",
        iso_3166_2: "ISO 3166-2:SI",
        region: "Europe",
        region_code: "150",
        sub_region: "Southern Europe",
        sub_region_code: "039",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Ljubljana",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "SB",
        alpha3: "SLB",
        country_code: "090",
        name: "Solomon Islands",
        iso_3166_2: "ISO 3166-2:SB",
        region: "Oceania",
        region_code: "009",
        sub_region: "Melanesia",
        sub_region_code: "054",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Honiara",
        continent_name: "Oceania",
        currency_code: "SBD",
    },
    Country {
        alpha2: "SO",
        alpha3: "SOM",
        country_code: "706",
        name: "Somalia",
        iso_3166_2: "ISO 3166-2:SO",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Mogadishu",
        continent_name: "Africa",
        currency_code: "SOS",
    },
    Country {
        alpha2: "ZA",
        alpha3: "ZAF",
        country_code: "710",
        name: "South Africa",
        iso_3166_2: "ISO 3166-2:ZA",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Southern Africa",
        intermediate_region_code: "018",
        capital: "Pretoria",
        continent_name: "Africa",
        currency_code: "ZAR",
    },
    Country {
        alpha2: "GS",
        alpha3: "SGS",
        country_code: "239",
        name: "South Georgia and the South Sandwich Islands",
        iso_3166_2: "ISO 3166-2:GS",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "South America",
        intermediate_region_code: "005",
        capital: "Grytviken",
        continent_name: "Antarctica",
        currency_code: "GBP",
    },
    Country {
        alpha2: "SS",
        alpha3: "SSD",
        country_code: "728",
        name: "South Sudan",
        iso_3166_2: "ISO 3166-2:SS",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Juba",
        continent_name: "Africa",
        currency_code: "SSP",
    },
    Country {
        alpha2: "ES",
        alpha3: "ESP",
        country_code: "724",
        name: "Spain",
        iso_3166_2: "ISO 3166-2:ES",
        region: "Europe",
        region_code: "150",
        sub_region: "Southern Europe",
        sub_region_code: "039",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Madrid",
        continent_name: "Europe",
        currency_code: "EUR",
    },
    Country {
        alpha2: "LK",
        alpha3: "LKA",
        country_code: "144",
        name: "Sri Lanka",
        iso_3166_2: "ISO 3166-2:LK",
        region: "Asia",
        region_code: "142",
        sub_region: "Southern Asia",
        sub_region_code: "034",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Colombo",
        continent_name: "Asia",
        currency_code: "LKR",
    },
    Country {
        alpha2: "SD",
        alpha3: "SDN",
        country_code: "729",
        name: "Sudan",
        iso_3166_2: "ISO 3166-2:SD",
        region: "Africa",
        region_code: "002",
        sub_region: "Northern Africa",
        sub_region_code: "015",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Khartoum",
        continent_name: "Africa",
        currency_code: "SDG",
    },
    Country {
        alpha2: "SR",
        alpha3: "SUR",
        country_code: "740",
        name: "Suriname",
        iso_3166_2: "ISO 3166-2:SR",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "South America",
        intermediate_region_code: "005",
        capital: "Paramaribo",
        continent_name: "South America",
        currency_code: "SRD",
    },
    Country {
        alpha2: "SJ",
        alpha3: "SJM",
        country_code: "744",
        name: "Svalbard and Jan Mayen",
        iso_3166_2: "ISO 3166-2:SJ",
        region: "Europe",
        region_code: "150",
        sub_region: "Northern Europe",
        sub_region_code: "154",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Longyearbyen",
        continent_name: "Europe",
        currency_code: "NOK",
    },
    Country {
        alpha2: "SE",
        alpha3: "SWE",
        country_code: "752",
        name: "Sweden",
        iso_3166_2: "ISO 3166-2:SE",
        region: "Europe",
        region_code: "150",
        sub_region: "Northern Europe",
        sub_region_code: "154",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Stockholm",
        continent_name: "Europe",
        currency_code: "SEK",
    },
    Country {
        alpha2: "CH",
        alpha3: "CHE",
        country_code: "756",
        name: "Switzerland",
        iso_3166_2: "ISO 3166-2:CH",
        region: "Europe",
        region_code: "150",
        sub_region: "Western Europe",
        sub_region_code: "155",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Bern",
        continent_name: "Europe",
        currency_code: "CHF",
    },
    Country {
        alpha2: "SY",
        alpha3: "SYR",
        country_code: "760",
        name: "Syrian Arab Republic",
        iso_3166_2: "ISO 3166-2:SY",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Damascus",
        continent_name: "Asia",
        currency_code: "SYP",
    },
    Country {
        alpha2: "TW",
        alpha3: "TWN",
        country_code: "158",
        name: "Taiwan, Province of China",
        iso_3166_2: "ISO 3166-2:TW",
        region: "Asia",
        region_code: "142",
        sub_region: "Eastern Asia",
        sub_region_code: "030",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Taipei",
        continent_name: "Asia",
        currency_code: "TWD",
    },
    Country {
        alpha2: "TJ",
        alpha3: "TJK",
        country_code: "762",
        name: "Tajikistan",
        iso_3166_2: "ISO 3166-2:TJ",
        region: "Asia",
        region_code: "142",
        sub_region: "Central Asia",
        sub_region_code: "143",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Dushanbe",
        continent_name: "Asia",
        currency_code: "TJS",
    },
    Country {
        alpha2: "TZ",
        alpha3: "TZA",
        country_code: "834",
        name: "Tanzania, United Republic of",
        iso_3166_2: "ISO 3166-2:TZ",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Dodoma",
        continent_name: "Africa",
        currency_code: "TZS",
    },
    Country {
        alpha2: "TH",
        alpha3: "THA",
        country_code: "764",
        name: "Thailand",
        iso_3166_2: "ISO 3166-2:TH",
        region: "Asia",
        region_code: "142",
        sub_region: "South-eastern Asia",
        sub_region_code: "035",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Bangkok",
        continent_name: "Asia",
        currency_code: "THB",
    },
    Country {
        alpha2: "TL",
        alpha3: "TLS",
        country_code: "626",
        name: "Timor-Leste",
        iso_3166_2: "ISO 3166-2:TL",
        region: "Asia",
        region_code: "142",
        sub_region: "South-eastern Asia",
        sub_region_code: "035",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Dili",
        continent_name: "Oceania",
        currency_code: "USD",
    },
    Country {
        alpha2: "TG",
        alpha3: "TGO",
        country_code: "768",
        name: "Togo",
        iso_3166_2: "ISO 3166-2:TG",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Western Africa",
        intermediate_region_code: "011",
        capital: "Lome",
        continent_name: "Africa",
        currency_code: "XOF",
    },
    Country {
        alpha2: "TK",
        alpha3: "TKL",
        country_code: "772",
        name: "Tokelau",
        iso_3166_2: "ISO 3166-2:TK",
        region: "Oceania",
        region_code: "009",
        sub_region: "Polynesia",
        sub_region_code: "061",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "",
        continent_name: "Oceania",
        currency_code: "NZD",
    },
    Country {
        alpha2: "TO",
        alpha3: "TON",
        country_code: "776",
        name: "Tonga",
        iso_3166_2: "ISO 3166-2:TO",
        region: "Oceania",
        region_code: "009",
        sub_region: "Polynesia",
        sub_region_code: "061",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Nuku'alofa",
        continent_name: "Oceania",
        currency_code: "TOP",
    },
    Country {
        alpha2: "TT",
        alpha3: "TTO",
        country_code: "780",
        name: "Trinidad and Tobago",
        iso_3166_2: "ISO 3166-2:TT",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Port of Spain",
        continent_name: "North America",
        currency_code: "TTD",
    },
    Country {
        alpha2: "TN",
        alpha3: "TUN",
        country_code: "788",
        name: "Tunisia",
        iso_3166_2: "ISO 3166-2:TN",
        region: "Africa",
        region_code: "002",
        sub_region: "Northern Africa",
        sub_region_code: "015",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Tunis",
        continent_name: "Africa",
        currency_code: "TND",
    },
    Country {
        alpha2: "TR",
        alpha3: "TUR",
        country_code: "792",
        name: "Türkiye",
        iso_3166_2: "ISO 3166-2:TR",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Ankara",
        continent_name: "Asia",
        currency_code: "TRY",
    },
    Country {
        alpha2: "TM",
        alpha3: "TKM",
        country_code: "795",
        name: "Turkmenistan",
        iso_3166_2: "ISO 3166-2:TM",
        region: "Asia",
        region_code: "142",
        sub_region: "Central Asia",
        sub_region_code: "143",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Ashgabat",
        continent_name: "Asia",
        currency_code: "TMT",
    },
    Country {
        alpha2: "TC",
        alpha3: "TCA",
        country_code: "796",
        name: "Turks and Caicos Islands",
        iso_3166_2: "ISO 3166-2:TC",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Cockburn Town",
        continent_name: "North America",
        currency_code: "USD",
    },
    Country {
        alpha2: "TV",
        alpha3: "TUV",
        country_code: "798",
        name: "Tuvalu",
        iso_3166_2: "ISO 3166-2:TV",
        region: "Oceania",
        region_code: "009",
        sub_region: "Polynesia",
        sub_region_code: "061",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Funafuti",
        continent_name: "Oceania",
        currency_code: "AUD",
    },
    Country {
        alpha2: "UG",
        alpha3: "UGA",
        country_code: "800",
        name: "Uganda",
        iso_3166_2: "ISO 3166-2:UG",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Kampala",
        continent_name: "Africa",
        currency_code: "UGX",
    },
    Country {
        alpha2: "UA",
        alpha3: "UKR",
        country_code: "804",
        name: "Ukraine",
        iso_3166_2: "ISO 3166-2:UA",
        region: "Europe",
        region_code: "150",
        sub_region: "Eastern Europe",
        sub_region_code: "151",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Kyiv",
        continent_name: "Europe",
        currency_code: "UAH",
    },
    Country {
        alpha2: "AE",
        alpha3: "ARE",
        country_code: "784",
        name: "United Arab Emirates",
        iso_3166_2: "ISO 3166-2:AE",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Abu Dhabi",
        continent_name: "Asia",
        currency_code: "AED",
    },
    Country {
        alpha2: "GB",
        alpha3: "GBR",
        country_code: "826",
        name: "United Kingdom of Great Britain and Northern Ireland",
        iso_3166_2: "ISO 3166-2:GB",
        region: "Europe",
        region_code: "150",
        sub_region: "Northern Europe",
        sub_region_code: "154",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "London",
        continent_name: "Europe",
        currency_code: "GBP",
    },
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
    },
    Country {
        alpha2: "UM",
        alpha3: "UMI",
        country_code: "581",
        name: "United States Minor Outlying Islands",
        iso_3166_2: "ISO 3166-2:UM",
        region: "Oceania",
        region_code: "009",
        sub_region: "Micronesia",
        sub_region_code: "057",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "",
        continent_name: "Oceania",
        currency_code: "USD",
    },
    Country {
        alpha2: "UY",
        alpha3: "URY",
        country_code: "858",
        name: "Uruguay",
        iso_3166_2: "ISO 3166-2:UY",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "South America",
        intermediate_region_code: "005",
        capital: "Montevideo",
        continent_name: "South America",
        currency_code: "UYU",
    },
    Country {
        alpha2: "UZ",
        alpha3: "UZB",
        country_code: "860",
        name: "Uzbekistan",
        iso_3166_2: "ISO 3166-2:UZ",
        region: "Asia",
        region_code: "142",
        sub_region: "Central Asia",
        sub_region_code: "143",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Tashkent",
        continent_name: "Asia",
        currency_code: "UZS",
    },
    Country {
        alpha2: "VU",
        alpha3: "VUT",
        country_code: "548",
        name: "Vanuatu",
        iso_3166_2: "ISO 3166-2:VU",
        region: "Oceania",
        region_code: "009",
        sub_region: "Melanesia",
        sub_region_code: "054",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Port Vila",
        continent_name: "Oceania",
        currency_code: "VUV",
    },
    Country {
        alpha2: "VE",
        alpha3: "VEN",
        country_code: "862",
        name: "Venezuela (Bolivarian Republic of)",
        iso_3166_2: "ISO 3166-2:VE",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "South America",
        intermediate_region_code: "005",
        capital: "Caracas",
        continent_name: "South America",
        currency_code: "VES",
    },
    Country {
        alpha2: "VN",
        alpha3: "VNM",
        country_code: "704",
        name: "Viet Nam",
        iso_3166_2: "ISO 3166-2:VN",
        region: "Asia",
        region_code: "142",
        sub_region: "South-eastern Asia",
        sub_region_code: "035",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Hanoi",
        continent_name: "Asia",
        currency_code: "VND",
    },
    Country {
        alpha2: "VG",
        alpha3: "VGB",
        country_code: "092",
        name: "Virgin Islands (British)",
        iso_3166_2: "ISO 3166-2:VG",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Road Town",
        continent_name: "North America",
        currency_code: "USD",
    },
    Country {
        alpha2: "VI",
        alpha3: "VIR",
        country_code: "850",
        name: "Virgin Islands (U.S.)",
        iso_3166_2: "ISO 3166-2:VI",
        region: "Americas",
        region_code: "019",
        sub_region: "Latin America and the Caribbean",
        sub_region_code: "419",
        intermediate_region: "Caribbean",
        intermediate_region_code: "029",
        capital: "Charlotte Amalie",
        continent_name: "North America",
        currency_code: "USD",
    },
    Country {
        alpha2: "WF",
        alpha3: "WLF",
        country_code: "876",
        name: "Wallis and Futuna",
        iso_3166_2: "ISO 3166-2:WF",
        region: "Oceania",
        region_code: "009",
        sub_region: "Polynesia",
        sub_region_code: "061",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Mata Utu",
        continent_name: "Oceania",
        currency_code: "XPF",
    },
    Country {
        alpha2: "EH",
        alpha3: "ESH",
        country_code: "732",
        name: "Western Sahara",
        iso_3166_2: "ISO 3166-2:EH",
        region: "Africa",
        region_code: "002",
        sub_region: "Northern Africa",
        sub_region_code: "015",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "El Aaiun",
        continent_name: "Africa",
        currency_code: "MAD",
    },
    Country {
        alpha2: "YE",
        alpha3: "YEM",
        country_code: "887",
        name: "Yemen",
        iso_3166_2: "ISO 3166-2:YE",
        region: "Asia",
        region_code: "142",
        sub_region: "Western Asia",
        sub_region_code: "145",
        intermediate_region: "",
        intermediate_region_code: "",
        capital: "Sanaa",
        continent_name: "Asia",
        currency_code: "YER",
    },
    Country {
        alpha2: "ZM",
        alpha3: "ZMB",
        country_code: "894",
        name: "Zambia",
        iso_3166_2: "ISO 3166-2:ZM",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Lusaka",
        continent_name: "Africa",
        currency_code: "ZMW",
    },
    Country {
        alpha2: "ZW",
        alpha3: "ZWE",
        country_code: "716",
        name: "Zimbabwe",
        iso_3166_2: "ISO 3166-2:ZW",
        region: "Africa",
        region_code: "002",
        sub_region: "Sub-Saharan Africa",
        sub_region_code: "202",
        intermediate_region: "Eastern Africa",
        intermediate_region_code: "014",
        capital: "Harare",
        continent_name: "Africa",
        currency_code: "ZWL",
    },
];

pub(crate) static BY_NAME: &[(&str, usize)] = &[
    ("afghanistan", 0),
    ("åland islands", 1),
    ("albania", 2),
    ("algeria", 3),
    ("american samoa", 4),
    ("andorra", 5),
    ("angola", 6),
    ("anguilla", 7),
    ("antarctica", 8),
    ("antigua and barbuda", 9),
    ("argentina", 10),
    ("armenia", 11),
    ("aruba", 12),
    ("australia", 13),
    ("austria", 14),
    ("azerbaijan", 15),
    ("bahamas", 16),
    ("bahrain", 17),
    ("bangladesh", 18),
    ("barbados", 19),
    ("belarus", 20),
    ("belgium", 21),
    ("belize", 22),
    ("benin", 23),
    ("bermuda", 24),
    ("bhutan", 25),
    ("bolivia (plurinational state of)", 26),
    ("bonaire, sint eustatius and saba", 27),
    ("bosnia and herzegovina", 28),
    ("botswana", 29),
    ("bouvet island", 30),
    ("brazil", 31),
    ("british indian ocean territory", 32),
    ("brunei darussalam", 33),
    ("bulgaria", 34),
    ("burkina faso", 35),
    ("burundi", 36),
    ("cabo verde", 37),
    ("cambodia", 38),
    ("cameroon", 39),
    ("canada", 40),
    ("cayman islands", 41),
    ("central african republic", 42),
    ("chad", 43),
    ("chile", 44),
    ("china", 45),
    ("christmas island", 46),
    ("cocos (keeling) islands", 47),
    ("colombia", 48),
    ("comoros", 49),
    ("congo", 50),
    ("congo, democratic republic of the", 51),
    ("cook islands", 52),
    ("costa rica", 53),
    ("côte d'ivoire", 54),
    ("croatia", 55),
    ("cuba", 56),
    ("curaçao", 57),
    ("cyprus", 58),
    ("czechia", 59),
    ("denmark", 60),
    ("djibouti", 61),
    ("dominica", 62),
    ("dominican republic", 63),
    ("ecuador", 64),
    ("egypt", 65),
    ("el salvador", 66),
    ("equatorial guinea", 67),
    ("eritrea", 68),
    ("estonia", 69),
    ("eswatini", 70),
    ("ethiopia", 71),
    ("falkland islands (malvinas)", 72),
    ("faroe islands", 73),
    ("fiji", 74),
    ("finland", 75),
    ("france", 76),
    ("french guiana", 77),
    ("french polynesia", 78),
    ("french southern territories", 79),
    ("gabon", 80),
    ("gambia", 81),
    ("georgia", 82),
    ("germany", 83),
    ("ghana", 84),
    ("gibraltar", 85),
    ("greece", 86),
    ("greenland", 87),
    ("grenada", 88),
    ("guadeloupe", 89),
    ("guam", 90),
    ("guatemala", 91),
    ("guernsey", 92),
    ("guinea", 93),
    ("guinea-bissau", 94),
    ("guyana", 95),
    ("haiti", 96),
    ("heard island and mcdonald islands", 97),
    ("holy see", 98),
    ("honduras", 99),
    ("hong kong", 100),
    ("hungary", 101),
    ("iceland", 102),
    ("india", 103),
    ("indonesia", 104),
    ("iran (islamic republic of)", 105),
    ("iraq", 106),
    ("ireland", 107),
    ("isle of man", 108),
    ("israel", 109),
    ("italy", 110),
    ("jamaica", 111),
    ("japan", 112),
    ("jersey", 113),
    ("jordan", 114),
    ("kazakhstan", 115),
    ("kenya", 116),
    ("kiribati", 117),
    ("korea (democratic people's republic of)", 118),
    ("korea, republic of", 119),
    ("kuwait", 120),
    ("kyrgyzstan", 121),
    ("lao people's democratic republic", 122),
    ("latvia", 123),
    ("lebanon", 124),
    ("lesotho", 125),
    ("liberia", 126),
    ("libya", 127),
    ("liechtenstein", 128),
    ("lithuania", 129),
    ("luxembourg", 130),
    ("macao", 131),
    ("madagascar", 132),
    ("malawi", 133),
    ("malaysia", 134),
    ("maldives", 135),
    ("mali", 136),
    ("malta", 137),
    ("marshall islands", 138),
    ("martinique", 139),
    ("mauritania", 140),
    ("mauritius", 141),
    ("mayotte", 142),
    ("mexico", 143),
    ("micronesia (federated states of)", 144),
    ("moldova, republic of", 145),
    ("monaco", 146),
    ("mongolia", 147),
    ("montenegro", 148),
    ("montserrat", 149),
    ("morocco", 150),
    ("mozambique", 151),
    ("myanmar", 152),
    ("namibia", 153),
    ("nauru", 154),
    ("nepal", 155),
    ("netherlands", 156),
    ("new caledonia", 157),
    ("new zealand", 158),
    ("nicaragua", 159),
    ("niger", 160),
    ("nigeria", 161),
    ("niue", 162),
    ("norfolk island", 163),
    ("north macedonia", 164),
    ("northern mariana islands", 165),
    ("norway", 166),
    ("oman", 167),
    ("pakistan", 168),
    ("palau", 169),
    ("palestine, state of", 170),
    ("panama", 171),
    ("papua new guinea", 172),
    ("paraguay", 173),
    ("peru", 174),
    ("philippines", 175),
    ("pitcairn", 176),
    ("poland", 177),
    ("portugal", 178),
    ("puerto rico", 179),
    ("qatar", 180),
    ("réunion", 181),
    ("romania", 182),
    ("russian federation", 183),
    ("rwanda", 184),
    ("saint barthélemy", 185),
    ("saint helena, ascension and tristan da cunha", 186),
    ("saint kitts and nevis", 187),
    ("saint lucia", 188),
    ("saint martin (french part)", 189),
    ("saint pierre and miquelon", 190),
    ("saint vincent and the grenadines", 191),
    ("samoa", 192),
    ("san marino", 193),
    ("sao tome and principe", 194),
    ("saudi arabia", 195),
    ("senegal", 196),
    ("serbia", 197),
    ("seychelles", 198),
    ("sierra leone", 199),
    ("singapore", 200),
    ("sint maarten (dutch part)", 201),
    ("slovakia", 202),
    ("slovenia", 203),
    ("solomon islands", 204),
    ("somalia", 205),
    ("south africa", 206),
    ("south georgia and the south sandwich islands", 207),
    ("south sudan", 208),
    ("spain", 209),
    ("sri lanka", 210),
    ("sudan", 211),
    ("suriname", 212),
    ("svalbard and jan mayen", 213),
    ("sweden", 214),
    ("switzerland", 215),
    ("syrian arab republic", 216),
    ("taiwan, province of china", 217),
    ("tajikistan", 218),
    ("tanzania, united republic of", 219),
    ("thailand", 220),
    ("timor-leste", 221),
    ("togo", 222),
    ("tokelau", 223),
    ("tonga", 224),
    ("trinidad and tobago", 225),
    ("tunisia", 226),
    ("türkiye", 227),
    ("turkmenistan", 228),
    ("turks and caicos islands", 229),
    ("tuvalu", 230),
    ("uganda", 231),
    ("ukraine", 232),
    ("united arab emirates", 233),
    ("united kingdom of great britain and northern ireland", 234),
    ("united states of america", 235),
    ("united states minor outlying islands", 236),
    ("uruguay", 237),
    ("uzbekistan", 238),
    ("vanuatu", 239),
    ("venezuela (bolivarian republic of)", 240),
    ("viet nam", 241),
    ("virgin islands (british)", 242),
    ("virgin islands (u.s.)", 243),
    ("wallis and futuna", 244),
    ("western sahara", 245),
    ("yemen", 246),
    ("zambia", 247),
    ("zimbabwe", 248),
];

pub(crate) static BY_ALPHA2: &[(&str, usize)] = &[
    ("AF", 0),
    ("AX", 1),
    ("AL", 2),
    ("DZ", 3),
    ("AS", 4),
    ("AD", 5),
    ("AO", 6),
    ("AI", 7),
    ("AQ", 8),
    ("AG", 9),
    ("AR", 10),
    ("AM", 11),
    ("AW", 12),
    ("AU", 13),
    ("AT", 14),
    ("AZ", 15),
    ("BS", 16),
    ("BH", 17),
    ("BD", 18),
    ("BB", 19),
    ("BY", 20),
    ("BE", 21),
    ("BZ", 22),
    ("BJ", 23),
    ("BM", 24),
    ("BT", 25),
    ("BO", 26),
    ("BQ", 27),
    ("BA", 28),
    ("BW", 29),
    ("BV", 30),
    ("BR", 31),
    ("IO", 32),
    ("BN", 33),
    ("BG", 34),
    ("BF", 35),
    ("BI", 36),
    ("CV", 37),
    ("KH", 38),
    ("CM", 39),
    ("CA", 40),
    ("KY", 41),
    ("CF", 42),
    ("TD", 43),
    ("CL", 44),
    ("CN", 45),
    ("CX", 46),
    ("CC", 47),
    ("CO", 48),
    ("KM", 49),
    ("CG", 50),
    ("CD", 51),
    ("CK", 52),
    ("CR", 53),
    ("CI", 54),
    ("HR", 55),
    ("CU", 56),
    ("CW", 57),
    ("CY", 58),
    ("CZ", 59),
    ("DK", 60),
    ("DJ", 61),
    ("DM", 62),
    ("DO", 63),
    ("EC", 64),
    ("EG", 65),
    ("SV", 66),
    ("GQ", 67),
    ("ER", 68),
    ("EE", 69),
    ("SZ", 70),
    ("ET", 71),
    ("FK", 72),
    ("FO", 73),
    ("FJ", 74),
    ("FI", 75),
    ("FR", 76),
    ("GF", 77),
    ("PF", 78),
    ("TF", 79),
    ("GA", 80),
    ("GM", 81),
    ("GE", 82),
    ("DE", 83),
    ("GH", 84),
    ("GI", 85),
    ("GR", 86),
    ("GL", 87),
    ("GD", 88),
    ("GP", 89),
    ("GU", 90),
    ("GT", 91),
    ("GG", 92),
    ("GN", 93),
    ("GW", 94),
    ("GY", 95),
    ("HT", 96),
    ("HM", 97),
    ("VA", 98),
    ("HN", 99),
    ("HK", 100),
    ("HU", 101),
    ("IS", 102),
    ("IN", 103),
    ("ID", 104),
    ("IR", 105),
    ("IQ", 106),
    ("IE", 107),
    ("IM", 108),
    ("IL", 109),
    ("IT", 110),
    ("JM", 111),
    ("JP", 112),
    ("JE", 113),
    ("JO", 114),
    ("KZ", 115),
    ("KE", 116),
    ("KI", 117),
    ("KP", 118),
    ("KR", 119),
    ("KW", 120),
    ("KG", 121),
    ("LA", 122),
    ("LV", 123),
    ("LB", 124),
    ("LS", 125),
    ("LR", 126),
    ("LY", 127),
    ("LI", 128),
    ("LT", 129),
    ("LU", 130),
    ("MO", 131),
    ("MG", 132),
    ("MW", 133),
    ("MY", 134),
    ("MV", 135),
    ("ML", 136),
    ("MT", 137),
    ("MH", 138),
    ("MQ", 139),
    ("MR", 140),
    ("MU", 141),
    ("YT", 142),
    ("MX", 143),
    ("FM", 144),
    ("MD", 145),
    ("MC", 146),
    ("MN", 147),
    ("ME", 148),
    ("MS", 149),
    ("MA", 150),
    ("MZ", 151),
    ("MM", 152),
    ("NA", 153),
    ("NR", 154),
    ("NP", 155),
    ("NL", 156),
    ("NC", 157),
    ("NZ", 158),
    ("NI", 159),
    ("NE", 160),
    ("NG", 161),
    ("NU", 162),
    ("NF", 163),
    ("MK", 164),
    ("MP", 165),
    ("NO", 166),
    ("OM", 167),
    ("PK", 168),
    ("PW", 169),
    ("PS", 170),
    ("PA", 171),
    ("PG", 172),
    ("PY", 173),
    ("PE", 174),
    ("PH", 175),
    ("PN", 176),
    ("PL", 177),
    ("PT", 178),
    ("PR", 179),
    ("QA", 180),
    ("RE", 181),
    ("RO", 182),
    ("RU", 183),
    ("RW", 184),
    ("BL", 185),
    ("SH", 186),
    ("KN", 187),
    ("LC", 188),
    ("MF", 189),
    ("PM", 190),
    ("VC", 191),
    ("WS", 192),
    ("SM", 193),
    ("ST", 194),
    ("SA", 195),
    ("SN", 196),
    ("RS", 197),
    ("SC", 198),
    ("SL", 199),
    ("SG", 200),
    ("SX", 201),
    ("SK", 202),
    ("SI", 203),
    ("SB", 204),
    ("SO", 205),
    ("ZA", 206),
    ("GS", 207),
    ("SS", 208),
    ("ES", 209),
    ("LK", 210),
    ("SD", 211),
    ("SR", 212),
    ("SJ", 213),
    ("SE", 214),
    ("CH", 215),
    ("SY", 216),
    ("TW", 217),
    ("TJ", 218),
    ("TZ", 219),
    ("TH", 220),
    ("TL", 221),
    ("TG", 222),
    ("TK", 223),
    ("TO", 224),
    ("TT", 225),
    ("TN", 226),
    ("TR", 227),
    ("TM", 228),
    ("TC", 229),
    ("TV", 230),
    ("UG", 231),
    ("UA", 232),
    ("AE", 233),
    ("GB", 234),
    ("US", 235),
    ("UM", 236),
    ("UY", 237),
    ("UZ", 238),
    ("VU", 239),
    ("VE", 240),
    ("VN", 241),
    ("VG", 242),
    ("VI", 243),
    ("WF", 244),
    ("EH", 245),
    ("YE", 246),
    ("ZM", 247),
    ("ZW", 248),
];

pub(crate) static BY_ALPHA3: &[(&str, usize)] = &[
    ("AFG", 0),
    ("ALA", 1),
    ("ALB", 2),
    ("DZA", 3),
    ("ASM", 4),
    ("AND", 5),
    ("AGO", 6),
    ("AIA", 7),
    ("ATA", 8),
    ("ATG", 9),
    ("ARG", 10),
    ("ARM", 11),
    ("ABW", 12),
    ("AUS", 13),
    ("AUT", 14),
    ("AZE", 15),
    ("BHS", 16),
    ("BHR", 17),
    ("BGD", 18),
    ("BRB", 19),
    ("BLR", 20),
    ("BEL", 21),
    ("BLZ", 22),
    ("BEN", 23),
    ("BMU", 24),
    ("BTN", 25),
    ("BOL", 26),
    ("BES", 27),
    ("BIH", 28),
    ("BWA", 29),
    ("BVT", 30),
    ("BRA", 31),
    ("IOT", 32),
    ("BRN", 33),
    ("BGR", 34),
    ("BFA", 35),
    ("BDI", 36),
    ("CPV", 37),
    ("KHM", 38),
    ("CMR", 39),
    ("CAN", 40),
    ("CYM", 41),
    ("CAF", 42),
    ("TCD", 43),
    ("CHL", 44),
    ("CHN", 45),
    ("CXR", 46),
    ("CCK", 47),
    ("COL", 48),
    ("COM", 49),
    ("COG", 50),
    ("COD", 51),
    ("COK", 52),
    ("CRI", 53),
    ("CIV", 54),
    ("HRV", 55),
    ("CUB", 56),
    ("CUW", 57),
    ("CYP", 58),
    ("CZE", 59),
    ("DNK", 60),
    ("DJI", 61),
    ("DMA", 62),
    ("DOM", 63),
    ("ECU", 64),
    ("EGY", 65),
    ("SLV", 66),
    ("GNQ", 67),
    ("ERI", 68),
    ("EST", 69),
    ("SWZ", 70),
    ("ETH", 71),
    ("FLK", 72),
    ("FRO", 73),
    ("FJI", 74),
    ("FIN", 75),
    ("FRA", 76),
    ("GUF", 77),
    ("PYF", 78),
    ("ATF", 79),
    ("GAB", 80),
    ("GMB", 81),
    ("GEO", 82),
    ("DEU", 83),
    ("GHA", 84),
    ("GIB", 85),
    ("GRC", 86),
    ("GRL", 87),
    ("GRD", 88),
    ("GLP", 89),
    ("GUM", 90),
    ("GTM", 91),
    ("GGY", 92),
    ("GIN", 93),
    ("GNB", 94),
    ("GUY", 95),
    ("HTI", 96),
    ("HMD", 97),
    ("VAT", 98),
    ("HND", 99),
    ("HKG", 100),
    ("HUN", 101),
    ("ISL", 102),
    ("IND", 103),
    ("IDN", 104),
    ("IRN", 105),
    ("IRQ", 106),
    ("IRL", 107),
    ("IMN", 108),
    ("ISR", 109),
    ("ITA", 110),
    ("JAM", 111),
    ("JPN", 112),
    ("JEY", 113),
    ("JOR", 114),
    ("KAZ", 115),
    ("KEN", 116),
    ("KIR", 117),
    ("PRK", 118),
    ("KOR", 119),
    ("KWT", 120),
    ("KGZ", 121),
    ("LAO", 122),
    ("LVA", 123),
    ("LBN", 124),
    ("LSO", 125),
    ("LBR", 126),
    ("LBY", 127),
    ("LIE", 128),
    ("LTU", 129),
    ("LUX", 130),
    ("MAC", 131),
    ("MDG", 132),
    ("MWI", 133),
    ("MYS", 134),
    ("MDV", 135),
    ("MLI", 136),
    ("MLT", 137),
    ("MHL", 138),
    ("MTQ", 139),
    ("MRT", 140),
    ("MUS", 141),
    ("MYT", 142),
    ("MEX", 143),
    ("FSM", 144),
    ("MDA", 145),
    ("MCO", 146),
    ("MNG", 147),
    ("MNE", 148),
    ("MSR", 149),
    ("MAR", 150),
    ("MOZ", 151),
    ("MMR", 152),
    ("NAM", 153),
    ("NRU", 154),
    ("NPL", 155),
    ("NLD", 156),
    ("NCL", 157),
    ("NZL", 158),
    ("NIC", 159),
    ("NER", 160),
    ("NGA", 161),
    ("NIU", 162),
    ("NFK", 163),
    ("MKD", 164),
    ("MNP", 165),
    ("NOR", 166),
    ("OMN", 167),
    ("PAK", 168),
    ("PLW", 169),
    ("PSE", 170),
    ("PAN", 171),
    ("PNG", 172),
    ("PRY", 173),
    ("PER", 174),
    ("PHL", 175),
    ("PCN", 176),
    ("POL", 177),
    ("PRT", 178),
    ("PRI", 179),
    ("QAT", 180),
    ("REU", 181),
    ("ROU", 182),
    ("RUS", 183),
    ("RWA", 184),
    ("BLM", 185),
    ("SHN", 186),
    ("KNA", 187),
    ("LCA", 188),
    ("MAF", 189),
    ("SPM", 190),
    ("VCT", 191),
    ("WSM", 192),
    ("SMR", 193),
    ("STP", 194),
    ("SAU", 195),
    ("SEN", 196),
    ("SRB", 197),
    ("SYC", 198),
    ("SLE", 199),
    ("SGP", 200),
    ("SXM", 201),
    ("SVK", 202),
    ("SVN", 203),
    ("SLB", 204),
    ("SOM", 205),
    ("ZAF", 206),
    ("SGS", 207),
    ("SSD", 208),
    ("ESP", 209),
    ("LKA", 210),
    ("SDN", 211),
    ("SUR", 212),
    ("SJM", 213),
    ("SWE", 214),
    ("CHE", 215),
    ("SYR", 216),
    ("TWN", 217),
    ("TJK", 218),
    ("TZA", 219),
    ("THA", 220),
    ("TLS", 221),
    ("TGO", 222),
    ("TKL", 223),
    ("TON", 224),
    ("TTO", 225),
    ("TUN", 226),
    ("TUR", 227),
    ("TKM", 228),
    ("TCA", 229),
    ("TUV", 230),
    ("UGA", 231),
    ("UKR", 232),
    ("ARE", 233),
    ("GBR", 234),
    ("USA", 235),
    ("UMI", 236),
    ("URY", 237),
    ("UZB", 238),
    ("VUT", 239),
    ("VEN", 240),
    ("VNM", 241),
    ("VGB", 242),
    ("VIR", 243),
    ("WLF", 244),
    ("ESH", 245),
    ("YEM", 246),
    ("ZMB", 247),
    ("ZWE", 248),
];

pub(crate) static BY_CODE: &[(&str, usize)] = &[
    ("004", 0),
    ("248", 1),
    ("008", 2),
    ("012", 3),
    ("016", 4),
    ("020", 5),
    ("024", 6),
    ("660", 7),
    ("010", 8),
    ("028", 9),
    ("032", 10),
    ("051", 11),
    ("533", 12),
    ("036", 13),
    ("040", 14),
    ("031", 15),
    ("044", 16),
    ("048", 17),
    ("050", 18),
    ("052", 19),
    ("112", 20),
    ("056", 21),
    ("084", 22),
    ("204", 23),
    ("060", 24),
    ("064", 25),
    ("068", 26),
    ("535", 27),
    ("070", 28),
    ("072", 29),
    ("074", 30),
    ("076", 31),
    ("086", 32),
    ("096", 33),
    ("100", 34),
    ("854", 35),
    ("108", 36),
    ("132", 37),
    ("116", 38),
    ("120", 39),
    ("124", 40),
    ("136", 41),
    ("140", 42),
    ("148", 43),
    ("152", 44),
    ("156", 45),
    ("162", 46),
    ("166", 47),
    ("170", 48),
    ("174", 49),
    ("178", 50),
    ("180", 51),
    ("184", 52),
    ("188", 53),
    ("384", 54),
    ("191", 55),
    ("192", 56),
    ("531", 57),
    ("196", 58),
    ("203", 59),
    ("208", 60),
    ("262", 61),
    ("212", 62),
    ("214", 63),
    ("218", 64),
    ("818", 65),
    ("222", 66),
    ("226", 67),
    ("232", 68),
    ("233", 69),
    ("748", 70),
    ("231", 71),
    ("238", 72),
    ("234", 73),
    ("242", 74),
    ("246", 75),
    ("250", 76),
    ("254", 77),
    ("258", 78),
    ("260", 79),
    ("266", 80),
    ("270", 81),
    ("268", 82),
    ("276", 83),
    ("288", 84),
    ("292", 85),
    ("300", 86),
    ("304", 87),
    ("308", 88),
    ("312", 89),
    ("316", 90),
    ("320", 91),
    ("831", 92),
    ("324", 93),
    ("624", 94),
    ("328", 95),
    ("332", 96),
    ("334", 97),
    ("336", 98),
    ("340", 99),
    ("344", 100),
    ("348", 101),
    ("352", 102),
    ("356", 103),
    ("360", 104),
    ("364", 105),
    ("368", 106),
    ("372", 107),
    ("833", 108),
    ("376", 109),
    ("380", 110),
    ("388", 111),
    ("392", 112),
    ("832", 113),
    ("400", 114),
    ("398", 115),
    ("404", 116),
    ("296", 117),
    ("408", 118),
    ("410", 119),
    ("414", 120),
    ("417", 121),
    ("418", 122),
    ("428", 123),
    ("422", 124),
    ("426", 125),
    ("430", 126),
    ("434", 127),
    ("438", 128),
    ("440", 129),
    ("442", 130),
    ("446", 131),
    ("450", 132),
    ("454", 133),
    ("458", 134),
    ("462", 135),
    ("466", 136),
    ("470", 137),
    ("584", 138),
    ("474", 139),
    ("478", 140),
    ("480", 141),
    ("175", 142),
    ("484", 143),
    ("583", 144),
    ("498", 145),
    ("492", 146),
    ("496", 147),
    ("499", 148),
    ("500", 149),
    ("504", 150),
    ("508", 151),
    ("104", 152),
    ("516", 153),
    ("520", 154),
    ("524", 155),
    ("528", 156),
    ("540", 157),
    ("554", 158),
    ("558", 159),
    ("562", 160),
    ("566", 161),
    ("570", 162),
    ("574", 163),
    ("807", 164),
    ("580", 165),
    ("578", 166),
    ("512", 167),
    ("586", 168),
    ("585", 169),
    ("275", 170),
    ("591", 171),
    ("598", 172),
    ("600", 173),
    ("604", 174),
    ("608", 175),
    ("612", 176),
    ("616", 177),
    ("620", 178),
    ("630", 179),
    ("634", 180),
    ("638", 181),
    ("642", 182),
    ("643", 183),
    ("646", 184),
    ("652", 185),
    ("654", 186),
    ("659", 187),
    ("662", 188),
    ("663", 189),
    ("666", 190),
    ("670", 191),
    ("882", 192),
    ("674", 193),
    ("678", 194),
    ("682", 195),
    ("686", 196),
    ("688", 197),
    ("690", 198),
    ("694", 199),
    ("702", 200),
    ("534", 201),
    ("703", 202),
    ("705", 203),
    ("090", 204),
    ("706", 205),
    ("710", 206),
    ("239", 207),
    ("728", 208),
    ("724", 209),
    ("144", 210),
    ("729", 211),
    ("740", 212),
    ("744", 213),
    ("752", 214),
    ("756", 215),
    ("760", 216),
    ("158", 217),
    ("762", 218),
    ("834", 219),
    ("764", 220),
    ("626", 221),
    ("768", 222),
    ("772", 223),
    ("776", 224),
    ("780", 225),
    ("788", 226),
    ("792", 227),
    ("795", 228),
    ("796", 229),
    ("798", 230),
    ("800", 231),
    ("804", 232),
    ("784", 233),
    ("826", 234),
    ("840", 235),
    ("581", 236),
    ("858", 237),
    ("860", 238),
    ("548", 239),
    ("862", 240),
    ("704", 241),
    ("092", 242),
    ("850", 243),
    ("876", 244),
    ("732", 245),
    ("887", 246),
    ("894", 247),
    ("716", 248),
];

pub(crate) static BY_ISO31662: &[(&str, usize)] = &[
    ("ISO 3166-2:AF", 0),
    ("ISO 3166-2:AX", 1),
    ("ISO 3166-2:AL", 2),
    ("ISO 3166-2:DZ", 3),
    ("ISO 3166-2:AS", 4),
    ("ISO 3166-2:AD", 5),
    ("ISO 3166-2:AO", 6),
    ("ISO 3166-2:AI", 7),
    ("ISO 3166-2:AQ", 8),
    ("ISO 3166-2:AG", 9),
    ("ISO 3166-2:AR", 10),
    ("ISO 3166-2:AM", 11),
    ("ISO 3166-2:AW", 12),
    ("ISO 3166-2:AU", 13),
    ("ISO 3166-2:AT", 14),
    ("ISO 3166-2:AZ", 15),
    ("ISO 3166-2:BS", 16),
    ("ISO 3166-2:BH", 17),
    ("ISO 3166-2:BD", 18),
    ("ISO 3166-2:BB", 19),
    ("ISO 3166-2:BY", 20),
    ("ISO 3166-2:BE", 21),
    ("ISO 3166-2:BZ", 22),
    ("ISO 3166-2:BJ", 23),
    ("ISO 3166-2:BM", 24),
    ("ISO 3166-2:BT", 25),
    ("ISO 3166-2:BO", 26),
    ("ISO 3166-2:BQ", 27),
    ("ISO 3166-2:BA", 28),
    ("ISO 3166-2:BW", 29),
    ("ISO 3166-2:BV", 30),
    ("ISO 3166-2:BR", 31),
    ("ISO 3166-2:IO", 32),
    ("ISO 3166-2:BN", 33),
    ("ISO 3166-2:BG", 34),
    ("ISO 3166-2:BF", 35),
    ("ISO 3166-2:BI", 36),
    ("ISO 3166-2:CV", 37),
    ("ISO 3166-2:KH", 38),
    ("ISO 3166-2:CM", 39),
    ("ISO 3166-2:CA", 40),
    ("ISO 3166-2:KY", 41),
    ("ISO 3166-2:CF", 42),
    ("ISO 3166-2:TD", 43),
    ("ISO 3166-2:CL", 44),
    ("ISO 3166-2:CN", 45),
    ("ISO 3166-2:CX", 46),
    ("ISO 3166-2:CC", 47),
    ("ISO 3166-2:CO", 48),
    ("ISO 3166-2:KM", 49),
    ("ISO 3166-2:CG", 50),
    ("ISO 3166-2:CD", 51),
    ("ISO 3166-2:CK", 52),
    ("ISO 3166-2:CR", 53),
    ("ISO 3166-2:CI", 54),
    ("ISO 3166-2:HR", 55),
    ("ISO 3166-2:CU", 56),
    ("ISO 3166-2:CW", 57),
    ("ISO 3166-2:CY", 58),
    ("ISO 3166-2:CZ", 59),
    ("ISO 3166-2:DK", 60),
    ("ISO 3166-2:DJ", 61),
    ("ISO 3166-2:DM", 62),
    ("ISO 3166-2:DO", 63),
    ("ISO 3166-2:EC", 64),
    ("ISO 3166-2:EG", 65),
    ("ISO 3166-2:SV", 66),
    ("ISO 3166-2:GQ", 67),
    ("ISO 3166-2:ER", 68),
    ("ISO 3166-2:EE", 69),
    ("ISO 3166-2:SZ", 70),
    ("ISO 3166-2:ET", 71),
    ("ISO 3166-2:FK", 72),
    ("ISO 3166-2:FO", 73),
    ("ISO 3166-2:FJ", 74),
    ("ISO 3166-2:FI", 75),
    ("ISO 3166-2:FR", 76),
    ("ISO 3166-2:GF", 77),
    ("ISO 3166-2:PF", 78),
    ("ISO 3166-2:TF", 79),
    ("ISO 3166-2:GA", 80),
    ("ISO 3166-2:GM", 81),
    ("ISO 3166-2:GE", 82),
    ("ISO 3166-2:DE", 83),
    ("ISO 3166-2:GH", 84),
    ("ISO 3166-2:GI", 85),
    ("ISO 3166-2:GR", 86),
    ("ISO 3166-2:GL", 87),
    ("ISO 3166-2:GD", 88),
    ("ISO 3166-2:GP", 89),
    ("ISO 3166-2:GU", 90),
    ("ISO 3166-2:GT", 91),
    ("ISO 3166-2:GG", 92),
    ("ISO 3166-2:GN", 93),
    ("ISO 3166-2:GW", 94),
    ("ISO 3166-2:GY", 95),
    ("ISO 3166-2:HT", 96),
    ("ISO 3166-2:HM", 97),
    ("ISO 3166-2:VA", 98),
    ("ISO 3166-2:HN", 99),
    ("ISO 3166-2:HK", 100),
    ("ISO 3166-2:HU", 101),
    ("ISO 3166-2:IS", 102),
    ("ISO 3166-2:IN", 103),
    ("ISO 3166-2:ID", 104),
    ("ISO 3166-2:IR", 105),
    ("ISO 3166-2:IQ", 106),
    ("ISO 3166-2:IE", 107),
    ("ISO 3166-2:IM", 108),
    ("ISO 3166-2:IL", 109),
    ("ISO 3166-2:IT", 110),
    ("ISO 3166-2:JM", 111),
    ("ISO 3166-2:JP", 112),
    ("ISO 3166-2:JE", 113),
    ("ISO 3166-2:JO", 114),
    ("ISO 3166-2:KZ", 115),
    ("ISO 3166-2:KE", 116),
    ("ISO 3166-2:KI", 117),
    ("ISO 3166-2:KP", 118),
    ("ISO 3166-2:KR", 119),
    ("ISO 3166-2:KW", 120),
    ("ISO 3166-2:KG", 121),
    ("ISO 3166-2:LA", 122),
    ("ISO 3166-2:LV", 123),
    ("ISO 3166-2:LB", 124),
    ("ISO 3166-2:LS", 125),
    ("ISO 3166-2:LR", 126),
    ("ISO 3166-2:LY", 127),
    ("ISO 3166-2:LI", 128),
    ("ISO 3166-2:LT", 129),
    ("ISO 3166-2:LU", 130),
    ("ISO 3166-2:MO", 131),
    ("ISO 3166-2:MG", 132),
    ("ISO 3166-2:MW", 133),
    ("ISO 3166-2:MY", 134),
    ("ISO 3166-2:MV", 135),
    ("ISO 3166-2:ML", 136),
    ("ISO 3166-2:MT", 137),
    ("ISO 3166-2:MH", 138),
    ("ISO 3166-2:MQ", 139),
    ("ISO 3166-2:MR", 140),
    ("ISO 3166-2:MU", 141),
    ("ISO 3166-2:YT", 142),
    ("ISO 3166-2:MX", 143),
    ("ISO 3166-2:FM", 144),
    ("ISO 3166-2:MD", 145),
    ("ISO 3166-2:MC", 146),
    ("ISO 3166-2:MN", 147),
    ("ISO 3166-2:ME", 148),
    ("ISO 3166-2:MS", 149),
    ("ISO 3166-2:MA", 150),
    ("ISO 3166-2:MZ", 151),
    ("ISO 3166-2:MM", 152),
    ("ISO 3166-2:NA", 153),
    ("ISO 3166-2:NR", 154),
    ("ISO 3166-2:NP", 155),
    ("ISO 3166-2:NL", 156),
    ("ISO 3166-2:NC", 157),
    ("ISO 3166-2:NZ", 158),
    ("ISO 3166-2:NI", 159),
    ("ISO 3166-2:NE", 160),
    ("ISO 3166-2:NG", 161),
    ("ISO 3166-2:NU", 162),
    ("ISO 3166-2:NF", 163),
    ("ISO 3166-2:MK", 164),
    ("ISO 3166-2:MP", 165),
    ("ISO 3166-2:NO", 166),
    ("ISO 3166-2:OM", 167),
    ("ISO 3166-2:PK", 168),
    ("ISO 3166-2:PW", 169),
    ("ISO 3166-2:PS", 170),
    ("ISO 3166-2:PA", 171),
    ("ISO 3166-2:PG", 172),
    ("ISO 3166-2:PY", 173),
    ("ISO 3166-2:PE", 174),
    ("ISO 3166-2:PH", 175),
    ("ISO 3166-2:PN", 176),
    ("ISO 3166-2:PL", 177),
    ("ISO 3166-2:PT", 178),
    ("ISO 3166-2:PR", 179),
    ("ISO 3166-2:QA", 180),
    ("ISO 3166-2:RE", 181),
    ("ISO 3166-2:RO", 182),
    ("ISO 3166-2:RU", 183),
    ("ISO 3166-2:RW", 184),
    ("ISO 3166-2:BL", 185),
    ("ISO 3166-2:SH", 186),
    ("ISO 3166-2:KN", 187),
    ("ISO 3166-2:LC", 188),
    ("ISO 3166-2:MF", 189),
    ("ISO 3166-2:PM", 190),
    ("ISO 3166-2:VC", 191),
    ("ISO 3166-2:WS", 192),
    ("ISO 3166-2:SM", 193),
    ("ISO 3166-2:ST", 194),
    ("ISO 3166-2:SA", 195),
    ("ISO 3166-2:SN", 196),
    ("ISO 3166-2:RS", 197),
    ("ISO 3166-2:SC", 198),
    ("ISO 3166-2:SL", 199),
    ("ISO 3166-2:SG", 200),
    ("ISO 3166-2:SX", 201),
    ("ISO 3166-2:SK", 202),
    ("ISO 3166-2:SI", 203),
    ("ISO 3166-2:SB", 204),
    ("ISO 3166-2:SO", 205),
    ("ISO 3166-2:ZA", 206),
    ("ISO 3166-2:GS", 207),
    ("ISO 3166-2:SS", 208),
    ("ISO 3166-2:ES", 209),
    ("ISO 3166-2:LK", 210),
    ("ISO 3166-2:SD", 211),
    ("ISO 3166-2:SR", 212),
    ("ISO 3166-2:SJ", 213),
    ("ISO 3166-2:SE", 214),
    ("ISO 3166-2:CH", 215),
    ("ISO 3166-2:SY", 216),
    ("ISO 3166-2:TW", 217),
    ("ISO 3166-2:TJ", 218),
    ("ISO 3166-2:TZ", 219),
    ("ISO 3166-2:TH", 220),
    ("ISO 3166-2:TL", 221),
    ("ISO 3166-2:TG", 222),
    ("ISO 3166-2:TK", 223),
    ("ISO 3166-2:TO", 224),
    ("ISO 3166-2:TT", 225),
    ("ISO 3166-2:TN", 226),
    ("ISO 3166-2:TR", 227),
    ("ISO 3166-2:TM", 228),
    ("ISO 3166-2:TC", 229),
    ("ISO 3166-2:TV", 230),
    ("ISO 3166-2:UG", 231),
    ("ISO 3166-2:UA", 232),
    ("ISO 3166-2:AE", 233),
    ("ISO 3166-2:GB", 234),
    ("ISO 3166-2:US", 235),
    ("ISO 3166-2:UM", 236),
    ("ISO 3166-2:UY", 237),
    ("ISO 3166-2:UZ", 238),
    ("ISO 3166-2:VU", 239),
    ("ISO 3166-2:VE", 240),
    ("ISO 3166-2:VN", 241),
    ("ISO 3166-2:VG", 242),
    ("ISO 3166-2:VI", 243),
    ("ISO 3166-2:WF", 244),
    ("ISO 3166-2:EH", 245),
    ("ISO 3166-2:YE", 246),
    ("ISO 3166-2:ZM", 247),
    ("ISO 3166-2:ZW", 248),
];

pub(crate) static BY_CAPITAL: &[(&str, usize)] = &[
    ("abu dhabi", 233),
    ("abuja", 161),
    ("accra", 84),
    ("adamstown", 176),
    ("addis ababa", 71),
    ("algiers", 3),
    ("alofi", 162),
    ("amman", 114),
    ("amsterdam", 156),
    ("andorra la vella", 5),
    ("ankara", 227),
    ("antananarivo", 132),
    ("apia", 192),
    ("ashgabat", 228),
    ("asmara", 68),
    ("astana", 115),
    ("asuncion", 173),
    ("athens", 86),
    ("avarua", 52),
    ("baghdad", 106),
    ("baku", 15),
    ("bamako", 136),
    ("bandar seri begawan", 33),
    ("bangkok", 220),
    ("bangui", 42),
    ("banjul", 81),
    ("basse-terre", 89),
    ("basseterre", 187),
    ("beijing", 45),
    ("beirut", 124),
    ("belgrade", 197),
    ("belmopan", 22),
    ("berlin", 83),
    ("bern", 215),
    ("bishkek", 121),
    ("bissau", 94),
    ("bogota", 48),
    ("brasilia", 31),
    ("bratislava", 202),
    ("brazzaville", 50),
    ("bridgetown", 19),
    ("brussels", 21),
    ("bucharest", 182),
    ("budapest", 101),
    ("buenos aires", 10),
    ("cairo", 65),
    ("canberra", 13),
    ("caracas", 240),
    ("castries", 188),
    ("cayenne", 77),
    ("charlotte amalie", 243),
    ("chisinau", 145),
    ("cockburn town", 229),
    ("colombo", 210),
    ("conakry", 93),
    ("copenhagen", 60),
    ("dakar", 196),
    ("damascus", 216),
    ("dhaka", 18),
    ("diego garcia", 32),
    ("dili", 221),
    ("djibouti", 61),
    ("dodoma", 219),
    ("doha", 180),
    ("douglas", 108),
    ("dublin", 107),
    ("dushanbe", 218),
    ("east jerusalem", 170),
    ("el aaiun", 245),
    ("flying fish cove", 46),
    ("fort-de-france", 139),
    ("freetown", 199),
    ("funafuti", 230),
    ("gaborone", 29),
    ("george town", 41),
    ("georgetown", 95),
    ("gibraltar", 85),
    ("gitega", 36),
    ("grytviken", 207),
    ("guatemala city", 91),
    ("gustavia", 185),
    ("hagatna", 90),
    ("hamilton", 24),
    ("hanoi", 241),
    ("harare", 248),
    ("havana", 56),
    ("helsinki", 75),
    ("hong kong", 100),
    ("honiara", 204),
    ("islamabad", 168),
    ("jakarta", 104),
    ("jamestown", 186),
    ("jerusalem", 109),
    ("juba", 208),
    ("kabul", 0),
    ("kampala", 231),
    ("kathmandu", 155),
    ("khartoum", 211),
    ("kigali", 184),
    ("kingston", 111),
    ("kingstown", 191),
    ("kinshasa", 51),
    ("kralendijk", 27),
    ("kuala lumpur", 134),
    ("kuwait city", 120),
    ("kyiv", 232),
    ("libreville", 80),
    ("lilongwe", 133),
    ("lima", 174),
    ("lisbon", 178),
    ("ljubljana", 203),
    ("lome", 222),
    ("london", 234),
    ("longyearbyen", 213),
    ("luanda", 6),
    ("lusaka", 247),
    ("luxembourg", 130),
    ("macao", 131),
    ("madrid", 209),
    ("majuro", 138),
    ("malabo", 67),
    ("male", 135),
    ("mamoudzou", 142),
    ("managua", 159),
    ("manama", 17),
    ("manila", 175),
    ("maputo", 151),
    ("mariehamn", 1),
    ("marigot", 189),
    ("maseru", 125),
    ("mata utu", 244),
    ("mbabane", 70),
    ("mexico city", 143),
    ("minsk", 20),
    ("mogadishu", 205),
    ("monaco", 146),
    ("monrovia", 126),
    ("montevideo", 237),
    ("moroni", 49),
    ("moscow", 183),
    ("muscat", 167),
    ("n'djamena", 43),
    ("nairobi", 116),
    ("nassau", 16),
    ("nay pyi taw", 152),
    ("new delhi", 103),
    ("ngerulmud", 169),
    ("niamey", 160),
    ("nicosia", 58),
    ("nouakchott", 140),
    ("noumea", 157),
    ("nuku'alofa", 224),
    ("nuuk", 87),
    ("oranjestad", 12),
    ("oslo", 166),
    ("ottawa", 40),
    ("ouagadougou", 35),
    ("pago pago", 4),
    ("palikir", 144),
    ("panama city", 171),
    ("papeete", 78),
    ("paramaribo", 212),
    ("paris", 76),
    ("philipsburg", 201),
    ("phnom penh", 38),
    ("plymouth", 149),
    ("podgorica", 148),
    ("port louis", 141),
    ("port moresby", 172),
    ("port of spain", 225),
    ("port vila", 239),
    ("port-au-prince", 96),
    ("port-aux-francais", 79),
    ("porto-novo", 23),
    ("prague", 59),
    ("praia", 37),
    ("pretoria", 206),
    ("pyongyang", 118),
    ("quito", 64),
    ("rabat", 150),
    ("reykjavik", 102),
    ("riga", 123),
    ("riyadh", 195),
    ("road town", 242),
    ("rome", 110),
    ("roseau", 62),
    ("saint helier", 113),
    ("saint-denis", 181),
    ("saint-pierre", 190),
    ("saipan", 165),
    ("san jose", 53),
    ("san juan", 179),
    ("san marino", 193),
    ("san salvador", 66),
    ("sanaa", 246),
    ("santiago", 44),
    ("santo domingo", 63),
    ("sao tome", 194),
    ("sarajevo", 28),
    ("seoul", 119),
    ("singapore", 200),
    ("skopje", 164),
    ("sofia", 34),
    ("st peter port", 92),
    ("st. george's", 88),
    ("st. john's", 9),
    ("stanley", 72),
    ("stockholm", 214),
    ("sucre", 26),
    ("suva", 74),
    ("taipei", 217),
    ("tallinn", 69),
    ("tarawa", 117),
    ("tashkent", 238),
    ("tbilisi", 82),
    ("tegucigalpa", 99),
    ("tehran", 105),
    ("the valley", 7),
    ("thimphu", 25),
    ("tirana", 2),
    ("tokyo", 112),
    ("torshavn", 73),
    ("tripoli", 127),
    ("tunis", 226),
    ("ulaanbaatar", 147),
    ("vaduz", 128),
    ("valletta", 137),
    ("vatican city", 98),
    ("victoria", 198),
    ("vienna", 14),
    ("vientiane", 122),
    ("vilnius", 129),
    ("warsaw", 177),
    ("washington", 235),
    ("wellington", 158),
    ("west island", 47),
    ("willemstad", 57),
    ("windhoek", 153),
    ("yamoussoukro", 54),
    ("yaounde", 39),
    ("yaren", 154),
    ("yerevan", 11),
    ("zagreb", 55),
];

/// ISO-3166-1 alpha-2 codes.
pub mod alpha2 {
    pub const AF: &str = "AF";
    pub const AX: &str = "AX";
    pub const AL: &str = "AL";
    pub const DZ: &str = "DZ";
    pub const AS: &str = "AS";
    pub const AD: &str = "AD";
    pub const AO: &str = "AO";
    pub const AI: &str = "AI";
    pub const AQ: &str = "AQ";
    pub const AG: &str = "AG";
    pub const AR: &str = "AR";
    pub const AM: &str = "AM";
    pub const AW: &str = "AW";
    pub const AU: &str = "AU";
    pub const AT: &str = "AT";
    pub const AZ: &str = "AZ";
    pub const BS: &str = "BS";
    pub const BH: &str = "BH";
    pub const BD: &str = "BD";
    pub const BB: &str = "BB";
    pub const BY: &str = "BY";
    pub const BE: &str = "BE";
    pub const BZ: &str = "BZ";
    pub const BJ: &str = "BJ";
    pub const BM: &str = "BM";
    pub const BT: &str = "BT";
    pub const BO: &str = "BO";
    pub const BQ: &str = "BQ";
    pub const BA: &str = "BA";
    pub const BW: &str = "BW";
    pub const BV: &str = "BV";
    pub const BR: &str = "BR";
    pub const IO: &str = "IO";
    pub const BN: &str = "BN";
    pub const BG: &str = "BG";
    pub const BF: &str = "BF";
    pub const BI: &str = "BI";
    pub const CV: &str = "CV";
    pub const KH: &str = "KH";
    pub const CM: &str = "CM";
    pub const CA: &str = "CA";
    pub const KY: &str = "KY";
    pub const CF: &str = "CF";
    pub const TD: &str = "TD";
    pub const CL: &str = "CL";
    pub const CN: &str = "CN";
    pub const CX: &str = "CX";
    pub const CC: &str = "CC";
    pub const CO: &str = "CO";
    pub const KM: &str = "KM";
    pub const CG: &str = "CG";
    pub const CD: &str = "CD";
    pub const CK: &str = "CK";
    pub const CR: &str = "CR";
    pub const CI: &str = "CI";
    pub const HR: &str = "HR";
    pub const CU: &str = "CU";
    pub const CW: &str = "CW";
    pub const CY: &str = "CY";
    pub const CZ: &str = "CZ";
    pub const DK: &str = "DK";
    pub const DJ: &str = "DJ";
    pub const DM: &str = "DM";
    pub const DO: &str = "DO";
    pub const EC: &str = "EC";
    pub const EG: &str = "EG";
    pub const SV: &str = "SV";
    pub const GQ: &str = "GQ";
    pub const ER: &str = "ER";
    pub const EE: &str = "EE";
    pub const SZ: &str = "SZ";
    pub const ET: &str = "ET";
    pub const FK: &str = "FK";
    pub const FO: &str = "FO";
    pub const FJ: &str = "FJ";
    pub const FI: &str = "FI";
    pub const FR: &str = "FR";
    pub const GF: &str = "GF";
    pub const PF: &str = "PF";
    pub const TF: &str = "TF";
    pub const GA: &str = "GA";
    pub const GM: &str = "GM";
    pub const GE: &str = "GE";
    pub const DE: &str = "DE";
    pub const GH: &str = "GH";
    pub const GI: &str = "GI";
    pub const GR: &str = "GR";
    pub const GL: &str = "GL";
    pub const GD: &str = "GD";
    pub const GP: &str = "GP";
    pub const GU: &str = "GU";
    pub const GT: &str = "GT";
    pub const GG: &str = "GG";
    pub const GN: &str = "GN";
    pub const GW: &str = "GW";
    pub const GY: &str = "GY";
    pub const HT: &str = "HT";
    pub const HM: &str = "HM";
    pub const VA: &str = "VA";
    pub const HN: &str = "HN";
    pub const HK: &str = "HK";
    pub const HU: &str = "HU";
    pub const IS: &str = "IS";
    pub const IN: &str = "IN";
    pub const ID: &str = "ID";
    pub const IR: &str = "IR";
    pub const IQ: &str = "IQ";
    pub const IE: &str = "IE";
    pub const IM: &str = "IM";
    pub const IL: &str = "IL";
    pub const IT: &str = "IT";
    pub const JM: &str = "JM";
    pub const JP: &str = "JP";
    pub const JE: &str = "JE";
    pub const JO: &str = "JO";
    pub const KZ: &str = "KZ";
    pub const KE: &str = "KE";
    pub const KI: &str = "KI";
    pub const KP: &str = "KP";
    pub const KR: &str = "KR";
    pub const KW: &str = "KW";
    pub const KG: &str = "KG";
    pub const LA: &str = "LA";
    pub const LV: &str = "LV";
    pub const LB: &str = "LB";
    pub const LS: &str = "LS";
    pub const LR: &str = "LR";
    pub const LY: &str = "LY";
    pub const LI: &str = "LI";
    pub const LT: &str = "LT";
    pub const LU: &str = "LU";
    pub const MO: &str = "MO";
    pub const MG: &str = "MG";
    pub const MW: &str = "MW";
    pub const MY: &str = "MY";
    pub const MV: &str = "MV";
    pub const ML: &str = "ML";
    pub const MT: &str = "MT";
    pub const MH: &str = "MH";
    pub const MQ: &str = "MQ";
    pub const MR: &str = "MR";
    pub const MU: &str = "MU";
    pub const YT: &str = "YT";
    pub const MX: &str = "MX";
    pub const FM: &str = "FM";
    pub const MD: &str = "MD";
    pub const MC: &str = "MC";
    pub const MN: &str = "MN";
    pub const ME: &str = "ME";
    pub const MS: &str = "MS";
    pub const MA: &str = "MA";
    pub const MZ: &str = "MZ";
    pub const MM: &str = "MM";
    pub const NA: &str = "NA";
    pub const NR: &str = "NR";
    pub const NP: &str = "NP";
    pub const NL: &str = "NL";
    pub const NC: &str = "NC";
    pub const NZ: &str = "NZ";
    pub const NI: &str = "NI";
    pub const NE: &str = "NE";
    pub const NG: &str = "NG";
    pub const NU: &str = "NU";
    pub const NF: &str = "NF";
    pub const MK: &str = "MK";
    pub const MP: &str = "MP";
    pub const NO: &str = "NO";
    pub const OM: &str = "OM";
    pub const PK: &str = "PK";
    pub const PW: &str = "PW";
    pub const PS: &str = "PS";
    pub const PA: &str = "PA";
    pub const PG: &str = "PG";
    pub const PY: &str = "PY";
    pub const PE: &str = "PE";
    pub const PH: &str = "PH";
    pub const PN: &str = "PN";
    pub const PL: &str = "PL";
    pub const PT: &str = "PT";
    pub const PR: &str = "PR";
    pub const QA: &str = "QA";
    pub const RE: &str = "RE";
    pub const RO: &str = "RO";
    pub const RU: &str = "RU";
    pub const RW: &str = "RW";
    pub const BL: &str = "BL";
    pub const SH: &str = "SH";
    pub const KN: &str = "KN";
    pub const LC: &str = "LC";
    pub const MF: &str = "MF";
    pub const PM: &str = "PM";
    pub const VC: &str = "VC";
    pub const WS: &str = "WS";
    pub const SM: &str = "SM";
    pub const ST: &str = "ST";
    pub const SA: &str = "SA";
    pub const SN: &str = "SN";
    pub const RS: &str = "RS";
    pub const SC: &str = "SC";
    pub const SL: &str = "SL";
    pub const SG: &str = "SG";
    pub const SX: &str = "SX";
    pub const SK: &str = "SK";
    pub const SI: &str = "SI";
    pub const SB: &str = "SB";
    pub const SO: &str = "SO";
    pub const ZA: &str = "ZA";
    pub const GS: &str = "GS";
    pub const SS: &str = "SS";
    pub const ES: &str = "ES";
    pub const LK: &str = "LK";
    pub const SD: &str = "SD";
    pub const SR: &str = "SR";
    pub const SJ: &str = "SJ";
    pub const SE: &str = "SE";
    pub const CH: &str = "CH";
    pub const SY: &str = "SY";
    pub const TW: &str = "TW";
    pub const TJ: &str = "TJ";
    pub const TZ: &str = "TZ";
    pub const TH: &str = "TH";
    pub const TL: &str = "TL";
    pub const TG: &str = "TG";
    pub const TK: &str = "TK";
    pub const TO: &str = "TO";
    pub const TT: &str = "TT";
    pub const TN: &str = "TN";
    pub const TR: &str = "TR";
    pub const TM: &str = "TM";
    pub const TC: &str = "TC";
    pub const TV: &str = "TV";
    pub const UG: &str = "UG";
    pub const UA: &str = "UA";
    pub const AE: &str = "AE";
    pub const GB: &str = "GB";
    pub const US: &str = "US";
    pub const UM: &str = "UM";
    pub const UY: &str = "UY";
    pub const UZ: &str = "UZ";
    pub const VU: &str = "VU";
    pub const VE: &str = "VE";
    pub const VN: &str = "VN";
    pub const VG: &str = "VG";
    pub const VI: &str = "VI";
    pub const WF: &str = "WF";
    pub const EH: &str = "EH";
    pub const YE: &str = "YE";
    pub const ZM: &str = "ZM";
    pub const ZW: &str = "ZW";
}

/// ISO-3166-1 alpha-3 codes.
pub mod alpha3 {
    pub const AFG: &str = "AFG";
    pub const ALA: &str = "ALA";
    pub const ALB: &str = "ALB";
    pub const DZA: &str = "DZA";
    pub const ASM: &str = "ASM";
    pub const AND: &str = "AND";
    pub const AGO: &str = "AGO";
    pub const AIA: &str = "AIA";
    pub const ATA: &str = "ATA";
    pub const ATG: &str = "ATG";
    pub const ARG: &str = "ARG";
    pub const ARM: &str = "ARM";
    pub const ABW: &str = "ABW";
    pub const AUS: &str = "AUS";
    pub const AUT: &str = "AUT";
    pub const AZE: &str = "AZE";
    pub const BHS: &str = "BHS";
    pub const BHR: &str = "BHR";
    pub const BGD: &str = "BGD";
    pub const BRB: &str = "BRB";
    pub const BLR: &str = "BLR";
    pub const BEL: &str = "BEL";
    pub const BLZ: &str = "BLZ";
    pub const BEN: &str = "BEN";
    pub const BMU: &str = "BMU";
    pub const BTN: &str = "BTN";
    pub const BOL: &str = "BOL";
    pub const BES: &str = "BES";
    pub const BIH: &str = "BIH";
    pub const BWA: &str = "BWA";
    pub const BVT: &str = "BVT";
    pub const BRA: &str = "BRA";
    pub const IOT: &str = "IOT";
    pub const BRN: &str = "BRN";
    pub const BGR: &str = "BGR";
    pub const BFA: &str = "BFA";
    pub const BDI: &str = "BDI";
    pub const CPV: &str = "CPV";
    pub const KHM: &str = "KHM";
    pub const CMR: &str = "CMR";
    pub const CAN: &str = "CAN";
    pub const CYM: &str = "CYM";
    pub const CAF: &str = "CAF";
    pub const TCD: &str = "TCD";
    pub const CHL: &str = "CHL";
    pub const CHN: &str = "CHN";
    pub const CXR: &str = "CXR";
    pub const CCK: &str = "CCK";
    pub const COL: &str = "COL";
    pub const COM: &str = "COM";
    pub const COG: &str = "COG";
    pub const COD: &str = "COD";
    pub const COK: &str = "COK";
    pub const CRI: &str = "CRI";
    pub const CIV: &str = "CIV";
    pub const HRV: &str = "HRV";
    pub const CUB: &str = "CUB";
    pub const CUW: &str = "CUW";
    pub const CYP: &str = "CYP";
    pub const CZE: &str = "CZE";
    pub const DNK: &str = "DNK";
    pub const DJI: &str = "DJI";
    pub const DMA: &str = "DMA";
    pub const DOM: &str = "DOM";
    pub const ECU: &str = "ECU";
    pub const EGY: &str = "EGY";
    pub const SLV: &str = "SLV";
    pub const GNQ: &str = "GNQ";
    pub const ERI: &str = "ERI";
    pub const EST: &str = "EST";
    pub const SWZ: &str = "SWZ";
    pub const ETH: &str = "ETH";
    pub const FLK: &str = "FLK";
    pub const FRO: &str = "FRO";
    pub const FJI: &str = "FJI";
    pub const FIN: &str = "FIN";
    pub const FRA: &str = "FRA";
    pub const GUF: &str = "GUF";
    pub const PYF: &str = "PYF";
    pub const ATF: &str = "ATF";
    pub const GAB: &str = "GAB";
    pub const GMB: &str = "GMB";
    pub const GEO: &str = "GEO";
    pub const DEU: &str = "DEU";
    pub const GHA: &str = "GHA";
    pub const GIB: &str = "GIB";
    pub const GRC: &str = "GRC";
    pub const GRL: &str = "GRL";
    pub const GRD: &str = "GRD";
    pub const GLP: &str = "GLP";
    pub const GUM: &str = "GUM";
    pub const GTM: &str = "GTM";
    pub const GGY: &str = "GGY";
    pub const GIN: &str = "GIN";
    pub const GNB: &str = "GNB";
    pub const GUY: &str = "GUY";
    pub const HTI: &str = "HTI";
    pub const HMD: &str = "HMD";
    pub const VAT: &str = "VAT";
    pub const HND: &str = "HND";
    pub const HKG: &str = "HKG";
    pub const HUN: &str = "HUN";
    pub const ISL: &str = "ISL";
    pub const IND: &str = "IND";
    pub const IDN: &str = "IDN";
    pub const IRN: &str = "IRN";
    pub const IRQ: &str = "IRQ";
    pub const IRL: &str = "IRL";
    pub const IMN: &str = "IMN";
    pub const ISR: &str = "ISR";
    pub const ITA: &str = "ITA";
    pub const JAM: &str = "JAM";
    pub const JPN: &str = "JPN";
    pub const JEY: &str = "JEY";
    pub const JOR: &str = "JOR";
    pub const KAZ: &str = "KAZ";
    pub const KEN: &str = "KEN";
    pub const KIR: &str = "KIR";
    pub const PRK: &str = "PRK";
    pub const KOR: &str = "KOR";
    pub const KWT: &str = "KWT";
    pub const KGZ: &str = "KGZ";
    pub const LAO: &str = "LAO";
    pub const LVA: &str = "LVA";
    pub const LBN: &str = "LBN";
    pub const LSO: &str = "LSO";
    pub const LBR: &str = "LBR";
    pub const LBY: &str = "LBY";
    pub const LIE: &str = "LIE";
    pub const LTU: &str = "LTU";
    pub const LUX: &str = "LUX";
    pub const MAC: &str = "MAC";
    pub const MDG: &str = "MDG";
    pub const MWI: &str = "MWI";
    pub const MYS: &str = "MYS";
    pub const MDV: &str = "MDV";
    pub const MLI: &str = "MLI";
    pub const MLT: &str = "MLT";
    pub const MHL: &str = "MHL";
    pub const MTQ: &str = "MTQ";
    pub const MRT: &str = "MRT";
    pub const MUS: &str = "MUS";
    pub const MYT: &str = "MYT";
    pub const MEX: &str = "MEX";
    pub const FSM: &str = "FSM";
    pub const MDA: &str = "MDA";
    pub const MCO: &str = "MCO";
    pub const MNG: &str = "MNG";
    pub const MNE: &str = "MNE";
    pub const MSR: &str = "MSR";
    pub const MAR: &str = "MAR";
    pub const MOZ: &str = "MOZ";
    pub const MMR: &str = "MMR";
    pub const NAM: &str = "NAM";
    pub const NRU: &str = "NRU";
    pub const NPL: &str = "NPL";
    pub const NLD: &str = "NLD";
    pub const NCL: &str = "NCL";
    pub const NZL: &str = "NZL";
    pub const NIC: &str = "NIC";
    pub const NER: &str = "NER";
    pub const NGA: &str = "NGA";
    pub const NIU: &str = "NIU";
    pub const NFK: &str = "NFK";
    pub const MKD: &str = "MKD";
    pub const MNP: &str = "MNP";
    pub const NOR: &str = "NOR";
    pub const OMN: &str = "OMN";
    pub const PAK: &str = "PAK";
    pub const PLW: &str = "PLW";
    pub const PSE: &str = "PSE";
    pub const PAN: &str = "PAN";
    pub const PNG: &str = "PNG";
    pub const PRY: &str = "PRY";
    pub const PER: &str = "PER";
    pub const PHL: &str = "PHL";
    pub const PCN: &str = "PCN";
    pub const POL: &str = "POL";
    pub const PRT: &str = "PRT";
    pub const PRI: &str = "PRI";
    pub const QAT: &str = "QAT";
    pub const REU: &str = "REU";
    pub const ROU: &str = "ROU";
    pub const RUS: &str = "RUS";
    pub const RWA: &str = "RWA";
    pub const BLM: &str = "BLM";
    pub const SHN: &str = "SHN";
    pub const KNA: &str = "KNA";
    pub const LCA: &str = "LCA";
    pub const MAF: &str = "MAF";
    pub const SPM: &str = "SPM";
    pub const VCT: &str = "VCT";
    pub const WSM: &str = "WSM";
    pub const SMR: &str = "SMR";
    pub const STP: &str = "STP";
    pub const SAU: &str = "SAU";
    pub const SEN: &str = "SEN";
    pub const SRB: &str = "SRB";
    pub const SYC: &str = "SYC";
    pub const SLE: &str = "SLE";
    pub const SGP: &str = "SGP";
    pub const SXM: &str = "SXM";
    pub const SVK: &str = "SVK";
    pub const SVN: &str = "SVN";
    pub const SLB: &str = "SLB";
    pub const SOM: &str = "SOM";
    pub const ZAF: &str = "ZAF";
    pub const SGS: &str = "SGS";
    pub const SSD: &str = "SSD";
    pub const ESP: &str = "ESP";
    pub const LKA: &str = "LKA";
    pub const SDN: &str = "SDN";
    pub const SUR: &str = "SUR";
    pub const SJM: &str = "SJM";
    pub const SWE: &str = "SWE";
    pub const CHE: &str = "CHE";
    pub const SYR: &str = "SYR";
    pub const TWN: &str = "TWN";
    pub const TJK: &str = "TJK";
    pub const TZA: &str = "TZA";
    pub const THA: &str = "THA";
    pub const TLS: &str = "TLS";
    pub const TGO: &str = "TGO";
    pub const TKL: &str = "TKL";
    pub const TON: &str = "TON";
    pub const TTO: &str = "TTO";
    pub const TUN: &str = "TUN";
    pub const TUR: &str = "TUR";
    pub const TKM: &str = "TKM";
    pub const TCA: &str = "TCA";
    pub const TUV: &str = "TUV";
    pub const UGA: &str = "UGA";
    pub const UKR: &str = "UKR";
    pub const ARE: &str = "ARE";
    pub const GBR: &str = "GBR";
    pub const USA: &str = "USA";
    pub const UMI: &str = "UMI";
    pub const URY: &str = "URY";
    pub const UZB: &str = "UZB";
    pub const VUT: &str = "VUT";
    pub const VEN: &str = "VEN";
    pub const VNM: &str = "VNM";
    pub const VGB: &str = "VGB";
    pub const VIR: &str = "VIR";
    pub const WLF: &str = "WLF";
    pub const ESH: &str = "ESH";
    pub const YEM: &str = "YEM";
    pub const ZMB: &str = "ZMB";
    pub const ZWE: &str = "ZWE";
}
