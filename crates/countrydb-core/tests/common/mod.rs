// crates/countrydb-core/tests/common/mod.rs

//! Shared in-code fixture dataset: a Nordic/central-European slice with
//! real border lists, Swedish native names and subdivisions.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::collections::HashMap;

use countrydb_core::{BaseName, Country, CountryDb, DataSet, SubDivision};

#[allow(clippy::too_many_arguments)]
fn country(
    common: &str,
    official: &str,
    alpha2: &str,
    alpha3: &str,
    continent: &str,
    region: &str,
    subregion: &str,
    prefix: &str,
    borders: &[&str],
) -> Country {
    let mut c = Country::default();
    c.name.common = common.to_string();
    c.name.official = official.to_string();
    c.codes.alpha2 = alpha2.to_string();
    c.codes.alpha3 = alpha3.to_string();
    c.geo.continent = continent.to_string();
    c.geo.region = region.to_string();
    c.geo.subregion = subregion.to_string();
    c.international_prefix = prefix.to_string();
    c.borders = borders.iter().map(|s| s.to_string()).collect();
    c
}

fn subdivision(name: &str, aliases: &[&str], code: &str) -> SubDivision {
    SubDivision {
        name: name.to_string(),
        names: aliases.iter().map(|s| s.to_string()).collect(),
        code: code.to_string(),
        country_alpha2: String::new(),
    }
}

pub fn dataset() -> DataSet {
    let mut sweden = country(
        "Sweden",
        "Kingdom of Sweden",
        "SE",
        "SWE",
        "Europe",
        "Europe",
        "Northern Europe",
        "46",
        &["FIN", "NOR"],
    );
    sweden.name.native.insert(
        "swe".to_string(),
        BaseName {
            common: "Sverige".to_string(),
            official: "Konungariket Sverige".to_string(),
        },
    );
    sweden.translations.insert(
        "DEU".to_string(),
        BaseName {
            common: "Schweden".to_string(),
            official: "Königreich Schweden".to_string(),
        },
    );
    sweden.geo.capital = "Stockholm".to_string();
    sweden.geo.latitude = 62.0;
    sweden.geo.longitude = 15.0;

    let mut germany = country(
        "Germany",
        "Federal Republic of Germany",
        "DE",
        "DEU",
        "Europe",
        "Europe",
        "Western Europe",
        "49",
        &["AUT", "BEL", "CHE", "CZE", "DNK", "FRA", "LUX", "NLD", "POL"],
    );
    germany.name.native.insert(
        "deu".to_string(),
        BaseName {
            common: "Deutschland".to_string(),
            official: "Bundesrepublik Deutschland".to_string(),
        },
    );
    germany.geo.latitude = 51.0;
    germany.geo.longitude = 9.0;

    // Norway's RUS border is deliberately dangling: Russia is not loaded.
    let norway = country(
        "Norway",
        "Kingdom of Norway",
        "NO",
        "NOR",
        "Europe",
        "Europe",
        "Northern Europe",
        "47",
        &["FIN", "SWE", "RUS"],
    );
    let finland = country(
        "Finland",
        "Republic of Finland",
        "FI",
        "FIN",
        "Europe",
        "Europe",
        "Northern Europe",
        "358",
        &["NOR", "SWE", "RUS"],
    );
    let austria = country(
        "Austria",
        "Republic of Austria",
        "AT",
        "AUT",
        "Europe",
        "Europe",
        "Western Europe",
        "43",
        &["CZE", "DEU", "HUN", "ITA", "LIE", "SVK", "SVN", "CHE"],
    );
    let switzerland = country(
        "Switzerland",
        "Swiss Confederation",
        "CH",
        "CHE",
        "Europe",
        "Europe",
        "Western Europe",
        "41",
        &["AUT", "FRA", "ITA", "LIE", "DEU"],
    );
    let france = country(
        "France",
        "French Republic",
        "FR",
        "FRA",
        "Europe",
        "Europe",
        "Western Europe",
        "33",
        &["AND", "BEL", "DEU", "ITA", "LUX", "MCO", "ESP", "CHE"],
    );
    let denmark = country(
        "Denmark",
        "Kingdom of Denmark",
        "DK",
        "DNK",
        "Europe",
        "Europe",
        "Northern Europe",
        "45",
        &["DEU"],
    );
    let netherlands = country(
        "Netherlands",
        "Kingdom of the Netherlands",
        "NL",
        "NLD",
        "Europe",
        "Europe",
        "Western Europe",
        "31",
        &["BEL", "DEU"],
    );
    let united_states = country(
        "United States",
        "United States of America",
        "US",
        "USA",
        "North America",
        "Americas",
        "Northern America",
        "1",
        &["CAN", "MEX"],
    );
    let japan = country(
        "Japan",
        "Japan",
        "JP",
        "JPN",
        "Asia",
        "Asia",
        "Eastern Asia",
        "81",
        &[],
    );

    let mut countries = HashMap::new();
    for c in [
        sweden,
        germany,
        norway,
        finland,
        austria,
        switzerland,
        france,
        denmark,
        netherlands,
        united_states,
        japan,
    ] {
        countries.insert(c.codes.alpha2.clone(), c);
    }

    let mut subdivisions = HashMap::new();
    subdivisions.insert(
        "se".to_string(),
        vec![
            subdivision("Stockholms län", &["Stockholm"], "AB"),
            subdivision("Västra Götalands län", &["Västra Götaland"], "O"),
            subdivision("Skåne län", &["Skåne"], "M"),
        ],
    );

    DataSet {
        countries,
        subdivisions,
    }
}

pub fn db() -> CountryDb {
    CountryDb::from_dataset(dataset()).expect("fixture dataset builds")
}
