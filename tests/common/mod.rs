#![allow(dead_code)]

use country_quiz_rust::models::country::{Country, CountryName, Flags};

/// (name, region, subregion)
const FIXTURE: [(&str, &str, &str); 20] = [
    ("Vietnam", "Asia", "South-Eastern Asia"),
    ("Germany", "Europe", "Western Europe"),
    ("Brazil", "Americas", "South America"),
    ("Japan", "Asia", "Eastern Asia"),
    ("Kenya", "Africa", "Eastern Africa"),
    ("France", "Europe", "Western Europe"),
    ("Fiji", "Oceania", "Melanesia"),
    ("India", "Asia", "Southern Asia"),
    ("Chile", "Americas", "South America"),
    ("Egypt", "Africa", "Northern Africa"),
    ("Norway", "Europe", "Northern Europe"),
    ("Canada", "Americas", "North America"),
    ("Bhutan", "Asia", "Southern Asia"),
    ("Ghana", "Africa", "Western Africa"),
    ("Samoa", "Oceania", "Polynesia"),
    ("Italy", "Europe", "Southern Europe"),
    ("Mexico", "Americas", "North America"),
    ("Mongolia", "Asia", "Eastern Asia"),
    ("Morocco", "Africa", "Northern Africa"),
    ("Australia", "Oceania", "Australia and New Zealand"),
];

pub fn country(name: &str, region: &str, subregion: &str) -> Country {
    Country {
        name: Some(CountryName {
            common: name.to_string(),
            official: format!("Republic of {}", name),
        }),
        flags: Some(Flags {
            png: Some(format!("https://flagcdn.com/w320/{}.png", name.to_lowercase())),
            svg: None,
        }),
        population: Some(1_000_000),
        region: Some(region.to_string()),
        subregion: Some(subregion.to_string()),
        capital: Some(vec![format!("{} City", name)]),
        latlng: Some(vec![10.0, 20.0]),
        cca3: name[..3].to_uppercase(),
        ..Default::default()
    }
}

pub fn twenty_countries() -> Vec<Country> {
    FIXTURE
        .iter()
        .map(|(name, region, subregion)| country(name, region, subregion))
        .collect()
}

/// `count` countries named `Country 000`, `Country 001`, ...
pub fn numbered_countries(count: usize) -> Vec<Country> {
    (0..count)
        .map(|index| {
            let region = if index % 2 == 0 { "Europe" } else { "Asia" };
            let mut country = country(&format!("Country {:03}", index), region, "Somewhere");
            country.cca3 = format!("C{:02}", index);
            country
        })
        .collect()
}
