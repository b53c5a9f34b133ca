use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CountryName {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Flags {
    pub png: Option<String>,
    pub svg: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Currency {
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// One record from the country data provider. Every field may be missing.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Country {
    pub name: Option<CountryName>,
    pub flags: Option<Flags>,
    pub population: Option<u64>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub capital: Option<Vec<String>>,
    pub currencies: Option<BTreeMap<String, Currency>>,
    pub languages: Option<BTreeMap<String, String>>,
    pub latlng: Option<Vec<f64>>,
    #[serde(default)]
    pub cca3: String,
}

impl Country {
    pub fn common_name(&self) -> Option<&str> {
        self.name
            .as_ref()
            .map(|name| name.common.as_str())
            .filter(|name| !name.trim().is_empty())
    }

    pub fn official_name(&self) -> Option<&str> {
        self.name
            .as_ref()
            .map(|name| name.official.as_str())
            .filter(|name| !name.trim().is_empty())
    }

    /// PNG is preferred over SVG.
    pub fn flag_url(&self) -> Option<&str> {
        let flags = self.flags.as_ref()?;
        flags
            .png
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| flags.svg.as_deref().filter(|url| !url.is_empty()))
    }

    /// `(latitude, longitude)`, only for a pair of exactly two numbers.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match self.latlng.as_deref() {
            Some([lat, lng]) => Some((*lat, *lng)),
            _ => None,
        }
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref().filter(|region| !region.is_empty())
    }

    pub fn subregion(&self) -> Option<&str> {
        self.subregion
            .as_deref()
            .filter(|subregion| !subregion.is_empty())
    }

    pub fn first_capital(&self) -> Option<&str> {
        self.capital
            .as_ref()
            .and_then(|capitals| capitals.first())
            .map(|capital| capital.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CurrencyInfo {
    pub code: String,
    pub name: String,
    pub symbol: String,
}

/// Summary shown in the directory grid.
#[allow(non_snake_case)]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CountryCard {
    pub code: String,
    pub name: String,
    pub flagUrl: Option<String>,
    pub population: String,
    pub region: String,
    pub capital: String,
}

/// Everything the detail view renders for one country.
#[allow(non_snake_case)]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CountryDetails {
    pub code: String,
    pub name: String,
    pub officialName: String,
    pub flagUrl: Option<String>,
    pub population: String,
    pub region: String,
    pub subregion: String,
    pub capital: String,
    pub languages: String,
    pub currencies: Vec<CurrencyInfo>,
    pub coordinates: Option<(f64, f64)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_record_deserializes() {
        let country: Country = serde_json::from_str(r#"{"cca3": "XXX"}"#).unwrap();

        assert_eq!(country.cca3, "XXX");
        assert_eq!(country.common_name(), None);
        assert_eq!(country.flag_url(), None);
        assert_eq!(country.coordinates(), None);
        assert_eq!(country.first_capital(), None);
    }

    #[test]
    fn coordinates_need_exactly_two_numbers() {
        let mut country = Country {
            latlng: Some(vec![10.0]),
            ..Default::default()
        };
        assert_eq!(country.coordinates(), None);

        country.latlng = Some(vec![10.0, 20.0, 30.0]);
        assert_eq!(country.coordinates(), None);

        country.latlng = Some(vec![10.0, 20.0]);
        assert_eq!(country.coordinates(), Some((10.0, 20.0)));
    }

    #[test]
    fn flag_falls_back_to_svg() {
        let country: Country = serde_json::from_str(
            r#"{"cca3": "FRA", "flags": {"png": "", "svg": "https://flagcdn.com/fr.svg"}}"#,
        )
        .unwrap();

        assert_eq!(country.flag_url(), Some("https://flagcdn.com/fr.svg"));
    }
}
