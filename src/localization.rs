use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const ENGLISH: &str = "en";
pub const INDONESIAN: &str = "id";

/// Regions offered by the directory's region selector, in canonical form.
pub const CANONICAL_REGIONS: [&str; 5] = ["Africa", "Americas", "Asia", "Europe", "Oceania"];

const EN_REGIONS: &[(&str, &str)] = &[
    ("Africa", "Africa"),
    ("Asia", "Asia"),
    ("Europe", "Europe"),
    ("Oceania", "Oceania"),
    ("Americas", "Americas"),
    ("Antarctic", "Antarctic"),
];

const ID_REGIONS: &[(&str, &str)] = &[
    ("Africa", "Afrika"),
    ("Asia", "Asia"),
    ("Europe", "Eropa"),
    ("Oceania", "Oseania"),
    ("Americas", "Amerika"),
    ("Antarctic", "Antarktika"),
];

const EN_SUBREGIONS: &[(&str, &str)] = &[
    ("Northern Africa", "Northern Africa"),
    ("Southern Europe", "Southern Europe"),
    ("South-Eastern Asia", "South-Eastern Asia"),
    ("South America", "South America"),
    ("Caribbean", "Caribbean"),
    ("North America", "North America"),
    ("Western Asia", "Western Asia"),
    ("Northern Europe", "Northern Europe"),
    ("Central Europe", "Central Europe"),
    ("Southern Asia", "Southern Asia"),
    ("Eastern Africa", "Eastern Africa"),
    ("Polynesia", "Polynesia"),
    ("Middle Africa", "Middle Africa"),
    ("Eastern Europe", "Eastern Europe"),
    ("Western Africa", "Western Africa"),
    ("Southern Africa", "Southern Africa"),
    ("Western Europe", "Western Europe"),
    ("Micronesia", "Micronesia"),
    ("Central Asia", "Central Asia"),
    ("Central America", "Central America"),
    ("Australia and New Zealand", "Australia and New Zealand"),
    ("Eastern Asia", "Eastern Asia"),
    ("Southeast Europe", "Southeast Europe"),
    ("Melanesia", "Melanesia"),
];

const ID_SUBREGIONS: &[(&str, &str)] = &[
    ("Northern Africa", "Afrika Utara"),
    ("Southern Europe", "Eropa Selatan"),
    ("South-Eastern Asia", "Asia Tenggara"),
    ("South America", "Amerika Selatan"),
    ("Caribbean", "Karibia"),
    ("North America", "Amerika Utara"),
    ("Western Asia", "Asia Barat"),
    ("Northern Europe", "Eropa Utara"),
    ("Central Europe", "Eropa Tengah"),
    ("Southern Asia", "Asia Selatan"),
    ("Eastern Africa", "Afrika Timur"),
    ("Polynesia", "Polinesia"),
    ("Middle Africa", "Afrika Tengah"),
    ("Eastern Europe", "Eropa Timur"),
    ("Western Africa", "Afrika Barat"),
    ("Southern Africa", "Afrika Selatan"),
    ("Western Europe", "Eropa Barat"),
    ("Micronesia", "Mikronesia"),
    ("Central Asia", "Asia Tengah"),
    ("Central America", "Amerika Tengah"),
    ("Australia and New Zealand", "Australia dan Selandia Baru"),
    ("Eastern Asia", "Asia Timur"),
    ("Southeast Europe", "Eropa Tenggara"),
    ("Melanesia", "Melanesia"),
];

const EN_TEXTS: &[(&str, &str)] = &[
    ("loading", "Loading..."),
    ("back", "Back"),
    ("unknown", "Unknown"),
    ("filterByRegions", "Filter By Regions"),
    ("allSubRegions", "All Sub-Regions"),
    ("noCountriesFound", "No countries found matching your criteria."),
    ("errorLoadingCountries", "Error Loading Countries"),
    ("failedToLoadCountries", "Failed to load countries. Please try again later."),
    ("unknownCountry", "Unknown Country"),
    ("dataUnavailable", "Data unavailable"),
    ("errorLoadingCountry", "Error Loading Country"),
    ("countryNotFound", "Country Not Found"),
    ("countryNotFoundDesc", "The requested country could not be found."),
    ("noCurrencyInfo", "No currency information available."),
    ("flagGuessingGame", "Flag Guessing Game"),
    ("mapGuessingGame", "Map Guessing Game"),
    ("whichCountryIsThis", "Which country is this?"),
    ("score", "Score"),
    ("question", "Question"),
    ("correct", "Correct! 🎉"),
    ("wrong", "Wrong!"),
    ("correctAnswer", "The correct answer is"),
    ("gameOver", "Game Over"),
    ("yourScore", "Your Score"),
    ("playAgain", "Play Again"),
    ("loadingGame", "Loading game..."),
    ("preparingQuestion", "Preparing question..."),
    ("errorLoadingGame", "Error Loading Game"),
    ("failedToLoadGame", "Failed to load countries. Please try again later."),
    ("perfect", "Perfect! 🎉"),
    ("excellent", "Excellent! 👏"),
    ("goodJob", "Good Job! 👍"),
    ("tryAgain", "Try Again! 😢"),
    ("somethingWentWrong", "Something went wrong"),
    ("somethingWentWrongDesc", "We're sorry, but something unexpected happened."),
    ("lightMode", "Light Mode"),
    ("darkMode", "Dark Mode"),
];

const ID_TEXTS: &[(&str, &str)] = &[
    ("loading", "Memuat..."),
    ("back", "Kembali"),
    ("unknown", "Tidak Diketahui"),
    ("filterByRegions", "Filter Berdasarkan Wilayah"),
    ("allSubRegions", "Semua Sub-Wilayah"),
    ("noCountriesFound", "Tidak ada negara yang ditemukan sesuai kriteria Anda."),
    ("errorLoadingCountries", "Kesalahan Memuat Negara"),
    ("failedToLoadCountries", "Gagal memuat negara. Silakan coba lagi nanti."),
    ("unknownCountry", "Negara Tidak Diketahui"),
    ("dataUnavailable", "Data tidak tersedia"),
    ("errorLoadingCountry", "Kesalahan Memuat Negara"),
    ("countryNotFound", "Negara Tidak Ditemukan"),
    ("countryNotFoundDesc", "Negara yang diminta tidak dapat ditemukan."),
    ("noCurrencyInfo", "Informasi mata uang tidak tersedia."),
    ("flagGuessingGame", "Permainan Tebak Bendera"),
    ("mapGuessingGame", "Permainan Tebak Peta"),
    ("whichCountryIsThis", "Negara apakah ini?"),
    ("score", "Skor"),
    ("question", "Pertanyaan"),
    ("correct", "Benar! 🎉"),
    ("wrong", "Salah!"),
    ("correctAnswer", "Jawaban yang benar adalah"),
    ("gameOver", "Permainan Selesai"),
    ("yourScore", "Skor Anda"),
    ("playAgain", "Main Lagi"),
    ("loadingGame", "Memuat permainan..."),
    ("preparingQuestion", "Menyiapkan pertanyaan..."),
    ("errorLoadingGame", "Kesalahan Memuat Permainan"),
    ("failedToLoadGame", "Gagal memuat negara. Silakan coba lagi nanti."),
    ("perfect", "Sempurna! 🎉"),
    ("excellent", "Luar Biasa! 👏"),
    ("goodJob", "Kerja Bagus! 👍"),
    ("tryAgain", "Coba Lagi! 😢"),
    ("somethingWentWrong", "Terjadi kesalahan"),
    ("somethingWentWrongDesc", "Maaf, terjadi sesuatu yang tidak terduga."),
];

/// All translations for a single language tag.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct LocaleTables {
    pub regions: HashMap<String, String>,
    pub subregions: HashMap<String, String>,
    pub texts: HashMap<String, String>,
    pub thousands_separator: char,
    /// Canonical order of subregion names, for listing.
    #[serde(default)]
    pub subregion_order: Vec<String>,
}

impl LocaleTables {
    pub fn from_static(
        regions: &[(&str, &str)],
        subregions: &[(&str, &str)],
        texts: &[(&str, &str)],
        thousands_separator: char,
    ) -> Self {
        let to_map = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect::<HashMap<_, _>>()
        };
        Self {
            regions: to_map(regions),
            subregions: to_map(subregions),
            texts: to_map(texts),
            thousands_separator,
            subregion_order: subregions.iter().map(|(key, _)| key.to_string()).collect(),
        }
    }
}

/// Translates canonical region and subregion names and UI strings.
///
/// Lookups never fail: an unknown language falls back to English, an
/// unknown name or key comes back unchanged.
#[derive(Clone, Debug)]
pub struct Localizer {
    locales: HashMap<String, LocaleTables>,
}

impl Default for Localizer {
    fn default() -> Self {
        let mut localizer = Localizer {
            locales: HashMap::new(),
        };
        localizer.register(
            ENGLISH,
            LocaleTables::from_static(EN_REGIONS, EN_SUBREGIONS, EN_TEXTS, ','),
        );
        localizer.register(
            INDONESIAN,
            LocaleTables::from_static(ID_REGIONS, ID_SUBREGIONS, ID_TEXTS, '.'),
        );
        localizer
    }
}

impl Localizer {
    pub fn register(&mut self, language: &str, tables: LocaleTables) {
        self.locales.insert(language.to_string(), tables);
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.locales.contains_key(language)
    }

    fn tables(&self, language: &str) -> Option<&LocaleTables> {
        self.locales
            .get(language)
            .or_else(|| self.locales.get(ENGLISH))
    }

    pub fn translate_region(&self, region: &str, language: &str) -> String {
        self.tables(language)
            .and_then(|tables| tables.regions.get(region))
            .cloned()
            .unwrap_or_else(|| region.to_string())
    }

    pub fn translate_subregion(&self, subregion: &str, language: &str) -> String {
        self.tables(language)
            .and_then(|tables| tables.subregions.get(subregion))
            .cloned()
            .unwrap_or_else(|| subregion.to_string())
    }

    /// UI string for `key`. Keys missing from the requested language use the
    /// English text before falling back to the key itself.
    pub fn text(&self, key: &str, language: &str) -> String {
        self.tables(language)
            .and_then(|tables| tables.texts.get(key))
            .or_else(|| {
                self.locales
                    .get(ENGLISH)
                    .and_then(|tables| tables.texts.get(key))
            })
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn translated_regions(&self, language: &str) -> Vec<String> {
        CANONICAL_REGIONS
            .iter()
            .map(|region| self.translate_region(region, language))
            .collect()
    }

    pub fn translated_subregions(&self, language: &str) -> Vec<String> {
        match self.tables(language) {
            Some(tables) => tables
                .subregion_order
                .iter()
                .map(|subregion| self.translate_subregion(subregion, language))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Groups digits in threes with the language's separator.
    pub fn format_population(&self, population: u64, language: &str) -> String {
        let separator = self
            .tables(language)
            .map(|tables| tables.thousands_separator)
            .unwrap_or(',');

        let digits = population.to_string();
        let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                formatted.push(separator);
            }
            formatted.push(digit);
        }
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_grouping() {
        let localizer = Localizer::default();

        assert_eq!(localizer.format_population(0, ENGLISH), "0");
        assert_eq!(localizer.format_population(999, ENGLISH), "999");
        assert_eq!(localizer.format_population(1000, ENGLISH), "1,000");
        assert_eq!(localizer.format_population(273523621, INDONESIAN), "273.523.621");
    }

    #[test]
    fn missing_indonesian_text_uses_english() {
        let localizer = Localizer::default();

        assert_eq!(localizer.text("lightMode", INDONESIAN), "Light Mode");
        assert_eq!(localizer.text("wrong", INDONESIAN), "Salah!");
        assert_eq!(localizer.text("noSuchKey", INDONESIAN), "noSuchKey");
    }
}
