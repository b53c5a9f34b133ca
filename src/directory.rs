use std::cmp::Ordering;

use log::info;

use crate::{
    errors::QuizError,
    localization::Localizer,
    models::{
        country::{Country, CountryCard, CountryDetails, CurrencyInfo},
        filter::{FilterState, Page, SortOrder, PAGE_SIZE},
    },
};

/// Filtering, sorting and pagination over the full country list.
#[derive(Clone, Debug, Default)]
pub struct CountryDirectory {
    countries: Vec<Country>,
}

impl CountryDirectory {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Filter and sort; no pagination.
    pub fn filtered(&self, filter: &FilterState) -> Vec<&Country> {
        let search = filter.search.to_lowercase();
        let mut matching: Vec<&Country> = self
            .countries
            .iter()
            .filter(|country| matches_filter(country, &search, &filter.region, &filter.subregion))
            .collect();

        match filter.sort {
            SortOrder::none => (),
            SortOrder::ascending => matching.sort_by(|a, b| compare_countries(a, b)),
            SortOrder::descending => matching.sort_by(|a, b| compare_countries(b, a)),
        }

        matching
    }

    /// Distinct subregions of countries in `region` ("" means every region),
    /// alphabetically.
    pub fn subregions(&self, region: &str) -> Vec<String> {
        let mut subregions: Vec<String> = Vec::new();
        for country in &self.countries {
            if !region.is_empty() && country.region() != Some(region) {
                continue;
            }
            if let Some(subregion) = country.subregion() {
                if !subregions.iter().any(|known| known == subregion) {
                    subregions.push(subregion.to_string());
                }
            }
        }
        subregions.sort_by(|a, b| compare_names(a, b));
        subregions
    }

    /// Changes the region and drops a subregion the new region lacks.
    pub fn select_region(&self, filter: &mut FilterState, region: &str) {
        filter.set_region(region);
        if !filter.subregion.is_empty() && !self.subregions(region).contains(&filter.subregion) {
            info!(
                "Clearing subregion {} outside region {}",
                &filter.subregion, region
            );
            filter.subregion.clear();
        }
    }

    /// Current page under `filter`, with the page number clamped into range.
    pub fn page(&self, filter: &FilterState) -> Page<&Country> {
        paginate(self.filtered(filter), filter.page)
    }

    /// Exact common or official name first, then substring; case-insensitive.
    pub fn find_by_name(&self, name: &str) -> Result<&Country, QuizError> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return Err(QuizError::CountryNotFound(name.to_string()));
        }

        let exact = self.countries.iter().find(|country| {
            country.common_name().map(str::to_lowercase).as_deref() == Some(needle.as_str())
                || country.official_name().map(str::to_lowercase).as_deref()
                    == Some(needle.as_str())
        });

        exact
            .or_else(|| {
                self.countries.iter().find(|country| {
                    country
                        .common_name()
                        .map(|common| common.to_lowercase().contains(&needle))
                        .unwrap_or(false)
                })
            })
            .ok_or_else(|| QuizError::CountryNotFound(name.to_string()))
    }
}

fn matches_filter(country: &Country, search: &str, region: &str, subregion: &str) -> bool {
    let name_matches = match country.common_name() {
        Some(name) => name.to_lowercase().contains(search),
        None => search.is_empty(),
    };
    name_matches
        && (region.is_empty() || country.region.as_deref() == Some(region))
        && (subregion.is_empty() || country.subregion.as_deref() == Some(subregion))
}

fn compare_countries(a: &Country, b: &Country) -> Ordering {
    compare_names(a.common_name().unwrap_or(""), b.common_name().unwrap_or(""))
}

/// Collation close to a browser's `localeCompare`: accents and case are
/// secondary to the base letters. Only the Latin diacritics that occur in
/// provider country names are folded; ligatures and letters such as æ, ł,
/// ß or ð sort by their code point.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(text: &str) -> String {
    text.chars()
        .flat_map(|c| c.to_lowercase())
        .map(fold_accent)
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'č' | 'ć' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' | 'ś' => 's',
        'ž' | 'ź' | 'ż' => 'z',
        other => other,
    }
}

/// Slices `items` into pages of `PAGE_SIZE`, clamping `requested`.
pub fn paginate<T>(items: Vec<T>, requested: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = (total_items + PAGE_SIZE - 1) / PAGE_SIZE;
    let page = requested.clamp(1, total_pages.max(1));

    let items = items
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    Page {
        items,
        page,
        totalPages: total_pages,
        totalItems: total_items,
    }
}

pub fn country_card(country: &Country, localizer: &Localizer, language: &str) -> CountryCard {
    let unavailable = localizer.text("dataUnavailable", language);

    CountryCard {
        code: country.cca3.clone(),
        name: country
            .common_name()
            .map(str::to_string)
            .unwrap_or_else(|| localizer.text("unknownCountry", language)),
        flagUrl: country.flag_url().map(str::to_string),
        population: country
            .population
            .map(|population| localizer.format_population(population, language))
            .unwrap_or_else(|| unavailable.clone()),
        region: country
            .region()
            .map(|region| localizer.translate_region(region, language))
            .unwrap_or_else(|| unavailable.clone()),
        capital: country
            .first_capital()
            .map(str::to_string)
            .unwrap_or(unavailable),
    }
}

pub fn country_details(country: &Country, localizer: &Localizer, language: &str) -> CountryDetails {
    let card = country_card(country, localizer, language);
    let unavailable = localizer.text("dataUnavailable", language);

    let languages = country
        .languages
        .as_ref()
        .map(|languages| languages.values().cloned().collect::<Vec<_>>().join(", "))
        .filter(|joined| !joined.is_empty())
        .unwrap_or_else(|| unavailable.clone());

    let currencies = country
        .currencies
        .iter()
        .flatten()
        .map(|(code, currency)| CurrencyInfo {
            code: code.clone(),
            name: currency.name.clone().unwrap_or_else(|| unavailable.clone()),
            symbol: currency.symbol.clone().unwrap_or_default(),
        })
        .collect();

    CountryDetails {
        code: card.code,
        name: card.name,
        officialName: country
            .official_name()
            .map(str::to_string)
            .unwrap_or_else(|| unavailable.clone()),
        flagUrl: card.flagUrl,
        population: card.population,
        region: card.region,
        subregion: country
            .subregion()
            .map(|subregion| localizer.translate_subregion(subregion, language))
            .unwrap_or_else(|| unavailable.clone()),
        capital: card.capital,
        languages,
        currencies,
        coordinates: country.coordinates(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_sort_with_base_letter() {
        let mut names = vec!["Zambia", "Åland Islands", "Albania", "Côte d'Ivoire", "Cuba"];
        names.sort_by(|a, b| compare_names(a, b));

        assert_eq!(
            names,
            vec!["Åland Islands", "Albania", "Côte d'Ivoire", "Cuba", "Zambia"]
        );
    }

    #[test]
    fn unfolded_letters_sort_by_code_point() {
        assert_eq!(compare_names("Ørsta", "Oslo"), Ordering::Less);
        assert_eq!(compare_names("Ærø", "Zambia"), Ordering::Greater);
        assert_eq!(compare_names("Łódź", "Zambia"), Ordering::Greater);
    }

    #[test]
    fn paginate_clamps_out_of_range() {
        let items: Vec<usize> = (0..25).collect();

        let last = paginate(items.clone(), 99);
        assert_eq!(last.page, 3);
        assert_eq!(last.totalPages, 3);
        assert_eq!(last.items, vec![24]);

        let first = paginate(items, 0);
        assert_eq!(first.page, 1);
        assert_eq!(first.items.len(), PAGE_SIZE);
    }

    #[test]
    fn empty_list_is_single_empty_page() {
        let page = paginate(Vec::<usize>::new(), 5);

        assert_eq!(page.page, 1);
        assert_eq!(page.totalPages, 0);
        assert!(page.items.is_empty());
    }
}
