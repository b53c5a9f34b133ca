use std::{fs, path::PathBuf};

use log::{info, warn};

use crate::{directory::CountryDirectory, errors::QuizError, models::country::Country};

/// Source of country records ("all countries" and "country by name").
pub trait CountryProvider: Send + Sync {
    fn all_countries(&self) -> Result<Vec<Country>, QuizError>;

    /// Matches in relevance order; an empty result is `CountryNotFound`.
    fn country_by_name(&self, name: &str) -> Result<Vec<Country>, QuizError> {
        let directory = CountryDirectory::new(self.all_countries()?);
        let country = directory.find_by_name(name)?;
        Ok(vec![country.clone()])
    }
}

/// Reads a provider snapshot (a JSON array of country records) on every
/// request.
#[derive(Clone, Debug)]
pub struct FileCountryProvider {
    path: PathBuf,
}

impl FileCountryProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CountryProvider for FileCountryProvider {
    fn all_countries(&self) -> Result<Vec<Country>, QuizError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(error) => {
                warn!("Reading {} failed: {}", self.path.display(), error);
                return Err(QuizError::DataFetchFailed(error.to_string()));
            }
        };

        let countries: Vec<Country> = match serde_json::from_str(&data) {
            Ok(countries) => countries,
            Err(error) => {
                warn!("Parsing {} failed: {}", self.path.display(), error);
                return Err(QuizError::DataFetchFailed(error.to_string()));
            }
        };

        if countries.is_empty() {
            return Err(QuizError::DataFetchFailed(
                "provider returned no countries".to_string(),
            ));
        }

        info!(
            "Loaded {} countries from {}",
            countries.len(),
            self.path.display()
        );
        Ok(countries)
    }
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryCountryProvider {
    countries: Vec<Country>,
}

impl InMemoryCountryProvider {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }
}

impl CountryProvider for InMemoryCountryProvider {
    fn all_countries(&self) -> Result<Vec<Country>, QuizError> {
        Ok(self.countries.clone())
    }
}
