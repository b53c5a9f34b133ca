use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures surfaced to the player. None of them are retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("failed to load countries: {0}")]
    DataFetchFailed(String),
    #[error("no eligible countries to build a question from")]
    NoEligibleCountries,
    #[error("country not found: {0}")]
    CountryNotFound(String),
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Wire tag for an error, paired with a UI string key.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    dataFetchFailed,
    noEligibleCountries,
    countryNotFound,
    invalidState,
}

impl QuizError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuizError::DataFetchFailed(_) => ErrorKind::dataFetchFailed,
            QuizError::NoEligibleCountries => ErrorKind::noEligibleCountries,
            QuizError::CountryNotFound(_) => ErrorKind::countryNotFound,
            QuizError::InvalidState(_) => ErrorKind::invalidState,
        }
    }

    /// UI string key shown as the error headline.
    pub fn text_key(&self) -> &'static str {
        match self {
            QuizError::DataFetchFailed(_) => "failedToLoadGame",
            QuizError::NoEligibleCountries => "errorLoadingGame",
            QuizError::CountryNotFound(_) => "countryNotFoundDesc",
            QuizError::InvalidState(_) => "somethingWentWrong",
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("unknown theme value: {0}")]
    UnknownTheme(String),
}
