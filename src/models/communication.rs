#![allow(non_camel_case_types, non_snake_case)]

use serde::{Deserialize, Serialize};

use super::{
    country::{CountryCard, CountryDetails},
    filter::{FilterState, Page, SortOrder},
    game::{GameMode, Outcome, QuestionPrompt},
};
use crate::{errors::ErrorKind, settings::Preferences};

/// Selector entry: canonical value plus translated label.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RegionOption {
    pub value: String,
    pub label: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "response", content = "data")]
pub enum Response {
    pageResponse {
        page: Page<CountryCard>,
        filter: FilterState,
        regions: Vec<RegionOption>,
        subregions: Vec<RegionOption>,
        emptyText: Option<String>,
    },
    countryResponse {
        country: CountryDetails,
    },
    questionResponse {
        mode: GameMode,
        title: String,
        round: usize,
        totalRounds: usize,
        score: usize,
        choices: Vec<String>,
        prompt: QuestionPrompt,
        tileUrl: Option<String>,
    },
    feedbackResponse {
        correct: bool,
        correctAnswer: String,
        text: String,
        score: usize,
    },
    gameOverResponse {
        title: String,
        outcome: Outcome,
        text: String,
    },
    settingsResponse {
        preferences: Preferences,
    },
    errorResponse {
        kind: ErrorKind,
        errorText: String,
        detail: String,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Command {
    heartbeat {},
    getPage {},
    search { text: String },
    selectRegion { region: String },
    selectSubregion { subregion: String },
    sortBy { order: SortOrder },
    goToPage { page: usize },
    getCountry { name: String },
    startGame { mode: GameMode },
    writeAnswer { answer: String },
    restartGame {},
    getSettings {},
    toggleTheme {},
    toggleLanguage {},
}
