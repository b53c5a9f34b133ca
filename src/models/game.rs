use serde::{Deserialize, Serialize};

use super::country::Country;

pub const TOTAL_ROUNDS: usize = 15;
pub const CHOICE_COUNT: usize = 4;

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameMode {
    flag,
    map,
}

impl GameMode {
    /// Structural requirement a country must meet to be asked about.
    pub fn is_eligible(&self, country: &Country) -> bool {
        if country.common_name().is_none() {
            return false;
        }
        match self {
            GameMode::flag => country.flag_url().is_some(),
            GameMode::map => country.coordinates().is_some(),
        }
    }

    pub fn default_feedback_ms(&self) -> u64 {
        match self {
            GameMode::flag => 1500,
            GameMode::map => 2000,
        }
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            GameMode::flag => "flagGuessingGame",
            GameMode::map => "mapGuessingGame",
        }
    }
}

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind")]
pub enum QuestionPrompt {
    flag { url: String },
    map { latitude: f64, longitude: f64, zoom: u8 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub target: Country,
    /// Four distinct names in presentation order.
    pub choices: Vec<String>,
    pub prompt: QuestionPrompt,
}

impl Question {
    pub fn answer(&self) -> &str {
        self.target.common_name().unwrap_or_default()
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.answer()
    }
}

#[allow(non_snake_case)]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub correctAnswer: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    pub score: usize,
    pub round_index: usize,
    pub last_feedback: Option<Feedback>,
    pub terminal: bool,
}

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeTier {
    perfect,
    excellent,
    good,
    #[serde(rename = "try-again")]
    tryAgain,
}

impl OutcomeTier {
    pub fn from_score(score: usize, total: usize) -> Self {
        let percentage = percentage(score, total);
        if percentage == 100 {
            OutcomeTier::perfect
        } else if percentage >= 85 {
            OutcomeTier::excellent
        } else if percentage >= 65 {
            OutcomeTier::good
        } else {
            OutcomeTier::tryAgain
        }
    }

    pub fn text_key(&self) -> &'static str {
        match self {
            OutcomeTier::perfect => "perfect",
            OutcomeTier::excellent => "excellent",
            OutcomeTier::good => "goodJob",
            OutcomeTier::tryAgain => "tryAgain",
        }
    }
}

/// `round(100 * score / total)`, halves rounded up.
pub fn percentage(score: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (200 * score + total) / (2 * total)
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub score: usize,
    pub total: usize,
    pub percentage: usize,
    pub tier: OutcomeTier,
}

/// Issued for an answered question; the delayed advancement presents it
/// back to the session that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceTicket {
    pub epoch: u64,
    pub round: usize,
}

const VERY_SMALL_COUNTRIES: [&str; 10] = [
    "Vatican City",
    "Monaco",
    "San Marino",
    "Liechtenstein",
    "Malta",
    "Andorra",
    "Singapore",
    "Bahrain",
    "Maldives",
    "Barbados",
];

const SMALL_COUNTRIES: [&str; 21] = [
    "Luxembourg",
    "Cyprus",
    "Qatar",
    "Kuwait",
    "Lebanon",
    "Israel",
    "Brunei",
    "Trinidad and Tobago",
    "Cape Verde",
    "Samoa",
    "Comoros",
    "Mauritius",
    "Seychelles",
    "Palau",
    "Nauru",
    "Tuvalu",
    "Gambia",
    "Djibouti",
    "Grenada",
    "Saint Lucia",
    "Antigua and Barbuda",
];

const LARGE_COUNTRIES: [&str; 18] = [
    "Russia",
    "Canada",
    "United States",
    "China",
    "Brazil",
    "Australia",
    "India",
    "Argentina",
    "Kazakhstan",
    "Algeria",
    "Democratic Republic of the Congo",
    "Saudi Arabia",
    "Mexico",
    "Indonesia",
    "Sudan",
    "Libya",
    "Iran",
    "Mongolia",
];

/// Map zoom so the whole country fills the view.
pub fn zoom_level(country_name: &str) -> u8 {
    if VERY_SMALL_COUNTRIES.contains(&country_name) {
        12
    } else if SMALL_COUNTRIES.contains(&country_name) {
        9
    } else if LARGE_COUNTRIES.contains(&country_name) {
        5
    } else {
        7
    }
}
