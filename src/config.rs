use std::{env, fs, path::PathBuf, time::Duration};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::game::GameMode;

pub const CONFIG_ENV: &str = "COUNTRY_QUIZ_CONFIG";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub listen_addr: String,
    pub countries_path: PathBuf,
    pub settings_path: PathBuf,
    pub log_dir: PathBuf,
    pub flag_feedback_ms: u64,
    pub map_feedback_ms: u64,
    /// Fixed seed for question generation; entropy when absent.
    pub rng_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:9001".to_string(),
            countries_path: PathBuf::from("data/countries.json"),
            settings_path: PathBuf::from("settings.db"),
            log_dir: PathBuf::from("log"),
            flag_feedback_ms: GameMode::flag.default_feedback_ms(),
            map_feedback_ms: GameMode::map.default_feedback_ms(),
            rng_seed: None,
        }
    }
}

impl AppConfig {
    /// Defaults, then the JSON file named by `COUNTRY_QUIZ_CONFIG`, then
    /// `COUNTRY_QUIZ_*` variables, then the listen address from `args`.
    pub fn load(args: impl IntoIterator<Item = String>) -> Self {
        let mut config = match env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(&path).unwrap_or_else(|error| {
                warn!("Ignoring config file {}: {}", path, error);
                Self::default()
            }),
            Err(_) => Self::default(),
        };

        config.apply_overrides(|key| env::var(key).ok());

        if let Some(addr) = args.into_iter().nth(1) {
            config.listen_addr = addr;
        }
        config
    }

    pub fn from_file(path: &str) -> Result<Self, String> {
        let data = fs::read_to_string(path).map_err(|error| error.to_string())?;
        serde_json::from_str(&data).map_err(|error| error.to_string())
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("COUNTRY_QUIZ_DATA") {
            self.countries_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("COUNTRY_QUIZ_SETTINGS") {
            self.settings_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("COUNTRY_QUIZ_LOG_DIR") {
            self.log_dir = PathBuf::from(path);
        }
        if let Some(seed) = lookup("COUNTRY_QUIZ_SEED") {
            match seed.parse() {
                Ok(seed) => self.rng_seed = Some(seed),
                Err(error) => warn!("Ignoring COUNTRY_QUIZ_SEED={}: {}", seed, error),
            }
        }
    }

    pub fn feedback_delay(&self, mode: GameMode) -> Duration {
        match mode {
            GameMode::flag => Duration::from_millis(self.flag_feedback_ms),
            GameMode::map => Duration::from_millis(self.map_feedback_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"map_feedback_ms": 500}"#).unwrap();

        assert_eq!(config.map_feedback_ms, 500);
        assert_eq!(config.flag_feedback_ms, 1500);
        assert_eq!(config.listen_addr, "127.0.0.1:9001");
    }

    #[test]
    fn overrides_replace_values() {
        let vars: HashMap<&str, &str> = [
            ("COUNTRY_QUIZ_DATA", "/srv/countries.json"),
            ("COUNTRY_QUIZ_SEED", "42"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|value| value.to_string()));

        assert_eq!(config.countries_path, PathBuf::from("/srv/countries.json"));
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.feedback_delay(GameMode::map), Duration::from_millis(2000));
    }
}
