use std::{collections::HashMap, path::Path};

use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::{
    errors::SettingsError,
    localization::{ENGLISH, INDONESIAN},
};

pub const THEME_KEY: &str = "country-dashboard-theme";
pub const LANGUAGE_KEY: &str = "country-dashboard-language";

pub const DEFAULT_LANGUAGE: &str = INDONESIAN;

/// Scoped key-value persistence for user preferences.
pub trait SettingsStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

pub struct SqliteSettingsStore {
    connection: Connection,
}

impl SqliteSettingsStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        info!("Opening settings database: {}", path.as_ref().display());
        Self::with_connection(Connection::open(path)?)
    }

    pub fn in_memory() -> Result<Self, SettingsError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(connection: Connection) -> Result<Self, SettingsError> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { connection })
    }
}

impl SettingsStore for SqliteSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        let value = self
            .connection
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.connection.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: HashMap<String, String>,
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    light,
    dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::light => "light",
            Theme::dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Result<Self, SettingsError> {
        match value {
            "light" => Ok(Theme::light),
            "dark" => Ok(Theme::dark),
            other => Err(SettingsError::UnknownTheme(other.to_string())),
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::light => Theme::dark,
            Theme::dark => Theme::light,
        }
    }

    /// Tile layer for the map game.
    pub fn tile_url(&self) -> &'static str {
        match self {
            Theme::dark => "https://{s}.basemaps.cartocdn.com/dark_nolabels/{z}/{x}/{y}{r}.png",
            Theme::light => "https://server.arcgisonline.com/ArcGIS/rest/services/Canvas/World_Light_Gray_Base/MapServer/tile/{z}/{y}/{x}",
        }
    }
}

/// Theme and language, passed explicitly to whatever renders text.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub language: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::light,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Preferences {
    /// Missing or unreadable keys fall back to their own defaults; only a
    /// store failure is an error.
    pub fn load(store: &dyn SettingsStore) -> Result<Self, SettingsError> {
        let theme = match store.get(THEME_KEY)? {
            Some(value) => Theme::parse(&value).unwrap_or_else(|error| {
                warn!("{}, using {}", error, Theme::default().as_str());
                Theme::default()
            }),
            None => Theme::default(),
        };
        let language = store
            .get(LANGUAGE_KEY)?
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        Ok(Self { theme, language })
    }

    pub fn toggle_theme(&mut self, store: &mut dyn SettingsStore) -> Result<Theme, SettingsError> {
        self.theme = self.theme.toggled();
        store.set(THEME_KEY, self.theme.as_str())?;
        info!("Theme switched to {}", self.theme.as_str());
        Ok(self.theme)
    }

    /// Flips between English and the default locale.
    pub fn toggle_language(&mut self, store: &mut dyn SettingsStore) -> Result<String, SettingsError> {
        self.language = if self.language == ENGLISH {
            DEFAULT_LANGUAGE.to_string()
        } else {
            ENGLISH.to_string()
        };
        store.set(LANGUAGE_KEY, &self.language)?;
        info!("Language switched to {}", &self.language);
        Ok(self.language.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_store_is_empty() {
        let store = MemorySettingsStore::default();
        let preferences = Preferences::load(&store).unwrap();

        assert_eq!(preferences.theme, Theme::light);
        assert_eq!(preferences.language, "id");
    }

    #[test]
    fn toggles_are_persisted() {
        let mut store = SqliteSettingsStore::in_memory().unwrap();
        let mut preferences = Preferences::load(&store).unwrap();

        assert_eq!(preferences.toggle_theme(&mut store).unwrap(), Theme::dark);
        assert_eq!(preferences.toggle_language(&mut store).unwrap(), "en");

        let reloaded = Preferences::load(&store).unwrap();
        assert_eq!(reloaded.theme, Theme::dark);
        assert_eq!(reloaded.language, "en");
    }

    #[test]
    fn sqlite_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.db");

        {
            let mut store = SqliteSettingsStore::open(&path).unwrap();
            store.set(THEME_KEY, "dark").unwrap();
            store.set(THEME_KEY, "light").unwrap();
        }

        let store = SqliteSettingsStore::open(&path).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(store.get(LANGUAGE_KEY).unwrap(), None);
    }

    #[test]
    fn unknown_theme_value_keeps_stored_language() {
        let mut store = MemorySettingsStore::default();
        store.set(THEME_KEY, "sepia").unwrap();
        store.set(LANGUAGE_KEY, "en").unwrap();

        let preferences = Preferences::load(&store).unwrap();
        assert_eq!(preferences.theme, Theme::light);
        assert_eq!(preferences.language, "en");
        assert!(matches!(
            Theme::parse("sepia"),
            Err(SettingsError::UnknownTheme(_))
        ));
    }
}
