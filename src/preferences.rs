//! User display preferences persisted through an injected storage
//! interface.
//!
//! The engine never touches ambient storage. Embedders implement
//! [PreferenceStore] over whatever persistence they have (browser storage,
//! a file, a database row) and pass it in; [MemoryPreferenceStore] covers
//! tests and embedders that keep preferences in memory.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::{Error, filter::TimePeriod};

/// How the UI should present data when a session starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPreferences {
    /// The filter period selected when a session starts.
    pub default_period: TimePeriod,
    /// The symbol prefixed to formatted currency amounts.
    pub currency_symbol: String,
    /// Whether the transactions view shows per-category summaries.
    pub show_category_summary: bool,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            default_period: TimePeriod::ThisMonth,
            currency_symbol: "$".to_owned(),
            show_category_summary: true,
        }
    }
}

impl DisplayPreferences {
    /// Load preferences from `store`, falling back to defaults when nothing
    /// has been saved yet.
    ///
    /// # Errors
    /// Returns [Error::PreferencesLoad] if the store fails or the saved
    /// payload cannot be parsed.
    pub fn load_from(store: &dyn PreferenceStore) -> Result<Self, Error> {
        match store.load()? {
            Some(payload) => serde_json::from_str(&payload)
                .map_err(|error| Error::PreferencesLoad(error.to_string())),
            None => Ok(Self::default()),
        }
    }

    /// Save the preferences to `store` as JSON.
    ///
    /// # Errors
    /// Returns [Error::PreferencesSave] if serialization or the store fails.
    pub fn save_to(&self, store: &dyn PreferenceStore) -> Result<(), Error> {
        let payload = serde_json::to_string(self)
            .map_err(|error| Error::PreferencesSave(error.to_string()))?;

        store.save(&payload)?;
        tracing::debug!("saved display preferences");

        Ok(())
    }
}

/// Storage for the serialized preference payload.
pub trait PreferenceStore {
    /// Load the previously saved payload, if any.
    ///
    /// # Errors
    /// Returns [Error::PreferencesLoad] if the underlying storage fails.
    fn load(&self) -> Result<Option<String>, Error>;

    /// Persist the payload, replacing any previous one.
    ///
    /// # Errors
    /// Returns [Error::PreferencesSave] if the underlying storage fails.
    fn save(&self, payload: &str) -> Result<(), Error>;
}

/// An in-memory preference store.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    payload: Mutex<Option<String>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<String>, Error> {
        self.payload
            .lock()
            .map(|payload| payload.clone())
            .map_err(|error| Error::PreferencesLoad(error.to_string()))
    }

    fn save(&self, payload: &str) -> Result<(), Error> {
        self.payload
            .lock()
            .map(|mut stored| *stored = Some(payload.to_owned()))
            .map_err(|error| Error::PreferencesSave(error.to_string()))
    }
}
