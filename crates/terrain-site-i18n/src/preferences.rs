//! Durable preference seam and an in-memory backend.

use crate::error::PreferenceError;
use std::collections::HashMap;

/// Key-value storage for user preferences that survive reloads.
pub trait PreferenceStore {
    /// Read the value stored under `key`; `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// `HashMap`-backed preferences for tests and native tooling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Raw stored value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_preferences_round_trip() -> Result<(), PreferenceError> {
        let mut store = MemoryPreferences::new();
        assert_eq!(store.load("lang")?, None);
        store.save("lang", "en")?;
        assert_eq!(store.load("lang")?.as_deref(), Some("en"));
        store.save("lang", "ja")?;
        assert_eq!(store.get("lang"), Some("ja"));
        Ok(())
    }
}
