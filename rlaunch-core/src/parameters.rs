//! String configuration parameters passed through to engines.

use crate::error::{RequestError, RequestResult};
use log::trace;
use serde::Serialize;
use std::collections::BTreeMap;

/// Key/value side channel for engine-specific tuning.
///
/// Keys are never blank. Writing an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigurationParameters {
    entries: BTreeMap<String, String>,
}

impl ConfigurationParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject empty and all-whitespace keys.
    pub fn validate_key(key: &str) -> RequestResult<()> {
        if key.trim().is_empty() {
            return Err(RequestError::InvalidConfigurationKey);
        }
        Ok(())
    }

    /// Insert or overwrite `key`, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> RequestResult<Option<String>> {
        let key = key.into();
        Self::validate_key(&key)?;
        let value = value.into();
        trace!("Configuration parameter {key} = {value}");
        Ok(self.entries.insert(key, value))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// `true`/`false` in any case; any other value reads as absent.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        let value = self.get(key)?.trim();
        if value.eq_ignore_ascii_case("true") {
            Some(true)
        } else if value.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries sorted by key
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_absent() {
        let params = ConfigurationParameters::new();

        assert_eq!(params.get("key"), None);
        assert!(params.is_empty());
    }

    #[test]
    fn test_insert_overwrites() {
        let mut params = ConfigurationParameters::new();

        assert_eq!(params.insert("key", "value").unwrap(), None);
        assert_eq!(
            params.insert("key", "value-new").unwrap(),
            Some("value".to_string())
        );
        assert_eq!(params.get("key"), Some("value-new"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_blank_keys_rejected_without_change() {
        let mut params = ConfigurationParameters::new();
        params.insert("kept", "1").unwrap();

        for key in ["", " ", "\t\n"] {
            assert!(matches!(
                params.insert(key, "value"),
                Err(RequestError::InvalidConfigurationKey)
            ));
        }

        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("kept", "1")]);
    }

    #[test]
    fn test_get_bool() {
        let mut params = ConfigurationParameters::new();
        params.insert("a", "TRUE").unwrap();
        params.insert("b", "false").unwrap();
        params.insert("c", "yes").unwrap();

        assert_eq!(params.get_bool("a"), Some(true));
        assert_eq!(params.get_bool("b"), Some(false));
        assert_eq!(params.get_bool("c"), None);
        assert_eq!(params.get_bool("missing"), None);
    }

    #[test]
    fn test_keys_are_sorted() {
        let mut params = ConfigurationParameters::new();
        params.insert("b", "2").unwrap();
        params.insert("a", "1").unwrap();

        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
