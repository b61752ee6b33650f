//! Event context for a single notification.
//!
//! Responsibilities:
//! - Hold the merged key/value mapping describing one alert event.
//! - Serialize as a flat JSON object of strings.
//!
//! Does NOT handle:
//! - Collecting entries from the environment or command line (see `loader`).
//! - XML rendering (see client crate).
//!
//! Invariants:
//! - Iteration is in lexicographic key order, so rendered payloads are deterministic.
//! - Inserting an existing key replaces its value (later sources override earlier ones).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Merged key/value mapping describing one alert event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context(BTreeMap<String, String>);

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Context {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Context::new();
        context.extend(iter);
        context
    }
}

impl From<Context> for BTreeMap<String, String> {
    fn from(context: Context) -> Self {
        context.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overrides_existing() {
        let mut context = Context::new();
        assert_eq!(context.insert("HOSTNAME", "web01"), None);
        assert_eq!(
            context.insert("HOSTNAME", "web02"),
            Some("web01".to_string())
        );
        assert_eq!(context.get("HOSTNAME"), Some("web02"));
        assert_eq!(context.len(), 1);
    }

    #[test]
    fn test_iterates_in_key_order() {
        let context: Context = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        let keys: Vec<_> = context.keys().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let context: Context = [("NOTIFY_HOSTNAME", "web01"), ("PLUGIN_VERSION", "1.0")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&context).unwrap();
        assert_eq!(
            json,
            r#"{"NOTIFY_HOSTNAME":"web01","PLUGIN_VERSION":"1.0"}"#
        );

        let back: Context = serde_json::from_str(&json).unwrap();
        assert_eq!(back, context);
    }
}
