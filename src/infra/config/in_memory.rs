// This is the infra layer - it implements the traits defined in core.
// This file provides an IN-MEMORY implementation of ConfigStore.
//
// Used by the core service tests, and a reasonable choice for hosts that
// keep guard settings inside their own config system and only need the
// typed accessors.

use crate::core::config::{ConfigError, ConfigStore};
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory implementation of ConfigStore.
///
/// DashMap gives us a concurrent map without an explicit lock, which matters
/// because chat screening reads the config on every message while commands
/// mutate it.
pub struct InMemoryConfigStore {
    data: DashMap<String, Value>,
    saves: AtomicUsize,
}

impl InMemoryConfigStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of times `save` has been called. The map is the backing truth
    /// here, so this is what service tests check to see that a mutation
    /// actually asked to persist.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn get_bool(&self, key: &str, default: bool) -> bool {
        self.data
            .get(key)
            .and_then(|value| value.as_bool())
            .unwrap_or(default)
    }

    async fn get_string_list(&self, key: &str, default: &[String]) -> Vec<String> {
        match self.data.get(key) {
            Some(value) => string_list_from(&value).unwrap_or_else(|| default.to_vec()),
            None => default.to_vec(),
        }
    }

    async fn set_bool(&self, key: &str, value: bool) -> Result<(), ConfigError> {
        self.data.insert(key.to_string(), Value::Bool(value));
        Ok(())
    }

    async fn set_string_list(&self, key: &str, values: Vec<String>) -> Result<(), ConfigError> {
        let items = values.into_iter().map(Value::String).collect();
        self.data.insert(key.to_string(), Value::Array(items));
        Ok(())
    }

    // The map is already the backing truth; save only counts the request.
    async fn save(&self) -> Result<(), ConfigError> {
        self.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    async fn load(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Salvage a string list from a JSON value. A present-but-empty array is an
/// empty list, not a miss; only a non-array shape counts as missing.
fn string_list_from(value: &Value) -> Option<Vec<String>> {
    value.as_array().map(|items| {
        items
            .iter()
            .filter_map(|item| item.as_str().map(String::from))
            .collect()
    })
}

impl Default for InMemoryConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_keys_serve_the_default() {
        let store = InMemoryConfigStore::new();
        assert!(store.get_bool("chatguard.toggle", true).await);

        let default = vec!["fuck".to_string()];
        assert_eq!(
            store.get_string_list("chatguard.filter", &default).await,
            default
        );
    }

    #[tokio::test]
    async fn values_round_trip() {
        let store = InMemoryConfigStore::new();

        store.set_bool("chatguard.toggle", false).await.unwrap();
        assert!(!store.get_bool("chatguard.toggle", true).await);

        let list = vec!["fuck".to_string(), "you suck".to_string()];
        store
            .set_string_list("chatguard.filter", list.clone())
            .await
            .unwrap();
        assert_eq!(store.get_string_list("chatguard.filter", &[]).await, list);
    }

    #[tokio::test]
    async fn save_calls_are_counted() {
        let store = InMemoryConfigStore::new();
        assert_eq!(store.save_count(), 0);

        store.save().await.unwrap();
        store.save().await.unwrap();
        assert_eq!(store.save_count(), 2);
    }

    #[tokio::test]
    async fn an_empty_stored_list_is_not_a_miss() {
        let store = InMemoryConfigStore::new();
        store
            .set_string_list("chatguard.filter", Vec::new())
            .await
            .unwrap();

        let default = vec!["fuck".to_string()];
        assert!(store
            .get_string_list("chatguard.filter", &default)
            .await
            .is_empty());
    }
}
