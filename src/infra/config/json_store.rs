// JSON-file implementation of ConfigStore.
//
// The whole config lives in one flat JSON object keyed by dotted paths:
//
// {
//   "chatguard.filter": ["fuck"],
//   "chatguard.toggle": true
// }
//
// The file is read into an in-memory cache on `load` and written back whole
// on `save`. Getters only ever touch the cache.

use crate::core::config::{ConfigError, ConfigStore};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::RwLock;

pub struct JsonConfigStore {
    path: PathBuf,
    cache: RwLock<Map<String, Value>>,
}

impl JsonConfigStore {
    /// Create a store over `path`. The file is not touched until `load` or
    /// `save` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(Map::new()),
        }
    }
}

#[async_trait]
impl ConfigStore for JsonConfigStore {
    async fn get_bool(&self, key: &str, default: bool) -> bool {
        let cache = self.cache.read().await;
        cache
            .get(key)
            .and_then(|value| value.as_bool())
            .unwrap_or(default)
    }

    async fn get_string_list(&self, key: &str, default: &[String]) -> Vec<String> {
        let cache = self.cache.read().await;
        match cache.get(key) {
            Some(value) => string_list_from(value).unwrap_or_else(|| default.to_vec()),
            None => default.to_vec(),
        }
    }

    async fn set_bool(&self, key: &str, value: bool) -> Result<(), ConfigError> {
        let mut cache = self.cache.write().await;
        cache.insert(key.to_string(), Value::Bool(value));
        Ok(())
    }

    async fn set_string_list(&self, key: &str, values: Vec<String>) -> Result<(), ConfigError> {
        let mut cache = self.cache.write().await;
        let items = values.into_iter().map(Value::String).collect();
        cache.insert(key.to_string(), Value::Array(items));
        Ok(())
    }

    async fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let cache = self.cache.read().await;
        let body = serde_json::to_string_pretty(&*cache)?;
        drop(cache); // Release lock before hitting disk
        tokio::fs::write(&self.path, body).await?;
        Ok(())
    }

    async fn load(&self) -> Result<(), ConfigError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            // A config that was never saved is not an error; getters serve
            // their defaults until the first save.
            Err(e) if e.kind() == ErrorKind::NotFound => {
                *self.cache.write().await = Map::new();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Map<String, Value>>(&bytes) {
            Ok(map) => {
                *self.cache.write().await = map;
                Ok(())
            }
            // An unreadable file must not leave a stale document behind.
            Err(e) => {
                *self.cache.write().await = Map::new();
                Err(e.into())
            }
        }
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
