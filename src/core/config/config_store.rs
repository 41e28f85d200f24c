// Persistence port for the guard's configuration.
//
// The host decides where configuration lives (a file, a database, another
// plugin's config service); the core only sees this trait. Keys are dotted
// paths like "chatguard.filter".

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Typed key/value store backed by some persisted document.
///
/// Reads are infallible: a missing key, a wrong-shaped value, or an earlier
/// failed load all surface as the caller's default. Only writes and the
/// explicit save/load round-trips can report errors.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn get_bool(&self, key: &str, default: bool) -> bool;

    /// Ordered list of strings; order is preserved exactly as stored.
    async fn get_string_list(&self, key: &str, default: &[String]) -> Vec<String>;

    /// Set a value in the in-memory document. Does not touch disk; call
    /// `save` to persist.
    async fn set_bool(&self, key: &str, value: bool) -> Result<(), ConfigError>;

    async fn set_string_list(&self, key: &str, values: Vec<String>) -> Result<(), ConfigError>;

    /// Persist the in-memory document.
    async fn save(&self) -> Result<(), ConfigError>;

    /// Replace the in-memory document with the persisted one.
    async fn load(&self) -> Result<(), ConfigError>;
}
