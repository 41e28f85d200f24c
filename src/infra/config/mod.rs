// Config infra layer.
// - `json_store.rs` persists the config as one flat JSON file.
// - `in_memory.rs` backs tests and embedded hosts.

#[path = "json_store.rs"]
pub mod json_store;

#[path = "in_memory.rs"]
pub mod in_memory;

pub use in_memory::InMemoryConfigStore;
pub use json_store::JsonConfigStore;
