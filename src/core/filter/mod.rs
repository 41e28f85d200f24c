// Core filter module - owns the forbidden-word list and its lifecycle.

pub mod filter_models;
pub mod filter_service;

pub use filter_models::{EntryUpdate, FILTER_KEY, TOGGLE_KEY};
pub use filter_service::FilterService;
