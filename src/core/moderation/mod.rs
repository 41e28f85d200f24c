// Core moderation module - decides the fate of each chat message.
// Following the same pattern as the filter module.

pub mod moderation_models;
pub mod moderation_service;

pub use moderation_models::*;
pub use moderation_service::*;
