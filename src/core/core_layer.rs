// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "access/access_control.rs"]
pub mod access;

#[path = "config/config_store.rs"]
pub mod config;

#[path = "filter/mod.rs"]
pub mod filter;

#[path = "moderation/mod.rs"]
pub mod moderation;

#[path = "commands/mod.rs"]
pub mod commands;
