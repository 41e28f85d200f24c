// The infra module contains implementations of core traits.
// Each feature implementation goes in its own submodule.

#[path = "config/mod.rs"]
pub mod config;

#[path = "access/static_access.rs"]
pub mod access;

#[path = "update/update_checker.rs"]
pub mod update;
