//! ChatGuard - chat moderation filter with a live-administered word list.
//!
//! Screens chat messages against a mutable list of forbidden substrings.
//! Staff manage the list at runtime through a permission-gated command set,
//! and every change is pushed through the config store so it survives a
//! restart.
//!
//! Layers:
//! - `core/` = business logic (host-agnostic)
//! - `infra/` = implementations of core traits (config files, permissions, HTTP)
//! - `console/` = terminal adapter (chat and commands over stdin)

#[path = "core/core_layer.rs"]
pub mod core;

#[path = "infra/infra_layer.rs"]
pub mod infra;

#[path = "console/console_layer.rs"]
pub mod console;

pub use crate::core::access::{AccessControl, Sender, BYPASS_PERMISSION, CONFIG_PERMISSION};
pub use crate::core::commands::CommandService;
pub use crate::core::config::{ConfigError, ConfigStore};
pub use crate::core::filter::FilterService;
pub use crate::core::moderation::{ChatVerdict, ModerationService};
