// Core command module - grammar and execution for /chatguard.

pub mod command_models;
pub mod command_service;

pub use command_models::{parse_command, GuardCommand};
pub use command_service::CommandService;
