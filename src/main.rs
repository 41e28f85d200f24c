// This is the entry point of the console host.
//
// **Architecture Overview:**
// - `core/` = Business logic (host-agnostic)
// - `infra/` = Implementations of core traits (config files, permissions, HTTP)
// - `console/` = Terminal adapter (chat and commands over stdin)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Run the console session

use chatguard::console::session::ConsoleSession;
use chatguard::core::access::{BYPASS_PERMISSION, CONFIG_PERMISSION};
use chatguard::core::commands::CommandService;
use chatguard::core::config::ConfigStore;
use chatguard::core::filter::FilterService;
use chatguard::core::moderation::ModerationService;
use chatguard::infra::access::StaticAccessControl;
use chatguard::infra::config::JsonConfigStore;
use chatguard::infra::update;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    // Optional release check; runs in the background.
    if let Ok(api_url) = std::env::var("CHATGUARD_UPDATE_URL") {
        tokio::spawn(async move {
            update::check_for_updates("ChatGuard", env!("CARGO_PKG_VERSION"), &api_url).await;
        });
    }

    // Keep runtime files in a dedicated folder so the repo root stays tidy.
    let config_path = std::env::var("CHATGUARD_CONFIG").unwrap_or_else(|_| {
        std::fs::create_dir_all("data").expect("Failed to create data directory");
        "data/chatguard.json".to_string()
    });

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================
    // Create our services with their dependencies.
    // This is the "composition root" where we wire everything together.

    let config = Arc::new(JsonConfigStore::new(&config_path));
    match config.load().await {
        Ok(()) => tracing::info!("[ChatGuard] Config '{}' loaded successfully.", config_path),
        Err(e) => tracing::error!("[ChatGuard] Failed to load config '{}': {}", config_path, e),
    }

    let filter = Arc::new(FilterService::new(Arc::clone(&config)).await);

    // The console host answers permission checks from env-seeded grants.
    let access = Arc::new(StaticAccessControl::new());
    for player in env_list("CHATGUARD_STAFF") {
        access.grant(&player, CONFIG_PERMISSION);
    }
    for player in env_list("CHATGUARD_BYPASS") {
        access.grant(&player, BYPASS_PERMISSION);
    }

    let moderation = ModerationService::new(Arc::clone(&filter), Arc::clone(&access));
    let commands = CommandService::new(Arc::clone(&filter), Arc::clone(&access));

    let player = std::env::var("CHATGUARD_PLAYER").unwrap_or_else(|_| "player".to_string());

    tracing::info!("[ChatGuard] v{} Enabled.", env!("CARGO_PKG_VERSION"));

    let session = ConsoleSession::new(player, moderation, commands);
    if let Err(e) = session.run().await {
        tracing::error!("Console session ended with an error: {}", e);
    }

    // Mirror the session's final state back to disk before exiting.
    match config.save().await {
        Ok(()) => tracing::info!("[ChatGuard] Config '{}' saved successfully.", config_path),
        Err(e) => tracing::error!("[ChatGuard] Failed to save config '{}': {}", config_path, e),
    }

    tracing::info!("[ChatGuard] v{} Disabled.", env!("CARGO_PKG_VERSION"));
}

/// Comma-separated player names from an env var, trimmed, empties dropped.
fn env_list(key: &str) -> Vec<String> {
    std::env::var(key)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
