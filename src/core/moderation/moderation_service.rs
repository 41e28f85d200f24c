// Chat screening service - core business logic for the message filter.
//
// A message passes through three gates, in order:
// - the global enforcement toggle
// - the sender's bypass permission
// - the forbidden-substring scan
//
// NO console or terminal dependencies here - just pure domain logic.

use super::moderation_models::ChatVerdict;
use crate::core::access::{is_permitted, AccessControl, Sender, BYPASS_PERMISSION};
use crate::core::config::ConfigStore;
use crate::core::filter::FilterService;
use std::sync::Arc;

// ============================================================================
// MATCHING
// ============================================================================

/// Find the first filter entry contained anywhere in `message`.
///
/// Entries are stored lowercase, so lowercasing the message once makes the
/// scan case-insensitive. Entries are tried in list order and the first hit
/// wins, even when a later entry would match at an earlier position in the
/// message.
pub fn find_match(message: &str, entries: &[String]) -> Option<String> {
    let lowered = message.to_lowercase();
    entries
        .iter()
        .find(|entry| lowered.contains(entry.as_str()))
        .cloned()
}

// ============================================================================
// CORE SERVICE
// ============================================================================

/// Screens chat messages against the live filter list.
pub struct ModerationService<C: ConfigStore, A: AccessControl> {
    filter: Arc<FilterService<C>>,
    access: Arc<A>,
}

impl<C: ConfigStore, A: AccessControl> ModerationService<C, A> {
    pub fn new(filter: Arc<FilterService<C>>, access: Arc<A>) -> Self {
        Self { filter, access }
    }

    /// Decide whether `message` from `sender` may be delivered.
    ///
    /// Blocked attempts are logged at warn level so operators keep a record
    /// of what was said and by whom.
    pub async fn check_message(&self, sender: &Sender, message: &str) -> ChatVerdict {
        if !self.filter.enforcement_enabled().await {
            return ChatVerdict::Allow;
        }

        if is_permitted(self.access.as_ref(), sender, BYPASS_PERMISSION).await {
            return ChatVerdict::Allow;
        }

        let entries = self.filter.entries().await;
        match find_match(message, &entries) {
            Some(matched) => {
                tracing::warn!("[ChatGuard] {}: {}", sender.name(), matched);
                ChatVerdict::blocked(matched)
            }
            None => ChatVerdict::Allow,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
