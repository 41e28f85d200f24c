// The filter service owns the canonical in-memory filter list.
//
// The list is kept as an immutable snapshot behind an RwLock: readers clone
// the Arc and scan without holding the lock, mutations build a fresh list
// and swap it in whole. Every mutation follows the same discipline: stage
// the new value in the config store, save, then re-derive the in-memory
// list from the store, so the two can never silently diverge.

use super::filter_models::{
    default_entries, normalize_entries, normalize_entry, EntryUpdate, FILTER_KEY, TOGGLE_KEY,
};
use crate::core::config::ConfigStore;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct FilterService<C: ConfigStore> {
    config: Arc<C>,
    entries: RwLock<Arc<Vec<String>>>,
}

impl<C: ConfigStore> FilterService<C> {
    /// Create the service and derive the initial list from the store.
    pub async fn new(config: Arc<C>) -> Self {
        let service = Self {
            config,
            entries: RwLock::new(Arc::new(Vec::new())),
        };
        service.reset().await;
        service
    }

    /// Snapshot of the live filter list.
    ///
    /// A snapshot taken before a mutation command completes may be stale by
    /// one swap; the next call observes the committed list.
    pub async fn entries(&self) -> Arc<Vec<String>> {
        Arc::clone(&*self.entries.read().await)
    }

    /// Re-derive the in-memory list from the config store.
    ///
    /// Never fails: a missing or wrong-shaped value yields the seed list,
    /// and whatever does load is normalized before it is published.
    pub async fn reset(&self) {
        let defaults = default_entries();
        let raw = self.config.get_string_list(FILTER_KEY, &defaults).await;
        let fresh = Arc::new(normalize_entries(raw));
        *self.entries.write().await = fresh;
    }

    /// Re-read the persisted config from its backing source, then reset.
    /// Load failures are logged and absorbed; the list still resets from
    /// whatever the store currently holds.
    pub async fn reload(&self) {
        if let Err(e) = self.config.load().await {
            tracing::error!("Failed to reload config: {}", e);
        }
        self.reset().await;
    }

    /// Whether the moderation pipeline is switched on at all.
    pub async fn enforcement_enabled(&self) -> bool {
        self.config.get_bool(TOGGLE_KEY, true).await
    }

    /// Flip the enforcement toggle, persist it, and return the new state.
    pub async fn toggle_enforcement(&self) -> bool {
        let enabled = !self.config.get_bool(TOGGLE_KEY, true).await;
        if let Err(e) = self.config.set_bool(TOGGLE_KEY, enabled).await {
            tracing::error!("Failed to stage enforcement toggle: {}", e);
        }
        self.save_and_reset().await;
        enabled
    }

    /// Add one normalized entry. Duplicate adds and empty text are reported
    /// as a no-op and touch nothing.
    pub async fn add_entry(&self, raw: &str) -> EntryUpdate {
        let entry = normalize_entry(raw);
        let mut entries = self.entries().await.as_ref().clone();
        if entry.is_empty() || entries.contains(&entry) {
            return EntryUpdate {
                entry,
                applied: false,
            };
        }

        entries.push(entry.clone());
        self.persist_entries(entries).await;
        EntryUpdate {
            entry,
            applied: true,
        }
    }

    /// Remove one normalized entry. Removing something that isn't filtered
    /// is reported as a no-op and touches nothing.
    pub async fn remove_entry(&self, raw: &str) -> EntryUpdate {
        let entry = normalize_entry(raw);
        let mut entries = self.entries().await.as_ref().clone();
        let Some(position) = entries.iter().position(|e| e == &entry) else {
            return EntryUpdate {
                entry,
                applied: false,
            };
        };

        entries.remove(position);
        self.persist_entries(entries).await;
        EntryUpdate {
            entry,
            applied: true,
        }
    }

    async fn persist_entries(&self, entries: Vec<String>) {
        if let Err(e) = self.config.set_string_list(FILTER_KEY, entries).await {
            tracing::error!("Failed to stage filter list: {}", e);
        }
        self.save_and_reset().await;
    }

    // Save failures leave the store's in-memory document as best-effort
    // truth; the reset still reads it back so the published list matches.
    async fn save_and_reset(&self) {
        if let Err(e) = self.config.save().await {
            tracing::error!("Failed to save config: {}", e);
        }
        self.reset().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::InMemoryConfigStore;

    async fn service() -> FilterService<InMemoryConfigStore> {
        FilterService::new(Arc::new(InMemoryConfigStore::new())).await
    }

    #[tokio::test]
    async fn empty_store_seeds_the_default_list() {
        let filter = service().await;
        assert_eq!(*filter.entries().await, vec!["fuck".to_string()]);
    }

    #[tokio::test]
    async fn reload_is_idempotent() {
        let filter = service().await;
        filter.add_entry("spam").await;

        filter.reload().await;
        let first = filter.entries().await;
        filter.reload().await;
        let second = filter.entries().await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn add_appends_and_persists() {
        let store = Arc::new(InMemoryConfigStore::new());
        let filter = FilterService::new(Arc::clone(&store)).await;

        let update = filter.add_entry("spam").await;
        assert!(update.applied);
        assert_eq!(update.entry, "spam");
        assert_eq!(*filter.entries().await, vec!["fuck", "spam"]);

        // In-memory and persisted views agree after the mutation.
        let persisted = store.get_string_list(FILTER_KEY, &[]).await;
        assert_eq!(persisted, *filter.entries().await);
    }

    #[tokio::test]
    async fn duplicate_add_is_a_no_op() {
        let filter = service().await;
        let before = filter.entries().await;

        let update = filter.add_entry("FUCK").await;
        assert!(!update.applied);
        assert_eq!(update.entry, "fuck");
        assert_eq!(filter.entries().await, before);
    }

    #[tokio::test]
    async fn adding_empty_text_is_a_no_op() {
        let filter = service().await;
        let update = filter.add_entry("").await;

        assert!(!update.applied);
        assert!(update.entry.is_empty());
        assert_eq!(*filter.entries().await, vec!["fuck"]);
    }

    #[tokio::test]
    async fn add_then_remove_restores_the_previous_list() {
        let filter = service().await;
        let before = filter.entries().await;

        assert!(filter.add_entry("you suck").await.applied);
        assert!(filter.remove_entry("you suck").await.applied);

        assert_eq!(filter.entries().await, before);
    }

    #[tokio::test]
    async fn removing_an_unknown_entry_is_a_no_op() {
        let filter = service().await;
        let update = filter.remove_entry("missing").await;
        assert!(!update.applied);
        assert_eq!(*filter.entries().await, vec!["fuck"]);
    }

    #[tokio::test]
    async fn entries_are_normalized_to_lowercase() {
        let filter = service().await;
        filter.add_entry("You SUCK").await;
        assert!(filter.entries().await.contains(&"you suck".to_string()));
    }

    #[tokio::test]
    async fn toggle_flips_state_and_persists() {
        let store = Arc::new(InMemoryConfigStore::new());
        let filter = FilterService::new(Arc::clone(&store)).await;

        assert!(filter.enforcement_enabled().await);
        assert!(!filter.toggle_enforcement().await);
        assert!(!filter.enforcement_enabled().await);
        assert!(!store.get_bool(TOGGLE_KEY, true).await);

        assert!(filter.toggle_enforcement().await);
        assert!(filter.enforcement_enabled().await);
    }

    #[tokio::test]
    async fn only_applied_mutations_save_the_config() {
        let store = Arc::new(InMemoryConfigStore::new());
        let filter = FilterService::new(Arc::clone(&store)).await;

        filter.add_entry("spam").await;
        filter.remove_entry("spam").await;
        filter.toggle_enforcement().await;
        assert_eq!(store.save_count(), 3);

        // Duplicate, unknown, and empty mutations never reach a save.
        filter.add_entry("fuck").await;
        filter.remove_entry("missing").await;
        filter.add_entry("").await;
        assert_eq!(store.save_count(), 3);
    }

    #[tokio::test]
    async fn loaded_lists_are_normalized() {
        let store = Arc::new(InMemoryConfigStore::new());
        store
            .set_string_list(
                FILTER_KEY,
                vec![
                    "Foo".to_string(),
                    "".to_string(),
                    "foo".to_string(),
                    "bar".to_string(),
                ],
            )
            .await
            .unwrap();

        let filter = FilterService::new(store).await;
        assert_eq!(*filter.entries().await, vec!["foo", "bar"]);
    }

    #[tokio::test]
    async fn a_persisted_empty_list_stays_empty() {
        // Removing the last entry legitimately leaves nothing; only a list
        // that was never persisted falls back to the seed.
        let store = Arc::new(InMemoryConfigStore::new());
        store.set_string_list(FILTER_KEY, Vec::new()).await.unwrap();

        let filter = FilterService::new(store).await;
        assert!(filter.entries().await.is_empty());
    }

    #[tokio::test]
    async fn removing_the_last_entry_persists_an_empty_list() {
        let filter = service().await;
        assert!(filter.remove_entry("fuck").await.applied);
        assert!(filter.entries().await.is_empty());

        filter.reload().await;
        assert!(filter.entries().await.is_empty());
    }
}
