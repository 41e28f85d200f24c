// Filter domain types and the entry normalization rules.
//
// A filter entry is a lowercased, non-empty text fragment; the list behaves
// as a set with insertion order preserved. Every path that brings entries
// into the system goes through the normalize functions below, so matching
// never has to special-case letter casing.

/// Config key holding the ordered list of filter entries.
pub const FILTER_KEY: &str = "chatguard.filter";

/// Config key holding the global enforcement on/off switch.
pub const TOGGLE_KEY: &str = "chatguard.toggle";

/// Seed list used whenever no filter list has ever been persisted. The guard
/// never degrades to "filter nothing" just because the config is absent.
pub fn default_entries() -> Vec<String> {
    vec!["fuck".to_string()]
}

/// Canonical form of a single entry.
pub fn normalize_entry(raw: &str) -> String {
    raw.to_lowercase()
}

/// Canonical form of a whole list: lowercase everything, drop empty
/// fragments (an empty entry would match every message), and drop
/// duplicates keeping the first occurrence.
pub fn normalize_entries(raw: Vec<String>) -> Vec<String> {
    let mut entries: Vec<String> = Vec::with_capacity(raw.len());
    for entry in raw {
        let entry = normalize_entry(&entry);
        if entry.is_empty() || entries.contains(&entry) {
            continue;
        }
        entries.push(entry);
    }
    entries
}

/// Result of an add/remove mutation against the filter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryUpdate {
    /// The entry in its normalized form (what the list stores and what
    /// replies echo back).
    pub entry: String,
    /// False when the mutation was a no-op: adding an entry that was already
    /// filtered, or removing one that wasn't.
    pub applied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_lowercased() {
        assert_eq!(normalize_entry("FuCk"), "fuck");
        assert_eq!(normalize_entry("you SUCK"), "you suck");
    }

    #[test]
    fn list_normalization_drops_empties_and_duplicates() {
        let raw = vec![
            "Spam".to_string(),
            "".to_string(),
            "spam".to_string(),
            "scam".to_string(),
        ];
        assert_eq!(normalize_entries(raw), vec!["spam", "scam"]);
    }

    #[test]
    fn list_normalization_preserves_insertion_order() {
        let raw = vec!["b".to_string(), "a".to_string(), "c".to_string()];
        assert_eq!(normalize_entries(raw), vec!["b", "a", "c"]);
    }

    #[test]
    fn default_list_is_never_empty() {
        assert!(!default_entries().is_empty());
    }
}
