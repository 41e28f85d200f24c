// Chat moderation domain models.
//
// These are pure domain types with no host dependencies.
// The console layer converts notices into plain terminal output.

/// First notice shown to a sender whose message was blocked.
pub const FILTERED_NOTICE: &str = "&cYour message has been filtered from bad words.";

/// Second notice, telling the sender the attempt was recorded.
pub const LOGGED_NOTICE: &str = "&cThis has been logged to operators.";

/// Outcome of screening one chat message.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatVerdict {
    /// Deliver the message unchanged.
    Allow,
    /// Drop the message and tell the sender why.
    Block {
        /// The first filter entry found in the message.
        matched: String,
        /// Notices for the sender, with style codes still embedded.
        notices: Vec<String>,
    },
}

impl ChatVerdict {
    /// Build the blocking verdict for a matched entry.
    pub fn blocked(matched: String) -> Self {
        ChatVerdict::Block {
            matched,
            notices: vec![FILTERED_NOTICE.to_string(), LOGGED_NOTICE.to_string()],
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, ChatVerdict::Block { .. })
    }
}
