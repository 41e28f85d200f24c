// Who is talking, and what are they allowed to do.
//
// The host owns the real permission system; the core only asks yes/no
// questions about permission nodes through the AccessControl port.

use async_trait::async_trait;

/// Permission required to mutate the filter or reload configuration.
pub const CONFIG_PERMISSION: &str = "chatguard.config";

/// Permission exempting a sender from chat moderation entirely.
pub const BYPASS_PERMISSION: &str = "chatguard.bypass";

/// The originator of a chat message or an administrative command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sender {
    /// An interactive chat participant, identified by display name.
    Player { name: String },
    /// The host's non-interactive console.
    Console,
}

impl Sender {
    pub fn player(name: impl Into<String>) -> Self {
        Sender::Player { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            Sender::Player { name } => name,
            Sender::Console => "console",
        }
    }

    pub fn is_console(&self) -> bool {
        matches!(self, Sender::Console)
    }
}

#[async_trait]
pub trait AccessControl: Send + Sync {
    /// Does this sender hold the given permission node?
    ///
    /// Only ever consulted for players; the console short-circuits in
    /// [`is_permitted`].
    async fn has_permission(&self, sender: &Sender, node: &str) -> bool;
}

/// Permission check with the console rule applied: non-interactive senders
/// are always permitted, players are looked up through the port.
pub async fn is_permitted<A: AccessControl>(access: &A, sender: &Sender, node: &str) -> bool {
    if sender.is_console() {
        return true;
    }

    access.has_permission(sender, node).await
}
