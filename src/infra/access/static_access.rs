// Permission table seeded at startup.
//
// Real servers answer permission checks from their own permission plugin;
// the console host has no such thing, so it grants nodes to named players
// up front and answers lookups from a set.

use crate::core::access::{AccessControl, Sender};
use async_trait::async_trait;
use dashmap::DashSet;

pub struct StaticAccessControl {
    grants: DashSet<(String, String)>,
}

impl StaticAccessControl {
    pub fn new() -> Self {
        Self {
            grants: DashSet::new(),
        }
    }

    /// Grant `node` to the named player.
    pub fn grant(&self, player: &str, node: &str) {
        self.grants.insert((player.to_string(), node.to_string()));
    }
}

#[async_trait]
impl AccessControl for StaticAccessControl {
    async fn has_permission(&self, sender: &Sender, node: &str) -> bool {
        match sender {
            Sender::Player { name } => self.grants.contains(&(name.clone(), node.to_string())),
            Sender::Console => true,
        }
    }
}

impl Default for StaticAccessControl {
    fn default() -> Self {
        Self::new()
    }
}
