// Command service - executes parsed /chatguard commands.
//
// Every command produces reply lines with style codes still embedded; the
// hosting layer decides how to render them. Mutating commands check the
// sender's permission before touching anything.

use super::command_models::{parse_command, GuardCommand};
use crate::core::access::{is_permitted, AccessControl, Sender, CONFIG_PERMISSION};
use crate::core::config::ConfigStore;
use crate::core::filter::FilterService;
use std::sync::Arc;

const APP_NAME: &str = "ChatGuard";

pub struct CommandService<C: ConfigStore, A: AccessControl> {
    filter: Arc<FilterService<C>>,
    access: Arc<A>,
}

impl<C: ConfigStore, A: AccessControl> CommandService<C, A> {
    pub fn new(filter: Arc<FilterService<C>>, access: Arc<A>) -> Self {
        Self { filter, access }
    }

    /// Parse and execute one invocation, returning the reply lines.
    pub async fn dispatch(&self, sender: &Sender, args: &[&str]) -> Vec<String> {
        match parse_command(args) {
            GuardCommand::Help => help_lines(),
            GuardCommand::About => about_lines(),
            GuardCommand::FilterHelp => filter_help_lines(),
            GuardCommand::Reload => self.reload(sender).await,
            GuardCommand::Toggle => self.toggle(sender).await,
            GuardCommand::Add { text } => self.add(sender, &text).await,
            GuardCommand::Remove { text } => self.remove(sender, &text).await,
        }
    }

    async fn reload(&self, sender: &Sender) -> Vec<String> {
        if !is_permitted(self.access.as_ref(), sender, CONFIG_PERMISSION).await {
            return vec![
                "&cYou don't have permission to reload the ChatGuard config.".to_string(),
            ];
        }

        self.filter.reload().await;
        vec!["&aChatGuard config reloaded.".to_string()]
    }

    async fn toggle(&self, sender: &Sender) -> Vec<String> {
        if !is_permitted(self.access.as_ref(), sender, CONFIG_PERMISSION).await {
            return denied_change();
        }

        let state = if self.filter.toggle_enforcement().await {
            "&aON"
        } else {
            "&cOFF"
        };
        vec![format!("&7ChatGuard filter toggled: {}", state)]
    }

    async fn add(&self, sender: &Sender, text: &str) -> Vec<String> {
        if !is_permitted(self.access.as_ref(), sender, CONFIG_PERMISSION).await {
            return denied_change();
        }

        let update = self.filter.add_entry(text).await;
        if update.applied {
            vec![format!("&e{} &aadded to the filter.", update.entry)]
        } else {
            vec![format!("&e{} &cis already filtered.", update.entry)]
        }
    }

    async fn remove(&self, sender: &Sender, text: &str) -> Vec<String> {
        if !is_permitted(self.access.as_ref(), sender, CONFIG_PERMISSION).await {
            return denied_change();
        }

        let update = self.filter.remove_entry(text).await;
        if update.applied {
            vec![format!("&e{} &aremoved from the filter.", update.entry)]
        } else {
            vec![format!("&e{} &cisn't filtered.", update.entry)]
        }
    }
}

fn denied_change() -> Vec<String> {
    vec!["&cYou don't have permission to change the ChatGuard config.".to_string()]
}

fn help_lines() -> Vec<String> {
    vec![
        "&bChatGuard commands:".to_string(),
        "&e/cg &7- Displays this message.".to_string(),
        "&e/cg about &7- See ChatGuard information.".to_string(),
        "&e/cg filter &7- Manage ChatGuard filter. (Staff)".to_string(),
    ]
}

fn filter_help_lines() -> Vec<String> {
    vec![
        "&bChatGuard filter commands:".to_string(),
        "&e/cg filter <args...> &7- Manage ChatGuard filter.".to_string(),
        "&bArguments:".to_string(),
        "&e<reload> &7- Reload ChatGuard config.".to_string(),
        "&e<toggle> &7- Toggle the ChatGuard filter.".to_string(),
        "&e<add | remove> <message> &7- Modify filter messages.".to_string(),
    ]
}

fn about_lines() -> Vec<String> {
    let version = env!("CARGO_PKG_VERSION");
    let description = env!("CARGO_PKG_DESCRIPTION");
    let homepage = env!("CARGO_PKG_HOMEPAGE");

    let mut lines = Vec::new();
    if is_experimental_version(version) {
        lines.push("&cRunning an experimental version.".to_string());
        lines.push("&cMay contain bugs or other types of issues.".to_string());
    }
    lines.push(format!("&e{} &7version &e{}", APP_NAME, version));
    if !description.is_empty() {
        lines.push(format!("&7{}", description));
    }
    if !homepage.is_empty() {
        lines.push(format!("&7Website: &e{}", homepage));
    }
    if let Some(authors) = format_authors(env!("CARGO_PKG_AUTHORS")) {
        lines.push(format!("&7Author(s): &e{}", authors));
    }
    lines
}

fn is_experimental_version(version: &str) -> bool {
    version.contains("snapshot")
        || version.contains("alpha")
        || version.contains("beta")
        || version.contains("rc")
}

// Cargo separates authors with ':'. The separator re-colors each following
// name after the grey comma; the first name is colored by the line prefix.
fn format_authors(raw: &str) -> Option<String> {
    let authors: Vec<&str> = raw
        .split(':')
        .map(str::trim)
        .filter(|author| !author.is_empty())
        .collect();

    if authors.is_empty() {
        None
    } else {
        Some(authors.join("&7, &e"))
    }
}
