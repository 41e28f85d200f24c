// Interactive console session.
//
// Stands in for a real chat server: each stdin line is either a guard
// command (prefixed with /chatguard or /cg, issued as the console) or a
// chat message spoken by the configured player. Replies are stripped of
// style codes before printing since a terminal won't render them.

use super::style;
use crate::core::access::{AccessControl, Sender};
use crate::core::commands::CommandService;
use crate::core::config::ConfigStore;
use crate::core::moderation::{ChatVerdict, ModerationService};
use tokio::io::{AsyncBufReadExt, BufReader};

pub struct ConsoleSession<C: ConfigStore, A: AccessControl> {
    player: String,
    moderation: ModerationService<C, A>,
    commands: CommandService<C, A>,
}

impl<C: ConfigStore, A: AccessControl> ConsoleSession<C, A> {
    pub fn new(
        player: impl Into<String>,
        moderation: ModerationService<C, A>,
        commands: CommandService<C, A>,
    ) -> Self {
        Self {
            player: player.into(),
            moderation,
            commands,
        }
    }

    /// Process one input line and return the lines to print.
    pub async fn handle_line(&self, line: &str) -> Vec<String> {
        let line = line.trim();
        if line.is_empty() {
            return Vec::new();
        }

        let mut tokens = line.split_whitespace();
        let first = tokens.next().unwrap_or_default();

        if first.eq_ignore_ascii_case("/chatguard") || first.eq_ignore_ascii_case("/cg") {
            let args: Vec<&str> = tokens.collect();
            let replies = self.commands.dispatch(&Sender::Console, &args).await;
            return replies.iter().map(|reply| style::strip(reply)).collect();
        }

        if first.starts_with('/') {
            return vec!["Unknown command.".to_string()];
        }

        let sender = Sender::player(self.player.as_str());
        match self.moderation.check_message(&sender, line).await {
            ChatVerdict::Allow => vec![format!("<{}> {}", self.player, line)],
            ChatVerdict::Block { notices, .. } => {
                notices.iter().map(|notice| style::strip(notice)).collect()
            }
        }
    }

    /// Read stdin until EOF or a quit line.
    pub async fn run(&self) -> anyhow::Result<()> {
        println!(
            "Chatting as {}. /cg for commands, quit to exit.",
            self.player
        );

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
                break;
            }

            for out in self.handle_line(&line).await {
                println!("{}", out);
            }
        }

        Ok(())
    }
}
