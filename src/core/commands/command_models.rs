// Command grammar for /chatguard (alias /cg).
//
// Syntax:
// - /cg                       -> command help
// - /cg about                 -> version and project info
// - /cg filter                -> filter help
// - /cg filter reload         -> re-read the config from its backing source
// - /cg filter toggle         -> flip enforcement on or off
// - /cg filter add <text>     -> add <text> to the filter
// - /cg filter remove <text>  -> remove <text> from the filter

/// A parsed /chatguard invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardCommand {
    Help,
    About,
    FilterHelp,
    Reload,
    Toggle,
    Add { text: String },
    Remove { text: String },
}

/// Parse raw argument tokens into a command.
///
/// Parsing is total: anything outside the grammar degrades to the nearest
/// help screen instead of failing. Keywords are matched case-insensitively.
/// The free text of add/remove keeps whatever the sender typed; list
/// normalization happens when the entry is applied, and text that joins to
/// nothing is treated like missing text.
pub fn parse_command(args: &[&str]) -> GuardCommand {
    match args {
        [] => GuardCommand::Help,
        [only] => {
            if only.eq_ignore_ascii_case("about") {
                GuardCommand::About
            } else if only.eq_ignore_ascii_case("filter") {
                GuardCommand::FilterHelp
            } else {
                GuardCommand::Help
            }
        }
        [first, action, text @ ..] => {
            if !first.eq_ignore_ascii_case("filter") {
                return GuardCommand::Help;
            }

            if text.is_empty() {
                if action.eq_ignore_ascii_case("reload") {
                    GuardCommand::Reload
                } else if action.eq_ignore_ascii_case("toggle") {
                    GuardCommand::Toggle
                } else {
                    // Covers a bare "filter add" or "filter remove" too.
                    GuardCommand::FilterHelp
                }
            } else if action.eq_ignore_ascii_case("add") {
                match joined_text(text) {
                    Some(text) => GuardCommand::Add { text },
                    None => GuardCommand::FilterHelp,
                }
            } else if action.eq_ignore_ascii_case("remove") {
                match joined_text(text) {
                    Some(text) => GuardCommand::Remove { text },
                    None => GuardCommand::FilterHelp,
                }
            } else {
                GuardCommand::FilterHelp
            }
        }
    }
}

// Hosts that tokenize on whitespace never produce empty tokens, but the
// dispatch surface accepts any token vector. Tokens that join to nothing
// carry no text to act on.
fn joined_text(tokens: &[&str]) -> Option<String> {
    let text = tokens.join(" ");
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_shows_help() {
        assert_eq!(parse_command(&[]), GuardCommand::Help);
    }

    #[test]
    fn about_is_recognized() {
        assert_eq!(parse_command(&["about"]), GuardCommand::About);
        assert_eq!(parse_command(&["ABOUT"]), GuardCommand::About);
    }

    #[test]
    fn bare_filter_shows_filter_help() {
        assert_eq!(parse_command(&["filter"]), GuardCommand::FilterHelp);
    }

    #[test]
    fn unknown_first_word_falls_back_to_help() {
        assert_eq!(parse_command(&["bogus"]), GuardCommand::Help);
        assert_eq!(parse_command(&["bogus", "toggle"]), GuardCommand::Help);
        assert_eq!(parse_command(&["bogus", "add", "x"]), GuardCommand::Help);
    }

    #[test]
    fn filter_reload_and_toggle_parse() {
        assert_eq!(parse_command(&["filter", "reload"]), GuardCommand::Reload);
        assert_eq!(parse_command(&["FILTER", "Toggle"]), GuardCommand::Toggle);
    }

    #[test]
    fn unknown_filter_action_shows_filter_help() {
        assert_eq!(
            parse_command(&["filter", "bogus"]),
            GuardCommand::FilterHelp
        );
    }

    #[test]
    fn add_and_remove_need_text() {
        assert_eq!(parse_command(&["filter", "add"]), GuardCommand::FilterHelp);
        assert_eq!(
            parse_command(&["filter", "remove"]),
            GuardCommand::FilterHelp
        );
    }

    #[test]
    fn empty_text_tokens_count_as_missing_text() {
        assert_eq!(
            parse_command(&["filter", "add", ""]),
            GuardCommand::FilterHelp
        );
        assert_eq!(
            parse_command(&["filter", "remove", "", ""]),
            GuardCommand::FilterHelp
        );
    }

    #[test]
    fn add_joins_every_remaining_token() {
        assert_eq!(
            parse_command(&["filter", "add", "you", "suck"]),
            GuardCommand::Add {
                text: "you suck".to_string()
            }
        );
    }

    #[test]
    fn remove_keeps_the_original_spelling() {
        assert_eq!(
            parse_command(&["filter", "Remove", "You", "SUCK"]),
            GuardCommand::Remove {
                text: "You SUCK".to_string()
            }
        );
    }

    #[test]
    fn trailing_text_after_reload_shows_filter_help() {
        assert_eq!(
            parse_command(&["filter", "reload", "now"]),
            GuardCommand::FilterHelp
        );
    }
}
