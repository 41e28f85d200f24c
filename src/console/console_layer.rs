// The console module hosts the guard in a terminal.
// It adapts stdin lines into chat and commands.

#[path = "style.rs"]
pub mod style;

#[path = "session.rs"]
pub mod session;
