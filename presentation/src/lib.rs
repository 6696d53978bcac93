//! Presentation layer for parley
//!
//! The terminal adapters: `ConsoleSurface` (the real `UiBridgePort`
//! implementation — transcript printing, modal popups, the picker),
//! the rustyline chat REPL, and the clap CLI definition.

pub mod chat;
pub mod cli;
pub mod console;

pub use chat::ChatRepl;
pub use cli::Cli;
pub use console::ConsoleSurface;
