// Public modules
pub mod backend;
pub mod bindings;
pub mod client;
pub mod client_logger;
pub mod commands;
pub mod config;
pub mod error;
pub mod markdown;
pub mod session;
pub mod types;
pub mod utils;
pub mod view;

mod observability;

// Re-exports
pub use backend::Backend;
pub use bindings::{Action, Dispatch, Key, UiEvent, bind, dispatch, submit_line};
pub use client::Vidrecap;
pub use client_logger::ClientLogger;
pub use commands::{ReplCommand, help_text, parse_command};
pub use config::{ClientArgs, ClientConfig, ConfigFile};
pub use error::{Error, Result};
pub use markdown::{escape_html, format_markdown};
pub use observability::register_biometrics;
pub use session::{SendOutcome, SessionContext, SummarizerSession};
pub use types::*;
pub use view::{Control, Field, Page, Region, TerminalView, View};
