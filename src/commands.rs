//! Slash command parsing for the interactive client.
//!
//! Lines starting with `/` control the client itself.  Everything else is
//! typed into the focused field.

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Display help information.
    Help,

    /// Exit the client.
    Quit,

    /// Move focus back to the URL field to summarize another video.
    New,

    /// Print the current summary again.
    Summary,

    /// Check that the service is up.
    Health,

    /// Show the session id, transcript length and service URL.
    Status,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ReplCommand)` if the input is a command, or `None` if it
/// should be typed into the focused field.
///
/// # Examples
///
/// ```
/// # use vidrecap::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("https://www.youtube.com/watch?v=abc").is_none());
/// assert!(parse_command("What is the main point?").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ReplCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        "new" | "reset" => ReplCommand::New,
        "summary" => ReplCommand::Summary,
        "health" => ReplCommand::Health,
        "status" | "stats" => ReplCommand::Status,
        "" => ReplCommand::Invalid("Empty command; try /help".to_string()),
        other => ReplCommand::Invalid(format!("Unknown command: /{other}")),
    };

    match (&result, argument) {
        (ReplCommand::Invalid(_), _) | (_, None) => Some(result),
        (_, Some(_)) => Some(ReplCommand::Invalid(format!(
            "/{command} does not take an argument"
        ))),
    }
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Enter a YouTube URL to summarize it, then ask questions about the video.

Available commands:
  /new                   Summarize another video
  /summary               Show the current summary again
  /status                Show session information
  /health                Check that the service is reachable
  /help                  Show this help message
  /quit                  Exit"#
}
