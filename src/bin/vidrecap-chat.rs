//! Interactive client for the video summarization service.
//!
//! Paste a YouTube URL to get a summary, then ask questions about the video.
//!
//! # Usage
//!
//! ```bash
//! # Talk to a service on localhost:8000
//! vidrecap-chat
//!
//! # Point at another deployment
//! vidrecap-chat --base-url https://recap.example.com/
//!
//! # Read settings from a YAML file
//! vidrecap-chat --config vidrecap.yaml
//!
//! # Disable colors (useful for piping output)
//! vidrecap-chat --no-color
//! ```
//!
//! # Commands
//!
//! - `/help` - Show available commands
//! - `/new` - Summarize another video
//! - `/summary` - Show the current summary again
//! - `/status` - Show session information
//! - `/health` - Check the service
//! - `/quit` - Exit the application

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use vidrecap::{
    ClientArgs, ClientConfig, Field, Region, ReplCommand, SummarizerSession, TerminalView,
    Vidrecap, View, help_text, parse_command, submit_line,
};

/// Main entry point for the vidrecap-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let (args, _) = ClientArgs::from_command_line_relaxed("vidrecap-chat [OPTIONS]");
    let config = ClientConfig::load(&args)?;

    let client = Vidrecap::from_config(&config)?;
    let view = TerminalView::with_color(config.use_color);
    let mut session = SummarizerSession::new(client, view);
    let mut rl = DefaultEditor::new()?;

    println!("Video Recap (service: {})", session.backend().base_url());
    println!("Paste a YouTube URL to summarize it. Type /help for commands, /quit to exit\n");

    loop {
        let prompt = match session.view().focused() {
            Field::Url => "URL: ",
            Field::Chat => "You: ",
        };

        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if !line.is_empty() {
                    let _ = rl.add_history_entry(line);
                }

                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ReplCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ReplCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ReplCommand::New => {
                            session.view_mut().focus(Field::Url);
                        }
                        ReplCommand::Summary => {
                            if session.view().is_visible(Region::Summary) {
                                session.view_mut().print_summary();
                            } else {
                                session.view_mut().print_info("No summary yet.");
                            }
                        }
                        ReplCommand::Health => match session.backend().health().await {
                            Ok(health) => session
                                .view_mut()
                                .print_info(&format!("Service status: {}", health.status)),
                            Err(err) => session
                                .view_mut()
                                .print_info(&format!("Service unavailable: {err}")),
                        },
                        ReplCommand::Status => print_status(&session),
                        ReplCommand::Invalid(message) => {
                            session.view_mut().print_info(&message);
                        }
                    }
                    continue;
                }

                // Failures are already on screen.
                if let Err(err) = submit_line(&mut session, line).await {
                    tracing::debug!(error = %err, "operation failed");
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Input error: {}", err);
                break;
            }
        }
    }

    Ok(())
}

fn print_status(session: &SummarizerSession<Vidrecap, TerminalView>) {
    println!("    Session Status:");
    println!("      Service: {}", session.backend().base_url());
    println!("      Timeout: {}s", session.backend().timeout().as_secs());
    match session.session_id() {
        Some(id) => println!("      Session: {}", id),
        None => println!("      Session: (none)"),
    }
    if let Some(metadata) = session.view().page().metadata() {
        println!("      Video ID: {}", metadata.video_id);
    }
    println!(
        "      Messages: {}",
        session.view().page().transcript().len()
    );
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vidrecap=error"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
