//! Terminal rendering of the document.
//!
//! [`TerminalView`] keeps all state in a [`Page`] and prints what becomes
//! visible.  Formatted HTML is turned back into ANSI styling by
//! [`markup_to_ansi`].

use std::io::{self, Stdout, Write};

use crate::types::{Role, VideoMetadata};
use crate::view::{Control, Field, Page, Region, View};

/// ANSI escape code for bold text (used for strong emphasis and headings).
const ANSI_BOLD: &str = "\x1b[1m";

/// ANSI escape code for dim text (used for the loading indicator).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code for italic text (used for emphasis).
const ANSI_ITALIC: &str = "\x1b[3m";

/// ANSI escape code for underlined text (used for headings).
const ANSI_UNDERLINE: &str = "\x1b[4m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for cyan text (used for entry labels).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for red text (used for the error banner).
const ANSI_RED: &str = "\x1b[31m";

/// Converts a fragment produced by [`format_markdown`](crate::format_markdown)
/// into terminal text.
///
/// Known tags become ANSI styles (or nothing when `use_color` is false), `<br>`
/// becomes a newline, headings get a line of their own, and the entities the
/// formatter emits are decoded.  Unknown tags are dropped.
pub fn markup_to_ansi(html: &str, use_color: bool) -> String {
    let mut out = String::with_capacity(html.len());
    let mut open: Vec<&'static str> = Vec::new();
    let mut rest = html;
    while let Some(c) = rest.chars().next() {
        match c {
            '<' => {
                let Some(end) = rest.find('>') else {
                    out.push_str(rest);
                    break;
                };
                let tag = &rest[1..end];
                rest = &rest[end + 1..];
                match tag {
                    "br" => out.push('\n'),
                    "strong" => push_style(&mut out, &mut open, ANSI_BOLD, use_color),
                    "em" => push_style(&mut out, &mut open, ANSI_ITALIC, use_color),
                    "h1" | "h2" | "h3" => {
                        if !out.is_empty() && !out.ends_with('\n') {
                            out.push('\n');
                        }
                        push_style(&mut out, &mut open, ANSI_BOLD, use_color);
                        push_style(&mut out, &mut open, ANSI_UNDERLINE, use_color);
                    }
                    "/strong" | "/em" => pop_styles(&mut out, &mut open, 1, use_color),
                    "/h1" | "/h2" | "/h3" => {
                        pop_styles(&mut out, &mut open, 2, use_color);
                        if !rest.is_empty() && !rest.starts_with("<br>") {
                            out.push('\n');
                        }
                    }
                    _ => {}
                }
            }
            '&' => {
                let entity_end = rest.find(';').filter(|&end| end <= 6);
                let decoded = entity_end.and_then(|end| match &rest[..=end] {
                    "&amp;" => Some('&'),
                    "&lt;" => Some('<'),
                    "&gt;" => Some('>'),
                    "&quot;" => Some('"'),
                    "&#39;" => Some('\''),
                    _ => None,
                });
                match (decoded, entity_end) {
                    (Some(decoded), Some(end)) => {
                        out.push(decoded);
                        rest = &rest[end + 1..];
                    }
                    _ => {
                        out.push('&');
                        rest = &rest[1..];
                    }
                }
            }
            c => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    if use_color && !open.is_empty() {
        out.push_str(ANSI_RESET);
    }
    out
}

fn push_style(out: &mut String, open: &mut Vec<&'static str>, style: &'static str, color: bool) {
    open.push(style);
    if color {
        out.push_str(style);
    }
}

fn pop_styles(out: &mut String, open: &mut Vec<&'static str>, count: usize, color: bool) {
    let keep = open.len().saturating_sub(count);
    open.truncate(keep);
    if color {
        out.push_str(ANSI_RESET);
        for style in open.iter() {
            out.push_str(style);
        }
    }
}

/// A [`View`] that prints to the terminal.
///
/// Output happens when something becomes visible or is appended.  The error
/// banner is printed once per [`set_error_text`](View::set_error_text), even
/// when it was already showing.
pub struct TerminalView {
    page: Page,
    stdout: Stdout,
    use_color: bool,
    error_pending: bool,
}

impl TerminalView {
    /// Creates a new TerminalView with ANSI colors enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a new TerminalView with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            page: Page::new(),
            stdout: io::stdout(),
            use_color,
            error_pending: false,
        }
    }

    /// The underlying document.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Prints an informational line.
    pub fn print_info(&mut self, info: &str) {
        println!("{info}");
        self.flush();
    }

    /// Prints the summary panel and metadata as they currently stand.
    pub fn print_summary(&mut self) {
        let summary = markup_to_ansi(self.page.summary_html(), self.use_color);
        println!();
        println!("{summary}");
        if let Some(metadata) = self.page.metadata().cloned() {
            self.print_metadata(&metadata);
        }
        println!();
        self.flush();
    }

    fn print_metadata(&self, metadata: &VideoMetadata) {
        let line = format!(
            "Duration: {} minutes | Segments: {} | Video ID: {}",
            metadata.duration_minutes(),
            metadata.segment_count,
            metadata.video_id
        );
        if self.use_color {
            println!("{ANSI_DIM}{line}{ANSI_RESET}");
        } else {
            println!("{line}");
        }
    }

    fn print_error(&mut self) {
        if self.use_color {
            eprintln!("{ANSI_RED}Error: {}{ANSI_RESET}", self.page.error_text());
        } else {
            eprintln!("Error: {}", self.page.error_text());
        }
    }

    fn print_loading(&mut self) {
        if self.use_color {
            println!("{ANSI_DIM}Summarizing video...{ANSI_RESET}");
        } else {
            println!("Summarizing video...");
        }
        self.flush();
    }

    fn print_entry(&mut self, role: Role, html: &str) {
        let content = markup_to_ansi(html, self.use_color);
        if self.use_color {
            println!("{ANSI_CYAN}{}:{ANSI_RESET} {content}", role.label());
        } else {
            println!("{}: {content}", role.label());
        }
        self.flush();
    }

    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for TerminalView {
    fn set_visible(&mut self, region: Region, visible: bool) {
        let was_visible = self.page.is_visible(region);
        self.page.set_visible(region, visible);
        if !visible {
            return;
        }
        if region == Region::Error && self.error_pending {
            self.error_pending = false;
            self.print_error();
            return;
        }
        if was_visible {
            return;
        }
        match region {
            Region::Loading => self.print_loading(),
            Region::Error => self.print_error(),
            Region::Summary => self.print_summary(),
            Region::Chat => self.print_info("Ask a question about the video (/help for commands)."),
        }
    }

    fn is_visible(&self, region: Region) -> bool {
        self.page.is_visible(region)
    }

    fn set_error_text(&mut self, text: &str) {
        self.page.set_error_text(text);
        if self.page.is_visible(Region::Error) {
            self.print_error();
        } else {
            self.error_pending = true;
        }
    }

    fn set_summary_html(&mut self, html: &str) {
        self.page.set_summary_html(html);
    }

    fn set_metadata(&mut self, metadata: &VideoMetadata) {
        self.page.set_metadata(metadata);
    }

    fn clear_transcript(&mut self) {
        self.page.clear_transcript();
    }

    fn append_entry(&mut self, role: Role, html: &str) {
        self.page.append_entry(role, html);
        // The user's own line is already on screen where they typed it.
        if role == Role::Assistant {
            self.print_entry(role, html);
        }
    }

    fn set_enabled(&mut self, control: Control, enabled: bool) {
        self.page.set_enabled(control, enabled);
    }

    fn is_enabled(&self, control: Control) -> bool {
        self.page.is_enabled(control)
    }

    fn focus(&mut self, field: Field) {
        self.page.focus(field);
    }

    fn focused(&self) -> Field {
        self.page.focused()
    }

    fn input_value(&self, field: Field) -> String {
        self.page.input_value(field)
    }

    fn set_input_value(&mut self, field: Field, value: &str) {
        self.page.set_input_value(field, value);
    }
}
