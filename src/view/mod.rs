//! Reflecting client state into something a person can see.
//!
//! The client talks to a [`View`]: a document with four toggleable regions
//! (summary, chat, loading indicator, error banner), two input fields, two
//! trigger controls and a chat transcript.  [`Page`] is an in-memory document
//! that records all of it; [`TerminalView`] wraps a page and echoes the visible
//! changes to a terminal.
//!
//! Every `View` method is idempotent with respect to the element it targets.

mod page;
mod terminal;

pub use page::{Page, TranscriptEntry};
pub use terminal::{TerminalView, markup_to_ansi};

use crate::markdown::{escape_html, format_markdown};
use crate::types::{Role, VideoMetadata};

/// A region of the document that can be shown or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The rendered summary and video metadata.
    Summary,
    /// The chat transcript and its input.
    Chat,
    /// The loading indicator shown while summarizing.
    Loading,
    /// The error banner.
    Error,
}

/// An input field that accepts typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The video URL field.
    Url,
    /// The chat message field.
    Chat,
}

/// A control that triggers a network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Starts summarization of the URL field.
    SummarizeButton,
    /// Sends the chat field as a message.
    SendButton,
}

/// The document the client renders into.
pub trait View {
    /// Shows or hides a region.
    fn set_visible(&mut self, region: Region, visible: bool);

    /// Returns true if the region is currently shown.
    fn is_visible(&self, region: Region) -> bool;

    /// Replaces the error banner's text.  The text is never interpreted as markup.
    fn set_error_text(&mut self, text: &str);

    /// Replaces the summary panel's content with an HTML fragment.
    fn set_summary_html(&mut self, html: &str);

    /// Replaces the metadata fields below the summary.
    fn set_metadata(&mut self, metadata: &VideoMetadata);

    /// Removes every transcript entry.
    fn clear_transcript(&mut self);

    /// Appends a transcript entry and scrolls the transcript to it.
    fn append_entry(&mut self, role: Role, html: &str);

    /// Enables or disables a control.
    fn set_enabled(&mut self, control: Control, enabled: bool);

    /// Returns true if the control is enabled.
    fn is_enabled(&self, control: Control) -> bool;

    /// Moves input focus to a field.
    fn focus(&mut self, field: Field);

    /// Returns the field that currently holds focus.
    fn focused(&self) -> Field;

    /// Returns the current text of a field.
    fn input_value(&self, field: Field) -> String;

    /// Replaces the text of a field.
    fn set_input_value(&mut self, field: Field, value: &str);

    /// Empties a field.
    fn clear_input(&mut self, field: Field) {
        self.set_input_value(field, "");
    }
}

/// Shows `message` in the error banner.
pub fn show_error(view: &mut dyn View, message: &str) {
    view.set_error_text(message);
    view.set_visible(Region::Error, true);
}

/// Hides the error banner.
pub fn hide_error(view: &mut dyn View) {
    view.set_visible(Region::Error, false);
}

/// Shows the loading indicator.
pub fn show_loading(view: &mut dyn View) {
    view.set_visible(Region::Loading, true);
}

/// Hides the loading indicator.
pub fn hide_loading(view: &mut dyn View) {
    view.set_visible(Region::Loading, false);
}

/// Renders a raw summary and its metadata, then reveals the summary region.
pub fn display_summary(view: &mut dyn View, summary: &str, metadata: &VideoMetadata) {
    view.set_summary_html(&format_markdown(summary));
    view.set_metadata(metadata);
    view.set_visible(Region::Summary, true);
}

/// Formats raw message content and appends it to the transcript.
pub fn add_message(view: &mut dyn View, role: Role, content: &str) {
    view.append_entry(role, &format_markdown(content));
}

/// The three labeled metadata fields as an HTML fragment.
pub fn metadata_html(metadata: &VideoMetadata) -> String {
    format!(
        "<span>Duration: {} minutes</span><span>Segments: {}</span><span>Video ID: {}</span>",
        metadata.duration_minutes(),
        metadata.segment_count,
        escape_html(&metadata.video_id),
    )
}
