use crate::markdown::escape_html;
use crate::types::{Role, VideoMetadata};
use crate::view::{Control, Field, Region, View, metadata_html};

/// One rendered entry in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// Who wrote the entry.
    pub role: Role,
    /// The formatted content.
    pub html: String,
}

/// An in-memory document.
///
/// A page starts with every region hidden, both controls enabled, empty
/// fields and focus on the URL field.
#[derive(Debug, Clone)]
pub struct Page {
    summary_visible: bool,
    chat_visible: bool,
    loading_visible: bool,
    error_visible: bool,
    error_text: String,
    summary_html: String,
    metadata: Option<VideoMetadata>,
    transcript: Vec<TranscriptEntry>,
    scroll_position: Option<usize>,
    summarize_enabled: bool,
    send_enabled: bool,
    focused: Field,
    url_input: String,
    chat_input: String,
}

impl Page {
    /// Creates a page in its initial state.
    pub fn new() -> Self {
        Self {
            summary_visible: false,
            chat_visible: false,
            loading_visible: false,
            error_visible: false,
            error_text: String::new(),
            summary_html: String::new(),
            metadata: None,
            transcript: Vec::new(),
            scroll_position: None,
            summarize_enabled: true,
            send_enabled: true,
            focused: Field::Url,
            url_input: String::new(),
            chat_input: String::new(),
        }
    }

    /// The error banner's text, whether or not it is shown.
    pub fn error_text(&self) -> &str {
        &self.error_text
    }

    /// The summary panel's HTML.
    pub fn summary_html(&self) -> &str {
        &self.summary_html
    }

    /// The metadata most recently rendered, if any.
    pub fn metadata(&self) -> Option<&VideoMetadata> {
        self.metadata.as_ref()
    }

    /// The metadata fields as HTML; empty before any summary.
    pub fn metadata_html(&self) -> String {
        self.metadata.as_ref().map(metadata_html).unwrap_or_default()
    }

    /// The transcript entries, oldest first.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Index of the entry the transcript is scrolled to.
    pub fn scroll_position(&self) -> Option<usize> {
        self.scroll_position
    }

    /// Serializes the whole document as HTML.
    pub fn render_html(&self) -> String {
        let mut html = String::new();
        html.push_str(&format!(
            "<input id=\"youtube-url\" value=\"{}\">",
            escape_html(&self.url_input)
        ));
        html.push_str(&button("summarize-btn", self.summarize_enabled));
        html.push_str(&section("loading", self.loading_visible, ""));
        html.push_str(&section(
            "error",
            self.error_visible,
            &escape_html(&self.error_text),
        ));
        let summary = format!(
            "<div id=\"summary-content\">{}</div><div id=\"video-metadata\">{}</div>",
            self.summary_html,
            self.metadata_html()
        );
        html.push_str(&section("summary-section", self.summary_visible, &summary));
        let mut chat = String::from("<div id=\"chat-messages\">");
        for entry in &self.transcript {
            chat.push_str(&format!(
                "<div class=\"message {}\"><div class=\"message-label\">{}</div><div class=\"message-content\">{}</div></div>",
                entry.role.as_str(),
                entry.role.label(),
                entry.html
            ));
        }
        chat.push_str("</div>");
        chat.push_str(&format!(
            "<input id=\"chat-input\" value=\"{}\">",
            escape_html(&self.chat_input)
        ));
        chat.push_str(&button("send-btn", self.send_enabled));
        html.push_str(&section("chat-section", self.chat_visible, &chat));
        html
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl View for Page {
    fn set_visible(&mut self, region: Region, visible: bool) {
        match region {
            Region::Summary => self.summary_visible = visible,
            Region::Chat => self.chat_visible = visible,
            Region::Loading => self.loading_visible = visible,
            Region::Error => self.error_visible = visible,
        }
    }

    fn is_visible(&self, region: Region) -> bool {
        match region {
            Region::Summary => self.summary_visible,
            Region::Chat => self.chat_visible,
            Region::Loading => self.loading_visible,
            Region::Error => self.error_visible,
        }
    }

    fn set_error_text(&mut self, text: &str) {
        self.error_text = text.to_string();
    }

    fn set_summary_html(&mut self, html: &str) {
        self.summary_html = html.to_string();
    }

    fn set_metadata(&mut self, metadata: &VideoMetadata) {
        self.metadata = Some(metadata.clone());
    }

    fn clear_transcript(&mut self) {
        self.transcript.clear();
        self.scroll_position = None;
    }

    fn append_entry(&mut self, role: Role, html: &str) {
        self.transcript.push(TranscriptEntry {
            role,
            html: html.to_string(),
        });
        self.scroll_position = Some(self.transcript.len() - 1);
    }

    fn set_enabled(&mut self, control: Control, enabled: bool) {
        match control {
            Control::SummarizeButton => self.summarize_enabled = enabled,
            Control::SendButton => self.send_enabled = enabled,
        }
    }

    fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::SummarizeButton => self.summarize_enabled,
            Control::SendButton => self.send_enabled,
        }
    }

    fn focus(&mut self, field: Field) {
        self.focused = field;
    }

    fn focused(&self) -> Field {
        self.focused
    }

    fn input_value(&self, field: Field) -> String {
        match field {
            Field::Url => self.url_input.clone(),
            Field::Chat => self.chat_input.clone(),
        }
    }

    fn set_input_value(&mut self, field: Field, value: &str) {
        match field {
            Field::Url => self.url_input = value.to_string(),
            Field::Chat => self.chat_input = value.to_string(),
        }
    }
}

fn section(id: &str, visible: bool, inner: &str) -> String {
    if visible {
        format!("<div id=\"{id}\">{inner}</div>")
    } else {
        format!("<div id=\"{id}\" class=\"hidden\">{inner}</div>")
    }
}

fn button(id: &str, enabled: bool) -> String {
    if enabled {
        format!("<button id=\"{id}\"></button>")
    } else {
        format!("<button id=\"{id}\" disabled></button>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let page = Page::new();
        for region in [Region::Summary, Region::Chat, Region::Loading, Region::Error] {
            assert!(!page.is_visible(region));
        }
        assert!(page.is_enabled(Control::SummarizeButton));
        assert!(page.is_enabled(Control::SendButton));
        assert_eq!(page.focused(), Field::Url);
        assert!(page.transcript().is_empty());
        assert_eq!(page.scroll_position(), None);
    }

    #[test]
    fn visibility_is_idempotent() {
        let mut page = Page::new();
        page.set_visible(Region::Chat, true);
        page.set_visible(Region::Chat, true);
        assert!(page.is_visible(Region::Chat));
        page.set_visible(Region::Chat, false);
        page.set_visible(Region::Chat, false);
        assert!(!page.is_visible(Region::Chat));
    }

    #[test]
    fn append_scrolls_to_newest() {
        let mut page = Page::new();
        page.append_entry(Role::User, "hello");
        assert_eq!(page.scroll_position(), Some(0));
        page.append_entry(Role::Assistant, "Hi there");
        assert_eq!(page.scroll_position(), Some(1));
        page.clear_transcript();
        assert_eq!(page.scroll_position(), None);
        assert!(page.transcript().is_empty());
    }

    #[test]
    fn inputs_and_focus() {
        let mut page = Page::new();
        page.set_input_value(Field::Chat, "question");
        assert_eq!(page.input_value(Field::Chat), "question");
        page.clear_input(Field::Chat);
        assert_eq!(page.input_value(Field::Chat), "");
        page.focus(Field::Chat);
        assert_eq!(page.focused(), Field::Chat);
    }

    #[test]
    fn render_html_marks_hidden_regions() {
        let mut page = Page::new();
        page.set_visible(Region::Error, true);
        page.set_error_text("<bad>");
        page.set_enabled(Control::SendButton, false);
        let html = page.render_html();
        assert!(html.contains("<div id=\"error\">&lt;bad&gt;</div>"));
        assert!(html.contains("<div id=\"loading\" class=\"hidden\">"));
        assert!(html.contains("<button id=\"send-btn\" disabled>"));
    }

    #[test]
    fn render_html_labels_entries() {
        let mut page = Page::new();
        page.append_entry(Role::User, "hello");
        page.append_entry(Role::Assistant, "<strong>Hi</strong>");
        let html = page.render_html();
        let user = html
            .find("<div class=\"message user\"><div class=\"message-label\">You</div>")
            .unwrap();
        let assistant = html
            .find("<div class=\"message assistant\"><div class=\"message-label\">Assistant</div><div class=\"message-content\"><strong>Hi</strong></div>")
            .unwrap();
        assert!(user < assistant);
    }
}
