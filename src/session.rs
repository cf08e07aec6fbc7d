//! The session client.
//!
//! [`SummarizerSession`] owns the one piece of mutable state the client has,
//! the active session identifier (held in a [`SessionContext`]), and runs the
//! two user-visible operations: summarizing a video and sending a chat
//! message.  Both translate their outcome into [`View`] updates; neither ever
//! fails silently.
//!
//! Every operation takes `&mut self`, so a second summarize or send cannot
//! start on the same session while one is in flight.  The trigger control is
//! disabled for the duration and re-enabled on every exit path.  Transport
//! hangs are bounded by the backend's request timeout.

use crate::backend::Backend;
use crate::client::{CHAT_FALLBACK, SUMMARIZE_FALLBACK};
use crate::error::{Error, Result};
use crate::observability::{
    SESSION_IGNORED_SENDS, SESSION_MESSAGE_FAILURES, SESSION_MESSAGES, SESSION_SUMMARIES,
    SESSION_SUMMARY_FAILURES, SESSION_VALIDATION_ERRORS,
};
use crate::types::{ChatRequest, Role, SummarizeRequest};
use crate::view::{
    Control, Field, Region, View, add_message, display_summary, hide_error, hide_loading,
    show_error, show_loading,
};

/// Message shown when summarize is triggered with an empty URL field.
pub const EMPTY_URL_MESSAGE: &str = "Please enter a YouTube URL";

/// Prefix of transcript entries that report a failed chat message.
pub const CHAT_ERROR_PREFIX: &str = "Error: ";

/// Holder of the active session identifier.
///
/// At most one session is tracked at a time.  A new summarization replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    session_id: Option<String>,
}

impl SessionContext {
    /// Creates a context with no active session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active session identifier, if any.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Returns true if a session is active.
    pub fn is_active(&self) -> bool {
        self.session_id.is_some()
    }

    /// Makes `session_id` the active session.
    pub fn activate(&mut self, session_id: impl Into<String>) {
        self.session_id = Some(session_id.into());
    }

    /// Forgets the active session.
    pub fn clear(&mut self) {
        self.session_id = None;
    }
}

/// What became of a [`SummarizerSession::send_message`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The message was empty or no session was active; nothing happened.
    Ignored,
    /// The message was sent and the reply appended to the transcript.
    Delivered,
}

/// Summarizes videos and relays chat messages, rendering into a [`View`].
pub struct SummarizerSession<B: Backend, V: View> {
    backend: B,
    view: V,
    context: SessionContext,
}

impl<B: Backend, V: View> SummarizerSession<B, V> {
    /// Creates a session client with no active session.
    pub fn new(backend: B, view: V) -> Self {
        Self {
            backend,
            view,
            context: SessionContext::new(),
        }
    }

    /// The session context.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// The active session identifier, if any.
    pub fn session_id(&self) -> Option<&str> {
        self.context.session_id()
    }

    /// The backend requests go to.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The view being rendered into.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The view being rendered into, for input.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Summarizes the video at `url` and opens a chat session for it.
    ///
    /// A blank URL is rejected locally: the banner shows
    /// [`EMPTY_URL_MESSAGE`] and no request is made.  Otherwise the previous
    /// summary, chat and session are discarded and one request is issued.
    /// On success the summary is rendered and the chat is revealed and
    /// focused; on failure the banner shows the backend's `detail` or a
    /// generic message.  Either way the loading indicator is hidden and the
    /// summarize control re-enabled before returning.
    ///
    /// # Errors
    ///
    /// Returns the failure after it has been shown in the banner.
    pub async fn summarize(&mut self, url: &str) -> Result<()> {
        let url = url.trim();
        if url.is_empty() {
            SESSION_VALIDATION_ERRORS.click();
            let err = Error::validation(EMPTY_URL_MESSAGE, Some("youtube_url".to_string()));
            show_error(&mut self.view, &err.user_message(SUMMARIZE_FALLBACK));
            return Err(err);
        }

        hide_error(&mut self.view);
        show_loading(&mut self.view);
        self.view.set_visible(Region::Summary, false);
        self.view.set_visible(Region::Chat, false);
        self.view.clear_transcript();
        self.view.set_enabled(Control::SummarizeButton, false);
        self.context.clear();

        tracing::debug!(url, "summarizing video");
        let outcome = match self.backend.summarize(SummarizeRequest::new(url)).await {
            Ok(response) => {
                SESSION_SUMMARIES.click();
                self.context.activate(response.session_id);
                display_summary(&mut self.view, &response.summary, &response.video_metadata);
                self.view.set_visible(Region::Chat, true);
                self.view.focus(Field::Chat);
                Ok(())
            }
            Err(err) => {
                SESSION_SUMMARY_FAILURES.click();
                tracing::warn!(url, error = %err, "summarization failed");
                show_error(&mut self.view, &err.user_message(SUMMARIZE_FALLBACK));
                Err(err)
            }
        };

        hide_loading(&mut self.view);
        self.view.set_enabled(Control::SummarizeButton, true);
        outcome
    }

    /// Sends `message` within the active session.
    ///
    /// Does nothing, and shows nothing, when the trimmed message is empty or
    /// no session is active.  Otherwise the message is appended to the
    /// transcript and the chat field cleared before the request; the reply,
    /// or the failure prefixed with [`CHAT_ERROR_PREFIX`], is appended as an
    /// assistant entry.  Chat failures never touch the error banner or the
    /// session.  The send control is re-enabled and the chat field focused on
    /// every exit path that made a request.
    ///
    /// # Errors
    ///
    /// Returns the failure after it has been appended to the transcript.
    pub async fn send_message(&mut self, message: &str) -> Result<SendOutcome> {
        let message = message.trim();
        let session_id = match self.context.session_id() {
            Some(session_id) if !message.is_empty() => session_id.to_string(),
            _ => {
                SESSION_IGNORED_SENDS.click();
                return Ok(SendOutcome::Ignored);
            }
        };

        add_message(&mut self.view, Role::User, message);
        self.view.clear_input(Field::Chat);
        self.view.set_enabled(Control::SendButton, false);

        tracing::debug!(session_id = %session_id, "sending chat message");
        let outcome = match self
            .backend
            .chat(ChatRequest::new(session_id, message))
            .await
        {
            Ok(response) => {
                SESSION_MESSAGES.click();
                add_message(&mut self.view, Role::Assistant, &response.response);
                Ok(SendOutcome::Delivered)
            }
            Err(err) => {
                SESSION_MESSAGE_FAILURES.click();
                tracing::warn!(error = %err, "chat message failed");
                let text = format!("{CHAT_ERROR_PREFIX}{}", err.user_message(CHAT_FALLBACK));
                add_message(&mut self.view, Role::Assistant, &text);
                Err(err)
            }
        };

        self.view.set_enabled(Control::SendButton, true);
        self.view.focus(Field::Chat);
        outcome
    }
}
