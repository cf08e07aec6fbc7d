//! Wiring input events to the session client.
//!
//! Only four events do anything: Enter in the URL field or a click on the
//! summarize control runs [`SummarizerSession::summarize`], and Enter in the
//! chat field or a click on the send control runs
//! [`SummarizerSession::send_message`].  The operation reads its input from
//! the field, the way a page handler reads an input element's value.

use crate::backend::Backend;
use crate::error::Result;
use crate::session::SummarizerSession;
use crate::view::{Control, Field, Region, View};

/// A key that can be pressed inside a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The Enter / Return key.
    Enter,
    /// Any other key; never bound.
    Other(char),
}

/// An input event delivered to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A key press while `field` has focus.
    KeyPress {
        /// The field receiving the key.
        field: Field,
        /// The key pressed.
        key: Key,
    },
    /// A click on a control.
    Click(Control),
}

/// A session operation an event can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Summarize the URL field.
    Summarize,
    /// Send the chat field.
    SendMessage,
}

/// What [`dispatch`] did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The event has no binding.
    Unbound,
    /// The event is bound but its target cannot receive it right now: the
    /// control is disabled or the field sits in a hidden region.
    Blocked,
    /// The bound operation ran to completion.
    Ran(Action),
}

/// The operation an event is bound to, if any.
pub fn bind(event: &UiEvent) -> Option<Action> {
    match event {
        UiEvent::KeyPress {
            field: Field::Url,
            key: Key::Enter,
        } => Some(Action::Summarize),
        UiEvent::KeyPress {
            field: Field::Chat,
            key: Key::Enter,
        } => Some(Action::SendMessage),
        UiEvent::Click(Control::SummarizeButton) => Some(Action::Summarize),
        UiEvent::Click(Control::SendButton) => Some(Action::SendMessage),
        UiEvent::KeyPress {
            key: Key::Other(_), ..
        } => None,
    }
}

fn reachable<V: View>(view: &V, event: &UiEvent) -> bool {
    match event {
        UiEvent::Click(control) => view.is_enabled(*control),
        UiEvent::KeyPress {
            field: Field::Chat, ..
        } => view.is_visible(Region::Chat),
        UiEvent::KeyPress {
            field: Field::Url, ..
        } => true,
    }
}

/// Delivers `event` to `session`, running the bound operation.
///
/// # Errors
///
/// Returns the operation's error after it has been rendered.
pub async fn dispatch<B: Backend, V: View>(
    session: &mut SummarizerSession<B, V>,
    event: &UiEvent,
) -> Result<Dispatch> {
    let Some(action) = bind(event) else {
        return Ok(Dispatch::Unbound);
    };
    if !reachable(session.view(), event) {
        tracing::debug!(?event, "event target is not reachable");
        return Ok(Dispatch::Blocked);
    }
    match action {
        Action::Summarize => {
            let url = session.view().input_value(Field::Url);
            session.summarize(&url).await?;
        }
        Action::SendMessage => {
            let message = session.view().input_value(Field::Chat);
            session.send_message(&message).await?;
        }
    }
    Ok(Dispatch::Ran(action))
}

/// Types `text` into the focused field and presses Enter.
///
/// # Errors
///
/// Returns the operation's error after it has been rendered.
pub async fn submit_line<B: Backend, V: View>(
    session: &mut SummarizerSession<B, V>,
    text: &str,
) -> Result<Dispatch> {
    let field = session.view().focused();
    session.view_mut().set_input_value(field, text);
    dispatch(
        session,
        &UiEvent::KeyPress {
            field,
            key: Key::Enter,
        },
    )
    .await
}
