//! Logging trait for vidrecap client operations.
//!
//! This module provides the [`ClientLogger`] trait that allows users to capture
//! and log every round trip passing through the [`Vidrecap`](crate::Vidrecap)
//! client.

use crate::Error;
use crate::types::{ChatRequest, ChatResponse, SummarizeRequest, SummarizeResponse};

/// A trait for logging client operations.
///
/// Implement this trait to capture and record all backend interactions,
/// successful or not.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Mutex;
/// use vidrecap::{
///     ChatRequest, ChatResponse, ClientLogger, Error, SummarizeRequest, SummarizeResponse,
/// };
///
/// struct FileLogger {
///     file: Mutex<std::fs::File>,
/// }
///
/// impl ClientLogger for FileLogger {
///     fn log_summarize(&self, request: &SummarizeRequest, response: &SummarizeResponse) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "summarize {} -> {}", request.youtube_url, response.session_id).unwrap();
///     }
///
///     fn log_chat(&self, request: &ChatRequest, response: &ChatResponse) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "chat {}: {}", request.session_id, response.response).unwrap();
///     }
///
///     fn log_error(&self, endpoint: &str, error: &Error) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "{endpoint} failed: {error}").unwrap();
///     }
/// }
/// ```
pub trait ClientLogger: Send + Sync {
    /// Log a successful summarize round trip.
    fn log_summarize(&self, request: &SummarizeRequest, response: &SummarizeResponse);

    /// Log a successful chat round trip.
    fn log_chat(&self, request: &ChatRequest, response: &ChatResponse);

    /// Log a failed request.
    ///
    /// `endpoint` is the path that was requested, e.g. `api/chat`.
    fn log_error(&self, endpoint: &str, error: &Error);
}
