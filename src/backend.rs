//! The seam between the session client and the summarization service.

use crate::error::Result;
use crate::types::{ChatRequest, ChatResponse, SummarizeRequest, SummarizeResponse};

/// The two round trips a [`SummarizerSession`](crate::SummarizerSession) needs.
///
/// [`Vidrecap`](crate::Vidrecap) implements this over HTTP.  Each call is
/// attempted exactly once; implementations must not retry.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Summarize a video and open a chat session for it.
    async fn summarize(&self, request: SummarizeRequest) -> Result<SummarizeResponse>;

    /// Send one chat message within an existing session.
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse>;
}

#[async_trait::async_trait]
impl<B: Backend + ?Sized> Backend for std::sync::Arc<B> {
    async fn summarize(&self, request: SummarizeRequest) -> Result<SummarizeResponse> {
        (**self).summarize(request).await
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        (**self).chat(request).await
    }
}
