use serde::{Deserialize, Serialize};

/// Body of `POST /api/summarize`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummarizeRequest {
    /// The video URL to summarize.
    pub youtube_url: String,
}

impl SummarizeRequest {
    /// Creates a new SummarizeRequest.
    pub fn new(youtube_url: impl Into<String>) -> Self {
        Self {
            youtube_url: youtube_url.into(),
        }
    }
}
