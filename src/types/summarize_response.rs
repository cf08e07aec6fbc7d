use serde::{Deserialize, Serialize};

use crate::types::VideoMetadata;

/// Successful body of `POST /api/summarize`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummarizeResponse {
    /// Identifier of the chat session the backend opened for this video.
    pub session_id: String,

    /// The summary, written in the markdown subset understood by
    /// [`format_markdown`](crate::format_markdown).
    pub summary: String,

    /// Facts about the summarized video.
    pub video_metadata: VideoMetadata,
}
