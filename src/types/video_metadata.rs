use serde::{Deserialize, Serialize};

/// Facts about a summarized video, as reported by the backend.
///
/// Received once with the summary and only ever displayed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoMetadata {
    /// Length of the video in whole seconds.
    #[serde(with = "crate::utils::seconds")]
    pub duration_seconds: u64,

    /// Number of transcript segments the summary was built from.
    pub segment_count: u64,

    /// Opaque identifier of the video.
    pub video_id: String,
}

impl VideoMetadata {
    /// Creates a new VideoMetadata.
    pub fn new(duration_seconds: u64, segment_count: u64, video_id: impl Into<String>) -> Self {
        Self {
            duration_seconds,
            segment_count,
            video_id: video_id.into(),
        }
    }

    /// The duration in whole minutes, rounded down.
    pub fn duration_minutes(&self) -> u64 {
        self.duration_seconds / 60
    }
}
