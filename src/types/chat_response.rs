use serde::{Deserialize, Serialize};

/// Successful body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    /// The assistant's reply.
    pub response: String,
}
