use serde::{Deserialize, Serialize};

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    /// `"healthy"` when the backend is serving requests.
    pub status: String,
}

impl HealthStatus {
    /// Returns true if the backend reported itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
