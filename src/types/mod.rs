// Public modules
pub mod chat_request;
pub mod chat_response;
pub mod error_body;
pub mod health_status;
pub mod role;
pub mod summarize_request;
pub mod summarize_response;
pub mod video_metadata;

// Re-exports
pub use chat_request::ChatRequest;
pub use chat_response::ChatResponse;
pub use error_body::ErrorBody;
pub use health_status::HealthStatus;
pub use role::Role;
pub use summarize_request::SummarizeRequest;
pub use summarize_response::SummarizeResponse;
pub use video_metadata::VideoMetadata;
