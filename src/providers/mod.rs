//! AI service client implementations

use serde::Deserialize;
use std::time::Duration;

pub mod openai;
pub mod gemini;

// Re-export for convenience
pub use openai::OpenAiClient;
pub use gemini::GeminiClient;

/// Fixed outbound timeout for every service call.
/// One round trip per request, no retries.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The `{"error":{"message":...}}` payload both services use.
/// Its presence in a decoded body wins over the HTTP status.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody
{   #[serde(default)]
    pub message: String
}
