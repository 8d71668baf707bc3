//! Wire types shared with the host

use serde::{Deserialize, Serialize};

/// Inbound generation request, as submitted by the host's caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest
{   /// The prompt text
    pub prompt: String
  , /// Service identifier ("openai" | "gemini");
    /// absent means use the configured default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>
}

/// Outbound envelope returned to the host's caller.
/// `data` is generated text on success, otherwise the failure's
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse
{   /// Whether generation succeeded
    pub success: bool
  , /// Generated text or error message
    pub data: String
}

impl GenerationResponse
{   /// Successful envelope carrying generated text
    pub fn ok(text: String) -> Self
    {   GenerationResponse
        {   success: true
          , data: text
        }
    }

    /// Failure envelope carrying a user-readable message
    pub fn err(message: String) -> Self
    {   GenerationResponse
        {   success: false
          , data: message
        }
    }
}

impl From<Result<String, crate::error::Error>>
  for GenerationResponse
{   fn from(result: Result<String, crate::error::Error>) -> Self
    {   match result
        {   Ok(text) => GenerationResponse::ok(text)
          , Err(e) => GenerationResponse::err(e.to_string())
        }
    }
}
