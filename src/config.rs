//! Persisted assistant settings

use serde::{Deserialize, Serialize};

/// The host-persisted configuration record: one opaque API key
/// per service plus the default-service selector. The host owns
/// storage; this crate only reads keys and never writes them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantSettings
{   /// OpenAI API key
    pub openai_api_key: Option<String>
  , /// Google Gemini API key
    pub gemini_api_key: Option<String>
  , /// Service used when a request names none
    pub default_service: crate::Provider
}

impl Default for AssistantSettings
{   fn default() -> Self
    {   AssistantSettings
        {   openai_api_key: None
          , gemini_api_key: None
          , default_service: crate::Provider::OpenAi
        }
    }
}

impl AssistantSettings
{   /// Look up the stored key for a service.
    /// Empty or whitespace-only stored values count as absent.
    pub fn api_key(&self, provider: &crate::Provider)
      -> Option<&str>
    {   let key = match provider
        {   crate::Provider::OpenAi => self.openai_api_key.as_deref()
          , crate::Provider::Gemini => self.gemini_api_key.as_deref()
        };
        key.map(str::trim).filter(|k| !k.is_empty())
    }

    /// Normalize a record arriving from the host: trim every
    /// stored field, dropping keys that trim to nothing.
    pub fn sanitized(self) -> Self
    {   AssistantSettings
        {   openai_api_key: sanitize_field(self.openai_api_key)
          , gemini_api_key: sanitize_field(self.gemini_api_key)
          , default_service: self.default_service
        }
    }
}

fn sanitize_field(value: Option<String>) -> Option<String>
{   value
      .map(|v| v.trim().to_string())
      .filter(|v| !v.is_empty())
}
