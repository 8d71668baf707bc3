use std::fmt;

/// Custom error type for assistant operations
/// Implements Clone for sending through channels
///
/// The Display text of each variant is exactly what the host
/// envelope carries as `data` on failure, so these strings are
/// part of the user-facing contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Prompt was empty after trimming
    EmptyPrompt
  , /// Service identifier outside the supported set
    InvalidService(String)
  , /// No API key configured for the selected service
    MissingApiKey(crate::Provider)
  , /// Transport-level failure reaching the service
    Transport(String)
  , /// Service returned a structured error payload
    Api(String)
  , /// Failed to decode the service response body
    ParseError(String)
  , /// Decoded response carried neither an error nor content
    MalformedResponse
  , /// Generic error
    Other(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::EmptyPrompt => {
              write!(f, "Prompt is required")
            }
          , Error::InvalidService(_) => {
              write!(f, "Invalid AI service selected")
            }
          , Error::MissingApiKey(provider) => {
              write!(f,
                "{} API key is not configured",
                provider
              )
            }
          , Error::Transport(msg) => {
              // Surfaced verbatim from the transport layer
              write!(f, "{}", msg)
            }
          , Error::Api(msg) => {
              // The service's own error message, verbatim
              write!(f, "{}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f,
                "Failed to parse AI service response: {}",
                msg
              )
            }
          , Error::MalformedResponse => {
              write!(f,
                "AI service returned an unexpected response"
              )
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}
