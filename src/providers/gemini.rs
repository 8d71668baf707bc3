use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

const GEMINI_API_BASE: &str
  = "https://generativelanguage.googleapis.com/v1beta";

const GEMINI_MODEL: &str = "gemini-pro";

// ===== Body Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart
{   pub text: String
}

// `contents` is a single object on this endpoint, not an array
#[derive(Debug, Clone, Serialize)]
pub struct GeminiContents
{   pub parts: Vec<GeminiPart>
}

#[derive(Debug, Clone, Serialize)]
pub struct GeminiRequest
{   pub contents: GeminiContents
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponse
{   pub error: Option<crate::providers::ApiErrorBody>
  , pub candidates: Option<Vec<GeminiCandidate>>
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidate
{   pub content: Option<GeminiCandidateContent>
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidateContent
{   #[serde(default)]
    pub parts: Vec<GeminiPart>
}

// ===== Gemini Client =====

/// Client for the Google Gemini generate-content API.
/// The credential travels as a URL query parameter, so the
/// request URL is never logged.
#[derive(Debug, Clone)]
pub struct GeminiClient
{   api_base: String
  , http_client: reqwest::Client
}

impl GeminiClient
{   /// Create a client. `api_base` overrides the production
    /// endpoint, which tests point at a local mock server.
    pub fn new(api_base: Option<String>) -> Self
    {   debug!("Creating GeminiClient");
        GeminiClient
        {   api_base: api_base
            .unwrap_or_else(|| GEMINI_API_BASE.to_string())
          , http_client: reqwest::Client::new()
        }
    }

    /// One generate-content round trip: prompt in, text out.
    pub async fn generate(
      &self
    , prompt: &str
    , api_key: &str
    ) -> Result<String, crate::error::Error>
    {   debug!(
          "Gemini generate, prompt length: {}",
          prompt.len()
        );

        let request = GeminiRequest
        {   contents: GeminiContents
            {   parts: vec![
                  GeminiPart
                  {   text: prompt.to_string()
                  }
                ]
            }
        };

        trace!("Gemini request: {:?}", request);

        let url = format!(
          "{}/models/{}:generateContent?key={}",
          self.api_base, GEMINI_MODEL, api_key
        );

        let response = self.http_client
          .post(url)
          .header("Content-Type", "application/json")
          .timeout(crate::providers::REQUEST_TIMEOUT)
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            // reqwest's message embeds the URL, and this URL
            // carries the credential
            let e = e.without_url();
            error!("HTTP error: {}", e);
            crate::error::Error::Transport(e.to_string())
          })?;

        let status = response.status();
        trace!("Gemini response status: {}", status);

        let gemini_response: GeminiResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        // The body's error object decides, whatever the status
        if let Some(api_error) = gemini_response.error
        {   error!("Gemini API error: {}", api_error.message);
            return Err(crate::error::Error::Api(
              api_error.message
            ));
        }

        gemini_response.candidates
          .unwrap_or_default()
          .into_iter()
          .next()
          .and_then(|c| c.content)
          .and_then(|content| content.parts.into_iter().next())
          .map(|p| p.text)
          .ok_or_else(|| {
            error!("No candidate text in Gemini response");
            crate::error::Error::MalformedResponse
          })
    }
}
