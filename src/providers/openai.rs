use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

const OPENAI_API_BASE: &str
  = "https://api.openai.com/v1";

// Fixed per adapter, not caller-configurable
const OPENAI_MODEL: &str = "gpt-3.5-turbo";
const OPENAI_TEMPERATURE: f64 = 0.7;

// ===== Message Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenAiChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub temperature: f64
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiChatResponse
{   pub error: Option<crate::providers::ApiErrorBody>
  , pub choices: Option<Vec<Choice>>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: Option<ChatMessage>
}

// ===== OpenAI Client =====

/// Client for the OpenAI chat-completion API
#[derive(Debug, Clone)]
pub struct OpenAiClient
{   api_base: String
  , http_client: reqwest::Client
}

impl OpenAiClient
{   /// Create a client. `api_base` overrides the production
    /// endpoint, which tests point at a local mock server.
    pub fn new(api_base: Option<String>) -> Self
    {   debug!("Creating OpenAiClient");
        OpenAiClient
        {   api_base: api_base
            .unwrap_or_else(|| OPENAI_API_BASE.to_string())
          , http_client: reqwest::Client::new()
        }
    }

    /// One chat-completion round trip: prompt in, text out.
    pub async fn generate(
      &self
    , prompt: &str
    , api_key: &str
    ) -> Result<String, crate::error::Error>
    {   debug!(
          "OpenAI generate, prompt length: {}",
          prompt.len()
        );

        let request = OpenAiChatRequest
        {   model: OPENAI_MODEL.to_string()
          , messages: vec![
              ChatMessage
              {   role: "user".to_string()
                , content: prompt.to_string()
              }
            ]
          , temperature: OPENAI_TEMPERATURE
        };

        trace!("OpenAI request: {:?}", request);

        let response = self.http_client
          .post(format!("{}/chat/completions", self.api_base))
          .header("Authorization", format!("Bearer {}", api_key))
          .header("Content-Type", "application/json")
          .timeout(crate::providers::REQUEST_TIMEOUT)
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            let e = e.without_url();
            error!("HTTP error: {}", e);
            crate::error::Error::Transport(e.to_string())
          })?;

        let status = response.status();
        trace!("OpenAI response status: {}", status);

        let chat_response: OpenAiChatResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        // The body's error object decides, whatever the status
        if let Some(api_error) = chat_response.error
        {   error!("OpenAI API error: {}", api_error.message);
            return Err(crate::error::Error::Api(
              api_error.message
            ));
        }

        chat_response.choices
          .unwrap_or_default()
          .into_iter()
          .next()
          .and_then(|c| c.message)
          .map(|m| m.content)
          .ok_or_else(|| {
            error!("No message content in OpenAI response");
            crate::error::Error::MalformedResponse
          })
    }
}
