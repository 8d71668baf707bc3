pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod dispatch;
use serde::{Deserialize, Serialize};

/*

aica (AI Content Assistant) is the async backend for a web
content-generation assistant: the host collects a prompt and a
service choice from an authenticated user, hands them to this
crate, and gets back either generated text or a human-readable
failure message to render. The host also owns persistence of the
assistant settings (API keys, default service) and pushes them in
through the same command interface.

aica/
├── Cargo.toml          # Main manifest
├── src/
│   ├── lib.rs          # Re-exports and host-facing API interface
│   ├── error.rs        # Custom error types and handling
│   ├── config.rs       # Persisted assistant settings
│   ├── request.rs      # Host wire types (request + envelope)
│   ├── providers/      # AI service client implementations
│   │   ├── mod.rs      # Re-exports and shared pieces
│   │   ├── openai.rs   # OpenAI chat-completion client
│   │   └── gemini.rs   # Google Gemini generate-content client
│   └── dispatch.rs     # Validation, routing, backend task
└── tests/              # Integration tests

*/

/// AICA API INTERFACE:

// ===== GenerateContent =====

pub type GenerateContentReply = Result<String, crate::error::Error>;
pub type GenerateContentReplySender
  = tokio::sync::mpsc::UnboundedSender<GenerateContentReply>;

pub struct GenerateContentArgs
{   pub prompt: String
  , pub service: Option<String>
  , pub reply: GenerateContentReplySender
}

// ===== SaveSettings =====

pub type SaveSettingsReply = Result<(), crate::error::Error>;
pub type SaveSettingsReplySender
  = tokio::sync::mpsc::UnboundedSender<SaveSettingsReply>;

pub struct SaveSettingsArgs
{   pub settings: crate::config::AssistantSettings
  , pub reply: SaveSettingsReplySender
}

// ===== GetSettings =====

pub type GetSettingsReply
  = Result<crate::config::AssistantSettings, crate::error::Error>;
pub type GetSettingsReplySender
  = tokio::sync::mpsc::UnboundedSender<GetSettingsReply>;

pub struct GetSettingsArgs
{   pub reply: GetSettingsReplySender
}

// ===== KillProcess =====

pub type KillProcessReply = Result<(), crate::error::Error>;
pub type KillProcessReplySender
  = tokio::sync::mpsc::UnboundedSender<KillProcessReply>;

pub struct KillProcessArgs
{   pub reply: KillProcessReplySender
}

// ===== AssistantHand (sender side) =====

pub struct AssistantHand
{   pub generate_content_tx
      : tokio::sync::mpsc::UnboundedSender<GenerateContentArgs>
  , pub save_settings_tx
      : tokio::sync::mpsc::UnboundedSender<SaveSettingsArgs>
  , pub get_settings_tx
      : tokio::sync::mpsc::UnboundedSender<GetSettingsArgs>
  , pub kill_process_tx
      : tokio::sync::mpsc::UnboundedSender<KillProcessArgs>
}

// ===== AssistantFoot (receiver side) =====

pub struct AssistantFoot
{   pub generate_content_rx
      : tokio::sync::mpsc::UnboundedReceiver<GenerateContentArgs>
  , pub save_settings_rx
      : tokio::sync::mpsc::UnboundedReceiver<SaveSettingsArgs>
  , pub get_settings_rx
      : tokio::sync::mpsc::UnboundedReceiver<GetSettingsArgs>
  , pub kill_process_rx
      : tokio::sync::mpsc::UnboundedReceiver<KillProcessArgs>
}

/// AICA STRUCTURES:

/// Enum representing the supported AI services.
/// Variants serialize to the identifiers the host submits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Provider
{   /// OpenAI (chat completions)
    OpenAi
  , /// Google Gemini (generate content)
    Gemini
}

impl Provider
{   /// Parse a host-submitted service identifier.
    /// Anything outside the closed set is unknown.
    pub fn from_service_id(id: &str) -> Option<Self>
    {   match id
        {   "openai" => Some(Provider::OpenAi)
          , "gemini" => Some(Provider::Gemini)
          , _ => None
        }
    }

    /// The identifier the host submits for this service.
    pub fn service_id(&self) -> &'static str
    {   match self
        {   Provider::OpenAi => "openai"
          , Provider::Gemini => "gemini"
        }
    }
}

/// Human-readable service names, used in user-facing messages.
impl std::fmt::Display for Provider
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
      -> std::fmt::Result
    {   match self
        {   Provider::OpenAi => write!(f, "OpenAI")
          , Provider::Gemini => write!(f, "Gemini")
        }
    }
}
