use tokio::sync::mpsc;
use log::{debug, error, info};
use crate::AssistantFoot;

/// Core dispatch routine: validate the prompt, resolve the
/// service identifier, look up the credential, invoke the
/// matching client. Pure with respect to its inputs apart from
/// the single network call made by the selected client, so
/// independent requests can run it concurrently.
pub async fn generate_content(
  prompt: &str
, service: &str
, settings: &crate::config::AssistantSettings
, openai: &crate::providers::OpenAiClient
, gemini: &crate::providers::GeminiClient
) -> Result<String, crate::error::Error>
{   let prompt = prompt.trim();
    if prompt.is_empty()
    {   error!("Rejected request with empty prompt");
        return Err(crate::error::Error::EmptyPrompt);
    }

    let provider
      = match crate::Provider::from_service_id(service)
    {   Some(p) => p
      , None => {
          error!("Unknown service requested: {}", service);
          return Err(crate::error::Error::InvalidService(
            service.to_string()
          ));
        }
    };

    let api_key = match settings.api_key(&provider)
    {   Some(key) => key.to_string()
      , None => {
          error!("No API key configured for {}", provider);
          return Err(crate::error::Error::MissingApiKey(
            provider
          ));
        }
    };

    debug!("Dispatching prompt to {}", provider);
    match provider
    {   crate::Provider::OpenAi => {
          openai.generate(prompt, &api_key).await
        }
      , crate::Provider::Gemini => {
          gemini.generate(prompt, &api_key).await
        }
    }
}

/// Backend state behind the command loop
pub struct AssistantBackendState
{   pub settings: crate::config::AssistantSettings
  , pub openai_client: crate::providers::OpenAiClient
  , pub gemini_client: crate::providers::GeminiClient
}

impl AssistantBackendState
{   /// Create backend state against the production endpoints
    pub fn new(
      settings: Option<crate::config::AssistantSettings>
    ) -> Self
    {   Self::with_api_bases(settings, None, None)
    }

    /// Create backend state with endpoint overrides
    pub fn with_api_bases(
      settings: Option<crate::config::AssistantSettings>
    , openai_api_base: Option<String>
    , gemini_api_base: Option<String>
    ) -> Self
    {   debug!("Initializing AssistantBackendState");
        AssistantBackendState
        {   settings: settings.unwrap_or_default().sanitized()
          , openai_client: crate::providers::OpenAiClient::new(
              openai_api_base
            )
          , gemini_client: crate::providers::GeminiClient::new(
              gemini_api_base
            )
        }
    }
}

/// Public API for the assistant backend - owns the task
pub struct AssistantBackend
{   hand: crate::AssistantHand
  , _task_handle: tokio::task::JoinHandle<()>
}

impl AssistantBackend
{   /// Create and spawn a backend against the production
    /// endpoints. Returns immediately - spawns background task
    pub fn new(
      settings: Option<crate::config::AssistantSettings>
    ) -> Self
    {   Self::with_api_bases(settings, None, None)
    }

    /// Create and spawn a backend with endpoint overrides
    pub fn with_api_bases(
      settings: Option<crate::config::AssistantSettings>
    , openai_api_base: Option<String>
    , gemini_api_base: Option<String>
    ) -> Self
    {   debug!("Creating AssistantBackend with task ownership");

        let (generate_content_tx, generate_content_rx)
          = mpsc::unbounded_channel();
        let (save_settings_tx, save_settings_rx)
          = mpsc::unbounded_channel();
        let (get_settings_tx, get_settings_rx)
          = mpsc::unbounded_channel();
        let (kill_process_tx, kill_process_rx)
          = mpsc::unbounded_channel();

        let hand = crate::AssistantHand
        {   generate_content_tx: generate_content_tx.clone()
          , save_settings_tx: save_settings_tx.clone()
          , get_settings_tx: get_settings_tx.clone()
          , kill_process_tx: kill_process_tx.clone()
        };

        let foot = crate::AssistantFoot
        {   generate_content_rx
          , save_settings_rx
          , get_settings_rx
          , kill_process_rx
        };

        let state = AssistantBackendState::with_api_bases(
          settings,
          openai_api_base,
          gemini_api_base
        );

        let _task_handle = tokio::spawn(async move {
          run_backend_loop(foot, state).await
        });

        AssistantBackend
        {   hand
          , _task_handle
        }
    }

    /// Queue a generation request - returns almost immediately
    pub async fn generate_content(
      &self
    , prompt: String
    , service: Option<String>
    ) -> Result<
        mpsc::UnboundedReceiver<crate::GenerateContentReply>,
        crate::error::Error
      >
    {   debug!("generate_content queuing command");
        let (reply_tx, reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::GenerateContentArgs
        {   prompt
          , service
          , reply: reply_tx
        };

        self.hand.generate_content_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel closed");
            crate::error::Error::Other(
              "Backend disconnected".to_string()
            )
          })?;

        Ok(reply_rx)
    }

    /// Serve one host request end to end: queue it, await the
    /// outcome, wrap it in the reply envelope
    pub async fn handle_request(
      &self
    , request: crate::request::GenerationRequest
    ) -> crate::request::GenerationResponse
    {   debug!("Serving host generation request");
        let result = match self
          .generate_content(request.prompt, request.service)
          .await
        {   Ok(mut reply_rx) => match reply_rx.recv().await
            {   Some(result) => result
              , None => Err(crate::error::Error::Other(
                  "Backend disconnected".to_string()
                ))
            }
          , Err(e) => Err(e)
        };
        result.into()
    }

    /// Replace the assistant settings - returns almost immediately
    pub async fn save_settings(
      &self
    , settings: crate::config::AssistantSettings
    ) -> Result<
        mpsc::UnboundedReceiver<crate::SaveSettingsReply>,
        crate::error::Error
      >
    {   debug!("save_settings queuing command");
        let (reply_tx, reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::SaveSettingsArgs
        {   settings
          , reply: reply_tx
        };

        self.hand.save_settings_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel closed");
            crate::error::Error::Other(
              "Backend disconnected".to_string()
            )
          })?;

        Ok(reply_rx)
    }

    /// Read the current settings - returns almost immediately
    pub async fn get_settings(
      &self
    ) -> Result<
        mpsc::UnboundedReceiver<crate::GetSettingsReply>,
        crate::error::Error
      >
    {   debug!("get_settings queuing command");
        let (reply_tx, reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::GetSettingsArgs
        {   reply: reply_tx
        };

        self.hand.get_settings_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel closed");
            crate::error::Error::Other(
              "Backend disconnected".to_string()
            )
          })?;

        Ok(reply_rx)
    }

    /// Gracefully shutdown the backend
    pub async fn shutdown(self)
      -> Result<(), crate::error::Error>
    {   debug!("Shutting down AssistantBackend");
        let (reply_tx, mut reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::KillProcessArgs
        {   reply: reply_tx
        };

        self.hand.kill_process_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel already closed");
            crate::error::Error::Other(
              "Backend already shutdown".to_string()
            )
          })?;

        // Wait for shutdown confirmation
        if let Some(result) = reply_rx.recv().await
        {   debug!("Backend shutdown confirmed");
            result
        } else
        {   error!("Backend exited without confirming shutdown");
            Err(crate::error::Error::Other(
              "Backend shutdown unconfirmed".to_string()
            ))
        }
    }
}

/// Main backend event loop
///
/// Design: tokio::select! is ONLY for fast queueing. Generation
/// runs on its own spawned task over per-request snapshots, so
/// concurrent requests never serialize behind one HTTP call and
/// later settings writes don't affect requests already dequeued.
async fn run_backend_loop(
  foot: crate::AssistantFoot
, mut state: AssistantBackendState
)
{   debug!("Starting AssistantBackend event loop");
    let AssistantFoot
    {   mut generate_content_rx
      , mut save_settings_rx
      , mut get_settings_rx
      , mut kill_process_rx
    } = foot;

    loop
    { tokio::select!
      { Some(cmd) = generate_content_rx.recv() => {
          debug!("Received GenerateContent");
          let crate::GenerateContentArgs
          {   prompt
            , service
            , reply
          } = cmd;

          // Absent service means the configured default
          let service = service.unwrap_or_else(||
            state.settings.default_service
              .service_id().to_string()
          );

          let settings = state.settings.clone();
          let openai = state.openai_client.clone();
          let gemini = state.gemini_client.clone();

          tokio::spawn(async move {
            let result = generate_content(
              &prompt,
              &service,
              &settings,
              &openai,
              &gemini
            ).await;
            let _ = reply.send(result);
          });
        }
      , Some(cmd) = save_settings_rx.recv() => {
          debug!("Received SaveSettings");
          state.settings = cmd.settings.sanitized();
          let _ = cmd.reply.send(Ok(()));
        }
      , Some(cmd) = get_settings_rx.recv() => {
          debug!("Received GetSettings");
          let _ = cmd.reply.send(Ok(state.settings.clone()));
        }
      , Some(cmd) = kill_process_rx.recv() => {
          debug!("Received KillProcess");
          let _ = cmd.reply.send(Ok(()));
          info!("AssistantBackend shutting down");
          break;
        }
      }
    }
}
