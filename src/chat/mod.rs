//! Chat support for the policy advisor sidebar.
//!
//! The evaluation engine never talks to the language model. This module holds
//! the pieces around it: conversation history, the request shapes sent to the
//! relay, seeding a conversation with the current simulation as context, and
//! decoding the relay's event stream.

pub mod questions;
#[cfg(feature = "relay")]
pub mod relay;
pub mod stream;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RelayError;
use crate::simulation::SimulationResult;

pub use questions::{quick_questions, QuickQuestion};
pub use stream::DeltaDecoder;

/// Model requested from the upstream gateway when none is configured.
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Opening assistant message shown in the sidebar. Never sent upstream.
pub const GREETING: &str = "Hello! I'm your AI policy advisor. Ask me about tax effects, trade implications, subsidy impacts, or price controls and I'll provide economic analysis.";

/// System prompt prepended by the relay to every upstream request.
pub const SYSTEM_PROMPT: &str = "You are an expert economic policy advisor specializing in fiscal policy, trade economics, subsidies, and price controls. You help users understand the implications of various economic policies through simulation analysis.

Your expertise includes:
- **Tax Policy**: Income tax, corporate tax, sales tax effects on consumer behavior, investment, and government revenue
- **Trade Policy**: Tariffs, quotas, trade agreements, and their effects on domestic/international markets
- **Subsidies**: Production subsidies, consumer subsidies, and their market distortions and welfare effects
- **Price Controls**: Price ceilings, price floors, and their effects on supply, demand, and market equilibrium

When analyzing policies:
1. Explain the economic theory behind the effects
2. Discuss short-term vs long-term implications
3. Highlight trade-offs and unintended consequences
4. Reference supply/demand dynamics and equilibrium shifts
5. Consider distributional effects across different economic groups

Be precise, data-driven, and balanced in your analysis. Use economic terminology appropriately but explain concepts clearly for non-economists.";

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// System instructions or context.
    System,
    /// The person using the advisor.
    User,
    /// The model.
    Assistant,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// One message on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who wrote the message.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a message from `role`.
    #[must_use]
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Creates an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// Body posted to the relay: `{"messages": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation so far, oldest first.
    pub messages: Vec<ChatMessage>,
}

/// Builds the system message carrying a simulation as JSON context.
pub fn context_message(result: &SimulationResult) -> Result<ChatMessage, RelayError> {
    let json = result
        .to_json()
        .map_err(|e| RelayError::SerializationFailed {
            message: e.to_string(),
        })?;
    Ok(ChatMessage::system(format!(
        "The user is viewing the following simulation result (JSON). Ground your answers in it.\n{json}"
    )))
}

impl ChatRequest {
    /// Wraps an ordered list of messages.
    #[must_use]
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }

    /// Prepends the simulation as a system message.
    pub fn with_simulation_context(mut self, result: &SimulationResult) -> Result<Self, RelayError> {
        self.messages.insert(0, context_message(result)?);
        Ok(self)
    }
}

/// Body sent by the relay to the upstream model gateway.
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamRequest<'a> {
    /// Model identifier requested from the gateway.
    pub model: &'a str,
    /// System prompt followed by the relayed messages.
    pub messages: Vec<ChatMessage>,
    /// Always true; replies are streamed.
    pub stream: bool,
}

/// Wraps a relay request for the upstream gateway, prepending
/// [`SYSTEM_PROMPT`] and enabling streaming.
#[must_use]
pub fn upstream_body<'a>(request: &ChatRequest, model: &'a str) -> UpstreamRequest<'a> {
    let mut messages = Vec::with_capacity(request.messages.len() + 1);
    messages.push(ChatMessage::system(SYSTEM_PROMPT));
    messages.extend(request.messages.iter().cloned());
    UpstreamRequest {
        model,
        messages,
        stream: true,
    }
}

/// Connection settings for the hosted relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Chat completions endpoint of the gateway.
    pub api_url: String,
    /// Bearer token for the gateway.
    pub api_key: String,
    /// Model identifier sent upstream.
    pub model: String,
}

impl RelayConfig {
    /// Reads `AI_API_URL`, `AI_API_KEY` and optionally `AI_MODEL`.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::NotConfigured`] if the URL or key is missing or
    /// empty.
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let (Some(api_url), Some(api_key)) = (non_empty("AI_API_URL"), non_empty("AI_API_KEY"))
        else {
            return Err(RelayError::NotConfigured);
        };
        Ok(Self {
            api_url,
            api_key,
            model: non_empty("AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

/// Sidebar conversation.
///
/// Starts with [`GREETING`], which is displayed but excluded from requests.
/// Assistant replies arrive as stream deltas and are accumulated into the
/// latest assistant turn.
#[derive(Debug, Clone)]
pub struct Conversation {
    greeting: ChatMessage,
    turns: Vec<ChatMessage>,
    context: Option<ChatMessage>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// Starts a conversation holding only the greeting.
    #[must_use]
    pub fn new() -> Self {
        Self {
            greeting: ChatMessage::assistant(GREETING),
            turns: Vec::new(),
            context: None,
        }
    }

    /// Attaches (or replaces) the simulation the conversation is about.
    pub fn set_simulation(&mut self, result: &SimulationResult) -> Result<(), RelayError> {
        self.context = Some(context_message(result)?);
        Ok(())
    }

    /// Drops the simulation context.
    pub fn clear_simulation(&mut self) {
        self.context = None;
    }

    /// Adds a user turn. Blank input is ignored and returns false.
    pub fn push_user(&mut self, content: &str) -> bool {
        let content = content.trim();
        if content.is_empty() {
            return false;
        }
        self.turns.push(ChatMessage::user(content));
        true
    }

    /// Appends streamed text to the current assistant turn, starting one if
    /// the last turn is not from the assistant.
    pub fn append_assistant_delta(&mut self, delta: &str) {
        match self.turns.last_mut() {
            Some(last) if last.role == ChatRole::Assistant => last.content.push_str(delta),
            _ => self.turns.push(ChatMessage::assistant(delta)),
        }
    }

    /// Everything to display, greeting first.
    pub fn display_messages(&self) -> impl Iterator<Item = &ChatMessage> {
        std::iter::once(&self.greeting).chain(self.turns.iter())
    }

    /// Exchanged turns, excluding the greeting.
    #[must_use]
    pub fn turns(&self) -> &[ChatMessage] {
        &self.turns
    }

    /// Request body for the relay: context (if any) followed by the turns.
    #[must_use]
    pub fn to_request(&self) -> ChatRequest {
        let messages = self
            .context
            .iter()
            .chain(self.turns.iter())
            .cloned()
            .collect();
        ChatRequest { messages }
    }
}
