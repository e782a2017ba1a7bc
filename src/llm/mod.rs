//! Chat-completion capability and its implementations.

mod client;
pub mod fake;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub use client::OpenAiChatClient;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("malformed response from chat endpoint: {0}")]
    MalformedResponse(String),
    #[error(
        "provider '{provider}' requires an API key\n\n\
         Set the {env_var} environment variable (or add it to .env):\n  \
         export {env_var}=\"your-api-key\"\n\n\
         Or set api_key in ~/.config/lingo/config.toml"
    )]
    MissingCredential { provider: String, env_var: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// An ordered, immutable list of role-tagged messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub const fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn single(message: Message) -> Self {
        Self {
            messages: vec![message],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Content of the last user message, if any.
    pub fn last_user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

/// Anything that can answer a conversation with text.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Sends the conversation and returns the reply text.
    async fn complete(&self, conversation: &Conversation) -> Result<String, ChatError>;
}
