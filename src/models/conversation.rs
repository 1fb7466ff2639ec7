use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// One message of a conversation. Turns are never mutated; an augmented
/// conversation swaps in a new turn instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

/// A chat request as sent by the caller.
///
/// Turns are shared through `Arc` so that cloning a request, or building an
/// augmented copy of it, never duplicates message text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRequest {
    #[serde(rename = "messages")]
    pub turns: Vec<Arc<ConversationTurn>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub use_web_search: bool,
}

impl ConversationRequest {
    pub fn new(turns: Vec<ConversationTurn>) -> Self {
        Self {
            turns: turns.into_iter().map(Arc::new).collect(),
            model: None,
            temperature: None,
            use_web_search: false,
        }
    }

    pub fn with_web_search(mut self, use_web_search: bool) -> Self {
        self.use_web_search = use_web_search;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// The most recent turn, only if the user sent it.
    pub fn last_user_turn(&self) -> Option<&Arc<ConversationTurn>> {
        self.turns.last().filter(|turn| turn.role == Role::User)
    }
}
