use crate::models::ConversationTurn;
use serde::Serialize;
use std::sync::Arc;

/// Body of a `/chat/completions` call.
#[derive(Debug, Clone, Serialize)]
pub struct RequestBody {
    pub model: String,
    pub messages: Vec<Arc<ConversationTurn>>,
    pub temperature: f32,
}
