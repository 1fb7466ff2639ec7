mod conversation;
mod search_result;

pub use conversation::{ConversationRequest, ConversationTurn, Role};
pub use search_result::SearchResult;
