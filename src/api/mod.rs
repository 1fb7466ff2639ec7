pub mod client;
pub mod models;
pub mod response;

pub use client::{ChatCompletion, OpenAiChatClient};
pub use models::RequestBody;
