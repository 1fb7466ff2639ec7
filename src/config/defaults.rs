pub const DEFAULT_CHAT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";
pub const DEFAULT_MODEL: &str = "gpt-4.1-nano-2025-04-14";

pub fn default_temperature() -> f32 {
    0.7
}

pub fn default_max_results() -> u8 {
    5
}

/// Seconds to wait for the search engine before going on without it.
pub fn default_search_timeout() -> u64 {
    10
}

pub fn default_request_timeout() -> u64 {
    60
}
