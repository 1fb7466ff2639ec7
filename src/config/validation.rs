/// Custom Search returns at most ten items per request.
pub const MAX_SEARCH_RESULTS: u8 = 10;

/// Point a base URL at its `/chat/completions` route.
pub fn normalize_chat_endpoint(endpoint: &str) -> String {
    if endpoint.ends_with("/chat/completions") {
        endpoint.to_string()
    } else if endpoint.ends_with("/v1") {
        format!("{}/chat/completions", endpoint)
    } else if endpoint.ends_with("/v1/") {
        format!("{}chat/completions", endpoint)
    } else {
        format!("{}/v1/chat/completions", endpoint.trim_end_matches('/'))
    }
}

pub fn clamp_max_results(value: u8) -> u8 {
    value.clamp(1, MAX_SEARCH_RESULTS)
}

pub fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

/// Treat unset and blank environment values alike.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
