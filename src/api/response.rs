use crate::error::{ChatBuscaError, Result};
use serde_json::Value;

/// Used when a failed upstream response carries no `error.message`.
pub const FALLBACK_ERROR_MESSAGE: &str = "Falha ao buscar da API OpenAI";

/// Extract the assistant text from a non-streaming completion.
pub fn extract_content(response_json: &Value) -> Result<Option<String>> {
    let choices = response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .ok_or_else(|| ChatBuscaError::Other("No choices in response".to_string()))?;

    let first_choice = choices
        .first()
        .ok_or_else(|| ChatBuscaError::Other("Empty choices array".to_string()))?;

    let message = first_choice
        .get("message")
        .ok_or_else(|| ChatBuscaError::Other("No message in response".to_string()))?;

    Ok(message
        .get("content")
        .and_then(|c| c.as_str())
        .map(|s| s.to_string()))
}

/// The upstream `error.message`, if the body has one.
pub fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}
