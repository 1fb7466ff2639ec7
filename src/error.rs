use std::fmt;

#[derive(Debug)]
pub enum ChatBuscaError {
    /// The chat completion upstream answered with a failure status.
    ApiError {
        status: u16,
        message: String,
    },
    ConfigError(String),
    SearchError(String),
    NetworkError(reqwest::Error),
    Timeout,
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    YamlError(serde_yaml::Error),
    Other(String),
}

impl fmt::Display for ChatBuscaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatBuscaError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            ChatBuscaError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ChatBuscaError::SearchError(msg) => write!(f, "Search error: {}", msg),
            ChatBuscaError::NetworkError(e) => write!(f, "Network error: {}", e),
            ChatBuscaError::Timeout => write!(f, "Request timeout"),
            ChatBuscaError::IoError(e) => write!(f, "IO error: {}", e),
            ChatBuscaError::JsonError(e) => write!(f, "JSON error: {}", e),
            ChatBuscaError::YamlError(e) => write!(f, "YAML error: {}", e),
            ChatBuscaError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ChatBuscaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChatBuscaError::NetworkError(e) => Some(e),
            ChatBuscaError::IoError(e) => Some(e),
            ChatBuscaError::JsonError(e) => Some(e),
            ChatBuscaError::YamlError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ChatBuscaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ChatBuscaError::Timeout
        } else {
            ChatBuscaError::NetworkError(err)
        }
    }
}

impl From<std::io::Error> for ChatBuscaError {
    fn from(err: std::io::Error) -> Self {
        ChatBuscaError::IoError(err)
    }
}

impl From<serde_json::Error> for ChatBuscaError {
    fn from(err: serde_json::Error) -> Self {
        ChatBuscaError::JsonError(err)
    }
}

impl From<serde_yaml::Error> for ChatBuscaError {
    fn from(err: serde_yaml::Error) -> Self {
        ChatBuscaError::YamlError(err)
    }
}

impl From<anyhow::Error> for ChatBuscaError {
    fn from(err: anyhow::Error) -> Self {
        ChatBuscaError::Other(format!("{:#}", err))
    }
}

impl From<String> for ChatBuscaError {
    fn from(msg: String) -> Self {
        ChatBuscaError::Other(msg)
    }
}

impl From<&str> for ChatBuscaError {
    fn from(msg: &str) -> Self {
        ChatBuscaError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChatBuscaError>;
