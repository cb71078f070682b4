use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Telegram request failed: {0}")]
    TelegramError(#[from] teloxide::RequestError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Could not parse Scryfall API response {response}")]
    UnexpectedResponse { response: serde_json::Value },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RelayError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// 回覆給聊天室的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            RelayError::UnexpectedResponse { .. } => self.to_string(),
            RelayError::ApiError(e) if e.is_timeout() => {
                "Scryfall did not answer in time, try again later".to_string()
            }
            other => format!("Bot encountered error {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
