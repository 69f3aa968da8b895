use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, SiteError>;

/// 聯絡表單送出失敗的分類（使用者可見）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// 送出前的前端檢查：必填欄位為空，不會發出請求
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Rate limited by contact endpoint")]
    RateLimited { detail: Option<String> },

    #[error("Contact endpoint rejected input: {}", .detail.as_deref().unwrap_or("no detail"))]
    InvalidInput { detail: Option<String> },

    /// 網路錯誤、逾時或非預期的狀態碼
    #[error("Contact submission failed: {reason}")]
    SubmissionFailed { status: Option<u16>, reason: String },
}

pub const RATE_LIMITED_MESSAGE: &str =
    "Too many messages sent. Please wait a while before sending another message.";
pub const INVALID_INPUT_MESSAGE: &str = "Please check your input and try again.";
pub const SUBMISSION_FAILED_MESSAGE: &str = "Failed to send your message. Please try again later.";

impl SubmissionError {
    /// 顯示給使用者的訊息
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::MissingField { field } => {
                format!("Please fill in your {} before sending.", field)
            }
            SubmissionError::RateLimited { .. } => RATE_LIMITED_MESSAGE.to_string(),
            SubmissionError::InvalidInput { detail } => match detail.as_deref() {
                Some(detail) if !detail.trim().is_empty() => detail.to_string(),
                _ => INVALID_INPUT_MESSAGE.to_string(),
            },
            SubmissionError::SubmissionFailed { .. } => SUBMISSION_FAILED_MESSAGE.to_string(),
        }
    }

    /// 是否已經送出網路請求
    pub fn reached_endpoint(&self) -> bool {
        !matches!(self, SubmissionError::MissingField { .. })
    }
}
