use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Missing credential: environment variable {var} is not set")]
    MissingCredential { var: String },

    #[error("No usable text in response from {model}")]
    EmptyUpstreamResponse { model: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Upstream API returned {status}: {message}")]
    UpstreamStatusError { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Upstream,
    Storage,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度決定的程序退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::MissingCredential { .. }
            | EtlError::ConfigError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            EtlError::ApiError(_) => ErrorCategory::Network,
            EtlError::EmptyUpstreamResponse { .. } | EtlError::UpstreamStatusError { .. } => {
                ErrorCategory::Upstream
            }
            EtlError::IoError(_) => ErrorCategory::Storage,
            EtlError::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Network | ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::MissingCredential { var } => {
                format!("Set {} in the environment or in a .env file", var)
            }
            EtlError::EmptyUpstreamResponse { .. } => {
                "Run again later; the model returned no text for the prompt".to_string()
            }
            EtlError::ApiError(_) => {
                "Check network connectivity and the --api-base setting".to_string()
            }
            EtlError::UpstreamStatusError { status, .. } => match *status {
                400 | 401 | 403 => "Check that the API key is valid and enabled".to_string(),
                404 => "Check the model name and API base URL".to_string(),
                429 => "Quota exceeded, wait before running again".to_string(),
                _ => "The upstream service failed, try again later".to_string(),
            },
            EtlError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            EtlError::SerializationError(_) => {
                "The upstream response was not the expected JSON shape".to_string()
            }
            EtlError::ConfigError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::ConfigValidationError { .. } => {
                "Review the command line flags or the TOML configuration file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::MissingCredential { var } => format!("ERROR: Missing {}", var),
            EtlError::EmptyUpstreamResponse { .. } => {
                "ERROR: No response from the generative API".to_string()
            }
            EtlError::UpstreamStatusError { status, message } => {
                format!("ERROR: API request rejected ({}): {}", status, message)
            }
            other => format!("ERROR: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

/// 記錄錯誤、輸出使用者訊息，並以嚴重程度對應的退出碼結束程序
pub fn exit_with_error(e: &EtlError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_is_configuration_error() {
        let err = EtlError::MissingCredential {
            var: "GOOGLE_API_KEY".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity().exit_code(), 1);
        assert!(err.user_friendly_message().contains("GOOGLE_API_KEY"));
        assert!(err.recovery_suggestion().contains(".env"));
    }

    #[test]
    fn test_upstream_errors_are_medium_severity() {
        let empty = EtlError::EmptyUpstreamResponse {
            model: "gemini-pro".to_string(),
        };
        let status = EtlError::UpstreamStatusError {
            status: 429,
            message: "quota".to_string(),
        };
        assert_eq!(empty.severity(), ErrorSeverity::Medium);
        assert_eq!(status.severity().exit_code(), 2);
        assert!(status.recovery_suggestion().contains("Quota"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = EtlError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity().exit_code(), 3);
    }
}
