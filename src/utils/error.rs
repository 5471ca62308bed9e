use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Not a recognizable date/time: '{input}'")]
    InvalidInstant { input: String },
}

impl FormatError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            FormatError::IoError(e) => format!("Could not read input: {}", e),
            FormatError::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            FormatError::ConfigError { message } => format!("Configuration problem: {}", message),
            FormatError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            FormatError::InvalidInstant { input } => {
                format!("'{}' is not a date/time this tool understands", input)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FormatError::IoError(_) => "Check that the file exists and is readable",
            FormatError::SerializationError(_) => "Check the JSON syntax of the input",
            FormatError::ConfigError { .. } | FormatError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or remove the offending setting to use the default"
            }
            FormatError::InvalidInstant { .. } => {
                "Use ISO-8601, e.g. 2024-06-15T12:00:00Z or 2024-06-15T14:00"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_instant_message_names_input() {
        let err = FormatError::InvalidInstant {
            input: "tomorrow-ish".to_string(),
        };
        assert!(err.to_string().contains("tomorrow-ish"));
        assert!(err.user_friendly_message().contains("tomorrow-ish"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: FormatError = io.into();
        assert!(matches!(err, FormatError::IoError(_)));
        assert_eq!(
            err.recovery_suggestion(),
            "Check that the file exists and is readable"
        );
    }

    #[test]
    fn test_config_errors_share_recovery_hint() {
        let parse = FormatError::ConfigError {
            message: "TOML parsing error".to_string(),
        };
        let value = FormatError::InvalidConfigValueError {
            field: "locale.timezone".to_string(),
            value: "Mars/Olympus".to_string(),
            reason: "Unknown IANA timezone".to_string(),
        };
        assert_eq!(parse.recovery_suggestion(), value.recovery_suggestion());
        assert!(value.user_friendly_message().contains("locale.timezone"));
    }
}
