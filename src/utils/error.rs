use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{url} answered with HTTP status {status}")]
    HttpStatusError { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Input stream closed")]
    InputClosed,

    #[error("Impossible result {result} for {player}: {chips} chips leaves less than the {required} required")]
    ImpossibleResult {
        player: String,
        chips: i64,
        result: i64,
        required: i64,
    },

    #[error("Chip total mismatch: expected {expected}, players hold {actual}")]
    ChipTotalMismatch { expected: i64, actual: i64 },

    #[error("Expected {expected} results, got {actual}")]
    ResultCountMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Game,
    Configuration,
    Io,
    Network,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) | Self::HttpStatusError { .. } => ErrorCategory::Network,
            Self::IoError(_) | Self::InputClosed => ErrorCategory::Io,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::InvalidInput { .. } => ErrorCategory::Input,
            Self::ImpossibleResult { .. }
            | Self::ChipTotalMismatch { .. }
            | Self::ResultCountMismatch { .. } => ErrorCategory::Game,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Game => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Whether the console should re-prompt instead of giving up.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Input | ErrorCategory::Game
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::HttpError(_) => "Check the source URL and your network connection",
            Self::HttpStatusError { .. } => {
                "Check that the source URL points to a plain-text document"
            }
            Self::IoError(_) => "Check that the file exists and is readable/writable",
            Self::ConfigValidationError { .. } => "Check the TOML syntax of the configuration file",
            Self::InvalidConfigValueError { .. } => {
                "Correct the value in the CLI flags or config file"
            }
            Self::InvalidInput { .. } => "Enter the value again",
            Self::InputClosed => "Run the program interactively with stdin attached",
            Self::ImpossibleResult { .. } => "Every player needs one chip per remaining round",
            Self::ChipTotalMismatch { .. } | Self::ResultCountMismatch { .. } => {
                "Results for a round must sum to zero"
            }
        }
    }

    /// Text shown to the player after the `FEL: ` prefix.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::HttpError(_) | Self::HttpStatusError { .. } | Self::IoError(_) => {
                "Ett fel uppstod".to_string()
            }
            Self::ConfigValidationError { field, message } => {
                format!("Felaktig konfiguration ({}): {}", field, message)
            }
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("Ogiltigt värde '{}' för {}: {}", value, field, reason)
            }
            Self::InvalidInput { message } => message.clone(),
            Self::InputClosed => "Inmatningen avslutades".to_string(),
            Self::ImpossibleResult { .. } => "Resultatet du gav är inte möjligt!".to_string(),
            Self::ChipTotalMismatch { .. } | Self::ResultCountMismatch { .. } => {
                "Spelarnas resultat stämmer inte ihop med det totala antalet spelmärken!"
                    .to_string()
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_errors_are_retryable() {
        let err = AppError::ImpossibleResult {
            player: "Ingvar".to_string(),
            chips: 10,
            result: -10,
            required: 3,
        };
        assert!(err.is_retryable());
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "Resultatet du gav är inte möjligt!");
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        let config = AppError::InvalidConfigValueError {
            field: "game.players".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(config.exit_code(), 1);
        assert!(!config.is_retryable());

        let closed = AppError::InputClosed;
        assert_eq!(closed.category(), ErrorCategory::Io);
        assert_eq!(closed.exit_code(), 3);
    }
}
