use thiserror::Error;

#[derive(Error, Debug)]
pub enum PassesError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown command: {input}")]
    UnknownCommand { input: String },

    #[error("Input line {line} is not valid UTF-8")]
    InvalidEncoding { line: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PassesError {
    pub fn invalid_input(field: &str, reason: &str) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. }
            | Self::UnknownCommand { .. }
            | Self::InvalidEncoding { .. } => ErrorCategory::Input,
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) => ErrorCategory::Serialization,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // operator mistakes are recovered at the prompt
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Serialization => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { field, .. } if field == "customer_name" => {
                "Please enter a customer name".to_string()
            }
            Self::InvalidInput { field, reason } => format!("Invalid {}: {}", field, reason),
            Self::UnknownCommand { input } => format!("Unknown command '{}'", input),
            Self::InvalidEncoding { line } => format!("Line {} could not be read as text", line),
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(e) => format!("Could not render the report: {}", e),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidInput { field, .. } if field == "file_name" => {
                "Use a plain file name inside the output directory"
            }
            Self::InvalidInput { .. } => "Type a non-blank name after the command",
            Self::UnknownCommand { .. } => "Type 'help' to list the available commands",
            Self::InvalidEncoding { .. } => "Save the script as UTF-8 text",
            Self::IoError(_) => "Check that the output directory exists and is writable",
            Self::SerializationError(_) => "Retry with --format text",
            Self::ConfigValidationError { .. } => "Check the TOML syntax of the config file",
            Self::InvalidConfigValueError { .. } => "Fix the value in the config file or on the command line",
        }
    }
}

pub type Result<T> = std::result::Result<T, PassesError>;
