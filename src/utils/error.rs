use thiserror::Error;

#[derive(Error, Debug)]
pub enum UptimeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid {field} value '{value}': {reason}")]
    InvalidTimeValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input closed while waiting for {field}")]
    InputClosed { field: String },
}

impl UptimeError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            UptimeError::IoError(e) => format!("Terminal I/O failed: {}", e),
            UptimeError::SerializationError(e) => format!("Could not render the report: {}", e),
            UptimeError::ConfigParseError { message } => {
                format!("The configuration file could not be read: {}", message)
            }
            UptimeError::InvalidConfigValueError { field, value, .. } => {
                format!("Configuration value '{}' for '{}' is not usable", value, field)
            }
            UptimeError::InvalidTimeValue { field, value, .. } => {
                format!("'{}' is not a valid number of {}", value, field)
            }
            UptimeError::InputClosed { field } => {
                format!("No answer was given for {}", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            UptimeError::IoError(_) => "Run the calculator from an interactive terminal".to_string(),
            UptimeError::SerializationError(_) => "Retry without --json".to_string(),
            UptimeError::ConfigParseError { .. } => {
                "Check that the file exists and is valid TOML".to_string()
            }
            UptimeError::InvalidConfigValueError { reason, .. } => reason.clone(),
            UptimeError::InvalidTimeValue { reason, .. } => reason.clone(),
            UptimeError::InputClosed { .. } => {
                "Answer every prompt, or pass --hours, --minutes and --seconds".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, UptimeError>;
