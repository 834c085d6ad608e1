use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid command '{line}': {reason}")]
    InvalidCommandError { line: String, reason: String },
}

impl DeskError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DeskError::IoError(e) => format!("Could not read input: {}", e),
            DeskError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            DeskError::SerializationError(_) => "Failed to encode output".to_string(),
            DeskError::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
            DeskError::InvalidCommandError { line, .. } => {
                format!("Unrecognized command: {}", line)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DeskError::IoError(_) => "Check that the file exists and is readable",
            DeskError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            DeskError::SerializationError(_) => "Retry without --json",
            DeskError::InvalidConfigValueError { .. } => {
                "Review the [desk] and [[agents]] sections of the configuration"
            }
            DeskError::InvalidCommandError { .. } => "Type 'help' to list the available commands",
        }
    }
}

pub type Result<T> = std::result::Result<T, DeskError>;
