use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("There must be more than 2 participants, found {count}")]
    TooFewParticipants { count: usize },

    #[error("Too many partnerships: {count} given, maximum allowed is {max}")]
    TooManyPartnerships { count: usize, max: usize },

    #[error("Partner '{name}' not found in the participant list")]
    UnknownPartner { name: String },

    #[error("Participant '{name}' appears in more than one partnership")]
    OverlappingPartnership { name: String },

    #[error("Participant '{name}' cannot be partnered with themselves")]
    SelfPartnership { name: String },

    #[error("No valid cycle found after {attempts} attempts")]
    ConstraintUnsatisfiable { attempts: usize },

    #[error("Malformed partner pair on line {line}: '{content}'")]
    MalformedPartnerLine { line: u64, content: String },

    #[error("File '{path}' is not valid UTF-8 (first bad byte at offset {offset})")]
    InvalidEncoding { path: String, offset: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Validation,
    Constraint,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Retrying with another seed or cap may succeed.
    Medium,
    /// The input has to be fixed.
    High,
    Critical,
}

impl SantaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SantaError::TooFewParticipants { .. }
            | SantaError::TooManyPartnerships { .. }
            | SantaError::UnknownPartner { .. }
            | SantaError::OverlappingPartnership { .. }
            | SantaError::SelfPartnership { .. } => ErrorCategory::Validation,
            SantaError::ConstraintUnsatisfiable { .. } => ErrorCategory::Constraint,
            SantaError::MalformedPartnerLine { .. }
            | SantaError::InvalidEncoding { .. }
            | SantaError::CsvError(_) => ErrorCategory::Input,
            SantaError::ConfigError { .. } | SantaError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SantaError::IoError(_) | SantaError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Constraint => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Validation | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => format!("Input validation error: {}", self),
            ErrorCategory::Constraint => format!("Could not draw a valid cycle: {}", self),
            ErrorCategory::Input => format!("Could not read the input files: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SantaError::TooFewParticipants { .. } => {
                "Add at least three distinct names to the participants file".to_string()
            }
            SantaError::TooManyPartnerships { max, .. } => format!(
                "Remove partnerships until there are at most {} pairs",
                max
            ),
            SantaError::UnknownPartner { name } => format!(
                "Add '{}' to the participants file or fix the spelling in the partners file",
                name
            ),
            SantaError::OverlappingPartnership { name } => format!(
                "Keep '{}' in a single partnership; each person may have at most one partner",
                name
            ),
            SantaError::SelfPartnership { name } => {
                format!("Remove the line pairing '{}' with themselves", name)
            }
            SantaError::ConstraintUnsatisfiable { .. } => {
                "Add more participants or remove partnerships; three people with a couple cannot form a cycle"
                    .to_string()
            }
            SantaError::MalformedPartnerLine { .. } => {
                "Write each partnership as two names separated by a single comma".to_string()
            }
            SantaError::InvalidEncoding { path, .. } => {
                format!("Re-save '{}' with UTF-8 encoding", path)
            }
            SantaError::CsvError(_) => "Check the partners file encoding and format".to_string(),
            SantaError::IoError(_) => "Check that the file exists and is readable".to_string(),
            SantaError::SerializationError(_) => "Try the text output format".to_string(),
            SantaError::ConfigError { .. } | SantaError::InvalidConfigValueError { .. } => {
                "Check the command line flags and the TOML configuration file".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;
