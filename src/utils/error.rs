use thiserror::Error;

#[derive(Error, Debug)]
pub enum LendingError {
    #[error("Age cannot be negative.")]
    NegativeAge,

    #[error("Cannot order student loan if customer is not a student.")]
    NotAStudent,

    #[error("Promotion not found: {name}")]
    PromotionNotFound { name: String },

    #[error("{store} store error: {message}")]
    StoreError { store: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Date parse error: {0}")]
    DateParseError(#[from] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, LendingError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Business,
    Store,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LendingError {
    /// Rule violations raised by the domain services themselves.
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, LendingError::NegativeAge | LendingError::NotAStudent)
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            LendingError::NegativeAge | LendingError::NotAStudent => ErrorCategory::Business,
            LendingError::PromotionNotFound { .. } | LendingError::StoreError { .. } => {
                ErrorCategory::Store
            }
            LendingError::ConfigError { .. }
            | LendingError::InvalidConfigValueError { .. }
            | LendingError::MissingConfigError { .. }
            | LendingError::DateParseError(_) => ErrorCategory::Configuration,
            LendingError::IoError(_) | LendingError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Business => ErrorSeverity::Low,
            ErrorCategory::Store => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LendingError::NegativeAge => "Check that the birth date is not in the future".to_string(),
            LendingError::NotAStudent => {
                "Mark the customer as a student (--student) or choose another loan type".to_string()
            }
            LendingError::PromotionNotFound { name } => {
                format!("Add a [[promotions]] entry named '{}' to the configuration", name)
            }
            LendingError::StoreError { store, .. } => {
                format!("Check that the {} store is reachable and try again", store)
            }
            LendingError::MissingConfigError { field } if field == "config" => {
                "Pass --config with a file that lists the promotions".to_string()
            }
            LendingError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration file", field)
            }
            LendingError::ConfigError { .. } | LendingError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again".to_string()
            }
            LendingError::DateParseError(_) => "Dates must be written as YYYY-MM-DD".to_string(),
            LendingError::IoError(_) => "Check file paths and permissions".to_string(),
            LendingError::SerializationError(_) => "Report this as a bug".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Business => format!("Request rejected: {}", self),
            ErrorCategory::Store => format!("Store unavailable: {}", self),
            ErrorCategory::Configuration => format!("Invalid input: {}", self),
            ErrorCategory::System => format!("Unexpected failure: {}", self),
        }
    }
}
