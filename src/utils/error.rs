use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid service {identifier:?}")]
    InvalidService { identifier: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{message}")]
    Transport { message: String },

    #[error("{message}")]
    Facade {
        message: String,
        code: Option<String>,
    },

    #[error("got invalid data from server (expected {expected} results, got {actual})")]
    Cardinality { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML rendering error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("{service}: {message}")]
    EntityError { service: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Protocol,
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

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::InvalidService { .. } | ClientError::EntityError { .. } => {
                ErrorCategory::Input
            }
            ClientError::ApiError(_) | ClientError::Transport { .. } => ErrorCategory::Network,
            ClientError::Facade { .. }
            | ClientError::Cardinality { .. }
            | ClientError::SerializationError(_) => ErrorCategory::Protocol,
            ClientError::ConfigValidationError { .. }
            | ClientError::InvalidConfigValueError { .. }
            | ClientError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ClientError::IoError(_) | ClientError::YamlError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            // 網路錯誤通常可以重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Protocol => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClientError::InvalidService { .. } => {
                "Service names are lower-case words joined by single hyphens"
            }
            ClientError::EntityError { .. } => "Check that the service is deployed",
            ClientError::ApiError(_) | ClientError::Transport { .. } => {
                "Check that the controller endpoint is reachable and try again"
            }
            ClientError::Facade { .. } => "Check that the controller supports this facade",
            ClientError::Cardinality { .. } | ClientError::SerializationError(_) => {
                "The controller returned an unexpected response; check client and controller versions"
            }
            ClientError::ConfigValidationError { .. }
            | ClientError::InvalidConfigValueError { .. }
            | ClientError::MissingConfigError { .. } => "Review the configuration file and CLI flags",
            ClientError::IoError(_) | ClientError::YamlError(_) => {
                "Check file permissions and available disk space"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid request: {}", self),
            ErrorCategory::Network => format!("Could not reach the controller: {}", self),
            ErrorCategory::Protocol => format!("Controller error: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
