use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    ConfigFileError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Simulation error: {message}")]
    SimulationError { message: String },

    #[error("Rendering error: {message}")]
    RenderError { message: String },
}

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Simulation,
    Rendering,
    Output,
}

impl SimError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SimError::ConfigError { .. }
            | SimError::InvalidConfigValueError { .. }
            | SimError::MissingConfigError { .. }
            | SimError::ConfigFileError(_) => ErrorCategory::Configuration,
            SimError::SimulationError { .. } => ErrorCategory::Simulation,
            SimError::RenderError { .. } => ErrorCategory::Rendering,
            SimError::IoError(_) | SimError::ImageError(_) | SimError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SimError::ConfigError { .. }
            | SimError::InvalidConfigValueError { .. }
            | SimError::MissingConfigError { .. }
            | SimError::ConfigFileError(_) => ErrorSeverity::Medium,
            SimError::SimulationError { .. } | SimError::RenderError { .. } => ErrorSeverity::High,
            SimError::IoError(_) | SimError::ImageError(_) | SimError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the CLI flags or the scene TOML file against the documented options"
            }
            ErrorCategory::Simulation => {
                "Try a shorter duration, a smaller drag/kick, or a finite initial state"
            }
            ErrorCategory::Rendering => "Check the canvas size and frame rate settings",
            ErrorCategory::Output => "Check that the output location exists and is writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SimError::InvalidConfigValueError { field, reason, .. } => {
                format!("The value given for '{}' is not usable: {}", field, reason)
            }
            SimError::MissingConfigError { field } => {
                format!("The required setting '{}' was not provided", field)
            }
            SimError::ConfigFileError(e) => format!("The scene file could not be parsed: {}", e),
            other => other.to_string(),
        }
    }
}
