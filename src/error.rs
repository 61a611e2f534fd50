use std::fmt;

/// Result type for yop operations
pub type Result<T> = std::result::Result<T, YopError>;

/// Main error type for the yop library
#[derive(Debug, Clone)]
pub enum YopError {
    /// Invalid dimensions for operations
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// IO errors (snapshot, score log, config file)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),

    /// Sampling from a buffer with nothing in it
    EmptyBuffer(String),

    /// Action index outside the four directions
    InvalidAction {
        action: usize,
        max_actions: usize,
    },
}

impl fmt::Display for YopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YopError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            YopError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            YopError::IoError(msg) => write!(f, "IO error: {}", msg),
            YopError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            YopError::EmptyBuffer(msg) => write!(f, "Empty buffer: {}", msg),
            YopError::InvalidAction { action, max_actions } => {
                write!(f, "Invalid action {}: must be less than {}", action, max_actions)
            }
        }
    }
}

impl std::error::Error for YopError {}

impl From<std::io::Error> for YopError {
    fn from(err: std::io::Error) -> Self {
        YopError::IoError(err.to_string())
    }
}

impl From<bincode::Error> for YopError {
    fn from(err: bincode::Error) -> Self {
        YopError::SerializationError(err.to_string())
    }
}

impl From<serde_json::Error> for YopError {
    fn from(err: serde_json::Error) -> Self {
        YopError::SerializationError(err.to_string())
    }
}

impl YopError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        YopError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        YopError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
