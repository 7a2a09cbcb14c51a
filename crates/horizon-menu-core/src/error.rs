//! Error types for Horizon Menu.
//!
//! Only construction can fail. Evaluating an item against a selection never
//! returns an error; a disabled item is a presentation state, not a failure.

/// A specialized Result type for menu construction.
pub type Result<T> = std::result::Result<T, MenuError>;

/// A required field was missing or empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid '{field}': {message}")]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human readable description.
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for a field.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// The error raised for an absent or blank item name.
    pub fn missing_name() -> Self {
        Self::new("name", "a non-empty name is required")
    }
}

/// A field was supplied with a value outside its accepted domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("bad configuration for '{field}': {message}")]
pub struct ConfigurationError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human readable description.
    pub message: String,
}

impl ConfigurationError {
    /// Create a configuration error for a field.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The main error type for menu construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    /// A required field was missing or empty.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A field carried an unsupported value.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A menu definition could not be parsed.
    #[error("failed to parse {format} menu definition: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// A menu definition could not be written out.
    #[error("failed to serialize {format} menu definition: {message}")]
    Serialize {
        format: &'static str,
        message: String,
    },

    /// An index path did not address an item.
    #[error("no menu item at path {path:?}")]
    InvalidPath { path: Vec<usize> },
}

impl MenuError {
    /// Create a parse error.
    pub fn parse(format: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            message: message.into(),
        }
    }

    /// Create a serialize error.
    pub fn serialize(format: &'static str, message: impl Into<String>) -> Self {
        Self::Serialize {
            format,
            message: message.into(),
        }
    }

    /// Create an invalid path error.
    pub fn invalid_path(path: &[usize]) -> Self {
        Self::InvalidPath {
            path: path.to_vec(),
        }
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
