//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] dtogen_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] dtogen_schema::SchemaError),

    /// Descriptor extraction error.
    #[error(transparent)]
    Extract(#[from] dtogen_schema::ExtractError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },

    /// Type text that is not a valid Rust type.
    #[error("invalid type '{type_name}' in field '{field}'")]
    InvalidType {
        /// Type text.
        type_name: String,
        /// Field name.
        field: String,
    },

    /// Name that is not a valid Rust identifier.
    #[error("invalid identifier '{name}'")]
    InvalidIdentifier {
        /// Offending name.
        name: String,
    },

    /// Runtime crate path that is not a valid Rust path.
    #[error("invalid runtime path '{path}'")]
    InvalidRuntimePath {
        /// Offending path text.
        path: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}
