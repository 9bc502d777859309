//! Error types for schema parsing, extraction and validation.

use thiserror::Error;

/// Error type for XML model schema parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}' on element '{element}'")]
    InvalidAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// Invalid schema structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attr(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

/// Error raised while extracting a descriptor from a declaration.
///
/// Every variant is fatal for the invocation; there is no fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The directive is attached to something that is not a class-like type.
    #[error(
        "generate_dto can only be applied to a class or a struct with named fields; '{name}' is not supported ({kind})"
    )]
    NotSupportedDeclarationKind {
        /// Declaration name.
        name: String,
        /// Declaration kind tag.
        kind: String,
    },

    /// The `nestedDTOs` argument is not an array literal of string literals.
    #[error("nestedDTOs on '{name}' must be an array of string literals, found `{argument}`")]
    InvalidNestedListFormat {
        /// Declaration name.
        name: String,
        /// Offending argument text.
        argument: String,
    },

    /// Two stored properties share a name.
    #[error("duplicate field '{field}' in '{name}'")]
    DuplicateField {
        /// Declaration name.
        name: String,
        /// Field name.
        field: String,
    },
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Extraction error.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Two models share a name.
    #[error("duplicate model definition: '{name}'")]
    DuplicateModel {
        /// Model name.
        name: String,
    },

    /// A nested name does not resolve to any model of the schema.
    #[error("model '{model}' lists nested type '{nested}' which has no transfer type in this schema")]
    UnresolvedNestedType {
        /// Model that declared the name.
        model: String,
        /// Unresolved nested type name.
        nested: String,
    },
}
