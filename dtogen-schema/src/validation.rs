//! Schema validation utilities.
//!
//! This module provides checks that only make sense across a whole schema:
//! unique model names and resolution of nested type names.

use crate::declaration::Schema;
use crate::descriptor::ExtractedType;
use crate::error::SchemaError;
use std::collections::HashSet;

/// Validates a parsed schema for correctness.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the issue.
///
/// # Errors
/// Returns `SchemaError::DuplicateModel` if two models share a name.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();

    for model in &schema.models {
        if !seen_names.insert(model.declaration.name.as_str()) {
            return Err(SchemaError::DuplicateModel {
                name: model.declaration.name.clone(),
            });
        }
    }

    Ok(())
}

/// A nested name that does not resolve to any extracted model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedNested {
    /// Model that declared the name.
    pub model: String,
    /// Unresolved nested type name.
    pub nested: String,
}

impl From<UnresolvedNested> for SchemaError {
    fn from(value: UnresolvedNested) -> Self {
        Self::UnresolvedNestedType {
            model: value.model,
            nested: value.nested,
        }
    }
}

/// Finds nested names that no extracted model provides a transfer type for.
///
/// Results are ordered by model, then by the model's nested name order.
#[must_use]
pub fn find_unresolved_nested(models: &[ExtractedType]) -> Vec<UnresolvedNested> {
    let known: HashSet<&str> = models
        .iter()
        .map(|m| m.descriptor.name.as_str())
        .collect();

    models
        .iter()
        .flat_map(|model| {
            model
                .nested
                .iter()
                .filter(|name| !known.contains(name))
                .map(|name| UnresolvedNested {
                    model: model.descriptor.name.clone(),
                    nested: name.to_string(),
                })
        })
        .collect()
}
