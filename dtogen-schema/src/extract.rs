//! Type descriptor extraction.
//!
//! Turns a raw [`Declaration`] and its directive arguments into an
//! [`ExtractedType`], rejecting unsupported declaration kinds and malformed
//! `nestedDTOs` lists.

use crate::declaration::{ArgExpr, Declaration, DirectiveArgument, Member};
use crate::descriptor::{ExtractedType, FieldDescriptor, NestedNameSet, TypeDescriptor};
use crate::error::ExtractError;
use std::collections::HashSet;

/// Labels accepted for the nested type list (schema spelling, attribute spelling).
pub const NESTED_DTOS_LABELS: [&str; 2] = ["nestedDTOs", "nested_dtos"];

/// Extracts a type descriptor from a declaration and its directive arguments.
///
/// # Arguments
/// * `decl` - Raw declaration node
/// * `args` - Directive arguments in source order
///
/// # Errors
/// Returns `ExtractError::NotSupportedDeclarationKind` if `decl` is not a class
/// or a struct with named fields, `ExtractError::InvalidNestedListFormat` if
/// the `nestedDTOs` argument is not an array literal of string literals, and
/// `ExtractError::DuplicateField` if two stored properties share a name.
pub fn extract(
    decl: &Declaration,
    args: &[DirectiveArgument],
) -> Result<ExtractedType, ExtractError> {
    if !decl.kind.is_class_like() {
        return Err(ExtractError::NotSupportedDeclarationKind {
            name: decl.name.clone(),
            kind: decl.kind.to_string(),
        });
    }

    let nested = extract_nested_dtos(&decl.name, args)?;
    let fields = collect_fields(decl)?;

    tracing::debug!(
        model = %decl.name,
        fields = fields.len(),
        nested = nested.len(),
        "extracted type descriptor"
    );

    Ok(ExtractedType {
        descriptor: TypeDescriptor::new(decl.name.clone(), fields),
        nested,
    })
}

/// Collects the `nestedDTOs` names from the directive arguments.
///
/// Arguments with other labels are ignored. A missing argument yields an
/// empty set; repeated arguments are concatenated in order.
///
/// # Errors
/// Returns `ExtractError::InvalidNestedListFormat` if the argument is present
/// but is not an array literal whose elements are all string literals.
pub fn extract_nested_dtos(
    name: &str,
    args: &[DirectiveArgument],
) -> Result<NestedNameSet, ExtractError> {
    let mut nested = NestedNameSet::new();

    for arg in args {
        let is_nested = arg
            .label
            .as_deref()
            .is_some_and(|label| NESTED_DTOS_LABELS.contains(&label));
        if !is_nested {
            continue;
        }

        let ArgExpr::Array(elements) = &arg.value else {
            return Err(invalid_nested(name, &arg.value));
        };

        for element in elements {
            match element {
                ArgExpr::Str(value) => nested.insert(value.clone()),
                other => return Err(invalid_nested(name, other)),
            }
        }
    }

    Ok(nested)
}

fn invalid_nested(name: &str, argument: &ArgExpr) -> ExtractError {
    ExtractError::InvalidNestedListFormat {
        name: name.to_string(),
        argument: argument.to_string(),
    }
}

/// Walks stored properties with an explicit type annotation, in order.
fn collect_fields(decl: &Declaration) -> Result<Vec<FieldDescriptor>, ExtractError> {
    let mut seen = HashSet::new();
    let mut fields = Vec::new();

    for member in &decl.members {
        let Member::Stored {
            name,
            type_annotation: Some(declared_type),
        } = member
        else {
            tracing::trace!(model = %decl.name, member = member.name(), "skipping member");
            continue;
        };

        if !seen.insert(name.as_str()) {
            return Err(ExtractError::DuplicateField {
                name: decl.name.clone(),
                field: name.clone(),
            });
        }

        fields.push(FieldDescriptor::new(name.clone(), declared_type.clone()));
    }

    Ok(fields)
}
