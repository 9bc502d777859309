//! Identifier, type and path helpers shared by the emitters.

use crate::error::CodegenError;
use dtogen_schema::ClassifiedField;
use proc_macro2::Ident;

/// Default path of the runtime crate that defines the conversion traits.
pub const DEFAULT_RUNTIME_PATH: &str = "::dtogen";

/// Options that shape emitted code without changing its semantics.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Path of the crate providing `Dto` and `DtoConvertible`.
    pub runtime: syn::Path,
    /// Visibility of the emitted transfer type.
    pub visibility: syn::Visibility,
}

impl EmitOptions {
    /// Creates options for the given runtime path with `pub` visibility.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidRuntimePath` if `path` is not a Rust path.
    pub fn new(path: &str) -> Result<Self, CodegenError> {
        Ok(Self {
            runtime: runtime_path(path)?,
            visibility: syn::parse_quote!(pub),
        })
    }

    /// Sets the visibility of the emitted transfer type.
    #[must_use]
    pub fn with_visibility(mut self, visibility: syn::Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            runtime: syn::parse_quote!(::dtogen),
            visibility: syn::parse_quote!(pub),
        }
    }
}

/// Parses a runtime crate path such as `::dtogen` or `crate::runtime`.
///
/// # Errors
/// Returns `CodegenError::InvalidRuntimePath` if the text does not parse.
pub fn runtime_path(text: &str) -> Result<syn::Path, CodegenError> {
    syn::parse_str(text).map_err(|_| CodegenError::InvalidRuntimePath {
        path: text.to_string(),
    })
}

/// Parses a type or field name into an identifier.
///
/// Raw identifiers (`r#type`) are accepted; keywords are not.
///
/// # Errors
/// Returns `CodegenError::InvalidIdentifier` if the name does not parse.
pub fn ident(name: &str) -> Result<Ident, CodegenError> {
    syn::parse_str(name).map_err(|_| CodegenError::InvalidIdentifier {
        name: name.to_string(),
    })
}

/// Parses a field's type text into a Rust type.
///
/// # Errors
/// Returns `CodegenError::InvalidType` if the text does not parse.
pub fn parse_type(field: &str, text: &str) -> Result<syn::Type, CodegenError> {
    syn::parse_str(text).map_err(|_| CodegenError::InvalidType {
        type_name: text.to_string(),
        field: field.to_string(),
    })
}

/// Returns the identifier and transfer-side type of a classified field.
///
/// # Errors
/// Returns an error if the name or the type text does not parse.
pub fn transfer_field(field: &ClassifiedField) -> Result<(Ident, syn::Type), CodegenError> {
    let name = ident(field.name())?;
    let ty = parse_type(field.name(), &field.transfer_rust_type())?;
    Ok((name, ty))
}
