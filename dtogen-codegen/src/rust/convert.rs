//! Conversion-code synthesis.
//!
//! Produces one field initializer (`name: expression`) per classified field
//! and direction. The shape of the field decides whether the value is copied
//! or routed through the conversion traits:
//!
//! | shape           | expression                                            |
//! |-----------------|-------------------------------------------------------|
//! | `Scalar`        | `src.name.clone()`                                    |
//! | `Direct`        | `CONVERT(&src.name)`                                  |
//! | `Optional`      | `src.name.as_ref().map(CONVERT)`                      |
//! | `Array`         | `src.name.iter().map(CONVERT).collect()`              |
//! | `OptionalArray` | `src.name.as_ref().map(\|e\| e.iter().map(CONVERT).collect())` |
//!
//! `CONVERT` is `DtoConvertible::to_dto` towards the transfer type and
//! `Dto::to_model` back, always spelled with the runtime crate path so the
//! generated code does not depend on what the caller has imported.

use crate::error::CodegenError;
use crate::rust::types::ident;
use dtogen_schema::{ClassifiedField, Shape};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Model value to transfer value; reads from `model`.
    ToTransfer,
    /// Transfer value to model value; reads from `dto`.
    ToModel,
}

impl Direction {
    /// Name of the binding the initializers read from.
    #[must_use]
    pub const fn source(&self) -> &'static str {
        match self {
            Self::ToTransfer => "model",
            Self::ToModel => "dto",
        }
    }

    fn convert_fn(self, runtime: &syn::Path) -> TokenStream {
        match self {
            Self::ToTransfer => quote! { #runtime::DtoConvertible::to_dto },
            Self::ToModel => quote! { #runtime::Dto::to_model },
        }
    }
}

/// Synthesizes the initializer for one field.
///
/// # Arguments
/// * `field` - Classified field
/// * `direction` - Conversion direction
/// * `runtime` - Path of the crate providing the conversion traits
///
/// # Errors
/// Returns `CodegenError::InvalidIdentifier` if the field name is not an
/// identifier.
pub fn synthesize(
    field: &ClassifiedField,
    direction: Direction,
    runtime: &syn::Path,
) -> Result<TokenStream, CodegenError> {
    let name = ident(field.name())?;
    let source = format_ident!("{}", direction.source());
    let convert = direction.convert_fn(runtime);

    let value = match field.shape {
        Shape::Scalar => quote! { #source.#name.clone() },
        Shape::Direct => quote! { #convert(&#source.#name) },
        Shape::Optional => quote! { #source.#name.as_ref().map(#convert) },
        Shape::Array => quote! { #source.#name.iter().map(#convert).collect() },
        Shape::OptionalArray => quote! {
            #source.#name.as_ref().map(|elements| elements.iter().map(#convert).collect())
        },
    };

    Ok(quote! { #name: #value })
}

/// Synthesizes the initializers for all fields, in declaration order.
///
/// # Errors
/// Returns an error if any field name is not an identifier.
pub fn synthesize_all(
    fields: &[ClassifiedField],
    direction: Direction,
    runtime: &syn::Path,
) -> Result<Vec<TokenStream>, CodegenError> {
    fields
        .iter()
        .map(|field| synthesize(field, direction, runtime))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtogen_schema::{FieldDescriptor, NestedNameSet, classify};

    fn field(name: &str, declared: &str) -> ClassifiedField {
        let nested: NestedNameSet = ["Order"].into_iter().collect();
        classify(&FieldDescriptor::new(name, declared), &nested)
    }

    fn runtime() -> syn::Path {
        syn::parse_quote!(::dtogen)
    }

    fn to_transfer(name: &str, declared: &str) -> String {
        synthesize(&field(name, declared), Direction::ToTransfer, &runtime())
            .expect("Failed to synthesize")
            .to_string()
    }

    fn to_model(name: &str, declared: &str) -> String {
        synthesize(&field(name, declared), Direction::ToModel, &runtime())
            .expect("Failed to synthesize")
            .to_string()
    }

    #[test]
    fn test_scalar_copies_value() {
        assert_eq!(
            to_transfer("name", "String"),
            quote! { name: model.name.clone() }.to_string()
        );
        assert_eq!(
            to_model("name", "String"),
            quote! { name: dto.name.clone() }.to_string()
        );
    }

    #[test]
    fn test_direct_converts() {
        assert_eq!(
            to_transfer("order", "Order"),
            quote! { order: ::dtogen::DtoConvertible::to_dto(&model.order) }.to_string()
        );
        assert_eq!(
            to_model("order", "Order"),
            quote! { order: ::dtogen::Dto::to_model(&dto.order) }.to_string()
        );
    }

    #[test]
    fn test_optional_maps_present_value() {
        assert_eq!(
            to_transfer("order", "Option<Order>"),
            quote! { order: model.order.as_ref().map(::dtogen::DtoConvertible::to_dto) }
                .to_string()
        );
    }

    #[test]
    fn test_array_maps_elements() {
        assert_eq!(
            to_model("orders", "[Order]"),
            quote! { orders: dto.orders.iter().map(::dtogen::Dto::to_model).collect() }
                .to_string()
        );
    }

    #[test]
    fn test_optional_array_maps_inside_option() {
        assert_eq!(
            to_transfer("orders", "[Order]?"),
            quote! {
                orders: model.orders.as_ref().map(|elements| elements
                    .iter()
                    .map(::dtogen::DtoConvertible::to_dto)
                    .collect())
            }
            .to_string()
        );
    }

    #[test]
    fn test_custom_runtime_path() {
        let runtime: syn::Path = syn::parse_quote!(crate::runtime);
        let tokens = synthesize(&field("order", "Order"), Direction::ToModel, &runtime)
            .expect("Failed to synthesize");
        assert_eq!(
            tokens.to_string(),
            quote! { order: crate::runtime::Dto::to_model(&dto.order) }.to_string()
        );
    }

    #[test]
    fn test_synthesize_all_preserves_order() {
        let fields = [field("b", "u8"), field("a", "Order")];
        let inits = synthesize_all(&fields, Direction::ToTransfer, &runtime())
            .expect("Failed to synthesize");
        assert_eq!(inits.len(), 2);
        assert!(inits[0].to_string().starts_with("b :"));
        assert!(inits[1].to_string().starts_with("a :"));
    }

    #[test]
    fn test_invalid_field_name() {
        let classified = field("not valid", "u8");
        assert!(matches!(
            synthesize(&classified, Direction::ToModel, &runtime()),
            Err(CodegenError::InvalidIdentifier { .. })
        ));
    }
}
