//! Transfer type emission.
//!
//! Emits, for one model, the `<Name>DTO` struct, its full-argument
//! constructor and its `Dto` conformance.

use crate::error::CodegenError;
use crate::rust::convert::{Direction, synthesize_all};
use crate::rust::types::{EmitOptions, ident, transfer_field};
use dtogen_schema::{ClassifiedField, TypeDescriptor};
use proc_macro2::TokenStream;
use quote::quote;

/// Emits the transfer type declaration for a model.
///
/// Field order, constructor parameter order and initializer order all follow
/// the declaration order of `fields`. A model with no fields yields an empty
/// struct with a zero-argument constructor.
///
/// # Arguments
/// * `descriptor` - Model descriptor
/// * `fields` - Classified fields of the model, in declaration order
/// * `options` - Runtime path and visibility
///
/// # Errors
/// Returns an error if a name or a type does not parse as Rust.
pub fn emit_transfer_type(
    descriptor: &TypeDescriptor,
    fields: &[ClassifiedField],
    options: &EmitOptions,
) -> Result<TokenStream, CodegenError> {
    let model_name = ident(&descriptor.name)?;
    let dto_name = ident(&descriptor.dto_name())?;
    let runtime = &options.runtime;
    let vis = &options.visibility;

    let (names, types): (Vec<_>, Vec<_>) = fields
        .iter()
        .map(transfer_field)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .unzip();

    let from_model = synthesize_all(fields, Direction::ToTransfer, runtime)?;

    let doc = format!("Transfer representation of [`{}`].", descriptor.name);

    Ok(quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, PartialEq)]
        #vis struct #dto_name {
            #(pub #names: #types,)*
        }

        impl #dto_name {
            /// Creates a transfer value from all of its fields.
            #[allow(clippy::too_many_arguments, clippy::new_without_default)]
            #[must_use]
            pub fn new(#(#names: #types),*) -> Self {
                Self {
                    #(#names,)*
                }
            }
        }

        impl #runtime::Dto for #dto_name {
            type Model = #model_name;

            #[allow(unused_variables, clippy::clone_on_copy)]
            fn from_model(model: &#model_name) -> Self {
                Self {
                    #(#from_model,)*
                }
            }

            fn to_model(&self) -> #model_name {
                #model_name::from_dto(self)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtogen_schema::{FieldDescriptor, NestedNameSet, classify_fields};

    fn container() -> TypeDescriptor {
        TypeDescriptor::new(
            "Container",
            vec![
                FieldDescriptor::new("items", "Vec<ProductItem>"),
                FieldDescriptor::new("optional_item", "Option<ProductItem>"),
                FieldDescriptor::new("optional_items", "Option<Vec<ProductItem>>"),
                FieldDescriptor::new("regular_value", "String"),
            ],
        )
    }

    fn emit(descriptor: &TypeDescriptor, nested: &[&str]) -> syn::File {
        let nested: NestedNameSet = nested.iter().copied().collect();
        let fields = classify_fields(descriptor, &nested);
        let tokens = emit_transfer_type(descriptor, &fields, &EmitOptions::default())
            .expect("Failed to emit");
        syn::parse2(tokens).expect("emitted code should parse")
    }

    fn dto_struct(file: &syn::File) -> &syn::ItemStruct {
        file.items
            .iter()
            .find_map(|item| match item {
                syn::Item::Struct(s) => Some(s),
                _ => None,
            })
            .expect("struct emitted")
    }

    fn field_names(item: &syn::ItemStruct) -> Vec<String> {
        item.fields
            .iter()
            .filter_map(|f| f.ident.as_ref().map(ToString::to_string))
            .collect()
    }

    #[test]
    fn test_emit_struct_fields_in_order() {
        let file = emit(&container(), &["ProductItem"]);
        let item = dto_struct(&file);

        assert_eq!(item.ident, "ContainerDTO");
        assert_eq!(
            field_names(item),
            vec!["items", "optional_item", "optional_items", "regular_value"]
        );
    }

    #[test]
    fn test_emit_replaces_nested_types() {
        let file = emit(&container(), &["ProductItem"]);
        let item = dto_struct(&file);
        let types: Vec<String> = item
            .fields
            .iter()
            .map(|f| quote::ToTokens::to_token_stream(&f.ty).to_string().replace(' ', ""))
            .collect();

        assert_eq!(
            types,
            vec![
                "Vec<ProductItemDTO>",
                "Option<ProductItemDTO>",
                "Option<Vec<ProductItemDTO>>",
                "String",
            ]
        );
    }

    #[test]
    fn test_emit_unknown_nested_keeps_declared_type() {
        let file = emit(&container(), &[]);
        let item = dto_struct(&file);
        let first = item.fields.iter().next().expect("field emitted");
        let first = quote::ToTokens::to_token_stream(&first.ty)
            .to_string()
            .replace(' ', "");
        assert_eq!(first, "Vec<ProductItem>");
    }

    #[test]
    fn test_emit_constructor_parameters_in_order() {
        let file = emit(&container(), &["ProductItem"]);
        let constructor = file
            .items
            .iter()
            .find_map(|item| match item {
                syn::Item::Impl(imp) if imp.trait_.is_none() => imp.items.first(),
                _ => None,
            })
            .expect("constructor emitted");

        let syn::ImplItem::Fn(new_fn) = constructor else {
            panic!("expected fn");
        };
        assert_eq!(new_fn.sig.ident, "new");
        let params: Vec<String> = new_fn
            .sig
            .inputs
            .iter()
            .filter_map(|arg| match arg {
                syn::FnArg::Typed(pat) => match pat.pat.as_ref() {
                    syn::Pat::Ident(p) => Some(p.ident.to_string()),
                    _ => None,
                },
                syn::FnArg::Receiver(_) => None,
            })
            .collect();
        assert_eq!(
            params,
            vec!["items", "optional_item", "optional_items", "regular_value"]
        );
    }

    #[test]
    fn test_emit_dto_conformance() {
        let file = emit(&container(), &["ProductItem"]);
        let conformance = file
            .items
            .iter()
            .find_map(|item| match item {
                syn::Item::Impl(imp) => imp.trait_.as_ref().map(|(_, path, _)| path),
                _ => None,
            })
            .expect("Dto impl emitted");
        let path = quote::ToTokens::to_token_stream(conformance)
            .to_string()
            .replace(' ', "");
        assert_eq!(path, "::dtogen::Dto");
    }

    #[test]
    fn test_emit_empty_model() {
        let descriptor = TypeDescriptor::new("EmptyModel", Vec::new());
        let file = emit(&descriptor, &[]);
        let item = dto_struct(&file);
        assert_eq!(item.ident, "EmptyModelDTO");
        assert!(item.fields.is_empty());
    }

    #[test]
    fn test_emit_invalid_type() {
        let descriptor = TypeDescriptor::new("Broken", vec![FieldDescriptor::new("value", "Vec<")]);
        let fields = classify_fields(&descriptor, &NestedNameSet::new());
        let result = emit_transfer_type(&descriptor, &fields, &EmitOptions::default());
        assert!(matches!(result, Err(CodegenError::InvalidType { .. })));
    }
}
