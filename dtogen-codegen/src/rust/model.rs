//! Model-side fragments.
//!
//! Two pieces are attached to the model type itself: an inherent
//! `from_dto` constructor that rebuilds a model from its transfer type, and
//! the `DtoConvertible` conformance that links the pair.

use crate::error::CodegenError;
use crate::rust::convert::{Direction, synthesize_all};
use crate::rust::types::{EmitOptions, ident};
use dtogen_schema::{ClassifiedField, TypeDescriptor};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// Code added to the model type.
#[derive(Debug, Clone)]
pub struct ModelFragments {
    /// Inherent `from_dto` constructor.
    pub constructor: TokenStream,
    /// `DtoConvertible` conformance.
    pub conformance: TokenStream,
}

impl ToTokens for ModelFragments {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.constructor.to_tokens(tokens);
        self.conformance.to_tokens(tokens);
    }
}

/// Emits the model-side fragments for a model.
///
/// The constructor initializes every field of the descriptor, converting
/// nested values back with `Dto::to_model`.
///
/// # Errors
/// Returns an error if a name does not parse as a Rust identifier.
pub fn emit_model_fragments(
    descriptor: &TypeDescriptor,
    fields: &[ClassifiedField],
    options: &EmitOptions,
) -> Result<ModelFragments, CodegenError> {
    let model_name = ident(&descriptor.name)?;
    let dto_name = ident(&descriptor.dto_name())?;
    let runtime = &options.runtime;

    let from_dto = synthesize_all(fields, Direction::ToModel, runtime)?;

    let constructor = quote! {
        impl #model_name {
            /// Rebuilds a model value from its transfer representation.
            #[allow(unused_variables, clippy::clone_on_copy)]
            #[must_use]
            pub fn from_dto(dto: &#dto_name) -> Self {
                Self {
                    #(#from_dto,)*
                }
            }
        }
    };

    let conformance = quote! {
        impl #runtime::DtoConvertible for #model_name {
            type Dto = #dto_name;

            fn to_dto(&self) -> #dto_name {
                <#dto_name as #runtime::Dto>::from_model(self)
            }

            fn from_dto(dto: &#dto_name) -> Self {
                #model_name::from_dto(dto)
            }
        }
    };

    Ok(ModelFragments {
        constructor,
        conformance,
    })
}
