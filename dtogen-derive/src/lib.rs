//! # dtogen Derive
//!
//! Attribute macro generating transfer types.
//!
//! `#[generate_dto]` keeps the annotated struct unchanged and adds, next to
//! it, a `<Name>DTO` struct with a full-argument constructor, an inherent
//! `from_dto` constructor on the model and the `Dto`/`DtoConvertible`
//! conformances linking the two.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{ToTokens, quote};
use syn::Item;
use syn::spanned::Spanned;

mod input;

use input::{MacroArgs, declaration};

/// Generates a transfer type for a struct with named fields.
///
/// # Arguments
/// * `nested_dtos = ["Name", ...]` - Field types that convert through their
///   own transfer types. `nestedDTOs` is accepted as well.
/// * `crate = path` - Path of the runtime crate, `::dtogen` by default.
///
/// # Example
/// ```ignore
/// use dtogen::generate_dto;
///
/// #[generate_dto]
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct Address {
///     pub city: String,
/// }
///
/// #[generate_dto(nested_dtos = ["Address"])]
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct Person {
///     pub name: String,
///     pub address: Option<Address>,
/// }
///
/// let dto = PersonDTO::new("Ada".into(), Some(AddressDTO::new("London".into())));
/// let person = Person::from_dto(&dto);
/// ```
#[proc_macro_attribute]
pub fn generate_dto(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = TokenStream2::from(item);
    match expand(attr.into(), item.clone()) {
        Ok(tokens) => tokens.into(),
        Err(err) => {
            let error = err.to_compile_error();
            quote! { #item #error }.into()
        }
    }
}

fn expand(attr: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    let args = MacroArgs::parse(attr)?;
    let parsed: Item = syn::parse2(item)?;

    if let Item::Struct(s) = &parsed
        && !s.generics.params.is_empty()
    {
        return Err(syn::Error::new(
            s.generics.span(),
            "generate_dto does not support generic types",
        ));
    }

    let decl = declaration(&parsed);
    let extracted = dtogen_schema::extract(&decl, &args.arguments)
        .map_err(|e| syn::Error::new(Span::call_site(), e))?;

    let mut options = dtogen_codegen::EmitOptions::default();
    if let Some(runtime) = args.runtime {
        options.runtime = runtime;
    }
    if let Item::Struct(s) = &parsed {
        options = options.with_visibility(s.vis.clone());
    }

    let pair = dtogen_codegen::expand(&extracted, &options)
        .map_err(|e| syn::Error::new(Span::call_site(), e))?;

    let mut tokens = parsed.into_token_stream();
    pair.to_tokens(&mut tokens);
    Ok(tokens)
}
