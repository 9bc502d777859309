//! Conversion of macro input into host-neutral declarations.

use dtogen_schema::{ArgExpr, DeclKind, Declaration, DirectiveArgument, Member, arg_expr};
use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::visit_mut::{self, VisitMut};
use syn::{Expr, Fields, Ident, Item, Lit, Meta, Token, Type, TypePath};

/// Parsed attribute arguments.
pub struct MacroArgs {
    /// Arguments handed to the extractor, in source order.
    pub arguments: Vec<DirectiveArgument>,
    /// Runtime crate path override (`crate = ...`).
    pub runtime: Option<syn::Path>,
}

impl MacroArgs {
    /// Parses `#[generate_dto(...)]` arguments.
    pub fn parse(attr: TokenStream) -> syn::Result<Self> {
        let parser = Punctuated::<Meta, Token![,]>::parse_terminated;
        let metas = parser.parse2(attr)?;

        let mut arguments = Vec::new();
        let mut runtime = None;

        for meta in metas {
            match meta {
                Meta::NameValue(name_value) if name_value.path.is_ident("crate") => {
                    runtime = Some(parse_runtime(&name_value.value)?);
                }
                Meta::NameValue(name_value) => {
                    let label = name_value.path.to_token_stream().to_string();
                    arguments.push(DirectiveArgument::labeled(
                        label,
                        arg_expr(&name_value.value),
                    ));
                }
                other => {
                    arguments.push(DirectiveArgument::unlabeled(ArgExpr::Other(
                        other.to_token_stream().to_string(),
                    )));
                }
            }
        }

        Ok(Self { arguments, runtime })
    }
}

fn parse_runtime(value: &Expr) -> syn::Result<syn::Path> {
    match value {
        Expr::Path(path) => Ok(path.path.clone()),
        Expr::Lit(lit) => match &lit.lit {
            Lit::Str(s) => s.parse(),
            _ => Err(syn::Error::new(value.span(), "crate expects a path")),
        },
        _ => Err(syn::Error::new(value.span(), "crate expects a path")),
    }
}

/// Builds a declaration node from an item.
///
/// Only structs with named fields become class-like declarations; every
/// other item keeps its kind so the extractor can reject it.
pub fn declaration(item: &Item) -> Declaration {
    match item {
        Item::Struct(s) => match &s.fields {
            Fields::Named(named) => {
                let mut decl = Declaration::new(DeclKind::Struct, s.ident.to_string());
                for field in &named.named {
                    let Some(ident) = &field.ident else {
                        continue;
                    };
                    let ty = resolve_self(&field.ty, &s.ident);
                    decl.add_member(Member::stored(
                        ident.to_string(),
                        ty.to_token_stream().to_string(),
                    ));
                }
                decl
            }
            Fields::Unnamed(_) => Declaration::new(DeclKind::TupleStruct, s.ident.to_string()),
            Fields::Unit => Declaration::new(DeclKind::Struct, s.ident.to_string()),
        },
        Item::Enum(e) => Declaration::new(DeclKind::Enum, e.ident.to_string()),
        Item::Trait(t) => Declaration::new(DeclKind::Protocol, t.ident.to_string()),
        Item::Fn(f) => Declaration::new(DeclKind::Function, f.sig.ident.to_string()),
        Item::Union(u) => Declaration::new(DeclKind::Union, u.ident.to_string()),
        other => Declaration::new(DeclKind::Other, item_name(other)),
    }
}

/// Returns the name of an item that cannot carry a transfer type.
fn item_name(item: &Item) -> String {
    match item {
        Item::Const(c) => c.ident.to_string(),
        Item::Static(s) => s.ident.to_string(),
        Item::Mod(m) => m.ident.to_string(),
        Item::Type(t) => t.ident.to_string(),
        Item::TraitAlias(t) => t.ident.to_string(),
        Item::ExternCrate(e) => e.ident.to_string(),
        Item::Impl(i) => i.self_ty.to_token_stream().to_string(),
        Item::Use(u) => u.tree.to_token_stream().to_string(),
        Item::Macro(m) => m
            .ident
            .as_ref()
            .map_or_else(|| m.mac.path.to_token_stream().to_string(), ToString::to_string),
        other => other.to_token_stream().to_string(),
    }
}

/// Replaces `Self` in a field type with the model name.
///
/// Inside the transfer type `Self` would name the transfer type itself.
fn resolve_self(ty: &Type, model: &Ident) -> Type {
    let mut ty = ty.clone();
    ReplaceSelf { model }.visit_type_mut(&mut ty);
    ty
}

struct ReplaceSelf<'a> {
    model: &'a Ident,
}

impl VisitMut for ReplaceSelf<'_> {
    fn visit_type_path_mut(&mut self, ty: &mut TypePath) {
        if ty.qself.is_none() && ty.path.is_ident("Self") {
            ty.path = syn::Path::from(self.model.clone());
            return;
        }
        visit_mut::visit_type_path_mut(self, ty);
    }
}
