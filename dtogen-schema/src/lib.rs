//! # dtogen Schema
//!
//! Input side of the transfer-type generator.
//!
//! This crate provides:
//! - A host-neutral declaration model (declaration node + directive arguments)
//! - Type descriptor extraction and validation
//! - Declared type shape parsing and field classification
//! - An XML model schema parser for ahead-of-time generation

pub mod declaration;
pub mod descriptor;
pub mod error;
pub mod expr;
pub mod extract;
pub mod ir;
pub mod parser;
pub mod types;
pub mod validation;

pub use declaration::{ArgExpr, DeclKind, Declaration, DirectiveArgument, Member, ModelDef, Schema};
pub use descriptor::{
    DTO_SUFFIX, ExtractedType, FieldDescriptor, NestedNameSet, TypeDescriptor, dto_name,
};
pub use error::{ExtractError, ParseError, SchemaError};
pub use expr::{arg_expr, parse_argument};
pub use extract::extract;
pub use ir::{ClassifiedField, Shape, classify, classify_fields};
pub use parser::parse_schema;
pub use types::{Notation, TypeShape};
pub use validation::{UnresolvedNested, find_unresolved_nested, validate_schema};
