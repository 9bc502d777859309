//! # dtogen Codegen
//!
//! Transfer type generation for dtogen.
//!
//! This crate provides:
//! - Conversion-code synthesis per field shape
//! - Transfer type and model-side fragment emission
//! - Batch generation from XML model schemas
//! - Build script integration

pub mod builder;
pub mod error;
pub mod generator;
pub mod rust;

pub use builder::Builder;
pub use error::CodegenError;
pub use generator::{GeneratedPair, Generator, GeneratorConfig, expand};
pub use rust::{Direction, EmitOptions, ModelFragments, synthesize};

/// Generates Rust code from an XML model schema string.
///
/// # Arguments
/// * `xml` - XML model schema content
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing, extraction or generation fails.
pub fn generate_from_xml(xml: &str) -> Result<String, CodegenError> {
    let schema = dtogen_schema::parse_schema(xml)?;
    Generator::new(&schema).generate()
}

/// Generates Rust code from an XML model schema file.
///
/// # Arguments
/// * `path` - Path to the XML model schema file
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, extraction or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml)
}
