//! # dtogen
//!
//! Transfer type (DTO) generation with two-way conversion for Rust.
//!
//! Annotating a struct with `#[generate_dto]` produces a sibling
//! `<Name>DTO` struct holding the same fields, where fields whose type names
//! a nested model are replaced by that model's transfer type, together with
//! conversions in both directions.
//!
//! ## Features
//!
//! - **Attribute macro** - `#[generate_dto(nested_dtos = ["Address"])]`
//! - **Nested conversion** - `T`, `Option<T>`, `Vec<T>` and `Option<Vec<T>>`
//!   of nested models convert element-wise
//! - **Schema-driven generation** - Generate the same code from XML model
//!   schemas in a build script
//!
//! ## Quick Start
//!
//! ```ignore
//! use dtogen::prelude::*;
//!
//! #[generate_dto]
//! #[derive(Debug, Clone, PartialEq)]
//! pub struct Address {
//!     pub city: String,
//! }
//!
//! #[generate_dto(nested_dtos = ["Address"])]
//! #[derive(Debug, Clone, PartialEq)]
//! pub struct Person {
//!     pub name: String,
//!     pub addresses: Vec<Address>,
//! }
//!
//! let person = Person {
//!     name: "Ada".into(),
//!     addresses: vec![Address { city: "London".into() }],
//! };
//! let dto = person.to_dto();
//! assert_eq!(dto.addresses[0].city, "London");
//! assert_eq!(Person::from_dto(&dto), person);
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - `Dto` and `DtoConvertible` capability traits
//! - [`schema`] - Descriptors, field classification, XML model schemas
//! - [`codegen`] - Transfer type emission and build script integration

pub mod prelude;

/// Conversion capability traits.
pub mod core {
    pub use dtogen_core::*;
}

/// Descriptors, classification and XML model schemas.
pub mod schema {
    pub use dtogen_schema::*;
}

/// Transfer type code generation.
pub mod codegen {
    pub use dtogen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use dtogen_core::{Dto, DtoConvertible};
pub use dtogen_derive::generate_dto;
