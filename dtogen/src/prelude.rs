//! Prelude module for convenient imports.
//!
//! ```ignore
//! use dtogen::prelude::*;
//! ```

pub use dtogen_core::{Dto, DtoConvertible};
pub use dtogen_derive::generate_dto;
