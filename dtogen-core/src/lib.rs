//! # dtogen Core
//!
//! Core traits shared by generated transfer types and the model types they
//! mirror.
//!
//! This crate provides:
//! - [`DtoConvertible`], implemented by model types that own a generated
//!   transfer type
//! - [`Dto`], implemented by every generated transfer type
//!
//! Generated code refers to these traits through fully qualified paths, so
//! neither trait has to be in scope where `#[generate_dto]` is used.

pub mod convert;

pub use convert::{Dto, DtoConvertible};
