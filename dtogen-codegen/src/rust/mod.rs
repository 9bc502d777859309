//! Rust code generation modules.

pub mod convert;
pub mod model;
pub mod transfer;
pub mod types;

pub use convert::{Direction, synthesize};
pub use model::{ModelFragments, emit_model_fragments};
pub use transfer::emit_transfer_type;
pub use types::EmitOptions;
