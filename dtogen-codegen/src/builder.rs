//! Build script integration.
//!
//! ```ignore
//! // build.rs
//! fn main() {
//!     dtogen_codegen::Builder::new("schemas/shop.xml")
//!         .generate()
//!         .expect("Failed to generate transfer types");
//! }
//!
//! // src/lib.rs
//! include!(concat!(env!("OUT_DIR"), "/shop_dto.rs"));
//! ```

use crate::error::CodegenError;
use crate::generator::{Generator, GeneratorConfig};
use std::path::{Path, PathBuf};

/// Builder for generating transfer types from a schema file in `build.rs`.
#[derive(Debug, Clone)]
pub struct Builder {
    schema: PathBuf,
    out_file: Option<PathBuf>,
    config: GeneratorConfig,
    emit_rerun: bool,
}

impl Builder {
    /// Creates a builder for the given schema file.
    #[must_use]
    pub fn new(schema: impl Into<PathBuf>) -> Self {
        Self {
            schema: schema.into(),
            out_file: None,
            config: GeneratorConfig::default(),
            emit_rerun: true,
        }
    }

    /// Sets the output file. Defaults to `$OUT_DIR/<schema stem>_dto.rs`.
    #[must_use]
    pub fn out_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_file = Some(path.into());
        self
    }

    /// Sets the path of the crate providing the conversion traits.
    #[must_use]
    pub fn runtime_path(mut self, path: impl Into<String>) -> Self {
        self.config.runtime_path = path.into();
        self
    }

    /// Fails generation on nested names that no model in the schema provides.
    #[must_use]
    pub fn strict_nested(mut self, strict: bool) -> Self {
        self.config.strict_nested = strict;
        self
    }

    /// Enables or disables the `cargo:rerun-if-changed` line.
    #[must_use]
    pub fn emit_rerun_if_changed(mut self, emit: bool) -> Self {
        self.emit_rerun = emit;
        self
    }

    /// Generates the output file and returns its path.
    ///
    /// # Errors
    /// Returns an error if the schema cannot be read or generated, if no
    /// output file is set and `OUT_DIR` is unset, or if writing fails.
    pub fn generate(self) -> Result<PathBuf, CodegenError> {
        let out_file = match self.out_file {
            Some(path) => path,
            None => default_out_file(&self.schema)?,
        };

        let xml = std::fs::read_to_string(&self.schema)?;
        let schema = dtogen_schema::parse_schema(&xml)?;
        let code = Generator::with_config(&schema, self.config).generate()?;

        if let Some(parent) = out_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&out_file, code)?;

        if self.emit_rerun {
            println!("cargo:rerun-if-changed={}", self.schema.display());
        }
        tracing::info!(
            schema = %self.schema.display(),
            out = %out_file.display(),
            "wrote generated transfer types"
        );

        Ok(out_file)
    }
}

fn default_out_file(schema: &Path) -> Result<PathBuf, CodegenError> {
    let out_dir = std::env::var_os("OUT_DIR")
        .ok_or_else(|| CodegenError::generation("OUT_DIR is not set and no output file was given"))?;
    let stem = schema
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| CodegenError::generation(format!("invalid schema path '{}'", schema.display())))?;
    Ok(PathBuf::from(out_dir).join(format!("{stem}_dto.rs")))
}
