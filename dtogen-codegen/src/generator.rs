//! Batch generation from a model schema.
//!
//! The [`Generator`] validates a parsed [`Schema`], extracts every model,
//! checks nested name resolution and renders transfer types plus model-side
//! fragments into one formatted Rust source file.

use crate::error::CodegenError;
use crate::rust::model::{ModelFragments, emit_model_fragments};
use crate::rust::transfer::emit_transfer_type;
use crate::rust::types::{DEFAULT_RUNTIME_PATH, EmitOptions};
use dtogen_schema::{
    ExtractedType, Schema, SchemaError, classify_fields, extract, find_unresolved_nested,
    validate_schema,
};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path of the crate providing the conversion traits.
    pub runtime_path: String,
    /// Fail on nested names that no model in the schema provides.
    pub strict_nested: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            strict_nested: false,
        }
    }
}

/// Generated code for one model: the transfer type and the model-side pieces.
#[derive(Debug, Clone)]
pub struct GeneratedPair {
    /// Transfer type declaration, constructor and `Dto` conformance.
    pub transfer: TokenStream,
    /// Model-side constructor and `DtoConvertible` conformance.
    pub model: ModelFragments,
}

impl ToTokens for GeneratedPair {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.transfer.to_tokens(tokens);
        self.model.to_tokens(tokens);
    }
}

/// Classifies the fields of an extracted model and emits both halves.
///
/// # Errors
/// Returns an error if a name or type does not parse as Rust.
pub fn expand(
    extracted: &ExtractedType,
    options: &EmitOptions,
) -> Result<GeneratedPair, CodegenError> {
    let fields = classify_fields(&extracted.descriptor, &extracted.nested);
    let transfer = emit_transfer_type(&extracted.descriptor, &fields, options)?;
    let model = emit_model_fragments(&extracted.descriptor, &fields, options)?;
    tracing::debug!(
        model = %extracted.descriptor.name,
        transfer = %extracted.descriptor.dto_name(),
        "emitted transfer type"
    );
    Ok(GeneratedPair { transfer, model })
}

/// Main code generator.
pub struct Generator<'a> {
    schema: &'a Schema,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator with the default configuration.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self::with_config(schema, GeneratorConfig::default())
    }

    /// Creates a new generator with the given configuration.
    #[must_use]
    pub fn with_config(schema: &'a Schema, config: GeneratorConfig) -> Self {
        Self { schema, config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Extracts every model of the schema, in document order.
    ///
    /// # Errors
    /// Returns an error if the schema is invalid, a model cannot be
    /// extracted, or, in strict mode, a nested name does not resolve.
    pub fn extract_models(&self) -> Result<Vec<ExtractedType>, CodegenError> {
        validate_schema(self.schema)?;

        let models = self
            .schema
            .models
            .iter()
            .map(|model| extract(&model.declaration, &model.arguments))
            .collect::<Result<Vec<_>, _>>()?;

        let unresolved = find_unresolved_nested(&models);
        if self.config.strict_nested {
            if let Some(first) = unresolved.into_iter().next() {
                return Err(SchemaError::from(first).into());
            }
        } else {
            for entry in &unresolved {
                tracing::warn!(
                    model = %entry.model,
                    nested = %entry.nested,
                    "nested type has no model in this schema; assuming it is generated elsewhere"
                );
            }
        }

        Ok(models)
    }

    /// Generates the token stream for all models.
    ///
    /// # Errors
    /// Returns an error if extraction or emission fails.
    pub fn generate_tokens(&self) -> Result<TokenStream, CodegenError> {
        let options = EmitOptions::new(&self.config.runtime_path)?;
        let models = self.extract_models()?;

        let pairs = models
            .iter()
            .map(|model| expand(model, &options))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(quote! { #(#pairs)* })
    }

    /// Generates formatted Rust source for all models.
    ///
    /// # Errors
    /// Returns an error if extraction or emission fails, or if the emitted
    /// tokens are not a valid Rust file.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let tokens = self.generate_tokens()?;
        let file: syn::File = syn::parse2(tokens)
            .map_err(|e| CodegenError::generation(format!("emitted code does not parse: {e}")))?;

        let mut output = String::new();
        output.push_str("// @generated by dtogen. Do not edit.\n");
        if !self.schema.package.is_empty() {
            output.push_str(&format!("// Package: {}\n", self.schema.package));
        }
        output.push('\n');
        output.push_str(&prettyplease::unparse(&file));

        tracing::info!(
            package = %self.schema.package,
            models = self.schema.models.len(),
            bytes = output.len(),
            "generated transfer types"
        );

        Ok(output)
    }
}
