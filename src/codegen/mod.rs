//! Code Generation
//!
//! Generates model classes from content type schemas.
//!
//! Architecture:
//! - names: codename -> member/type/accessor identifiers
//! - types: closed table from element type tag to TypeDescriptor
//! - model: ContentType -> ClassSpec (pure, never fails)
//! - java: ClassSpec -> Java source, written through SourceEmitter
//!
//! The key constraint: emitters NEVER read schema data - only ClassSpec fields.

pub mod config;
pub mod diagnostics;
pub mod java;
pub mod model;
pub mod names;
pub mod types;

pub use config::{CodegenConfig, DiagnosticLevel, DiagnosticsConfig, NamingConfig, RenderProfile};
pub use diagnostics::{DiagnosticCode, DiagnosticItem, Diagnostics, Severity};
pub use java::JavaEmitter;
pub use model::{AccessorSpec, ClassModelBuilder, ClassSpec, FieldSpec};
pub use names::{AccessorKind, IdentifierNormalizer};
pub use types::{map_type, DomainType, ScalarType, TypeDescriptor};

use std::path::PathBuf;

use model::first_free_name;

use crate::error::{CodegenError, Result};
use crate::output::SourceEmitter;
use crate::provider::SchemaProvider;
use crate::schema::ContentType;

// =============================================================================
// Generated Output
// =============================================================================

/// Output from generating a batch of content types
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
    /// One spec per input content type, in input order
    pub specs: Vec<ClassSpec>,
    /// Anything reported while building
    pub diagnostics: Diagnostics,
}

/// Result of a full fetch-generate-write run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub specs: Vec<ClassSpec>,
    /// Written files, in spec order
    pub written: Vec<PathBuf>,
    pub diagnostics: Diagnostics,
}

// =============================================================================
// Generator
// =============================================================================

/// Generation driver
pub struct Generator {
    builder: ClassModelBuilder,
    config: CodegenConfig,
}

impl Generator {
    pub fn new(config: CodegenConfig) -> Self {
        Self {
            builder: ClassModelBuilder::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &CodegenConfig {
        &self.config
    }

    /// Build the spec for one content type
    pub fn generate(&self, content_type: &ContentType) -> ClassSpec {
        self.builder.build(content_type)
    }

    /// Build specs for every content type, preserving input order.
    ///
    /// A class name already produced earlier in the batch gets the smallest
    /// free numeric suffix, so no two specs share a file.
    pub fn generate_all(&self, types: &[ContentType]) -> Vec<ClassSpec> {
        self.build_batch(types, None)
    }

    /// Same specs as [`generate_all`](Self::generate_all), plus diagnostics
    pub fn generate_all_with_diagnostics(&self, types: &[ContentType]) -> GeneratedOutput {
        let mut diagnostics = Diagnostics::with_config(self.config.diagnostics.clone());
        let specs = self.build_batch(types, Some(&mut diagnostics));
        GeneratedOutput { specs, diagnostics }
    }

    fn build_batch(&self, types: &[ContentType], mut diagnostics: Option<&mut Diagnostics>) -> Vec<ClassSpec> {
        let mut specs: Vec<ClassSpec> = Vec::with_capacity(types.len());
        for content_type in types {
            let mut spec = match diagnostics.as_deref_mut() {
                Some(d) => self.builder.build_with_diagnostics(content_type, d),
                None => self.builder.build(content_type),
            };

            let name = first_free_name(&spec.name, |candidate| specs.iter().any(|s| s.name == candidate));
            if name != spec.name {
                if let Some(d) = diagnostics.as_deref_mut() {
                    d.report(
                        DiagnosticCode::ClassNameCollision,
                        &content_type.codename,
                        None,
                        format!("class name `{}` already taken, renamed to `{}`", spec.name, name),
                    );
                }
                spec.name = name;
            }
            specs.push(spec);
        }
        specs
    }

    /// Fetch, build and write.
    ///
    /// Nothing is written when diagnostics configured as errors were raised.
    pub fn run<P, E>(&self, provider: &P, emitter: &mut E) -> Result<RunSummary>
    where
        P: SchemaProvider + ?Sized,
        E: SourceEmitter + ?Sized,
    {
        let types = provider.fetch_content_types()?;
        let output = self.generate_all_with_diagnostics(&types);

        if output.diagnostics.has_errors() {
            return Err(CodegenError::Diagnostics(output.diagnostics.error_summary()));
        }

        let written = write_all(&output.specs, emitter)?;
        Ok(RunSummary {
            specs: output.specs,
            written,
            diagnostics: output.diagnostics,
        })
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(CodegenConfig::default())
    }
}

/// Write specs in order, stopping at the first failure.
///
/// Files written before the failure are left in place; rerunning is safe
/// because output is deterministic.
pub fn write_all<E>(specs: &[ClassSpec], emitter: &mut E) -> Result<Vec<PathBuf>>
where
    E: SourceEmitter + ?Sized,
{
    emitter.begin(specs);
    let mut written = Vec::with_capacity(specs.len());
    for spec in specs {
        let path = emitter
            .write(spec)
            .map_err(|e| CodegenError::emit(&spec.name, e))?;
        tracing::info!(class = %spec.name, path = %path.display(), "wrote class");
        written.push(path);
    }
    Ok(written)
}
