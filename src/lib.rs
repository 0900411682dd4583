//! Content Model Generator
//!
//! Generates model classes from the content type schemas of a headless
//! content API, so integrations do not hand-write them.
//!
//! ## Features
//!
//! - **Deterministic**: The same schema always yields byte-identical sources
//! - **Forward Compatible**: Unknown element kinds are skipped, never fatal
//! - **Provenance**: Every class and field is annotated with its source codename
//! - **Configurable Targets**: Package, type and annotation names come from config
//!
//! ## Pipeline
//!
//! ```text
//! OutputDir::prepare ──> SchemaProvider ──> Generator ──> SourceEmitter
//!   (fail fast)          (content types)    (ClassSpec)   (Article.java, …)
//! ```
//!
//! ## Example
//!
//! ```
//! use content_codegen::{ContentType, Generator};
//!
//! let article = ContentType::new("article")
//!     .with_element("title", "text")
//!     .with_element("post_date", "date_time");
//!
//! let spec = Generator::default().generate(&article);
//! assert_eq!(spec.name, "Article");
//! assert_eq!(spec.fields[1].name, "postDate");
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod output;
pub mod provider;
pub mod schema;

pub use codegen::{ClassSpec, Generator, JavaEmitter, TypeDescriptor};
pub use config::GeneratorConfig;
pub use error::{CodegenError, Result};
pub use output::{OutputDir, SourceEmitter};
pub use provider::{FileSchemaProvider, SchemaProvider};
pub use schema::{ContentType, Element};
