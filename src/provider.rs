//! Schema providers
//!
//! The generator only needs a list of content types; where they come from
//! is up to the provider. Providers do not retry.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CodegenError, Result};
use crate::schema::{ContentType, TypesResponse};

/// Source of content type schemas
pub trait SchemaProvider {
    fn fetch_content_types(&self) -> Result<Vec<ContentType>>;
}

/// Fixed list of content types, mostly useful in tests
impl SchemaProvider for Vec<ContentType> {
    fn fetch_content_types(&self) -> Result<Vec<ContentType>> {
        Ok(self.clone())
    }
}

/// Reads a saved type listing from disk.
///
/// Accepts either the full listing response (`{"types": [...]}`) or a bare
/// JSON array of content types.
#[derive(Debug, Clone)]
pub struct FileSchemaProvider {
    path: PathBuf,
}

impl FileSchemaProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SchemaProvider for FileSchemaProvider {
    fn fetch_content_types(&self) -> Result<Vec<ContentType>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            CodegenError::Provider(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        let types = parse_type_listing(&content)?;
        tracing::info!(path = %self.path.display(), count = types.len(), "loaded content types");
        Ok(types)
    }
}

/// Parse a type listing response or a bare array of content types
pub fn parse_type_listing(content: &str) -> Result<Vec<ContentType>> {
    if content.trim_start().starts_with('[') {
        Ok(serde_json::from_str(content)?)
    } else {
        let response: TypesResponse = serde_json::from_str(content)?;
        Ok(response.types)
    }
}
