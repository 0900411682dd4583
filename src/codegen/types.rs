//! Type Mapping Table
//!
//! Resolves element type tags to abstract type descriptors. The table is
//! closed: tags missing from it resolve to `None`, which the class builder
//! treats as "unsupported, skip" so newer element kinds never break
//! generation for the known ones.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scalar value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    String,
    /// Double-precision float
    Double,
    /// Timezone-aware date-time
    DateTime,
}

/// Types provided by the content delivery runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainType {
    Option,
    Asset,
    Taxonomy,
    /// Generic content item handle
    ContentItem,
}

/// Abstract target type for a generated field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "type", rename_all = "snake_case")]
pub enum TypeDescriptor {
    Scalar(ScalarType),
    ListOf(DomainType),
    /// Opaque cross-reference. The schema does not say what a
    /// `modular_content` element points at, so consumers downcast at runtime.
    Reference(DomainType),
}

/// Tag to descriptor table, the only place element kinds are listed
pub const TYPE_TABLE: &[(&str, TypeDescriptor)] = &[
    ("text", TypeDescriptor::Scalar(ScalarType::String)),
    ("rich_text", TypeDescriptor::Scalar(ScalarType::String)),
    ("url_slug", TypeDescriptor::Scalar(ScalarType::String)),
    ("number", TypeDescriptor::Scalar(ScalarType::Double)),
    ("date_time", TypeDescriptor::Scalar(ScalarType::DateTime)),
    ("multiple_choice", TypeDescriptor::ListOf(DomainType::Option)),
    ("asset", TypeDescriptor::ListOf(DomainType::Asset)),
    ("taxonomy", TypeDescriptor::ListOf(DomainType::Taxonomy)),
    ("modular_content", TypeDescriptor::Reference(DomainType::ContentItem)),
];

/// Resolve a type tag, `None` for unsupported kinds
pub fn map_type(type_tag: &str) -> Option<TypeDescriptor> {
    TYPE_TABLE
        .iter()
        .find(|(tag, _)| *tag == type_tag)
        .map(|(_, descriptor)| *descriptor)
}

/// Whether the tag has a mapping
pub fn is_supported(type_tag: &str) -> bool {
    map_type(type_tag).is_some()
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Double => write!(f, "double"),
            Self::DateTime => write!(f, "date-time"),
        }
    }
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Option => write!(f, "Option"),
            Self::Asset => write!(f, "Asset"),
            Self::Taxonomy => write!(f, "Taxonomy"),
            Self::ContentItem => write!(f, "ContentItem"),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => write!(f, "{}", scalar),
            Self::ListOf(domain) => write!(f, "list<{}>", domain),
            Self::Reference(domain) => write!(f, "ref<{}>", domain),
        }
    }
}
