//! Codegen Configuration
//!
//! Two-tier configuration:
//! - Global (CodegenConfig): Language-agnostic settings for naming and diagnostics
//! - Per-target (RenderProfile): Qualified type names, annotation names, escaping
//!
//! Key principle: building a ClassSpec only reads CodegenConfig.
//! Package names and target type names are only consulted when rendering.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::types::{DomainType, ScalarType};

// =============================================================================
// Global Configuration (Language-Agnostic)
// =============================================================================

/// Global codegen configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Naming conventions
    pub naming: NamingConfig,

    /// Diagnostics thresholds
    pub diagnostics: DiagnosticsConfig,
}

/// Naming configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Words rendered fully uppercase in generated names (e.g. "SKU", "URL").
    /// Empty by default so `preferred_sku` becomes `preferredSku`.
    pub acronyms: BTreeSet<String>,
}

/// Diagnostics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Elements whose type tag has no mapping
    pub unsupported_element: DiagnosticLevel,

    /// Two elements normalizing to the same member name
    pub field_name_collision: DiagnosticLevel,

    /// Codenames that are not lower-snake-case
    pub malformed_identifier: DiagnosticLevel,

    /// Two content types normalizing to the same class name
    pub class_name_collision: DiagnosticLevel,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            unsupported_element: DiagnosticLevel::Ignore,
            field_name_collision: DiagnosticLevel::Warn,
            malformed_identifier: DiagnosticLevel::Warn,
            class_name_collision: DiagnosticLevel::Error,
        }
    }
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Error,
    Warn,
    Ignore,
}

// =============================================================================
// Render Profile
// =============================================================================

/// Target rendering configuration for generated Java sources.
///
/// All type names are fully qualified; the emitter derives imports from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderProfile {
    /// Qualified names for mapped element types
    pub types: TypeMappings,

    /// Qualified names of the provenance annotations
    pub annotations: AnnotationNames,

    /// Prefix applied to member names that collide with keywords
    pub keyword_escape: String,

    /// One level of indentation
    pub indent: String,
}

/// Qualified target names for every type a descriptor can reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeMappings {
    pub string: String,
    pub number: String,
    pub date_time: String,
    pub list: String,
    pub option: String,
    pub asset: String,
    pub taxonomy: String,
    pub content_item: String,
}

/// Annotations linking generated code back to schema codenames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationNames {
    /// Placed on each field, carries the element codename
    pub element: String,
    /// Placed on the class, carries the content type codename
    pub content_type: String,
}

const DELIVERY_PACKAGE: &str = "com.kenticocloud.delivery";

impl Default for TypeMappings {
    fn default() -> Self {
        Self {
            string: "java.lang.String".to_string(),
            number: "java.lang.Double".to_string(),
            date_time: "java.time.ZonedDateTime".to_string(),
            list: "java.util.List".to_string(),
            option: format!("{}.Option", DELIVERY_PACKAGE),
            asset: format!("{}.Asset", DELIVERY_PACKAGE),
            taxonomy: format!("{}.Taxonomy", DELIVERY_PACKAGE),
            content_item: format!("{}.ContentItem", DELIVERY_PACKAGE),
        }
    }
}

impl Default for AnnotationNames {
    fn default() -> Self {
        Self {
            element: format!("{}.ElementMapping", DELIVERY_PACKAGE),
            content_type: format!("{}.ContentItemMapping", DELIVERY_PACKAGE),
        }
    }
}

impl Default for RenderProfile {
    fn default() -> Self {
        Self {
            types: TypeMappings::default(),
            annotations: AnnotationNames::default(),
            keyword_escape: "_".to_string(),
            indent: "  ".to_string(),
        }
    }
}

// =============================================================================
// Render Helpers
// =============================================================================

impl RenderProfile {
    /// Escape a keyword if needed
    pub fn escape_keyword(&self, name: &str) -> String {
        if JAVA_KEYWORDS.contains(&name) {
            format!("{}{}", self.keyword_escape, name)
        } else {
            name.to_string()
        }
    }

    /// Escape an accessor name that would clash with a method every class
    /// inherits from `java.lang.Object`
    pub fn escape_method(&self, name: &str) -> String {
        if OBJECT_METHODS.contains(&name) {
            format!("{}{}", self.keyword_escape, name)
        } else {
            name.to_string()
        }
    }

    /// Qualified name for a scalar
    pub fn scalar_type(&self, scalar: ScalarType) -> &str {
        match scalar {
            ScalarType::String => &self.types.string,
            ScalarType::Double => &self.types.number,
            ScalarType::DateTime => &self.types.date_time,
        }
    }

    /// Qualified name for a domain type
    pub fn domain_type(&self, domain: DomainType) -> &str {
        match domain {
            DomainType::Option => &self.types.option,
            DomainType::Asset => &self.types.asset,
            DomainType::Taxonomy => &self.types.taxonomy,
            DomainType::ContentItem => &self.types.content_item,
        }
    }
}

// =============================================================================
// Keywords
// =============================================================================

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
    "class", "const", "continue", "default", "do", "double", "else", "enum",
    "extends", "final", "finally", "float", "for", "goto", "if", "implements",
    "import", "instanceof", "int", "interface", "long", "native", "new",
    "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null",
];

/// No-argument `java.lang.Object` methods a getter name could collide with
const OBJECT_METHODS: &[&str] = &[
    "getClass", "hashCode", "toString", "clone", "finalize", "notify", "notifyAll", "wait",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_profile_defaults() {
        let profile = RenderProfile::default();
        assert_eq!(profile.scalar_type(ScalarType::String), "java.lang.String");
        assert_eq!(profile.scalar_type(ScalarType::DateTime), "java.time.ZonedDateTime");
        assert_eq!(profile.domain_type(DomainType::Asset), "com.kenticocloud.delivery.Asset");
        assert_eq!(profile.annotations.element, "com.kenticocloud.delivery.ElementMapping");
    }

    #[test]
    fn test_keyword_escape() {
        let profile = RenderProfile::default();
        assert_eq!(profile.escape_keyword("default"), "_default");
        assert_eq!(profile.escape_keyword("title"), "title");
        assert_eq!(profile.escape_method("getClass"), "_getClass");
        assert_eq!(profile.escape_method("getClassName"), "getClassName");
    }

    #[test]
    fn test_diagnostics_defaults() {
        let config = DiagnosticsConfig::default();
        assert_eq!(config.unsupported_element, DiagnosticLevel::Ignore);
        assert_eq!(config.field_name_collision, DiagnosticLevel::Warn);
        assert_eq!(config.class_name_collision, DiagnosticLevel::Error);
    }

    #[test]
    fn test_partial_profile_from_toml() {
        let profile: RenderProfile = toml::from_str(
            r#"
            keyword_escape = "$"

            [types]
            number = "java.math.BigDecimal"
            "#,
        )
        .unwrap();
        assert_eq!(profile.types.number, "java.math.BigDecimal");
        assert_eq!(profile.types.string, "java.lang.String");
        assert_eq!(profile.escape_keyword("class"), "$class");
    }
}
