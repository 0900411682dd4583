//! Diagnostics
//!
//! Collects notices raised while building class specs. Collection is opt-in:
//! generated output is the same whether or not a caller looks at these.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::{DiagnosticLevel, DiagnosticsConfig};

// =============================================================================
// Diagnostic Codes
// =============================================================================

/// Diagnostic code for categorizing issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticCode {
    /// Element type tag has no mapping, element was skipped
    UnsupportedElement,
    /// Two elements normalize to the same member name
    FieldNameCollision,
    /// Codename is not lower-snake-case
    MalformedIdentifier,
    /// Two content types normalize to the same class name
    ClassNameCollision,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedElement => "C001",
            Self::FieldNameCollision => "C002",
            Self::MalformedIdentifier => "C003",
            Self::ClassNameCollision => "C004",
        }
    }

    /// Configured level for this code
    pub fn level(&self, config: &DiagnosticsConfig) -> DiagnosticLevel {
        match self {
            Self::UnsupportedElement => config.unsupported_element,
            Self::FieldNameCollision => config.field_name_collision,
            Self::MalformedIdentifier => config.malformed_identifier,
            Self::ClassNameCollision => config.class_name_collision,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Severity
// =============================================================================

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

// =============================================================================
// Diagnostic Item
// =============================================================================

/// A single diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticItem {
    pub code: DiagnosticCode,
    pub severity: Severity,
    /// Content type codename
    pub content_type: String,
    /// Element codename, if the item concerns one element
    pub element: Option<String>,
    pub message: String,
}

impl fmt::Display for DiagnosticItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] {}", self.severity, self.code, self.content_type)?;
        if let Some(element) = &self.element {
            write!(f, ".{}", element)?;
        }
        write!(f, ": {}", self.message)
    }
}

// =============================================================================
// Diagnostics Collector
// =============================================================================

/// Collection of diagnostics, filtered through configured levels
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    config: DiagnosticsConfig,
    items: Vec<DiagnosticItem>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticsConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
        }
    }

    /// Record a diagnostic. Codes configured as `ignore` are dropped.
    pub fn report(
        &mut self,
        code: DiagnosticCode,
        content_type: &str,
        element: Option<&str>,
        message: impl Into<String>,
    ) {
        let severity = match code.level(&self.config) {
            DiagnosticLevel::Ignore => {
                tracing::trace!(code = %code, content_type, ?element, "diagnostic ignored");
                return;
            }
            DiagnosticLevel::Warn => Severity::Warning,
            DiagnosticLevel::Error => Severity::Error,
        };

        let item = DiagnosticItem {
            code,
            severity,
            content_type: content_type.to_string(),
            element: element.map(str::to_string),
            message: message.into(),
        };
        match severity {
            Severity::Error => tracing::error!("{}", item),
            Severity::Warning => tracing::warn!("{}", item),
        }
        self.items.push(item);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.severity == Severity::Error)
    }

    /// Get all items
    pub fn items(&self) -> &[DiagnosticItem] {
        &self.items
    }

    /// Items with a given code
    pub fn by_code(&self, code: DiagnosticCode) -> impl Iterator<Item = &DiagnosticItem> {
        self.items.iter().filter(move |d| d.code == code)
    }

    pub fn error_count(&self) -> usize {
        self.items.iter().filter(|d| d.severity == Severity::Error).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// One line per error, for surfacing through `CodegenError::Diagnostics`
    pub fn error_summary(&self) -> String {
        self.items
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}
