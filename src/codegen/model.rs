//! Class Model Builder
//!
//! Turns one content type into a language-agnostic [`ClassSpec`]: one field
//! plus a getter/setter pair per supported element, each carrying the
//! codename it came from.
//!
//! Building is pure. Elements with unmapped type tags are skipped without
//! failing; callers who want to see what was skipped pass a [`Diagnostics`]
//! to [`ClassModelBuilder::build_with_diagnostics`].

use serde::{Deserialize, Serialize};

use super::config::CodegenConfig;
use super::diagnostics::{DiagnosticCode, Diagnostics};
use super::names::{is_snake_case, AccessorKind, IdentifierNormalizer};
use super::types::{map_type, TypeDescriptor};
use crate::schema::ContentType;

/// Fixed class documentation. No timestamp: regenerated files must be identical.
pub const GENERATED_NOTICE: &[&str] = &[
    "This code was generated by content-codegen.",
    "",
    "Changes to this file may cause incorrect behavior and will be lost if the code is regenerated.",
    "For further modifications of the class, create a separate file and extend this class.",
];

// =============================================================================
// Specs
// =============================================================================

/// One generated class member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// lowerCamelCase member name
    pub name: String,
    #[serde(rename = "type")]
    pub type_descriptor: TypeDescriptor,
    /// Element codename, emitted as the field's provenance annotation
    pub source_codename: String,
}

/// A getter or setter bound to one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorSpec {
    pub kind: AccessorKind,
    pub name: String,
    /// Name of the field this accessor reads or writes
    pub field: String,
}

/// The generated type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSpec {
    /// UpperCamelCase class name
    pub name: String,
    /// Fields in element order
    pub fields: Vec<FieldSpec>,
    /// Getter then setter for each field, in field order
    pub accessors: Vec<AccessorSpec>,
    /// Content type codename, emitted as the class provenance annotation
    pub provenance: String,
    /// Class documentation lines
    pub documentation: Vec<String>,
}

impl ClassSpec {
    /// Find a field by member name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Find the accessor of a kind for a field
    pub fn accessor(&self, kind: AccessorKind, field: &str) -> Option<&AccessorSpec> {
        self.accessors
            .iter()
            .find(|a| a.kind == kind && a.field == field)
    }

    /// Getter/setter pairs alongside their field
    pub fn members(&self) -> impl Iterator<Item = (&FieldSpec, &AccessorSpec, &AccessorSpec)> {
        self.fields
            .iter()
            .zip(self.accessors.chunks_exact(2))
            .map(|(field, pair)| (field, &pair[0], &pair[1]))
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builds class specs from content types
pub struct ClassModelBuilder {
    normalizer: IdentifierNormalizer,
}

impl ClassModelBuilder {
    /// Create a builder from codegen config
    pub fn new(config: &CodegenConfig) -> Self {
        Self {
            normalizer: IdentifierNormalizer::new(config.naming.clone()),
        }
    }

    /// Build a class spec
    pub fn build(&self, content_type: &ContentType) -> ClassSpec {
        self.build_inner(content_type, None)
    }

    /// Build a class spec, reporting skipped elements, renamed fields and
    /// malformed codenames. The returned spec equals what [`build`](Self::build) returns.
    pub fn build_with_diagnostics(&self, content_type: &ContentType, diagnostics: &mut Diagnostics) -> ClassSpec {
        self.build_inner(content_type, Some(diagnostics))
    }

    fn build_inner(&self, content_type: &ContentType, mut diagnostics: Option<&mut Diagnostics>) -> ClassSpec {
        let type_codename = content_type.codename.as_str();
        let mut fields: Vec<FieldSpec> = Vec::with_capacity(content_type.elements.len());
        let mut accessors: Vec<AccessorSpec> = Vec::with_capacity(content_type.elements.len() * 2);

        if !is_snake_case(type_codename) {
            if let Some(d) = diagnostics.as_deref_mut() {
                d.report(
                    DiagnosticCode::MalformedIdentifier,
                    type_codename,
                    None,
                    "content type codename is not lower-snake-case",
                );
            }
        }

        for element in &content_type.elements {
            let Some(type_descriptor) = map_type(&element.type_tag) else {
                if let Some(d) = diagnostics.as_deref_mut() {
                    d.report(
                        DiagnosticCode::UnsupportedElement,
                        type_codename,
                        Some(element.codename.as_str()),
                        format!("unsupported element type `{}`, skipped", element.type_tag),
                    );
                }
                continue;
            };

            if !is_snake_case(&element.codename) {
                if let Some(d) = diagnostics.as_deref_mut() {
                    d.report(
                        DiagnosticCode::MalformedIdentifier,
                        type_codename,
                        Some(element.codename.as_str()),
                        "element codename is not lower-snake-case",
                    );
                }
            }

            let base = self.normalizer.member_name(&element.codename);
            let name = unique_member_name(&base, &fields);
            if name != base {
                if let Some(d) = diagnostics.as_deref_mut() {
                    d.report(
                        DiagnosticCode::FieldNameCollision,
                        type_codename,
                        Some(element.codename.as_str()),
                        format!("member name `{}` already taken, renamed to `{}`", base, name),
                    );
                }
            }

            for kind in [AccessorKind::Getter, AccessorKind::Setter] {
                accessors.push(AccessorSpec {
                    kind,
                    name: self.normalizer.accessor_name(kind, &name),
                    field: name.clone(),
                });
            }
            fields.push(FieldSpec {
                name,
                type_descriptor,
                source_codename: element.codename.clone(),
            });
        }

        let spec = ClassSpec {
            name: self.normalizer.type_name(type_codename),
            fields,
            accessors,
            provenance: type_codename.to_string(),
            documentation: GENERATED_NOTICE.iter().map(|line| line.to_string()).collect(),
        };
        tracing::debug!(
            class = %spec.name,
            fields = spec.fields.len(),
            skipped = content_type.elements.len() - spec.fields.len(),
            "built class spec"
        );
        spec
    }
}

impl Default for ClassModelBuilder {
    fn default() -> Self {
        Self::new(&CodegenConfig::default())
    }
}

fn unique_member_name(base: &str, fields: &[FieldSpec]) -> String {
    first_free_name(base, |candidate| fields.iter().any(|f| f.name == candidate))
}

/// First free name among `base`, `base2`, `base3`, ...
pub(crate) fn first_free_name(base: &str, taken: impl Fn(&str) -> bool) -> String {
    if !taken(base) {
        return base.to_string();
    }
    (2..)
        .map(|suffix| format!("{}{}", base, suffix))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| base.to_string())
}
