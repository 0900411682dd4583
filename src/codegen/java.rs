//! Java Source Emitter
//!
//! Renders ClassSpecs into Java compilation units using a RenderProfile.
//!
//! Key constraints:
//! - This module ONLY receives ClassSpec + RenderProfile - no schema access
//! - Member names come from the spec; keyword escaping happens here only
//! - Imports are derived from the qualified names in the profile

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::PathBuf;

use super::config::RenderProfile;
use super::model::ClassSpec;
use super::names::AccessorKind;
use super::types::TypeDescriptor;
use crate::output::{OutputDir, SourceEmitter};

// =============================================================================
// Emitter
// =============================================================================

/// Writes `<package dir>/<ClassName>.java` for each spec
pub struct JavaEmitter {
    output: OutputDir,
    package: String,
    profile: RenderProfile,
    /// Class names generated into the package in the current batch
    siblings: BTreeSet<String>,
}

impl JavaEmitter {
    pub fn new(output: OutputDir, package: impl Into<String>, profile: RenderProfile) -> Self {
        Self {
            output,
            package: package.into(),
            profile,
            siblings: BTreeSet::new(),
        }
    }

    /// Render without writing
    pub fn render(&self, spec: &ClassSpec) -> String {
        render_class(spec, &self.package, &self.profile, &self.siblings)
    }

    /// Where a spec will be written
    pub fn file_path(&self, spec: &ClassSpec) -> PathBuf {
        self.output
            .package_dir(&self.package)
            .join(format!("{}.java", spec.name))
    }
}

impl SourceEmitter for JavaEmitter {
    fn begin(&mut self, specs: &[ClassSpec]) {
        self.siblings = specs.iter().map(|spec| spec.name.clone()).collect();
    }

    fn write(&mut self, spec: &ClassSpec) -> io::Result<PathBuf> {
        let path = self.file_path(spec);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, self.render(spec))?;
        Ok(path)
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Render a full compilation unit.
///
/// `siblings` are the other classes generated into the same package; a
/// `java.lang` type sharing a simple name with one of them is written qualified.
pub fn render_class(
    spec: &ClassSpec,
    package: &str,
    profile: &RenderProfile,
    siblings: &BTreeSet<String>,
) -> String {
    let mut imports = Imports::new(package, &spec.name, siblings);

    // Resolve every name first so the import block is complete
    let class_annotation = imports.reference(&profile.annotations.content_type);
    let element_annotation = imports.reference(&profile.annotations.element);
    let field_types: Vec<String> = spec
        .fields
        .iter()
        .map(|field| render_type(&field.type_descriptor, profile, &mut imports))
        .collect();
    let indent = profile.indent.as_str();

    let mut output = String::new();

    if !package.is_empty() {
        output.push_str(&format!("package {};\n\n", package));
    }

    let import_lines = imports.lines(!spec.fields.is_empty(), &profile.annotations.element);
    if !import_lines.is_empty() {
        for line in import_lines {
            output.push_str(&format!("import {};\n", line));
        }
        output.push('\n');
    }

    // Class Javadoc
    output.push_str("/**\n");
    for line in &spec.documentation {
        if line.is_empty() {
            output.push_str(" *\n");
        } else {
            output.push_str(&format!(" * {}\n", line));
        }
    }
    output.push_str(" */\n");

    output.push_str(&format!("@{}({})\n", class_annotation, string_literal(&spec.provenance)));
    output.push_str(&format!("public class {} {{\n", spec.name));

    // Fields
    for (field, type_name) in spec.fields.iter().zip(&field_types) {
        output.push_str(&format!(
            "{}@{}({})\n",
            indent,
            element_annotation,
            string_literal(&field.source_codename)
        ));
        output.push_str(&format!(
            "{}{} {};\n\n",
            indent,
            type_name,
            profile.escape_keyword(&field.name)
        ));
    }

    // Accessors
    for accessor in &spec.accessors {
        let Some(index) = spec.fields.iter().position(|f| f.name == accessor.field) else {
            continue;
        };
        let type_name = &field_types[index];
        let field_name = profile.escape_keyword(&accessor.field);
        let method_name = profile.escape_method(&accessor.name);

        match accessor.kind {
            AccessorKind::Getter => {
                output.push_str(&format!("{}public {} {}() {{\n", indent, type_name, method_name));
                output.push_str(&format!("{0}{0}return {1};\n", indent, field_name));
            }
            AccessorKind::Setter => {
                output.push_str(&format!(
                    "{}public void {}({} {}) {{\n",
                    indent, method_name, type_name, field_name
                ));
                output.push_str(&format!("{0}{0}this.{1} = {1};\n", indent, field_name));
            }
        }
        output.push_str(&format!("{}}}\n\n", indent));
    }

    // Drop the blank line after the last member
    if output.ends_with("\n\n") {
        output.pop();
    }
    output.push_str("}\n");

    output
}

fn render_type(descriptor: &TypeDescriptor, profile: &RenderProfile, imports: &mut Imports) -> String {
    match descriptor {
        TypeDescriptor::Scalar(scalar) => imports.reference(profile.scalar_type(*scalar)),
        TypeDescriptor::ListOf(domain) => {
            let list = imports.reference(&profile.types.list);
            let item = imports.reference(profile.domain_type(*domain));
            format!("{}<{}>", list, item)
        }
        TypeDescriptor::Reference(domain) => imports.reference(profile.domain_type(*domain)),
    }
}

fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

// =============================================================================
// Imports
// =============================================================================

/// Tracks simple-name bindings. The first qualified name to claim a simple
/// name is imported; later ones with the same simple name stay qualified.
struct Imports {
    package: String,
    /// simple name -> qualified name
    bound: BTreeMap<String, String>,
    /// Same-package classes, which shadow `java.lang`
    siblings: BTreeSet<String>,
}

impl Imports {
    fn new(package: &str, class_name: &str, siblings: &BTreeSet<String>) -> Self {
        let mut bound = BTreeMap::new();
        // The generated class owns its simple name
        bound.insert(class_name.to_string(), qualify(package, class_name));
        Self {
            package: package.to_string(),
            bound,
            siblings: siblings.clone(),
        }
    }

    /// Name to use in source for a qualified type
    fn reference(&mut self, qualified: &str) -> String {
        let simple = simple_name(qualified);
        if package_of(qualified) == "java.lang" && self.siblings.contains(simple) {
            return qualified.to_string();
        }
        match self.bound.get(simple) {
            Some(existing) if existing == qualified => simple.to_string(),
            Some(_) => qualified.to_string(),
            None => {
                self.bound.insert(simple.to_string(), qualified.to_string());
                simple.to_string()
            }
        }
    }

    /// Sorted import lines. The element annotation is bound eagerly but only
    /// imported when the class has fields.
    fn lines(&self, has_fields: bool, element_annotation: &str) -> Vec<String> {
        let mut lines: Vec<String> = self
            .bound
            .values()
            .filter(|qualified| {
                let package = package_of(qualified);
                !package.is_empty() && package != "java.lang" && package != self.package
            })
            .filter(|qualified| has_fields || qualified.as_str() != element_annotation)
            .cloned()
            .collect();
        lines.sort();
        lines
    }
}

fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package, name)
    }
}

fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

fn package_of(qualified: &str) -> &str {
    qualified.rsplit_once('.').map(|(package, _)| package).unwrap_or("")
}
