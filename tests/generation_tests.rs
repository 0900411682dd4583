//! End-to-end generation tests
//!
//! Load a saved type listing, build class specs and write Java sources.

use std::fs;
use std::path::{Path, PathBuf};

use content_codegen::codegen::{
    write_all, CodegenConfig, DiagnosticCode, DiagnosticLevel, DiagnosticsConfig, DomainType,
    RenderProfile, ScalarType,
};
use content_codegen::{
    CodegenError, ContentType, FileSchemaProvider, Generator, JavaEmitter, OutputDir,
    SchemaProvider, TypeDescriptor,
};
use tempfile::TempDir;

const PACKAGE: &str = "com.example.models";

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/types.json")
}

fn emitter_in(dir: &Path) -> JavaEmitter {
    let output = OutputDir::prepare(dir).unwrap();
    JavaEmitter::new(output, PACKAGE, RenderProfile::default())
}

// =============================================================================
// Generation
// =============================================================================

#[test]
fn test_fixture_specs() {
    let types = FileSchemaProvider::new(fixture_path()).fetch_content_types().unwrap();
    let specs = Generator::default().generate_all(&types);

    let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Article", "Coffee", "HeroUnit"]);

    let article = &specs[0];
    let fields: Vec<&str> = article.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        fields,
        vec![
            "title",
            "teaserImage",
            "postDate",
            "summary",
            "bodyCopy",
            "relatedArticles",
            "metaKeywords",
            "personas",
            "metaDescription",
            "urlPattern",
        ]
    );
    assert_eq!(
        article.field("relatedArticles").map(|f| f.type_descriptor),
        Some(TypeDescriptor::Reference(DomainType::ContentItem))
    );

    // brewing_tips is a guidelines element and has no mapping
    let coffee = &specs[1];
    assert_eq!(coffee.fields.len(), types[1].elements.len() - 1);
    assert!(coffee.fields.iter().all(|f| f.source_codename != "brewing_tips"));
    assert_eq!(
        coffee.field("price").map(|f| f.type_descriptor),
        Some(TypeDescriptor::Scalar(ScalarType::Double))
    );

    for spec in &specs {
        assert_eq!(spec.accessors.len(), 2 * spec.fields.len());
    }
}

#[test]
fn test_regeneration_is_identical() {
    let types = FileSchemaProvider::new(fixture_path()).fetch_content_types().unwrap();
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let generator = Generator::default();
    let written_first = write_all(&generator.generate_all(&types), &mut emitter_in(first.path())).unwrap();
    let written_second = write_all(&generator.generate_all(&types), &mut emitter_in(second.path())).unwrap();

    assert_eq!(written_first.len(), 3);
    for (a, b) in written_first.iter().zip(&written_second) {
        assert_eq!(fs::read_to_string(a).unwrap(), fs::read_to_string(b).unwrap());
    }
}

#[test]
fn test_unsupported_elements_reported_when_enabled() {
    let types = FileSchemaProvider::new(fixture_path()).fetch_content_types().unwrap();
    let config = CodegenConfig {
        diagnostics: DiagnosticsConfig {
            unsupported_element: DiagnosticLevel::Warn,
            ..DiagnosticsConfig::default()
        },
        ..CodegenConfig::default()
    };

    let generator = Generator::new(config);
    let output = generator.generate_all_with_diagnostics(&types);

    let skipped: Vec<_> = output.diagnostics.by_code(DiagnosticCode::UnsupportedElement).collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].content_type, "coffee");
    assert_eq!(skipped[0].element.as_deref(), Some("brewing_tips"));
    assert_eq!(output.specs, generator.generate_all(&types));
}

// =============================================================================
// Writing
// =============================================================================

#[test]
fn test_run_writes_package_layout() {
    let temp = TempDir::new().unwrap();
    let mut emitter = emitter_in(temp.path());

    let summary = Generator::default()
        .run(&FileSchemaProvider::new(fixture_path()), &mut emitter)
        .unwrap();

    let package_dir = temp.path().join("com/example/models");
    assert_eq!(
        summary.written,
        vec![
            package_dir.join("Article.java"),
            package_dir.join("Coffee.java"),
            package_dir.join("HeroUnit.java"),
        ]
    );

    let coffee = fs::read_to_string(package_dir.join("Coffee.java")).unwrap();
    assert!(coffee.starts_with("package com.example.models;\n"));
    assert!(coffee.contains("@ContentItemMapping(\"coffee\")\npublic class Coffee {"));
    assert!(coffee.contains("  @ElementMapping(\"product_status\")\n  List<Taxonomy> productStatus;"));
    assert!(coffee.contains("  List<Option> processing;"));
    assert!(coffee.contains("public Double getPrice() {"));
    assert!(!coffee.contains("brewing"));
}

#[test]
fn test_emit_failure_stops_run() {
    let temp = TempDir::new().unwrap();
    let types = FileSchemaProvider::new(fixture_path()).fetch_content_types().unwrap();
    let specs = Generator::default().generate_all(&types);

    // A directory where Coffee.java should go makes the second write fail
    let package_dir = temp.path().join("com/example/models");
    fs::create_dir_all(package_dir.join("Coffee.java")).unwrap();

    let err = write_all(&specs, &mut emitter_in(temp.path())).unwrap_err();
    match err {
        CodegenError::Emit { class_name, .. } => assert_eq!(class_name, "Coffee"),
        other => panic!("Expected Emit error, got {:?}", other),
    }
    assert!(package_dir.join("Article.java").is_file());
    assert!(!package_dir.join("HeroUnit.java").exists());
}

#[test]
fn test_output_dir_must_be_directory() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("generated");
    fs::write(&file, "").unwrap();

    assert!(matches!(OutputDir::prepare(&file), Err(CodegenError::Config { .. })));
}

#[test]
fn test_custom_profile() {
    let temp = TempDir::new().unwrap();
    let mut profile = RenderProfile::default();
    profile.types.number = "java.math.BigDecimal".to_string();
    profile.annotations.content_type = "com.acme.runtime.Mapped".to_string();

    let output = OutputDir::prepare(temp.path()).unwrap();
    let mut emitter = JavaEmitter::new(output, "com.acme", profile);
    let types = FileSchemaProvider::new(fixture_path()).fetch_content_types().unwrap();
    let written = write_all(&Generator::default().generate_all(&types[1..2]), &mut emitter).unwrap();

    let coffee = fs::read_to_string(&written[0]).unwrap();
    assert!(coffee.contains("import java.math.BigDecimal;"));
    assert!(coffee.contains("import com.acme.runtime.Mapped;"));
    assert!(coffee.contains("@Mapped(\"coffee\")"));
    assert!(coffee.contains("  BigDecimal price;"));
    assert_eq!(written[0], temp.path().join("com/acme/Coffee.java"));
}

#[test]
fn test_generated_class_shadowing_java_lang() {
    let temp = TempDir::new().unwrap();
    let types = vec![
        ContentType::new("string").with_element("value", "text"),
        ContentType::new("article").with_element("title", "text"),
    ];
    let written = write_all(&Generator::default().generate_all(&types), &mut emitter_in(temp.path())).unwrap();

    let article = fs::read_to_string(&written[1]).unwrap();
    assert!(article.contains("  java.lang.String title;"));
    assert!(article.contains("public void setTitle(java.lang.String title) {"));
}

#[test]
fn test_class_name_collision_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let types = vec![
        ContentType::new("hero_unit").with_element("title", "text"),
        ContentType::new("hero__unit").with_element("image", "asset"),
    ];

    let err = Generator::default().run(&types, &mut emitter_in(temp.path())).unwrap_err();
    assert!(matches!(err, CodegenError::Diagnostics(_)));
    assert!(!temp.path().join("com/example/models/HeroUnit.java").exists());
}
