//! Content Codegen CLI
//!
//! Generates Java model classes from a saved content type listing.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use content_codegen::{
    FileSchemaProvider, Generator, GeneratorConfig, JavaEmitter, OutputDir, SchemaProvider,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "content-codegen")]
#[command(about = "Generate model classes from content type schemas")]
#[command(version)]
struct Cli {
    /// Saved type listing (JSON)
    #[arg(short, long)]
    schema: Option<PathBuf>,

    /// Source root for generated files
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Package for generated classes
    #[arg(short, long)]
    package: Option<String>,

    /// Additional config file
    #[arg(short, long)]
    config: Option<String>,

    /// Build and report, but write nothing
    #[arg(long)]
    dry_run: bool,

    /// Print the generated class specs as JSON
    #[arg(long)]
    dump_specs: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = GeneratorConfig::load_from(cli.config.as_deref())?;
    if let Some(output) = cli.output {
        config.output.directory = output;
    }
    if let Some(package) = cli.package {
        config.output.package = package;
    }
    if let Some(schema) = cli.schema {
        config.schema.path = Some(schema);
    }

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    // Output location is checked before any schema work
    let output_dir = if cli.dry_run {
        OutputDir::check(&config.output.directory)?;
        None
    } else {
        Some(OutputDir::prepare(&config.output.directory)?)
    };

    let Some(schema_path) = config.schema.path.clone() else {
        bail!("no schema given, pass --schema or set [schema] path");
    };

    println!("📦 Content Codegen");
    println!("  Schema:  {}", schema_path.display());
    println!("  Output:  {}", config.output.directory.display());
    println!("  Package: {}", config.output.package);
    println!();

    let provider = FileSchemaProvider::new(&schema_path);
    let generator = Generator::new(config.codegen.clone());

    let Some(output_dir) = output_dir else {
        let types = provider
            .fetch_content_types()
            .with_context(|| format!("loading {}", schema_path.display()))?;
        let generated = generator.generate_all_with_diagnostics(&types);

        for spec in &generated.specs {
            println!("  {} ({} fields)", spec.name, spec.fields.len());
        }
        if cli.dump_specs {
            println!("{}", serde_json::to_string_pretty(&generated.specs)?);
        }
        print_diagnostics(&generated.diagnostics);
        println!();
        println!("🔍 Dry run: {} classes, nothing written", generated.specs.len());
        return Ok(());
    };

    let mut emitter = JavaEmitter::new(output_dir, &config.output.package, config.render.clone());
    let summary = generator.run(&provider, &mut emitter)?;

    for path in &summary.written {
        println!("  ✅ {}", path.display());
    }
    if cli.dump_specs {
        println!("{}", serde_json::to_string_pretty(&summary.specs)?);
    }
    print_diagnostics(&summary.diagnostics);
    println!();
    println!("✅ Generated {} classes", summary.written.len());

    Ok(())
}

fn print_diagnostics(diagnostics: &content_codegen::codegen::Diagnostics) {
    if diagnostics.is_empty() {
        return;
    }
    println!();
    println!("⚠️  {} diagnostics:", diagnostics.len());
    for item in diagnostics.items() {
        println!("  {}", item);
    }
}
