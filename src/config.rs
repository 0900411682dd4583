//! Configuration management for the generator
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (content-codegen.toml)
//! - Environment variables (CODEGEN__*)
//!
//! ## Example config file (content-codegen.toml):
//! ```toml
//! [output]
//! directory = "./src/main/java"
//! package = "com.example.models"
//!
//! [schema]
//! path = "./types.json"
//!
//! [codegen.naming]
//! acronyms = ["SKU", "URL"]
//!
//! [codegen.diagnostics]
//! unsupported_element = "warn"
//! field_name_collision = "error"
//!
//! [render.types]
//! number = "java.math.BigDecimal"
//! ```

use std::path::PathBuf;

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::codegen::{CodegenConfig, RenderProfile};
use crate::error::Result;

/// Main configuration for the generator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Where and under which package classes are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Schema source
    #[serde(default)]
    pub schema: SchemaSourceConfig,

    /// Naming and diagnostics
    #[serde(default)]
    pub codegen: CodegenConfig,

    /// Target type and annotation names
    #[serde(default)]
    pub render: RenderProfile,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Source root for generated files
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,

    /// Package for generated classes
    #[serde(default = "default_package")]
    pub package: String,
}

/// Schema source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaSourceConfig {
    /// Saved type listing response
    #[serde(default)]
    pub path: Option<PathBuf>,
}

// Default value functions
fn default_output_directory() -> PathBuf {
    PathBuf::from("./generated")
}

fn default_package() -> String {
    "com.example.models".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            package: default_package(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration, adding a specific file on top of the defaults
    pub fn load_from(config_path: Option<&str>) -> Result<Self> {
        Self::load_layers(config_path, Self::environment())
    }

    /// `CODEGEN__OUTPUT__PACKAGE=com.acme.models`,
    /// `CODEGEN__CODEGEN__NAMING__ACRONYMS=SKU,URL`
    fn environment() -> Environment {
        Environment::with_prefix("CODEGEN")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("codegen.naming.acronyms")
    }

    fn load_layers(config_path: Option<&str>, environment: Environment) -> Result<Self> {
        let mut builder = Config::builder();

        let config_locations = [
            "content-codegen.toml",
            ".content-codegen.toml",
            "config/content-codegen.toml",
        ];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "familiar", "content-codegen") {
            let xdg_config = config_dir.config_dir().join("content-codegen.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(environment);

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> std::io::Result<String> {
        toml::to_string_pretty(self).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
