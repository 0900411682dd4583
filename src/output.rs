//! Output location and the emitter boundary
//!
//! Directory preparation is an explicit step: nothing touches the filesystem
//! until [`OutputDir::prepare`] is called, and it must succeed before any
//! schema is fetched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::codegen::ClassSpec;
use crate::error::{CodegenError, Result};

/// A prepared, existing output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Fail if the path exists and is not a directory. Creates nothing.
    pub fn check(path: impl AsRef<Path>) -> Result<()> {
        let root = path.as_ref();
        if root.exists() && !root.is_dir() {
            return Err(CodegenError::config(root, "exists and is not a directory"));
        }
        Ok(())
    }

    /// Create the directory if missing, fail if the path is not a directory
    pub fn prepare(path: impl AsRef<Path>) -> Result<Self> {
        let root = path.as_ref().to_path_buf();

        Self::check(&root)?;
        if !root.exists() {
            fs::create_dir_all(&root).map_err(|e| {
                CodegenError::config(&root, format!("unable to create directory: {}", e))
            })?;
            tracing::info!(path = %root.display(), "created output directory");
        }

        Ok(Self { root })
    }

    /// Root path of the output directory
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Directory for a dotted package name (`com.example.models` -> `com/example/models`)
    pub fn package_dir(&self, package: &str) -> PathBuf {
        package
            .split('.')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |dir, segment| dir.join(segment))
    }
}

/// Writes one class spec as a source file.
///
/// Implementations own their target directory and namespace. The driver
/// calls `write` once per spec, in order, and stops at the first error.
pub trait SourceEmitter {
    /// Called once with the whole batch before the first `write`
    fn begin(&mut self, _specs: &[ClassSpec]) {}

    /// Write the spec, returning the path of the written file
    fn write(&mut self, spec: &ClassSpec) -> io::Result<PathBuf>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("nested/generated");

        let output = OutputDir::prepare(&target).unwrap();
        assert!(target.is_dir());
        assert_eq!(output.path(), target.as_path());
    }

    #[test]
    fn test_prepare_accepts_existing_directory() {
        let temp = TempDir::new().unwrap();
        assert!(OutputDir::prepare(temp.path()).is_ok());
    }

    #[test]
    fn test_prepare_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();

        match OutputDir::prepare(&file) {
            Err(CodegenError::Config { path, reason }) => {
                assert_eq!(path, file);
                assert!(reason.contains("not a directory"));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_creates_nothing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("generated");
        assert!(OutputDir::check(&missing).is_ok());
        assert!(!missing.exists());

        let file = temp.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();
        assert!(matches!(OutputDir::check(&file), Err(CodegenError::Config { .. })));
    }

    #[test]
    fn test_package_dir() {
        let temp = TempDir::new().unwrap();
        let output = OutputDir::prepare(temp.path()).unwrap();
        assert_eq!(
            output.package_dir("com.example.models"),
            temp.path().join("com").join("example").join("models")
        );
        assert_eq!(output.package_dir(""), temp.path().to_path_buf());
    }
}
