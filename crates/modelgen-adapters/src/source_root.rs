//! Source root resolvers: where generated files are written.
//!
//! A Maven-style project keeps sources in `<project>/src/main/java` and its
//! build output somewhere under `<project>/target/`. When modelgen runs from
//! a build output directory the project root is everything before that
//! directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use modelgen_core::{application::ports::SourceRootResolver, error::ModelgenResult};

use crate::error::AdapterError;

/// Build output directories recognised under a project root.
pub const BUILD_OUTPUT_DIRS: [&[&str]; 5] = [
    &["target", "classes"],
    &["target", "test-classes"],
    &["target", "debug"],
    &["target", "release"],
    &["build", "classes"],
];

/// Source directory below the project root.
pub const SOURCE_DIR: [&str; 3] = ["src", "main", "java"];

/// Derives the source root from a runtime location inside a build output
/// directory.
#[derive(Debug, Clone)]
pub struct BuildOutputSourceRoot {
    runtime_root: PathBuf,
}

impl BuildOutputSourceRoot {
    pub fn new(runtime_root: impl Into<PathBuf>) -> Self {
        Self {
            runtime_root: runtime_root.into(),
        }
    }

    /// Use the directory of the running executable.
    pub fn from_current_exe() -> ModelgenResult<Self> {
        let exe = std::env::current_exe()
            .map_err(|e| AdapterError::io("locate the running executable", "", e))?;
        let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self::new(dir))
    }
}

impl SourceRootResolver for BuildOutputSourceRoot {
    fn source_root(&self) -> ModelgenResult<PathBuf> {
        let project = project_root(&self.runtime_root).ok_or_else(|| {
            AdapterError::NoBuildOutput {
                path: self.runtime_root.clone(),
            }
        })?;
        let root = SOURCE_DIR.iter().fold(project, |path, s| path.join(s));
        debug!(root = %root.display(), "Source root derived from build output");
        Ok(root)
    }
}

/// Everything before the first recognised build output directory.
pub fn project_root(runtime_root: &Path) -> Option<PathBuf> {
    let components: Vec<_> = runtime_root.components().collect();
    for start in 0..components.len() {
        let matched = BUILD_OUTPUT_DIRS.iter().any(|dir| {
            dir.len() <= components.len() - start
                && dir
                    .iter()
                    .zip(&components[start..])
                    .all(|(want, got)| got.as_os_str() == *want)
        });
        if matched {
            return Some(components[..start].iter().collect());
        }
    }
    None
}

/// A source root given explicitly.
#[derive(Debug, Clone)]
pub struct FixedSourceRoot {
    root: PathBuf,
}

impl FixedSourceRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceRootResolver for FixedSourceRoot {
    fn source_root(&self) -> ModelgenResult<PathBuf> {
        Ok(self.root.clone())
    }
}
