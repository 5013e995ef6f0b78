//! Output Service - where a generated body ends up.
//!
//! Console output is always written and bannered with the artifact kind.
//! File output creates parent directories, and when the file already exists
//! with overwrite disabled it leaves the file alone and echoes the body to
//! the console under a warning banner instead.

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::{
    application::ports::{Console, Filesystem},
    domain::ArtifactKind,
    error::ModelgenResult,
};

const BANNER_RULE: &str = "////////////////////////////";

/// Where one artifact should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Console,
    File { path: PathBuf, overwrite: bool },
}

/// What `emit` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    /// The file was created or replaced.
    Written { path: PathBuf },
    /// The body went to the console.
    Echoed,
    /// The file existed and overwrite was off; the body was echoed instead.
    SkippedExisting { path: PathBuf },
}

impl EmitOutcome {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Written { .. } => "written",
            Self::Echoed => "echoed",
            Self::SkippedExisting { .. } => "skipped",
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Written { path } | Self::SkippedExisting { path } => Some(path),
            Self::Echoed => None,
        }
    }
}

/// Service for emitting generated bodies.
pub struct OutputService {
    filesystem: Box<dyn Filesystem>,
    console: Box<dyn Console>,
}

impl OutputService {
    pub fn new(filesystem: Box<dyn Filesystem>, console: Box<dyn Console>) -> Self {
        Self {
            filesystem,
            console,
        }
    }

    /// Emit one generated body.
    #[instrument(skip_all, fields(kind = %kind))]
    pub fn emit(
        &self,
        kind: ArtifactKind,
        body: &str,
        target: &OutputTarget,
    ) -> ModelgenResult<EmitOutcome> {
        match target {
            OutputTarget::Console => {
                self.echo(kind, body, None)?;
                Ok(EmitOutcome::Echoed)
            }
            OutputTarget::File { path, overwrite } => {
                if !overwrite && self.filesystem.exists(path) {
                    warn!(path = %path.display(), "File exists and overwrite is disabled, echoing instead");
                    self.echo(kind, body, Some(path))?;
                    return Ok(EmitOutcome::SkippedExisting { path: path.clone() });
                }
                if let Some(parent) = path.parent() {
                    self.filesystem.create_dir_all(parent)?;
                }
                self.filesystem.write_file(path, body)?;
                info!(path = %path.display(), "Generated file written");
                Ok(EmitOutcome::Written { path: path.clone() })
            }
        }
    }

    fn echo(&self, kind: ArtifactKind, body: &str, skipped: Option<&Path>) -> ModelgenResult<()> {
        let mut block = String::new();
        if let Some(path) = skipped {
            block.push_str(&format!(
                "{} already exists and overwrite is disabled; the generated code follows:\n",
                path.display()
            ));
        }
        block.push_str(&banner(kind));
        block.push('\n');
        block.push_str(body);
        block.push('\n');
        self.console.write_block(&block)
    }
}

/// The three banner lines framing echoed output.
pub fn banner(kind: ArtifactKind) -> String {
    format!("{BANNER_RULE}\n/// {} file output\n{BANNER_RULE}", kind.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockConsole;
    use crate::error::ModelgenError;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct FakeFs {
        files: Arc<Mutex<HashMap<PathBuf, String>>>,
        dirs: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl Filesystem for FakeFs {
        fn create_dir_all(&self, path: &Path) -> ModelgenResult<()> {
            self.dirs.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
        fn write_file(&self, path: &Path, content: &str) -> ModelgenResult<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }
        fn read_to_string(&self, path: &Path) -> ModelgenResult<String> {
            self.files
                .lock()
                .unwrap()
                .get(path)
                .cloned()
                .ok_or_else(|| ModelgenError::Internal {
                    message: "missing".into(),
                })
        }
        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }
    }

    #[test]
    fn console_mode_echoes_with_banner() {
        let mut console = MockConsole::new();
        console
            .expect_write_block()
            .withf(|text| text.contains("/// Repository file output") && text.contains("BODY"))
            .times(1)
            .returning(|_| Ok(()));
        let svc = OutputService::new(Box::new(FakeFs::default()), Box::new(console));

        let outcome = svc
            .emit(ArtifactKind::Repository, "BODY", &OutputTarget::Console)
            .unwrap();
        assert_eq!(outcome, EmitOutcome::Echoed);
    }

    #[test]
    fn file_mode_creates_parents_and_writes() {
        let fs = FakeFs::default();
        let mut console = MockConsole::new();
        console.expect_write_block().never();
        let svc = OutputService::new(Box::new(fs.clone()), Box::new(console));

        let path = PathBuf::from("/out/com/acme/dto/UserDTO.java");
        let target = OutputTarget::File {
            path: path.clone(),
            overwrite: false,
        };
        let outcome = svc.emit(ArtifactKind::Dto, "class UserDTO {}", &target).unwrap();

        assert_eq!(outcome, EmitOutcome::Written { path: path.clone() });
        assert_eq!(fs.read_to_string(&path).unwrap(), "class UserDTO {}");
        assert!(fs.dirs.lock().unwrap().contains(&PathBuf::from("/out/com/acme/dto")));
    }

    #[test]
    fn existing_file_without_overwrite_is_untouched_and_echoed() {
        let fs = FakeFs::default();
        let path = PathBuf::from("/out/UserDTO.java");
        fs.write_file(&path, "original bytes").unwrap();

        let mut console = MockConsole::new();
        console
            .expect_write_block()
            .withf(|text| text.contains("already exists") && text.contains("new body"))
            .times(1)
            .returning(|_| Ok(()));
        let svc = OutputService::new(Box::new(fs.clone()), Box::new(console));

        let target = OutputTarget::File {
            path: path.clone(),
            overwrite: false,
        };
        let outcome = svc.emit(ArtifactKind::Dto, "new body", &target).unwrap();

        assert_eq!(outcome, EmitOutcome::SkippedExisting { path: path.clone() });
        assert_eq!(fs.read_to_string(&path).unwrap(), "original bytes");
    }

    #[test]
    fn existing_file_with_overwrite_is_replaced() {
        let fs = FakeFs::default();
        let path = PathBuf::from("/out/UserDTO.java");
        fs.write_file(&path, "old").unwrap();
        let svc = OutputService::new(Box::new(fs.clone()), Box::new(MockConsole::new()));

        let target = OutputTarget::File {
            path: path.clone(),
            overwrite: true,
        };
        svc.emit(ArtifactKind::Dto, "new", &target).unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn banner_has_three_lines() {
        assert_eq!(banner(ArtifactKind::ServiceImpl).lines().count(), 3);
    }
}
