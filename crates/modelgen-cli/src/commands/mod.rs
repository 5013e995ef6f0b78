//! Subcommand handlers and the adapter wiring they share.

use std::path::{Path, PathBuf};

use tracing::debug;

use modelgen_adapters::{
    BuildOutputSourceRoot, FilesystemTemplateLoader, FixedSourceRoot, InMemoryTemplateStore,
    LayeredTemplateLoader, LocalFilesystem, SourceTreeModelResolver, StdoutConsole,
    builtin_templates, source_root::SOURCE_DIR,
};
use modelgen_core::application::{
    GenerationService, OutputService, SourceRootResolver, TemplateService,
};

use crate::error::CliResult;

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;

/// Pick the source root models are read from and artifacts are written to.
///
/// An explicit directory wins. Otherwise `./src/main/java` is used when it
/// exists, and finally the root is derived from the executable's build
/// output directory.
pub(crate) fn resolve_source_root(explicit: Option<&Path>) -> CliResult<PathBuf> {
    if let Some(dir) = explicit {
        debug!(root = %dir.display(), "Using explicit source root");
        return Ok(dir.to_path_buf());
    }

    let cwd_root = SOURCE_DIR.iter().fold(PathBuf::from("."), |p, s| p.join(s));
    if cwd_root.is_dir() {
        debug!(root = %cwd_root.display(), "Using source root under the working directory");
        return Ok(cwd_root);
    }

    Ok(BuildOutputSourceRoot::from_current_exe()?.source_root()?)
}

/// Template lookup order: `--template-dir`, discovered roots, built-ins.
pub(crate) fn template_loader(template_dir: Option<&Path>) -> CliResult<LayeredTemplateLoader> {
    let mut loader = LayeredTemplateLoader::new();
    if let Some(dir) = template_dir {
        loader = loader.with_layer(FilesystemTemplateLoader::new(dir));
    }
    for root in builtin_templates::template_roots() {
        loader = loader.with_layer(FilesystemTemplateLoader::new(root));
    }
    Ok(loader.with_layer(InMemoryTemplateStore::with_builtin()?))
}

/// Wire the generation service against the local filesystem.
pub(crate) fn build_service(
    source_root: &Path,
    template_dir: Option<&Path>,
) -> CliResult<GenerationService> {
    let templates = TemplateService::new(Box::new(template_loader(template_dir)?));
    let output = OutputService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(StdoutConsole::new()),
    );
    Ok(GenerationService::new(
        Box::new(SourceTreeModelResolver::new(source_root)),
        templates,
        output,
        Box::new(FixedSourceRoot::new(source_root)),
    ))
}
