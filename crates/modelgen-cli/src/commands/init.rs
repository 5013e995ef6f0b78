//! `modelgen init`: create a configuration file and, optionally, editable
//! copies of the default templates.

use std::path::{Path, PathBuf};

use modelgen_adapters::builtin_templates;
use modelgen_core::domain::ArtifactKind;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Resource root that the template discovery searches.
const RESOURCE_ROOT: [&str; 3] = ["src", "main", "resources"];

pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = if args.global {
        AppConfig::config_path()
    } else {
        PathBuf::from(LOCAL_CONFIG_FILE)
    };
    write_config(&config_path, args.force, &output)?;

    if args.templates {
        let root = RESOURCE_ROOT.iter().fold(PathBuf::from("."), |p, s| p.join(s));
        let written = export_templates(&root, args.force)?;
        if written.is_empty() {
            output.warning("Templates already exist (use --force to overwrite)")?;
        }
        for path in written {
            output.success(&format!("Template written to {}", path.display()))?;
        }
    }

    Ok(())
}

fn write_config(path: &Path, force: bool, output: &OutputManager) -> CliResult<()> {
    if path.exists() && !force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            path.display(),
        ))?;
        return Ok(());
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create config directory '{}'", parent.display()))?;
    }
    std::fs::write(path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    output.success(&format!("Configuration created at {}", path.display()))?;
    Ok(())
}

/// Copy every built-in default to its custom path under `root`, so that the
/// copies take precedence on the next run. Returns the files written.
fn export_templates(root: &Path, force: bool) -> CliResult<Vec<PathBuf>> {
    let mut written = Vec::new();
    for kind in ArtifactKind::ALL {
        let Some(paths) = kind.template_paths() else {
            continue;
        };
        let Some(body) = builtin_templates::get(paths.default) else {
            continue;
        };
        let target = root.join(paths.custom);
        if target.exists() && !force {
            continue;
        }
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).with_cli_context(|| {
                format!("Failed to create template directory '{}'", parent.display())
            })?;
        }
        std::fs::write(&target, body)
            .with_cli_context(|| format!("Failed to write template '{}'", target.display()))?;
        written.push(target);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn export_writes_one_template_per_templated_kind() {
        let dir = TempDir::new().unwrap();
        let written = export_templates(dir.path(), false).unwrap();

        assert_eq!(written.len(), 5);
        let repo = dir.path().join("codetemplate/repository.template");
        assert_eq!(
            std::fs::read_to_string(repo).unwrap(),
            builtin_templates::REPOSITORY
        );
    }

    #[test]
    fn export_keeps_edited_templates_without_force() {
        let dir = TempDir::new().unwrap();
        let service = dir.path().join("codetemplate/service.template");
        std::fs::create_dir_all(service.parent().unwrap()).unwrap();
        std::fs::write(&service, "edited").unwrap();

        let written = export_templates(dir.path(), false).unwrap();
        assert_eq!(written.len(), 4);
        assert_eq!(std::fs::read_to_string(&service).unwrap(), "edited");

        let forced = export_templates(dir.path(), true).unwrap();
        assert_eq!(forced.len(), 5);
        assert_ne!(std::fs::read_to_string(&service).unwrap(), "edited");
    }
}
