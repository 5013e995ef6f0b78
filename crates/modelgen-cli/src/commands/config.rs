//! `modelgen config`: inspect the effective configuration.

use serde_json::Value;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `generator.id_type`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let tree = serde_json::to_value(config)?;
    let value = key
        .split('.')
        .try_fold(&tree, |node, segment| node.get(segment))
        .ok_or_else(|| CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        })?;

    Ok(match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "generator.id_type").unwrap(), "long");
        assert_eq!(get_config_value(&cfg, "generator.output").unwrap(), "file");
    }

    #[test]
    fn get_list_key_renders_json() {
        let mut cfg = AppConfig::default();
        cfg.generator.artifacts = vec![modelgen_core::domain::ArtifactKind::ServiceImpl];
        assert_eq!(
            get_config_value(&cfg, "generator.artifacts").unwrap(),
            "[\"service-impl\"]"
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn unset_optional_key_is_unknown() {
        let cfg = AppConfig::default();
        assert!(get_config_value(&cfg, "generator.namespace").is_err());
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
