//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `MODELGEN_<SECTION>__<KEY>`, e.g.
//!    `MODELGEN_GENERATOR__NAMESPACE=com.acme.entities`
//! 3. The file passed with `--config`
//! 4. `./modelgen.toml`
//! 5. The global file (see [`AppConfig::config_path`])
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use modelgen_core::domain::{ArtifactKind, IdType, OutputMode};

/// Project-local configuration file name.
pub const LOCAL_CONFIG_FILE: &str = "modelgen.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "MODELGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `modelgen generate`.
    pub generator: GeneratorConfig,
    /// Filesystem locations.
    pub paths: PathsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub models: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_package: Option<String>,
    pub id_type: IdType,
    pub output: OutputMode,
    pub overwrite: bool,
    pub artifacts: Vec<ArtifactKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dto_base_class: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: None,
            models: Vec::new(),
            entity_package: None,
            id_type: IdType::default(),
            output: OutputMode::default(),
            overwrite: false,
            artifacts: ArtifactKind::ALL.to_vec(),
            dto_base_class: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from every layer.
    ///
    /// `config_file` is the path the user passed via `--config`; unlike the
    /// global and local files it must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_layers(
            directories_config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            config_file.map(PathBuf::as_path),
        )
    }

    fn load_layers(
        global: Option<&Path>,
        local: &Path,
        explicit: Option<&Path>,
    ) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = global {
            debug!(path = %path.display(), "Global config layer");
            builder = builder.add_source(toml_file(path).required(false));
        }
        builder = builder.add_source(toml_file(local).required(false));
        if let Some(path) = explicit {
            debug!(path = %path.display(), "Explicit config layer");
            builder = builder.add_source(toml_file(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("generator.models")
                .with_list_parse_key("generator.artifacts"),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `modelgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories_config_path().unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

fn directories_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "modelgen", "modelgen")
        .map(|d| d.config_dir().join("config.toml"))
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}
