//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};

use modelgen_core::domain::{ArtifactKind, DomainError, IdType, OutputMode};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "modelgen",
    bin_name = "modelgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate DTO, repository, service, convertor and controller sources from entity models",
    long_about = "modelgen reads annotated entity classes and derives the transfer object, \
                  repository, service, service implementation, convertor and controller \
                  for each of them. Relationship fields become id fields and finder methods.",
    after_help = "EXAMPLES:\n\
        \x20 modelgen generate --namespace com.acme.entities --models User,Order\n\
        \x20 modelgen generate -n com.acme.entities -m User --artifacts dto,repository --output console\n\
        \x20 modelgen list models --namespace com.acme.entities\n\
        \x20 modelgen completions bash > /usr/share/bash-completion/completions/modelgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate artifacts for one or more models.
    #[command(
        visible_alias = "g",
        about = "Generate artifacts from entity models",
        after_help = "EXAMPLES:\n\
            \x20 modelgen generate -n com.acme.entities -m User\n\
            \x20 modelgen generate -n com.acme.entities -m User,Order --id-type string --overwrite\n\
            \x20 modelgen generate -n com.acme.entities -m User --artifacts repository,service --output console"
    )]
    Generate(GenerateArgs),

    /// List models or artifact kinds.
    #[command(
        visible_alias = "ls",
        about = "List models or artifact kinds",
        after_help = "EXAMPLES:\n\
            \x20 modelgen list models --namespace com.acme.entities\n\
            \x20 modelgen list artifacts\n\
            \x20 modelgen list artifacts --format json"
    )]
    List(ListArgs),

    /// Initialise a modelgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 modelgen init              # modelgen.toml in the current directory\n\
            \x20 modelgen init --global     # user-wide config\n\
            \x20 modelgen init --templates  # also export the default templates for editing"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 modelgen completions bash > ~/.local/share/bash-completion/completions/modelgen\n\
            \x20 modelgen completions zsh  > ~/.zfunc/_modelgen\n\
            \x20 modelgen completions fish > ~/.config/fish/completions/modelgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 modelgen config get generator.id_type\n\
            \x20 modelgen config list\n\
            \x20 modelgen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `modelgen generate`.
///
/// Every option falls back to the `[generator]` / `[paths]` configuration
/// sections when omitted.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Package that holds the models.
    #[arg(
        short = 'n',
        long = "namespace",
        value_name = "PACKAGE",
        help = "Package containing the models (e.g. com.acme.entities)"
    )]
    pub namespace: Option<String>,

    /// Comma-separated simple model names.
    #[arg(
        short = 'm',
        long = "models",
        value_name = "NAMES",
        help = "Comma-separated model names (e.g. User,Order)"
    )]
    pub models: Option<String>,

    /// Package segment that marks where models live.
    #[arg(
        long = "entity-package",
        value_name = "SEGMENT",
        help = "Package segment of the models (default: last namespace segment)"
    )]
    pub entity_package: Option<String>,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "MODE",
        value_parser = parse_core::<OutputMode>,
        help = "Where artifacts go: file (default) or console"
    )]
    pub output: Option<OutputMode>,

    /// Replace existing files. Ignored for console output.
    #[arg(long = "overwrite", help = "Overwrite existing files")]
    pub overwrite: bool,

    #[arg(
        long = "id-type",
        value_name = "TYPE",
        value_parser = parse_core::<IdType>,
        help = "Primary key type: long (default), string or integer"
    )]
    pub id_type: Option<IdType>,

    #[arg(
        short = 'a',
        long = "artifacts",
        value_name = "KINDS",
        value_delimiter = ',',
        value_parser = parse_core::<ArtifactKind>,
        help = "Artifact kinds to generate: dto,repository,service,service-impl,convertor,controller"
    )]
    pub artifacts: Vec<ArtifactKind>,

    #[arg(
        long = "source-root",
        value_name = "DIR",
        help = "Source root holding the models and receiving output (e.g. src/main/java)"
    )]
    pub source_root: Option<PathBuf>,

    #[arg(
        long = "template-dir",
        value_name = "DIR",
        help = "Directory containing codetemplate/ with custom templates"
    )]
    pub template_dir: Option<PathBuf>,

    #[arg(
        long = "dto-base-class",
        value_name = "CLASS",
        help = "Fully-qualified superclass for generated DTOs"
    )]
    pub dto_base_class: Option<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `modelgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(value_enum, help = "What to list")]
    pub subject: ListSubject,

    /// Package to list models from (defaults to the configured namespace).
    #[arg(short = 'n', long = "namespace", value_name = "PACKAGE")]
    pub namespace: Option<String>,

    #[arg(long = "source-root", value_name = "DIR")]
    pub source_root: Option<PathBuf>,

    #[arg(long = "template-dir", value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListSubject {
    /// Models found under a namespace.
    Models,
    /// Artifact kinds and where their templates come from.
    Artifacts,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `modelgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the user-wide config location instead of `./modelgen.toml`.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Export the default templates as custom templates for editing.
    #[arg(
        long = "templates",
        help = "Write the default templates to src/main/resources/codetemplate/"
    )]
    pub templates: bool,

    /// Overwrite existing files.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `modelgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `modelgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.id_type`.
        key: String,
    },
    /// Print the effective configuration as TOML.
    List,
    /// Print the path to the global configuration file.
    Path,
}

// ── value parsing ─────────────────────────────────────────────────────────────

/// Parse any core value object through its `FromStr`, keeping the domain's
/// message for clap to display.
fn parse_core<T>(s: &str) -> Result<T, String>
where
    T: FromStr<Err = DomainError>,
{
    s.parse::<T>().map_err(|e| e.to_string())
}

// ── tests ─────────────────────────────────────────────────────────────────────
