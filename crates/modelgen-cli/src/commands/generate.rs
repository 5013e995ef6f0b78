//! `modelgen generate`: derive artifacts for the selected models.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument};

use modelgen_core::application::{ArtifactStatus, EmitOutcome, GenerationReport};
use modelgen_core::domain::{DomainError, GenerationRequest, OutputMode};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Flags merged over configuration.
#[derive(Debug)]
struct Resolved {
    request: GenerationRequest,
    source_root: Option<PathBuf>,
    template_dir: Option<PathBuf>,
}

/// Run one generation and report what happened to every artifact.
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let resolved = resolve(args, config)?;
    info!(request = %resolved.request, "Generating");

    let root = super::resolve_source_root(resolved.source_root.as_deref())?;
    let service = super::build_service(&root, resolved.template_dir.as_deref())?;
    let report = service.generate(&resolved.request)?;

    summarize(&report, resolved.request.output(), &output)?;

    let failed = report.failures().len();
    if failed > 0 {
        return Err(CliError::PartialFailure {
            failed,
            total: report.records().len(),
        });
    }
    Ok(())
}

fn resolve(args: GenerateArgs, config: AppConfig) -> CliResult<Resolved> {
    let generator = config.generator;

    let namespace = args
        .namespace
        .or(generator.namespace)
        .ok_or(CliError::MissingArgument {
            name: "namespace",
            flag: "--namespace <PACKAGE>",
            config_key: "generator.namespace",
        })?;

    let mut builder = GenerationRequest::builder().namespace(namespace);
    builder = match args.models {
        Some(csv) => builder.models_csv(&csv),
        None => builder.models(&generator.models),
    };

    let output_mode = args.output.unwrap_or(generator.output);
    builder = builder
        .output(output_mode)
        .overwrite(args.overwrite || generator.overwrite)
        .id_type(args.id_type.unwrap_or(generator.id_type));

    if let Some(segment) = args.entity_package.or(generator.entity_package) {
        builder = builder.entity_package(segment);
    }
    if let Some(base) = args.dto_base_class.or(generator.dto_base_class) {
        builder = builder.dto_base_class(base);
    }

    let artifacts = if args.artifacts.is_empty() {
        generator.artifacts
    } else {
        args.artifacts
    };
    if !artifacts.is_empty() {
        builder = builder.artifacts(&artifacts);
    }

    let request = builder.build().map_err(|e| match e {
        DomainError::MissingRequiredField { field: "models" } => {
            CliError::MissingArgument {
                name: "models",
                flag: "--models <NAMES>",
                config_key: "generator.models",
            }
        }
        other => CliError::Core(other.into()),
    })?;

    Ok(Resolved {
        request,
        source_root: args.source_root.or(config.paths.source_root),
        template_dir: args.template_dir.or(config.paths.template_dir),
    })
}

#[derive(Debug, Serialize)]
struct RecordRow<'a> {
    model: &'a str,
    kind: &'static str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn rows(report: &GenerationReport) -> Vec<RecordRow<'_>> {
    report
        .records()
        .iter()
        .map(|record| {
            let (status, path, error) = match &record.status {
                ArtifactStatus::Emitted(outcome) => (
                    outcome.as_str(),
                    outcome.path().map(|p| p.display().to_string()),
                    None,
                ),
                ArtifactStatus::Failed(err) => ("failed", None, Some(err.to_string())),
            };
            RecordRow {
                model: &record.model,
                kind: record.kind.as_str(),
                status,
                path,
                error,
            }
        })
        .collect()
}

fn summarize(report: &GenerationReport, mode: OutputMode, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        // Console-mode artifacts already occupy stdout.
        if mode == OutputMode::File {
            output.json(&rows(report))?;
        }
        return Ok(());
    }

    for record in report.records() {
        match &record.status {
            ArtifactStatus::Emitted(EmitOutcome::Written { path }) => {
                output.success(&format!("{} {}", record.kind.label(), path.display()))?;
            }
            ArtifactStatus::Emitted(EmitOutcome::SkippedExisting { path }) => {
                output.warning(&format!(
                    "{} {} exists, printed instead (use --overwrite to replace)",
                    record.kind.label(),
                    path.display()
                ))?;
            }
            ArtifactStatus::Emitted(EmitOutcome::Echoed) => {}
            ArtifactStatus::Failed(err) => {
                output.error(&format!("{} for {}: {err}", record.kind.label(), record.model))?;
            }
        }
    }

    if mode == OutputMode::File {
        output.info(&format!(
            "{} written, {} skipped, {} failed",
            report.written().len(),
            report.skipped().len(),
            report.failures().len()
        ))?;
    }
    Ok(())
}
