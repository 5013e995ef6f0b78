//! Implementation of the `modelgen list` command.

use serde::Serialize;

use modelgen_core::application::{
    ArtifactInfo, GenerationService, TemplateOrigin, TemplateService,
};

use crate::{
    cli::{ListArgs, ListFormat, ListSubject},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let template_dir = args.template_dir.or(config.paths.template_dir);

    match args.subject {
        ListSubject::Models => {
            let source_root = args.source_root.or(config.paths.source_root);
            let root = super::resolve_source_root(source_root.as_deref())?;
            let service = super::build_service(&root, template_dir.as_deref())?;
            let namespace = args
                .namespace
                .or(config.generator.namespace)
                .ok_or(CliError::MissingArgument {
                    name: "namespace",
                    flag: "--namespace <PACKAGE>",
                    config_key: "generator.namespace",
                })?;
            list_models(&service, &namespace, args.format, &output)
        }
        ListSubject::Artifacts => {
            let templates =
                TemplateService::new(Box::new(super::template_loader(template_dir.as_deref())?));
            list_artifacts(&templates, args.format, &output)
        }
    }
}

fn list_models(
    service: &GenerationService,
    namespace: &str,
    format: ListFormat,
    output: &OutputManager,
) -> CliResult<()> {
    let models = service.list_models(namespace)?;

    match format {
        ListFormat::Table => {
            output.header(&format!("Models in {namespace}:"))?;
            if models.is_empty() {
                output.warning("No models found")?;
            }
            for model in &models {
                output.print(&format!("  {}", simple_name(model)))?;
            }
        }
        ListFormat::Json => output.json(&models)?,
        ListFormat::List => {
            for model in &models {
                println!("{model}");
            }
        }
        ListFormat::Csv => {
            println!("qualified_name,name");
            for model in &models {
                println!("{model},{}", simple_name(model));
            }
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct ArtifactRow {
    kind: &'static str,
    class_suffix: &'static str,
    package: &'static str,
    template: &'static str,
    origin: &'static str,
}

impl From<&ArtifactInfo> for ArtifactRow {
    fn from(info: &ArtifactInfo) -> Self {
        let template = match info.origin {
            TemplateOrigin::Custom => info.custom_template,
            _ => info.default_template,
        };
        Self {
            kind: info.kind.as_str(),
            class_suffix: info.class_suffix,
            package: info.package_segment,
            template: template.unwrap_or("-"),
            origin: info.origin.as_str(),
        }
    }
}

fn list_artifacts(
    templates: &TemplateService,
    format: ListFormat,
    output: &OutputManager,
) -> CliResult<()> {
    let rows: Vec<ArtifactRow> = templates
        .describe()?
        .iter()
        .map(ArtifactRow::from)
        .collect();

    match format {
        ListFormat::Table => {
            output.header("Artifact kinds:")?;
            output.print(&format!(
                "  {:<14} {:<12} {:<11} {:<8} {}",
                "KIND", "SUFFIX", "PACKAGE", "ORIGIN", "TEMPLATE"
            ))?;
            for row in &rows {
                output.print(&format!(
                    "  {:<14} {:<12} {:<11} {:<8} {}",
                    row.kind, row.class_suffix, row.package, row.origin, row.template
                ))?;
            }
        }
        ListFormat::Json => output.json(&rows)?,
        ListFormat::List => {
            for row in &rows {
                println!("{}", row.kind);
            }
        }
        ListFormat::Csv => {
            println!("kind,class_suffix,package,origin,template");
            for row in &rows {
                println!(
                    "{},{},{},{},{}",
                    row.kind, row.class_suffix, row.package, row.origin, row.template
                );
            }
        }
    }
    Ok(())
}

fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelgen_core::domain::ArtifactKind;

    #[test]
    fn simple_name_strips_package() {
        assert_eq!(simple_name("com.acme.entities.User"), "User");
        assert_eq!(simple_name("User"), "User");
    }

    #[test]
    fn custom_origin_shows_custom_template() {
        let info = ArtifactInfo {
            kind: ArtifactKind::Repository,
            class_suffix: "Repository",
            package_segment: "repository",
            custom_template: Some("codetemplate/repository.template"),
            default_template: Some("codetemplate/repository-default.template"),
            origin: TemplateOrigin::Custom,
        };
        let row = ArtifactRow::from(&info);
        assert_eq!(row.template, "codetemplate/repository.template");
        assert_eq!(row.origin, "custom");
    }

    #[test]
    fn dto_row_has_no_template() {
        let info = ArtifactInfo {
            kind: ArtifactKind::Dto,
            class_suffix: "DTO",
            package_segment: "dto",
            custom_template: None,
            default_template: None,
            origin: TemplateOrigin::Model,
        };
        let row = ArtifactRow::from(&info);
        assert_eq!(row.template, "-");
        assert_eq!(row.kind, "dto");
    }
}
