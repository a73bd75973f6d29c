//! Command dispatch and handlers

use std::path::Path;

use tracing::{debug, instrument};

use crate::application::services::{CreateAction, ParamService};
use crate::cli::args::{Commands, OutputFormat};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::domain::{short_name, trim_path, EcsSecret, ParameterKind};

pub async fn execute_command(command: &Commands, service: &ParamService) -> CliResult<()> {
    match command {
        Commands::Create { path, file, kind } => _create(service, path, file, *kind).await,
        Commands::Get { path, output } => _get(service, path, *output).await,
        Commands::Delete { path } => _delete(service, path).await,
        // Completion never reaches dispatch; main handles it before a session exists.
        Commands::Completion { .. } => Ok(()),
    }
}

#[instrument(skip(service))]
async fn _create(
    service: &ParamService,
    path: &str,
    file: &Path,
    kind: ParameterKind,
) -> CliResult<()> {
    debug!("path: {:?}, file: {:?}, kind: {:?}", path, file, kind);
    let outcomes = service.create_from_file(path, file, kind).await?;

    for outcome in &outcomes {
        match outcome.action {
            CreateAction::Added => {
                output::action("Added", &format!("the parameter '{}'", outcome.name));
            }
            CreateAction::Unchanged => {
                output::info(&format!(
                    "No action required. The parameter '{}' value is up to date.",
                    outcome.name
                ));
            }
            CreateAction::Updated => {
                output::action(
                    "Updated",
                    &format!("the parameter '{}' with a new value", outcome.name),
                );
            }
        }
    }

    if outcomes.is_empty() {
        output::info("No detected parameters in the specified file!");
        output::info("The expected format in the file is 'VAR_NAME=foo' or 'VAR_NAME = foo'");
    }
    Ok(())
}

#[instrument(skip(service))]
async fn _get(service: &ParamService, path: &str, format: OutputFormat) -> CliResult<()> {
    debug!("path: {:?}, format: {:?}", path, format);
    let parameters = service.list(path, format.wants_decryption()).await?;
    let base = trim_path(path);

    if parameters.is_empty() {
        output::info(&format!("No parameters found under '{}'", base));
        return Ok(());
    }

    match format {
        OutputFormat::Ecs => {
            let secrets: Vec<EcsSecret> = parameters
                .iter()
                .map(|p| EcsSecret {
                    name: short_name(&p.name).to_string(),
                    value_from: p.arn.clone(),
                })
                .collect();
            output::header("Add to the 'containerDefinitions[*].secrets' in your task definition:");
            output::info(&serde_json::to_string_pretty(&secrets)?);
        }
        OutputFormat::Text => {
            output::header(&format!(
                "Parameters in format SHORT_NAME=VALUE, '{}' stripped from the names:",
                base
            ));
            for p in &parameters {
                output::info(&format!("{}={}", short_name(&p.name), p.value));
            }
        }
    }
    Ok(())
}

#[instrument(skip(service))]
async fn _delete(service: &ParamService, path: &str) -> CliResult<()> {
    debug!("path: {:?}", path);
    let removed = service.delete_tree(path).await?;
    let base = trim_path(path);

    if removed == 0 {
        output::info(&format!("No parameters found under '{}'", base));
    } else {
        output::action(
            "Removed",
            &format!("{} parameters under '{}'", removed, base),
        );
    }
    Ok(())
}
