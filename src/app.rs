use std::path::PathBuf;

use thiserror::Error;

use crate::cli::{Cli, Command};
use crate::compare::compare_to_baseline;
use crate::config::{Config, ConfigError};
use crate::i18n::Translator;
use crate::project::{self, Project, ProjectError};
use crate::report::Formatter;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("project error: {0}")]
    Project(#[from] ProjectError),
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no project file given and no default_project in the config")]
    NoProject,
}

fn project_path(cli: &Cli, config: &Config) -> Result<PathBuf, AppError> {
    cli.command
        .project()
        .or(config.default_project.as_ref())
        .cloned()
        .ok_or(AppError::NoProject)
}

/// Runs one command and returns the text to print.
pub fn run(cli: &Cli, config: &Config, tr: &Translator) -> Result<String, AppError> {
    let path = project_path(cli, config)?;
    let project = project::load(&path)?;
    execute(&cli.command, cli.json, &project, config, tr)
}

/// Runs a command against an already loaded project.
pub fn execute(
    command: &Command,
    json: bool,
    project: &Project,
    config: &Config,
    tr: &Translator,
) -> Result<String, AppError> {
    let fmt = Formatter::new(tr, config);
    match command {
        Command::Measures { .. } => {
            let results = project.compute_measures()?;
            if json {
                return Ok(serde_json::to_string_pretty(&results)?);
            }
            Ok(fmt.measures(&project.building, &results))
        }
        Command::Scenario { name, .. } => {
            let scenarios = match name {
                Some(name) => vec![project.compute_named(name)?],
                None => project.compute_all()?,
            };
            if json {
                return Ok(serde_json::to_string_pretty(&scenarios)?);
            }
            Ok(scenarios.iter().map(|s| fmt.scenario(s)).collect::<Vec<_>>().join("\n"))
        }
        Command::Compare {
            baseline, others, ..
        } => {
            let base = project.compute_named(baseline)?;
            let others = others
                .iter()
                .map(|name| project.compute_named(name))
                .collect::<Result<Vec<_>, _>>()?;
            let refs: Vec<_> = others.iter().collect();
            let comparisons = compare_to_baseline(&base, &refs);
            if json {
                return Ok(serde_json::to_string_pretty(&comparisons)?);
            }
            Ok(comparisons
                .iter()
                .map(|c| fmt.comparison(c))
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}
