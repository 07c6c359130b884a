use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "woning_retrofit_cli", version, about = "Retrofit cost and heat-demand calculator")]
pub struct Cli {
    /// Output language: auto, nl, en
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    pub lang: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Config file
    #[arg(long, global = true, default_value = crate::config::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Heat demand and cost of every measure in the project
    Measures {
        project: Option<PathBuf>,
    },
    /// Totals of the project's scenarios
    Scenario {
        project: Option<PathBuf>,
        /// Only this scenario
        #[arg(long)]
        name: Option<String>,
    },
    /// Compare scenarios against a baseline
    Compare {
        project: PathBuf,
        baseline: String,
        #[arg(required = true)]
        others: Vec<String>,
    },
}

impl Command {
    pub fn project(&self) -> Option<&PathBuf> {
        match self {
            Command::Measures { project } | Command::Scenario { project, .. } => project.as_ref(),
            Command::Compare { project, .. } => Some(project),
        }
    }
}
