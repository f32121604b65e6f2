//! Command-line arguments and the interactive question flow
//!
//! With `--project-id` nothing is asked. Without it the user is walked
//! through an optional project search, the project id and whether to
//! include completed tasks.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::Result;
use crate::prompt::Prompter;
use crate::{ExportRequest, Exporter};

/// Export a Todoist project into a Markdown task list
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "todoist-export", author, version, about, long_about = None)]
pub struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Todoist API token
    #[arg(long, env = "TODOIST_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Project to export; skips all prompts
    #[arg(long)]
    pub project_id: Option<String>,

    /// List projects whose name contains this text
    #[arg(long)]
    pub search: Option<String>,

    /// Include completed tasks
    #[arg(long)]
    pub completed: bool,

    /// Only completed tasks after this time (YYYY-M-DTHH:MM:SS)
    #[arg(long)]
    pub since: Option<String>,

    /// Only completed tasks before this time (YYYY-M-DTHH:MM:SS)
    #[arg(long)]
    pub until: Option<String>,

    /// Output file, overrides the config file
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Let command-line values take precedence over the config file
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(ref output) = self.output {
            config.output = output.clone();
        }
        if self.since.is_some() {
            config.since = self.since.clone();
        }
        if self.until.is_some() {
            config.until = self.until.clone();
        }
    }
}

/// Work out the project and completed-task window, prompting where needed
pub fn build_request<R: BufRead, W: Write>(
    args: &Args,
    config: &Config,
    exporter: &Exporter,
    prompter: &mut Prompter<R, W>,
) -> Result<ExportRequest> {
    if let Some(ref query) = args.search {
        print_matches(exporter, query, prompter)?;
    } else if args.project_id.is_none()
        && prompter.confirm("Do you need to search for project id?")?
    {
        let query = prompter.ask("Enter project name:")?;
        print_matches(exporter, &query, prompter)?;
    }

    let (project_id, include_completed) = match args.project_id {
        Some(ref id) => (id.clone(), args.completed),
        None => {
            let id = prompter.ask("Enter project id to export:")?;
            let completed =
                args.completed || prompter.confirm("Do you want to export completed tasks?")?;
            (id, completed)
        }
    };

    if include_completed {
        Ok(ExportRequest::with_completed(project_id, config.completed_window()?))
    } else {
        Ok(ExportRequest::active_only(project_id))
    }
}

/// Print the `id: name` lines of projects matching `query`
pub fn print_matches<R: BufRead, W: Write>(
    exporter: &Exporter,
    query: &str,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let matches = exporter.search_projects(query);
    if matches.is_empty() {
        prompter.say(format!("No projects found matching '{}'", query))?;
    } else {
        prompter.say("These are the project ids found matching the name:")?;
        for m in matches {
            prompter.say(m)?;
        }
    }
    prompter.say("---")?;
    Ok(())
}
