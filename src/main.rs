//! Todoist Export - Main Entry Point
//!
//! Asks which project to export (unless given on the command line), then
//! writes the rendered Markdown document. The actual implementation is in
//! the `todoist_export` library.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use todoist_export::cli::{self, Args};
use todoist_export::prompt::Prompter;
use todoist_export::{ApiToken, Config, Exporter, OutputFile, TodoistClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TODOIST_EXPORT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::load(&args.config)
        .with_context(|| format!("Failed to load config {}", args.config.display()))?;
    args.apply_to(&mut config);

    let token = ApiToken::new(args.token.clone().unwrap_or_default())
        .context("Set TODOIST_TOKEN or pass --token")?;
    let client = TodoistClient::with_endpoints(token, &config.rest_url, &config.sync_url)?
        .with_section_policy(config.section_policy());
    let exporter = Exporter::connect(client)
        .await
        .context("Failed to fetch projects")?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let request = cli::build_request(&args, &config, &exporter, &mut prompter)?;
    let output = OutputFile::new(&config.output);
    exporter
        .export(&request, &output)
        .await
        .with_context(|| format!("Failed to export project {}", request.project_id))?;

    prompter.say(format!("Exported to {}", output.path().display()))?;
    Ok(())
}
