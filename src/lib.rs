//! Todoist Export Library
//!
//! This library exports the tasks of a Todoist project into a Markdown
//! checklist grouped by section, ready to be dropped into an Obsidian vault.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Remote Layer**: `client` module - Read-only access to the Todoist REST and sync APIs
//! - **Domain Layer**: `todoist` module - Projects, sections and tasks, plus project lookup
//! - **Output Layer**: `render` and `storage` modules - Markdown rendering and the output file
//!
//! The `cli` and `prompt` modules hold the command-line arguments and the
//! interactive question flow used by the binary.
//!
//! [`Exporter`] ties the layers together into a single export run.
//!
//! # Example
//!
//! ```no_run
//! use todoist_export::{ApiToken, Exporter, ExportRequest, OutputFile, TodoistClient};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = TodoistClient::new(ApiToken::new("0123456789abcdef")?)?;
//!     let exporter = Exporter::connect(client).await?;
//!     let request = ExportRequest::active_only("2203306141");
//!     let markdown = exporter.export(&request, &OutputFile::new("todoist_export.md")).await?;
//!     println!("{}", markdown);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod render;
pub mod storage;
pub mod todoist;

use tracing::info;

// Re-export commonly used types
pub use client::{ApiToken, CompletedWindow, TodoistClient};
pub use config::Config;
pub use error::{ExportError, Result};
pub use storage::OutputFile;
pub use todoist::{Project, ProjectIndex, ProjectMatch, SectionPolicy, SectionRef, Sections, Task};

/// What to export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub project_id: String,
    /// Completed tasks are fetched only when a window is given
    pub completed: Option<CompletedWindow>,
}

impl ExportRequest {
    pub fn active_only(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            completed: None,
        }
    }

    pub fn with_completed(project_id: impl Into<String>, window: CompletedWindow) -> Self {
        Self {
            project_id: project_id.into(),
            completed: Some(window),
        }
    }
}

/// Snapshot of one project, ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectExport {
    pub project_name: Option<String>,
    pub sections: Sections,
    /// Active tasks first, then completed ones, each in fetch order
    pub tasks: Vec<Task>,
}

impl ProjectExport {
    pub fn render(&self) -> String {
        render::render_document(self.project_name.as_deref(), &self.sections, &self.tasks)
    }
}

/// Runs exports against a Todoist account
///
/// The project list is fetched once, when the exporter connects, and reused
/// for searches and name lookups.
pub struct Exporter {
    client: TodoistClient,
    projects: ProjectIndex,
}

impl Exporter {
    /// Fetch the account's projects and build an exporter
    pub async fn connect(client: TodoistClient) -> Result<Self> {
        let projects = client.get_all_projects().await?;
        Ok(Self { client, projects })
    }

    /// All projects keyed by name
    pub fn projects(&self) -> &ProjectIndex {
        &self.projects
    }

    /// Projects whose name contains `query`, ignoring case
    pub fn search_projects(&self, query: &str) -> Vec<ProjectMatch> {
        self.projects.search_by_name(query)
    }

    pub fn project_name(&self, project_id: &str) -> Option<&str> {
        self.projects.name_by_id(project_id)
    }

    /// Fetch sections and tasks of the requested project
    pub async fn collect(&self, request: &ExportRequest) -> Result<ProjectExport> {
        let project_id = request.project_id.as_str();
        let project_name = self.project_name(project_id).map(str::to_string);
        if project_name.is_none() {
            info!(project_id, "project name not found, using placeholder heading");
        }

        let sections = self.client.fetch_sections(project_id).await?;
        let mut tasks = self.client.fetch_active_tasks(project_id, &sections).await?;

        if let Some(ref window) = request.completed {
            let completed = self
                .client
                .fetch_completed_tasks(project_id, &sections, window)
                .await?;
            tasks.extend(completed);
        }

        Ok(ProjectExport {
            project_name,
            sections,
            tasks,
        })
    }

    /// Fetch, render and write the export; returns the rendered document
    pub async fn export(&self, request: &ExportRequest, output: &OutputFile) -> Result<String> {
        let document = self.collect(request).await?.render();
        output.write(&document)?;
        Ok(document)
    }
}
