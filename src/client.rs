//! Todoist API client
//!
//! Thin read-only wrapper around the REST and sync endpoints. Every request
//! carries the bearer token; any non-success status aborts with
//! [`ExportError::Transport`]. There are no retries.

use std::fmt;

use chrono::NaiveDateTime;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{ExportError, Result};
use crate::todoist::{
    Project, ProjectIndex, RawTask, Section, SectionPolicy, Sections, Task, TaskOrigin,
};

pub const DEFAULT_REST_URL: &str = "https://api.todoist.com/rest/v2";
pub const DEFAULT_SYNC_URL: &str = "https://api.todoist.com/sync/v9";

/// Format of the `since` / `until` query parameters
const BOUND_FORMAT: &str = "%Y-%-m-%-dT%H:%M:%S";

/// A Todoist API token
///
/// The token is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wrap a token, rejecting empty values
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(ExportError::Credential(
                "API token cannot be empty".to_string(),
            ));
        }
        Ok(Self(token))
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Inclusive time window for completed tasks; open ends are unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletedWindow {
    pub since: Option<NaiveDateTime>,
    pub until: Option<NaiveDateTime>,
}

impl CompletedWindow {
    /// Parse bounds written as `YYYY-M-DTHH:MM:SS` (zero padding optional)
    pub fn parse(since: Option<&str>, until: Option<&str>) -> Result<Self> {
        Ok(Self {
            since: since.map(parse_bound).transpose()?,
            until: until.map(parse_bound).transpose()?,
        })
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(since) = self.since {
            params.push(("since", since.format(BOUND_FORMAT).to_string()));
        }
        if let Some(until) = self.until {
            params.push(("until", until.format(BOUND_FORMAT).to_string()));
        }
        params
    }
}

fn parse_bound(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%dT%H:%M:%S").map_err(|_| {
        ExportError::InvalidBound {
            value: value.to_string(),
        }
    })
}

/// Endpoints answer either with a bare array or with `{"items": [...]}`
///
/// Any other object (an error payload, say) fails to decode.
#[derive(Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    List(Vec<T>),
    Items { items: Vec<T> },
}

impl<T> Listing<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Listing::List(items) | Listing::Items { items } => items,
        }
    }
}

/// Body of `/completed/get_all`; the sync API drops `items` when nothing matched
#[derive(Deserialize)]
struct CompletedItems {
    #[serde(default)]
    items: Vec<RawTask>,
}

/// Read-only client for the Todoist API
pub struct TodoistClient {
    http: reqwest::Client,
    rest_url: String,
    sync_url: String,
    token: ApiToken,
    policy: SectionPolicy,
}

impl TodoistClient {
    /// Create a client against the public Todoist endpoints
    pub fn new(token: ApiToken) -> Result<Self> {
        Self::with_endpoints(token, DEFAULT_REST_URL, DEFAULT_SYNC_URL)
    }

    /// Create a client against custom base URLs
    pub fn with_endpoints(
        token: ApiToken,
        rest_url: impl Into<String>,
        sync_url: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("todoist-export/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            rest_url: rest_url.into().trim_end_matches('/').to_string(),
            sync_url: sync_url.into().trim_end_matches('/').to_string(),
            token,
            policy: SectionPolicy::default(),
        })
    }

    /// Set how tasks with unknown section ids are handled
    pub fn with_section_policy(mut self, policy: SectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        debug!(url, ?params, "GET");
        let response = self
            .http
            .get(url)
            .bearer_auth(self.token.as_str())
            .header(CONTENT_TYPE, "application/json")
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExportError::Transport {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ExportError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Fetch every project of the account
    pub async fn fetch_projects(&self) -> Result<Vec<Project>> {
        let url = format!("{}/projects", self.rest_url);
        let projects = self.get_json::<Listing<Project>>(&url, &[]).await?.into_vec();
        info!(count = projects.len(), "fetched projects");
        Ok(projects)
    }

    /// Fetch every project and index it by name
    pub async fn get_all_projects(&self) -> Result<ProjectIndex> {
        Ok(ProjectIndex::from_projects(self.fetch_projects().await?))
    }

    /// Fetch the sections of a project, in service order
    pub async fn fetch_sections(&self, project_id: &str) -> Result<Sections> {
        let url = format!("{}/sections", self.rest_url);
        let params = [("project_id", project_id.to_string())];
        let sections: Sections = self
            .get_json::<Listing<Section>>(&url, &params)
            .await?
            .into_vec()
            .into_iter()
            .collect();
        info!(project_id, count = sections.len(), "fetched sections");
        Ok(sections)
    }

    /// Fetch the open tasks of a project
    pub async fn fetch_active_tasks(&self, project_id: &str, sections: &Sections) -> Result<Vec<Task>> {
        let url = format!("{}/tasks", self.rest_url);
        let params = [("project_id", project_id.to_string())];
        let records = self.get_json::<Listing<RawTask>>(&url, &params).await?.into_vec();
        let tasks = self.build_tasks(records, TaskOrigin::Active, sections)?;
        info!(project_id, count = tasks.len(), "fetched active tasks");
        Ok(tasks)
    }

    /// Fetch the completed tasks of a project within `window`
    pub async fn fetch_completed_tasks(
        &self,
        project_id: &str,
        sections: &Sections,
        window: &CompletedWindow,
    ) -> Result<Vec<Task>> {
        let url = format!("{}/completed/get_all", self.sync_url);
        let mut params = vec![("project_id", project_id.to_string())];
        params.extend(window.query_params());

        let records = self.get_json::<CompletedItems>(&url, &params).await?.items;
        let tasks = self.build_tasks(records, TaskOrigin::Completed, sections)?;
        info!(project_id, count = tasks.len(), "fetched completed tasks");
        Ok(tasks)
    }

    fn build_tasks(
        &self,
        records: Vec<RawTask>,
        origin: TaskOrigin,
        sections: &Sections,
    ) -> Result<Vec<Task>> {
        records
            .into_iter()
            .map(|raw| Task::from_record(raw, origin, sections, self.policy))
            .collect()
    }
}
