use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use tracing::warn;

use super::section::{SectionRef, Sections};
use crate::error::{ExportError, Result};

/// Due information attached to a task
///
/// The REST API sends an object, older payloads and tests may carry the
/// plain date string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Due {
    Detailed {
        date: String,
        #[serde(default)]
        string: Option<String>,
        #[serde(default)]
        is_recurring: bool,
    },
    Date(String),
}

impl Due {
    /// The due date as sent by the service (`YYYY-MM-DD` or a full datetime)
    pub fn date(&self) -> &str {
        match self {
            Due::Detailed { date, .. } | Due::Date(date) => date,
        }
    }
}

/// A task record as returned by either the active or the completed endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RawTask {
    pub id: String,
    pub content: String,
    pub project_id: String,
    #[serde(default)]
    pub section_id: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub due: Option<Due>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub priority: Option<u8>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Which endpoint a task record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOrigin {
    Active,
    Completed,
}

/// What to do when a task references a section that is not in the mapping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionPolicy {
    /// Keep the task with a [`SectionRef::Unknown`] and log a warning
    #[default]
    Lenient,
    /// Fail with [`ExportError::UnknownSection`]
    Strict,
}

/// A task ready for rendering
///
/// The section name is resolved once, when the task is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub content: String,
    pub project_id: String,
    pub section: Option<SectionRef>,
    /// Parent task for subtasks (not used for nesting output)
    pub parent_id: Option<String>,
    pub labels: Vec<String>,
    pub is_completed: bool,
    pub due: Option<String>,
    /// Completion timestamp (completed tasks only)
    pub completed_at: Option<String>,
    /// Priority 1-4 (active tasks only)
    pub priority: Option<u8>,
    /// Creation timestamp (active tasks only)
    pub created_at: Option<String>,
    /// Web URL (active tasks only)
    pub url: Option<String>,
}

impl Task {
    /// Build a task from a raw record, resolving its section
    ///
    /// Completed records are always flagged completed and never carry the
    /// active-only fields (priority, creation time, url).
    pub fn from_record(
        raw: RawTask,
        origin: TaskOrigin,
        sections: &Sections,
        policy: SectionPolicy,
    ) -> Result<Self> {
        let section = match raw.section_id.as_deref() {
            None => None,
            Some(section_id) => {
                let resolved = sections.resolve(section_id);
                if resolved.is_unknown() {
                    if policy == SectionPolicy::Strict {
                        return Err(ExportError::UnknownSection {
                            task_id: raw.id,
                            section_id: section_id.to_string(),
                        });
                    }
                    warn!(task_id = %raw.id, section_id, "task references unknown section");
                }
                Some(resolved)
            }
        };

        let due = raw.due.map(|d| d.date().to_string());

        let task = match origin {
            TaskOrigin::Active => Task {
                id: raw.id,
                content: raw.content,
                project_id: raw.project_id,
                section,
                parent_id: raw.parent_id,
                labels: raw.labels,
                is_completed: raw.is_completed,
                due,
                completed_at: raw.completed_at,
                priority: raw.priority,
                created_at: raw.created_at,
                url: raw.url,
            },
            TaskOrigin::Completed => Task {
                id: raw.id,
                content: raw.content,
                project_id: raw.project_id,
                section,
                parent_id: raw.parent_id,
                labels: raw.labels,
                is_completed: true,
                due,
                completed_at: raw.completed_at,
                priority: None,
                created_at: None,
                url: None,
            },
        };
        Ok(task)
    }

    pub fn section_id(&self) -> Option<&str> {
        self.section.as_ref().map(SectionRef::id)
    }

    /// Resolved section name; `None` for unsectioned tasks and unknown sections
    pub fn section_name(&self) -> Option<&str> {
        self.section.as_ref().and_then(SectionRef::name)
    }

    /// Creation date reduced to a calendar day
    pub fn created_date(&self) -> Option<NaiveDate> {
        self.created_at.as_deref().and_then(parse_timestamp_date)
    }
}

/// Reduce a service timestamp to its calendar day
///
/// Accepts RFC 3339 (`2024-01-05T10:00:00.000000Z`), naive datetimes and
/// anything that starts with a `YYYY-MM-DD` date.
pub(crate) fn parse_timestamp_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}
