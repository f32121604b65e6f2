//! Exporter configuration
//!
//! Settings are read from an optional TOML file. A missing file yields the
//! defaults, so running without any configuration talks to the public
//! Todoist API and writes `todoist_export.md` in the working directory.
//!
//! ```toml
//! output = "notes/work.md"
//! strict_sections = false
//! since = "2021-4-29T10:13:00"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::{CompletedWindow, DEFAULT_REST_URL, DEFAULT_SYNC_URL};
use crate::error::{ExportError, Result};
use crate::todoist::SectionPolicy;

pub const DEFAULT_CONFIG_FILE: &str = "todoist-export.toml";
pub const DEFAULT_OUTPUT_FILE: &str = "todoist_export.md";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST API (projects, sections, active tasks)
    pub rest_url: String,
    /// Base URL of the sync API (completed tasks)
    pub sync_url: String,
    /// Where the rendered document is written
    pub output: PathBuf,
    /// Abort when a task references a section that does not exist
    pub strict_sections: bool,
    /// Lower bound for completed tasks (`YYYY-M-DTHH:MM:SS`)
    pub since: Option<String>,
    /// Upper bound for completed tasks (`YYYY-M-DTHH:MM:SS`)
    pub until: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rest_url: DEFAULT_REST_URL.to_string(),
            sync_url: DEFAULT_SYNC_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            strict_sections: false,
            since: None,
            until: None,
        }
    }
}

impl Config {
    /// Load the configuration, falling back to defaults when the file is absent
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| ExportError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn section_policy(&self) -> SectionPolicy {
        if self.strict_sections {
            SectionPolicy::Strict
        } else {
            SectionPolicy::Lenient
        }
    }

    /// Parse the configured completed-task bounds
    pub fn completed_window(&self) -> Result<CompletedWindow> {
        CompletedWindow::parse(self.since.as_deref(), self.until.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.section_policy(), SectionPolicy::Lenient);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output = \"work.md\"").unwrap();
        writeln!(file, "strict_sections = true").unwrap();
        writeln!(file, "since = \"2021-4-29T10:13:00\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.output, PathBuf::from("work.md"));
        assert_eq!(config.rest_url, DEFAULT_REST_URL);
        assert_eq!(config.section_policy(), SectionPolicy::Strict);

        let window = config.completed_window().unwrap();
        assert!(window.since.is_some());
        assert!(window.until.is_none());
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "strict_sections = \"maybe\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ExportError::Config { .. }));
    }
}
