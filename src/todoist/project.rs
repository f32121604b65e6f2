use serde::{Deserialize, Serialize};

/// A Todoist project as returned by the `/projects` endpoint
///
/// Only the fields the exporter cares about are kept; unknown fields in the
/// response (color, order, view style, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project identifier
    pub id: String,
    /// Display name, also the key in [`ProjectIndex`](super::ProjectIndex)
    pub name: String,
    /// Canonical web URL of the project
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_favorite: bool,
}
