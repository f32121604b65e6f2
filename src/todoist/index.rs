use std::fmt;

use indexmap::IndexMap;

use super::project::Project;

/// A project id/name pair returned by [`ProjectIndex::search_by_name`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMatch {
    pub id: String,
    pub name: String,
}

impl fmt::Display for ProjectMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

/// All projects of the account, keyed by project name
///
/// Projects keep the order they were fetched in. When two projects share a
/// name the one fetched last wins, at the position of the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectIndex {
    by_name: IndexMap<String, Project>,
}

impl ProjectIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_projects(projects: impl IntoIterator<Item = Project>) -> Self {
        let mut index = Self::new();
        for project in projects {
            index.insert(project);
        }
        index
    }

    pub fn insert(&mut self, project: Project) {
        self.by_name.insert(project.name.clone(), project);
    }

    pub fn get(&self, name: &str) -> Option<&Project> {
        self.by_name.get(name)
    }

    /// Find projects whose name contains `query`, ignoring case
    ///
    /// The query is matched as a literal substring.
    pub fn search_by_name(&self, query: &str) -> Vec<ProjectMatch> {
        let query_lower = query.to_lowercase();
        self.by_name
            .values()
            .filter(|project| project.name.to_lowercase().contains(&query_lower))
            .map(|project| ProjectMatch {
                id: project.id.clone(),
                name: project.name.clone(),
            })
            .collect()
    }

    /// Look up a project's name from its id
    pub fn name_by_id(&self, id: &str) -> Option<&str> {
        self.by_name
            .values()
            .find(|project| project.id == id)
            .map(|project| project.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }
}
