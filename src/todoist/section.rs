use serde::{Deserialize, Serialize};

/// A section record from the `/sections` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
}

/// Section id → name mapping for a single project
///
/// Keeps the order in which the service returned the sections, since the
/// rendered document lists sections in that order. Inserting an id that is
/// already present replaces the name but keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    entries: Vec<Section>,
}

impl Sections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a section name
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        let id = id.into();
        let name = name.into();
        match self.entries.iter_mut().find(|s| s.id == id) {
            Some(existing) => existing.name = name,
            None => self.entries.push(Section { id, name }),
        }
    }

    /// Look up the name of a section by id
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.as_str())
    }

    /// Resolve a section id into a [`SectionRef`]
    ///
    /// Ids missing from the mapping become [`SectionRef::Unknown`].
    pub fn resolve(&self, id: &str) -> SectionRef {
        match self.name_of(id) {
            Some(name) => SectionRef::Named {
                id: id.to_string(),
                name: name.to_string(),
            },
            None => SectionRef::Unknown { id: id.to_string() },
        }
    }

    /// Iterate sections in service order
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Section> for Sections {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        let mut sections = Sections::new();
        for section in iter {
            sections.insert(section.id, section.name);
        }
        sections
    }
}

/// The section a task belongs to, as resolved at task construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionRef {
    /// The id was found in the project's sections
    Named { id: String, name: String },
    /// The id was not present in the project's sections
    Unknown { id: String },
}

impl SectionRef {
    pub fn id(&self) -> &str {
        match self {
            SectionRef::Named { id, .. } | SectionRef::Unknown { id } => id,
        }
    }

    /// Section name, if the section was known
    pub fn name(&self) -> Option<&str> {
        match self {
            SectionRef::Named { name, .. } => Some(name),
            SectionRef::Unknown { .. } => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, SectionRef::Unknown { .. })
    }
}
