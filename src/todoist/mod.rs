//! Todoist domain models
//!
//! Typed snapshots of the records fetched from the Todoist API.
//! It is split into submodules:
//! - `project`: project records
//! - `section`: ordered section id → name mapping and section references
//! - `task`: tasks built from active or completed records
//! - `index`: project lookup by name and id

mod index;
mod project;
mod section;
mod task;

pub use index::{ProjectIndex, ProjectMatch};
pub use project::Project;
pub use section::{Section, SectionRef, Sections};
pub use task::{Due, RawTask, SectionPolicy, Task, TaskOrigin};
