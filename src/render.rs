//! Markdown rendering of exported tasks
//!
//! The document is an outline in the Obsidian Tasks style:
//!
//! ```text
//! # Project name
//!
//! - [x] Old task 📅 2024-01-01
//!
//! ## Inbox
//! - [ ] Buy milk ➕ 2024-01-05
//!
//! ```
//!
//! Tasks keep the order they were fetched in; nothing is sorted.

use crate::todoist::{SectionRef, Sections, Task};

/// Heading used when the project name could not be resolved
pub const PLACEHOLDER_HEADING: &str = "Tasks";
/// Marker placed before the due date
pub const DUE_GLYPH: &str = "📅";
/// Marker placed before the creation date
pub const CREATED_GLYPH: &str = "➕";

/// Format a single task as a markdown checklist line (without newline)
///
/// # Arguments
/// * `task` - Task to format
///
/// # Returns
/// `- [x] content` for completed tasks, `- [ ] content` otherwise, followed
/// by the due date and the creation date when present
pub fn format_task_line(task: &Task) -> String {
    let checkbox = if task.is_completed { "[x]" } else { "[ ]" };
    let mut line = format!("- {} {}", checkbox, task.content);

    if let Some(ref due) = task.due {
        line.push_str(&format!(" {} {}", DUE_GLYPH, due));
    }
    if let Some(created) = task.created_date() {
        line.push_str(&format!(" {} {}", CREATED_GLYPH, created.format("%Y-%m-%d")));
    }

    line
}

/// Render the full document for one project
///
/// # Arguments
/// * `project_name` - Resolved project name, `None` falls back to a generic heading
/// * `sections` - Sections of the project in service order
/// * `tasks` - Tasks in fetch order
///
/// # Description
/// Unsectioned tasks come first, directly under the project heading. Every
/// section then gets its own heading, even when it holds no tasks, followed
/// by its tasks and a blank line. Tasks pointing at sections missing from
/// `sections` are grouped last under an "Unknown section" heading per id.
pub fn render_document(project_name: Option<&str>, sections: &Sections, tasks: &[Task]) -> String {
    let mut doc = format!("# {}\n\n", project_name.unwrap_or(PLACEHOLDER_HEADING));

    let mut unsectioned = 0;
    for task in tasks.iter().filter(|t| t.section.is_none()) {
        push_task(&mut doc, task);
        unsectioned += 1;
    }
    if unsectioned > 0 {
        doc.push('\n');
    }

    for section in sections.iter() {
        doc.push_str(&format!("## {}\n", section.name));
        for task in tasks
            .iter()
            .filter(|t| matches!(t.section, Some(SectionRef::Named { ref id, .. }) if *id == section.id))
        {
            push_task(&mut doc, task);
        }
        doc.push('\n');
    }

    for unknown_id in unknown_section_ids(tasks) {
        doc.push_str(&format!("## Unknown section ({})\n", unknown_id));
        for task in tasks.iter().filter(|t| {
            matches!(t.section, Some(SectionRef::Unknown { ref id }) if id == unknown_id)
        }) {
            push_task(&mut doc, task);
        }
        doc.push('\n');
    }

    doc
}

fn push_task(doc: &mut String, task: &Task) {
    doc.push_str(&format_task_line(task));
    doc.push('\n');
}

/// Unknown section ids in first-seen order
fn unknown_section_ids(tasks: &[Task]) -> Vec<&str> {
    let mut ids: Vec<&str> = Vec::new();
    for task in tasks {
        if let Some(SectionRef::Unknown { ref id }) = task.section
            && !ids.contains(&id.as_str())
        {
            ids.push(id);
        }
    }
    ids
}
