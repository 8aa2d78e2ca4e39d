//! Project and section listings.

use owo_colors::OwoColorize;
use todoist_sync_rs::records::{RawProject, RawSection};

/// Formats projects as a flat list, subprojects indented under parents.
pub fn format_projects_list(projects: &[RawProject], use_colors: bool) -> String {
    let mut out = String::new();

    let mut top_level: Vec<&RawProject> = projects.iter().filter(|p| p.parent_id.is_none()).collect();
    top_level.sort_by_key(|p| p.order);

    for project in top_level {
        write_project(&mut out, project, projects, 0, use_colors);
    }
    if out.is_empty() {
        out.push_str("No projects found.\n");
    }
    out
}

fn write_project(
    out: &mut String,
    project: &RawProject,
    all: &[RawProject],
    depth: usize,
    use_colors: bool,
) {
    let indent = "  ".repeat(depth);
    let mut markers = String::new();
    if project.is_inbox_project {
        markers.push_str("  [inbox]");
    }
    if project.is_favorite {
        markers.push_str("  *");
    }

    if use_colors {
        out.push_str(&format!(
            "{indent}{}{}  ({})\n",
            project.name.bold(),
            markers,
            project.id.dimmed()
        ));
    } else {
        out.push_str(&format!("{indent}{}{}  ({})\n", project.name, markers, project.id));
    }

    let mut children: Vec<&RawProject> = all
        .iter()
        .filter(|p| p.parent_id.as_deref() == Some(project.id.as_str()))
        .collect();
    children.sort_by_key(|p| p.order);
    for child in children {
        write_project(out, child, all, depth + 1, use_colors);
    }
}

/// Formats projects as pretty JSON.
pub fn format_projects_json(projects: &[RawProject]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({ "projects": projects }))
}

/// Formats sections grouped by project id.
pub fn format_sections_list(sections: &[RawSection], use_colors: bool) -> String {
    let mut out = String::new();
    let mut sorted: Vec<&RawSection> = sections.iter().collect();
    sorted.sort_by(|a, b| (&a.project_id, a.order).cmp(&(&b.project_id, b.order)));

    let mut current_project: Option<&str> = None;
    for section in sorted {
        if current_project != Some(section.project_id.as_str()) {
            current_project = Some(section.project_id.as_str());
            if use_colors {
                out.push_str(&format!("{}\n", format!("project {}", section.project_id).bold()));
            } else {
                out.push_str(&format!("project {}\n", section.project_id));
            }
        }
        out.push_str(&format!("  {}  ({})\n", section.name, section.id));
    }
    if out.is_empty() {
        out.push_str("No sections found.\n");
    }
    out
}

/// Formats sections as pretty JSON.
pub fn format_sections_json(sections: &[RawSection]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({ "sections": sections }))
}
