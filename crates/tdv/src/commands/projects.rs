//! Projects command implementation.

use todoist_sync_rs::TodoistClient;

use super::{CommandContext, CommandError, Result};
use crate::output::{format_projects_json, format_projects_list};

/// Minimum similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Executes the projects command.
pub async fn execute(ctx: &CommandContext, token: &str) -> Result<()> {
    let client = TodoistClient::new(token);
    let projects = client.get_projects().await?;

    if ctx.json_output {
        println!("{}", format_projects_json(&projects)?);
    } else if !ctx.quiet {
        print!("{}", format_projects_list(&projects, ctx.use_colors));
    }
    Ok(())
}

/// Resolves a project name or id to a project id.
///
/// All-digit values are taken as ids directly. Names are matched
/// case-insensitively against the project list; a near miss produces a
/// "did you mean" suggestion.
pub async fn resolve_project_id(client: &TodoistClient, value: &str) -> Result<String> {
    if value.chars().all(|c| c.is_ascii_digit()) {
        return Ok(value.to_string());
    }

    let projects = client.get_projects().await?;
    let value_lower = value.to_lowercase();

    if let Some(project) = projects
        .iter()
        .find(|p| p.name.to_lowercase() == value_lower)
    {
        return Ok(project.id.clone());
    }

    let suggestion = projects
        .iter()
        .map(|p| (strsim::jaro_winkler(&value_lower, &p.name.to_lowercase()), p))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, p)| p.name.clone());

    Err(CommandError::Config(match suggestion {
        Some(name) => format!("project '{value}' not found; did you mean '{name}'?"),
        None => format!("project '{value}' not found"),
    }))
}
