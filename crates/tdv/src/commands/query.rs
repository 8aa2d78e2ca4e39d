//! Query command implementation.
//!
//! Runs one directive through the full pipeline: parse, fetch, map, filter,
//! build the forest, then renders it.

use todoist_sync_rs::{TaskSelection, TodoistClient};
use todoist_view_rs::{apply_filter, build_forest, task::map_tasks, Query, TaskNode};

use super::projects::resolve_project_id;
use super::{config, CommandContext, Result};
use crate::output::{format_forest_json, format_forest_tree};

/// Executes the query command.
pub async fn execute(ctx: &CommandContext, directive: &str, token: &str) -> Result<()> {
    let client = TodoistClient::new(token);
    let forest = run_directive(ctx, &client, directive).await?;

    if ctx.json_output {
        println!("{}", format_forest_json(&forest)?);
    } else if !ctx.quiet {
        print!("{}", format_forest_tree(&forest, ctx.use_colors));
    }
    Ok(())
}

/// Runs a directive through the pipeline and returns the forest.
///
/// An empty directive falls back to the configured default query; `project:`
/// values that are names rather than ids are resolved against the project
/// list first.
pub async fn run_directive(
    ctx: &CommandContext,
    client: &TodoistClient,
    directive: &str,
) -> Result<Vec<TaskNode>> {
    let mut query = Query::parse(directive);
    if query.is_empty() {
        if let Some(default) = config::load_config()?.default_query {
            if ctx.verbose {
                eprintln!("Empty directive, using default query: {default}");
            }
            query = Query::parse(&default);
        }
    }

    let selection = match (&query.project_id, &query.section_id, &query.filter) {
        (Some(project), _, _) => {
            TaskSelection::Project(resolve_project_id(client, project).await?)
        }
        (_, Some(section), _) => TaskSelection::Section(section.clone()),
        (_, _, Some(filter)) => TaskSelection::Filter(filter.clone()),
        _ => TaskSelection::All,
    };

    let raw = client.get_tasks(&selection).await?;
    if ctx.verbose {
        eprintln!("Fetched {} tasks", raw.len());
    }

    let mut tasks = map_tasks(raw);

    // The server already narrowed the fetch; the local pass enforces
    // day-granularity semantics for date filters and is a no-op for
    // everything else.
    if let Some(expression) = &query.filter {
        tasks = apply_filter(&tasks, expression);
    }

    Ok(build_forest(&tasks))
}
