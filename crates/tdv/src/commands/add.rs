//! Add command implementation.

use todoist_sync_rs::records::CreateTask;
use todoist_sync_rs::TodoistClient;

use super::projects::resolve_project_id;
use super::{CommandContext, Result};

/// Options for the add command.
#[derive(Debug)]
pub struct AddOptions {
    /// Task content/title.
    pub content: String,
    /// Target project name or id.
    pub project: Option<String>,
    /// Priority from 1 (normal) to 4 (urgent).
    pub priority: Option<u8>,
    /// Due date in natural language or ISO.
    pub due: Option<String>,
    /// Parent task id.
    pub parent: Option<String>,
}

/// Executes the add command.
pub async fn execute(ctx: &CommandContext, opts: &AddOptions, token: &str) -> Result<()> {
    let client = TodoistClient::new(token);

    let mut request = CreateTask::new(opts.content.as_str());
    if let Some(project) = &opts.project {
        request.project_id = Some(resolve_project_id(&client, project).await?);
    }
    request.priority = opts.priority.map(i32::from);
    request.due_string = opts.due.clone();
    request.parent_id = opts.parent.clone();

    let created = client.create_task(&request).await?;

    if ctx.json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "id": created.id,
                "content": created.content,
                "project_id": created.project_id,
            }))?
        );
    } else if !ctx.quiet {
        println!("Created task {} ({})", created.content, created.id);
    }
    Ok(())
}
