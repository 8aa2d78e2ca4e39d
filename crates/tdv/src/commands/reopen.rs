//! Reopen command implementation.
//!
//! The uncompleting half of the completion-toggle contract.

use todoist_sync_rs::TodoistClient;

use super::{CommandContext, Result};

/// Executes the reopen command.
pub async fn execute(ctx: &CommandContext, task_id: &str, token: &str) -> Result<()> {
    let client = TodoistClient::new(token);
    client.reopen_task(task_id).await?;

    if ctx.json_output {
        println!(
            "{}",
            serde_json::json!({"id": task_id, "completed": false})
        );
    } else if !ctx.quiet {
        println!("Reopened task {task_id}");
    }
    Ok(())
}
