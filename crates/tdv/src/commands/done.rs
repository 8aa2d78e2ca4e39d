//! Done command implementation.
//!
//! Completes a task. This is the CLI end of the completion-toggle contract:
//! the rendered tree shows task ids, and toggling to completed forwards
//! here without re-deriving any state.

use todoist_sync_rs::TodoistClient;

use super::{CommandContext, Result};

/// Executes the done command.
pub async fn execute(ctx: &CommandContext, task_id: &str, token: &str) -> Result<()> {
    let client = TodoistClient::new(token);
    client.close_task(task_id).await?;

    if ctx.json_output {
        println!(
            "{}",
            serde_json::json!({"id": task_id, "completed": true})
        );
    } else if !ctx.quiet {
        println!("Completed task {task_id}");
    }
    Ok(())
}
