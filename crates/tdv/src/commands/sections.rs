//! Sections command implementation.

use todoist_sync_rs::TodoistClient;

use super::{CommandContext, Result};
use crate::output::{format_sections_json, format_sections_list};

/// Executes the sections command.
pub async fn execute(ctx: &CommandContext, token: &str) -> Result<()> {
    let client = TodoistClient::new(token);
    let sections = client.get_sections().await?;

    if ctx.json_output {
        println!("{}", format_sections_json(&sections)?);
    } else if !ctx.quiet {
        print!("{}", format_sections_list(&sections, ctx.use_colors));
    }
    Ok(())
}
