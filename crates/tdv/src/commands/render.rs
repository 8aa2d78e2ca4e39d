//! Render command implementation.
//!
//! Finds fenced `todoist` code blocks in a markdown note and renders each
//! one's task tree, the way the note-view host would. The first non-empty
//! line of a block is its query directive; an empty block falls back to the
//! configured default query.

use std::fs;

use todoist_sync_rs::TodoistClient;

use super::{query, CommandContext, Result};
use crate::output::format_forest_tree;

/// A fenced `todoist` code block extracted from a note.
#[derive(Debug, PartialEq, Eq)]
pub struct QueryBlock {
    /// 1-based line number of the block's opening fence.
    pub line: usize,
    /// The directive text (empty when the block has no content).
    pub directive: String,
}

/// Executes the render command.
pub async fn execute(ctx: &CommandContext, file: &str, token: &str) -> Result<()> {
    let source = fs::read_to_string(file)?;
    let blocks = extract_blocks(&source);

    if blocks.is_empty() {
        if !ctx.quiet {
            eprintln!("No todoist blocks found in {file}");
        }
        return Ok(());
    }

    let client = TodoistClient::new(token);

    if ctx.json_output {
        let mut rendered = Vec::new();
        for block in &blocks {
            let forest = query::run_directive(ctx, &client, &block.directive).await?;
            rendered.push(serde_json::json!({
                "line": block.line,
                "directive": block.directive,
                "forest": forest,
            }));
        }
        println!("{}", serde_json::to_string_pretty(&rendered)?);
        return Ok(());
    }

    for block in &blocks {
        let forest = query::run_directive(ctx, &client, &block.directive).await?;
        if !ctx.quiet {
            println!("{file}:{} {}", block.line, block.directive);
            print!("{}", format_forest_tree(&forest, ctx.use_colors));
            println!();
        }
    }
    Ok(())
}

/// Extracts fenced `todoist` code blocks from markdown source.
pub fn extract_blocks(source: &str) -> Vec<QueryBlock> {
    let mut blocks = Vec::new();
    let mut open_line = None;
    let mut directive: Option<String> = None;

    for (idx, line) in source.lines().enumerate() {
        let trimmed = line.trim();

        match open_line {
            None => {
                if let Some(info) = trimmed.strip_prefix("```") {
                    if info.trim() == "todoist" {
                        open_line = Some(idx + 1);
                        directive = None;
                    }
                }
            }
            Some(line_no) => {
                if trimmed == "```" {
                    blocks.push(QueryBlock {
                        line: line_no,
                        directive: directive.take().unwrap_or_default(),
                    });
                    open_line = None;
                } else if directive.is_none() && !trimmed.is_empty() {
                    directive = Some(trimmed.to_string());
                }
            }
        }
    }

    blocks
}
