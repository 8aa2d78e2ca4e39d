use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use commands::{add::AddOptions, CommandContext, CommandError};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{}", serde_json::to_string_pretty(&error_json).unwrap());
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let ctx = CommandContext::from_cli(cli);

    // Commands that need no token
    match &cli.command {
        Commands::Config { command } => {
            return commands::config::execute(&ctx, command.as_ref());
        }
        Commands::Completions { shell } => {
            return commands::completions::execute(*shell);
        }
        _ => {}
    }

    let token = commands::resolve_token(cli)?;

    match &cli.command {
        Commands::Query { directive } => commands::query::execute(&ctx, directive, &token).await,
        Commands::Render { file } => commands::render::execute(&ctx, file, &token).await,
        Commands::Add {
            content,
            project,
            priority,
            due,
            parent,
        } => {
            let opts = AddOptions {
                content: content.clone(),
                project: project.clone(),
                priority: *priority,
                due: due.clone(),
                parent: parent.clone(),
            };
            commands::add::execute(&ctx, &opts, &token).await
        }
        Commands::Done { task_id } => commands::done::execute(&ctx, task_id, &token).await,
        Commands::Reopen { task_id } => commands::reopen::execute(&ctx, task_id, &token).await,
        Commands::Projects => commands::projects::execute(&ctx, &token).await,
        Commands::Sections => commands::sections::execute(&ctx, &token).await,
        Commands::Config { .. } | Commands::Completions { .. } => unreachable!(),
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Api(_) => "API_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Api(err) => ExitCode::from(err.exit_code() as u8),
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Io(_) | CommandError::Json(_) => ExitCode::FAILURE,
    }
}
