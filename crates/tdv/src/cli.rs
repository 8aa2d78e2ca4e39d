//! CLI argument parsing using clap derive macros.

use clap::{Parser, Subcommand};

/// tdv - render Todoist queries from notes as task trees
#[derive(Parser, Debug)]
#[command(name = "tdv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override API token (default: from config file)
    #[arg(long, global = true, env = "TODOIST_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a query directive and print the task tree
    #[command(alias = "q")]
    Query {
        /// Directive text (e.g. "filter: today | overdue", "project:123")
        directive: String,
    },

    /// Render every todoist code block in a markdown note
    #[command(alias = "r")]
    Render {
        /// Path to the markdown file
        file: String,
    },

    /// Add a new task
    #[command(alias = "a")]
    Add {
        /// Task content/title
        content: String,

        /// Target project name or ID (default: Inbox)
        #[arg(short, long)]
        project: Option<String>,

        /// Priority level from 1 (normal) to 4 (urgent)
        #[arg(short = 'P', long, value_parser = clap::value_parser!(u8).range(1..=4))]
        priority: Option<u8>,

        /// Due date (natural language or ISO)
        #[arg(short, long)]
        due: Option<String>,

        /// Parent task ID (creates subtask)
        #[arg(long)]
        parent: Option<String>,
    },

    /// Complete a task
    #[command(alias = "d")]
    Done {
        /// Task ID
        task_id: String,
    },

    /// Reopen a completed task
    Reopen {
        /// Task ID
        task_id: String,
    },

    /// List projects
    #[command(alias = "p")]
    Projects,

    /// List sections
    Sections,

    /// Show configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the config file path
    Path,
    /// Create a default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_query_alias() {
        let cli = Cli::try_parse_from(["tdv", "q", "today"]).unwrap();
        match cli.command {
            Commands::Query { directive } => assert_eq!(directive, "today"),
            _ => panic!("expected query command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["tdv", "--json", "--no-color", "projects"]).unwrap();
        assert!(cli.json);
        assert!(cli.no_color);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["tdv", "-v", "-q", "projects"]).is_err());
    }

    #[test]
    #[serial_test::serial]
    fn test_token_from_env() {
        std::env::set_var("TODOIST_TOKEN", "env-token");
        let cli = Cli::try_parse_from(["tdv", "projects"]).unwrap();
        assert_eq!(cli.token.as_deref(), Some("env-token"));
        std::env::remove_var("TODOIST_TOKEN");
    }

    #[test]
    fn test_add_priority_range() {
        assert!(Cli::try_parse_from(["tdv", "add", "x", "-P", "5"]).is_err());
        assert!(Cli::try_parse_from(["tdv", "add", "x", "-P", "4"]).is_ok());
    }
}
