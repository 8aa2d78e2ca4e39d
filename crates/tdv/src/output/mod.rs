//! Output formatting for the tdv CLI.

mod projects;
mod tasks;

pub use projects::{format_projects_json, format_projects_list, format_sections_json, format_sections_list};
pub use tasks::{format_forest_json, format_forest_tree};

use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;

/// Truncates an ID to 8 characters for display.
pub fn truncate_id(id: &str) -> String {
    if id.len() > 8 {
        id[..8].to_string()
    } else {
        id.to_string()
    }
}

/// Formats priority for display; priority 1 carries no indicator.
pub fn format_priority(priority: i32, use_colors: bool) -> String {
    if priority <= 1 {
        return String::new();
    }

    let label = format!("p{priority}");
    if use_colors {
        match priority {
            4 => label.red().to_string(),
            3 => label.yellow().to_string(),
            _ => label.blue().to_string(),
        }
    } else {
        label
    }
}

/// Formats a due day for display, relative to today where it reads better.
pub fn format_due(date_str: &str, use_colors: bool) -> String {
    let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") else {
        return date_str.to_string();
    };

    let today = Local::now().date_naive();
    let tomorrow = today + chrono::Duration::days(1);

    let display = if date == today {
        "Today".to_string()
    } else if date == tomorrow {
        "Tomorrow".to_string()
    } else if date < today {
        let days = (today - date).num_days();
        if days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{days} days ago")
        }
    } else {
        date.format("%b %d").to_string()
    };

    if use_colors {
        if date < today {
            display.red().to_string()
        } else if date == today {
            display.yellow().to_string()
        } else {
            display
        }
    } else {
        display
    }
}
