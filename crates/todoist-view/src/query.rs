//! Parser for the query directive mini-language.
//!
//! A directive is one short line of free text selecting which tasks a view
//! displays. Recognized forms, first match wins:
//!
//! 1. `filter:<expr>` / `filter <expr>` — the rest of the line, quotes stripped
//! 2. `project:<id>` / `project <id>` — the next token
//! 3. `section:<id>` / `section <id>` — the next token
//! 4. a line of digits — a project id
//! 5. anything else — taken verbatim as a filter expression
//!
//! Keywords are case-insensitive. Parsing never fails: malformed or
//! ambiguous input degrades to the filter fallback, and blank input yields
//! an empty query meaning "use the caller-provided default."

use serde::{Deserialize, Serialize};

/// A parsed selection directive.
///
/// At most one of the three fields is set. An empty query signals that the
/// caller should substitute its own default selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Show tasks from this project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Show tasks from this section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,

    /// Show tasks matching this raw filter expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl Query {
    /// Parses a directive line into a query.
    pub fn parse(text: &str) -> Query {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Query::default();
        }

        if let Some(value) = keyword_value(trimmed, "filter") {
            return Query {
                filter: Some(strip_quotes(value).to_string()),
                ..Query::default()
            };
        }

        if let Some(value) = keyword_value(trimmed, "project") {
            return Query {
                project_id: Some(first_token(value).to_string()),
                ..Query::default()
            };
        }

        if let Some(value) = keyword_value(trimmed, "section") {
            return Query {
                section_id: Some(first_token(value).to_string()),
                ..Query::default()
            };
        }

        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Query {
                project_id: Some(trimmed.to_string()),
                ..Query::default()
            };
        }

        Query {
            filter: Some(trimmed.to_string()),
            ..Query::default()
        }
    }

    /// Returns true if no selection was specified.
    pub fn is_empty(&self) -> bool {
        self.project_id.is_none() && self.section_id.is_none() && self.filter.is_none()
    }
}

/// Matches `<keyword>:<value>` or `<keyword> <value>` case-insensitively
/// and returns the trimmed value, or None if the keyword does not lead or
/// nothing follows it.
fn keyword_value<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let head = text.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }

    let rest = &text[keyword.len()..];
    let rest = match rest.strip_prefix(':') {
        Some(r) => r,
        None if rest.starts_with(char::is_whitespace) => rest,
        None => return None,
    };

    let value = rest.trim();
    (!value.is_empty()).then_some(value)
}

/// Returns the first whitespace-delimited token of `value`.
fn first_token(value: &str) -> &str {
    value.split_whitespace().next().unwrap_or("")
}

/// Strips one pair of matching single or double quotes, if present.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_query() {
        assert_eq!(Query::parse(""), Query::default());
        assert_eq!(Query::parse("   \t  "), Query::default());
        assert!(Query::parse("  ").is_empty());
    }

    #[test]
    fn test_filter_with_colon() {
        let query = Query::parse("filter:today");
        assert_eq!(query.filter.as_deref(), Some("today"));
        assert_eq!(query.project_id, None);
        assert_eq!(query.section_id, None);
    }

    #[test]
    fn test_filter_with_space() {
        let query = Query::parse("filter today | overdue");
        assert_eq!(query.filter.as_deref(), Some("today | overdue"));
    }

    #[test]
    fn test_filter_keyword_is_case_insensitive() {
        assert_eq!(Query::parse("FILTER: overdue").filter.as_deref(), Some("overdue"));
        assert_eq!(Query::parse("Filter overdue").filter.as_deref(), Some("overdue"));
    }

    #[test]
    fn test_filter_strips_matching_quotes() {
        assert_eq!(
            Query::parse("filter: \"today | overdue\"").filter.as_deref(),
            Some("today | overdue")
        );
        assert_eq!(Query::parse("filter: 'today'").filter.as_deref(), Some("today"));
    }

    #[test]
    fn test_filter_keeps_mismatched_quotes() {
        assert_eq!(Query::parse("filter: \"today'").filter.as_deref(), Some("\"today'"));
    }

    #[test]
    fn test_filter_captures_special_characters() {
        let query = Query::parse("filter: #Work & today");
        assert_eq!(query.filter.as_deref(), Some("#Work & today"));
    }

    #[test]
    fn test_project_with_colon() {
        let query = Query::parse("project:220474322");
        assert_eq!(query.project_id.as_deref(), Some("220474322"));
        assert_eq!(query.filter, None);
    }

    #[test]
    fn test_project_with_space_takes_first_token() {
        let query = Query::parse("project 220474322 trailing words");
        assert_eq!(query.project_id.as_deref(), Some("220474322"));
    }

    #[test]
    fn test_section_forms() {
        assert_eq!(Query::parse("section:7025").section_id.as_deref(), Some("7025"));
        assert_eq!(Query::parse("Section 7025").section_id.as_deref(), Some("7025"));
    }

    #[test]
    fn test_bare_digits_are_a_project_id() {
        let query = Query::parse("220474322");
        assert_eq!(query.project_id.as_deref(), Some("220474322"));
        assert_eq!(query.filter, None);
    }

    #[test]
    fn test_anything_else_falls_back_to_filter() {
        assert_eq!(Query::parse("#Work").filter.as_deref(), Some("#Work"));
        assert_eq!(Query::parse("today").filter.as_deref(), Some("today"));
        assert_eq!(
            Query::parse("today | overdue").filter.as_deref(),
            Some("today | overdue")
        );
    }

    #[test]
    fn test_filter_precedes_project_recognition() {
        // "filter:" leads, so the digits are part of the filter value.
        let query = Query::parse("filter: 12345");
        assert_eq!(query.filter.as_deref(), Some("12345"));
        assert_eq!(query.project_id, None);
    }

    #[test]
    fn test_bare_keyword_degrades_to_filter() {
        // A keyword with no value is not a directive, just filter text.
        assert_eq!(Query::parse("project").filter.as_deref(), Some("project"));
        assert_eq!(Query::parse("filter:").filter.as_deref(), Some("filter:"));
    }

    #[test]
    fn test_non_ascii_input_falls_back_to_filter() {
        assert_eq!(Query::parse("Работа").filter.as_deref(), Some("Работа"));
    }

    #[test]
    fn test_parse_is_trim_stable() {
        assert_eq!(Query::parse("  project:1  "), Query::parse("project:1"));
    }
}
