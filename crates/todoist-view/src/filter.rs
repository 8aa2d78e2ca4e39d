//! Date-relative filtering of task collections.
//!
//! Supported atoms are `today`, `overdue` and `tomorrow`, combined with
//! `|` (any part matches) or `&` (all parts match). All comparisons happen
//! at day granularity in local time; a task without a resolvable due date
//! never matches a date predicate. Expressions that match none of the
//! recognized forms (project tags, unknown keywords) leave the collection
//! unchanged — the engine has no way to resolve project names, so a no-op
//! is the defined fallback, not an error.

use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime};

use crate::task::Task;

/// An atomic date predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Predicate {
    Today,
    Overdue,
    Tomorrow,
}

impl Predicate {
    fn from_keyword(word: &str) -> Option<Predicate> {
        match word {
            "today" => Some(Predicate::Today),
            "overdue" => Some(Predicate::Overdue),
            "tomorrow" => Some(Predicate::Tomorrow),
            _ => None,
        }
    }

    fn matches(self, task: &Task, today: NaiveDate) -> bool {
        let Some(due_day) = resolve_due_day(task) else {
            return false;
        };

        match self {
            Predicate::Today => due_day == today,
            Predicate::Overdue => due_day < today,
            Predicate::Tomorrow => Some(due_day) == today.checked_add_days(Days::new(1)),
        }
    }
}

/// Applies a filter expression against the current local day.
///
/// The input is not mutated; matching tasks are returned as a fresh
/// collection in their original relative order.
pub fn apply_filter(tasks: &[Task], expression: &str) -> Vec<Task> {
    apply_filter_on(tasks, expression, Local::now().date_naive())
}

/// Like [`apply_filter`], with the reference day supplied explicitly.
pub fn apply_filter_on(tasks: &[Task], expression: &str, today: NaiveDate) -> Vec<Task> {
    let expr = expression.trim().to_lowercase();

    if let Some(predicate) = Predicate::from_keyword(&expr) {
        return retain(tasks, |task| predicate.matches(task, today));
    }

    // `|` is checked before `&`: an expression containing both operators is
    // split on `|` only, and a part still containing `&` is an unrecognized
    // atom that never matches.
    if expr.contains('|') {
        let parts = parse_parts(&expr, '|');
        return retain(tasks, |task| {
            parts
                .iter()
                .any(|part| part.is_some_and(|p| p.matches(task, today)))
        });
    }

    if expr.contains('&') {
        let parts = parse_parts(&expr, '&');
        return retain(tasks, |task| {
            parts
                .iter()
                .all(|part| part.is_some_and(|p| p.matches(task, today)))
        });
    }

    tasks.to_vec()
}

/// Splits a compound expression and resolves each trimmed part to a
/// predicate; unrecognized parts stay `None` and never match.
fn parse_parts(expr: &str, separator: char) -> Vec<Option<Predicate>> {
    expr.split(separator)
        .map(|part| Predicate::from_keyword(part.trim()))
        .collect()
}

fn retain(tasks: &[Task], predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
    tasks.iter().filter(|t| predicate(t)).cloned().collect()
}

/// Resolves a task's due date to a local calendar day.
///
/// Prefers the time-bearing field; the date-only field is also treated as
/// time-bearing when it carries a time separator. Returns None when the
/// task has no due date or the value does not parse as a calendar date.
fn resolve_due_day(task: &Task) -> Option<NaiveDate> {
    let due = task.due.as_ref()?;
    let raw = due.datetime.as_deref().unwrap_or(&due.date);

    if raw.contains('T') {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Local).date_naive());
        }
        // Floating datetimes carry no offset; take the date part as-is.
        return NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .ok()
            .map(|dt| dt.date());
    }

    parse_strict_day(raw)
}

/// Parses a strict ten-character `YYYY-MM-DD` day.
fn parse_strict_day(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Due;

    const TODAY: &str = "2026-08-29";

    fn today() -> NaiveDate {
        TODAY.parse().unwrap()
    }

    fn task(id: &str, due: Option<Due>) -> Task {
        Task {
            id: id.to_string(),
            content: format!("Task {id}"),
            is_completed: false,
            order: 0,
            priority: 1,
            project_id: "p1".to_string(),
            section_id: None,
            parent_id: None,
            due,
            assignee_id: None,
            url: format!("https://todoist.com/app/task/{id}"),
        }
    }

    fn due_on(date: &str) -> Option<Due> {
        Some(Due {
            date: date.to_string(),
            datetime: None,
            string: None,
        })
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    fn sample() -> Vec<Task> {
        vec![
            task("due-today", due_on(TODAY)),
            task("due-yesterday", due_on("2026-08-28")),
            task("due-tomorrow", due_on("2026-08-30")),
            task("no-due", None),
            task("bad-due", due_on("someday")),
        ]
    }

    #[test]
    fn test_today_matches_exact_day_only() {
        let result = apply_filter_on(&sample(), "today", today());
        assert_eq!(ids(&result), ["due-today"]);
    }

    #[test]
    fn test_overdue_is_strictly_before_today() {
        let result = apply_filter_on(&sample(), "overdue", today());
        assert_eq!(ids(&result), ["due-yesterday"]);
    }

    #[test]
    fn test_tomorrow_matches_next_day() {
        let result = apply_filter_on(&sample(), "tomorrow", today());
        assert_eq!(ids(&result), ["due-tomorrow"]);
    }

    #[test]
    fn test_missing_and_unparsable_due_never_match() {
        for expr in ["today", "overdue", "tomorrow"] {
            let result = apply_filter_on(&sample(), expr, today());
            assert!(!ids(&result).contains(&"no-due"), "{expr}");
            assert!(!ids(&result).contains(&"bad-due"), "{expr}");
        }
    }

    #[test]
    fn test_expression_is_trimmed_and_lowercased() {
        let result = apply_filter_on(&sample(), "  TODAY ", today());
        assert_eq!(ids(&result), ["due-today"]);
    }

    #[test]
    fn test_or_is_the_union() {
        let result = apply_filter_on(&sample(), "today | overdue", today());
        assert_eq!(ids(&result), ["due-today", "due-yesterday"]);
    }

    #[test]
    fn test_and_requires_all_parts() {
        let result = apply_filter_on(&sample(), "today & overdue", today());
        assert!(result.is_empty());

        let result = apply_filter_on(&sample(), "today & today", today());
        assert_eq!(ids(&result), ["due-today"]);
    }

    #[test]
    fn test_unrecognized_or_part_never_matches() {
        let result = apply_filter_on(&sample(), "today | #Work", today());
        assert_eq!(ids(&result), ["due-today"]);
    }

    #[test]
    fn test_or_takes_precedence_over_and() {
        // Split on `|` only; "today & overdue" becomes an unrecognized atom.
        let result = apply_filter_on(&sample(), "today & overdue | tomorrow", today());
        assert_eq!(ids(&result), ["due-tomorrow"]);
    }

    #[test]
    fn test_unrecognized_expression_is_a_no_op() {
        let tasks = sample();
        let result = apply_filter_on(&tasks, "#Work", today());
        assert_eq!(result, tasks);

        let result = apply_filter_on(&tasks, "next week", today());
        assert_eq!(result, tasks);
    }

    #[test]
    fn test_datetime_field_is_preferred() {
        let t = task(
            "1",
            Some(Due {
                date: "2020-01-01".to_string(),
                datetime: Some(format!("{TODAY}T23:30:00")),
                string: None,
            }),
        );
        let result = apply_filter_on(&[t], "today", today());
        assert_eq!(ids(&result), ["1"]);
    }

    #[test]
    fn test_date_with_time_separator_is_time_bearing() {
        let t = task(
            "1",
            Some(Due {
                date: format!("{TODAY}T09:00:00"),
                datetime: None,
                string: None,
            }),
        );
        let result = apply_filter_on(&[t], "today", today());
        assert_eq!(ids(&result), ["1"]);
    }

    #[test]
    fn test_loose_day_format_is_rejected() {
        // Parsable by a lenient parser, but not strict YYYY-MM-DD.
        let t = task("1", due_on("2026-8-29"));
        let result = apply_filter_on(&[t], "today", today());
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_collection() {
        assert!(apply_filter_on(&[], "today", today()).is_empty());
        assert!(apply_filter_on(&[], "#Work", today()).is_empty());
    }

    #[test]
    fn test_input_is_not_mutated_and_order_preserved() {
        let tasks = sample();
        let before = tasks.clone();
        let _ = apply_filter_on(&tasks, "today | tomorrow | overdue", today());
        assert_eq!(tasks, before);

        let result = apply_filter_on(&tasks, "overdue | today | tomorrow", today());
        // Original relative order, not operand order.
        assert_eq!(ids(&result), ["due-today", "due-yesterday", "due-tomorrow"]);
    }
}
