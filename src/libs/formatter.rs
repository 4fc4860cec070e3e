//! Text formatting for task fields, filters and analytics.
//!
//! These helpers produce the strings that end up in screen cells so the view
//! and the table printer agree on how empty values, dates and rates look.
//!
//! ```rust
//! use taskflow::libs::formatter::{format_rate, format_tags};
//!
//! assert_eq!(format_tags(&["api".to_string(), "urgent".to_string()]), "#api #urgent");
//! assert_eq!(format_rate(66.666), "66.7%");
//! ```

use crate::libs::task::{TaskFilter, DATE_FORMAT};
use chrono::NaiveDate;

/// Placeholder for missing values in tables.
pub const EMPTY: &str = "-";

pub fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return EMPTY.to_string();
    }
    tags.iter().map(|t| format!("#{}", t)).collect::<Vec<_>>().join(" ")
}

/// Renders a due date as "Jan 03, 2025" when it parses, or as sent otherwise.
pub fn format_due(due_date: Option<&str>) -> String {
    match due_date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(raw) => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => date.format("%b %d, %Y").to_string(),
            Err(_) => raw.to_string(),
        },
        None => EMPTY.to_string(),
    }
}

pub fn format_optional(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.to_string(),
        None => EMPTY.to_string(),
    }
}

/// Completion rate with one decimal, e.g. `66.7%`.
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate.max(0.0))
}

/// Human-readable filter, e.g. "status: In Progress, priority: any".
pub fn describe_filter(filter: &TaskFilter) -> String {
    let status = filter.status.map(|s| s.label()).unwrap_or("any");
    let priority = filter.priority.map(|p| p.label()).unwrap_or("any");
    let mut text = format!("status: {}, priority: {}", status, priority);
    if let Some(assignee) = filter.assigned_to.as_deref().map(str::trim).filter(|a| !a.is_empty()) {
        text.push_str(&format!(", assignee: {}", assignee));
    }
    text
}
