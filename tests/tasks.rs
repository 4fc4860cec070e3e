mod common;

#[cfg(test)]
mod tests {
    use crate::common::task;
    use chrono::{TimeZone, Utc};
    use clap::ValueEnum;
    use serde_json::json;
    use taskflow::libs::formatter::{describe_filter, format_due, format_optional, format_tags};
    use taskflow::libs::task::{
        join_tags, parse_tags, AnalyticsSnapshot, NewTask, Task, TaskFilter, TaskPatch, TaskPriority, TaskStatus,
    };

    #[test]
    fn test_parse_tags_trims_and_drops_empty() {
        assert_eq!(parse_tags(" backend , api ,, "), vec!["backend", "api"]);
        assert_eq!(parse_tags("solo"), vec!["solo"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn test_parse_tags_keeps_order_and_duplicates() {
        assert_eq!(parse_tags("b, a, b"), vec!["b", "a", "b"]);
        assert_eq!(parse_tags(&join_tags(&parse_tags("x,y"))), vec!["x", "y"]);
    }

    #[test]
    fn test_cli_values_match_wire_values() {
        for status in TaskStatus::ALL {
            let value = status.to_possible_value().unwrap();
            assert_eq!(value.get_name(), status.as_str());
        }
        for priority in TaskPriority::ALL {
            let value = priority.to_possible_value().unwrap();
            assert_eq!(value.get_name(), priority.as_str());
        }
        assert_eq!(<TaskStatus as ValueEnum>::from_str("in_progress", false), Ok(TaskStatus::InProgress));
        assert!(<TaskStatus as ValueEnum>::from_str("in-progress", false).is_err());
    }

    #[test]
    fn test_overdue_yesterday_until_completed() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap();
        let mut t = task("1", "Ship");
        t.due_date = Some("2024-01-01".to_string());
        assert!(t.is_overdue_at(now));

        t.status = TaskStatus::InProgress;
        assert!(t.is_overdue_at(now));

        t.status = TaskStatus::Completed;
        assert!(!t.is_overdue_at(now));
    }

    #[test]
    fn test_overdue_boundaries() {
        let mut t = task("1", "Ship");
        t.due_date = Some("2024-01-02".to_string());

        // Due today: overdue once the day has started.
        let midnight = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        assert!(!t.is_overdue_at(midnight));
        assert!(t.is_overdue_at(midnight + chrono::Duration::seconds(1)));

        let day_before = Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 59).unwrap();
        assert!(!t.is_overdue_at(day_before));
    }

    #[test]
    fn test_overdue_without_valid_date() {
        let now = Utc::now();
        let mut t = task("1", "Ship");
        assert!(!t.is_overdue_at(now));

        t.due_date = Some("someday".to_string());
        assert!(!t.is_overdue_at(now));
        assert_eq!(t.due(), None);
    }

    #[test]
    fn test_task_deserializes_with_missing_fields() {
        let t: Task = serde_json::from_value(json!({
            "id": "abc",
            "title": "Write docs",
            "status": "in_progress",
            "priority": "urgent",
            "tags": ["docs"],
            "created_at": "2024-01-01T10:00:00",
        }))
        .unwrap();

        assert_eq!(t.status, TaskStatus::InProgress);
        assert_eq!(t.priority, TaskPriority::Urgent);
        assert_eq!(t.description, None);
        assert_eq!(t.due_date, None);
        assert_eq!(t.tags, vec!["docs"]);
    }

    #[test]
    fn test_new_task_omits_absent_optionals() {
        let mut fields = NewTask::new("Write docs");
        fields.tags = vec!["docs".to_string()];
        let body = serde_json::to_value(&fields).unwrap();

        assert_eq!(
            body,
            json!({"title": "Write docs", "description": "", "priority": "medium", "tags": ["docs"]})
        );
        assert!(body.get("status").is_none());
    }

    #[test]
    fn test_status_patch_carries_only_status() {
        let body = serde_json::to_value(TaskPatch::status(TaskStatus::Completed)).unwrap();
        assert_eq!(body, json!({"status": "completed"}));
        assert!(TaskPatch::default().is_empty());
        assert!(!TaskPatch::status(TaskStatus::Todo).is_empty());
    }

    #[test]
    fn test_analytics_tolerates_minimal_overview() {
        let snapshot: AnalyticsSnapshot = serde_json::from_value(json!({
            "total_tasks": 4,
            "completed_tasks": 1,
            "in_progress_tasks": 2,
            "overdue_tasks": 1,
        }))
        .unwrap();
        assert_eq!(snapshot.total_tasks, 4);
        assert_eq!(snapshot.todo_tasks, 0);
        assert_eq!(snapshot.completion_rate, 0.0);
    }

    #[test]
    fn test_formatters() {
        assert_eq!(format_tags(&[]), "-");
        assert_eq!(format_tags(&["a".to_string(), "b".to_string()]), "#a #b");
        assert_eq!(format_due(Some("2025-01-03")), "Jan 03, 2025");
        assert_eq!(format_due(Some("next week")), "next week");
        assert_eq!(format_due(None), "-");
        assert_eq!(format_optional(Some("  ")), "-");

        let filter = TaskFilter {
            status: Some(TaskStatus::InProgress),
            priority: None,
            assigned_to: Some("alice".to_string()),
        };
        assert_eq!(describe_filter(&filter), "status: In Progress, priority: any, assignee: alice");
        assert_eq!(describe_filter(&TaskFilter::default()), "status: any, priority: any");
    }
}
