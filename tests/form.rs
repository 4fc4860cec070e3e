mod common;

#[cfg(test)]
mod tests {
    use crate::common::task;
    use taskflow::libs::form::{FormError, FormMode, Submission, TaskForm};
    use taskflow::libs::task::{NewTask, TaskPriority, TaskStatus};

    #[test]
    fn test_create_form_defaults() {
        let form = TaskForm::create();
        assert_eq!(form.mode(), &FormMode::Create);
        assert_eq!(form.priority, TaskPriority::Medium);
        assert_eq!(form.status, TaskStatus::Todo);
        assert!(form.title.is_empty());
        assert!(form.target().is_none());
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let mut form = TaskForm::create();
        assert_eq!(form.submit(), Err(FormError::TitleRequired));

        form.title = "   ".to_string();
        assert_eq!(form.submit(), Err(FormError::TitleRequired));
        assert_eq!(FormError::TitleRequired.to_string(), "Title is required");
    }

    #[test]
    fn test_create_submission() {
        let mut form = TaskForm::create();
        form.title = "  Write docs ".to_string();
        form.description = "API reference".to_string();
        form.priority = TaskPriority::High;
        form.tags = "docs, api,".to_string();

        let expected = NewTask {
            title: "Write docs".to_string(),
            description: "API reference".to_string(),
            priority: TaskPriority::High,
            due_date: None,
            assigned_to: None,
            tags: vec!["docs".to_string(), "api".to_string()],
        };
        assert_eq!(form.submit(), Ok(Submission::Create(expected)));
    }

    #[test]
    fn test_edit_form_is_seeded_from_task() {
        let mut t = task("7", "Fix login");
        t.description = Some("Session expires".to_string());
        t.status = TaskStatus::InProgress;
        t.priority = TaskPriority::Urgent;
        t.due_date = Some("2024-03-01".to_string());
        t.assigned_to = Some("bob".to_string());
        t.tags = vec!["auth".to_string(), "bug".to_string()];

        let form = TaskForm::edit(&t);

        assert_eq!(form.target(), Some(&t));
        assert_eq!(form.title, "Fix login");
        assert_eq!(form.description, "Session expires");
        assert_eq!(form.status, TaskStatus::InProgress);
        assert_eq!(form.priority, TaskPriority::Urgent);
        assert_eq!(form.due_date, "2024-03-01");
        assert_eq!(form.assigned_to, "bob");
        assert_eq!(form.tags, "auth, bug");
    }

    #[test]
    fn test_edit_submission_targets_task_id() {
        let mut form = TaskForm::edit(&task("7", "Fix login"));
        form.status = TaskStatus::Completed;
        form.tags = "".to_string();

        let Ok(Submission::Update { id, patch }) = form.submit() else {
            panic!("expected an update");
        };
        assert_eq!(id, "7");
        assert_eq!(patch.title.as_deref(), Some("Fix login"));
        assert_eq!(patch.status, Some(TaskStatus::Completed));
        assert_eq!(patch.priority, Some(TaskPriority::Medium));
        assert_eq!(patch.due_date, None);
        assert_eq!(patch.assigned_to, None);
        assert_eq!(patch.tags, Some(Vec::new()));
    }

    #[test]
    fn test_edit_erasing_fields() {
        let mut t = task("7", "Fix login");
        t.assigned_to = Some("bob".to_string());
        t.due_date = Some("2024-03-01".to_string());
        let mut form = TaskForm::edit(&t);
        form.assigned_to = "  ".to_string();
        form.due_date = String::new();

        let Ok(Submission::Update { patch, .. }) = form.submit() else {
            panic!("expected an update");
        };
        // The service clears an assignee on "" but cannot unset a due date.
        assert_eq!(patch.assigned_to.as_deref(), Some(""));
        assert_eq!(patch.due_date, None);

        form.assigned_to = "carol".to_string();
        let Ok(Submission::Update { patch, .. }) = form.submit() else {
            panic!("expected an update");
        };
        assert_eq!(patch.assigned_to.as_deref(), Some("carol"));
    }

    #[test]
    fn test_submit_does_not_consume_draft() {
        let mut form = TaskForm::create();
        form.title = "Draft".to_string();
        let first = form.submit();
        assert_eq!(first, form.submit());
        assert_eq!(first.unwrap().title(), "Draft");
        form.cancel();
    }
}
