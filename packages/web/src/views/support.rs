//! Shared helpers for the dashboard views: task-to-row mapping, dropdown
//! option sets, and the common mutation-error path.

use api::{
    ApiClient, ApiError, DailyTask, DefaultTask, NewTask, Operator, Priority, Status,
};
use dioxus::prelude::*;
use ui::{AuthContext, CellValue, DropdownField, DropdownOption, Notices, Row};

pub fn priority_options() -> Vec<DropdownOption> {
    Priority::ALL
        .iter()
        .map(|p| DropdownOption::new(p.label(), p.label()))
        .collect()
}

pub fn status_options() -> Vec<DropdownOption> {
    Status::ALL
        .iter()
        .map(|s| DropdownOption::new(s.label(), s.label()))
        .collect()
}

pub fn priority_dropdown() -> DropdownField {
    DropdownField {
        field: "priority".to_string(),
        options: priority_options(),
    }
}

pub fn status_dropdown() -> DropdownField {
    DropdownField {
        field: "status".to_string(),
        options: status_options(),
    }
}

pub fn default_task_row(task: &DefaultTask) -> Row {
    Row::new(task.id.clone())
        .with("title", CellValue::text(task.title.clone()))
        .with("description", CellValue::text(task.description_or_default()))
}

pub fn daily_task_row(task: &DailyTask) -> Row {
    Row::new(task.id.clone())
        .with("title", CellValue::text(task.title.clone()))
        .with("description", CellValue::text(task.description.clone()))
        .with("priority", CellValue::text(task.priority.label()))
        .with("status", CellValue::text(task.status.label()))
        .with("assignedTo", CellValue::list(task.assigned_to.clone()))
}

pub fn new_task_row(task: &NewTask) -> Row {
    let mut row = Row::new(task.id.clone())
        .with("title", CellValue::text(task.title.clone()))
        .with("description", CellValue::text(task.description.clone()))
        .with("dueDate", CellValue::text(task.due_date.clone()))
        .with("priority", CellValue::text(task.priority.label()))
        .with("status", CellValue::text(task.status.label()))
        .with("assignedTo", CellValue::list(task.assigned_to.clone()));
    if let Some(assigned_by) = &task.assigned_by {
        row = row.with("assignedBy", CellValue::text(assigned_by.clone()));
    }
    row
}

/// Map assignee display names back to operator ids. Unknown names are
/// dropped rather than guessed.
pub fn operator_ids_for_names(operators: &[Operator], names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter_map(|name| {
            operators
                .iter()
                .find(|op| &op.name == name)
                .map(|op| op.id.clone())
        })
        .collect()
}

/// Parse a row's priority cell, falling back to the current typed value.
pub fn row_priority(row: &Row, fallback: Priority) -> Priority {
    Priority::from_label(&row.get_text("priority")).unwrap_or(fallback)
}

pub fn row_status(row: &Row, fallback: Status) -> Status {
    Status::from_label(&row.get_text("status")).unwrap_or(fallback)
}

/// Common failure path for mutations. Auth errors additionally trigger a
/// session re-check so the guard can redirect if the session is gone.
pub fn report_failure(
    mut notices: Notices,
    auth: AuthContext,
    client: &ApiClient,
    notice_id: &str,
    action: &str,
    err: ApiError,
) {
    tracing::error!(%err, action, "request failed");
    if err.is_auth_error() {
        notices.error(notice_id, format!("{action} failed: your session has expired."));
        let client = client.clone();
        // On the app scope: the re-check flips the guard to its spinner,
        // which unmounts this section and would cancel a scope-bound task.
        spawn_forever(async move {
            auth.check(client).await;
        });
    } else {
        notices.error(notice_id, format!("{action} failed. Please try again."));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator(id: &str, name: &str) -> Operator {
        Operator {
            id: id.to_string(),
            name: name.to_string(),
            email: None,
        }
    }

    #[test]
    fn names_map_to_ids_and_unknowns_drop() {
        let operators = [operator("1", "Asha"), operator("2", "Ravi")];
        let names = vec![
            "Ravi".to_string(),
            "Nobody".to_string(),
            "Asha".to_string(),
        ];
        assert_eq!(operator_ids_for_names(&operators, &names), ["2", "1"]);
    }

    #[test]
    fn dropdown_options_use_display_labels() {
        let options = status_options();
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["Pending", "In Progress", "Completed"]);
    }

    #[test]
    fn row_status_tolerates_edited_labels() {
        let row = Row::new("1").with("status", CellValue::text("In Progress"));
        assert_eq!(row_status(&row, Status::Pending), Status::InProgress);
        let row = Row::new("1").with("status", CellValue::text("garbage"));
        assert_eq!(row_status(&row, Status::Completed), Status::Completed);
    }
}
