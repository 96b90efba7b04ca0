//! Domain models and their wire-format projections.
//!
//! The backend speaks SCREAMING_SNAKE enum tokens (`LOW`, `IN_PROGRESS`)
//! and nested camelCase JSON; the dashboard renders human labels (`Low`,
//! `In Progress`) and flat rows. Every read and write crosses those
//! boundaries through the conversions in this module, which are total
//! bijections over the defined enum sets.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// A user's role. Gates which dashboard tree the session may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Operation,
}

impl Role {
    pub fn token(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Operation => "OPERATION",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Operation => "Operation",
        }
    }
}

/// The client's cached view of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// A user with the OPERATION role, assignable to tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Task priority. Wire tokens are SCREAMING_SNAKE, labels are display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn token(self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "LOW" => Some(Priority::Low),
            "MEDIUM" => Some(Priority::Medium),
            "HIGH" => Some(Priority::High),
            _ => None,
        }
    }

    /// Tolerant parse of a display label. Accepts the case variations the
    /// dropdowns and older rows produce ("low", "LOW", "Low").
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pending,
    InProgress,
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::InProgress, Status::Completed];

    pub fn token(self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::InProgress => "IN_PROGRESS",
            Status::Completed => "COMPLETED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "PENDING" => Some(Status::Pending),
            "IN_PROGRESS" => Some(Status::InProgress),
            "COMPLETED" => Some(Status::Completed),
            _ => None,
        }
    }

    /// Tolerant parse of a display label, including the collapsed
    /// "inprogress" form some revisions of the dropdowns emitted.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().replace('_', " ").as_str() {
            "pending" => Some(Status::Pending),
            "in progress" | "inprogress" => Some(Status::InProgress),
            "completed" => Some(Status::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

const NO_DESCRIPTION: &str = "No description provided.";

/// A reusable task template owned by an admin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultTask {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl DefaultTask {
    pub fn description_or_default(&self) -> String {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => NO_DESCRIPTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultTaskRef {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Daily task as the backend returns it: the template nested under
/// `defaultTask`, assignees as full operator records.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTaskFromApi {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub default_task: DefaultTaskRef,
    pub priority: Priority,
    pub status: Status,
    #[serde(default)]
    pub operators: Vec<Operator>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub default_task_id: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub task_date: Option<String>,
}

/// The flattened projection the dashboard works with.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub assigned_to: Vec<String>,
    pub default_task_id: Option<String>,
    pub operator_ids: Vec<String>,
    pub is_completed: bool,
    pub task_date: Option<String>,
}

impl From<DailyTaskFromApi> for DailyTask {
    fn from(task: DailyTaskFromApi) -> Self {
        let description = match task.default_task.description.as_deref() {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => NO_DESCRIPTION.to_string(),
        };
        DailyTask {
            id: task.id,
            title: task.default_task.title,
            description,
            priority: task.priority,
            status: task.status,
            assigned_to: task.operators.iter().map(|op| op.name.clone()).collect(),
            default_task_id: task.default_task_id,
            operator_ids: task.operators.into_iter().map(|op| op.id).collect(),
            is_completed: task.is_completed,
            task_date: task.task_date,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// Freestanding one-off task as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaskFromApi {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub due_date: String,
    pub priority: Priority,
    pub status: Status,
    #[serde(default)]
    pub operators: Vec<Operator>,
    #[serde(default)]
    pub admin: Option<AdminRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: Priority,
    pub status: Status,
    pub assigned_to: Vec<String>,
    pub operator_ids: Vec<String>,
    pub assigned_by: Option<String>,
}

impl From<NewTaskFromApi> for NewTask {
    fn from(task: NewTaskFromApi) -> Self {
        let description = match task.description.as_deref() {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => NO_DESCRIPTION.to_string(),
        };
        NewTask {
            id: task.id,
            title: task.title,
            description,
            due_date: task.due_date,
            priority: task.priority,
            status: task.status,
            assigned_to: task.operators.iter().map(|op| op.name.clone()).collect(),
            operator_ids: task.operators.into_iter().map(|op| op.id).collect(),
            assigned_by: task.admin.and_then(|a| a.name),
        }
    }
}

// -- write payloads ---------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDefaultTask {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDefaultTask {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDailyTask {
    pub default_task_id: String,
    pub operator_ids: Vec<String>,
    pub priority: Priority,
    pub status: Status,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDailyTask {
    pub priority: Priority,
    pub status: Status,
    pub operator_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewTask {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: Priority,
    pub status: Status,
    pub operator_ids: Vec<String>,
    pub admin_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewTask {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: Priority,
    pub status: Status,
    pub operator_ids: Vec<String>,
}

// -- overview payloads ------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PriorityCount {
    #[serde(default)]
    pub low: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub high: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct StatusCount {
    #[serde(default)]
    pub pending: u32,
    #[serde(default)]
    pub in_progress: u32,
    #[serde(default)]
    pub completed: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionBucket {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub completed: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionBreakdown {
    #[serde(default)]
    pub daily: CompletionBucket,
    #[serde(default)]
    pub new: CompletionBucket,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRate {
    #[serde(default)]
    pub total_tasks: u32,
    #[serde(default)]
    pub completed_tasks: u32,
    #[serde(default)]
    pub completion_rate: f64,
    #[serde(default)]
    pub breakdown: CompletionBreakdown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeWorkload {
    pub name: String,
    #[serde(default, alias = "count", alias = "tasks")]
    pub task_count: u32,
}

// -- helpers ----------------------------------------------------------------

/// The backend is inconsistent about id types — some tables return numeric
/// ids, others UUID strings. Normalize both to `String`.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyId {
        Text(String),
        Num(i64),
    }

    match AnyId::deserialize(deserializer)? {
        AnyId::Text(s) => Ok(s),
        AnyId::Num(n) => Ok(n.to_string()),
    }
}

fn opt_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyId {
        Text(String),
        Num(i64),
    }

    match Option::<AnyId>::deserialize(deserializer)? {
        Some(AnyId::Text(s)) => Ok(Some(s)),
        Some(AnyId::Num(n)) => Ok(Some(n.to_string())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_token_roundtrip_is_total() {
        for p in Priority::ALL {
            assert_eq!(Priority::from_token(p.token()), Some(p));
            assert_eq!(Priority::from_label(p.label()), Some(p));
        }
    }

    #[test]
    fn status_token_roundtrip_is_total() {
        for s in Status::ALL {
            assert_eq!(Status::from_token(s.token()), Some(s));
            assert_eq!(Status::from_label(s.label()), Some(s));
        }
    }

    #[test]
    fn status_label_accepts_variations() {
        assert_eq!(Status::from_label("in progress"), Some(Status::InProgress));
        assert_eq!(Status::from_label("inprogress"), Some(Status::InProgress));
        assert_eq!(Status::from_label("IN_PROGRESS"), Some(Status::InProgress));
        assert_eq!(Status::from_label("archived"), None);
    }

    #[test]
    fn backend_tokens_display_as_labels() {
        // {priority: "HIGH", status: "IN_PROGRESS"} renders as High / In Progress.
        let p: Priority = serde_json::from_str("\"HIGH\"").unwrap();
        let s: Status = serde_json::from_str("\"IN_PROGRESS\"").unwrap();
        assert_eq!(p.label(), "High");
        assert_eq!(s.label(), "In Progress");
        // Editing back to Completed must write the COMPLETED token.
        let completed = Status::from_label("Completed").unwrap();
        assert_eq!(serde_json::to_string(&completed).unwrap(), "\"COMPLETED\"");
    }

    #[test]
    fn daily_task_flattens_nested_shape() {
        let json = r#"{
            "id": 7,
            "defaultTask": {"title": "Open the store", "description": ""},
            "priority": "HIGH",
            "status": "IN_PROGRESS",
            "operators": [
                {"id": 1, "name": "Asha"},
                {"id": "b2", "name": "Ravi"}
            ],
            "defaultTaskId": 3,
            "isCompleted": false,
            "taskDate": "2025-07-23"
        }"#;
        let task: DailyTask = serde_json::from_str::<DailyTaskFromApi>(json)
            .unwrap()
            .into();
        assert_eq!(task.id, "7");
        assert_eq!(task.title, "Open the store");
        assert_eq!(task.description, "No description provided.");
        assert_eq!(task.assigned_to, vec!["Asha", "Ravi"]);
        assert_eq!(task.operator_ids, vec!["1", "b2"]);
        assert_eq!(task.default_task_id.as_deref(), Some("3"));
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, Status::InProgress);
    }

    #[test]
    fn status_counts_parse_backend_keys() {
        let json = r#"{"PENDING": 4, "IN_PROGRESS": 2, "COMPLETED": 9}"#;
        let counts: StatusCount = serde_json::from_str(json).unwrap();
        assert_eq!(counts.pending, 4);
        assert_eq!(counts.in_progress, 2);
        assert_eq!(counts.completed, 9);
    }
}
