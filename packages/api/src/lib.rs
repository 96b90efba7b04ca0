//! # API crate — typed client for the Taskboard backend
//!
//! The backend is an external REST/JSON service; this crate is the only
//! place the dashboard talks to it. Every endpoint the frontends call goes
//! through [`ApiClient`], which owns the HTTP client, the session cookies
//! (native targets; the browser manages them on wasm), and the per-resource
//! response caches.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Domain types, enum token/label bijections, wire-shape transforms |
//! | [`cache`] | TTL + single-flight response caches |
//! | [`error`] | [`ApiError`] taxonomy (transport / unauthorized / status / rejected) |
//!
//! ## Contract
//!
//! Task endpoints answer with a `{success, data, message?}` envelope; a
//! non-2xx status or `success: false` is an error. 401/403 always maps to
//! [`ApiError::Unauthorized`] so the session layer can force a re-check.
//! Reads are cached; every mutation invalidates the caches it can have
//! affected, and callers reconcile by refetching the authoritative list.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod cache;
pub mod error;
pub mod models;

pub use error::ApiError;
pub use models::{
    AssigneeWorkload, CompletionRate, CreateDailyTask, CreateDefaultTask, CreateNewTask,
    DailyTask, DailyTaskFromApi, DefaultTask, NewTask, NewTaskFromApi, Operator, Priority,
    PriorityCount, Role, Status, StatusCount, UpdateDailyTask, UpdateDefaultTask,
    UpdateNewTask, UserInfo,
};

use cache::{ttl, Cache};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// The `{success, data, message?}` response envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    #[serde(default = "Option::default")]
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
}

fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<T, ApiError> {
    if !envelope.success {
        let message = envelope
            .message
            .unwrap_or_else(|| "The server rejected the request".to_string());
        return Err(ApiError::Rejected(message));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Rejected("The response was missing its data payload".to_string()))
}

#[derive(Debug, Clone, Serialize)]
struct LoginRequest {
    email: String,
    password: String,
    role: Role,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    user: LoginUser,
}

/// The login endpoint names the id field `userId`, unlike `/auth/check`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginUser {
    user_id: String,
    name: String,
    email: String,
    role: Role,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TotalTasks {
    Count(u32),
    Wrapped { total: u32 },
}

impl TotalTasks {
    fn value(self) -> u32 {
        match self {
            TotalTasks::Count(n) => n,
            TotalTasks::Wrapped { total } => total,
        }
    }
}

struct Caches {
    daily_tasks: Cache<Vec<DailyTask>>,
    default_tasks: Cache<Vec<DefaultTask>>,
    new_tasks: Cache<Vec<NewTask>>,
    operators: Cache<Vec<Operator>>,
    total_tasks: Cache<u32>,
    priority_count: Cache<PriorityCount>,
    status_count: Cache<StatusCount>,
    workload: Cache<Vec<AssigneeWorkload>>,
    op_daily_tasks: Cache<Vec<DailyTask>>,
    op_new_tasks: Cache<Vec<NewTask>>,
    op_priority_count: Cache<PriorityCount>,
    op_status_count: Cache<StatusCount>,
    op_completion: Cache<CompletionRate>,
}

impl Caches {
    fn new() -> Self {
        Self {
            daily_tasks: Cache::new(ttl::DAILY_TASKS),
            default_tasks: Cache::new(ttl::DEFAULT_TASKS),
            new_tasks: Cache::new(ttl::NEW_TASKS),
            operators: Cache::new(ttl::OPERATORS),
            total_tasks: Cache::new(ttl::STATUS),
            priority_count: Cache::new(ttl::PRIORITY),
            status_count: Cache::new(ttl::STATUS),
            workload: Cache::new(ttl::WORKLOAD),
            op_daily_tasks: Cache::new(ttl::DAILY_TASKS),
            op_new_tasks: Cache::new(ttl::DAILY_TASKS),
            op_priority_count: Cache::new(ttl::PRIORITY),
            op_status_count: Cache::new(ttl::STATUS),
            op_completion: Cache::new(ttl::COMPLETION),
        }
    }

    fn reset(&self) {
        self.daily_tasks.invalidate();
        self.default_tasks.invalidate();
        self.new_tasks.invalidate();
        self.operators.invalidate();
        self.total_tasks.invalidate();
        self.priority_count.invalidate();
        self.status_count.invalidate();
        self.workload.invalidate();
        self.op_daily_tasks.invalidate();
        self.op_new_tasks.invalidate();
        self.op_priority_count.invalidate();
        self.op_status_count.invalidate();
        self.op_completion.invalidate();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .expect("failed to build HTTP client")
}

#[cfg(target_arch = "wasm32")]
fn build_http() -> reqwest::Client {
    reqwest::Client::new()
}

/// Client for the external backend. Cheap to clone; clones share the HTTP
/// connection pool, session cookies, and caches.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    caches: Rc<Caches>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: build_http(),
            base,
            caches: Rc::new(Caches::new()),
        }
    }

    /// Base URL from `TASKBOARD_API_URL` at build time, localhost otherwise.
    pub fn from_env() -> Self {
        Self::new(option_env!("TASKBOARD_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Drop everything cached for this session. Called on logout.
    pub fn reset_caches(&self) {
        self.caches.reset();
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    // -- auth ---------------------------------------------------------------

    /// `GET /api/auth/check` — who am I. 401 means no live session.
    pub async fn check_auth(&self) -> Result<UserInfo, ApiError> {
        let resp = self.http.get(self.url("/api/auth/check")).send().await?;
        Self::decode_raw(resp).await
    }

    /// `POST /api/auth/login` with the role the user picked on the login
    /// screen; the backend rejects a role mismatch with 403.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<UserInfo, ApiError> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.trim().to_string(),
            role,
        };
        let resp = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&body)
            .send()
            .await?;
        let login: LoginResponse = Self::decode_raw(resp).await?;
        Ok(UserInfo {
            id: login.user.user_id,
            name: login.user.name,
            email: login.user.email,
            role: login.user.role,
        })
    }

    /// `POST /api/auth/logout`. Callers treat this as best-effort.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let resp = self.http.post(self.url("/api/auth/logout")).send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status.as_u16()))
        }
    }

    // -- admin: default tasks ------------------------------------------------

    pub async fn default_tasks(&self, force: bool) -> Result<Vec<DefaultTask>, ApiError> {
        let client = self.clone();
        self.caches
            .default_tasks
            .get_or_fetch(force, move || async move {
                client.get_enveloped("/api/admin/getDefaultTasks").await
            })
            .await
    }

    pub async fn create_default_task(&self, task: CreateDefaultTask) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/api/admin/createDefault"))
            .json(&task)
            .send()
            .await?;
        Self::expect_success(resp).await?;
        self.caches.default_tasks.invalidate();
        Ok(())
    }

    pub async fn update_default_task(
        &self,
        id: &str,
        update: UpdateDefaultTask,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .patch(self.url(&format!("/api/admin/updateDefaultTask/{id}")))
            .json(&update)
            .send()
            .await?;
        Self::expect_success(resp).await?;
        self.caches.default_tasks.invalidate();
        Ok(())
    }

    pub async fn delete_default_task(&self, id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/admin/deleteDefaultTask/{id}")))
            .send()
            .await?;
        Self::expect_success(resp).await?;
        self.caches.default_tasks.invalidate();
        Ok(())
    }

    pub fn invalidate_default_tasks(&self) {
        self.caches.default_tasks.invalidate();
    }

    // -- admin: daily tasks --------------------------------------------------

    pub async fn daily_tasks(&self, force: bool) -> Result<Vec<DailyTask>, ApiError> {
        let client = self.clone();
        self.caches
            .daily_tasks
            .get_or_fetch(force, move || async move {
                let raw: Vec<DailyTaskFromApi> = client
                    .get_enveloped("/api/admin/getTodayDailyTasks")
                    .await?;
                Ok(raw.into_iter().map(DailyTask::from).collect())
            })
            .await
    }

    pub async fn create_daily_task(&self, task: CreateDailyTask) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/api/admin/createDailyTask"))
            .json(&task)
            .send()
            .await?;
        Self::expect_success(resp).await?;
        self.invalidate_daily_tasks();
        Ok(())
    }

    pub async fn update_daily_task(
        &self,
        id: &str,
        update: UpdateDailyTask,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .patch(self.url(&format!("/api/admin/updateDailyTask/{id}")))
            .json(&update)
            .send()
            .await?;
        Self::expect_success(resp).await?;
        self.invalidate_daily_tasks();
        Ok(())
    }

    pub async fn delete_daily_task(&self, id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/admin/deleteDailyTask/{id}")))
            .send()
            .await?;
        Self::expect_success(resp).await?;
        self.invalidate_daily_tasks();
        Ok(())
    }

    pub fn invalidate_daily_tasks(&self) {
        self.caches.daily_tasks.invalidate();
        self.caches.status_count.invalidate();
        self.caches.total_tasks.invalidate();
    }

    // -- admin: new tasks ----------------------------------------------------

    pub async fn new_tasks(&self, force: bool) -> Result<Vec<NewTask>, ApiError> {
        let client = self.clone();
        self.caches
            .new_tasks
            .get_or_fetch(force, move || async move {
                let raw: Vec<NewTaskFromApi> =
                    client.get_enveloped("/api/admin/getNewTask").await?;
                Ok(raw.into_iter().map(NewTask::from).collect())
            })
            .await
    }

    pub async fn create_new_task(&self, task: CreateNewTask) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/api/admin/createNew"))
            .json(&task)
            .send()
            .await?;
        Self::expect_success(resp).await?;
        self.invalidate_new_tasks();
        Ok(())
    }

    pub async fn update_new_task(&self, id: &str, update: UpdateNewTask) -> Result<(), ApiError> {
        let resp = self
            .http
            .patch(self.url(&format!("/api/admin/updateNewTask/{id}")))
            .json(&update)
            .send()
            .await?;
        Self::expect_success(resp).await?;
        self.invalidate_new_tasks();
        Ok(())
    }

    pub async fn delete_new_task(&self, id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/admin/deleteNewTask/{id}")))
            .send()
            .await?;
        Self::expect_success(resp).await?;
        self.invalidate_new_tasks();
        Ok(())
    }

    pub fn invalidate_new_tasks(&self) {
        self.caches.new_tasks.invalidate();
        self.caches.total_tasks.invalidate();
    }

    // -- admin: operators and overview --------------------------------------

    pub async fn operators(&self, force: bool) -> Result<Vec<Operator>, ApiError> {
        let client = self.clone();
        self.caches
            .operators
            .get_or_fetch(force, move || async move {
                client.get_enveloped("/api/admin/getOperators").await
            })
            .await
    }

    pub async fn total_tasks(&self, force: bool) -> Result<u32, ApiError> {
        let client = self.clone();
        self.caches
            .total_tasks
            .get_or_fetch(force, move || async move {
                let total: TotalTasks = client.get_enveloped("/api/admin/getTotalTasks").await?;
                Ok(total.value())
            })
            .await
    }

    pub async fn priority_count(&self, force: bool) -> Result<PriorityCount, ApiError> {
        let client = self.clone();
        self.caches
            .priority_count
            .get_or_fetch(force, move || async move {
                client.get_enveloped("/api/admin/getPriorityCount").await
            })
            .await
    }

    pub async fn status_count(&self, force: bool) -> Result<StatusCount, ApiError> {
        let client = self.clone();
        self.caches
            .status_count
            .get_or_fetch(force, move || async move {
                client.get_enveloped("/api/admin/getDailyStatusCount").await
            })
            .await
    }

    pub async fn assignee_workload(&self, force: bool) -> Result<Vec<AssigneeWorkload>, ApiError> {
        let client = self.clone();
        self.caches
            .workload
            .get_or_fetch(force, move || async move {
                client.get_enveloped("/api/admin/getAssigneeWorkload").await
            })
            .await
    }

    pub fn invalidate_overview(&self) {
        self.caches.total_tasks.invalidate();
        self.caches.priority_count.invalidate();
        self.caches.status_count.invalidate();
        self.caches.workload.invalidate();
    }

    // -- operator mirrors ----------------------------------------------------

    pub async fn operator_daily_tasks(&self, force: bool) -> Result<Vec<DailyTask>, ApiError> {
        let client = self.clone();
        self.caches
            .op_daily_tasks
            .get_or_fetch(force, move || async move {
                let raw: Vec<DailyTaskFromApi> = client
                    .get_enveloped("/api/operator/getdailyTasks")
                    .await?;
                Ok(raw.into_iter().map(DailyTask::from).collect())
            })
            .await
    }

    pub async fn operator_update_daily_status(
        &self,
        id: &str,
        status: Status,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .patch(self.url(&format!("/api/operator/updateDailyTask/{id}")))
            .json(&serde_json::json!({ "status": status }))
            .send()
            .await?;
        Self::expect_success(resp).await?;
        self.invalidate_operator_caches();
        Ok(())
    }

    pub async fn operator_new_tasks(&self, force: bool) -> Result<Vec<NewTask>, ApiError> {
        let client = self.clone();
        self.caches
            .op_new_tasks
            .get_or_fetch(force, move || async move {
                let raw: Vec<NewTaskFromApi> =
                    client.get_enveloped("/api/operator/getNewTasks").await?;
                Ok(raw.into_iter().map(NewTask::from).collect())
            })
            .await
    }

    pub async fn operator_update_new_status(
        &self,
        id: &str,
        status: Status,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .patch(self.url(&format!("/api/operator/updateNewTask/{id}")))
            .json(&serde_json::json!({ "status": status }))
            .send()
            .await?;
        Self::expect_success(resp).await?;
        self.invalidate_operator_caches();
        Ok(())
    }

    pub async fn operator_priority_count(&self, force: bool) -> Result<PriorityCount, ApiError> {
        let client = self.clone();
        self.caches
            .op_priority_count
            .get_or_fetch(force, move || async move {
                client.get_enveloped("/api/operator/getPriorityCount").await
            })
            .await
    }

    pub async fn operator_status_count(&self, force: bool) -> Result<StatusCount, ApiError> {
        let client = self.clone();
        self.caches
            .op_status_count
            .get_or_fetch(force, move || async move {
                client
                    .get_enveloped("/api/operator/getStatusCountDaily")
                    .await
            })
            .await
    }

    pub async fn operator_completion_rate(&self, force: bool) -> Result<CompletionRate, ApiError> {
        let client = self.clone();
        self.caches
            .op_completion
            .get_or_fetch(force, move || async move {
                client.get_enveloped("/api/operator/getCompletionRate").await
            })
            .await
    }

    pub fn invalidate_operator_caches(&self) {
        self.caches.op_daily_tasks.invalidate();
        self.caches.op_new_tasks.invalidate();
        self.caches.op_priority_count.invalidate();
        self.caches.op_status_count.invalidate();
        self.caches.op_completion.invalidate();
    }

    // -- plumbing ------------------------------------------------------------

    async fn get_enveloped<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.http.get(self.url(path)).send().await?;
        Self::decode_envelope(resp).await
    }

    /// Map a non-2xx status to its error. 401 and 403 stay distinct so
    /// callers can tell a dead session from a role mismatch.
    fn status_error(code: u16) -> Option<ApiError> {
        match code {
            200..=299 => None,
            401 => Some(ApiError::Unauthorized),
            403 => Some(ApiError::Forbidden),
            code => Some(ApiError::Status(code)),
        }
    }

    async fn decode_envelope<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        if let Some(err) = Self::status_error(resp.status().as_u16()) {
            return Err(err);
        }
        let envelope: Envelope<T> = resp.json().await?;
        unwrap_envelope(envelope)
    }

    /// Decode an endpoint that answers with a bare JSON body (the auth
    /// endpoints predate the envelope convention).
    async fn decode_raw<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        if let Some(err) = Self::status_error(resp.status().as_u16()) {
            return Err(err);
        }
        Ok(resp.json().await?)
    }

    /// Check a mutation response. Some DELETE handlers answer with an empty
    /// body on success, so an unparseable body on a 2xx is accepted.
    async fn expect_success(resp: reqwest::Response) -> Result<(), ApiError> {
        if let Some(err) = Self::status_error(resp.status().as_u16()) {
            return Err(err);
        }
        let body = resp.text().await?;
        if body.trim().is_empty() {
            return Ok(());
        }
        match serde_json::from_str::<Envelope<serde_json::Value>>(&body) {
            Ok(envelope) if envelope.success => Ok(()),
            Ok(envelope) => {
                let message = envelope
                    .message
                    .unwrap_or_else(|| "The server rejected the request".to_string());
                tracing::warn!(%message, "mutation rejected by backend");
                Err(ApiError::Rejected(message))
            }
            Err(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_data_unwraps() {
        let envelope: Envelope<Vec<DefaultTask>> = serde_json::from_str(
            r#"{"success": true, "data": [{"id": 1, "title": "Stock shelves"}]}"#,
        )
        .unwrap();
        let tasks = unwrap_envelope(envelope).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "1");
        assert_eq!(tasks[0].description_or_default(), "No description provided.");
    }

    #[test]
    fn envelope_success_false_carries_message() {
        let envelope: Envelope<Vec<DefaultTask>> =
            serde_json::from_str(r#"{"success": false, "message": "nope"}"#).unwrap();
        assert_eq!(
            unwrap_envelope(envelope),
            Err(ApiError::Rejected("nope".to_string()))
        );
    }

    #[test]
    fn login_response_maps_user_id_field() {
        let login: LoginResponse = serde_json::from_str(
            r#"{"user": {"userId": "u1", "name": "Priya", "email": "p@x.test", "role": "ADMIN"}}"#,
        )
        .unwrap();
        assert_eq!(login.user.user_id, "u1");
        assert_eq!(login.user.role, Role::Admin);
    }

    #[test]
    fn total_tasks_accepts_both_shapes() {
        let bare: TotalTasks = serde_json::from_str("12").unwrap();
        let wrapped: TotalTasks = serde_json::from_str(r#"{"total": 12}"#).unwrap();
        assert_eq!(bare.value(), 12);
        assert_eq!(wrapped.value(), 12);
    }

    #[test]
    fn status_mapping_keeps_401_and_403_distinct() {
        assert_eq!(ApiClient::status_error(200), None);
        assert_eq!(ApiClient::status_error(204), None);
        assert_eq!(ApiClient::status_error(401), Some(ApiError::Unauthorized));
        assert_eq!(ApiClient::status_error(403), Some(ApiError::Forbidden));
        assert_eq!(ApiClient::status_error(500), Some(ApiError::Status(500)));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/api/auth/check"), "http://localhost:8000/api/auth/check");
    }
}
