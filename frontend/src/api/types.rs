use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
}

/// Profile as stored server-side. Counters travel as strings on the wire;
/// they are display-only here so they stay strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "src")]
    pub avatar: String,
    #[serde(default, rename = "isOnline")]
    pub is_online: bool,
    #[serde(default)]
    pub color: String,
    #[serde(default, rename = "checksCount")]
    pub checks_count: String,
    #[serde(default, rename = "processfinished")]
    pub processes_finished: String,
    #[serde(default)]
    pub plan: Plan,
}

impl UserResponse {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.name, self.surname);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    #[serde(default, rename = "type")]
    pub plan_type: String,
    #[serde(default, rename = "processProgramationAvalaible")]
    pub processes_available: String,
    #[serde(default, rename = "processChekingAvalaible")]
    pub checks_available: String,
    #[serde(default, rename = "planExpiration")]
    pub expiration: String,
    #[serde(default, rename = "planRenewed")]
    pub renewed: String,
    #[serde(default, rename = "planStarted")]
    pub started: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    Active,
    Inactive,
}

impl ProcessStatus {
    pub fn is_active(self) -> bool {
        matches!(self, ProcessStatus::Active)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProcessStatus::Active => "active",
            ProcessStatus::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configured appointment-search job. The upper-case wire names are the
/// bot API's contract; update/delete/stop routes are keyed by `USER_EMAIL`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessData {
    #[serde(default)]
    pub user_id: String,
    #[serde(rename = "USER_EMAIL")]
    pub email: String,
    #[serde(rename = "USER_PASSWORD")]
    pub password: String,
    #[serde(default)]
    pub process_id: String,
    #[serde(rename = "allowed_location_to_save_appointment")]
    pub allowed_locations: Vec<String>,
    #[serde(rename = "allowed_months_to_save_appointment")]
    pub allowed_months: Vec<String>,
    pub stop_month: String,
    #[serde(default)]
    pub blocked_days: Vec<String>,
    pub status: ProcessStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,
}

impl ProcessData {
    /// Present only while the search job is actually running.
    pub fn is_running(&self) -> bool {
        self.pid.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogsResponse {
    #[serde(default)]
    pub logs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}
