use chrono_tz::Tz;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::status::{evaluate, AttendanceStatus, Direction};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub employee_id: String,
    pub name: String,
    #[serde(default)]
    pub addres: String,
    pub departement: String,
    #[serde(default)]
    pub max_clock_in_time: Option<String>,
    #[serde(default)]
    pub max_clock_out_time: Option<String>,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.departement.trim().eq_ignore_ascii_case("admin")
    }

    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect();
        if initials.is_empty() {
            "U".into()
        } else {
            initials.to_uppercase()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Departement {
    pub id: i64,
    pub departement_name: String,
    pub max_clock_in_time: String,
    pub max_clock_out_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartementPayload {
    pub departement_name: String,
    pub max_clock_in_time: String,
    pub max_clock_out_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, deserialize_with = "id_as_string")]
    pub departement_id: String,
    #[serde(default)]
    pub departement_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub employee_id: String,
    pub name: String,
    pub address: String,
    pub departement_id: i64,
}

/// Statically typed contract of an add/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest<C, U = C, I = String> {
    Add(C),
    Edit { id: I, payload: U },
}

impl<C, U, I> SaveRequest<C, U, I> {
    pub fn is_edit(&self) -> bool {
        matches!(self, SaveRequest::Edit { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub attendance_id: String,
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub departement_name: String,
    pub date_attendance: String,
    #[serde(default)]
    pub clock_in: Option<String>,
    #[serde(default)]
    pub clock_out: Option<String>,
    #[serde(default)]
    pub max_clock_in_time: String,
    #[serde(default)]
    pub max_clock_out_time: String,
    #[serde(default)]
    pub status_clock_in: Option<String>,
    #[serde(default)]
    pub status_clock_out: Option<String>,
    #[serde(default)]
    pub is_late: bool,
    #[serde(default)]
    pub is_leave_early: bool,
}

impl AttendanceRecord {
    pub fn clock_in_status(&self, tz: Tz) -> AttendanceStatus {
        evaluate(
            self.clock_in.as_deref(),
            &self.max_clock_in_time,
            !self.is_late,
            Direction::In,
            tz,
        )
    }

    pub fn clock_out_status(&self, tz: Tz) -> AttendanceStatus {
        evaluate(
            self.clock_out.as_deref(),
            &self.max_clock_out_time,
            !self.is_leave_early,
            Direction::Out,
            tz,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub departement_id: Option<String>,
    pub employee_id: Option<String>,
}

impl LogQuery {
    pub fn for_employee(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: Some(employee_id.into()),
            ..Self::default()
        }
    }

    pub fn with_range(mut self, start: Option<String>, end: Option<String>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("start_date", self.start_date.as_deref()),
            ("end_date", self.end_date.as_deref()),
            ("departement_id", self.departement_id.as_deref()),
            ("employee_id", self.employee_id.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "NOT_FOUND")
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    pub fn is_not_found(&self) -> bool {
        self.code == "NOT_FOUND"
    }

    /// Builds an error from a non-success response body, reading the first of
    /// `error`, `message` or `detail` that carries a string.
    pub fn from_body(status: u16, body: Option<Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(|value| {
                ["error", "message", "detail"]
                    .iter()
                    .find_map(|key| value.get(*key).and_then(Value::as_str))
            })
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        let mut error = match status {
            401 => Self::unauthorized(message),
            404 => Self::not_found(message),
            400 | 422 => Self::validation(message),
            _ => Self::unknown(message),
        };
        error.details = body;
        error
    }
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
