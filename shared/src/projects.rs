use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::choices::{ProjectStatus, TaskPriority, TaskStatus};
use crate::contacts::UserSummary;
use crate::volunteers::VolunteerSummary;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: Option<String>, // ISO 8601 date format (YYYY-MM-DD)
    pub end_date: Option<String>,
    pub status: ProjectStatus,
    pub status_display: Option<String>,
    pub budget: Option<Decimal>,
    pub location: String,
    pub created_by: Option<UserSummary>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Body for creating or updating a project; `created_by` is set by the server
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPayload {
    pub name: String,
    pub description: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: ProjectStatus,
    pub budget: Option<String>,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectTask {
    pub id: i64,
    pub project: Option<i64>,
    pub project_name: Option<String>,
    pub title: String,
    pub description: String,
    pub due_date: Option<String>,
    pub assigned_to_volunteer: Option<VolunteerSummary>,
    pub status: TaskStatus,
    pub status_display: Option<String>,
    pub priority: TaskPriority,
    pub priority_display: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Body for `projects/{id}/tasks/`; the project comes from the URL
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectTaskPayload {
    pub title: String,
    pub description: String,
    pub due_date: Option<String>,
    pub assigned_to_volunteer_id: Option<i64>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VolunteerAssignment {
    pub id: i64,
    pub project: Option<i64>,
    pub project_name: Option<String>,
    pub volunteer: Option<VolunteerSummary>,
    pub role: String,
    pub date_assigned: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolunteerAssignmentPayload {
    pub volunteer_id: Option<i64>,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VolunteerHoursLog {
    pub id: i64,
    pub volunteer: Option<VolunteerSummary>,
    pub project: Option<i64>,
    pub project_name: Option<String>,
    pub date: Option<String>,
    pub hours_worked: Decimal,
    pub description: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolunteerHoursLogPayload {
    pub volunteer_id: Option<i64>,
    pub date: Option<String>,
    /// Two fraction digits, e.g. `"3.50"`
    pub hours_worked: Option<String>,
    pub description: String,
}
