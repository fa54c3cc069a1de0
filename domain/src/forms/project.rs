use super::{
    check_date, check_date_order, check_non_negative, check_reference, require_text, ChildForm, CollectionForm,
    RecordForm, ResourceForm,
};
use crate::error_map::ErrorMap;
use crate::input;
use crate::resources::{ProjectAssignments, ProjectHoursLogs, ProjectTasks, Projects};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::{
    Project, ProjectPayload, ProjectStatus, ProjectTaskPayload, TaskPriority, TaskStatus,
    VolunteerAssignmentPayload, VolunteerHoursLogPayload,
};

pub mod fields {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const START_DATE: &str = "start_date";
    pub const END_DATE: &str = "end_date";
    pub const STATUS: &str = "status";
    pub const BUDGET: &str = "budget";
    pub const LOCATION: &str = "location";
    pub const TITLE: &str = "title";
    pub const DUE_DATE: &str = "due_date";
    pub const ASSIGNED_TO_VOLUNTEER_ID: &str = "assigned_to_volunteer_id";
    pub const PRIORITY: &str = "priority";
    pub const VOLUNTEER_ID: &str = "volunteer_id";
    pub const ROLE: &str = "role";
    pub const DATE: &str = "date";
    pub const HOURS_WORKED: &str = "hours_worked";
}

/// Upper bound (exclusive) for one hours entry; the column holds five digits
const MAX_HOURS: i64 = 1000;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub status: ProjectStatus,
    pub budget: String,
    pub location: String,
}

impl ResourceForm for ProjectForm {
    type Payload = ProjectPayload;

    fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();
        require_text(&mut errors, fields::NAME, &self.name, "Project name is required.");
        check_non_negative(&mut errors, fields::BUDGET, &self.budget, "Budget");
        let start = check_date(&mut errors, fields::START_DATE, &self.start_date, None);
        let end = check_date(&mut errors, fields::END_DATE, &self.end_date, None);
        check_date_order(&mut errors, fields::END_DATE, start, end);
        errors
    }

    fn to_payload(&self) -> ProjectPayload {
        ProjectPayload {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            start_date: input::normalize_date(&self.start_date),
            end_date: input::normalize_date(&self.end_date),
            status: self.status,
            budget: input::normalize_currency(&self.budget),
            location: self.location.trim().to_string(),
        }
    }
}

impl CollectionForm for ProjectForm {
    type Resource = Projects;
}

impl RecordForm for ProjectForm {
    fn from_record(record: &Project) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            start_date: record.start_date.clone().unwrap_or_default(),
            end_date: record.end_date.clone().unwrap_or_default(),
            status: record.status,
            budget: record.budget.map(input::currency_string).unwrap_or_default(),
            location: record.location.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub assigned_to_volunteer_id: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
}

impl ResourceForm for TaskForm {
    type Payload = ProjectTaskPayload;

    fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();
        require_text(&mut errors, fields::TITLE, &self.title, "Task title is required.");
        check_date(&mut errors, fields::DUE_DATE, &self.due_date, None);
        check_reference(&mut errors, fields::ASSIGNED_TO_VOLUNTEER_ID, &self.assigned_to_volunteer_id, None);
        errors
    }

    fn to_payload(&self) -> ProjectTaskPayload {
        ProjectTaskPayload {
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            due_date: input::normalize_date(&self.due_date),
            assigned_to_volunteer_id: input::parse_id(&self.assigned_to_volunteer_id),
            status: self.status,
            priority: self.priority,
        }
    }
}

impl ChildForm for TaskForm {
    type Subresource = ProjectTasks;
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VolunteerAssignmentForm {
    pub volunteer_id: String,
    pub role: String,
}

impl ResourceForm for VolunteerAssignmentForm {
    type Payload = VolunteerAssignmentPayload;

    fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();
        check_reference(&mut errors, fields::VOLUNTEER_ID, &self.volunteer_id, Some("Volunteer is required."));
        errors
    }

    fn to_payload(&self) -> VolunteerAssignmentPayload {
        VolunteerAssignmentPayload {
            volunteer_id: input::parse_id(&self.volunteer_id),
            role: self.role.trim().to_string(),
        }
    }
}

impl ChildForm for VolunteerAssignmentForm {
    type Subresource = ProjectAssignments;
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoursLogForm {
    pub volunteer_id: String,
    pub date: String,
    pub hours_worked: String,
    pub description: String,
}

impl HoursLogForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            volunteer_id: String::new(),
            date: input::format_date(today),
            hours_worked: String::new(),
            description: String::new(),
        }
    }
}

impl ResourceForm for HoursLogForm {
    type Payload = VolunteerHoursLogPayload;

    fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();
        check_reference(&mut errors, fields::VOLUNTEER_ID, &self.volunteer_id, Some("Volunteer is required."));
        check_date(&mut errors, fields::DATE, &self.date, Some("Date is required."));
        match input::parse_currency(&self.hours_worked) {
            Ok(hours) if hours <= Decimal::ZERO => {
                errors.insert(fields::HOURS_WORKED, "Hours worked must be greater than zero.")
            }
            Ok(hours) if hours >= Decimal::from(MAX_HOURS) => {
                errors.insert(fields::HOURS_WORKED, "Hours worked must be less than 1000.")
            }
            Ok(_) => {}
            Err(_) => errors.insert(fields::HOURS_WORKED, "Hours worked must be greater than zero."),
        }
        errors
    }

    fn to_payload(&self) -> VolunteerHoursLogPayload {
        VolunteerHoursLogPayload {
            volunteer_id: input::parse_id(&self.volunteer_id),
            date: input::normalize_date(&self.date),
            hours_worked: input::normalize_currency(&self.hours_worked),
            description: self.description.clone(),
        }
    }
}

impl ChildForm for HoursLogForm {
    type Subresource = ProjectHoursLogs;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project(start: &str, end: &str) -> ProjectForm {
        ProjectForm {
            name: "Clean Water".to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            ..ProjectForm::default()
        }
    }

    #[test]
    fn test_end_before_start_rejected() {
        let errors = project("2024-05-10", "2024-05-01").validate();
        assert_eq!(errors.get(fields::END_DATE), Some("End date cannot be before start date."));
        assert_eq!(errors.len(), 1);

        assert!(project("2024-05-01", "2024-05-01").validate().is_empty());
        assert!(project("", "2024-05-01").validate().is_empty());
    }

    #[test]
    fn test_end_date_order_depends_on_direction() {
        let errors = project("2024-06-01", "2024-05-01").validate();
        assert_eq!(errors.get(fields::END_DATE), Some("End date cannot be before start date."));

        assert!(project("2024-05-01", "2024-06-01").validate().is_empty());
    }

    #[test]
    fn test_budget_optional_but_non_negative() {
        let mut form = project("", "");
        assert_eq!(form.to_payload().budget, None);

        form.budget = "-10".to_string();
        assert_eq!(form.validate().get(fields::BUDGET), Some("Budget cannot be negative."));

        form.budget = "15000".to_string();
        assert!(form.validate().is_empty());
        let value = serde_json::to_value(form.to_payload()).unwrap();
        assert_eq!(value["budget"], json!("15000.00"));
        assert_eq!(value["start_date"], json!(null));
        assert_eq!(value["status"], json!("PLA"));
    }

    #[test]
    fn test_invalid_date_reported_on_its_field() {
        let errors = project("next week", "").validate();
        assert_eq!(errors.get(fields::START_DATE), Some("Enter a valid date (YYYY-MM-DD)."));
    }

    #[test]
    fn test_task_title_required() {
        let mut form = TaskForm::default();
        assert_eq!(form.validate().get(fields::TITLE), Some("Task title is required."));

        form.title = "Order pipes".to_string();
        form.assigned_to_volunteer_id = "3".to_string();
        assert!(form.validate().is_empty());

        let value = serde_json::to_value(form.to_payload()).unwrap();
        assert_eq!(value["assigned_to_volunteer_id"], json!(3));
        assert_eq!(value["status"], json!("TD"));
        assert_eq!(value["priority"], json!("M"));
    }

    #[test]
    fn test_assignment_requires_volunteer() {
        let form = VolunteerAssignmentForm::default();
        assert_eq!(form.validate().get(fields::VOLUNTEER_ID), Some("Volunteer is required."));
    }

    #[test]
    fn test_hours_must_be_in_range() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut form = HoursLogForm::new(today);
        form.volunteer_id = "8".to_string();

        for (hours, expected) in [
            ("", Some("Hours worked must be greater than zero.")),
            ("0", Some("Hours worked must be greater than zero.")),
            ("1000", Some("Hours worked must be less than 1000.")),
            ("999.999", Some("Hours worked must be less than 1000.")),
            ("0.004", Some("Hours worked must be greater than zero.")),
            ("999.99", None),
            ("7.5", None),
        ] {
            form.hours_worked = hours.to_string();
            assert_eq!(form.validate().get(fields::HOURS_WORKED), expected, "hours {:?}", hours);
        }

        let payload = form.to_payload();
        assert_eq!(payload.hours_worked.as_deref(), Some("7.50"));
        assert_eq!(payload.date.as_deref(), Some("2024-06-01"));
    }
}
