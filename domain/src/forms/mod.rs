//! Editable form state for every resource.
//!
//! Each form keeps user input as typed (numbers and dates stay strings) and
//! knows three things: how to start from an existing record, how to validate
//! itself into an [`ErrorMap`], and how to build the payload the API accepts.
//! Error keys are the payload's field names; nested fields use dotted keys.

pub mod campaign;
pub mod contact;
pub mod donation;
pub mod inventory;
pub mod project;
pub mod volunteer;

pub use campaign::CampaignForm;
pub use contact::{ContactForm, ContactNoteForm};
pub use donation::{DonationDetails, DonationForm, InKindFields, MonetaryFields};
pub use inventory::{InventoryItemForm, StockAdjustmentForm};
pub use project::{HoursLogForm, ProjectForm, TaskForm, VolunteerAssignmentForm};
pub use volunteer::VolunteerForm;

use crate::error_map::ErrorMap;
use crate::input::{self, InputError};
use crate::repository::{Resource, WritableSubresource};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Form state that can be checked and turned into a request body
pub trait ResourceForm: Clone {
    type Payload;

    /// Every client-side rule, all at once; an empty map means submittable
    fn validate(&self) -> ErrorMap;

    /// Build the request body.
    ///
    /// Never fails: input that cannot be parsed is sent as `null`, which
    /// [`ResourceForm::validate`] has already reported.
    fn to_payload(&self) -> Self::Payload;
}

/// A form that creates (or updates) records of a top-level collection
pub trait CollectionForm: ResourceForm {
    type Resource: Resource<Payload = Self::Payload>;
}

/// A form that can be pre-filled from an existing record for editing
pub trait RecordForm: CollectionForm {
    fn from_record(record: &<Self::Resource as Resource>::Record) -> Self;
}

/// A form that adds a child under a parent record
pub trait ChildForm: ResourceForm {
    type Subresource: WritableSubresource<Payload = Self::Payload>;
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn require_text(errors: &mut ErrorMap, field: &str, value: &str, message: &str) {
    if is_blank(value) {
        errors.insert(field, message);
    }
}

/// Optional email: only checked when something was typed
fn check_email(errors: &mut ErrorMap, field: &str, value: &str) {
    if !is_blank(value) && !input::is_valid_email(value) {
        errors.insert(field, "Email is invalid.");
    }
}

/// Returns the parsed date when present and valid
fn check_date(errors: &mut ErrorMap, field: &str, value: &str, required: Option<&str>) -> Option<NaiveDate> {
    match input::parse_date(value) {
        Ok(date) => Some(date),
        Err(InputError::Empty) => {
            if let Some(message) = required {
                errors.insert(field, message);
            }
            None
        }
        Err(_) => {
            errors.insert(field, "Enter a valid date (YYYY-MM-DD).");
            None
        }
    }
}

fn check_date_order(errors: &mut ErrorMap, end_field: &str, start: Option<NaiveDate>, end: Option<NaiveDate>) {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            errors.insert(end_field, "End date cannot be before start date.");
        }
    }
}

/// Reference to another record, typed or chosen from a list
fn check_reference(errors: &mut ErrorMap, field: &str, value: &str, required: Option<&str>) {
    if is_blank(value) {
        if let Some(message) = required {
            errors.insert(field, message);
        }
    } else if input::parse_id(value).is_none() {
        errors.insert(field, "Select a valid record.");
    }
}

/// Optional currency amount that must not be negative once rounded
fn check_non_negative(errors: &mut ErrorMap, field: &str, value: &str, label: &str) {
    match input::parse_currency(value) {
        Ok(amount) if amount < Decimal::ZERO => errors.insert(field, format!("{} cannot be negative.", label)),
        Ok(_) | Err(InputError::Empty) => {}
        Err(_) => errors.insert(field, format!("{} must be a number.", label)),
    }
}
