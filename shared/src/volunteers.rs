use serde::{Deserialize, Serialize};

use crate::choices::{ContactType, VolunteerStatus};
use crate::contacts::ContactPayload;

/// A volunteer, keyed by the contact it extends.
///
/// The server flattens a few contact fields onto the record for display;
/// phone, address and type are only present on newer API versions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Volunteer {
    /// Primary key, shared with the underlying contact
    pub contact: i64,
    pub contact_first_name: String,
    pub contact_last_name: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_address: Option<String>,
    pub contact_contact_type: Option<ContactType>,
    /// Comma-separated list of skills
    pub skills: String,
    pub availability: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub status: VolunteerStatus,
    pub status_display: Option<String>,
    pub joined_date: Option<String>, // ISO 8601 date format (YYYY-MM-DD)
}

impl Volunteer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.contact_first_name, self.contact_last_name)
            .trim()
            .to_string()
    }
}

/// Compact volunteer reference nested in tasks, assignments and hours logs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VolunteerSummary {
    pub pk: i64,
    pub full_name: String,
    pub contact_email: Option<String>,
}

/// Body for creating or updating a volunteer.
///
/// The contact is created (or updated) together with the volunteer, so its
/// fields travel as a nested `contact_data` object rather than a reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerPayload {
    pub contact_data: ContactPayload,
    pub skills: String,
    pub availability: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub status: VolunteerStatus,
}
