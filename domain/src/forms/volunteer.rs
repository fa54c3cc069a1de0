use super::{is_blank, require_text, CollectionForm, ContactForm, RecordForm, ResourceForm};
use crate::error_map::ErrorMap;
use crate::input;
use crate::resources::Volunteers;
use shared::{Volunteer, VolunteerPayload, VolunteerStatus};

pub mod fields {
    pub const CONTACT_FIRST_NAME: &str = "contact_data.first_name";
    pub const CONTACT_LAST_NAME: &str = "contact_data.last_name";
    pub const CONTACT_EMAIL: &str = "contact_data.email";
    pub const CONTACT_PHONE: &str = "contact_data.phone";
    pub const CONTACT_ADDRESS: &str = "contact_data.address";
    pub const SKILLS: &str = "skills";
    pub const AVAILABILITY: &str = "availability";
    pub const EMERGENCY_CONTACT_NAME: &str = "emergency_contact_name";
    pub const EMERGENCY_CONTACT_PHONE: &str = "emergency_contact_phone";
    pub const STATUS: &str = "status";
}

/// A volunteer profile together with the contact it is created for.
///
/// The server creates or updates the contact from `contact_data` in the same
/// request, so the contact part follows [`ContactForm`]'s payload rules.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VolunteerForm {
    pub contact: ContactForm,
    pub skills: String,
    pub availability: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub status: VolunteerStatus,
}

impl VolunteerForm {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResourceForm for VolunteerForm {
    type Payload = VolunteerPayload;

    fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();
        require_text(
            &mut errors,
            fields::CONTACT_FIRST_NAME,
            &self.contact.first_name,
            "Contact's first name is required.",
        );
        if is_blank(&self.contact.email) {
            errors.insert(fields::CONTACT_EMAIL, "Contact's email is required.");
        } else if !input::is_valid_email(&self.contact.email) {
            errors.insert(fields::CONTACT_EMAIL, "Email is invalid.");
        }
        errors
    }

    fn to_payload(&self) -> VolunteerPayload {
        VolunteerPayload {
            contact_data: self.contact.to_payload(),
            skills: self.skills.clone(),
            availability: self.availability.clone(),
            emergency_contact_name: self.emergency_contact_name.trim().to_string(),
            emergency_contact_phone: self.emergency_contact_phone.trim().to_string(),
            status: self.status,
        }
    }
}

impl CollectionForm for VolunteerForm {
    type Resource = Volunteers;
}

impl RecordForm for VolunteerForm {
    fn from_record(record: &Volunteer) -> Self {
        Self {
            contact: ContactForm {
                first_name: record.contact_first_name.clone(),
                last_name: record.contact_last_name.clone(),
                email: record.contact_email.clone().unwrap_or_default(),
                phone: record.contact_phone.clone().unwrap_or_default(),
                address: record.contact_address.clone().unwrap_or_default(),
                contact_type: record.contact_contact_type.unwrap_or_default(),
            },
            skills: record.skills.clone(),
            availability: record.availability.clone(),
            emergency_contact_name: record.emergency_contact_name.clone(),
            emergency_contact_phone: record.emergency_contact_phone.clone(),
            status: record.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ContactType;

    #[test]
    fn test_contact_name_and_email_required() {
        let errors = VolunteerForm::new().validate();

        assert_eq!(errors.get(fields::CONTACT_FIRST_NAME), Some("Contact's first name is required."));
        assert_eq!(errors.get(fields::CONTACT_EMAIL), Some("Contact's email is required."));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_payload_nests_contact_data() {
        let mut form = VolunteerForm::new();
        form.contact.first_name = "Lin".to_string();
        form.contact.last_name = "Wei".to_string();
        form.contact.email = "lin@example.org".to_string();
        form.skills = "First aid, driving".to_string();
        form.status = VolunteerStatus::Active;
        assert!(form.validate().is_empty());

        let value = serde_json::to_value(form.to_payload()).unwrap();
        assert_eq!(value["contact_data"]["email"], "lin@example.org");
        assert_eq!(value["contact_data"]["contact_type"], "IND");
        assert_eq!(value["status"], "ACT");
        assert!(value.get("contact_first_name").is_none());
    }

    #[test]
    fn test_from_record_fills_contact_defaults() {
        let record = Volunteer {
            contact: 3,
            contact_first_name: "Sam".to_string(),
            contact_email: Some("sam@example.org".to_string()),
            contact_contact_type: None,
            status: VolunteerStatus::Inactive,
            ..Volunteer::default()
        };
        let form = VolunteerForm::from_record(&record);

        assert_eq!(form.contact.contact_type, ContactType::Individual);
        assert_eq!(form.contact.phone, "");
        assert_eq!(form.status, VolunteerStatus::Inactive);
        assert!(form.validate().is_empty());
    }
}
