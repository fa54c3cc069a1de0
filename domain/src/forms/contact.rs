use super::{check_email, is_blank, require_text, ChildForm, CollectionForm, RecordForm, ResourceForm};
use crate::error_map::ErrorMap;
use crate::resources::{ContactNotes, Contacts};
use shared::{Contact, ContactNotePayload, ContactPayload, ContactType};

pub mod fields {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const ADDRESS: &str = "address";
    pub const CONTACT_TYPE: &str = "contact_type";
    pub const NOTE_TEXT: &str = "note_text";
}

/// A person or an organization. Organizations keep their name in `first_name`
/// and never have a last name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub contact_type: ContactType,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switching to an organization discards the last name
    pub fn set_contact_type(&mut self, contact_type: ContactType) {
        self.contact_type = contact_type;
        if contact_type == ContactType::Organization {
            self.last_name.clear();
        }
    }

    /// Label of the first name input, which depends on the contact type
    pub fn first_name_label(&self) -> &'static str {
        match self.contact_type {
            ContactType::Individual => "First Name",
            ContactType::Organization => "Organization Name",
        }
    }

    pub fn shows_last_name(&self) -> bool {
        self.contact_type == ContactType::Individual
    }
}

impl ResourceForm for ContactForm {
    type Payload = ContactPayload;

    fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();
        let message = match self.contact_type {
            ContactType::Individual => "First name is required.",
            ContactType::Organization => "Organization name is required.",
        };
        require_text(&mut errors, fields::FIRST_NAME, &self.first_name, message);
        check_email(&mut errors, fields::EMAIL, &self.email);
        errors
    }

    fn to_payload(&self) -> ContactPayload {
        let email = self.email.trim();
        ContactPayload {
            first_name: self.first_name.trim().to_string(),
            last_name: match self.contact_type {
                ContactType::Individual => self.last_name.trim().to_string(),
                ContactType::Organization => String::new(),
            },
            email: (!email.is_empty()).then(|| email.to_string()),
            phone: self.phone.trim().to_string(),
            address: self.address.clone(),
            contact_type: self.contact_type,
        }
    }
}

impl CollectionForm for ContactForm {
    type Resource = Contacts;
}

impl RecordForm for ContactForm {
    fn from_record(record: &Contact) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone().unwrap_or_default(),
            phone: record.phone.clone(),
            address: record.address.clone(),
            contact_type: record.contact_type,
        }
    }
}

/// A free-text note added to a contact
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactNoteForm {
    pub note_text: String,
}

impl ResourceForm for ContactNoteForm {
    type Payload = ContactNotePayload;

    fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();
        if is_blank(&self.note_text) {
            errors.insert(fields::NOTE_TEXT, "Note text cannot be empty.");
        }
        errors
    }

    fn to_payload(&self) -> ContactNotePayload {
        ContactNotePayload {
            note_text: self.note_text.trim().to_string(),
        }
    }
}

impl ChildForm for ContactNoteForm {
    type Subresource = ContactNotes;
}
