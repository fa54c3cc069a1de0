use serde::{Deserialize, Serialize};

use crate::choices::ContactType;

/// Staff user attached to notes, transactions and projects
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// A person or organization known to the CRM
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub id: i64,
    /// First name for individuals, organization name for organizations
    pub first_name: String,
    /// Always blank for organizations
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: String,
    pub contact_type: ContactType,
    pub contact_type_display: Option<String>,
    pub created_at: Option<String>, // RFC 3339 timestamp
    pub updated_at: Option<String>, // RFC 3339 timestamp
    pub notes: Vec<ContactNote>,
}

impl Contact {
    /// Name shown in lists and headings
    pub fn display_name(&self) -> String {
        match self.contact_type {
            ContactType::Organization => self.first_name.trim().to_string(),
            ContactType::Individual => format!("{} {}", self.first_name, self.last_name)
                .trim()
                .to_string(),
        }
    }
}

/// Free-text note logged against a contact
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactNote {
    pub id: i64,
    pub contact: Option<i64>,
    pub note_text: String,
    pub created_by: Option<UserSummary>,
    pub created_at: Option<String>,
}

/// Body for creating or updating a contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub first_name: String,
    pub last_name: String,
    /// Sent as `null` when left blank (the column is unique and nullable)
    pub email: Option<String>,
    pub phone: String,
    pub address: String,
    pub contact_type: ContactType,
}

/// Body for `contacts/{id}/add_note/`; the author is set by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactNotePayload {
    pub note_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contact_tolerates_missing_fields() {
        let contact: Contact = serde_json::from_value(json!({
            "id": 7,
            "first_name": "Helping Hands",
            "contact_type": "ORG"
        }))
        .unwrap();

        assert_eq!(contact.id, 7);
        assert_eq!(contact.last_name, "");
        assert_eq!(contact.email, None);
        assert!(contact.notes.is_empty());
        assert_eq!(contact.display_name(), "Helping Hands");
    }

    #[test]
    fn test_individual_display_name() {
        let contact = Contact {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(contact.display_name(), "Ada Lovelace");

        let first_only = Contact {
            first_name: "Ada".to_string(),
            ..Default::default()
        };
        assert_eq!(first_only.display_name(), "Ada");
    }
}
