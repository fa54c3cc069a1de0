//! Choice fields exchanged with the CRM API.
//!
//! The server stores every choice as a short code (`"IND"`, `"MON"`, ...) and
//! returns a separate `*_display` label. These enums serialize as the code and
//! know their own label so forms can render selects without a round trip.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($code:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $code)] $variant ),+
        }

        impl $name {
            /// Every choice in the order the server lists them
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Short code stored by the server
            pub fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }

            /// Human-readable label
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Look up a choice by its server code (as posted back by a `<select>`)
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choice_enum! {
    /// Whether a contact is a person or an organization
    #[derive(Default)]
    pub enum ContactType {
        #[default]
        Individual => ("IND", "Individual"),
        Organization => ("ORG", "Organization"),
    }
}

choice_enum! {
    #[derive(Default)]
    pub enum VolunteerStatus {
        Active => ("ACT", "Active"),
        Inactive => ("INA", "Inactive"),
        #[default]
        PendingApproval => ("PEN", "Pending Approval"),
    }
}

choice_enum! {
    /// Monetary gifts carry an amount, in-kind gifts carry item details
    #[derive(Default)]
    pub enum DonationType {
        #[default]
        Monetary => ("MON", "Monetary"),
        InKind => ("INK", "In-Kind"),
    }
}

choice_enum! {
    pub enum PaymentMethod {
        Cash => ("CSH", "Cash"),
        Card => ("CRD", "Credit/Debit Card"),
        BankTransfer => ("BNK", "Bank Transfer"),
        Check => ("CHK", "Check"),
        Online => ("ONL", "Online Platform"),
        Other => ("OTH", "Other"),
    }
}

choice_enum! {
    /// Condition of a donated item
    #[derive(Default)]
    pub enum ItemCondition {
        New => ("NEW", "New"),
        #[default]
        Good => ("GOD", "Good"),
        Fair => ("FAR", "Fair"),
        Poor => ("POR", "Poor"),
    }
}

choice_enum! {
    /// Direction of a stock movement
    #[derive(Default)]
    pub enum TransactionType {
        In => ("IN", "Stock In (Receive)"),
        Out => ("OUT", "Stock Out (Issue/Use)"),
        #[default]
        Adjustment => ("ADJ", "Adjustment (Correction)"),
    }
}

choice_enum! {
    #[derive(Default)]
    pub enum ProjectStatus {
        #[default]
        Planning => ("PLA", "Planning"),
        InProgress => ("PRO", "In Progress"),
        Completed => ("COM", "Completed"),
        OnHold => ("HLD", "On Hold"),
        Cancelled => ("CAN", "Cancelled"),
    }
}

choice_enum! {
    #[derive(Default)]
    pub enum TaskStatus {
        #[default]
        Todo => ("TD", "To Do"),
        InProgress => ("PRO", "In Progress"),
        Done => ("DN", "Done"),
        Blocked => ("BLK", "Blocked"),
    }
}

choice_enum! {
    #[derive(Default)]
    pub enum TaskPriority {
        Low => ("L", "Low"),
        #[default]
        Medium => ("M", "Medium"),
        High => ("H", "High"),
    }
}

choice_enum! {
    #[derive(Default)]
    pub enum CampaignStatus {
        #[default]
        Planning => ("PLA", "Planning"),
        Active => ("ACT", "Active"),
        Completed => ("COM", "Completed"),
        Cancelled => ("CAN", "Cancelled"),
        OnHold => ("HLD", "On Hold"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_serialize_as_server_codes() {
        assert_eq!(serde_json::to_string(&ContactType::Organization).unwrap(), "\"ORG\"");
        assert_eq!(serde_json::to_string(&DonationType::InKind).unwrap(), "\"INK\"");
        assert_eq!(serde_json::to_string(&TransactionType::Adjustment).unwrap(), "\"ADJ\"");

        let status: ProjectStatus = serde_json::from_str("\"HLD\"").unwrap();
        assert_eq!(status, ProjectStatus::OnHold);
    }

    #[test]
    fn test_from_code_and_labels() {
        assert_eq!(PaymentMethod::from_code("CHK"), Some(PaymentMethod::Check));
        assert_eq!(PaymentMethod::from_code("chk"), None);
        assert_eq!(TaskStatus::from_code("DN").map(TaskStatus::label), Some("Done"));
        assert_eq!(VolunteerStatus::PendingApproval.to_string(), "Pending Approval");
    }

    #[test]
    fn test_defaults_match_new_form_defaults() {
        assert_eq!(ContactType::default(), ContactType::Individual);
        assert_eq!(DonationType::default(), DonationType::Monetary);
        assert_eq!(ItemCondition::default(), ItemCondition::Good);
        assert_eq!(VolunteerStatus::default(), VolunteerStatus::PendingApproval);
        assert_eq!(CampaignStatus::default(), CampaignStatus::Planning);
        assert_eq!(CampaignStatus::ALL.len(), 5);
    }
}
