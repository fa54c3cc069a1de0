use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::choices::{DonationType, ItemCondition, PaymentMethod};
use crate::contacts::Contact;

/// Campaign reference nested in a donation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignSummary {
    pub id: i64,
    pub name: String,
}

/// A recorded gift, monetary or in-kind
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Donation {
    pub id: i64,
    pub donor_contact: Option<Contact>,
    pub campaign: Option<CampaignSummary>,
    pub donation_date: Option<String>, // ISO 8601 date format (YYYY-MM-DD)
    /// Set for monetary donations only
    pub amount: Option<Decimal>,
    pub donation_type: DonationType,
    pub donation_type_display: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub payment_method_display: Option<String>,
    pub notes: String,
    pub is_anonymous: bool,
    /// Set for in-kind donations only
    pub in_kind_details: Option<InKindDetails>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Description of donated goods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InKindDetails {
    pub item_name: String,
    pub description: String,
    pub estimated_value: Option<Decimal>,
    pub quantity: u32,
    pub condition: ItemCondition,
    pub condition_display: Option<String>,
}

impl Default for InKindDetails {
    fn default() -> Self {
        Self {
            item_name: String::new(),
            description: String::new(),
            estimated_value: None,
            quantity: 1,
            condition: ItemCondition::default(),
            condition_display: None,
        }
    }
}

/// Body for creating or updating a donation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonationPayload {
    pub donor_contact_id: Option<i64>,
    pub campaign_id: Option<i64>,
    pub donation_date: Option<String>,
    pub donation_type: DonationType,
    pub notes: String,
    pub is_anonymous: bool,
    #[serde(flatten)]
    pub details: DonationDetailsPayload,
}

/// The per-type part of a donation body.
///
/// Monetary bodies never carry `in_kind_details`; in-kind bodies always send
/// `amount: null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DonationDetailsPayload {
    Monetary {
        /// Two fraction digits, e.g. `"25.00"`
        amount: Option<String>,
        payment_method: Option<PaymentMethod>,
    },
    InKind {
        amount: Option<String>,
        in_kind_details: InKindDetailsPayload,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InKindDetailsPayload {
    pub item_name: String,
    pub description: String,
    pub estimated_value: Option<String>,
    pub quantity: Option<u32>,
    pub condition: ItemCondition,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decimal_fields_accept_strings_and_numbers() {
        let from_string: Donation = serde_json::from_value(json!({
            "id": 1,
            "donation_type": "MON",
            "amount": "300.00"
        }))
        .unwrap();
        let from_number: Donation = serde_json::from_value(json!({
            "id": 2,
            "donation_type": "MON",
            "amount": 300
        }))
        .unwrap();

        assert_eq!(from_string.amount, from_number.amount);
        assert_eq!(from_string.amount, Some(Decimal::new(300, 0)));
    }

    #[test]
    fn test_in_kind_donation_decodes_details() {
        let donation: Donation = serde_json::from_value(json!({
            "id": 3,
            "donation_type": "INK",
            "amount": null,
            "in_kind_details": {
                "item_name": "Blankets",
                "estimated_value": "500.00",
                "quantity": 40
            }
        }))
        .unwrap();

        let details = donation.in_kind_details.unwrap();
        assert_eq!(donation.amount, None);
        assert_eq!(details.quantity, 40);
        assert_eq!(details.condition, ItemCondition::Good);
    }

    #[test]
    fn test_payload_flattens_type_specific_fields() {
        let payload = DonationPayload {
            donor_contact_id: Some(4),
            campaign_id: None,
            donation_date: Some("2024-06-01".to_string()),
            donation_type: DonationType::InKind,
            notes: String::new(),
            is_anonymous: false,
            details: DonationDetailsPayload::InKind {
                amount: None,
                in_kind_details: InKindDetailsPayload {
                    item_name: "Tents".to_string(),
                    description: String::new(),
                    estimated_value: None,
                    quantity: Some(2),
                    condition: ItemCondition::New,
                },
            },
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["amount"], json!(null));
        assert_eq!(value["in_kind_details"]["item_name"], json!("Tents"));
        assert_eq!(value["donation_type"], json!("INK"));
        assert!(value.get("details").is_none());
    }
}
