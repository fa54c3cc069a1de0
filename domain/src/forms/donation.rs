use super::{check_date, check_non_negative, check_reference, require_text, CollectionForm, RecordForm, ResourceForm};
use crate::error_map::ErrorMap;
use crate::input;
use crate::resources::Donations;
use chrono::NaiveDate;
use shared::{
    Donation, DonationDetailsPayload, DonationPayload, DonationType, InKindDetailsPayload, ItemCondition,
    PaymentMethod,
};

pub mod fields {
    pub const DONOR_CONTACT_ID: &str = "donor_contact_id";
    pub const CAMPAIGN_ID: &str = "campaign_id";
    pub const DONATION_DATE: &str = "donation_date";
    pub const DONATION_TYPE: &str = "donation_type";
    pub const NOTES: &str = "notes";
    pub const IS_ANONYMOUS: &str = "is_anonymous";
    pub const AMOUNT: &str = "amount";
    pub const PAYMENT_METHOD: &str = "payment_method";
    pub const ITEM_NAME: &str = "in_kind_details.item_name";
    pub const ITEM_DESCRIPTION: &str = "in_kind_details.description";
    pub const ESTIMATED_VALUE: &str = "in_kind_details.estimated_value";
    pub const QUANTITY: &str = "in_kind_details.quantity";
    pub const CONDITION: &str = "in_kind_details.condition";
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonetaryFields {
    pub amount: String,
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InKindFields {
    pub item_name: String,
    pub description: String,
    pub estimated_value: String,
    pub quantity: String,
    pub condition: ItemCondition,
}

impl Default for InKindFields {
    fn default() -> Self {
        Self {
            item_name: String::new(),
            description: String::new(),
            estimated_value: String::new(),
            quantity: "1".to_string(),
            condition: ItemCondition::default(),
        }
    }
}

/// The type-specific half of a donation; only one set of fields exists at a time
#[derive(Debug, Clone, PartialEq)]
pub enum DonationDetails {
    Monetary(MonetaryFields),
    InKind(InKindFields),
}

impl DonationDetails {
    /// Blank fields for the given type
    pub fn empty(donation_type: DonationType) -> Self {
        match donation_type {
            DonationType::Monetary => DonationDetails::Monetary(MonetaryFields::default()),
            DonationType::InKind => DonationDetails::InKind(InKindFields::default()),
        }
    }

    pub fn donation_type(&self) -> DonationType {
        match self {
            DonationDetails::Monetary(_) => DonationType::Monetary,
            DonationDetails::InKind(_) => DonationType::InKind,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonationForm {
    pub donor_contact_id: String,
    pub campaign_id: String,
    pub donation_date: String,
    pub notes: String,
    pub is_anonymous: bool,
    pub details: DonationDetails,
}

impl DonationForm {
    /// A monetary donation dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            donor_contact_id: String::new(),
            campaign_id: String::new(),
            donation_date: input::format_date(today),
            notes: String::new(),
            is_anonymous: false,
            details: DonationDetails::empty(DonationType::Monetary),
        }
    }

    /// Pre-selects the campaign, as when recording a gift from a campaign page
    pub fn for_campaign(today: NaiveDate, campaign_id: i64) -> Self {
        Self {
            campaign_id: campaign_id.to_string(),
            ..Self::new(today)
        }
    }

    pub fn donation_type(&self) -> DonationType {
        self.details.donation_type()
    }

    /// Changing the type drops the other type's fields entirely
    pub fn set_donation_type(&mut self, donation_type: DonationType) {
        if self.donation_type() != donation_type {
            self.details = DonationDetails::empty(donation_type);
        }
    }

    pub fn monetary_mut(&mut self) -> Option<&mut MonetaryFields> {
        match &mut self.details {
            DonationDetails::Monetary(fields) => Some(fields),
            DonationDetails::InKind(_) => None,
        }
    }

    pub fn in_kind_mut(&mut self) -> Option<&mut InKindFields> {
        match &mut self.details {
            DonationDetails::InKind(fields) => Some(fields),
            DonationDetails::Monetary(_) => None,
        }
    }
}

impl ResourceForm for DonationForm {
    type Payload = DonationPayload;

    fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();
        check_reference(
            &mut errors,
            fields::DONOR_CONTACT_ID,
            &self.donor_contact_id,
            Some("Donor contact is required."),
        );
        check_reference(&mut errors, fields::CAMPAIGN_ID, &self.campaign_id, None);
        check_date(&mut errors, fields::DONATION_DATE, &self.donation_date, Some("Donation date is required."));

        match &self.details {
            DonationDetails::Monetary(monetary) => {
                let positive = input::parse_currency(&monetary.amount)
                    .map(|amount| amount.is_sign_positive() && !amount.is_zero())
                    .unwrap_or(false);
                if !positive {
                    errors.insert(fields::AMOUNT, "Amount must be positive for monetary donations.");
                }
                if monetary.payment_method.is_none() {
                    errors.insert(fields::PAYMENT_METHOD, "Payment method is required for monetary donations.");
                }
            }
            DonationDetails::InKind(in_kind) => {
                require_text(
                    &mut errors,
                    fields::ITEM_NAME,
                    &in_kind.item_name,
                    "Item name is required for in-kind donations.",
                );
                match input::parse_whole(&in_kind.quantity) {
                    Ok(quantity) if quantity > 0 => {}
                    _ => errors.insert(fields::QUANTITY, "Quantity must be a positive whole number."),
                }
                check_non_negative(&mut errors, fields::ESTIMATED_VALUE, &in_kind.estimated_value, "Estimated value");
            }
        }
        errors
    }

    fn to_payload(&self) -> DonationPayload {
        let details = match &self.details {
            DonationDetails::Monetary(monetary) => DonationDetailsPayload::Monetary {
                amount: input::normalize_currency(&monetary.amount),
                payment_method: monetary.payment_method,
            },
            DonationDetails::InKind(in_kind) => DonationDetailsPayload::InKind {
                amount: None,
                in_kind_details: InKindDetailsPayload {
                    item_name: in_kind.item_name.trim().to_string(),
                    description: in_kind.description.clone(),
                    estimated_value: input::normalize_currency(&in_kind.estimated_value),
                    quantity: input::parse_whole(&in_kind.quantity).ok(),
                    condition: in_kind.condition,
                },
            },
        };

        DonationPayload {
            donor_contact_id: input::parse_id(&self.donor_contact_id),
            campaign_id: input::parse_id(&self.campaign_id),
            donation_date: input::normalize_date(&self.donation_date),
            donation_type: self.donation_type(),
            notes: self.notes.clone(),
            is_anonymous: self.is_anonymous,
            details,
        }
    }
}

impl CollectionForm for DonationForm {
    type Resource = Donations;
}

impl RecordForm for DonationForm {
    fn from_record(record: &Donation) -> Self {
        let details = match record.donation_type {
            DonationType::Monetary => DonationDetails::Monetary(MonetaryFields {
                amount: record.amount.map(input::currency_string).unwrap_or_default(),
                payment_method: record.payment_method,
            }),
            DonationType::InKind => {
                let in_kind = record.in_kind_details.clone().unwrap_or_default();
                DonationDetails::InKind(InKindFields {
                    item_name: in_kind.item_name,
                    description: in_kind.description,
                    estimated_value: in_kind.estimated_value.map(input::currency_string).unwrap_or_default(),
                    quantity: in_kind.quantity.to_string(),
                    condition: in_kind.condition,
                })
            }
        };

        Self {
            donor_contact_id: record
                .donor_contact
                .as_ref()
                .map(|contact| contact.id.to_string())
                .unwrap_or_default(),
            campaign_id: record
                .campaign
                .as_ref()
                .map(|campaign| campaign.id.to_string())
                .unwrap_or_default(),
            donation_date: record.donation_date.clone().unwrap_or_default(),
            notes: record.notes.clone(),
            is_anonymous: record.is_anonymous,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;
    use shared::{CampaignSummary, Contact, InKindDetails};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn monetary(amount: &str, payment_method: Option<PaymentMethod>) -> DonationForm {
        let mut form = DonationForm::new(today());
        form.donor_contact_id = "4".to_string();
        form.details = DonationDetails::Monetary(MonetaryFields {
            amount: amount.to_string(),
            payment_method,
        });
        form
    }

    #[test]
    fn test_new_form_defaults() {
        let form = DonationForm::new(today());
        assert_eq!(form.donation_date, "2024-06-01");
        assert_eq!(form.donation_type(), DonationType::Monetary);
        assert_eq!(DonationForm::for_campaign(today(), 9).campaign_id, "9");
    }

    #[test]
    fn test_zero_amount_flags_amount() {
        let errors = monetary("0", Some(PaymentMethod::Cash)).validate();
        assert_eq!(errors.get(fields::AMOUNT), Some("Amount must be positive for monetary donations."));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_amount_that_rounds_to_zero_is_rejected() {
        let form = monetary("0.004", Some(PaymentMethod::Cash));
        assert_eq!(
            form.validate().get(fields::AMOUNT),
            Some("Amount must be positive for monetary donations.")
        );

        let form = monetary("0.005", Some(PaymentMethod::Cash));
        assert!(form.validate().is_empty());
        let value = serde_json::to_value(form.to_payload()).unwrap();
        assert_eq!(value["amount"], json!("0.01"));
    }

    #[test]
    fn test_missing_payment_method_is_the_only_error() {
        let errors = monetary("10", None).validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(fields::PAYMENT_METHOD),
            Some("Payment method is required for monetary donations.")
        );
    }

    #[test]
    fn test_unparseable_amount_is_reported_and_sent_as_null() {
        let form = monetary("twenty", Some(PaymentMethod::Cash));
        assert!(form.validate().contains(fields::AMOUNT));

        let value = serde_json::to_value(form.to_payload()).unwrap();
        assert_eq!(value["amount"], json!(null));
    }

    #[test]
    fn test_monetary_payload_normalizes_amount() {
        let form = monetary("300", Some(PaymentMethod::Check));
        assert!(form.validate().is_empty());

        let value = serde_json::to_value(form.to_payload()).unwrap();
        assert_eq!(value["amount"], json!("300.00"));
        assert_eq!(value["payment_method"], json!("CHK"));
        assert_eq!(value["donor_contact_id"], json!(4));
        assert_eq!(value["campaign_id"], json!(null));
        assert!(value.get("in_kind_details").is_none());
    }

    #[test]
    fn test_type_switch_discards_other_fields() {
        let mut form = monetary("50", Some(PaymentMethod::Cash));
        form.set_donation_type(DonationType::InKind);

        assert_eq!(form.details, DonationDetails::InKind(InKindFields::default()));
        assert!(form.monetary_mut().is_none());

        form.set_donation_type(DonationType::Monetary);
        assert_eq!(form.details, DonationDetails::Monetary(MonetaryFields::default()));
    }

    #[test]
    fn test_in_kind_rules_use_nested_keys() {
        let mut form = DonationForm::new(today());
        form.donor_contact_id = "4".to_string();
        form.set_donation_type(DonationType::InKind);
        if let Some(in_kind) = form.in_kind_mut() {
            in_kind.quantity = "0".to_string();
            in_kind.estimated_value = "-5".to_string();
        }

        let errors = form.validate();
        assert_eq!(errors.get(fields::ITEM_NAME), Some("Item name is required for in-kind donations."));
        assert_eq!(errors.get(fields::QUANTITY), Some("Quantity must be a positive whole number."));
        assert_eq!(errors.get(fields::ESTIMATED_VALUE), Some("Estimated value cannot be negative."));
        assert!(!errors.contains(fields::AMOUNT));
        assert!(!errors.contains(fields::PAYMENT_METHOD));
    }

    #[test]
    fn test_in_kind_payload_sends_null_amount() {
        let mut form = DonationForm::new(today());
        form.donor_contact_id = "4".to_string();
        form.set_donation_type(DonationType::InKind);
        if let Some(in_kind) = form.in_kind_mut() {
            in_kind.item_name = "Blankets".to_string();
            in_kind.quantity = "40".to_string();
            in_kind.estimated_value = "500".to_string();
        }
        assert!(form.validate().is_empty());

        let value = serde_json::to_value(form.to_payload()).unwrap();
        assert_eq!(value["amount"], json!(null));
        assert_eq!(value["donation_type"], json!("INK"));
        assert_eq!(value["in_kind_details"]["quantity"], json!(40));
        assert_eq!(value["in_kind_details"]["estimated_value"], json!("500.00"));
        assert_eq!(value["in_kind_details"]["condition"], json!("GOD"));
        assert!(value.get("payment_method").is_none());
    }

    #[test]
    fn test_missing_donor_and_date() {
        let mut form = monetary("10", Some(PaymentMethod::Cash));
        form.donor_contact_id = String::new();
        form.donation_date = String::new();

        let errors = form.validate();
        assert_eq!(errors.get(fields::DONOR_CONTACT_ID), Some("Donor contact is required."));
        assert_eq!(errors.get(fields::DONATION_DATE), Some("Donation date is required."));
    }

    #[test]
    fn test_from_record_round_trips_through_payload() {
        let record = Donation {
            id: 11,
            donor_contact: Some(Contact { id: 4, ..Contact::default() }),
            campaign: Some(CampaignSummary { id: 2, name: "Winter Appeal".to_string() }),
            donation_date: Some("2024-01-15".to_string()),
            donation_type: DonationType::InKind,
            in_kind_details: Some(InKindDetails {
                item_name: "Coats".to_string(),
                estimated_value: Some(Decimal::new(12050, 2)),
                quantity: 12,
                ..InKindDetails::default()
            }),
            ..Donation::default()
        };

        let form = DonationForm::from_record(&record);
        assert_eq!(form.donor_contact_id, "4");
        assert_eq!(form.campaign_id, "2");
        assert!(form.validate().is_empty());

        let payload = form.to_payload();
        assert_eq!(payload.campaign_id, Some(2));
        assert_eq!(payload.donation_date.as_deref(), Some("2024-01-15"));
        match payload.details {
            DonationDetailsPayload::InKind { amount, in_kind_details } => {
                assert_eq!(amount, None);
                assert_eq!(in_kind_details.item_name, "Coats");
                assert_eq!(in_kind_details.quantity, Some(12));
                assert_eq!(in_kind_details.estimated_value.as_deref(), Some("120.50"));
            }
            other => panic!("expected in-kind details, got {:?}", other),
        }
    }
}
