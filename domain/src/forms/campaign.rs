use super::{check_date, check_date_order, require_text, CollectionForm, RecordForm, ResourceForm};
use crate::error_map::ErrorMap;
use crate::input;
use crate::resources::Campaigns;
use chrono::NaiveDate;
use shared::{Campaign, CampaignPayload, CampaignStatus};

pub mod fields {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const GOAL_AMOUNT: &str = "goal_amount";
    pub const START_DATE: &str = "start_date";
    pub const END_DATE: &str = "end_date";
    pub const STATUS: &str = "status";
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignForm {
    pub name: String,
    pub description: String,
    pub goal_amount: String,
    pub start_date: String,
    pub end_date: String,
    pub status: CampaignStatus,
}

impl CampaignForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            goal_amount: "0.00".to_string(),
            start_date: input::format_date(today),
            end_date: String::new(),
            status: CampaignStatus::default(),
        }
    }
}

impl ResourceForm for CampaignForm {
    type Payload = CampaignPayload;

    fn validate(&self) -> ErrorMap {
        let mut errors = ErrorMap::new();
        require_text(&mut errors, fields::NAME, &self.name, "Campaign name is required.");
        let goal_is_positive = input::parse_currency(&self.goal_amount)
            .map(|goal| goal.is_sign_positive() && !goal.is_zero())
            .unwrap_or(false);
        if !goal_is_positive {
            errors.insert(fields::GOAL_AMOUNT, "Goal amount must be positive.");
        }
        let start = check_date(&mut errors, fields::START_DATE, &self.start_date, Some("Start date is required."));
        let end = check_date(&mut errors, fields::END_DATE, &self.end_date, None);
        check_date_order(&mut errors, fields::END_DATE, start, end);
        errors
    }

    fn to_payload(&self) -> CampaignPayload {
        CampaignPayload {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            goal_amount: input::normalize_currency(&self.goal_amount),
            start_date: input::normalize_date(&self.start_date),
            end_date: input::normalize_date(&self.end_date),
            status: self.status,
        }
    }
}

impl CollectionForm for CampaignForm {
    type Resource = Campaigns;
}

impl RecordForm for CampaignForm {
    fn from_record(record: &Campaign) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            goal_amount: input::currency_string(record.goal_amount),
            start_date: record.start_date.clone().unwrap_or_default(),
            end_date: record.end_date.clone().unwrap_or_default(),
            status: record.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_new_campaign_needs_name_and_goal() {
        let errors = CampaignForm::new(today()).validate();

        assert_eq!(errors.get(fields::NAME), Some("Campaign name is required."));
        assert_eq!(errors.get(fields::GOAL_AMOUNT), Some("Goal amount must be positive."));
        assert!(!errors.contains(fields::START_DATE));
    }

    #[test]
    fn test_goal_that_rounds_to_zero_is_rejected() {
        let form = CampaignForm {
            name: "Spring Drive".to_string(),
            goal_amount: "0.001".to_string(),
            ..CampaignForm::new(today())
        };
        assert_eq!(form.validate().get(fields::GOAL_AMOUNT), Some("Goal amount must be positive."));
    }

    #[test]
    fn test_dates_checked() {
        let mut form = CampaignForm {
            name: "Spring Drive".to_string(),
            goal_amount: "1000".to_string(),
            end_date: "2024-02-01".to_string(),
            ..CampaignForm::new(today())
        };
        assert_eq!(form.validate().get(fields::END_DATE), Some("End date cannot be before start date."));

        form.start_date = String::new();
        form.end_date = String::new();
        assert_eq!(form.validate().get(fields::START_DATE), Some("Start date is required."));
    }

    #[test]
    fn test_payload_normalizes_goal() {
        let form = CampaignForm {
            name: "Spring Drive".to_string(),
            goal_amount: "1000".to_string(),
            ..CampaignForm::new(today())
        };
        assert!(form.validate().is_empty());

        let value = serde_json::to_value(form.to_payload()).unwrap();
        assert_eq!(value["goal_amount"], json!("1000.00"));
        assert_eq!(value["start_date"], json!("2024-03-01"));
        assert_eq!(value["end_date"], json!(null));
    }

    #[test]
    fn test_from_record() {
        let record = Campaign {
            id: 2,
            name: "Winter Appeal".to_string(),
            goal_amount: Decimal::new(5000, 0),
            start_date: Some("2023-11-01".to_string()),
            status: CampaignStatus::Active,
            ..Campaign::default()
        };
        let form = CampaignForm::from_record(&record);

        assert_eq!(form.goal_amount, "5000.00");
        assert_eq!(form.end_date, "");
        assert!(form.validate().is_empty());
    }
}
