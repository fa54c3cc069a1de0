use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::choices::CampaignStatus;
use crate::contacts::UserSummary;

/// A fundraising campaign. The amount raised so far is not part of the
/// record; clients derive it from the campaign's donations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub goal_amount: Decimal,
    pub start_date: Option<String>, // ISO 8601 date format (YYYY-MM-DD)
    pub end_date: Option<String>,
    pub status: CampaignStatus,
    pub status_display: Option<String>,
    pub managed_by: Option<UserSummary>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Body for creating or updating a campaign; `managed_by` is set by the server
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignPayload {
    pub name: String,
    pub description: String,
    /// Two fraction digits, e.g. `"1000.00"`
    pub goal_amount: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: CampaignStatus,
}
