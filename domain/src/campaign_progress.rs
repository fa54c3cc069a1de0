//! Fundraising progress derived from a campaign's donations.

use crate::input;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use shared::{DisplayConfig, Donation, DonationType};

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignProgress {
    pub goal_amount: Decimal,
    pub total_raised: Decimal,
    /// Share of the goal raised, in percent; may exceed 100
    pub percent: f64,
}

impl CampaignProgress {
    /// Sum the monetary donations and compare them with the goal.
    ///
    /// In-kind gifts do not count towards the goal. A goal of zero or less
    /// yields 0 percent.
    pub fn calculate(goal_amount: Decimal, donations: &[Donation]) -> Self {
        let total_raised = total_raised(donations);
        let percent = if goal_amount > Decimal::ZERO {
            (total_raised / goal_amount * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
        } else {
            0.0
        };

        Self {
            goal_amount,
            total_raised,
            percent,
        }
    }

    /// Width of the progress bar, clamped to 0..=100
    pub fn bar_percent(&self) -> f64 {
        self.percent.clamp(0.0, 100.0)
    }

    pub fn goal_reached(&self) -> bool {
        self.goal_amount > Decimal::ZERO && self.total_raised >= self.goal_amount
    }

    /// Unclamped percentage, e.g. `"30.00%"`
    pub fn percent_label(&self, config: &DisplayConfig) -> String {
        format!("{:.*}%", config.percent_decimal_places, self.percent)
    }

    /// e.g. `"$300.00 raised of $1,000.00"`
    pub fn summary_label(&self, config: &DisplayConfig) -> String {
        format!(
            "{} raised of {}",
            input::format_currency(self.total_raised, config),
            input::format_currency(self.goal_amount, config)
        )
    }
}

/// Sum of monetary donation amounts; in-kind donations contribute nothing
pub fn total_raised(donations: &[Donation]) -> Decimal {
    donations
        .iter()
        .filter(|donation| donation.donation_type == DonationType::Monetary)
        .filter_map(|donation| donation.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::InKindDetails;

    fn monetary(amount: i64) -> Donation {
        Donation {
            donation_type: DonationType::Monetary,
            amount: Some(Decimal::new(amount, 0)),
            ..Donation::default()
        }
    }

    fn in_kind(estimated_value: i64) -> Donation {
        Donation {
            donation_type: DonationType::InKind,
            amount: None,
            in_kind_details: Some(InKindDetails {
                item_name: "Blankets".to_string(),
                estimated_value: Some(Decimal::new(estimated_value, 0)),
                ..InKindDetails::default()
            }),
            ..Donation::default()
        }
    }

    #[test]
    fn test_in_kind_donations_do_not_count() {
        let donations = vec![monetary(100), monetary(200), in_kind(500)];
        let progress = CampaignProgress::calculate(Decimal::new(1000, 0), &donations);

        assert_eq!(progress.total_raised, Decimal::new(300, 0));
        assert_eq!(progress.percent, 30.0);
        assert_eq!(progress.percent_label(&DisplayConfig::default()), "30.00%");
        assert_eq!(
            progress.summary_label(&DisplayConfig::default()),
            "$300.00 raised of $1,000.00"
        );
        assert!(!progress.goal_reached());
    }

    #[test]
    fn test_zero_goal_yields_zero_percent() {
        let progress = CampaignProgress::calculate(Decimal::ZERO, &[monetary(50)]);
        assert_eq!(progress.percent, 0.0);
        assert_eq!(progress.bar_percent(), 0.0);
        assert!(!progress.goal_reached());
    }

    #[test]
    fn test_overfunded_bar_is_clamped_but_label_is_not() {
        let progress = CampaignProgress::calculate(Decimal::new(100, 0), &[monetary(150)]);

        assert_eq!(progress.percent, 150.0);
        assert_eq!(progress.bar_percent(), 100.0);
        assert_eq!(progress.percent_label(&DisplayConfig::default()), "150.00%");
        assert!(progress.goal_reached());
    }

    #[test]
    fn test_monetary_donation_without_amount_counts_as_zero() {
        let mut missing = monetary(0);
        missing.amount = None;
        assert_eq!(total_raised(&[missing, monetary(20)]), Decimal::new(20, 0));
        assert_eq!(total_raised(&[]), Decimal::ZERO);
    }
}
