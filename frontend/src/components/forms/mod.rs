pub mod campaign_form;
pub mod contact_form;
pub mod donation_form;
pub mod inventory_item_form;
pub mod project_form;
pub mod stock_adjustment_form;
pub mod volunteer_form;
