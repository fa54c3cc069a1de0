pub mod campaign_detail;
pub mod campaign_list;
pub mod campaign_progress_bar;
pub mod contact_detail;
pub mod contact_list;
pub mod donation_detail;
pub mod donation_list;
pub mod editors;
pub mod field_error;
pub mod forms;
pub mod header;
pub mod inventory_item_detail;
pub mod inventory_list;
pub mod project_detail;
pub mod project_list;
pub mod volunteer_detail;
pub mod volunteer_list;
