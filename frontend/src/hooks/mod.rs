pub mod use_detail;
pub mod use_form_session;
pub mod use_record_list;
