pub mod home;
pub mod not_found;
pub mod review_detail;
pub mod review_form;
