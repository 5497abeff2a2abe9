pub mod access_token;
pub mod app_client_id;
pub mod error_category;
pub mod requests;
pub mod responses;
pub mod service_result;
