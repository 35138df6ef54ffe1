pub mod get_resource_raw_data;
pub mod manage;
pub mod request;
pub mod transfer;
