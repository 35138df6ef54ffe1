pub mod resource_listener;
pub mod storage_client;
