pub mod resource_listeners;
pub mod yandex_disk_client;
