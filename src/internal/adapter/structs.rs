pub mod disk_adapter;
pub mod entry;
pub mod path_prefixer;
pub mod write_options;
