pub mod impl_remote_resource;
pub mod raw_resource;
