pub mod disk_auth;
