pub mod adapter;
pub mod auth;
pub mod disk;
pub mod entrance;
