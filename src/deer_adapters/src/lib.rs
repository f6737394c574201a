pub mod auth_validation;
pub mod config;
pub mod hashing;
pub mod persistence;
