pub mod artifact;
pub mod capture_models;
pub mod config;
pub mod error;
pub mod state;
