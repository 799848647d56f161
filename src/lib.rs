// Library exports for the CLI and integration tests

pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod models;
pub mod report;
pub mod services;

// Re-export commonly used types
pub use data::RouteCatalog;
pub use error::{AppError, Result};
