// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod helpers;
pub mod migrations;
pub mod responses;
pub mod state;
pub mod validation;


// Re-export commonly used types for convenience
pub use config::ClientConfig;
pub use error::{classify, ApiError, ErrorKind};
pub use helpers::{redact_json, safe_email_log, safe_token_log};
pub use responses::MessageResponse;
pub use state::AppContext;
pub use validation::{ValidationError, ValidationResult, Validator};
