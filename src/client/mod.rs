//! # Client Module
//!
//! The single point of outbound communication with the EmpleaWorks backend:
//! - Base URL, timeout and JSON headers
//! - Bearer token injection from the session store
//! - Error normalisation into `ApiError`
//! - Request/response body logging at debug level
//!
//! Endpoint methods live next to their domain types (`auth`, `offers`,
//! `candidates`, `companies`, `profile`, `verification`).

pub mod api_client;
pub mod logging;
pub mod upload;


pub use api_client::ApiClient;
pub use upload::FileUpload;
