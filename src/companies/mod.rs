//! # Companies Module
//!
//! Companies are embedded in offers and have no lifecycle of their own on
//! the client. Company accounts get a dashboard of their published offers.

pub mod api;
pub mod models;
pub mod routes;


pub use models::{Company, CompanyDashboard};
