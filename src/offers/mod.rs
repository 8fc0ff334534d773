// src/offers/mod.rs

pub mod api;
pub mod models;
pub mod routes;
pub mod validators;


// Re-export commonly used items
pub use models::*;
