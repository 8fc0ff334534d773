// src/candidates/mod.rs

pub mod api;
pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use handlers::{ApplicationFlow, SavedOfferToggle, SavedOffersFlow};
pub use models::{ApplicationSummary, CandidateDashboard};
