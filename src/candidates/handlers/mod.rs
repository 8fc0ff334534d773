// src/candidates/handlers/mod.rs
//! Candidate flows that combine several calls behind the verification guard

pub mod applications;
pub mod saved_offers;

pub use applications::ApplicationFlow;
pub use saved_offers::{SavedOfferToggle, SavedOffersFlow};
