// src/profile/mod.rs
//! # Profile Module
//!
//! The signed-in account's profile:
//! - Reading and updating profile fields, with optional image and CV uploads
//! - Password settings
//! - Account deletion

pub mod api;
pub mod models;
pub mod routes;
pub mod validators;


pub use models::{CandidateProfile, PasswordSettings, PasswordUpdate, ProfileUpdate};
