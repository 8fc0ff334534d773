//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Credential login and registration
//! - Google sign-in (forwarding a Google ID token to the backend)
//! - Logout and account deletion
//! - The process-wide `AuthContext` holding the signed-in user

pub mod api;
pub mod context;
pub mod models;
pub mod routes;
pub mod validators;


pub use context::AuthContext;
pub use models::{AuthResponse, AuthState, User};
