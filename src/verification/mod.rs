//! # Verification Module
//!
//! Email-verification gating for sensitive actions (applying, saving
//! offers):
//! - Status and resend endpoints
//! - `EmailVerificationGuard`, a pre-check run before every guarded action
//!
//! Detection of verification-required errors returned by the action itself
//! lives in `common::error::classify`.

pub mod api;
pub mod guard;
pub mod models;
pub mod routes;


pub use guard::EmailVerificationGuard;
pub use models::{GuardDecision, Guarded, VerificationState, VerificationStatus};
