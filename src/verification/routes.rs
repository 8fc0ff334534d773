//! Email verification endpoints
//!
//! - `GET /email/verification-status` - `{ "verified": bool, ... }`
//! - `POST /email/verification-notification` - Send the verification email again

pub const VERIFICATION_STATUS: &str = "/email/verification-status";
pub const VERIFICATION_RESEND: &str = "/email/verification-notification";
