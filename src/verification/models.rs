//! Verification data models

use serde::{Deserialize, Serialize};

/// `GET /email/verification-status`
///
/// Backends report the flag as `verified`, `email_verified` or
/// `is_verified`, sometimes several at once, or only through a non-null
/// `email_verified_at`. A body with none of these does not decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawVerificationStatus")]
pub struct VerificationStatus {
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawVerificationStatus {
    #[serde(default)]
    verified: Option<bool>,
    #[serde(default)]
    email_verified: Option<bool>,
    #[serde(default)]
    is_verified: Option<bool>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_verified_at: Option<String>,
}

impl TryFrom<RawVerificationStatus> for VerificationStatus {
    type Error = String;

    fn try_from(raw: RawVerificationStatus) -> Result<Self, Self::Error> {
        let flags: Vec<bool> = [raw.verified, raw.email_verified, raw.is_verified]
            .into_iter()
            .flatten()
            .collect();
        if flags.is_empty() && raw.email_verified_at.is_none() {
            return Err("verification status carries no verified flag".to_string());
        }

        Ok(Self {
            verified: flags.contains(&true) || raw.email_verified_at.is_some(),
            email: raw.email,
            email_verified_at: raw.email_verified_at,
        })
    }
}

/// What the guard knows about the account's email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationState {
    /// The status could not be determined
    Unknown,
    Verified,
    Unverified,
}

/// Result of the pre-action check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuardDecision {
    pub can_proceed: bool,
    pub needs_verification: bool,
    pub state: VerificationState,
}

impl GuardDecision {
    pub fn from_state(state: VerificationState) -> Self {
        let needs_verification = state == VerificationState::Unverified;
        Self {
            can_proceed: !needs_verification,
            needs_verification,
            state,
        }
    }
}

/// Outcome of a guarded action
#[derive(Debug, Clone, PartialEq)]
pub enum Guarded<T> {
    Completed(T),
    /// The caller should show the verification screen instead
    NeedsVerification { action: String, message: Option<String> },
}

impl<T> Guarded<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Guarded::Completed(_))
    }

    pub fn completed(self) -> Option<T> {
        match self {
            Guarded::Completed(value) => Some(value),
            Guarded::NeedsVerification { .. } => None,
        }
    }
}
