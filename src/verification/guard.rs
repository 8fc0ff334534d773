// src/verification/guard.rs
use std::future::Future;
use tracing::{debug, info, warn};

use super::models::{GuardDecision, Guarded, VerificationState};
use crate::client::ApiClient;
use crate::common::{ApiError, MessageResponse};

/// Checks the account's email verification before sensitive actions.
///
/// Holds no state of its own: every check goes to the server.
#[derive(Debug, Clone)]
pub struct EmailVerificationGuard {
    client: ApiClient,
}

impl EmailVerificationGuard {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Ask the server for the current verification state.
    ///
    /// A verification-required error from the status call counts as
    /// unverified. Any other failure yields `Unknown`.
    pub async fn check(&self) -> VerificationState {
        match self.client.email_verification_status().await {
            Ok(status) if status.verified => VerificationState::Verified,
            Ok(_) => VerificationState::Unverified,
            Err(e) if e.is_verification_required() => VerificationState::Unverified,
            Err(e) => {
                warn!(error = %e, "Could not check email verification status");
                VerificationState::Unknown
            }
        }
    }

    /// Pre-check for `action`. `Unknown` lets the action proceed so the
    /// server-side check decides.
    pub async fn check_before_action(&self, action: &str) -> GuardDecision {
        let state = self.check().await;
        let decision = GuardDecision::from_state(state);
        if decision.needs_verification {
            info!(action = %action, "Action blocked until email is verified");
        } else {
            debug!(action = %action, state = ?state, "Verification check passed");
        }
        decision
    }

    /// Run `run_action` behind the verification check.
    ///
    /// A verification-required error raised by the action itself maps to
    /// the same `NeedsVerification` outcome as a failed pre-check.
    pub async fn run<T, F, Fut>(&self, action: &str, run_action: F) -> Result<Guarded<T>, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let decision = self.check_before_action(action).await;
        if !decision.can_proceed {
            return Ok(Guarded::NeedsVerification {
                action: action.to_string(),
                message: None,
            });
        }

        match run_action().await {
            Ok(value) => Ok(Guarded::Completed(value)),
            Err(e) if e.is_verification_required() => {
                info!(action = %action, "Server requires email verification");
                Ok(Guarded::NeedsVerification {
                    action: action.to_string(),
                    message: Some(e.message()),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Send the verification email again
    pub async fn resend_email(&self) -> Result<MessageResponse, ApiError> {
        self.client.resend_email_verification().await
    }
}
