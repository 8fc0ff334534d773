//! Email verification calls

use tracing::info;

use super::models::VerificationStatus;
use super::routes;
use crate::client::ApiClient;
use crate::common::{ApiError, MessageResponse};

impl ApiClient {
    /// GET /email/verification-status
    pub async fn email_verification_status(&self) -> Result<VerificationStatus, ApiError> {
        self.get(routes::VERIFICATION_STATUS).await
    }

    /// POST /email/verification-notification
    pub async fn resend_email_verification(&self) -> Result<MessageResponse, ApiError> {
        let response: MessageResponse = self.post_empty(routes::VERIFICATION_RESEND).await?;
        info!("Verification email requested");
        Ok(response)
    }
}
