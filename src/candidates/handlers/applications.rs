// src/candidates/handlers/applications.rs

use std::time::Duration;
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::common::{ApiError, Validator};
use crate::notifications::reminders::{
    application_follow_up, reminder_trigger, saved_offer_reminder_key,
};
use crate::notifications::NotificationContext;
use crate::offers::models::{ApplyRequest, ApplyResponse};
use crate::offers::validators::ApplicationValidator;
use crate::verification::{EmailVerificationGuard, Guarded};

pub const APPLY_ACTION: &str = "apply";

/// The apply screen's submission flow.
///
/// 1. Validate the form locally
/// 2. Email verification check
/// 3. Unsave the offer if saved, then submit (`ApiClient::apply_to_offer`)
/// 4. Drop the offer's saved reminder and schedule a follow-up reminder
///
/// Step 3's unsave and step 4 are best-effort and never fail the flow.
#[derive(Debug, Clone)]
pub struct ApplicationFlow {
    client: ApiClient,
    guard: EmailVerificationGuard,
    notifications: NotificationContext,
    reminder_delay: Duration,
}

impl ApplicationFlow {
    pub fn new(
        client: ApiClient,
        guard: EmailVerificationGuard,
        notifications: NotificationContext,
        reminder_delay: Duration,
    ) -> Self {
        Self {
            client,
            guard,
            notifications,
            reminder_delay,
        }
    }

    pub async fn apply(&self, request: &ApplyRequest) -> Result<Guarded<ApplyResponse>, ApiError> {
        ApplicationValidator.validate(request).into_result()?;

        info!(offer_id = request.offer_id, "Submitting application");

        let outcome = self
            .guard
            .run(APPLY_ACTION, || self.client.apply_to_offer(request))
            .await?;

        if outcome.is_completed() {
            self.notifications
                .cancel_keyed_notification(&saved_offer_reminder_key(request.offer_id))
                .await;
            self.schedule_follow_up(request.offer_id).await;
        }

        Ok(outcome)
    }

    pub async fn has_applied(&self, offer_id: u64) -> Result<bool, ApiError> {
        self.client.has_applied(offer_id).await
    }

    async fn schedule_follow_up(&self, offer_id: u64) {
        let offer_name = match self.client.get_offer(offer_id).await {
            Ok(offer) => offer.name,
            Err(e) => {
                warn!(offer_id, error = %e, "Could not load offer for reminder text");
                None
            }
        };

        let data = application_follow_up(offer_id, offer_name.as_deref());
        if let Err(e) = self
            .notifications
            .schedule_notification(data, reminder_trigger(self.reminder_delay))
            .await
        {
            warn!(offer_id, error = %e, "Could not schedule application reminder");
        }
    }
}
