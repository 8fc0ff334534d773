// src/candidates/handlers/saved_offers.rs

use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::common::ApiError;
use crate::notifications::reminders::{
    reminder_trigger, saved_offer_reminder, saved_offer_reminder_key,
};
use crate::notifications::{NotificationContext, NotificationId};
use crate::offers::models::Offer;
use crate::verification::{EmailVerificationGuard, Guarded};

pub const SAVE_OFFER_ACTION: &str = "save_offer";

/// Result of a save/unsave toggle
#[derive(Debug, Clone, Serialize)]
pub struct SavedOfferToggle {
    pub offer_id: u64,
    /// Whether the offer is saved after the toggle, per the refreshed list
    pub saved: bool,
    pub saved_offers: Vec<Offer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<NotificationId>,
}

#[derive(Debug, Clone)]
pub struct SavedOffersFlow {
    client: ApiClient,
    guard: EmailVerificationGuard,
    notifications: NotificationContext,
    reminder_delay: Duration,
}

impl SavedOffersFlow {
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

    pub async fn list(&self) -> Result<Vec<Offer>, ApiError> {
        self.client.saved_offers().await
    }

    /// Toggle `offer_id` behind the verification check, then refresh the
    /// saved list. A newly saved offer gets a reminder and an unsaved one
    /// loses it. Reminder failures do not fail the toggle.
    pub async fn toggle(&self, offer_id: u64) -> Result<Guarded<SavedOfferToggle>, ApiError> {
        let outcome = self
            .guard
            .run(SAVE_OFFER_ACTION, || self.toggle_and_refresh(offer_id))
            .await?;

        let mut toggle = match outcome {
            Guarded::Completed(toggle) => toggle,
            blocked => return Ok(blocked),
        };

        if toggle.saved {
            toggle.reminder = self.schedule_reminder(&toggle).await;
        } else {
            self.notifications
                .cancel_keyed_notification(&saved_offer_reminder_key(offer_id))
                .await;
        }

        info!(offer_id, saved = toggle.saved, "Saved offers updated");
        Ok(Guarded::Completed(toggle))
    }

    async fn toggle_and_refresh(&self, offer_id: u64) -> Result<SavedOfferToggle, ApiError> {
        self.client.toggle_saved_offer(offer_id).await?;
        let saved_offers = self.client.saved_offers().await?;
        let saved = saved_offers.iter().any(|offer| offer.id == offer_id);

        Ok(SavedOfferToggle {
            offer_id,
            saved,
            saved_offers,
            reminder: None,
        })
    }

    async fn schedule_reminder(&self, toggle: &SavedOfferToggle) -> Option<NotificationId> {
        let offer = toggle
            .saved_offers
            .iter()
            .find(|offer| offer.id == toggle.offer_id)?;

        match self
            .notifications
            .schedule_keyed_notification(
                &saved_offer_reminder_key(offer.id),
                saved_offer_reminder(offer),
                reminder_trigger(self.reminder_delay),
            )
            .await
        {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(offer_id = toggle.offer_id, error = %e, "Could not schedule saved offer reminder");
                None
            }
        }
    }
}
