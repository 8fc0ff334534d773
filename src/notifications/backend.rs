//! Platform notification backends

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::mpsc;
use tracing::info;

use super::models::{DeliveredNotification, NotificationData, NotificationError, NotificationId};

/// Adapter over the platform's notification service
#[async_trait]
pub trait NotificationBackend: Send + Sync {
    /// Ask the platform for permission to show notifications
    async fn request_permission(&self) -> bool {
        true
    }

    async fn present(
        &self,
        id: &NotificationId,
        data: &NotificationData,
    ) -> Result<(), NotificationError>;
}

/// Writes notifications to the log. Used by the command-line front-end.
#[derive(Debug, Default, Clone)]
pub struct LogBackend;

#[async_trait]
impl NotificationBackend for LogBackend {
    async fn present(
        &self,
        id: &NotificationId,
        data: &NotificationData,
    ) -> Result<(), NotificationError> {
        info!(id = %id, title = %data.title, body = %data.body, "🔔 Notification");
        Ok(())
    }
}

/// Forwards notifications to a channel
#[derive(Debug, Clone)]
pub struct ChannelBackend {
    sender: mpsc::UnboundedSender<DeliveredNotification>,
    permitted: bool,
}

impl ChannelBackend {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<DeliveredNotification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                sender,
                permitted: true,
            },
            receiver,
        )
    }

    /// A backend whose permission prompt is always declined
    pub fn denied() -> (Self, mpsc::UnboundedReceiver<DeliveredNotification>) {
        let (mut backend, receiver) = Self::new();
        backend.permitted = false;
        (backend, receiver)
    }
}

#[async_trait]
impl NotificationBackend for ChannelBackend {
    async fn request_permission(&self) -> bool {
        self.permitted
    }

    async fn present(
        &self,
        id: &NotificationId,
        data: &NotificationData,
    ) -> Result<(), NotificationError> {
        self.sender
            .send(DeliveredNotification {
                id: id.clone(),
                data: data.clone(),
                delivered_at: Utc::now(),
            })
            .map_err(|e| NotificationError::Backend(e.to_string()))
    }
}
