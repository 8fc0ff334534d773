// src/notifications/context.rs
use chrono::Utc;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::backend::NotificationBackend;
use super::models::{NotificationData, NotificationError, NotificationId, NotificationTrigger};

/// Sends and schedules local notifications.
///
/// Scheduled notifications are tokio tasks sleeping until their trigger.
/// Cloning the context shares the pending set. A reminder scheduled under a
/// key replaces the previous one with that key and can be cancelled by key.
#[derive(Clone)]
pub struct NotificationContext {
    backend: Arc<dyn NotificationBackend>,
    pending: Arc<Mutex<HashMap<NotificationId, JoinHandle<()>>>>,
    keyed: Arc<Mutex<HashMap<String, NotificationId>>>,
    permitted: Arc<AtomicBool>,
}

impl fmt::Debug for NotificationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationContext")
            .field("permitted", &self.is_permitted())
            .finish_non_exhaustive()
    }
}

impl NotificationContext {
    pub fn new(backend: Arc<dyn NotificationBackend>) -> Self {
        Self {
            backend,
            pending: Arc::new(Mutex::new(HashMap::new())),
            keyed: Arc::new(Mutex::new(HashMap::new())),
            permitted: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Ask the backend for permission and remember the answer
    pub async fn init(&self) -> bool {
        let granted = self.backend.request_permission().await;
        self.permitted.store(granted, Ordering::SeqCst);
        if granted {
            info!("Notification permission granted");
        } else {
            warn!("Notification permission denied, notifications disabled");
        }
        granted
    }

    pub fn is_permitted(&self) -> bool {
        self.permitted.load(Ordering::SeqCst)
    }

    /// Present a notification right away
    pub async fn send_notification(
        &self,
        data: NotificationData,
    ) -> Result<NotificationId, NotificationError> {
        if !self.is_permitted() {
            return Err(NotificationError::PermissionDenied);
        }

        let id = NotificationId::generate();
        self.backend.present(&id, &data).await?;
        debug!(id = %id, title = %data.title, "Notification sent");
        Ok(id)
    }

    /// Present a notification once `trigger` fires
    pub async fn schedule_notification(
        &self,
        data: NotificationData,
        trigger: NotificationTrigger,
    ) -> Result<NotificationId, NotificationError> {
        if !self.is_permitted() {
            return Err(NotificationError::PermissionDenied);
        }

        let id = NotificationId::generate();
        let delay = trigger.delay_from(Utc::now());

        // Hold the lock across spawn so the task cannot deregister before it is registered
        let mut pending = self.pending.lock().await;

        let backend = self.backend.clone();
        let registry = self.pending.clone();
        let task_id = id.clone();
        let title = data.title.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = backend.present(&task_id, &data).await {
                warn!(id = %task_id, error = %e, "Scheduled notification failed");
            }
            registry.lock().await.remove(&task_id);
        });
        pending.insert(id.clone(), handle);

        info!(id = %id, title = %title, delay_secs = delay.as_secs(), "Notification scheduled");
        Ok(id)
    }

    /// Schedule under `key`, replacing any reminder still pending for it
    pub async fn schedule_keyed_notification(
        &self,
        key: &str,
        data: NotificationData,
        trigger: NotificationTrigger,
    ) -> Result<NotificationId, NotificationError> {
        self.cancel_keyed_notification(key).await;

        let id = self.schedule_notification(data, trigger).await?;
        self.keyed.lock().await.insert(key.to_string(), id.clone());
        Ok(id)
    }

    /// Cancel the reminder scheduled under `key`, if it has not fired yet
    pub async fn cancel_keyed_notification(&self, key: &str) -> bool {
        let id = match self.keyed.lock().await.remove(key) {
            Some(id) => id,
            None => return false,
        };

        let cancelled = self.cancel_notification(&id).await;
        if cancelled {
            debug!(key, "Keyed notification cancelled");
        }
        cancelled
    }

    /// Cancel a pending notification. Returns false if it already fired or
    /// was never scheduled.
    pub async fn cancel_notification(&self, id: &NotificationId) -> bool {
        match self.pending.lock().await.remove(id) {
            Some(handle) => {
                handle.abort();
                debug!(id = %id, "Notification cancelled");
                true
            }
            None => false,
        }
    }

    pub async fn cancel_all(&self) -> usize {
        self.keyed.lock().await.clear();
        let mut pending = self.pending.lock().await;
        let count = pending.len();
        for (_, handle) in pending.drain() {
            handle.abort();
        }
        if count > 0 {
            info!(count, "Cancelled pending notifications");
        }
        count
    }

    /// Ids of notifications still waiting for their trigger
    pub async fn pending(&self) -> Vec<NotificationId> {
        self.pending
            .lock()
            .await
            .iter()
            .filter(|(_, handle)| !handle.is_finished())
            .map(|(id, _)| id.clone())
            .collect()
    }
}
