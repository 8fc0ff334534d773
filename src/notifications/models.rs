//! Notification data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Notification permission not granted")]
    PermissionDenied,

    #[error("Notification backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(String);

impl NotificationId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NotificationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the user sees, plus an arbitrary payload for deep links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationData {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub data: Value,
}

impl NotificationData {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            data: Value::Null,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }
}

/// When a scheduled notification fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTrigger {
    After(Duration),
    At(DateTime<Utc>),
}

impl NotificationTrigger {
    /// Time left until the trigger fires; zero when already due
    pub fn delay_from(&self, now: DateTime<Utc>) -> Duration {
        match self {
            NotificationTrigger::After(delay) => *delay,
            NotificationTrigger::At(at) => (*at - now).to_std().unwrap_or(Duration::ZERO),
        }
    }
}

/// A notification handed to the backend
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveredNotification {
    pub id: NotificationId,
    pub data: NotificationData,
    pub delivered_at: DateTime<Utc>,
}
