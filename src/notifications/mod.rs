//! # Notifications Module
//!
//! Local notification scheduling on top of a platform backend:
//! - Immediate notifications
//! - Deferred reminders on tokio timers (saved offers, applications)
//! - Cancellation of pending reminders
//!
//! Pending reminders live only in this process. Nothing is persisted.

pub mod backend;
pub mod context;
pub mod models;
pub mod reminders;


pub use backend::{ChannelBackend, LogBackend, NotificationBackend};
pub use context::NotificationContext;
pub use models::{DeliveredNotification, NotificationData, NotificationError, NotificationId, NotificationTrigger};
