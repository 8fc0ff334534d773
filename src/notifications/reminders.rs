//! Reminder notifications raised by the application flows

use serde_json::json;
use std::time::Duration;

use super::models::{NotificationData, NotificationTrigger};
use crate::offers::models::Offer;

pub const SAVED_OFFER_REMINDER: &str = "saved_offer_reminder";
pub const APPLICATION_FOLLOW_UP: &str = "application_follow_up";
pub const VERIFY_EMAIL_REMINDER: &str = "verify_email_reminder";

/// Trigger for follow-up reminders, relative to now
pub fn reminder_trigger(delay: Duration) -> NotificationTrigger {
    NotificationTrigger::After(delay)
}

/// Key a saved offer's reminder is scheduled under
pub fn saved_offer_reminder_key(offer_id: u64) -> String {
    format!("{}:{}", SAVED_OFFER_REMINDER, offer_id)
}

pub fn saved_offer_reminder(offer: &Offer) -> NotificationData {
    let name = offer.display_name();
    let body = match offer.closing_date.as_deref() {
        Some(closing) => format!(
            "You saved \"{}\". Applications close on {}, don't miss it.",
            name, closing
        ),
        None => format!("You saved \"{}\". Ready to apply?", name),
    };

    NotificationData::new("Saved offer waiting for you", body).with_data(json!({
        "type": SAVED_OFFER_REMINDER,
        "offer_id": offer.id,
    }))
}

pub fn application_follow_up(offer_id: u64, offer_name: Option<&str>) -> NotificationData {
    let body = match offer_name {
        Some(name) => format!("Check the status of your application to \"{}\".", name),
        None => "Check the status of your latest application.".to_string(),
    };

    NotificationData::new("How is your application going?", body).with_data(json!({
        "type": APPLICATION_FOLLOW_UP,
        "offer_id": offer_id,
    }))
}

pub fn verification_email_reminder(email: &str) -> NotificationData {
    NotificationData::new(
        "Verify your email",
        format!(
            "We sent a verification link to {}. Verify your email to apply to offers.",
            email
        ),
    )
    .with_data(json!({ "type": VERIFY_EMAIL_REMINDER }))
}
