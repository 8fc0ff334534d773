// src/candidates/tests/saved_offers_tests.rs

#[cfg(test)]
mod tests {
    use crate::candidates::models::*;
    use crate::candidates::SavedOffersFlow;
    use crate::notifications::{ChannelBackend, NotificationContext};
    use crate::testing::{offer_json, FakeBackend};
    use crate::verification::{EmailVerificationGuard, Guarded};
    use axum::http::Method;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    async fn build_flow(fake: &FakeBackend) -> (SavedOffersFlow, NotificationContext) {
        let client = fake.client_with_token("tok").await;
        let (backend, _delivered) = ChannelBackend::new();
        let notifications = NotificationContext::new(Arc::new(backend));
        let flow = SavedOffersFlow::new(
            client.clone(),
            EmailVerificationGuard::new(client),
            notifications.clone(),
            Duration::from_secs(3600),
        );
        (flow, notifications)
    }

    #[tokio::test]
    async fn test_saving_an_offer_schedules_reminder() {
        let fake = FakeBackend::start().await;
        fake.on(Method::GET, "/email/verification-status", 200, json!({"verified": true}));
        fake.on(Method::POST, "/saved-offers/7", 200, json!({"message": "Saved", "saved": true}));
        fake.on(
            Method::GET,
            "/saved-offers",
            200,
            json!({"savedOffers": [offer_json(7, "Rust Developer")]}),
        );
        let (flow, notifications) = build_flow(&fake).await;

        let toggle = flow.toggle(7).await.unwrap().completed().unwrap();

        assert!(toggle.saved);
        assert_eq!(toggle.saved_offers.len(), 1);
        let reminder = toggle.reminder.expect("reminder scheduled");
        assert_eq!(notifications.pending().await, vec![reminder]);
        assert_eq!(
            fake.request_lines(),
            vec![
                "GET /email/verification-status",
                "POST /saved-offers/7",
                "GET /saved-offers",
            ]
        );
        notifications.cancel_all().await;
    }

    #[tokio::test]
    async fn test_unsaving_an_offer_schedules_nothing() {
        let fake = FakeBackend::start().await;
        fake.on(Method::GET, "/email/verification-status", 200, json!({"verified": true}));
        fake.on(Method::POST, "/saved-offers/7", 200, json!({"saved": false}));
        fake.on(Method::GET, "/saved-offers", 200, json!({"savedOffers": []}));
        let (flow, notifications) = build_flow(&fake).await;

        let toggle = flow.toggle(7).await.unwrap().completed().unwrap();

        assert!(!toggle.saved);
        assert_eq!(toggle.reminder, None);
        assert!(notifications.pending().await.is_empty());
    }

    #[tokio::test]
    async fn test_unsaving_cancels_saved_offer_reminder() {
        let fake = FakeBackend::start().await;
        fake.on(Method::GET, "/email/verification-status", 200, json!({"verified": true}));
        fake.on(Method::POST, "/saved-offers/7", 200, json!({"saved": true}));
        fake.on(Method::POST, "/saved-offers/7", 200, json!({"saved": false}));
        fake.on(
            Method::GET,
            "/saved-offers",
            200,
            json!({"savedOffers": [offer_json(7, "Rust Developer")]}),
        );
        fake.on(Method::GET, "/saved-offers", 200, json!({"savedOffers": []}));
        let (flow, notifications) = build_flow(&fake).await;

        let saved = flow.toggle(7).await.unwrap().completed().unwrap();
        assert!(saved.reminder.is_some());
        assert_eq!(notifications.pending().await.len(), 1);

        let unsaved = flow.toggle(7).await.unwrap().completed().unwrap();

        assert!(!unsaved.saved);
        assert!(notifications.pending().await.is_empty());
    }

    #[tokio::test]
    async fn test_reminder_failure_does_not_fail_toggle() {
        let fake = FakeBackend::start().await;
        fake.on(Method::GET, "/email/verification-status", 200, json!({"verified": true}));
        fake.on(Method::POST, "/saved-offers/7", 200, json!({"saved": true}));
        fake.on(
            Method::GET,
            "/saved-offers",
            200,
            json!({"savedOffers": [offer_json(7, "Rust Developer")]}),
        );
        let client = fake.client_with_token("tok").await;
        let (backend, _delivered) = ChannelBackend::denied();
        let notifications = NotificationContext::new(Arc::new(backend));
        notifications.init().await;
        let flow = SavedOffersFlow::new(
            client.clone(),
            EmailVerificationGuard::new(client),
            notifications,
            Duration::from_secs(3600),
        );

        let toggle = flow.toggle(7).await.unwrap().completed().unwrap();

        assert!(toggle.saved);
        assert_eq!(toggle.reminder, None);
    }

    #[tokio::test]
    async fn test_toggle_requires_verified_email() {
        let fake = FakeBackend::start().await;
        fake.on(Method::GET, "/email/verification-status", 200, json!({"verified": false}));
        let (flow, _notifications) = build_flow(&fake).await;

        let outcome = flow.toggle(7).await.unwrap();

        assert_eq!(
            outcome.completed().map(|t| t.offer_id),
            None
        );
        assert_eq!(fake.request_lines(), vec!["GET /email/verification-status"]);
    }

    #[tokio::test]
    async fn test_toggle_maps_server_verification_error() {
        let fake = FakeBackend::start().await;
        fake.on(Method::GET, "/email/verification-status", 200, json!({"verified": true}));
        fake.on(
            Method::POST,
            "/saved-offers/7",
            403,
            json!({"code": "email_not_verified", "message": "Verify your email first"}),
        );
        let (flow, _notifications) = build_flow(&fake).await;

        let outcome = flow.toggle(7).await.unwrap();

        match outcome {
            Guarded::NeedsVerification { action, message } => {
                assert_eq!(action, "save_offer");
                assert_eq!(message.as_deref(), Some("Verify your email first"));
            }
            Guarded::Completed(_) => panic!("expected verification outcome"),
        }
    }

    #[tokio::test]
    async fn test_saved_offers_and_status() {
        let fake = FakeBackend::start().await;
        fake.on(
            Method::GET,
            "/saved-offers",
            200,
            json!({"saved_offers": [offer_json(2, "Designer"), offer_json(5, "Tester")]}),
        );
        let (flow, _notifications) = build_flow(&fake).await;
        let client = fake.client_with_token("tok").await;

        let offers = flow.list().await.unwrap();

        assert_eq!(offers.iter().map(|o| o.id).collect::<Vec<_>>(), vec![2, 5]);
        assert!(client.is_offer_saved(5).await.unwrap());
        assert!(!client.is_offer_saved(7).await.unwrap());
    }

    #[tokio::test]
    async fn test_candidate_offer_is_unwrapped() {
        let fake = FakeBackend::start().await;
        fake.on(
            Method::GET,
            "/candidate/offer/4",
            200,
            json!({"offer": offer_json(4, "Support")}),
        );
        let client = fake.client_with_token("tok").await;

        let offer = client.candidate_offer(4).await.unwrap();

        assert_eq!(offer.id, 4);
        assert_eq!(offer.display_name(), "Support");
    }

    #[test]
    fn test_application_summary_targets() {
        let by_id: ApplicationSummary =
            serde_json::from_value(json!({"id": 1, "offerId": 3})).unwrap();
        let nested: ApplicationSummary =
            serde_json::from_value(json!({"id": 2, "offer": {"id": 8}})).unwrap();

        assert!(by_id.targets(3));
        assert!(!by_id.targets(8));
        assert!(nested.targets(8));
    }
}
