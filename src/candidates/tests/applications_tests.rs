// src/candidates/tests/applications_tests.rs

#[cfg(test)]
mod tests {
    use crate::candidates::{ApplicationFlow, SavedOffersFlow};
    use crate::common::{ApiError, ErrorKind};
    use crate::notifications::{ChannelBackend, NotificationContext};
    use crate::offers::models::ApplyRequest;
    use crate::testing::{offer_json, FakeBackend};
    use crate::verification::{EmailVerificationGuard, Guarded};
    use axum::http::Method;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    fn apply_request(offer_id: u64) -> ApplyRequest {
        ApplyRequest {
            offer_id,
            phone: "+34 600 123 456".to_string(),
            email: "ana@example.com".to_string(),
            cover_letter: "I would love to join the team.".to_string(),
            data_consent: true,
        }
    }

    async fn build_flow(fake: &FakeBackend) -> (ApplicationFlow, NotificationContext) {
        let client = fake.client_with_token("tok").await;
        let (backend, _delivered) = ChannelBackend::new();
        let notifications = NotificationContext::new(Arc::new(backend));
        let flow = ApplicationFlow::new(
            client.clone(),
            EmailVerificationGuard::new(client),
            notifications.clone(),
            Duration::from_secs(3600),
        );
        (flow, notifications)
    }

    // ============================================================================
    // Unsave-before-apply
    // ============================================================================

    #[tokio::test]
    async fn test_apply_to_saved_offer_unsaves_first() {
        let fake = FakeBackend::start().await;
        fake.on(
            Method::GET,
            "/saved-offers",
            200,
            json!({"savedOffers": [offer_json(7, "Rust Developer")]}),
        );
        fake.on(
            Method::POST,
            "/saved-offers/7",
            200,
            json!({"message": "Offer removed from saved", "saved": false}),
        );
        fake.on(
            Method::POST,
            "/offers/7/apply",
            201,
            json!({"message": "Application submitted"}),
        );
        let client = fake.client_with_token("tok").await;

        let response = client.apply_to_offer(&apply_request(7)).await.unwrap();

        assert_eq!(
            fake.request_lines(),
            vec!["GET /saved-offers", "POST /saved-offers/7", "POST /offers/7/apply"]
        );
        assert_eq!(response.message.as_deref(), Some("Application submitted"));
        assert!(response.extra.is_empty());

        let body = fake.last_request().json();
        assert_eq!(body["offer_id"], 7);
        assert_eq!(body["cl"], "I would love to join the team.");
        assert_eq!(body["data_consent"], true);
    }

    #[tokio::test]
    async fn test_apply_to_unsaved_offer_skips_toggle() {
        let fake = FakeBackend::start().await;
        fake.on(
            Method::GET,
            "/saved-offers",
            200,
            json!({"savedOffers": [offer_json(3, "Other")]}),
        );
        fake.on(Method::POST, "/offers/7/apply", 201, json!({"message": "ok"}));
        let client = fake.client_with_token("tok").await;

        client.apply_to_offer(&apply_request(7)).await.unwrap();

        assert_eq!(
            fake.request_lines(),
            vec!["GET /saved-offers", "POST /offers/7/apply"]
        );
    }

    #[tokio::test]
    async fn test_failed_unsave_does_not_block_apply() {
        let fake = FakeBackend::start().await;
        fake.on(
            Method::GET,
            "/saved-offers",
            200,
            json!({"savedOffers": [offer_json(7, "Rust Developer")]}),
        );
        fake.on(Method::POST, "/saved-offers/7", 500, json!({"message": "Server Error"}));
        fake.on(Method::POST, "/offers/7/apply", 201, json!({"message": "ok"}));
        let client = fake.client_with_token("tok").await;

        let response = client.apply_to_offer(&apply_request(7)).await.unwrap();

        assert_eq!(response.message.as_deref(), Some("ok"));
        let lines = fake.request_lines();
        assert_eq!(
            lines.iter().filter(|l| *l == "POST /saved-offers/7").count(),
            1
        );
        assert_eq!(lines.last().map(String::as_str), Some("POST /offers/7/apply"));
    }

    #[tokio::test]
    async fn test_failed_saved_check_does_not_block_apply() {
        let fake = FakeBackend::start().await;
        fake.on(Method::GET, "/saved-offers", 503, json!({"message": "Unavailable"}));
        fake.on(Method::POST, "/offers/7/apply", 201, json!({"message": "ok"}));
        let client = fake.client_with_token("tok").await;

        client.apply_to_offer(&apply_request(7)).await.unwrap();

        assert_eq!(
            fake.request_lines(),
            vec!["GET /saved-offers", "POST /offers/7/apply"]
        );
    }

    #[tokio::test]
    async fn test_failed_apply_leaves_offer_unsaved() {
        let fake = FakeBackend::start().await;
        fake.on(
            Method::GET,
            "/saved-offers",
            200,
            json!({"savedOffers": [offer_json(7, "Rust Developer")]}),
        );
        fake.on(Method::POST, "/saved-offers/7", 200, json!({"saved": false}));
        fake.on(
            Method::POST,
            "/offers/7/apply",
            422,
            json!({"message": "You already applied to this offer."}),
        );
        let client = fake.client_with_token("tok").await;

        let err = client.apply_to_offer(&apply_request(7)).await.unwrap_err();

        assert_eq!(err.message(), "You already applied to this offer.");
        assert_eq!(
            fake.request_lines(),
            vec!["GET /saved-offers", "POST /saved-offers/7", "POST /offers/7/apply"]
        );
    }

    // ============================================================================
    // ApplicationFlow
    // ============================================================================

    #[tokio::test]
    async fn test_flow_applies_and_schedules_follow_up() {
        let fake = FakeBackend::start().await;
        fake.on(Method::GET, "/email/verification-status", 200, json!({"verified": true}));
        fake.on(Method::GET, "/saved-offers", 200, json!({"savedOffers": []}));
        fake.on(Method::POST, "/offers/7/apply", 201, json!({"message": "ok"}));
        fake.on(Method::GET, "/offers/7", 200, offer_json(7, "Rust Developer"));
        let (flow, notifications) = build_flow(&fake).await;

        let outcome = flow.apply(&apply_request(7)).await.unwrap();

        assert!(outcome.is_completed());
        assert_eq!(
            fake.request_lines(),
            vec![
                "GET /email/verification-status",
                "GET /saved-offers",
                "POST /offers/7/apply",
                "GET /offers/7",
            ]
        );
        assert_eq!(notifications.pending().await.len(), 1);
        notifications.cancel_all().await;
    }

    #[tokio::test]
    async fn test_applying_drops_saved_offer_reminder() {
        let fake = FakeBackend::start().await;
        fake.on(Method::GET, "/email/verification-status", 200, json!({"verified": true}));
        fake.on(Method::POST, "/saved-offers/7", 200, json!({"saved": true}));
        fake.on(Method::POST, "/saved-offers/7", 200, json!({"saved": false}));
        fake.on(
            Method::GET,
            "/saved-offers",
            200,
            json!({"savedOffers": [offer_json(7, "Rust")]}),
        );
        fake.on(Method::POST, "/offers/7/apply", 201, json!({"message": "ok"}));
        fake.on(Method::GET, "/offers/7", 200, offer_json(7, "Rust"));
        let (flow, notifications) = build_flow(&fake).await;
        let client = fake.client_with_token("tok").await;
        let saved_flow = SavedOffersFlow::new(
            client.clone(),
            EmailVerificationGuard::new(client),
            notifications.clone(),
            Duration::from_secs(3600),
        );

        let saved = saved_flow.toggle(7).await.unwrap().completed().unwrap();
        let saved_reminder = saved.reminder.expect("saved offer reminder");

        let outcome = flow.apply(&apply_request(7)).await.unwrap();

        assert!(outcome.is_completed());
        assert!(fake
            .request_lines()
            .ends_with(&[
                "GET /email/verification-status".to_string(),
                "GET /saved-offers".to_string(),
                "POST /saved-offers/7".to_string(),
                "POST /offers/7/apply".to_string(),
                "GET /offers/7".to_string(),
            ]));
        let pending = notifications.pending().await;
        assert_eq!(pending.len(), 1);
        assert!(!pending.contains(&saved_reminder));
        assert!(!notifications.cancel_notification(&saved_reminder).await);
        notifications.cancel_all().await;
    }

    #[tokio::test]
    async fn test_flow_stops_when_email_unverified() {
        let fake = FakeBackend::start().await;
        fake.on(Method::GET, "/email/verification-status", 200, json!({"verified": false}));
        let (flow, notifications) = build_flow(&fake).await;

        let outcome = flow.apply(&apply_request(7)).await.unwrap();

        assert!(matches!(outcome, Guarded::NeedsVerification { .. }));
        assert_eq!(fake.request_lines(), vec!["GET /email/verification-status"]);
        assert!(notifications.pending().await.is_empty());
    }

    #[tokio::test]
    async fn test_flow_maps_server_verification_error() {
        let fake = FakeBackend::start().await;
        fake.on(Method::GET, "/email/verification-status", 500, json!({}));
        fake.on(Method::GET, "/saved-offers", 200, json!({"savedOffers": []}));
        fake.on(
            Method::POST,
            "/offers/7/apply",
            403,
            json!({"message": "Your email address is not verified."}),
        );
        let (flow, notifications) = build_flow(&fake).await;

        let outcome = flow.apply(&apply_request(7)).await.unwrap();

        assert_eq!(
            outcome,
            Guarded::NeedsVerification {
                action: "apply".to_string(),
                message: Some("Your email address is not verified.".to_string()),
            }
        );
        assert!(notifications.pending().await.is_empty());
    }

    #[tokio::test]
    async fn test_flow_rejects_invalid_form_without_requests() {
        let fake = FakeBackend::start().await;
        let (flow, _notifications) = build_flow(&fake).await;

        let mut request = apply_request(7);
        request.data_consent = false;
        request.cover_letter = "x".repeat(2001);

        let err = flow.apply(&request).await.unwrap_err();

        assert!(matches!(err, ApiError::InvalidInput(_)));
        match err.kind() {
            ErrorKind::Validation { fields, .. } => {
                assert!(fields.contains_key("data_consent"));
                assert!(fields.contains_key("cl"));
                assert!(!fields.contains_key("phone"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(fake.requests().is_empty());
    }

    #[tokio::test]
    async fn test_has_applied_reads_dashboard() {
        let fake = FakeBackend::start().await;
        fake.on(
            Method::GET,
            "/candidate/dashboard",
            200,
            json!({
                "applications": [
                    {"id": 1, "offer_id": 3, "status": "pending"},
                    {"id": 2, "offer": {"id": 9, "name": "Designer"}}
                ],
                "stats": {"total": 2}
            }),
        );
        let (flow, _notifications) = build_flow(&fake).await;

        assert!(flow.has_applied(3).await.unwrap());
        assert!(flow.has_applied(9).await.unwrap());
        assert!(!flow.has_applied(7).await.unwrap());
    }
}
