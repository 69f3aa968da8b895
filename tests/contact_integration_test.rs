use diamondali_site::adapters::http::HttpContactGateway;
use diamondali_site::core::contact_form::{FormPhase, NoticeKind, SUCCESS_TITLE};
use diamondali_site::domain::model::ContactFormDraft;
use diamondali_site::domain::ports::ContactGateway;
use diamondali_site::utils::error::INVALID_INPUT_MESSAGE;
use diamondali_site::{ContactForm, SiteConfig, SubmissionError, SubmitOutcome};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};

fn sample_draft() -> ContactFormDraft {
    ContactFormDraft::new(
        "Sarah Johnson",
        "sarah.johnson@example.com",
        "I'm interested in your VIP web development services.",
    )
}

fn gateway_for(server: &MockServer) -> HttpContactGateway {
    HttpContactGateway::new(&SiteConfig::new(server.base_url())).unwrap()
}

fn form_for(server: &MockServer) -> ContactForm<HttpContactGateway> {
    let form = ContactForm::new(gateway_for(server));
    form.fill(sample_draft());
    form
}

#[tokio::test]
async fn test_submit_posts_draft_as_json() {
    let server = MockServer::start_async().await;
    let contact_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact").json_body(json!({
                "name": "Sarah Johnson",
                "email": "sarah.johnson@example.com",
                "message": "I'm interested in your VIP web development services."
            }));
            then.status(200).json_body(json!({
                "id": "c0ffee",
                "name": "Sarah Johnson",
                "email": "sarah.johnson@example.com",
                "message": "I'm interested in your VIP web development services.",
                "timestamp": "2025-03-01T10:15:30.123456",
                "ip_address": "127.0.0.1"
            }));
        })
        .await;

    let form = form_for(&server);
    let outcome = form.submit().await;

    contact_mock.assert_async().await;
    match outcome {
        SubmitOutcome::Sent(ack) => assert_eq!(ack.id.as_deref(), Some("c0ffee")),
        other => panic!("expected success, got {:?}", other),
    }
    assert_eq!(form.draft(), ContactFormDraft::new("", "", ""));
    let notice = form.last_notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.title, SUCCESS_TITLE);
}

#[tokio::test]
async fn test_success_without_body() {
    let server = MockServer::start_async().await;
    let contact_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(204);
        })
        .await;

    let ack = assert_ok!(gateway_for(&server).submit_contact(&sample_draft()).await);

    contact_mock.assert_async().await;
    assert!(ack.id.is_none());
}

#[tokio::test]
async fn test_rate_limited_preserves_draft() {
    let server = MockServer::start_async().await;
    let contact_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(429).json_body(json!({
                "detail": "Too many messages sent. Please wait before sending another message."
            }));
        })
        .await;

    let form = form_for(&server);
    let outcome = form.submit().await;

    contact_mock.assert_async().await;
    assert!(matches!(
        outcome,
        SubmitOutcome::Rejected(SubmissionError::RateLimited { .. })
    ));
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.draft(), sample_draft());
    let notice = form.last_notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.description.contains("Too many messages"));
}

#[tokio::test]
async fn test_bad_request_surfaces_detail() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(400).json_body(json!({ "detail": "Email invalid" }));
        })
        .await;

    let form = form_for(&server);
    form.submit().await;

    assert!(form.last_notice().unwrap().description.contains("Email invalid"));
    assert_eq!(form.draft(), sample_draft());
}

#[tokio::test]
async fn test_bad_request_without_detail_is_generic() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(400).body("Bad Request");
        })
        .await;

    let error = assert_err!(gateway_for(&server).submit_contact(&sample_draft()).await);

    assert_eq!(error, SubmissionError::InvalidInput { detail: None });
    assert_eq!(error.user_message(), INVALID_INPUT_MESSAGE);
}

#[tokio::test]
async fn test_validation_error_list_is_generic_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(422).json_body(json!({
                "detail": [{"loc": ["body", "email"], "msg": "value is not a valid email address"}]
            }));
        })
        .await;

    let error = assert_err!(gateway_for(&server).submit_contact(&sample_draft()).await);
    assert!(matches!(
        error,
        SubmissionError::SubmissionFailed {
            status: Some(422),
            ..
        }
    ));
}

#[tokio::test]
async fn test_server_error_is_generic_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(500).json_body(json!({
                "detail": "Failed to submit message. Please try again later."
            }));
        })
        .await;

    let form = form_for(&server);
    let outcome = form.submit().await;

    assert!(matches!(
        outcome,
        SubmitOutcome::Rejected(SubmissionError::SubmissionFailed {
            status: Some(500),
            ..
        })
    ));
    assert_eq!(form.draft(), sample_draft());
}

#[tokio::test]
async fn test_unreachable_backend_is_generic_failure() {
    let gateway = HttpContactGateway::new(&SiteConfig::new("http://127.0.0.1:1")).unwrap();

    let error = assert_err!(gateway.submit_contact(&sample_draft()).await);
    assert!(matches!(
        error,
        SubmissionError::SubmissionFailed { status: None, .. }
    ));
}

#[tokio::test]
async fn test_timeout_is_generic_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(200).delay(Duration::from_secs(2));
        })
        .await;

    let config = SiteConfig::new(server.base_url()).with_request_timeout(Duration::from_millis(200));
    let gateway = HttpContactGateway::new(&config).unwrap();

    let error = assert_err!(gateway.submit_contact(&sample_draft()).await);
    assert_eq!(
        error,
        SubmissionError::SubmissionFailed {
            status: None,
            reason: "request timed out".to_string()
        }
    );
}

#[tokio::test]
async fn test_double_submit_sends_one_request() {
    let server = MockServer::start_async().await;
    let contact_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(200)
                .json_body(json!({}))
                .delay(Duration::from_millis(300));
        })
        .await;

    let form = form_for(&server);
    let (first, second) = tokio::join!(form.submit(), form.submit());

    assert!(matches!(first, SubmitOutcome::Sent(_)));
    assert_eq!(second, SubmitOutcome::Ignored);
    assert_eq!(contact_mock.hits_async().await, 1);
}

#[tokio::test]
async fn test_incomplete_draft_sends_nothing() {
    let server = MockServer::start_async().await;
    let contact_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(200);
        })
        .await;

    let form = ContactForm::new(gateway_for(&server));
    form.set_name("Sarah Johnson");
    form.set_email("sarah.johnson@example.com");

    let outcome = form.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(SubmissionError::MissingField { field: "message" })
    );
    assert_eq!(contact_mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_base_url_with_trailing_slash() {
    let server = MockServer::start_async().await;
    let contact_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(200);
        })
        .await;

    let config = SiteConfig::new(format!("{}/", server.base_url()));
    let gateway = HttpContactGateway::new(&config).unwrap();
    assert_ok!(gateway.submit_contact(&sample_draft()).await);

    contact_mock.assert_async().await;
}
