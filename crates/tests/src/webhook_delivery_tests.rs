use crate::common::{spawn_webhook, unreachable_url, FakePage, PAGE_URL, REDIRECT_URL};
use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use intake::{CaptureSettings, HttpWebhook, LeadCapture, LeadForm, LeadWebhook, Notice, Severity};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{LeadCopy, LeadDraft, LeadError, LeadField, LeadPayload};
use std::time::Duration;

fn sample_payload() -> LeadPayload {
    let lead = LeadDraft::new("Ana Silva", "ana@example.com", "11999999999")
        .validate()
        .unwrap();
    LeadPayload::new(
        lead,
        PAGE_URL,
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap(),
    )
}

#[tokio::test]
async fn posts_json_body_with_content_type() {
    let (url, received) = spawn_webhook(StatusCode::OK).await;

    HttpWebhook::new()
        .deliver(&url, &sample_payload())
        .await
        .unwrap();

    let received = received.lock().await;
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0].content_type.as_deref(),
        Some("application/json")
    );
    assert_eq!(
        received[0].body,
        json!({
            "name": "Ana Silva",
            "email": "ana@example.com",
            "phone": "11999999999",
            "source": PAGE_URL,
            "timestamp": "2026-10-18T12:00:00.000Z",
        })
    );
}

#[tokio::test]
async fn any_2xx_status_is_acceptance() {
    for status in [StatusCode::OK, StatusCode::CREATED, StatusCode::NO_CONTENT] {
        let (url, _) = spawn_webhook(status).await;
        let result = HttpWebhook::new().deliver(&url, &sample_payload()).await;
        assert_eq!(result, Ok(()), "status {status}");
    }
}

#[tokio::test]
async fn non_success_status_is_rejected() {
    for status in [
        StatusCode::BAD_REQUEST,
        StatusCode::NOT_FOUND,
        StatusCode::INTERNAL_SERVER_ERROR,
    ] {
        let (url, received) = spawn_webhook(status).await;
        let result = HttpWebhook::new().deliver(&url, &sample_payload()).await;
        assert_eq!(
            result,
            Err(LeadError::Rejected {
                status: status.as_u16()
            })
        );
        assert_eq!(received.lock().await.len(), 1);
    }
}

#[tokio::test]
async fn unreachable_webhook_is_a_transport_error() {
    let url = unreachable_url().await;

    let result = HttpWebhook::new().deliver(&url, &sample_payload()).await;

    let err = result.unwrap_err();
    assert!(matches!(err, LeadError::Transport(_)), "got {err:?}");
    let message = err.transport_message().expect("reqwest errors carry text");
    assert!(!message.is_empty());

    let notice = Notice::from_result(&Err(err.clone()), &LeadCopy::default());
    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(notice.description, message);
}

#[tokio::test]
async fn full_flow_against_local_webhook() {
    let (url, received) = spawn_webhook(StatusCode::OK).await;
    let page = FakePage::default();
    let capture = LeadCapture::new(
        HttpWebhook::new(),
        page.clone(),
        CaptureSettings::new(url, REDIRECT_URL),
    );
    let mut form = LeadForm::default();
    form.edit(LeadField::Name, "Ana Silva");
    form.edit(LeadField::Email, "ana@example.com");
    form.edit(LeadField::Phone, "11999999999");

    let draft = form.begin().unwrap();
    let result = capture.submit(&draft).await;
    form.finish(&result);
    assert!(result.is_ok());

    let received = received.lock().await;
    assert_eq!(received.len(), 1);
    let body = &received[0].body;
    assert_eq!(body["name"], "Ana Silva");
    assert_eq!(body["email"], "ana@example.com");
    assert_eq!(body["phone"], "11999999999");
    assert_eq!(body["source"], PAGE_URL);
    assert!(body["timestamp"].as_str().is_some());

    assert!(form.draft.is_empty());
    assert!(!form.submitting);
    assert_eq!(
        *page.redirects.borrow(),
        vec![(REDIRECT_URL.to_string(), Duration::from_millis(1500))]
    );
}

#[tokio::test]
async fn failed_flow_against_local_webhook_keeps_page() {
    let (url, _) = spawn_webhook(StatusCode::BAD_GATEWAY).await;
    let page = FakePage::default();
    let capture = LeadCapture::new(
        HttpWebhook::new(),
        page.clone(),
        CaptureSettings::new(url, REDIRECT_URL),
    );

    let result = capture
        .submit(&LeadDraft::new("Ana Silva", "ana@example.com", "11999999999"))
        .await;

    assert_eq!(result, Err(LeadError::Rejected { status: 502 }));
    assert_eq!(page.redirect_count(), 0);
}
