//! Integration tests for delivery, reporting and Q&A endpoints.
//!
//! Uses the real router with seeded in-memory stores and the logging
//! transports, so every dispatch succeeds unless the request is invalid.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use opsrep::adapters::{app_router, AppState};
use opsrep::config::AppConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    let config = AppConfig::default();
    app_router(AppState::in_memory(&config).unwrap(), &config.server)
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, bytes.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, bytes) = call(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, _, bytes) = call(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Weekly brief
// =============================================================================

#[tokio::test]
async fn weekly_brief_defaults_recipients() {
    let app = app();

    let (status, body) = post_json(&app, "/api/delivery/weekly-brief", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["sent"], 1);
    assert_eq!(body["results"][0]["recipient"], "exec@example.com");
}

#[tokio::test]
async fn weekly_brief_explicit_empty_list_uses_defaults() {
    let app = app();

    let (status, body) =
        post_json(&app, "/api/delivery/weekly-brief", json!({"recipients": []})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sent"], 1);
    assert_eq!(body["results"][0]["recipient"], "exec@example.com");
}

#[tokio::test]
async fn weekly_brief_without_body_uses_defaults() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/delivery/weekly-brief")
        .body(Body::empty())
        .unwrap();

    let (status, _, bytes) = call(&app, request).await;
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sent"], 1);
}

#[tokio::test]
async fn weekly_brief_fans_out_to_every_recipient() {
    let app = app();

    let (status, body) = post_json(
        &app,
        "/api/delivery/weekly-brief",
        json!({"recipients": ["ceo@example.com", "cfo@example.com", "coo@example.com"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["sent"], 3);
    let results = body["results"].as_array().unwrap();
    assert!(results.iter().all(|r| r["messageId"].as_str().unwrap().starts_with("email_")));
}

#[tokio::test]
async fn weekly_brief_rejects_malformed_recipient() {
    let app = app();

    let (status, body) = post_json(
        &app,
        "/api/delivery/weekly-brief",
        json!({"recipients": ["not-an-address"]}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid recipient: not-an-address");
}

#[tokio::test]
async fn preview_returns_html_for_latest_summary() {
    let app = app();
    let request = Request::builder()
        .uri("/api/delivery/weekly-brief/preview")
        .body(Body::empty())
        .unwrap();

    let (status, content_type, bytes) = call(&app, request).await;
    let html = String::from_utf8(bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(html.contains("Week 3, 2026"));
    assert!(html.contains("http://localhost:3003"));
}

// =============================================================================
// Slack alerts
// =============================================================================

#[tokio::test]
async fn critical_alerts_lists_only_qualifying_anomalies() {
    let app = app();

    let (status, body) = get_json(&app, "/api/delivery/critical-alerts").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|a| a["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["anom_001"]);
}

#[tokio::test]
async fn slack_alert_defaults_channel() {
    let app = app();

    let (status, body) = post_json(&app, "/api/delivery/slack-alert", json!({"anomalyId": "anom_001"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["recipient"], "#ops-alerts");
    assert!(body["messageId"].as_str().unwrap().starts_with("slack_"));
}

#[tokio::test]
async fn slack_alert_for_unknown_anomaly_is_404() {
    let app = app();

    let (status, body) = post_json(
        &app,
        "/api/delivery/slack-alert",
        json!({"anomalyId": "anom_999", "channel": "#exec"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Anomaly not found");
}

// =============================================================================
// Reporting and Q&A
// =============================================================================

#[tokio::test]
async fn integration_patch_updates_status() {
    let app = app();
    let request = Request::builder()
        .method("PATCH")
        .uri("/api/integrations/int_hubspot")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"status": "connected"}).to_string()))
        .unwrap();

    let (status, _, bytes) = call(&app, request).await;
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "connected");
    assert!(body["lastSync"].is_string());
}

#[tokio::test]
async fn question_round_trip_appends_history() {
    let app = app();

    let (status, answer) = post_json(&app, "/api/questions", json!({"question": "How is hiring going?"})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(answer["id"].as_str().unwrap().starts_with("qa_"));

    let (_, history) = get_json(&app, "/api/questions").await;
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 4);
    assert_eq!(history[3]["id"], answer["id"]);
}

#[tokio::test]
async fn blank_question_is_400() {
    let app = app();

    let (status, body) = post_json(&app, "/api/questions", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Question is required");
}

#[tokio::test]
async fn weekly_changelog_uses_latest_summary() {
    let app = app();

    let (status, body) = get_json(&app, "/api/changelog/weekly").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["period"], "Week 3, 2026");
    assert!(!body["events"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn user_and_kpi_endpoints_serve_seed_data() {
    let app = app();

    let (_, user) = get_json(&app, "/api/user").await;
    assert_eq!(user["name"], "Sarah Chen");

    let (_, kpis) = get_json(&app, "/api/kpis?category=revenue").await;
    let short_names: Vec<&str> = kpis
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|k| k["shortName"].as_str())
        .collect();
    assert_eq!(short_names, vec!["MRR", "ARR"]);
}
