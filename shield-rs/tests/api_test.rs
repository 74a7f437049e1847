//! Integration tests for the HTTP API

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use shield_rs::api::ApiServer;
use shield_rs::scoring::{Analyzer, RuleSet, Thresholds};
use tower::ServiceExt;

fn app() -> Router {
    ApiServer::new(Analyzer::default(), "127.0.0.1:0".to_string()).router()
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::post(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_root_banner() {
    let (status, body) = get_json(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");
    assert!(body["features"].as_array().unwrap().len() >= 3);
    assert!(body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e == "POST /analyze/message"));
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_safe_message() {
    let (status, body) = post_json(
        app(),
        "/analyze/message",
        json!({ "message": "Merhaba, nasılsın?", "sender_phone": "05551234567" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "is_fraud": false,
            "risk_score": 0,
            "reasons": ["Şüpheli içerik tespit edilmedi"],
            "analysis_type": "message"
        })
    );
}

#[tokio::test]
async fn test_phishing_message_without_sender() {
    let (status, body) = post_json(
        app(),
        "/analyze/message",
        json!({ "message": "ACİL! Hesabınız bloke oldu. Şifrenizi girmek için tıklayın: http://sahte-site.com" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_fraud"], true);
    assert_eq!(body["risk_score"], 85);
    assert_eq!(body["analysis_type"], "message");
}

#[tokio::test]
async fn test_phishing_message_with_premium_sender() {
    let (status, body) = post_json(
        app(),
        "/analyze/message",
        json!({
            "message": "ACİL! Hesabınız bloke oldu. Şifrenizi girmek için tıklayın: http://sahte-site.com",
            "sender_phone": "08501234567"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // 85 + 90 / 2, clamped
    assert_eq!(body["risk_score"], 100);
    let reasons = body["reasons"].as_array().unwrap();
    assert_eq!(reasons.last().unwrap(), "Şüpheli numara prefix'i: 0850");
}

#[tokio::test]
async fn test_message_and_phone_blend() {
    let (_, body) = post_json(
        app(),
        "/analyze/message",
        json!({ "message": "Bonus icin https://example.org", "sender_phone": "08501234567" }),
    )
    .await;

    assert_eq!(body["risk_score"], 85);
    assert_eq!(body["is_fraud"], true);
}

#[tokio::test]
async fn test_phone_endpoint() {
    let (status, body) = post_json(app(), "/analyze/phone", json!({ "phone_number": "05551234567" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "is_fraud": false,
            "risk_score": 0,
            "reasons": ["Numara güvenli görünüyor"],
            "analysis_type": "phone"
        })
    );

    let (_, body) = post_json(app(), "/analyze/phone", json!({ "phone_number": "08501234567" })).await;
    assert_eq!(body["risk_score"], 90);
    assert_eq!(body["is_fraud"], true);

    let (_, body) = post_json(app(), "/analyze/phone", json!({ "phone_number": "+905551234567" })).await;
    assert_eq!(body["risk_score"], 0);
}

#[tokio::test]
async fn test_url_endpoint() {
    let (status, body) = post_json(app(), "/analyze/url", json!({ "url": "https://bit.ly/suspicious" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "is_fraud": true,
            "risk_score": 60,
            "reasons": ["Şüpheli domain: bit.ly"],
            "analysis_type": "url"
        })
    );

    let (_, body) = post_json(app(), "/analyze/url", json!({ "url": "http://192.168.1.1/phishing" })).await;
    assert_eq!(body["risk_score"], 70);
    assert_eq!(body["is_fraud"], true);

    let (_, body) = post_json(app(), "/analyze/url", json!({ "url": "https://www.google.com" })).await;
    assert_eq!(body["is_fraud"], false);
    assert_eq!(body["reasons"], json!(["URL güvenli görünüyor"]));
}

#[tokio::test]
async fn test_configured_thresholds_and_rules() {
    let rules = RuleSet {
        suspicious_domains: vec!["evil.example".to_string()],
        ..RuleSet::default()
    };
    let thresholds = Thresholds {
        url: 70,
        ..Thresholds::default()
    };
    let app = ApiServer::new(Analyzer::new(rules, thresholds), "127.0.0.1:0".to_string()).router();

    let (_, body) = post_json(app.clone(), "/analyze/url", json!({ "url": "https://evil.example/x" })).await;
    assert_eq!(body["risk_score"], 60);
    assert_eq!(body["is_fraud"], false);

    let (_, body) = post_json(app, "/analyze/url", json!({ "url": "https://bit.ly/x" })).await;
    assert_eq!(body["risk_score"], 0);
}

#[tokio::test]
async fn test_missing_field_is_rejected_by_extractor() {
    let (status, _) = post_json(app(), "/analyze/phone", json!({ "number": "05551234567" })).await;
    assert!(status.is_client_error());
}
