//! Integration tests for the resource id service.
//!
//! Requests go through the full router (middleware included) via `oneshot`.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use graph_resource_ids::{app::build_router, config::Config, state::AppState};
use serde_json::{Value, json};
use tower::ServiceExt;

const OVERRIDE: &str = "stable.userIdInferenceClassificationOverride";
const ATTACHMENT: &str = "beta.groupIdCalendarCalendarViewIdExceptionOccurrenceIdAttachment";

fn test_app() -> Router {
    build_router(AppState::default(), &Config::default())
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_returns_ok() {
    let (status, body) = send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let response = test_app().oneshot(get("/health")).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_list_templates() {
    let (status, body) = send(get("/api/v1/templates")).await;
    assert_eq!(status, StatusCode::OK);

    let templates = body.as_array().unwrap();
    assert_eq!(templates.len(), 3);

    let attachment = templates
        .iter()
        .find(|t| t["name"] == ATTACHMENT)
        .unwrap();
    assert_eq!(
        attachment["template"],
        "/groups/{groupId}/calendar/calendarView/{eventId}/exceptionOccurrences/{eventId1}/attachments/{attachmentId}"
    );
    assert_eq!(attachment["segments"].as_array().unwrap().len(), 9);
    assert_eq!(
        attachment["segments"][0],
        json!({"name": "groups", "kind": "static", "value": "groups"})
    );
    assert_eq!(
        attachment["segments"][1],
        json!({"name": "groupId", "kind": "user_specified"})
    );
}

#[tokio::test]
async fn test_parse_returns_canonical_id_and_segments() {
    let (status, body) = send(post_json(
        &format!("/api/v1/templates/{OVERRIDE}/parse"),
        json!({"input": "users/u1/inferenceClassification/overrides/o1/"}),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "/users/u1/inferenceClassification/overrides/o1");
    assert_eq!(body["description"], "User Id Inference Classification Override");
    assert_eq!(
        body["segments"],
        json!([
            {"name": "userId", "value": "u1"},
            {"name": "inferenceClassificationOverrideId", "value": "o1"}
        ])
    );
}

#[tokio::test]
async fn test_parse_user_input_is_case_sensitive() {
    let input = "/Groups/g1/calendar/calendarView/e1/exceptionOccurrences/e2/attachments/a1";

    let (status, body) = send(post_json(
        &format!("/api/v1/templates/{ATTACHMENT}/parse"),
        json!({"input": input}),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_RESOURCE_ID");

    let (status, body) = send(post_json(
        &format!("/api/v1/templates/{ATTACHMENT}/parse"),
        json!({"input": input, "source": "api_response"}),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["id"],
        "/groups/g1/calendar/calendarView/e1/exceptionOccurrences/e2/attachments/a1"
    );
}

#[tokio::test]
async fn test_parse_unknown_template_is_not_found() {
    let (status, body) = send(post_json(
        "/api/v1/templates/stable.nothing/parse",
        json!({"input": "/users/u1"}),
    ))
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_parse_empty_input_is_bad_request() {
    let (status, body) = send(post_json(
        &format!("/api/v1/templates/{OVERRIDE}/parse"),
        json!({"input": "   "}),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_format_emits_template_literals() {
    let (status, body) = send(post_json(
        &format!("/api/v1/templates/{ATTACHMENT}/format"),
        json!({"segments": {
            "groupId": "g1",
            "eventId": "e1",
            "eventId1": "e2",
            "attachmentId": "a1"
        }}),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["id"],
        "/groups/g1/calendar/calendarView/e1/exceptionOccurrences/e2/attachments/a1"
    );
}

#[tokio::test]
async fn test_format_missing_segment_is_bad_request() {
    let (status, body) = send(post_json(
        &format!("/api/v1/templates/{OVERRIDE}/format"),
        json!({"segments": {"userId": "u1"}}),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "MISSING_SEGMENT");
}

#[tokio::test]
async fn test_validate_non_string_reports_error() {
    let (status, body) = send(post_json(
        &format!("/api/v1/templates/{OVERRIDE}/validate"),
        json!({"value": 42, "key": "key"}),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["warnings"], json!([]));
    assert_eq!(body["errors"], json!(["expected \"key\" to be a string"]));
}

#[tokio::test]
async fn test_validate_reports_empty_segment() {
    let (status, body) = send(post_json(
        &format!("/api/v1/templates/{OVERRIDE}/validate"),
        json!({"value": "/users//inferenceClassification/overrides/o1"}),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].as_str().unwrap().contains("\"userId\""));
}

#[tokio::test]
async fn test_typed_lookup_describes_id() {
    let (status, body) = send(get(&format!(
        "/api/v1/ids/{OVERRIDE}/users/u1/inferenceClassification/overrides/o1"
    )))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "/users/u1/inferenceClassification/overrides/o1");
    assert_eq!(
        body["description"],
        "User Id Inference Classification Override (User: \"u1\"\nInference Classification Override: \"o1\")"
    );
}

#[tokio::test]
async fn test_typed_lookup_rejects_wrong_shape() {
    let (status, body) = send(get(&format!("/api/v1/ids/{OVERRIDE}/users/u1"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_RESOURCE_ID");
}
