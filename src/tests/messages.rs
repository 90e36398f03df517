//! Contact message tests
//!
//! Tests 9-12: valid submission plus three kinds of rejected payloads.

use serde_json::{json, Value};
use tracing::info;

use super::assert::{ensure, expect_json, expect_status, CheckResult};
use super::{TestContext, Verdict};
use crate::http::ApiResponse;
use crate::models::TestData;

pub const MESSAGES_PATH: &str = "/messages";

/// Accepted statuses for a rejected submission
const REJECTED: &[u16] = &[400, 422];

fn has_key(body: &Value, key: &str) -> bool {
    body.as_object().is_some_and(|o| o.contains_key(key))
}

/// A `message` field, or any mention of success in the body
pub(crate) fn confirms_success(response: &ApiResponse, body: &Value) -> bool {
    has_key(body, "message") || response.body_contains_ignore_case("success")
}

/// Rejections must explain themselves through `error` or `message`
pub(crate) fn describes_failure(body: &Value) -> bool {
    has_key(body, "error") || has_key(body, "message")
}

/// Test 9: well-formed message is accepted
pub async fn valid(ctx: &TestContext, data: &TestData) -> CheckResult<Verdict> {
    info!("Running Valid Message Test");

    let response = ctx
        .client
        .post_json(MESSAGES_PATH, &data.valid_message)
        .await?;
    expect_status(&response, &[200, 201])?;

    let body = expect_json(&response)?;
    ensure(confirms_success(&response, &body), || {
        format!("response should confirm success, got: {body}")
    })?;

    Ok(Verdict::pass_with(format!("status {}", response.status_code)))
}

/// Test 10: empty fields and a malformed email are rejected with a reason
pub async fn invalid(ctx: &TestContext, data: &TestData) -> CheckResult<Verdict> {
    info!("Running Invalid Message Test");

    let response = ctx
        .client
        .post_json(MESSAGES_PATH, &data.invalid_message)
        .await?;
    expect_status(&response, REJECTED)?;

    let body = expect_json(&response)?;
    ensure(describes_failure(&body), || {
        format!("error response should contain 'error' or 'message', got: {body}")
    })?;

    Ok(Verdict::pass_with(format!("status {}", response.status_code)))
}

/// Test 11: only `name` supplied
pub async fn missing_fields(ctx: &TestContext, data: &TestData) -> CheckResult<Verdict> {
    info!("Running Missing Fields Test");

    let payload = json!({ "name": data.valid_message.name });
    let response = ctx.client.post_json(MESSAGES_PATH, &payload).await?;
    expect_status(&response, REJECTED)?;

    Ok(Verdict::pass_with(format!("status {}", response.status_code)))
}

/// Test 12: `{}`
pub async fn empty_payload(ctx: &TestContext) -> CheckResult<Verdict> {
    info!("Running Empty Payload Test");

    let response = ctx.client.post_json(MESSAGES_PATH, &json!({})).await?;
    expect_status(&response, REJECTED)?;

    Ok(Verdict::pass_with(format!("status {}", response.status_code)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(status_code: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status_code,
            headers: HashMap::new(),
            body: body.to_string(),
            duration_ms: 1.0,
        }
    }

    #[test]
    fn test_success_via_message_field() {
        let resp = response(200, r#"{"message":"Thanks, we got it"}"#);
        let body = resp.json().unwrap();
        assert!(confirms_success(&resp, &body));
    }

    #[test]
    fn test_success_via_text() {
        let resp = response(201, r#"{"id":"01HX","status":"SUCCESS"}"#);
        let body = resp.json().unwrap();
        assert!(confirms_success(&resp, &body));
    }

    #[test]
    fn test_no_success_indicator() {
        let resp = response(201, r#"{"id":"01HX","name":"Test User"}"#);
        let body = resp.json().unwrap();
        assert!(!confirms_success(&resp, &body));
    }

    #[test]
    fn test_describes_failure() {
        assert!(describes_failure(&json!({"error": "invalid email"})));
        assert!(describes_failure(&json!({"message": "The given data was invalid."})));
        assert!(!describes_failure(&json!({"email": ["The email must be valid."]})));
        assert!(!describes_failure(&json!(["error"])));
    }

    #[test]
    fn test_missing_fields_payload_carries_only_name() {
        let data = TestData::fixture();
        let payload = json!({ "name": data.valid_message.name });
        assert_eq!(payload.as_object().unwrap().len(), 1);
        assert_eq!(payload["name"], "Test User");
    }
}
