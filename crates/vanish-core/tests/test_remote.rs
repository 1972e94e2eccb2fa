use vanish_core::consts::{DEFAULT_ENDPOINT, DEFAULT_INSTRUCTION, DEFAULT_MODEL};
use vanish_core::error::VanishError;
use vanish_core::remote::gemini::{build_request_body, classify_http_failure, parse_response_body};
use vanish_core::remote::{EditOutcome, EditRequest, GeminiClient, ImagePart, RemoteConfig};

// ---------------------------------------------------------------------------
// Request construction
// ---------------------------------------------------------------------------

#[test]
fn test_request_body_carries_instruction_then_image() {
    let request = EditRequest::single("remove the marked object", vec![1, 2, 3], "image/png");
    let body = build_request_body(&request);

    let parts = &body["contents"][0]["parts"];
    assert_eq!(parts[0]["text"], "remove the marked object");
    assert_eq!(parts[1]["inline_data"]["mime_type"], "image/png");
    assert_eq!(parts[1]["inline_data"]["data"], "AQID");
}

#[test]
fn test_request_body_keeps_image_order() {
    let request = EditRequest {
        instruction: "blend".into(),
        images: vec![
            ImagePart {
                bytes: vec![1, 2, 3],
                mime: "image/jpeg".into(),
            },
            ImagePart {
                bytes: vec![4, 5, 6],
                mime: "image/png".into(),
            },
        ],
    };
    let body = build_request_body(&request);

    let parts = body["contents"][0]["parts"]
        .as_array()
        .expect("parts array");
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[1]["inline_data"]["mime_type"], "image/jpeg");
    assert_eq!(parts[2]["inline_data"]["mime_type"], "image/png");
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

#[test]
fn test_response_with_camel_case_image_part() {
    let body = r#"{"candidates":[{"content":{"parts":[
        {"text":"done"},
        {"inlineData":{"mimeType":"image/png","data":"AQID"}}
    ]}}]}"#;

    let outcome = parse_response_body(body);
    assert_eq!(
        outcome,
        EditOutcome::Image {
            bytes: vec![1, 2, 3],
            mime: "image/png".into(),
        }
    );
}

#[test]
fn test_response_with_snake_case_image_part() {
    let body = r#"{"candidates":[{"content":{"parts":[
        {"inline_data":{"mime_type":"image/jpeg","data":"AQID"}}
    ]}}]}"#;

    let outcome = parse_response_body(body);
    assert!(matches!(outcome, EditOutcome::Image { ref mime, .. } if mime == "image/jpeg"));
}

#[test]
fn test_text_only_response_is_a_refusal() {
    let body = r#"{"candidates":[{"content":{"parts":[{"text":"I cannot edit this image."}]}}]}"#;
    assert_eq!(parse_response_body(body), EditOutcome::Refusal);
}

#[test]
fn test_empty_and_malformed_responses_are_refusals() {
    assert_eq!(parse_response_body("{}"), EditOutcome::Refusal);
    assert_eq!(parse_response_body(r#"{"candidates":[]}"#), EditOutcome::Refusal);
    assert_eq!(parse_response_body("not json at all"), EditOutcome::Refusal);
}

#[test]
fn test_undecodable_image_data_is_skipped() {
    let body = r#"{"candidates":[{"content":{"parts":[
        {"inlineData":{"mimeType":"image/png","data":"!!!not-base64!!!"}}
    ]}}]}"#;
    assert_eq!(parse_response_body(body), EditOutcome::Refusal);

    let recovered = r#"{"candidates":[{"content":{"parts":[
        {"inlineData":{"mimeType":"image/png","data":"!!!not-base64!!!"}},
        {"inlineData":{"mimeType":"image/png","data":"AQID"}}
    ]}}]}"#;
    assert!(matches!(
        parse_response_body(recovered),
        EditOutcome::Image { ref bytes, .. } if bytes == &[1, 2, 3]
    ));
}

// ---------------------------------------------------------------------------
// Failure classification
// ---------------------------------------------------------------------------

#[test]
fn test_auth_statuses_classify_as_auth() {
    assert!(matches!(classify_http_failure(401, ""), VanishError::Auth(_)));
    assert!(matches!(classify_http_failure(403, ""), VanishError::Auth(_)));
}

#[test]
fn test_invalid_key_message_classifies_as_auth() {
    let body = r#"{"error":{"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
    let err = classify_http_failure(400, body);
    assert!(matches!(err, VanishError::Auth(_)));
    let s = err.to_string();
    assert!(s.contains("API key not valid"), "got: {s}");
}

#[test]
fn test_other_statuses_classify_as_network() {
    let err = classify_http_failure(500, r#"{"error":{"message":"Internal error"}}"#);
    assert!(matches!(err, VanishError::Network(_)));
    let s = err.to_string();
    assert!(s.contains("Internal error"), "got: {s}");

    let err = classify_http_failure(429, "too many requests");
    assert!(matches!(err, VanishError::Network(_)));
    let s = err.to_string();
    assert!(s.contains("HTTP 429"), "got: {s}");
}

// ---------------------------------------------------------------------------
// Client construction and configuration
// ---------------------------------------------------------------------------

#[test]
fn test_client_requires_a_credential_up_front() {
    let err = GeminiClient::new(RemoteConfig::default()).unwrap_err();
    assert!(matches!(err, VanishError::MissingCredential));

    let err = GeminiClient::new(RemoteConfig::new("   ")).unwrap_err();
    assert!(matches!(err, VanishError::MissingCredential));

    assert!(GeminiClient::new(RemoteConfig::new("test-key")).is_ok());
}

#[test]
fn test_config_fills_defaults_for_missing_fields() {
    let config: RemoteConfig =
        serde_json::from_str(r#"{"api_key":"k"}"#).expect("parse config");
    assert_eq!(config.api_key, "k");
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.instruction, DEFAULT_INSTRUCTION);
}
