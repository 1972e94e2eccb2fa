//! Gemini `generateContent` client: one POST per edit, inline base64 image
//! parts both ways.

use std::io::Read;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::{EditOutcome, EditRequest, EditService, RemoteConfig};
use crate::error::{Result, VanishError};

#[derive(Debug)]
pub struct GeminiClient {
    config: RemoteConfig,
    agent: ureq::Agent,
}

impl GeminiClient {
    /// Build a client from an explicit configuration. A blank API key is a
    /// constructor-time error, not a deferred runtime surprise.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(VanishError::MissingCredential);
        }
        Ok(Self {
            config,
            agent: ureq::agent(),
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl EditService for GeminiClient {
    fn edit(&self, request: &EditRequest) -> Result<EditOutcome> {
        let body = build_request_body(request);
        debug!(
            model = %self.config.model,
            parts = request.images.len(),
            "sending edit request"
        );

        let response = self
            .agent
            .post(&self.url())
            .set("x-goog-api-key", &self.config.api_key)
            .set("Content-Type", "application/json")
            .send_string(&body.to_string());

        match response {
            Ok(resp) => {
                let mut text = String::new();
                resp.into_reader()
                    .read_to_string(&mut text)
                    .map_err(|e| VanishError::Network(e.to_string()))?;
                Ok(parse_response_body(&text))
            }
            Err(ureq::Error::Status(status, resp)) => {
                let text = resp.into_string().unwrap_or_default();
                Err(classify_http_failure(status, &text))
            }
            Err(e) => Err(VanishError::Network(e.to_string())),
        }
    }
}

/// Assemble the `generateContent` JSON body: one text part carrying the
/// instruction, then one inline-data part per image.
pub fn build_request_body(request: &EditRequest) -> serde_json::Value {
    let mut parts = vec![json!({ "text": request.instruction })];
    for image in &request.images {
        parts.push(json!({
            "inline_data": {
                "mime_type": image.mime,
                "data": STANDARD.encode(&image.bytes),
            }
        }));
    }
    json!({ "contents": [{ "parts": parts }] })
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(rename = "inlineData", alias = "inline_data")]
    inline_data: Option<InlineData>,
}

#[derive(Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType", alias = "mime_type")]
    mime_type: String,
    data: String,
}

/// Interpret a 2xx response body. The first decodable inline image part
/// wins; a response without one (safety block, text-only answer, or a shape
/// we don't recognize) is a refusal, never a silent empty result.
pub fn parse_response_body(body: &str) -> EditOutcome {
    let Ok(parsed) = serde_json::from_str::<GenerateResponse>(body) else {
        return EditOutcome::Refusal;
    };
    for candidate in parsed.candidates {
        let Some(content) = candidate.content else {
            continue;
        };
        for part in content.parts {
            let Some(inline) = part.inline_data else {
                continue;
            };
            if let Ok(bytes) = STANDARD.decode(inline.data.as_bytes()) {
                return EditOutcome::Image {
                    bytes,
                    mime: inline.mime_type,
                };
            }
        }
    }
    EditOutcome::Refusal
}

/// Classify a non-2xx response. 401/403 and API-key error strings mean the
/// credential was rejected; everything else is a retryable service failure.
pub fn classify_http_failure(status: u16, body: &str) -> VanishError {
    let message = extract_error_message(body).unwrap_or_else(|| format!("HTTP {status}"));
    let key_rejected = status == 401
        || status == 403
        || message.contains("API key")
        || message.contains("API_KEY_INVALID");
    if key_rejected {
        VanishError::Auth(message)
    } else {
        VanishError::Network(message)
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_owned)
}
