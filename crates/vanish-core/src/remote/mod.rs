//! Contract with the external generative edit service.
//!
//! The core only knows this boundary: an instruction plus encoded image
//! payload(s) go out; exactly one edited image (or a recognizable refusal)
//! comes back. [`gemini::GeminiClient`] is the production implementation;
//! tests substitute their own [`EditService`].

pub mod gemini;

pub use gemini::GeminiClient;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ENDPOINT, DEFAULT_INSTRUCTION, DEFAULT_MODEL};
use crate::error::Result;

/// Transport configuration for the edit service. Built explicitly by the
/// shell (flag, config file, env, or UI field) and handed to the client
/// constructor; the core never reads ambient credentials.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// API key for the edit service. An empty key is rejected when the
    /// client is constructed.
    pub api_key: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Instruction the shell copies into each edit request unless the user
    /// overrides it.
    #[serde(default = "default_instruction")]
    pub instruction: String,
}

impl RemoteConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: default_endpoint(),
            model: default_model(),
            instruction: default_instruction(),
        }
    }
}

impl Default for RemoteConfig {
    /// Blank credential, defaults everywhere else. What `vanish config`
    /// prints as a template.
    fn default() -> Self {
        Self::new(String::new())
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_instruction() -> String {
    DEFAULT_INSTRUCTION.to_string()
}

/// One encoded image embedded in a request.
#[derive(Clone, Debug)]
pub struct ImagePart {
    pub bytes: Vec<u8>,
    pub mime: String,
}

/// A full edit request: the inpainting instruction plus the image
/// payload(s). The canonical flow sends exactly one part, the flattened
/// composite.
#[derive(Clone, Debug)]
pub struct EditRequest {
    pub instruction: String,
    pub images: Vec<ImagePart>,
}

impl EditRequest {
    pub fn single(instruction: impl Into<String>, bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            images: vec![ImagePart {
                bytes,
                mime: mime.into(),
            }],
        }
    }
}

/// What the service produced. A response without an image part is a
/// [`EditOutcome::Refusal`], never a silent empty result; transport and
/// auth failures travel the error channel instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Image { bytes: Vec<u8>, mime: String },
    Refusal,
}

/// Boundary to the external generative edit service.
pub trait EditService {
    fn edit(&self, request: &EditRequest) -> Result<EditOutcome>;
}
