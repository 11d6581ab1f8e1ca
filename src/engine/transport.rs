use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{KioskError, Result};

/// Connectivity probe deadline. Kept short so an offline backend is
/// detected quickly at startup.
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Sampling options sent with every generation request.
#[derive(Debug, Serialize)]
pub struct GenerateOptions {
    pub temperature: f32,
    pub num_ctx: u32,
}

/// Wire payload for the backend's `/api/generate` endpoint.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    pub options: GenerateOptions,

    /// Structured-output directive; only sent in structured mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
}

/// Response envelope; the generated text lives in `response`.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Low-level dispatch seam between the gateway and the network.
///
/// Production code uses [`HttpTransport`]; tests substitute fakes to
/// assert call counts and inject failures.
pub trait Transport: Send + Sync {
    /// Lightweight connectivity check.
    fn probe(&self) -> bool;

    /// Send one generation request and return the raw response text.
    fn dispatch(&self, request: &GenerateRequest) -> Result<String>;
}

/// Blocking HTTP transport for an Ollama-style backend.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

impl Transport for HttpTransport {
    fn probe(&self) -> bool {
        self.client
            .get(&self.base_url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .map(|resp| resp.status().is_success())
            .unwrap_or(false)
    }

    fn dispatch(&self, request: &GenerateRequest) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);

        let resp = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(request)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    KioskError::Timeout
                } else {
                    KioskError::Transport(e.to_string())
                }
            })?;

        if !resp.status().is_success() {
            return Err(KioskError::Transport(format!(
                "backend returned HTTP {}",
                resp.status()
            )));
        }

        let envelope: GenerateResponse = resp
            .json()
            .map_err(|e| KioskError::Transport(e.to_string()))?;

        Ok(envelope.response.trim().to_string())
    }
}
