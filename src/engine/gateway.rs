use std::sync::OnceLock;
use std::time::Duration;

use crate::engine::config::EngineConfig;
use crate::engine::transport::{GenerateOptions, GenerateRequest, HttpTransport, Transport};
use crate::error::{KioskError, Result};

/// Temperature in structured mode, lowered to reduce output variance.
const STRUCTURED_TEMPERATURE: f32 = 0.3;

/// Temperature for free-form replies.
const FREE_FORM_TEMPERATURE: f32 = 0.7;

/// Context window requested from the backend.
const NUM_CTX: u32 = 4096;

/// Gateway to the local model backend.
///
/// Probes connectivity once at construction and caches the result for
/// the instance lifetime. Known limitation: a backend that goes down
/// mid-session is not re-detected; calls fail at the transport instead.
pub struct OllamaEngine {
    config: EngineConfig,
    transport: Box<dyn Transport>,
    available: bool,
}

impl OllamaEngine {
    /// Connect over HTTP using the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        let transport = HttpTransport::new(&config.base_url, config.timeout());
        Self::with_transport(config, Box::new(transport))
    }

    /// Connect over an arbitrary transport. The probe runs here.
    pub fn with_transport(config: EngineConfig, transport: Box<dyn Transport>) -> Self {
        let available = transport.probe();
        Self {
            config,
            transport,
            available,
        }
    }

    /// Result of the construction-time connectivity probe.
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout()
    }

    /// Generate a response for the prompt.
    ///
    /// In structured mode the backend is told to emit JSON only and
    /// sampling variance is lowered. A single failure surfaces
    /// immediately; there are no retries — fallback is the caller's
    /// responsibility.
    pub fn generate(&self, prompt: &str, structured_mode: bool) -> Result<String> {
        if !self.available {
            // Probe failed at construction; never touch the network.
            return Err(KioskError::Unavailable);
        }

        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: if structured_mode {
                    STRUCTURED_TEMPERATURE
                } else {
                    FREE_FORM_TEMPERATURE
                },
                num_ctx: NUM_CTX,
            },
            format: structured_mode.then_some("json"),
        };

        self.transport.dispatch(&request)
    }
}

static SHARED_ENGINE: OnceLock<OllamaEngine> = OnceLock::new();

/// Process-wide engine handle for connection reuse.
///
/// Idempotent: the first call constructs the engine, later calls return
/// the same instance and ignore their configuration argument.
pub fn shared_engine(config: &EngineConfig) -> &'static OllamaEngine {
    SHARED_ENGINE.get_or_init(|| OllamaEngine::new(config.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Fake transport recording every dispatch.
    struct FakeTransport {
        probe_result: bool,
        response: Result<String>,
        dispatches: Arc<AtomicUsize>,
    }

    impl FakeTransport {
        fn new(probe_result: bool, response: Result<String>) -> (Self, Arc<AtomicUsize>) {
            let dispatches = Arc::new(AtomicUsize::new(0));
            let transport = Self {
                probe_result,
                response,
                dispatches: Arc::clone(&dispatches),
            };
            (transport, dispatches)
        }
    }

    impl Transport for FakeTransport {
        fn probe(&self) -> bool {
            self.probe_result
        }

        fn dispatch(&self, _request: &GenerateRequest) -> Result<String> {
            self.dispatches.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(KioskError::Timeout) => Err(KioskError::Timeout),
                Err(e) => Err(KioskError::Transport(e.to_string())),
            }
        }
    }

    #[test]
    fn test_unavailable_engine_never_dispatches() {
        let (transport, dispatches) =
            FakeTransport::new(false, Ok("unused".to_string()));
        let engine =
            OllamaEngine::with_transport(EngineConfig::default(), Box::new(transport));

        assert!(!engine.is_available());
        assert!(matches!(
            engine.generate("any prompt", true),
            Err(KioskError::Unavailable)
        ));
        assert_eq!(dispatches.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_available_engine_dispatches_once_per_call() {
        let (transport, dispatches) =
            FakeTransport::new(true, Ok("{\"ok\": true}".to_string()));
        let engine =
            OllamaEngine::with_transport(EngineConfig::default(), Box::new(transport));

        assert!(engine.is_available());
        let text = engine.generate("prompt", true).unwrap();
        assert_eq!(text, "{\"ok\": true}");
        assert_eq!(dispatches.load(Ordering::SeqCst), 1);

        engine.generate("prompt", false).unwrap();
        assert_eq!(dispatches.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_timeout_surfaces_without_retry() {
        let (transport, dispatches) =
            FakeTransport::new(true, Err(KioskError::Timeout));
        let engine =
            OllamaEngine::with_transport(EngineConfig::default(), Box::new(transport));

        assert!(matches!(
            engine.generate("prompt", true),
            Err(KioskError::Timeout)
        ));
        assert_eq!(dispatches.load(Ordering::SeqCst), 1);
    }
}
