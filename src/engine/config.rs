use std::time::Duration;

/// Connection settings for the local model backend.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Model identifier known to the backend.
    pub model: String,

    /// Backend endpoint, without a trailing slash.
    pub base_url: String,

    /// Request deadline in seconds. Local models are slow; the default
    /// is deliberately generous.
    pub timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model: "gemma2:latest".to_string(),
            base_url: "http://localhost:11434".to_string(),
            timeout_secs: 300,
        }
    }
}

impl EngineConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.model, "gemma2:latest");
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.timeout(), Duration::from_secs(300));
    }
}
