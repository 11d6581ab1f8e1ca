mod config;
mod gateway;
mod transport;

pub use config::EngineConfig;
pub use gateway::{shared_engine, OllamaEngine};
pub use transport::{GenerateOptions, GenerateRequest, HttpTransport, Transport};
