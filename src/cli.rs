use clap::{Parser, Subcommand};

use crate::engine::EngineConfig;

/// Burger House — a natural-language burger ordering CLI backed by a local LLM.
#[derive(Parser, Debug)]
#[command(name = "burger_house")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Model identifier known to the backend.
    #[arg(long, default_value = "gemma2:latest")]
    pub model: String,

    /// Backend endpoint.
    #[arg(long, default_value = "http://localhost:11434")]
    pub base_url: String,

    /// Request deadline in seconds.
    #[arg(long, default_value_t = 300)]
    pub timeout: u64,

    /// Path to a JSON catalog file (defaults to the built-in menu).
    #[arg(short, long)]
    pub file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive ordering session.
    Order,

    /// Analyze a single order request and print the recommendation.
    Ask {
        /// The order request, e.g. "something spicy under 12000 won".
        text: String,
    },

    /// Print the menu.
    Menu,
}

impl Default for Command {
    fn default() -> Self {
        Command::Order
    }
}

impl Cli {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
        }
    }
}
