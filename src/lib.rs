pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod recommender;
pub mod session;
pub mod speech;

pub use catalog::{load_catalog, Catalog, FALLBACK_COUNT};
pub use error::{KioskError, Result};
pub use models::{Category, Combo, Intent, MenuItem};
