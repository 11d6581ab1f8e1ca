mod intent;
mod menu;

pub use intent::{Combo, Intent};
pub use menu::{Category, MenuItem};
