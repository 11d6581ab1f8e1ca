pub mod prompts;
pub mod render;

pub use prompts::{prompt_order_text, prompt_yes_no};
pub use render::{display_combo, display_intent, display_menu, display_recommendations};
