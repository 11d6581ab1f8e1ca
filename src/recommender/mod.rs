pub mod combo;
pub mod parser;
pub mod prompt;
pub mod resolver;

pub use combo::assemble_combo;
pub use parser::{parse_analysis, ModelAnalysis};
pub use prompt::{build_analysis_prompt, build_reply_prompt};
pub use resolver::{fallback_recommendations, resolve_intent, resolve_recommendations};
