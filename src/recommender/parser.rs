use serde::Deserialize;

use crate::error::{KioskError, Result};

/// Loosely-typed record extracted from the model's analysis response.
///
/// Every field defaults when missing; only the outer JSON object itself
/// is required to be well-formed.
#[derive(Debug, Default, Deserialize)]
pub struct ModelAnalysis {
    #[serde(default)]
    pub recommended_menus: Vec<String>,

    #[serde(default)]
    pub reason: String,

    #[serde(default)]
    pub budget: Option<u32>,

    #[serde(default)]
    pub allergies: Vec<String>,

    #[serde(default)]
    pub understanding: String,
}

/// Extract and parse the analysis record from a raw model response.
///
/// The response may be wrapped in markdown code fences or surrounded by
/// prose despite instructions; recovery is bracket matching on the first
/// `{` and last `}`, a best-effort heuristic by design.
pub fn parse_analysis(raw: Option<&str>) -> Result<ModelAnalysis> {
    let text = match raw {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Err(KioskError::NoResponse),
    };

    let cleaned = strip_code_fences(text);
    let candidate = extract_json_object(&cleaned).ok_or_else(|| {
        KioskError::MalformedResponse("no JSON object found in response".to_string())
    })?;

    serde_json::from_str(candidate)
        .map_err(|e| KioskError::MalformedResponse(e.to_string()))
}

/// Remove markdown code-fence delimiters and their language tags.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}

/// Candidate JSON document: first `{` through last `}` inclusive.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
