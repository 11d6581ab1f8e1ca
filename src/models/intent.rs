use crate::models::MenuItem;

/// Structured interpretation of one free-text order request.
///
/// Created fresh per request. When the model analysis cannot be trusted
/// (failed call, unparseable output, no matched menus) the fields fall
/// back to their defaults and only `user_text` is kept.
#[derive(Debug, Clone, Default)]
pub struct Intent {
    /// Verbatim user request.
    pub user_text: String,

    /// Model-produced summary of what the user asked for.
    pub understanding: String,

    /// Budget ceiling in won, if the user stated one.
    pub budget: Option<u32>,

    /// Allergens the user asked to avoid.
    pub allergies: Vec<String>,

    /// Model-produced recommendation rationale.
    pub reason: String,
}

impl Intent {
    /// Intent carrying only the raw request, with no trusted analysis.
    pub fn from_user_text(user_text: &str) -> Self {
        Self {
            user_text: user_text.to_string(),
            ..Default::default()
        }
    }
}

/// A main + side + drink bundle with its computed total.
///
/// Transient return value of the combo assembler; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combo<'a> {
    pub main: &'a MenuItem,
    pub side: &'a MenuItem,
    pub drink: &'a MenuItem,
    pub total_price: u32,
}
