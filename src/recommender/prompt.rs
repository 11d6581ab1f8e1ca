use crate::catalog::Catalog;
use crate::models::MenuItem;

/// Build the analysis instruction for one order request.
///
/// Pure string templating: identical catalog and user text always yield
/// a byte-identical prompt. Only name, price and tags are included so
/// the instruction stays compact.
pub fn build_analysis_prompt(catalog: &Catalog, user_text: &str) -> String {
    let menu_lines: Vec<String> = catalog
        .all_items()
        .iter()
        .map(|m| format!("- {} ({}원, {})", m.name, m.price, m.tags.join(", ")))
        .collect();

    format!(
        r#"Role: AI counter clerk at a burger restaurant.
Goal: analyze the customer request ("{user_text}") and recommend the most suitable menus.

[Menu]
{menu}

[Response rules]
1. Respond with exactly one JSON object and nothing else.
2. Recommended menu names must match the menu list verbatim.

{{
  "recommended_menus": ["menu name 1", "menu name 2"],
  "reason": "why these menus fit",
  "budget": number or null,
  "allergies": ["detected allergens to avoid"],
  "understanding": "one-line summary of the customer intent"
}}"#,
        user_text = user_text,
        menu = menu_lines.join("\n"),
    )
}

/// Build the free-form reply instruction spoken after a recommendation.
/// Sent in free-form mode (no JSON directive, higher temperature).
pub fn build_reply_prompt(user_text: &str, recommendations: &[&MenuItem]) -> String {
    let menu_names: Vec<&str> = recommendations.iter().map(|m| m.name.as_str()).collect();

    format!(
        r#"Situation: a kiosk just recommended menus to a customer.
Customer request: "{user_text}"
Recommended menus: {names}

Instruction: pick one of the recommended menus and suggest it in a single natural sentence.
(Plain text only, no JSON.)"#,
        user_text = user_text,
        names = menu_names.join(", "),
    )
}
