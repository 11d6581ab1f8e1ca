use crate::catalog::{Catalog, FALLBACK_COUNT};
use crate::engine::OllamaEngine;
use crate::models::{Intent, MenuItem};
use crate::recommender::parser::{parse_analysis, ModelAnalysis};
use crate::recommender::prompt::build_analysis_prompt;

/// Map recommended names onto catalog entries.
///
/// Exact, case-sensitive matching; names the model hallucinated are
/// dropped silently. Order of the names is preserved.
pub fn resolve_recommendations<'a>(names: &[String], catalog: &'a Catalog) -> Vec<&'a MenuItem> {
    names
        .iter()
        .filter_map(|name| catalog.find_by_name(name))
        .collect()
}

/// First `FALLBACK_COUNT` catalog items, the untrusted-analysis default.
pub fn fallback_recommendations(catalog: &Catalog) -> Vec<&MenuItem> {
    catalog.all_items().iter().take(FALLBACK_COUNT).collect()
}

/// Run the full analysis pipeline for one request.
///
/// Never fails: any engine or parse failure, and any analysis whose
/// recommended names all miss the catalog, degrades to the fallback
/// recommendation set with a default intent (no analysis is trusted).
pub fn resolve_intent<'a>(
    catalog: &'a Catalog,
    user_text: &str,
    engine: &OllamaEngine,
) -> (Intent, Vec<&'a MenuItem>) {
    let prompt = build_analysis_prompt(catalog, user_text);

    let analysis = engine
        .generate(&prompt, true)
        .ok()
        .and_then(|raw| parse_analysis(Some(&raw)).ok());

    if let Some(analysis) = analysis {
        let recommendations = resolve_recommendations(&analysis.recommended_menus, catalog);
        if !recommendations.is_empty() {
            return (intent_from_analysis(user_text, analysis), recommendations);
        }
    }

    (Intent::from_user_text(user_text), fallback_recommendations(catalog))
}

fn intent_from_analysis(user_text: &str, analysis: ModelAnalysis) -> Intent {
    Intent {
        user_text: user_text.to_string(),
        understanding: analysis.understanding,
        budget: analysis.budget,
        allergies: analysis.allergies,
        reason: analysis.reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_is_exact_and_ordered() {
        let catalog = Catalog::builtin();
        let names = vec![
            "Cola".to_string(),
            "Classic Beef Burger".to_string(),
            "Crispy French Fries".to_string(),
        ];

        let recs = resolve_recommendations(&names, &catalog);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].name, "Cola");
        assert_eq!(recs[1].name, "Classic Beef Burger");
        assert_eq!(recs[2].name, "Crispy French Fries");
    }

    #[test]
    fn test_hallucinated_names_dropped_silently() {
        let catalog = Catalog::builtin();
        let names = vec![
            "Dragon Breath Burger".to_string(),
            "Cola".to_string(),
            "cola".to_string(),
        ];

        let recs = resolve_recommendations(&names, &catalog);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].name, "Cola");
    }

    #[test]
    fn test_fallback_is_first_four_in_declaration_order() {
        let catalog = Catalog::builtin();
        let recs = fallback_recommendations(&catalog);

        assert_eq!(recs.len(), FALLBACK_COUNT);
        let ids: Vec<&str> = recs.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["BG001", "BG002", "BG003", "BG004"]);
    }
}
