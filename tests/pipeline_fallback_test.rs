use burger_house_rs::catalog::{Catalog, FALLBACK_COUNT};
use burger_house_rs::engine::{EngineConfig, GenerateRequest, OllamaEngine, Transport};
use burger_house_rs::error::{KioskError, Result};
use burger_house_rs::recommender::resolve_intent;

/// Transport with a scripted probe result and response.
struct ScriptedTransport {
    probe: bool,
    response: Option<String>,
}

impl Transport for ScriptedTransport {
    fn probe(&self) -> bool {
        self.probe
    }

    fn dispatch(&self, _request: &GenerateRequest) -> Result<String> {
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(KioskError::Transport("scripted failure".to_string())),
        }
    }
}

fn scripted_engine(probe: bool, response: Option<&str>) -> OllamaEngine {
    OllamaEngine::with_transport(
        EngineConfig::default(),
        Box::new(ScriptedTransport {
            probe,
            response: response.map(|s| s.to_string()),
        }),
    )
}

#[test]
fn unavailable_engine_falls_back_to_first_four_menus() {
    let catalog = Catalog::builtin();
    let engine = scripted_engine(false, None);

    let (intent, recommendations) = resolve_intent(&catalog, "something spicy", &engine);

    assert_eq!(recommendations.len(), FALLBACK_COUNT);
    let expected: Vec<&str> = catalog
        .all_items()
        .iter()
        .take(FALLBACK_COUNT)
        .map(|m| m.name.as_str())
        .collect();
    let actual: Vec<&str> = recommendations.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(actual, expected);

    // No analysis is trusted on fallback.
    assert_eq!(intent.user_text, "something spicy");
    assert!(intent.understanding.is_empty());
    assert!(intent.budget.is_none());
    assert!(intent.allergies.is_empty());
}

#[test]
fn transport_failure_falls_back() {
    let catalog = Catalog::builtin();
    let engine = scripted_engine(true, None);

    let (_, recommendations) = resolve_intent(&catalog, "a cheap burger", &engine);
    assert_eq!(recommendations.len(), FALLBACK_COUNT);
}

#[test]
fn unparseable_response_falls_back() {
    let catalog = Catalog::builtin();
    let engine = scripted_engine(true, Some("I'd recommend our spicy burger!"));

    let (intent, recommendations) = resolve_intent(&catalog, "spicy please", &engine);
    assert_eq!(recommendations.len(), FALLBACK_COUNT);
    assert!(intent.budget.is_none());
}

#[test]
fn all_hallucinated_names_fall_back() {
    let catalog = Catalog::builtin();
    let engine = scripted_engine(
        true,
        Some(r#"{"recommended_menus": ["Dragon Burger", "Phoenix Fries"], "budget": 9000}"#),
    );

    let (intent, recommendations) = resolve_intent(&catalog, "anything", &engine);

    assert_eq!(recommendations.len(), FALLBACK_COUNT);
    // The analysis is discarded along with the unmatched names.
    assert!(intent.budget.is_none());
}

#[test]
fn well_formed_response_resolves_in_order() {
    let catalog = Catalog::builtin();
    let engine = scripted_engine(
        true,
        Some(
            r#"```json
{
  "recommended_menus": ["Spicy Jalapeno Burger", "Made Up Menu", "Cola"],
  "reason": "spicy and cheap",
  "budget": 12000,
  "allergies": ["dairy"],
  "understanding": "wants something spicy under 12000 won"
}
```"#,
        ),
    );

    let (intent, recommendations) = resolve_intent(&catalog, "spicy under 12000", &engine);

    let names: Vec<&str> = recommendations.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Spicy Jalapeno Burger", "Cola"]);

    assert_eq!(intent.budget, Some(12000));
    assert_eq!(intent.allergies, vec!["dairy"]);
    assert_eq!(intent.understanding, "wants something spicy under 12000 won");
    assert_eq!(intent.reason, "spicy and cheap");
}

#[test]
fn recommendations_reference_catalog_entries() {
    let catalog = Catalog::builtin();
    let engine = scripted_engine(true, Some(r#"{"recommended_menus": ["Cola"]}"#));

    let (_, recommendations) = resolve_intent(&catalog, "a drink", &engine);

    // Resolution is a lookup, not reconstruction.
    assert!(std::ptr::eq(
        recommendations[0],
        catalog.find_by_name("Cola").unwrap()
    ));
}
