use crate::catalog::Catalog;
use crate::models::{Category, Combo, MenuItem};

/// Assemble a main + side + drink combo from a recommendation set.
///
/// Deterministic single-pass first-fit, not optimal-fit:
/// 1. main = first recommended burger, or the first recommendation if
///    no burger was recommended;
/// 2. side = first catalog side, filtered by `main + side <= budget`
///    when a budget is set;
/// 3. drink = first catalog drink, filtered by
///    `main + side + drink <= budget` when a budget is set.
///
/// Returns `None` when no side or drink fits; callers treat that as a
/// normal "no combo suggestion" outcome, not an error.
pub fn assemble_combo<'a>(
    recommendations: &[&'a MenuItem],
    catalog: &'a Catalog,
    budget: Option<u32>,
) -> Option<Combo<'a>> {
    let main = recommendations
        .iter()
        .copied()
        .find(|m| m.category == Category::Burger)
        .or_else(|| recommendations.first().copied())?;

    let side = catalog
        .in_category(Category::Side)
        .into_iter()
        .find(|s| budget.is_none_or(|b| main.price + s.price <= b))?;

    let drink = catalog
        .in_category(Category::Drink)
        .into_iter()
        .find(|d| budget.is_none_or(|b| main.price + side.price + d.price <= b))?;

    let total_price = main.price + side.price + drink.price;

    // Recheck even though construction already respects the budget.
    if let Some(b) = budget {
        if total_price > b {
            return None;
        }
    }

    Some(Combo {
        main,
        side,
        drink,
        total_price,
    })
}
