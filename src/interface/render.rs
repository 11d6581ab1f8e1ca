use crate::catalog::Catalog;
use crate::models::{Combo, Intent, MenuItem};

/// Display the full menu grouped by category.
pub fn display_menu(catalog: &Catalog) {
    println!();
    println!("=== Menu ({} items) ===", catalog.len());

    for (category, items) in catalog.items_by_category() {
        println!();
        println!("--- {} ({}) ---", category.label(), items.len());

        let max_name_len = items.iter().map(|i| i.name.len()).max().unwrap_or(10);
        for item in items {
            println!(
                "  {:<width$}  {:>5} won | {:>4} kcal, protein {:>2}g, spicy {}/3 | {}",
                item.name,
                item.price,
                item.calories,
                item.protein,
                item.spicy,
                item.preparation_time,
                width = max_name_len
            );
        }
    }

    println!();
}

/// Display the analyzed intent behind a recommendation.
pub fn display_intent(intent: &Intent) {
    println!();
    println!("Request: \"{}\"", intent.user_text);

    if !intent.understanding.is_empty() {
        println!("Understood as: {}", intent.understanding);
    }
    if let Some(budget) = intent.budget {
        println!("Budget: {} won", budget);
    }
    if !intent.allergies.is_empty() {
        println!("Avoiding: {}", intent.allergies.join(", "));
    }
    if !intent.reason.is_empty() {
        println!("Reason: {}", intent.reason);
    }
}

/// Display a recommendation set.
pub fn display_recommendations(recommendations: &[&MenuItem]) {
    if recommendations.is_empty() {
        println!("No recommendations.");
        return;
    }

    println!();
    println!("=== Recommended menus ===");
    for (i, item) in recommendations.iter().enumerate() {
        println!("{:>3}. {} - {} won", i + 1, item.name, item.price);
        println!("     {}", item.description);
        println!(
            "     {} kcal, protein {}g, spicy {}/3",
            item.calories, item.protein, item.spicy
        );
    }
}

/// Display a combo suggestion, or the no-combo notice.
pub fn display_combo(combo: Option<&Combo>) {
    match combo {
        Some(combo) => {
            println!();
            println!("=== Combo suggestion ===");
            println!("  Main:  {} ({} won)", combo.main.name, combo.main.price);
            println!("  Side:  {} ({} won)", combo.side.name, combo.side.price);
            println!("  Drink: {} ({} won)", combo.drink.name, combo.drink.price);
            println!("  Total: {} won", combo.total_price);
        }
        None => {
            println!();
            println!("No combo fits within the budget.");
        }
    }
}
