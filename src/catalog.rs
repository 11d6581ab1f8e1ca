use std::fs;
use std::path::Path;

use crate::error::{KioskError, Result};
use crate::models::{Category, MenuItem};

/// Number of catalog items substituted when no recommendation survives
/// analysis. The catalog must hold at least this many items.
pub const FALLBACK_COUNT: usize = 4;

/// The static, ordered menu. Built once at startup and shared read-only
/// by every pipeline stage.
#[derive(Debug)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Create a catalog, enforcing the minimum size the fallback policy
    /// relies on. Violations are a startup configuration error, never a
    /// per-request failure.
    pub fn new(items: Vec<MenuItem>) -> Result<Self> {
        if items.len() < FALLBACK_COUNT {
            return Err(KioskError::Configuration(format!(
                "catalog needs at least {} items for the fallback policy, got {}",
                FALLBACK_COUNT,
                items.len()
            )));
        }
        if let Some(bad) = items.iter().find(|i| !i.is_valid()) {
            return Err(KioskError::Configuration(format!(
                "invalid menu item: {}",
                bad.debug_string()
            )));
        }
        Ok(Self { items })
    }

    /// The built-in menu: 9 burgers, 3 sides, 3 drinks.
    pub fn builtin() -> Self {
        Self {
            items: builtin_items(),
        }
    }

    /// All items in declaration order.
    pub fn all_items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Items grouped by category. Categories appear in first-seen order,
    /// items within a category in declaration order.
    pub fn items_by_category(&self) -> Vec<(Category, Vec<&MenuItem>)> {
        let mut groups: Vec<(Category, Vec<&MenuItem>)> = Vec::new();
        for item in &self.items {
            match groups.iter_mut().find(|(cat, _)| *cat == item.category) {
                Some((_, members)) => members.push(item),
                None => groups.push((item.category, vec![item])),
            }
        }
        groups
    }

    /// Items of one category, in declaration order.
    pub fn in_category(&self, category: Category) -> Vec<&MenuItem> {
        self.items.iter().filter(|i| i.category == category).collect()
    }

    /// Exact, case-sensitive name lookup. Resolution depends on names
    /// being unique within the catalog.
    pub fn find_by_name(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.name == name)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn with_tag(&self, tag: &str) -> Vec<&MenuItem> {
        self.items.iter().filter(|i| i.has_tag(tag)).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Load a catalog from a JSON array of menu items.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let items: Vec<MenuItem> = serde_json::from_str(&content)?;
    Catalog::new(items)
}

fn item(
    id: &str,
    category: Category,
    name: &str,
    price: u32,
    description: &str,
    spicy: u8,
    calories: u32,
    protein: u32,
    preparation_time: &str,
    allergens: &[&str],
    tags: &[&str],
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        category,
        name: name.to_string(),
        price,
        description: description.to_string(),
        spicy,
        calories,
        protein,
        preparation_time: preparation_time.to_string(),
        allergens: allergens.iter().map(|s| s.to_string()).collect(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
    }
}

fn builtin_items() -> Vec<MenuItem> {
    use Category::*;

    vec![
        item(
            "BG001", Burger, "Classic Beef Burger", 6900,
            "Fresh beef patty, tomato, lettuce, pickles",
            1, 520, 28, "5 min", &["wheat", "soy"], &["meat", "beef", "classic"],
        ),
        item(
            "BG002", Burger, "Double Cheese Burger", 8500,
            "Two beef patties with cheddar and bacon",
            1, 680, 38, "7 min", &["wheat", "soy", "dairy"],
            &["meat", "beef", "cheese", "premium"],
        ),
        item(
            "BG003", Burger, "Spicy Jalapeno Burger", 7800,
            "Hot jalapeno peppers, jack cheese, sriracha sauce",
            3, 580, 32, "6 min", &["wheat", "soy", "dairy"],
            &["meat", "beef", "spicy", "premium"],
        ),
        item(
            "BG004", Burger, "BBQ Beef Burger", 7500,
            "Smoky BBQ sauce, onion rings, bacon",
            2, 620, 30, "6 min", &["wheat", "soy"], &["meat", "beef", "bbq"],
        ),
        item(
            "BG005", Burger, "Crispy Chicken Burger", 6800,
            "Crunchy fried chicken patty with tartar sauce",
            1, 540, 26, "6 min", &["wheat", "soy", "eggs", "dairy"],
            &["meat", "chicken", "crispy"],
        ),
        item(
            "BG006", Burger, "Mushroom Swiss Burger", 8200,
            "Grilled mushrooms, swiss cheese, caramelized onions",
            0, 560, 24, "7 min", &["wheat", "soy", "dairy"],
            &["meat", "beef", "mushroom", "premium"],
        ),
        item(
            "BG007", Burger, "Triple Meat Burger", 9200,
            "Beef, bacon, sausage and double cheese (extra large)",
            1, 750, 45, "8 min", &["wheat", "soy", "dairy"],
            &["meat", "beef", "premium", "highprotein"],
        ),
        item(
            "BG008", Burger, "Green Veggie Burger", 6500,
            "Tofu patty, mushrooms, avocado, spinach",
            0, 380, 14, "5 min", &["wheat", "soy"],
            &["vegetarian", "healthy", "vegan"],
        ),
        item(
            "BG009", Burger, "American Classic Combo", 7200,
            "Signature beef, american cheese, minced onions",
            0, 540, 28, "5 min", &["wheat", "soy", "dairy"],
            &["meat", "beef", "classic", "popular"],
        ),
        item(
            "SD001", Side, "Crispy French Fries", 3500,
            "Golden crispy fries with sea salt",
            1, 320, 4, "2 min", &[], &["side", "fried", "popular"],
        ),
        item(
            "SD002", Side, "Nachos with Cheese", 4200,
            "Tortilla chips, melted cheese, salsa, sour cream",
            1, 380, 8, "3 min", &["dairy"], &["side", "cheese", "appetizer"],
        ),
        item(
            "SD003", Side, "Chicken Nuggets (6pc)", 4000,
            "Tender chicken nuggets with honey mustard",
            0, 340, 18, "3 min", &["wheat", "eggs", "soy"],
            &["side", "chicken", "fried"],
        ),
        item(
            "DR001", Drink, "Cold Soda", 2500,
            "Refreshing soda over ice (250ml)",
            0, 140, 0, "1 min", &[], &["beverage", "cold", "soda"],
        ),
        item(
            "DR002", Drink, "Protein Shake", 5000,
            "Whey protein, banana and milk (high protein)",
            0, 220, 28, "2 min", &["dairy"],
            &["beverage", "shake", "highprotein", "healthy"],
        ),
        item(
            "DR003", Drink, "Cola", 2500,
            "Ice-cold cola (250ml)",
            0, 140, 0, "1 min", &[], &["beverage", "cold", "cola"],
        ),
    ]
}
