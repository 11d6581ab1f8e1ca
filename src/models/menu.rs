use serde::{Deserialize, Serialize};

/// Fixed set of menu categories. Order of declaration is not meaningful;
/// display order follows catalog declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Burger,
    Side,
    Drink,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Burger => "Burger",
            Category::Side => "Side",
            Category::Drink => "Drink",
        }
    }
}

/// A single orderable menu item.
///
/// Loaded once at startup and never mutated; all pipeline stages hold
/// shared references into the catalog. Spiciness uses a 0-3 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub category: Category,
    pub name: String,

    /// Price in won (smallest currency unit).
    pub price: u32,

    pub description: String,
    pub spicy: u8,
    pub calories: u32,
    pub protein: u32,

    /// Display string only, never used in selection logic.
    pub preparation_time: String,

    #[serde(default)]
    pub allergens: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl MenuItem {
    /// Basic validation: spiciness in range and a non-empty name.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.spicy <= 3
    }

    pub fn contains_allergen(&self, allergen: &str) -> bool {
        self.allergens.iter().any(|a| a == allergen)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} won, {} kcal, protein {}g, spicy {}/3",
            self.name,
            self.id,
            self.price,
            self.calories,
            self.protein,
            self.spicy
        )
    }
}

impl PartialEq for MenuItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MenuItem {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> MenuItem {
        MenuItem {
            id: "BG001".to_string(),
            category: Category::Burger,
            name: "Classic Beef Burger".to_string(),
            price: 6900,
            description: "Fresh beef patty, tomato, lettuce, pickles".to_string(),
            spicy: 1,
            calories: 520,
            protein: 28,
            preparation_time: "5 min".to_string(),
            allergens: vec!["wheat".to_string(), "soy".to_string()],
            tags: vec!["meat".to_string(), "beef".to_string()],
        }
    }

    #[test]
    fn test_is_valid() {
        let item = sample_item();
        assert!(item.is_valid());

        let mut invalid = sample_item();
        invalid.spicy = 7;
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_contains_allergen() {
        let item = sample_item();
        assert!(item.contains_allergen("wheat"));
        assert!(!item.contains_allergen("dairy"));
    }

    #[test]
    fn test_equality_by_id() {
        let item1 = sample_item();
        let mut item2 = sample_item();
        item2.price = 9999;
        assert_eq!(item1, item2);
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Drink).unwrap();
        assert_eq!(json, "\"drink\"");
        let back: Category = serde_json::from_str("\"burger\"").unwrap();
        assert_eq!(back, Category::Burger);
    }
}
