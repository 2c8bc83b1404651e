use serde::{Deserialize, Serialize};

/// Role a food plays when a meal is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Protein,
    Carbs,
    Vegetable,
    Fats,
    Fruit,
    Beverage,
    Supplement,
}

/// A catalog entry with per-portion nutrition and dietary tags.
///
/// Entries are created once at catalog initialization and never mutated.
/// Nutrient figures are per the stated portion label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub name: String,

    /// kcal per portion.
    pub calories: u32,

    /// Grams per portion.
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,

    pub category: Category,

    /// Descriptive portion label, e.g. "100g cooked". Not machine-parsed.
    pub portion: String,

    /// Lowercase dietary tags, e.g. "vegan", "gluten-free", "omega-3".
    pub tags: Vec<String>,
}

impl FoodEntry {
    /// Case-insensitive tag membership test.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }

    /// Case-insensitive substring test against the food name.
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name.to_lowercase().contains(&fragment.to_lowercase())
    }

    /// Basic validation: non-negative macros.
    pub fn is_valid(&self) -> bool {
        self.protein >= 0.0 && self.carbs >= 0.0 && self.fats >= 0.0
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for FoodEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for FoodEntry {}

impl std::hash::Hash for FoodEntry {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.to_lowercase().hash(state);
    }
}
