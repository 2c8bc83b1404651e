//! Built-in food catalog.
//!
//! Compiled-in reference data: initialized once, never mutated. Nutrition
//! figures are per the stated portion.

use std::sync::LazyLock;

use crate::models::{Category, FoodEntry};

fn entry(
    name: &str,
    calories: u32,
    protein: f64,
    carbs: f64,
    fats: f64,
    category: Category,
    portion: &str,
    tags: &[&str],
) -> FoodEntry {
    FoodEntry {
        name: name.to_string(),
        calories,
        protein,
        carbs,
        fats,
        category,
        portion: portion.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

static CATALOG: LazyLock<Vec<FoodEntry>> = LazyLock::new(|| {
    use Category::*;
    vec![
        // Lean proteins
        entry("Chicken Breast (skinless)", 165, 31.0, 0.0, 3.6, Protein, "100g",
            &["lean-protein", "low-fat", "low-carb"]),
        entry("Turkey Breast", 135, 30.0, 0.0, 2.1, Protein, "100g",
            &["lean-protein", "low-fat", "low-carb"]),
        entry("Egg Whites", 52, 11.0, 0.7, 0.2, Protein, "100g",
            &["vegetarian", "lean-protein"]),
        entry("Tuna (canned in water)", 116, 26.0, 0.0, 1.3, Protein, "100g",
            &["pescatarian", "lean-protein", "omega-3"]),
        entry("Cod", 82, 18.0, 0.0, 0.7, Protein, "100g",
            &["pescatarian", "lean-protein", "low-fat"]),
        entry("Tilapia", 96, 20.1, 0.0, 2.3, Protein, "100g",
            &["pescatarian", "lean-protein"]),
        // Fatty proteins
        entry("Salmon (Atlantic)", 208, 22.0, 0.0, 13.0, Protein, "100g",
            &["pescatarian", "omega-3", "healthy-fats"]),
        entry("Mackerel", 262, 24.0, 0.0, 17.8, Protein, "100g",
            &["pescatarian", "omega-3", "healthy-fats"]),
        entry("Sardines", 208, 24.6, 0.0, 11.5, Protein, "100g",
            &["pescatarian", "omega-3", "healthy-fats"]),
        entry("Whole Eggs", 155, 12.6, 0.6, 10.6, Protein, "100g",
            &["vegetarian", "healthy-fats"]),
        // Plant-based proteins
        entry("Firm Tofu", 144, 15.6, 3.5, 8.7, Protein, "100g",
            &["vegan", "vegetarian", "gluten-free", "low-carb"]),
        entry("Tempeh", 192, 20.3, 7.6, 11.3, Protein, "100g",
            &["vegan", "vegetarian", "fermented"]),
        entry("Seitan", 370, 75.0, 14.0, 2.0, Protein, "100g",
            &["vegan", "vegetarian"]),
        entry("Black Beans", 132, 8.9, 23.7, 0.5, Protein, "100g cooked",
            &["vegan", "vegetarian", "gluten-free", "fiber-rich"]),
        entry("Chickpeas", 164, 8.9, 27.4, 2.6, Protein, "100g cooked",
            &["vegan", "vegetarian", "gluten-free", "fiber-rich"]),
        entry("Lentils (red)", 116, 9.0, 20.0, 0.4, Protein, "100g cooked",
            &["vegan", "vegetarian", "gluten-free", "fiber-rich"]),
        // Complex carbohydrates
        entry("Brown Rice", 112, 2.6, 23.5, 0.9, Carbs, "100g cooked",
            &["vegan", "gluten-free", "whole-grain"]),
        entry("Quinoa", 120, 4.4, 21.3, 1.9, Carbs, "100g cooked",
            &["vegan", "gluten-free", "complete-protein"]),
        entry("Sweet Potato", 86, 1.6, 20.1, 0.1, Carbs, "100g baked",
            &["vegan", "gluten-free", "vitamin-a"]),
        entry("Oatmeal", 68, 2.4, 12.0, 1.4, Carbs, "100g cooked",
            &["vegan", "fiber-rich"]),
        entry("Buckwheat", 92, 3.4, 20.0, 0.6, Carbs, "100g cooked",
            &["vegan", "gluten-free"]),
        entry("Wild Rice", 101, 4.0, 21.0, 0.3, Carbs, "100g cooked",
            &["vegan", "gluten-free", "low-fat"]),
        // Low-carb vegetables
        entry("Spinach (raw)", 23, 2.9, 3.6, 0.4, Vegetable, "100g",
            &["vegan", "gluten-free", "low-carb", "leafy-green"]),
        entry("Kale (raw)", 49, 4.3, 8.8, 0.9, Vegetable, "100g",
            &["vegan", "gluten-free", "low-carb", "leafy-green"]),
        entry("Broccoli", 55, 3.7, 11.2, 0.6, Vegetable, "100g",
            &["vegan", "gluten-free", "cruciferous"]),
        entry("Cauliflower", 25, 1.9, 5.0, 0.3, Vegetable, "100g",
            &["vegan", "gluten-free", "cruciferous"]),
        entry("Zucchini", 17, 1.2, 3.1, 0.3, Vegetable, "100g",
            &["vegan", "gluten-free", "low-calorie"]),
        entry("Bell Peppers", 31, 1.0, 6.0, 0.3, Vegetable, "100g",
            &["vegan", "gluten-free", "vitamin-c"]),
        // Starchy vegetables
        entry("Green Peas", 81, 5.4, 14.5, 0.4, Vegetable, "100g",
            &["vegan", "gluten-free"]),
        entry("Corn", 86, 3.2, 19.0, 1.2, Vegetable, "100g",
            &["vegan", "gluten-free"]),
        entry("Butternut Squash", 45, 1.0, 11.7, 0.1, Vegetable, "100g",
            &["vegan", "gluten-free", "vitamin-a"]),
        // Healthy fats
        entry("Avocado", 160, 2.0, 8.5, 14.7, Fats, "100g",
            &["vegan", "gluten-free", "healthy-fats"]),
        entry("Almonds", 579, 21.2, 21.7, 49.9, Fats, "100g",
            &["vegan", "gluten-free", "vitamin-e"]),
        entry("Walnuts", 654, 15.2, 13.7, 65.2, Fats, "100g",
            &["vegan", "gluten-free", "omega-3"]),
        entry("Chia Seeds", 486, 16.5, 42.1, 30.7, Fats, "100g",
            &["vegan", "gluten-free", "omega-3"]),
        entry("Flax Seeds", 534, 18.3, 28.9, 42.2, Fats, "100g",
            &["vegan", "gluten-free", "omega-3"]),
        entry("Olive Oil", 884, 0.0, 0.0, 100.0, Fats, "100g",
            &["vegan", "gluten-free", "monounsaturated"]),
        // Dairy and alternatives
        entry("Greek Yogurt (2%)", 73, 9.9, 3.6, 1.9, Protein, "100g",
            &["vegetarian", "probiotic"]),
        entry("Cottage Cheese (1%)", 72, 12.4, 2.7, 1.0, Protein, "100g",
            &["vegetarian", "low-fat"]),
        entry("Almond Milk (unsweetened)", 13, 0.4, 0.3, 1.1, Beverage, "100g",
            &["vegan", "gluten-free", "dairy-free"]),
        entry("Soy Milk (unsweetened)", 33, 3.3, 1.2, 1.8, Beverage, "100g",
            &["vegan", "gluten-free", "dairy-free"]),
        // Fruits
        entry("Blueberries", 57, 0.7, 14.5, 0.3, Fruit, "100g",
            &["vegan", "gluten-free", "antioxidants"]),
        entry("Strawberries", 32, 0.7, 7.7, 0.3, Fruit, "100g",
            &["vegan", "gluten-free", "vitamin-c"]),
        entry("Apple", 52, 0.3, 13.8, 0.2, Fruit, "100g",
            &["vegan", "gluten-free", "fiber-rich"]),
        entry("Banana", 89, 1.1, 22.8, 0.3, Fruit, "100g",
            &["vegan", "gluten-free", "potassium"]),
        entry("Orange", 47, 0.9, 11.8, 0.1, Fruit, "100g",
            &["vegan", "gluten-free", "vitamin-c"]),
        // Whole grains
        entry("Ezekiel Bread", 240, 8.0, 36.0, 0.5, Carbs, "100g",
            &["vegan", "sprouted-grain"]),
        entry("Steel-Cut Oats", 350, 13.0, 62.0, 6.5, Carbs, "100g dry",
            &["vegan", "whole-grain"]),
        entry("Bulgur Wheat", 342, 12.3, 75.9, 1.3, Carbs, "100g",
            &["vegan", "whole-grain"]),
        // Seeds and superfoods
        entry("Pumpkin Seeds", 559, 30.2, 10.7, 49.1, Fats, "100g",
            &["vegan", "gluten-free", "zinc"]),
        entry("Hemp Seeds", 553, 31.6, 8.7, 48.8, Fats, "100g",
            &["vegan", "gluten-free", "omega-3"]),
        entry("Spirulina", 290, 57.5, 23.9, 7.7, Supplement, "100g",
            &["vegan", "gluten-free", "superfood"]),
        // Fermented foods
        entry("Kimchi", 15, 1.1, 1.9, 0.2, Vegetable, "100g",
            &["vegan", "gluten-free", "probiotic"]),
        entry("Sauerkraut", 19, 0.9, 4.3, 0.2, Vegetable, "100g",
            &["vegan", "gluten-free", "probiotic"]),
        entry("Kombucha", 13, 0.5, 2.5, 0.0, Beverage, "100g",
            &["vegan", "gluten-free", "probiotic"]),
    ]
});

/// The full built-in catalog.
pub fn all() -> &'static [FoodEntry] {
    &CATALOG
}

/// Look up an entry by name (case-insensitive).
pub fn find(name: &str) -> Option<&'static FoodEntry> {
    let key = name.to_lowercase();
    CATALOG.iter().find(|e| e.key() == key)
}

/// Every distinct dietary tag in the catalog, sorted.
pub fn known_tags() -> Vec<String> {
    let mut tags: Vec<String> = CATALOG
        .iter()
        .flat_map(|e| e.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}
