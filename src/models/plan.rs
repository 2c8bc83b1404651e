use serde::{Deserialize, Serialize};

use crate::models::FoodEntry;

/// One assembled meal: an ordered list of catalog references.
///
/// The plan borrows entries from the catalog; it never copies or mutates
/// them. An empty meal is valid (all categories filtered away).
#[derive(Debug, Clone, Default)]
pub struct Meal<'a> {
    pub items: Vec<&'a FoodEntry>,
}

impl<'a> Meal<'a> {
    pub fn push(&mut self, entry: &'a FoodEntry) {
        self.items.push(entry);
    }

    /// Running kcal sum across the meal's items.
    pub fn calories(&self) -> u32 {
        self.items.iter().map(|e| e.calories).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Ordered sequence of meals for one day.
#[derive(Debug, Clone, Default)]
pub struct MealPlan<'a> {
    pub meals: Vec<Meal<'a>>,
}

impl<'a> MealPlan<'a> {
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

/// Rounded nutrition figures for a meal or a whole plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

/// A food reference inside a summary: name plus portion label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRef {
    pub name: String,
    pub portion: String,
}

/// Per-meal block of a plan summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSummary {
    /// 1-based position of the meal in the plan.
    pub meal_number: usize,
    pub foods: Vec<FoodRef>,
    pub nutrition: Nutrition,
}

/// Nutrition rollup for a whole plan; the artifact persisted to history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    pub total_nutrition: Nutrition,
    pub meals: Vec<MealSummary>,
}
