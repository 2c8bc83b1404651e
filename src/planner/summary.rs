//! Nutrition rollups for an assembled plan.
//!
//! Sums are accumulated unrounded and rounded once per output field, at both
//! the per-meal and the plan-total level. Because the total is rounded from
//! the unrounded grand sum, it can differ from the sum of the rounded
//! per-meal values by up to half a unit per meal per field.

use crate::models::{FoodRef, MealPlan, MealSummary, Nutrition, PlanSummary};

fn round(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Produce the structured report for a plan.
///
/// An empty meal yields a zero-nutrition block, not an error.
pub fn summarize(plan: &MealPlan) -> PlanSummary {
    let mut total_calories = 0.0;
    let mut total_protein = 0.0;
    let mut total_carbs = 0.0;
    let mut total_fats = 0.0;

    let mut meals = Vec::with_capacity(plan.len());

    for (index, meal) in plan.meals.iter().enumerate() {
        let calories: f64 = meal.items.iter().map(|e| e.calories as f64).sum();
        let protein: f64 = meal.items.iter().map(|e| e.protein).sum();
        let carbs: f64 = meal.items.iter().map(|e| e.carbs).sum();
        let fats: f64 = meal.items.iter().map(|e| e.fats).sum();

        total_calories += calories;
        total_protein += protein;
        total_carbs += carbs;
        total_fats += fats;

        meals.push(MealSummary {
            meal_number: index + 1,
            foods: meal
                .items
                .iter()
                .map(|e| FoodRef {
                    name: e.name.clone(),
                    portion: e.portion.clone(),
                })
                .collect(),
            nutrition: Nutrition {
                calories: round(calories),
                protein: round(protein),
                carbs: round(carbs),
                fats: round(fats),
            },
        });
    }

    PlanSummary {
        total_nutrition: Nutrition {
            calories: round(total_calories),
            protein: round(total_protein),
            carbs: round(total_carbs),
            fats: round(total_fats),
        },
        meals,
    }
}
