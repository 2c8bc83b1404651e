//! Greedy, randomized meal assembly.
//!
//! Each meal is seeded with a protein, a carb, and two vegetables, then a fat
//! source when the meal is running light against its calorie budget. This is
//! rule-based selection, not optimization: no cross-meal deduplication and no
//! guarantee the plan's total matches the daily target.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Category, FoodEntry, Meal, MealPlan, UserProfile};
use crate::planner::filter::filter_catalog;
use crate::planner::targets::daily_target;

/// Fraction of the per-meal budget below which a fat source is added.
const FAT_TOPUP_THRESHOLD: f64 = 0.8;

/// Vegetable draws per meal, independent and with replacement.
const VEGETABLES_PER_MEAL: usize = 2;

fn pick<'a, R: Rng>(pool: &[&'a FoodEntry], category: Category, rng: &mut R) -> Option<&'a FoodEntry> {
    let candidates: Vec<&FoodEntry> = pool
        .iter()
        .copied()
        .filter(|e| e.category == category)
        .collect();
    candidates.choose(rng).copied()
}

/// Assemble one meal from the filtered pool against a calorie budget.
///
/// Every category draw is skipped when its candidate set is empty, so a
/// degraded pool yields a short (possibly empty) meal rather than an error.
pub fn assemble_meal<'a, R: Rng>(
    pool: &[&'a FoodEntry],
    budget: f64,
    rng: &mut R,
) -> Meal<'a> {
    let mut meal = Meal::default();

    if let Some(protein) = pick(pool, Category::Protein, rng) {
        meal.push(protein);
    }

    if let Some(carb) = pick(pool, Category::Carbs, rng) {
        meal.push(carb);
    }

    for _ in 0..VEGETABLES_PER_MEAL {
        if let Some(vegetable) = pick(pool, Category::Vegetable, rng) {
            meal.push(vegetable);
        }
    }

    if (meal.calories() as f64) < budget * FAT_TOPUP_THRESHOLD {
        if let Some(fat) = pick(pool, Category::Fats, rng) {
            meal.push(fat);
        }
    }

    meal
}

/// Build `meals` meals from a pre-filtered pool, each against `budget` kcal.
pub fn assemble_meals<'a, R: Rng>(
    pool: &[&'a FoodEntry],
    meals: u32,
    budget: f64,
    rng: &mut R,
) -> MealPlan<'a> {
    let mut plan = MealPlan::default();
    for _ in 0..meals {
        plan.meals.push(assemble_meal(pool, budget, rng));
    }
    plan
}

/// Generate a full meal plan for a profile.
///
/// Filters the catalog against the profile's restrictions and allergies, then
/// assembles `meals_per_day` meals with a per-meal budget of the daily target
/// calories split evenly.
pub fn generate_meal_plan<'a, R: Rng>(
    profile: &UserProfile,
    catalog: &'a [FoodEntry],
    rng: &mut R,
) -> MealPlan<'a> {
    let target = daily_target(profile);
    let pool = filter_catalog(catalog, &profile.restrictions, &profile.allergies);

    let budget = target.calories as f64 / profile.meals_per_day.max(1) as f64;
    assemble_meals(&pool, profile.meals_per_day, budget, rng)
}
