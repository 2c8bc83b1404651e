use rand::rngs::StdRng;
use rand::SeedableRng;

use diet_planner_rs::catalog;
use diet_planner_rs::models::{ActivityLevel, Category, Gender, Goal, UserProfile};
use diet_planner_rs::planner::{filter_catalog, generate_meal_plan, summarize};

fn sample_profile() -> UserProfile {
    UserProfile {
        weight: 70.0,
        height: 175.0,
        age: 30.0,
        gender: Gender::Male,
        activity: ActivityLevel::Moderate,
        goal: Goal::Maintain,
        restrictions: vec![],
        allergies: vec![],
        meals_per_day: 3,
    }
}

#[test]
fn test_plan_has_three_meals_with_bounded_structure() {
    let mut rng = StdRng::seed_from_u64(11);
    let plan = generate_meal_plan(&sample_profile(), catalog::all(), &mut rng);

    assert_eq!(plan.len(), 3);
    for meal in &plan.meals {
        assert!(meal.items.len() <= 5);

        let count = |cat| meal.items.iter().filter(|e| e.category == cat).count();
        assert!(count(Category::Protein) <= 1);
        assert!(count(Category::Carbs) <= 1);
        assert!(count(Category::Vegetable) <= 2);
        assert!(count(Category::Fats) <= 1);
    }
}

#[test]
fn test_plan_items_pass_active_filters() {
    let mut profile = sample_profile();
    profile.restrictions = vec!["vegan".to_string(), "gluten-free".to_string()];
    profile.allergies = vec!["seed".to_string()];

    let mut rng = StdRng::seed_from_u64(23);
    let plan = generate_meal_plan(&profile, catalog::all(), &mut rng);

    for meal in &plan.meals {
        for item in &meal.items {
            assert!(item.has_tag("vegan"));
            assert!(item.has_tag("gluten-free"));
            assert!(!item.name_contains("seed"));
        }
    }
}

#[test]
fn test_fully_filtered_catalog_degrades_to_empty_meals() {
    let mut profile = sample_profile();
    // Every catalog name contains a vowel; exclude them all.
    profile.allergies = vec!["a".into(), "e".into(), "i".into(), "o".into(), "u".into()];

    let pool = filter_catalog(
        catalog::all(),
        &profile.restrictions,
        &profile.allergies,
    );
    assert!(pool.is_empty());

    let mut rng = StdRng::seed_from_u64(5);
    let plan = generate_meal_plan(&profile, catalog::all(), &mut rng);

    assert_eq!(plan.len(), 3);
    assert!(plan.meals.iter().all(|m| m.is_empty()));

    let summary = summarize(&plan);
    assert_eq!(summary.total_nutrition.calories, 0);
    assert_eq!(summary.meals.len(), 3);
}

#[test]
fn test_summary_total_matches_meal_blocks_within_tolerance() {
    let mut rng = StdRng::seed_from_u64(31);
    let plan = generate_meal_plan(&sample_profile(), catalog::all(), &mut rng);
    let summary = summarize(&plan);

    // Per-meal and total blocks are rounded independently from unrounded
    // sums, so each field may drift by up to half a unit per meal.
    let slack = summary.meals.len() as i64;

    let sums = summary.meals.iter().fold((0i64, 0i64, 0i64, 0i64), |acc, m| {
        (
            acc.0 + m.nutrition.calories as i64,
            acc.1 + m.nutrition.protein as i64,
            acc.2 + m.nutrition.carbs as i64,
            acc.3 + m.nutrition.fats as i64,
        )
    });

    let total = &summary.total_nutrition;
    assert!((total.calories as i64 - sums.0).abs() <= slack);
    assert!((total.protein as i64 - sums.1).abs() <= slack);
    assert!((total.carbs as i64 - sums.2).abs() <= slack);
    assert!((total.fats as i64 - sums.3).abs() <= slack);
}

#[test]
fn test_summary_calories_exact_sum_of_items() {
    // Calories are integral per entry, so the rollup is exact.
    let mut rng = StdRng::seed_from_u64(47);
    let plan = generate_meal_plan(&sample_profile(), catalog::all(), &mut rng);
    let summary = summarize(&plan);

    let expected: u32 = plan
        .meals
        .iter()
        .flat_map(|m| m.items.iter())
        .map(|e| e.calories)
        .sum();
    assert_eq!(summary.total_nutrition.calories, expected);
}

#[test]
fn test_same_seed_same_plan() {
    let profile = sample_profile();

    let plan_a = generate_meal_plan(&profile, catalog::all(), &mut StdRng::seed_from_u64(99));
    let plan_b = generate_meal_plan(&profile, catalog::all(), &mut StdRng::seed_from_u64(99));

    let names = |plan: &diet_planner_rs::MealPlan| -> Vec<String> {
        plan.meals
            .iter()
            .flat_map(|m| m.items.iter().map(|e| e.name.clone()))
            .collect()
    };
    assert_eq!(names(&plan_a), names(&plan_b));
}

#[test]
fn test_meals_per_day_is_honored() {
    for meals in 2..=6 {
        let mut profile = sample_profile();
        profile.meals_per_day = meals;

        let mut rng = StdRng::seed_from_u64(meals as u64);
        let plan = generate_meal_plan(&profile, catalog::all(), &mut rng);
        assert_eq!(plan.len(), meals as usize);
    }
}
