use crate::models::{DailyTarget, PlanSummary};
use crate::state::HistoryEntry;

/// Render a daily target as display text.
pub fn render_target(target: &DailyTarget) -> String {
    format!(
        "Daily Target:\n\
         Calories: {} kcal\n\
         Protein: {}g\n\
         Carbs: {}g\n\
         Fats: {}g\n",
        target.calories, target.protein, target.carbs, target.fats
    )
}

/// Render a plan summary as display/export text.
pub fn render_summary(summary: &PlanSummary) -> String {
    let mut out = String::from("Your Meal Plan\n\n");

    let totals = &summary.total_nutrition;
    out.push_str("Daily Totals:\n");
    out.push_str(&format!("Calories: {} kcal\n", totals.calories));
    out.push_str(&format!("Protein: {}g\n", totals.protein));
    out.push_str(&format!("Carbs: {}g\n", totals.carbs));
    out.push_str(&format!("Fats: {}g\n", totals.fats));

    for meal in &summary.meals {
        out.push_str(&format!("\nMeal {}:\n", meal.meal_number));
        if meal.foods.is_empty() {
            out.push_str("- (no compatible foods)\n");
        }
        for food in &meal.foods {
            out.push_str(&format!("- {} ({})\n", food.name, food.portion));
        }

        let n = &meal.nutrition;
        out.push_str("\nMeal Nutrition:\n");
        out.push_str(&format!("Calories: {} kcal\n", n.calories));
        out.push_str(&format!("Protein: {}g\n", n.protein));
        out.push_str(&format!("Carbs: {}g\n", n.carbs));
        out.push_str(&format!("Fats: {}g\n", n.fats));
        out.push_str(&format!("{}\n", "-".repeat(40)));
    }

    out
}

/// Render the history log: one date + calorie line per recorded plan.
pub fn render_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No history available yet.\n".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("Date: {}\n", entry.date));
        out.push_str(&format!(
            "Calories: {} kcal\n",
            entry.summary.total_nutrition.calories
        ));
        out.push_str(&format!("{}\n", "-".repeat(40)));
    }
    out
}
