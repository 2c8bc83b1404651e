mod food;
mod plan;
mod profile;

pub use food::{Category, FoodEntry};
pub use plan::{FoodRef, Meal, MealPlan, MealSummary, Nutrition, PlanSummary};
pub use profile::{ActivityLevel, DailyTarget, Gender, Goal, UserProfile};
