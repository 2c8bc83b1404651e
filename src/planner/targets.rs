//! Daily calorie and macro target calculation.
//!
//! Rounding policy: `f64::round` (half away from zero; all inputs here are
//! positive, so effectively half-up), applied once per output field. Macro
//! grams are computed from the unrounded calorie figure.

use crate::models::{DailyTarget, Gender, Goal, UserProfile};

/// kcal per gram of protein and carbohydrate.
const KCAL_PER_G_PROTEIN_CARB: f64 = 4.0;

/// kcal per gram of fat.
const KCAL_PER_G_FAT: f64 = 9.0;

/// Fractional split of daily calories among protein/carbs/fat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

pub const RATIOS_VEGAN: MacroRatios = MacroRatios { protein: 0.25, carbs: 0.55, fats: 0.20 };
pub const RATIOS_LOSE: MacroRatios = MacroRatios { protein: 0.40, carbs: 0.35, fats: 0.25 };
pub const RATIOS_GAIN: MacroRatios = MacroRatios { protein: 0.30, carbs: 0.50, fats: 0.20 };
pub const RATIOS_MAINTAIN: MacroRatios = MacroRatios { protein: 0.30, carbs: 0.40, fats: 0.30 };

/// Basal metabolic rate (Harris-Benedict), branched by gender.
///
/// The female formula is the default branch.
pub fn basal_metabolic_rate(profile: &UserProfile) -> f64 {
    match profile.gender {
        Gender::Male => {
            88.362 + 13.397 * profile.weight + 4.799 * profile.height - 5.677 * profile.age
        }
        Gender::Female => {
            447.593 + 9.247 * profile.weight + 3.098 * profile.height - 4.330 * profile.age
        }
    }
}

/// Macro ratio selection. Vegan status takes priority over goal.
pub fn macro_ratios(profile: &UserProfile) -> MacroRatios {
    if profile.is_vegan() {
        RATIOS_VEGAN
    } else {
        match profile.goal {
            Goal::Lose => RATIOS_LOSE,
            Goal::Gain => RATIOS_GAIN,
            Goal::Maintain => RATIOS_MAINTAIN,
        }
    }
}

/// Compute the daily calorie and macro target for a profile.
///
/// BMR -> TDEE (activity multiplier) -> calories (goal adjustment) -> grams
/// via the 4/4/9 kcal-per-gram constants.
pub fn daily_target(profile: &UserProfile) -> DailyTarget {
    let bmr = basal_metabolic_rate(profile);
    let tdee = bmr * profile.activity.multiplier();
    let calories = tdee + profile.goal.adjustment();

    let ratios = macro_ratios(profile);

    DailyTarget {
        calories: calories.round().max(0.0) as u32,
        protein: (calories * ratios.protein / KCAL_PER_G_PROTEIN_CARB).round().max(0.0) as u32,
        carbs: (calories * ratios.carbs / KCAL_PER_G_PROTEIN_CARB).round().max(0.0) as u32,
        fats: (calories * ratios.fats / KCAL_PER_G_FAT).round().max(0.0) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityLevel;

    fn base_profile() -> UserProfile {
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
    fn test_bmr_gender_branches_differ() {
        let male = base_profile();
        let mut female = base_profile();
        female.gender = Gender::Female;

        let bmr_male = basal_metabolic_rate(&male);
        let bmr_female = basal_metabolic_rate(&female);
        assert!((bmr_male - bmr_female).abs() > 1.0);
    }

    #[test]
    fn test_vegan_ratios_beat_goal_ratios() {
        let mut profile = base_profile();
        profile.goal = Goal::Lose;
        profile.restrictions = vec!["vegan".to_string()];

        assert_eq!(macro_ratios(&profile), RATIOS_VEGAN);
    }

    #[test]
    fn test_goal_ratio_selection() {
        let mut profile = base_profile();
        assert_eq!(macro_ratios(&profile), RATIOS_MAINTAIN);
        profile.goal = Goal::Lose;
        assert_eq!(macro_ratios(&profile), RATIOS_LOSE);
        profile.goal = Goal::Gain;
        assert_eq!(macro_ratios(&profile), RATIOS_GAIN);
    }

    #[test]
    fn test_macros_approximately_cover_calories() {
        let target = daily_target(&base_profile());

        let kcal_from_macros =
            (target.protein * 4 + target.carbs * 4) as f64 + target.fats as f64 * 9.0;
        // Each of the three macro roundings can shift up to half a gram.
        let tolerance = 0.5 * 4.0 + 0.5 * 4.0 + 0.5 * 9.0 + 0.5;
        assert!(
            (kcal_from_macros - target.calories as f64).abs() <= tolerance,
            "macros {} kcal vs target {} kcal",
            kcal_from_macros,
            target.calories
        );
    }

    #[test]
    fn test_goal_adjustment_shifts_calories() {
        let maintain = daily_target(&base_profile());

        let mut lose_profile = base_profile();
        lose_profile.goal = Goal::Lose;
        let lose = daily_target(&lose_profile);

        let mut gain_profile = base_profile();
        gain_profile.goal = Goal::Gain;
        let gain = daily_target(&gain_profile);

        assert_eq!(maintain.calories - lose.calories, 500);
        assert_eq!(gain.calories - maintain.calories, 500);
    }
}
