use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Drives which BMR formula branch is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied to BMR.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Parse a label, falling back to sedentary for unrecognized input.
    pub fn parse_or_default(label: &str) -> Self {
        match label.to_lowercase().replace(' ', "_").as_str() {
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "very_active" => ActivityLevel::VeryActive,
            "extra_active" => ActivityLevel::ExtraActive,
            _ => ActivityLevel::Sedentary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    /// Flat kcal adjustment applied to TDEE.
    pub fn adjustment(self) -> f64 {
        match self {
            Goal::Lose => -500.0,
            Goal::Maintain => 0.0,
            Goal::Gain => 500.0,
        }
    }

    /// Parse a label, falling back to maintain for unrecognized input.
    pub fn parse_or_default(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "lose" => Goal::Lose,
            "gain" => Goal::Gain,
            _ => Goal::Maintain,
        }
    }
}

/// Biometric and dietary profile for one user session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Body weight in kilograms.
    pub weight: f64,

    /// Height in centimeters.
    pub height: f64,

    /// Age in years.
    pub age: f64,

    pub gender: Gender,

    pub activity: ActivityLevel,

    pub goal: Goal,

    /// Dietary tags every selected food must carry (conjunctive).
    #[serde(default)]
    pub restrictions: Vec<String>,

    /// Name fragments excluding any food whose name contains them.
    #[serde(default)]
    pub allergies: Vec<String>,

    pub meals_per_day: u32,
}

impl UserProfile {
    /// Check numeric fields, naming every offending field in the error.
    pub fn validate(&self) -> Result<()> {
        let mut bad = Vec::new();
        if !(self.weight > 0.0) {
            bad.push("weight");
        }
        if !(self.height > 0.0) {
            bad.push("height");
        }
        if !(self.age > 0.0) {
            bad.push("age");
        }
        if self.meals_per_day == 0 {
            bad.push("meals_per_day");
        }
        if bad.is_empty() {
            Ok(())
        } else {
            Err(PlanError::InvalidProfile(bad.join(", ")))
        }
    }

    /// Whether the profile carries a vegan restriction (drives macro ratios).
    pub fn is_vegan(&self) -> bool {
        self.restrictions.iter().any(|r| r.to_lowercase() == "vegan")
    }
}

/// Daily calorie and macro targets, rounded to whole units.
///
/// Recomputed on demand from the profile; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTarget {
    /// kcal.
    pub calories: u32,

    /// Grams.
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}
