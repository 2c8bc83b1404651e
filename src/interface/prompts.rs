use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::catalog;
use crate::error::{PlanError, Result};
use crate::models::{ActivityLevel, Gender, Goal, UserProfile};

/// Restrictions offered up front; anything else is free-typed with fuzzy
/// matching against the catalog's tag set.
const COMMON_RESTRICTIONS: [&str; 5] = [
    "vegan",
    "vegetarian",
    "gluten-free",
    "pescatarian",
    "dairy-free",
];

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("'{}' is not a number", input.trim())))
}

fn prompt_gender() -> Result<Gender> {
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?;

    Ok(if selection == 0 { Gender::Male } else { Gender::Female })
}

fn prompt_activity() -> Result<ActivityLevel> {
    let options = ["Sedentary", "Light", "Moderate", "Very Active", "Extra Active"];
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(2)
        .interact()?;

    Ok(ActivityLevel::parse_or_default(options[selection]))
}

fn prompt_goal() -> Result<Goal> {
    let options = ["Lose", "Maintain", "Gain"];
    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(1)
        .interact()?;

    Ok(Goal::parse_or_default(options[selection]))
}

/// Prompt for dietary restrictions: a multi-select of common tags, then a
/// free-entry loop fuzzy-matched against every tag the catalog knows.
fn prompt_restrictions() -> Result<Vec<String>> {
    let picked = MultiSelect::new()
        .with_prompt("Dietary restrictions (space to toggle, enter to confirm)")
        .items(&COMMON_RESTRICTIONS)
        .interact()?;

    let mut restrictions: Vec<String> = picked
        .into_iter()
        .map(|i| COMMON_RESTRICTIONS[i].to_string())
        .collect();

    let known = catalog::known_tags();

    loop {
        let input: String = Input::new()
            .with_prompt("Additional restriction tag (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim().to_lowercase();
        if input.is_empty() {
            break;
        }

        if known.contains(&input) {
            if !restrictions.contains(&input) {
                restrictions.push(input.clone());
            }
            println!("Added: {}", input);
            continue;
        }

        // Fuzzy-match a typo against known tags.
        let best = known
            .iter()
            .map(|tag| (tag, jaro_winkler(tag, &input)))
            .filter(|(_, score)| *score > 0.8)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        match best {
            Some((tag, _)) => {
                let confirm = Confirm::new()
                    .with_prompt(format!("Did you mean '{}'?", tag))
                    .default(true)
                    .interact()?;
                if confirm && !restrictions.contains(tag) {
                    restrictions.push(tag.clone());
                    println!("Added: {}", tag);
                }
            }
            None => println!("No catalog tag matches '{}'", input),
        }
    }

    Ok(restrictions)
}

fn prompt_allergies() -> Result<Vec<String>> {
    let input: String = Input::new()
        .with_prompt("Allergies (comma-separated name fragments, or empty)")
        .allow_empty(true)
        .interact_text()?;

    Ok(input
        .split(',')
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect())
}

/// Interactively collect a full profile. The returned profile is validated.
pub fn prompt_profile() -> Result<UserProfile> {
    let weight = prompt_number("Weight (kg)", "70")?;
    let height = prompt_number("Height (cm)", "170")?;
    let age = prompt_number("Age (years)", "30")?;
    let gender = prompt_gender()?;
    let activity = prompt_activity()?;
    let goal = prompt_goal()?;
    let meals_per_day = prompt_number("Meals per day", "3")? as u32;
    let restrictions = prompt_restrictions()?;
    let allergies = prompt_allergies()?;

    let profile = UserProfile {
        weight,
        height,
        age,
        gender,
        activity,
        goal,
        restrictions,
        allergies,
        meals_per_day,
    };

    profile.validate()?;
    Ok(profile)
}
