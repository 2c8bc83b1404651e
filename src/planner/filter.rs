//! Dietary restriction and allergy filtering.

use crate::models::FoodEntry;

/// Narrow the catalog to entries compatible with the given restrictions and
/// allergies.
///
/// Restrictions are conjunctive: an entry survives only if it carries every
/// listed tag (case-insensitive). Allergens then remove any entry whose name
/// contains the fragment (case-insensitive). Both passes run on every call.
/// An empty result is a valid output, not an error.
pub fn filter_catalog<'a>(
    catalog: &'a [FoodEntry],
    restrictions: &[String],
    allergies: &[String],
) -> Vec<&'a FoodEntry> {
    let mut filtered: Vec<&FoodEntry> = catalog.iter().collect();

    for restriction in restrictions {
        filtered.retain(|entry| entry.has_tag(restriction));
    }

    for allergen in allergies {
        filtered.retain(|entry| !entry.name_contains(allergen));
    }

    filtered
}
