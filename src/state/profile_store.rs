use std::fs;
use std::path::Path;

use crate::error::{PlanError, Result};
use crate::models::UserProfile;

/// Load a profile from a JSON file, validating it before returning.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<UserProfile> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PlanError::ProfileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let profile: UserProfile = serde_json::from_str(&content)?;
    profile.validate()?;
    Ok(profile)
}

/// Save a profile to a JSON file as pretty-printed JSON.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &UserProfile) -> Result<()> {
    profile.validate()?;
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;
    Ok(())
}
