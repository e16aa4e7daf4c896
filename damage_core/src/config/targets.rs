//! Target profile loading

use super::body_plans::{default_humanoid, validate_body_plan};
use super::ConfigError;
use crate::target::TargetProfile;
use std::path::Path;

/// Load a target profile from a TOML file
///
/// Profiles without `[hit_locations]` get the bundled humanoid body plan.
pub fn load_target_profile(path: &Path) -> Result<TargetProfile, ConfigError> {
    let profile = finish_target_profile(super::load_toml(path)?)?;

    tracing::debug!(
        path = %path.display(),
        name = %profile.name,
        "loaded target profile"
    );
    Ok(profile)
}

/// Load a target profile from a TOML string
///
/// Profiles without `[hit_locations]` get the bundled humanoid body plan.
pub fn parse_target_profile(content: &str) -> Result<TargetProfile, ConfigError> {
    finish_target_profile(super::parse_toml(content)?)
}

fn finish_target_profile(mut profile: TargetProfile) -> Result<TargetProfile, ConfigError> {
    if profile.hit_locations.is_empty() {
        profile.hit_locations = default_humanoid();
    }

    validate_target_profile(&profile)?;
    Ok(profile)
}

fn validate_target_profile(profile: &TargetProfile) -> Result<(), ConfigError> {
    if profile.hit_points.value <= 0 {
        return Err(ConfigError::ValidationError(format!(
            "target '{}' must have positive HP, got {}",
            profile.name, profile.hit_points.value
        )));
    }
    if profile.vulnerability_level < 1 || profile.damage_reduction_level < 1 {
        return Err(ConfigError::ValidationError(format!(
            "target '{}' has a vulnerability or damage reduction level below 1",
            profile.name
        )));
    }

    validate_body_plan(&profile.hit_locations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::DamageType;
    use crate::target::{traits, DamageTarget, HitPoints};

    #[test]
    fn test_parse_target_profile() {
        let toml = r#"
name = "Zombie"
st = 12
hit_points = { value = 14, current = 9 }
traits = ["No Vitals"]
injury_tolerance = "unliving"
hardened_level = 1
"#;

        let profile = parse_target_profile(toml).unwrap();
        assert_eq!(profile.name, "Zombie");
        assert_eq!(profile.hit_points(), HitPoints { value: 14, current: 9 });
        assert!(profile.is_unliving());
        assert!(profile.has_trait(traits::NO_VITALS));
        assert_eq!(profile.hardened_level(), 1);
        assert_eq!(profile.vulnerability_level(), 1);
        // Falls back to the humanoid plan
        assert_eq!(
            profile.hit_locations().dr_for("skull", DamageType::Crushing),
            Some(2)
        );
    }

    #[test]
    fn test_profile_with_body_plan() {
        let toml = r#"
st = 20
hit_points = { value = 30, current = 30 }

[hit_locations]
roll_dice = "1d"

[[hit_locations.locations]]
id = "body"
kind = "torso"
roll = [1, 6]
dr = { all = 4 }
"#;

        let profile = parse_target_profile(toml).unwrap();
        assert_eq!(profile.hit_locations().len(), 1);
        assert_eq!(profile.hit_locations().dr_for("Default", DamageType::Impaling), Some(4));
    }

    #[test]
    fn test_invalid_hp_rejected() {
        let toml = r#"
st = 10
hit_points = { value = 0, current = 0 }
"#;
        assert!(matches!(
            parse_target_profile(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_load_target_profile() {
        let path = std::env::temp_dir().join(format!(
            "damage_core_target_{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "name = \"Ogre\"\nst = 20\nhit_points = { value = 20, current = 20 }\n",
        )
        .unwrap();

        let profile = load_target_profile(&path);
        std::fs::remove_file(&path).unwrap();

        let profile = profile.unwrap();
        assert_eq!(profile.name, "Ogre");
        assert_eq!(profile.st(), 20);
        assert_eq!(
            profile.hit_locations().dr_for("skull", DamageType::Crushing),
            Some(2)
        );
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("damage_core_no_such_target.toml");
        assert!(matches!(
            load_target_profile(&path),
            Err(ConfigError::IoError(_))
        ));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        assert!(matches!(
            parse_target_profile("name = \"Nobody\""),
            Err(ConfigError::ParseError(_))
        ));
    }
}
