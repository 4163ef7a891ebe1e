use serde::{Deserialize, Serialize};

/// Inclusive target range for one macro or category ratio, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRange {
    pub min: f32,
    pub max: f32,
}

impl MacroRange {
    pub const fn new(min: f32, max: f32) -> Self {
        MacroRange { min, max }
    }

    pub fn midpoint(&self) -> f32 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Target composition for one pigeon situation. The ranges drive scoring;
/// `feeding_notes` is display text only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetProfile {
    pub name: String,
    pub protein: MacroRange,
    pub carbs: MacroRange,
    pub fat: MacroRange,
    pub fiber: MacroRange,
    pub grain_ratio: MacroRange,
    pub legume_ratio: MacroRange,
    pub seed_ratio: MacroRange,
    pub feeding_notes: String,
}

pub const SITUATIONS: &[&str] = &["maintenance", "racing", "breeding", "molting", "winter"];

/// Static per-situation profile table. Unknown situations fall back to
/// maintenance.
pub struct ProfileStore {
    profiles: Vec<(String, TargetProfile)>,
}

impl ProfileStore {
    pub fn builtin() -> Self {
        let profiles = vec![
            (
                "maintenance".to_string(),
                TargetProfile {
                    name: "Maintenance/Rest".to_string(),
                    protein: MacroRange::new(13.5, 15.0),
                    carbs: MacroRange::new(60.0, 70.0),
                    fat: MacroRange::new(2.0, 5.0),
                    fiber: MacroRange::new(0.0, 5.0),
                    grain_ratio: MacroRange::new(60.0, 70.0),
                    legume_ratio: MacroRange::new(15.0, 20.0),
                    seed_ratio: MacroRange::new(10.0, 15.0),
                    feeding_notes: "Feed 30-40g per bird per day. Light feeding in morning, \
                                    standard mix in evening."
                        .to_string(),
                },
            ),
            (
                "racing".to_string(),
                TargetProfile {
                    name: "Racing/Performance".to_string(),
                    protein: MacroRange::new(16.0, 18.0),
                    carbs: MacroRange::new(60.0, 65.0),
                    fat: MacroRange::new(2.0, 5.0),
                    fiber: MacroRange::new(0.0, 5.0),
                    grain_ratio: MacroRange::new(40.0, 50.0),
                    legume_ratio: MacroRange::new(40.0, 50.0),
                    seed_ratio: MacroRange::new(5.0, 10.0),
                    feeding_notes: "Feed 40-50g per bird per day. High protein for performance. \
                                    Increase peas for long races."
                        .to_string(),
                },
            ),
            (
                "breeding".to_string(),
                TargetProfile {
                    name: "Breeding/Brooding".to_string(),
                    protein: MacroRange::new(14.0, 16.0),
                    carbs: MacroRange::new(60.0, 70.0),
                    fat: MacroRange::new(3.0, 6.0),
                    fiber: MacroRange::new(0.0, 5.0),
                    grain_ratio: MacroRange::new(60.0, 65.0),
                    legume_ratio: MacroRange::new(20.0, 25.0),
                    seed_ratio: MacroRange::new(10.0, 15.0),
                    feeding_notes: "Feed 35-45g per bird per day. Add flaxseed oil coating. \
                                    Support egg production and squab growth."
                        .to_string(),
                },
            ),
            (
                "molting".to_string(),
                TargetProfile {
                    name: "Molting Season".to_string(),
                    protein: MacroRange::new(16.0, 18.0),
                    carbs: MacroRange::new(55.0, 65.0),
                    fat: MacroRange::new(3.0, 6.0),
                    fiber: MacroRange::new(0.0, 5.0),
                    grain_ratio: MacroRange::new(55.0, 60.0),
                    legume_ratio: MacroRange::new(25.0, 30.0),
                    seed_ratio: MacroRange::new(10.0, 15.0),
                    feeding_notes: "Feed 35-45g per bird per day. High protein for feather \
                                    growth. Add brewer's yeast. Provide bathing 1-2x/week."
                        .to_string(),
                },
            ),
            (
                "winter".to_string(),
                TargetProfile {
                    name: "Winter Season".to_string(),
                    protein: MacroRange::new(12.0, 14.0),
                    carbs: MacroRange::new(65.0, 75.0),
                    fat: MacroRange::new(5.0, 8.0),
                    fiber: MacroRange::new(0.0, 5.0),
                    grain_ratio: MacroRange::new(70.0, 75.0),
                    legume_ratio: MacroRange::new(10.0, 15.0),
                    seed_ratio: MacroRange::new(10.0, 15.0),
                    feeding_notes: "Feed 30-40g per bird per day, twice daily. High energy for \
                                    warmth. Add oil seeds (hemp, sunflower) up to 10%."
                        .to_string(),
                },
            ),
        ];
        ProfileStore { profiles }
    }

    pub fn profile_for(&self, situation: &str) -> &TargetProfile {
        let key = situation.trim().to_lowercase();
        self.profiles
            .iter()
            .find(|(k, _)| *k == key)
            .or_else(|| self.profiles.iter().find(|(k, _)| k == "maintenance"))
            .map(|(_, p)| p)
            .expect("builtin profile table always contains maintenance")
    }

    pub fn situations(&self) -> impl Iterator<Item = (&str, &TargetProfile)> {
        self.profiles.iter().map(|(k, p)| (k.as_str(), p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        assert_eq!(MacroRange::new(13.5, 15.0).midpoint(), 14.25);
        assert_eq!(MacroRange::new(0.0, 5.0).midpoint(), 2.5);
    }

    #[test]
    fn test_profile_for_known_situations() {
        let store = ProfileStore::builtin();
        assert_eq!(store.profile_for("racing").name, "Racing/Performance");
        assert_eq!(store.profile_for("WINTER").name, "Winter Season");
        assert_eq!(store.profile_for(" molting ").name, "Molting Season");
    }

    #[test]
    fn test_profile_for_unknown_defaults_to_maintenance() {
        let store = ProfileStore::builtin();
        assert_eq!(store.profile_for("show season").name, "Maintenance/Rest");
        assert_eq!(store.profile_for("").name, "Maintenance/Rest");
    }

    #[test]
    fn test_racing_targets_match_table() {
        let store = ProfileStore::builtin();
        let racing = store.profile_for("racing");
        assert_eq!(racing.protein, MacroRange::new(16.0, 18.0));
        assert_eq!(racing.legume_ratio, MacroRange::new(40.0, 50.0));
    }
}
