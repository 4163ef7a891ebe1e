use crate::catalog::IngredientCatalog;
use crate::optim::nutri_eval::{compute_category_ratios, compute_nutrition};
use crate::optim::Mix;
use crate::profiles::TargetProfile;

const PROTEIN_WEIGHT: f32 = 0.30;
const CARBS_WEIGHT: f32 = 0.25;
const FAT_WEIGHT: f32 = 0.15;
const FIBER_WEIGHT: f32 = 0.10;
const CATEGORY_WEIGHT: f32 = 0.15;
const DIVERSITY_WEIGHT: f32 = 0.05;

/// Fiber is only penalized above this percentage; pigeons utilize fiber
/// poorly, so there is no reward for approaching a midpoint.
const FIBER_THRESHOLD: f32 = 5.0;

/// Distinct ingredients rewarded by the diversity term; flat beyond.
const DIVERSITY_TARGET: f32 = 5.0;

/// Scores how well a mix matches the target profile, in `[0, 1]`.
///
/// Protein, carbs and fat score symmetrically around the midpoint of their
/// target ranges; fiber is flat below [`FIBER_THRESHOLD`] and penalized
/// linearly above it; the category term averages the three per-category
/// midpoint scores; a small diversity bonus rewards up to five distinct
/// ingredients. Every sub-score floors at zero.
pub fn score_mix(mix: &Mix, profile: &TargetProfile, catalog: &IngredientCatalog) -> f32 {
    let nutrition = compute_nutrition(mix, catalog);
    let ratios = compute_category_ratios(mix, catalog);

    let protein_score = midpoint_score(nutrition.protein, profile.protein.midpoint());
    let carbs_score = midpoint_score(nutrition.carbs, profile.carbs.midpoint());
    let fat_score = midpoint_score(nutrition.fat, profile.fat.midpoint());

    let fiber_score = if nutrition.fiber < FIBER_THRESHOLD {
        1.0
    } else {
        (1.0 - (nutrition.fiber - FIBER_THRESHOLD) / FIBER_THRESHOLD).max(0.0)
    };

    let category_score = (midpoint_score(ratios.grain, profile.grain_ratio.midpoint())
        + midpoint_score(ratios.legume, profile.legume_ratio.midpoint())
        + midpoint_score(ratios.seed, profile.seed_ratio.midpoint()))
        / 3.0;

    let diversity_score = (mix.len() as f32 / DIVERSITY_TARGET).min(1.0);

    protein_score * PROTEIN_WEIGHT
        + carbs_score * CARBS_WEIGHT
        + fat_score * FAT_WEIGHT
        + fiber_score * FIBER_WEIGHT
        + category_score * CATEGORY_WEIGHT
        + diversity_score * DIVERSITY_WEIGHT
}

/// Relative distance from the target midpoint, floored at zero.
fn midpoint_score(actual: f32, target_mid: f32) -> f32 {
    (1.0 - (actual - target_mid).abs() / target_mid).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Ingredient, IngredientCatalog};
    use crate::profiles::ProfileStore;

    fn mix(entries: &[(&str, f32)]) -> Mix {
        entries
            .iter()
            .map(|(name, amount)| (name.to_string(), *amount))
            .collect()
    }

    #[test]
    fn test_midpoint_score_exact_and_floor() {
        assert_eq!(midpoint_score(14.25, 14.25), 1.0);
        assert!((midpoint_score(7.125, 14.25) - 0.5).abs() < 1e-6);
        // Twice the midpoint away floors at zero, never negative.
        assert_eq!(midpoint_score(45.0, 14.25), 0.0);
    }

    #[test]
    fn test_fiber_flat_below_threshold() {
        // Two synthetic ingredients identical except for fiber, both below 5%.
        let make = |name: &str, fiber: f32| Ingredient {
            name: name.to_string(),
            category: Category::Grain,
            protein: 14.0,
            carbs: 65.0,
            fat: 3.5,
            fiber,
            notes: String::new(),
        };
        let catalog =
            IngredientCatalog::from_ingredients(vec![make("low_fib", 1.0), make("mid_fib", 4.0)]);
        let store = ProfileStore::builtin();
        let profile = store.profile_for("maintenance");

        let low = score_mix(&mix(&[("low_fib", 1000.0)]), profile, &catalog);
        let mid = score_mix(&mix(&[("mid_fib", 1000.0)]), profile, &catalog);
        assert!((low - mid).abs() < 1e-6);
    }

    #[test]
    fn test_high_fiber_penalized() {
        let store = ProfileStore::builtin();
        let profile = store.profile_for("maintenance");
        let catalog = IngredientCatalog::builtin();
        // Linseed carries 27% fiber; well past the 5% threshold.
        let high = score_mix(&mix(&[("linseed", 1000.0)]), profile, &catalog);
        let low = score_mix(&mix(&[("millet", 1000.0)]), profile, &catalog);
        assert!(high < low);
    }

    #[test]
    fn test_perfect_mix_scores_one() {
        // Five ingredients engineered so the weighted nutrition and category
        // shares land exactly on every maintenance midpoint: protein 14.25,
        // carbs 65, fat 3.5, fiber < 5, grain 65%, legume 17.5%, seed 17.5%.
        let make = |name: &str, category: Category| Ingredient {
            name: name.to_string(),
            category,
            protein: 14.25,
            carbs: 65.0,
            fat: 3.5,
            fiber: 2.0,
            notes: String::new(),
        };
        let catalog = IngredientCatalog::from_ingredients(vec![
            make("g1", Category::Grain),
            make("g2", Category::Grain),
            make("g3", Category::Grain),
            make("l1", Category::Legume),
            make("s1", Category::Seed),
        ]);
        let store = ProfileStore::builtin();
        let profile = store.profile_for("maintenance");

        let m = mix(&[
            ("g1", 250.0),
            ("g2", 200.0),
            ("g3", 200.0),
            ("l1", 175.0),
            ("s1", 175.0),
        ]);
        let score = score_mix(&m, profile, &catalog);
        assert!((score - 1.0).abs() < 1e-4, "score was {}", score);
    }

    #[test]
    fn test_diversity_bonus_capped_at_five() {
        let make = |name: &str| Ingredient {
            name: name.to_string(),
            category: Category::Grain,
            protein: 14.25,
            carbs: 65.0,
            fat: 3.5,
            fiber: 2.0,
            notes: String::new(),
        };
        let names: Vec<String> = (0..7).map(|i| format!("g{}", i)).collect();
        let catalog =
            IngredientCatalog::from_ingredients(names.iter().map(|n| make(n)).collect());
        let store = ProfileStore::builtin();
        let profile = store.profile_for("maintenance");

        let five: Mix = names.iter().take(5).map(|n| (n.clone(), 100.0)).collect();
        let seven: Mix = names.iter().map(|n| (n.clone(), 100.0)).collect();
        let score_five = score_mix(&five, profile, &catalog);
        let score_seven = score_mix(&seven, profile, &catalog);
        assert!((score_five - score_seven).abs() < 1e-6);
    }

    #[test]
    fn test_empty_mix_scores_low() {
        let catalog = IngredientCatalog::builtin();
        let store = ProfileStore::builtin();
        let profile = store.profile_for("maintenance");
        // Zero vectors miss every midpoint; only the fiber term survives.
        let score = score_mix(&Mix::new(), profile, &catalog);
        assert!((score - FIBER_WEIGHT).abs() < 1e-6);
    }
}
