use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::advisor::{check_warnings, generate_suggestions, Warning};
use crate::catalog::IngredientCatalog;
use crate::herbs::generate_herb_recommendations;
use crate::optim::optimizer::resolve_available;
use crate::optim::{
    compute_category_ratios, compute_nutrition, optimize_mix, score_mix, total_mass,
    CategoryRatios, Inventory, Mix, NutritionVector, OptimizeError,
};
use crate::profiles::ProfileStore;
use crate::recipe_card::format_recipe_card;

/// Everything one calculation produces: the chosen mix, its evaluation, the
/// advisory output and the rendered card.
#[derive(Debug, Clone, Serialize)]
pub struct MixReport {
    pub situation: String,
    pub profile_name: String,
    pub target_mass: f32,
    pub total_mass: f32,
    pub mix: Mix,
    pub nutrition: NutritionVector,
    pub category_ratios: CategoryRatios,
    pub score: f32,
    pub warnings: Vec<Warning>,
    pub suggestions: Vec<String>,
    pub herb_recommendations: Vec<String>,
    pub recipe_card: String,
}

/// Ties catalog, profile store, optimizer and advisors together for one
/// inventory and situation. Each `calculate` call runs an independent
/// optimization; only the RNG state carries across calls.
pub struct MixCalculator {
    catalog: IngredientCatalog,
    profiles: ProfileStore,
    inventory: Inventory,
    situation: String,
    rng: StdRng,
}

impl MixCalculator {
    pub fn new(inventory: Inventory, situation: &str) -> Self {
        MixCalculator {
            catalog: IngredientCatalog::builtin(),
            profiles: ProfileStore::builtin(),
            inventory,
            situation: situation.trim().to_lowercase(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Replaces the built-in catalog, e.g. with one loaded from CSV.
    pub fn with_catalog(mut self, catalog: IngredientCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Fixes the RNG seed so candidate generation is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn catalog(&self) -> &IngredientCatalog {
        &self.catalog
    }

    /// Optimizes a batch of `target_mass` grams and assembles the full
    /// report around the winning mix.
    pub fn calculate(&mut self, target_mass: f32) -> Result<MixReport, OptimizeError> {
        let profile = self.profiles.profile_for(&self.situation);
        let mix = optimize_mix(
            &self.inventory,
            profile,
            &self.catalog,
            target_mass,
            &mut self.rng,
        )?;

        let available = resolve_available(&self.inventory, &self.catalog);
        let warnings = check_warnings(&mix, &available, profile, &self.catalog);
        let suggestions = generate_suggestions(&mix, &available, &self.situation, &self.catalog);
        let herb_recommendations = generate_herb_recommendations(&self.situation, &profile.name);
        let recipe_card = format_recipe_card(
            &mix,
            profile,
            &self.catalog,
            &warnings,
            &suggestions,
            &herb_recommendations,
        );

        Ok(MixReport {
            situation: self.situation.clone(),
            profile_name: profile.name.clone(),
            target_mass,
            total_mass: total_mass(&mix),
            nutrition: compute_nutrition(&mix, &self.catalog),
            category_ratios: compute_category_ratios(&mix, &self.catalog),
            score: score_mix(&mix, profile, &self.catalog),
            mix,
            warnings,
            suggestions,
            herb_recommendations,
            recipe_card,
        })
    }
}
