pub mod candidates;
pub mod nutri_eval;
pub mod optimizer;
pub mod scoring;

use std::collections::BTreeMap;

use thiserror::Error;

pub use candidates::generate_mix_candidates;
pub use nutri_eval::{compute_category_ratios, compute_nutrition, CategoryRatios, NutritionVector};
pub use optimizer::optimize_mix;
pub use scoring::score_mix;

/// Ingredient id -> allocated mass in grams. A `BTreeMap` keeps iteration
/// order stable so seeded runs and rendered cards are reproducible.
pub type Mix = BTreeMap<String, f32>;

/// Ingredient name -> available mass in grams, as supplied by the caller.
pub type Inventory = BTreeMap<String, f32>;

pub fn total_mass(mix: &Mix) -> f32 {
    mix.values().sum()
}

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("target mass must be positive, got {0}")]
    InvalidTargetMass(f32),
    #[error("inventory amount for '{name}' is negative ({amount})")]
    NegativeInventory { name: String, amount: f32 },
}
