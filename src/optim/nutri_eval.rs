use serde::{Deserialize, Serialize};

use crate::catalog::{Category, IngredientCatalog};
use crate::optim::{total_mass, Mix};

/// Mass-fraction-weighted macro percentages of a mix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionVector {
    pub protein: f32,
    pub carbs: f32,
    pub fat: f32,
    pub fiber: f32,
}

/// Percent of total mix mass contributed by each category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryRatios {
    pub grain: f32,
    pub legume: f32,
    pub seed: f32,
}

/// Computes the aggregate nutrition of a mix as the mass-weighted average of
/// its ingredients' macro percentages.
///
/// A zero-mass mix yields the zero vector rather than dividing by zero.
/// Ingredient ids absent from the catalog contribute mass to the denominator
/// but no macros: unknown ingredients dilute, they never nourish.
pub fn compute_nutrition(mix: &Mix, catalog: &IngredientCatalog) -> NutritionVector {
    let total = total_mass(mix);
    if total == 0.0 {
        return NutritionVector::default();
    }

    let mut nutrition = NutritionVector::default();
    for (id, amount) in mix {
        if let Some(ingredient) = catalog.lookup(id) {
            let weight_ratio = amount / total;
            nutrition.protein += ingredient.protein * weight_ratio;
            nutrition.carbs += ingredient.carbs * weight_ratio;
            nutrition.fat += ingredient.fat * weight_ratio;
            nutrition.fiber += ingredient.fiber * weight_ratio;
        }
    }
    nutrition
}

/// Computes the share of total mix mass per category, in percent. Same
/// zero-mass and unknown-id policy as [`compute_nutrition`], so the three
/// ratios only sum to ~100 when every id resolves.
pub fn compute_category_ratios(mix: &Mix, catalog: &IngredientCatalog) -> CategoryRatios {
    let total = total_mass(mix);
    if total == 0.0 {
        return CategoryRatios::default();
    }

    let mut ratios = CategoryRatios::default();
    for (id, amount) in mix {
        if let Some(ingredient) = catalog.lookup(id) {
            let share = amount / total * 100.0;
            match ingredient.category {
                Category::Grain => ratios.grain += share,
                Category::Legume => ratios.legume += share,
                Category::Seed => ratios.seed += share,
            }
        }
    }
    ratios
}
