use log::{debug, info};
use rand::Rng;

use crate::catalog::IngredientCatalog;
use crate::optim::candidates::{generate_mix_candidates, AvailableIngredient};
use crate::optim::scoring::score_mix;
use crate::optim::{total_mass, Inventory, Mix, OptimizeError};
use crate::profiles::TargetProfile;

/// Resolves inventory names through the catalog and keeps the entries with
/// positive availability, sorted by id. Unresolvable names are dropped; two
/// inventory lines resolving to the same id pool their amounts.
pub fn resolve_available(
    inventory: &Inventory,
    catalog: &IngredientCatalog,
) -> Vec<AvailableIngredient> {
    let mut available: Vec<AvailableIngredient> = Vec::new();
    for (name, &amount) in inventory {
        if amount <= 0.0 {
            continue;
        }
        if let Some(id) = catalog.resolve(name) {
            match available.iter_mut().find(|a| a.id == id) {
                Some(existing) => existing.available += amount,
                None => available.push(AvailableIngredient { id, available: amount }),
            }
        } else {
            debug!("inventory entry '{}' not in catalog, ignored", name);
        }
    }
    available.sort_by(|a, b| a.id.cmp(&b.id));
    available
}

/// Finds the best mix for the target profile from what the inventory offers.
///
/// Returns an empty mix when nothing in the inventory resolves with positive
/// availability. When the randomized search yields no feasible candidate,
/// falls back to taking every available ingredient scaled proportionally by
/// `min(target / total_available, 1)` - always a non-empty,
/// availability-respecting result, though an unscored one. Either way the
/// returned mix may weigh less than `target_mass` when the inventory cannot
/// cover it; that shortfall is deliberate and silent.
pub fn optimize_mix<R: Rng>(
    inventory: &Inventory,
    profile: &TargetProfile,
    catalog: &IngredientCatalog,
    target_mass: f32,
    rng: &mut R,
) -> Result<Mix, OptimizeError> {
    if target_mass.is_nan() || target_mass <= 0.0 {
        return Err(OptimizeError::InvalidTargetMass(target_mass));
    }
    if let Some((name, amount)) = inventory.iter().find(|(_, amount)| **amount < 0.0) {
        return Err(OptimizeError::NegativeInventory {
            name: name.clone(),
            amount: *amount,
        });
    }

    let available = resolve_available(inventory, catalog);
    if available.is_empty() {
        info!("no usable ingredients in inventory, returning empty mix");
        return Ok(Mix::new());
    }

    let candidates = generate_mix_candidates(&available, target_mass, rng);
    if candidates.is_empty() {
        let total_available: f32 = available.iter().map(|a| a.available).sum();
        let scale = (target_mass / total_available).min(1.0);
        info!(
            "no feasible candidates, falling back to proportional mix of {} ingredients",
            available.len()
        );
        return Ok(available
            .iter()
            .map(|a| (a.id.clone(), a.available * scale))
            .collect());
    }

    // Argmax by score; a strict comparison keeps the first candidate on ties.
    let mut best_mix: Option<&Mix> = None;
    let mut best_score = f32::NEG_INFINITY;
    for candidate in &candidates {
        let score = score_mix(candidate, profile, catalog);
        if score > best_score {
            best_score = score;
            best_mix = Some(candidate);
        }
    }
    let best = best_mix.expect("candidate list is non-empty").clone();
    info!(
        "selected mix of {} ingredients, {:.0}g, score {:.4} (from {} candidates)",
        best.len(),
        total_mass(&best),
        best_score,
        candidates.len()
    );
    Ok(best)
}
