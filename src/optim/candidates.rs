use log::debug;
use rand::Rng;

use crate::optim::Mix;

/// One resolved inventory entry the generator may draw from.
#[derive(Debug, Clone)]
pub struct AvailableIngredient {
    pub id: String,
    pub available: f32,
}

/// Subsets smaller than 3 ingredients make poor mixes and subsets larger
/// than 8 blow up the combination count, so the search is bounded to 3-8
/// (or to n when fewer ingredients are on hand).
const MIN_SUBSET: usize = 3;
const MAX_SUBSET: usize = 8;

/// Randomized allocations attempted per ingredient combination.
const DRAWS_PER_COMBO: usize = 10;

/// Per-ingredient draw bounds, as fractions of the remaining target mass.
const MIN_DRAW_FRACTION: f32 = 0.05;
const MAX_DRAW_FRACTION: f32 = 0.70;

/// Lexicographic k-combinations of `0..n`.
struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            indices: (0..k).collect(),
            started: false,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let k = self.indices.len();
        if k > self.n {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }
        // Advance the rightmost index that still has room.
        let mut i = k;
        loop {
            if i == 0 {
                return None;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return Some(self.indices.clone());
            }
        }
    }
}

/// Enumerates ingredient combinations and produces randomized,
/// availability-respecting allocations for a batch of `target_mass` grams.
///
/// For every combination, each ingredient but the last draws a uniform mass
/// between 5% of the remaining target and the lesser of 70% of the remaining
/// target and its availability; the last ingredient takes whatever target
/// mass is left, capped by its availability. When an ingredient's
/// availability sits below the 5% floor the draw interval is reversed and
/// the draw may overshoot availability; such candidates fail the post-scale
/// feasibility check and are dropped. Allocations are then rescaled by
/// `min(target / actual, 1)` - a mix is shrunk towards the target but never
/// inflated to reach it.
///
/// The caller is expected to pass `available` sorted by id so that a fixed
/// RNG seed reproduces the exact candidate list.
pub fn generate_mix_candidates<R: Rng>(
    available: &[AvailableIngredient],
    target_mass: f32,
    rng: &mut R,
) -> Vec<Mix> {
    let n = available.len();
    let mut candidates = Vec::new();
    if n == 0 {
        return candidates;
    }

    let mut amounts: Vec<f32> = Vec::with_capacity(MAX_SUBSET);
    for k in MIN_SUBSET.min(n)..=MAX_SUBSET.min(n) {
        for combo in Combinations::new(n, k) {
            for _ in 0..DRAWS_PER_COMBO {
                amounts.clear();
                let mut remaining = target_mass;
                for (pos, &idx) in combo.iter().enumerate() {
                    let ingredient = &available[idx];
                    let amount = if pos == combo.len() - 1 {
                        remaining.min(ingredient.available)
                    } else {
                        let floor = remaining * MIN_DRAW_FRACTION;
                        let cap = (remaining * MAX_DRAW_FRACTION).min(ingredient.available);
                        let (lo, hi) = if floor <= cap { (floor, cap) } else { (cap, floor) };
                        rng.gen_range(lo..=hi)
                    };
                    amounts.push(amount);
                    remaining -= amount;
                }

                let actual_total: f32 = amounts.iter().sum();
                if actual_total <= 0.0 {
                    continue;
                }
                let scale = (target_mass / actual_total).min(1.0);
                let feasible = combo
                    .iter()
                    .zip(&amounts)
                    .all(|(&idx, &amount)| amount * scale <= available[idx].available);
                if feasible {
                    candidates.push(
                        combo
                            .iter()
                            .zip(&amounts)
                            .map(|(&idx, &amount)| (available[idx].id.clone(), amount * scale))
                            .collect(),
                    );
                }
            }
        }
    }

    debug!(
        "generated {} feasible candidates from {} available ingredients",
        candidates.len(),
        n
    );
    candidates
}
