use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Coarse ingredient grouping used for the per-category ratio targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Grain,
    Legume,
    Seed,
}

impl Category {
    pub fn parse(s: &str) -> Option<Category> {
        match s.trim().to_lowercase().as_str() {
            "grain" => Some(Category::Grain),
            "legume" => Some(Category::Legume),
            "seed" => Some(Category::Seed),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Grain => write!(f, "grain"),
            Category::Legume => write!(f, "legume"),
            Category::Seed => write!(f, "seed"),
        }
    }
}

/// Macro values are percentages of the ingredient's own mass, so they do not
/// need to sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub category: Category,
    pub protein: f32,
    pub carbs: f32,
    pub fat: f32,
    pub fiber: f32,
    pub notes: String,
}

/// Read-only ingredient table with name resolution. Loaded once and shared;
/// the optimizer never mutates it.
#[derive(Debug)]
pub struct IngredientCatalog {
    ingredients: BTreeMap<String, Ingredient>,
}

macro_rules! ingredient {
    ($map:ident, $name:expr, $cat:expr, $p:expr, $c:expr, $f:expr, $fb:expr, $notes:expr) => {
        $map.insert(
            $name.to_string(),
            Ingredient {
                name: $name.to_string(),
                category: $cat,
                protein: $p,
                carbs: $c,
                fat: $f,
                fiber: $fb,
                notes: $notes.to_string(),
            },
        );
    };
}

impl IngredientCatalog {
    /// The built-in seed/grain/legume table.
    pub fn builtin() -> Self {
        use Category::*;
        let mut m = BTreeMap::new();
        // Grains
        ingredient!(m, "wheat", Grain, 13.5, 71.0, 2.0, 3.0, "Higher protein grain");
        ingredient!(m, "corn_yellow", Grain, 9.0, 74.0, 4.5, 2.5, "Vitamin A source, essential");
        ingredient!(m, "corn_white", Grain, 9.0, 74.0, 4.5, 2.5, "Avoid - lacks Vitamin A");
        ingredient!(m, "barley", Grain, 11.0, 73.0, 2.0, 5.0, "Easily digestible");
        ingredient!(m, "milo", Grain, 11.0, 73.0, 3.0, 2.0, "Similar to corn, lacks Vitamin A");
        ingredient!(m, "oats", Grain, 13.0, 66.0, 6.0, 10.0, "High fiber, use sparingly");
        // Legumes
        ingredient!(m, "peas", Legume, 23.0, 60.0, 1.5, 5.0, "Most essential ingredient");
        ingredient!(m, "peas_field", Legume, 24.0, 60.0, 1.5, 5.0, "High protein");
        ingredient!(m, "peas_canada", Legume, 24.0, 60.0, 1.5, 5.0, "High protein");
        ingredient!(m, "lentils", Legume, 25.0, 63.0, 1.0, 8.0, "Very high protein");
        ingredient!(m, "beans", Legume, 22.0, 62.0, 1.0, 6.0, "Must be cooked");
        ingredient!(m, "mung_beans", Legume, 24.0, 63.0, 1.0, 7.0, "Safe uncooked");
        // Seeds
        ingredient!(m, "safflower", Seed, 16.0, 34.0, 38.0, 9.0, "High fat, king of seeds");
        ingredient!(m, "sunflower", Seed, 20.0, 20.0, 51.0, 9.0, "Very high fat");
        ingredient!(m, "linseed", Seed, 18.0, 29.0, 42.0, 27.0, "Omega-3, feather health");
        ingredient!(m, "flaxseed", Seed, 18.0, 29.0, 42.0, 27.0, "Same as linseed");
        ingredient!(m, "hemp", Seed, 31.0, 28.0, 49.0, 4.0, "Omega-3 rich");
        ingredient!(m, "millet", Seed, 11.0, 73.0, 4.0, 3.0, "Small seed");
        ingredient!(m, "canola", Seed, 20.0, 24.0, 40.0, 12.0, "Oil seed");
        IngredientCatalog { ingredients: m }
    }

    pub fn from_ingredients(ingredients: Vec<Ingredient>) -> Self {
        IngredientCatalog {
            ingredients: ingredients
                .into_iter()
                .map(|ing| (ing.name.clone(), ing))
                .collect(),
        }
    }

    pub fn lookup(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ingredients.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Maps a user-supplied name to a catalog id: exact match after
    /// normalization, then a table of common variations, then a substring
    /// match against the catalog keys. Returns `None` for names the catalog
    /// does not know.
    pub fn resolve(&self, raw_name: &str) -> Option<String> {
        let name = raw_name
            .to_lowercase()
            .trim()
            .replace(' ', "_")
            .replace('-', "_");

        if self.ingredients.contains_key(&name) {
            return Some(name);
        }

        if let Some(&canonical) = VARIATIONS.iter().find(|(v, _)| *v == name).map(|(_, c)| c) {
            if self.ingredients.contains_key(canonical) {
                return Some(canonical.to_string());
            }
        }

        self.ingredients
            .keys()
            .find(|key| name.contains(key.as_str()) || key.contains(&name))
            .cloned()
    }

    /// Loads an alternate catalog from CSV. Rows with an empty name are
    /// skipped; rows whose macro columns fail to parse are rejected.
    pub fn from_csv(csv_path: &Path) -> Result<Self> {
        if !csv_path.exists() {
            return Err(anyhow::anyhow!("Catalog CSV file not found at: {:?}", csv_path));
        }

        let file = std::fs::File::open(csv_path)
            .with_context(|| format!("Failed to open catalog CSV file at {:?}", csv_path))?;
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

        let headers = rdr.headers()?.clone();
        let col = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", name))
        };
        let name_idx = col(NAME_COL)?;
        let category_idx = col(CATEGORY_COL)?;
        let protein_idx = col(PROTEIN_COL)?;
        let carbs_idx = col(CARBS_COL)?;
        let fat_idx = col(FAT_COL)?;
        let fiber_idx = col(FIBER_COL)?;
        let notes_idx = headers.iter().position(|h| h == NOTES_COL);

        let mut ingredients = Vec::new();
        for (row_index, result) in rdr.records().enumerate() {
            let record =
                result.with_context(|| format!("Failed to read record at row index {}", row_index))?;

            let name = record
                .get(name_idx)
                .unwrap_or("")
                .trim()
                .to_lowercase()
                .replace(' ', "_");
            if name.is_empty() {
                continue;
            }

            let category = record
                .get(category_idx)
                .and_then(Category::parse)
                .ok_or_else(|| {
                    anyhow::anyhow!("Invalid category for '{}' at row index {}", name, row_index)
                })?;
            let macro_value = |idx: usize, label: &str| {
                record
                    .get(idx)
                    .and_then(parse_f32)
                    .ok_or_else(|| {
                        anyhow::anyhow!("Invalid {} for '{}' at row index {}", label, name, row_index)
                    })
            };

            ingredients.push(Ingredient {
                name: name.clone(),
                category,
                protein: macro_value(protein_idx, "protein")?,
                carbs: macro_value(carbs_idx, "carbs")?,
                fat: macro_value(fat_idx, "fat")?,
                fiber: macro_value(fiber_idx, "fiber")?,
                notes: notes_idx
                    .and_then(|i| record.get(i))
                    .unwrap_or("")
                    .trim()
                    .to_string(),
            });
        }

        if ingredients.is_empty() {
            return Err(anyhow::anyhow!("No ingredients loaded from {:?}", csv_path));
        }

        Ok(Self::from_ingredients(ingredients))
    }
}

// Expected catalog CSV column headers.
const NAME_COL: &str = "Name";
const CATEGORY_COL: &str = "Category";
const PROTEIN_COL: &str = "Protein (%)";
const CARBS_COL: &str = "Carbs (%)";
const FAT_COL: &str = "Fat (%)";
const FIBER_COL: &str = "Fiber (%)";
const NOTES_COL: &str = "Notes";

fn parse_f32(s: &str) -> Option<f32> {
    s.trim().parse::<f32>().ok()
}

// Common names fanciers use that differ from the catalog ids.
const VARIATIONS: &[(&str, &str)] = &[
    ("corn", "corn_yellow"),
    ("yellow_corn", "corn_yellow"),
    ("white_corn", "corn_white"),
    ("maize", "corn_yellow"),
    ("flax", "flaxseed"),
    ("field_peas", "peas_field"),
    ("canada_peas", "peas_canada"),
    ("canadian_peas", "peas_canada"),
    ("pea", "peas"),
    ("mung", "mung_beans"),
    ("bean", "beans"),
    ("lentil", "lentils"),
    ("sunflower_seed", "sunflower"),
    ("safflower_seed", "safflower"),
    ("linum", "linseed"),
    ("rapeseed", "canola"),
];
