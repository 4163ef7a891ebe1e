use serde::{Deserialize, Serialize};

use crate::catalog::{Category, IngredientCatalog};
use crate::optim::candidates::AvailableIngredient;
use crate::optim::{compute_category_ratios, compute_nutrition, Mix};
use crate::profiles::TargetProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Advisory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    pub severity: Severity,
    pub message: String,
}

impl Warning {
    fn critical(message: impl Into<String>) -> Self {
        Warning {
            severity: Severity::Critical,
            message: message.into(),
        }
    }

    fn advisory(message: impl Into<String>) -> Self {
        Warning {
            severity: Severity::Advisory,
            message: message.into(),
        }
    }
}

pub fn display_name(id: &str) -> String {
    id.replace('_', " ")
}

/// Display name with each word capitalized, for card and advice headings.
pub fn title_case(id: &str) -> String {
    display_name(id)
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flags compositional problems in a finished mix. Thresholds come from
/// pigeon feeding practice: legumes and grains are non-negotiable, protein
/// outside 10-20% stresses the birds, and fiber above 7% is wasted on them.
pub fn check_warnings(
    mix: &Mix,
    available: &[AvailableIngredient],
    profile: &TargetProfile,
    catalog: &IngredientCatalog,
) -> Vec<Warning> {
    let nutrition = compute_nutrition(mix, catalog);
    let ratios = compute_category_ratios(mix, catalog);
    let mut warnings = Vec::new();

    if ratios.legume < 5.0 {
        warnings.push(Warning::critical(
            "No legumes in mix - essential for protein and vitamins!",
        ));
    }
    if ratios.grain < 30.0 {
        warnings.push(Warning::critical(
            "Insufficient grains - essential for energy!",
        ));
    }
    if nutrition.protein < 10.0 {
        warnings.push(Warning::critical(format!(
            "Protein too low ({:.1}%) - minimum 10% needed",
            nutrition.protein
        )));
    }
    if nutrition.protein > 20.0 {
        warnings.push(Warning::critical(format!(
            "Protein too high ({:.1}%) - can stress kidneys",
            nutrition.protein
        )));
    }
    if nutrition.fiber > 7.0 {
        warnings.push(Warning::critical(format!(
            "Fiber too high ({:.1}%) - pigeons don't utilize fiber well",
            nutrition.fiber
        )));
    }
    if mix.len() <= 2 {
        warnings.push(Warning::critical(
            "Very limited diversity - need at least 3-4 ingredients",
        ));
    }

    let has_yellow_corn =
        mix.contains_key("corn_yellow") || available.iter().any(|a| a.id == "corn_yellow");
    if !has_yellow_corn {
        warnings.push(Warning::advisory(
            "No yellow corn - risk of Vitamin A deficiency",
        ));
    }
    if ratios.seed < 3.0 && nutrition.fat < 3.0 {
        warnings.push(Warning::advisory(
            "No oil seeds - fat content may be low",
        ));
    }
    if mix.len() < 4 {
        warnings.push(Warning::advisory(
            "Limited diversity - consider adding more ingredients",
        ));
    }

    let target_protein = profile.protein.midpoint();
    if (nutrition.protein - target_protein).abs() / target_protein > 0.15 {
        warnings.push(Warning::advisory(format!(
            "Protein ({:.1}%) differs from target ({:.1}%) by >15%",
            nutrition.protein, target_protein
        )));
    }

    warnings
}

/// Suggests concrete improvements: unused inventory worth adding, high-fiber
/// ingredients worth cutting, and situation-specific adjustments.
pub fn generate_suggestions(
    mix: &Mix,
    available: &[AvailableIngredient],
    situation: &str,
    catalog: &IngredientCatalog,
) -> Vec<String> {
    let nutrition = compute_nutrition(mix, catalog);
    let ratios = compute_category_ratios(mix, catalog);
    let mut suggestions = Vec::new();

    let unused_of_category = |category: Category| {
        available
            .iter()
            .find(|a| {
                !mix.contains_key(&a.id)
                    && catalog
                        .lookup(&a.id)
                        .map_or(false, |ing| ing.category == category)
            })
            .map(|a| a.id.clone())
    };

    if ratios.legume < 15.0 {
        if let Some(id) = unused_of_category(Category::Legume) {
            suggestions.push(format!(
                "Add {} to increase protein and legume content",
                display_name(&id)
            ));
        }
    }

    let situation = situation.trim().to_lowercase();
    if ratios.seed < 5.0 && matches!(situation.as_str(), "breeding" | "molting" | "winter") {
        if let Some(id) = unused_of_category(Category::Seed) {
            suggestions.push(format!(
                "Add {} to increase fat content (important for {})",
                display_name(&id),
                situation
            ));
        }
    }

    if !mix.contains_key("corn_yellow") && available.iter().any(|a| a.id == "corn_yellow") {
        suggestions.push("Add yellow corn for Vitamin A (essential nutrient)".to_string());
    }

    if nutrition.fiber > 5.0 {
        let worst = mix
            .keys()
            .filter_map(|id| catalog.lookup(id))
            .filter(|ing| ing.fiber > 7.0)
            .max_by(|a, b| a.fiber.total_cmp(&b.fiber));
        if let Some(ingredient) = worst {
            suggestions.push(format!(
                "Reduce {} to lower fiber content",
                display_name(&ingredient.name)
            ));
        }
    }

    match situation.as_str() {
        "racing" if ratios.legume < 35.0 => suggestions.push(
            "For racing, increase peas/legumes to 40-50% for better performance".to_string(),
        ),
        "winter" if nutrition.fat < 5.0 => suggestions
            .push("For winter, add more oil seeds (hemp, sunflower) for warmth".to_string()),
        "molting" if nutrition.protein < 16.0 => suggestions
            .push("For molting, increase protein to 16%+ with more legumes".to_string()),
        _ => {}
    }

    suggestions
}
