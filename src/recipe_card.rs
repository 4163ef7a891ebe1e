use chrono::Local;

use crate::advisor::{title_case, Severity, Warning};
use crate::catalog::IngredientCatalog;
use crate::optim::{compute_category_ratios, compute_nutrition, total_mass, Mix};
use crate::profiles::TargetProfile;

const CARD_WIDTH: usize = 70;

fn heavy_rule() -> String {
    "═".repeat(CARD_WIDTH)
}

fn light_rule() -> String {
    "─".repeat(CARD_WIDTH)
}

/// Renders the printable recipe card: ingredient table, nutrition versus
/// target ranges, category breakdown, feeding instructions, herb advice and
/// any warnings or suggestions.
pub fn format_recipe_card(
    mix: &Mix,
    profile: &TargetProfile,
    catalog: &IngredientCatalog,
    warnings: &[Warning],
    suggestions: &[String],
    herb_lines: &[String],
) -> String {
    let nutrition = compute_nutrition(mix, catalog);
    let ratios = compute_category_ratios(mix, catalog);
    let total = total_mass(mix);

    let mut card: Vec<String> = Vec::new();
    card.push(heavy_rule());
    card.push(format!("{:^width$}", "PIGEON SEED MIX RECIPE CARD", width = CARD_WIDTH));
    card.push(heavy_rule());
    card.push(String::new());
    card.push(format!("Situation: {}", profile.name));
    card.push(format!("Total Batch Size: {:.0}g", total));
    card.push(format!("Date: {}", Local::now().format("%Y-%m-%d")));
    card.push(String::new());

    card.push("INGREDIENTS:".to_string());
    card.push(light_rule());
    card.push(format!("  {:<30} {:>12} {:>12}", "Ingredient", "Amount", "Percentage"));
    card.push(light_rule());
    // BTreeMap iteration is already name-sorted.
    for (id, amount) in mix {
        let percentage = if total > 0.0 { amount / total * 100.0 } else { 0.0 };
        card.push(format!(
            "  {:<30} {:>10.0}g {:>11.1}%",
            title_case(id),
            amount,
            percentage
        ));
    }
    card.push(String::new());

    card.push("NUTRITIONAL ANALYSIS:".to_string());
    card.push(light_rule());
    card.push(format!(
        "  Protein:        {:>6.1}%    (Target: {:.1}-{:.1}%)",
        nutrition.protein, profile.protein.min, profile.protein.max
    ));
    card.push(format!(
        "  Carbohydrates:  {:>6.1}%    (Target: {:.0}-{:.0}%)",
        nutrition.carbs, profile.carbs.min, profile.carbs.max
    ));
    card.push(format!(
        "  Fat:            {:>6.1}%    (Target: {:.1}-{:.1}%)",
        nutrition.fat, profile.fat.min, profile.fat.max
    ));
    card.push(format!("  Fiber:          {:>6.1}%    (Target: <5%)", nutrition.fiber));
    card.push(String::new());

    card.push("CATEGORY BREAKDOWN:".to_string());
    card.push(light_rule());
    for (label, actual, range) in [
        ("Grains:", ratios.grain, &profile.grain_ratio),
        ("Legumes:", ratios.legume, &profile.legume_ratio),
        ("Seeds:", ratios.seed, &profile.seed_ratio),
    ] {
        card.push(format!(
            "  {:<16} {:>6.1}%    (Target: {:.0}-{:.0}%)",
            label, actual, range.min, range.max
        ));
    }
    card.push(String::new());

    card.push("FEEDING INSTRUCTIONS:".to_string());
    card.push(light_rule());
    for sentence in profile.feeding_notes.split(". ") {
        let sentence = sentence.trim().trim_end_matches('.');
        if !sentence.is_empty() {
            card.push(format!("  • {}", sentence));
        }
    }

    if !herb_lines.is_empty() {
        card.push(String::new());
        card.push("HERB & SUPPLEMENT RECOMMENDATIONS:".to_string());
        card.push(light_rule());
        for line in herb_lines {
            if line.is_empty() {
                card.push(String::new());
            } else {
                card.push(format!("  {}", line));
            }
        }
    }

    if !warnings.is_empty() || !suggestions.is_empty() {
        card.push(String::new());
        card.push("NOTES:".to_string());
        card.push(light_rule());
        for warning in warnings {
            let prefix = match warning.severity {
                Severity::Critical => "⚠ CRITICAL:",
                Severity::Advisory => "⚡ Warning:",
            };
            card.push(format!("  {} {}", prefix, warning.message));
        }
        if !suggestions.is_empty() {
            card.push(String::new());
            card.push("  Suggestions for improvement:".to_string());
            for suggestion in suggestions {
                card.push(format!("  • {}", suggestion));
            }
        }
    }

    card.push(String::new());
    card.push(heavy_rule());
    card.join("\n")
}
