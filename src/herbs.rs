use serde::Serialize;

use crate::advisor::title_case;

/// One herb or supplement entry. Dosages are expressed per kg of finished
/// mix, matching how fanciers measure additives into a batch.
#[derive(Debug, Clone, Serialize)]
pub struct Herb {
    pub id: &'static str,
    pub benefits: &'static [&'static str],
    pub dosage_per_kg: &'static str,
    pub frequency: &'static str,
    pub notes: &'static str,
}

const HERBS: &[Herb] = &[
    Herb {
        id: "garlic",
        benefits: &["immune support", "blood circulation", "natural antiparasitic"],
        dosage_per_kg: "2-3g crushed per kg",
        frequency: "2x per week",
        notes: "Mix into the feed or offer in drinking water",
    },
    Herb {
        id: "brewers_yeast",
        benefits: &["B vitamins", "feather growth", "digestion"],
        dosage_per_kg: "5g per kg",
        frequency: "daily during molt, 3x per week otherwise",
        notes: "Coat seed lightly with oil first so the powder sticks",
    },
    Herb {
        id: "apple_cider_vinegar",
        benefits: &["crop health", "digestion", "mild disinfectant"],
        dosage_per_kg: "5ml per litre of drinking water",
        frequency: "2 days per week",
        notes: "Never combine with garlic water on the same day",
    },
    Herb {
        id: "oregano",
        benefits: &["natural antibiotic", "gut flora support"],
        dosage_per_kg: "1-2g dried per kg",
        frequency: "3x per week",
        notes: "Dried and crumbled over oiled feed",
    },
    Herb {
        id: "anise_seed",
        benefits: &["appetite stimulant", "trapping aid"],
        dosage_per_kg: "1g per kg",
        frequency: "2x per week",
        notes: "Pigeons love the smell; useful for loft training",
    },
    Herb {
        id: "ginger",
        benefits: &["circulation", "warming", "recovery"],
        dosage_per_kg: "1g ground per kg",
        frequency: "2x per week in cold weather",
        notes: "Particularly useful after hard races and in winter",
    },
    Herb {
        id: "nettle",
        benefits: &["minerals", "feather condition", "blood building"],
        dosage_per_kg: "3g dried per kg",
        frequency: "3x per week",
        notes: "Rich in iron and trace minerals for the molt",
    },
    Herb {
        id: "wheat_germ_oil",
        benefits: &["vitamin E", "fertility", "seed coating"],
        dosage_per_kg: "5ml per kg",
        frequency: "2-3x per week during breeding",
        notes: "Also the carrier for powdered supplements",
    },
    Herb {
        id: "rosehips",
        benefits: &["vitamin C", "immune support"],
        dosage_per_kg: "2g crushed per kg",
        frequency: "2x per week",
        notes: "Good winter conditioner",
    },
];

/// Per-situation recommendation lists and the purpose line shown above them.
const RECOMMENDATIONS: &[(&str, &[&str], &str)] = &[
    (
        "maintenance",
        &["garlic", "apple_cider_vinegar", "oregano"],
        "General health upkeep and parasite prevention during rest",
    ),
    (
        "racing",
        &["garlic", "ginger", "brewers_yeast"],
        "Support circulation, energy metabolism and recovery between races",
    ),
    (
        "breeding",
        &["brewers_yeast", "wheat_germ_oil", "anise_seed"],
        "Fertility, egg quality and squab growth",
    ),
    (
        "molting",
        &["brewers_yeast", "nettle", "garlic"],
        "Feather regrowth needs protein, B vitamins and trace minerals",
    ),
    (
        "winter",
        &["ginger", "garlic", "rosehips"],
        "Warmth, circulation and immune support through the cold months",
    ),
];

pub fn herb(id: &str) -> Option<&'static Herb> {
    HERBS.iter().find(|h| h.id == id)
}

/// Renders the herb/supplement advice lines for a situation, or an empty
/// list for situations without a recommendation entry.
pub fn generate_herb_recommendations(situation: &str, profile_name: &str) -> Vec<String> {
    let key = situation.trim().to_lowercase();
    let Some((_, ids, purpose)) = RECOMMENDATIONS.iter().find(|(k, _, _)| *k == key) else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    lines.push(format!("Recommended herbs/supplements for {}:", profile_name));
    lines.push(format!("Purpose: {}", purpose));
    lines.push(String::new());

    for id in *ids {
        if let Some(herb) = herb(id) {
            lines.push(format!("• {}", title_case(herb.id)));
            lines.push(format!("  Benefits: {}", herb.benefits.join(", ")));
            lines.push(format!("  Dosage: {} of mix", herb.dosage_per_kg));
            lines.push(format!("  Frequency: {}", herb.frequency));
            lines.push(format!("  Notes: {}", herb.notes));
            lines.push(String::new());
        }
    }

    lines
}
