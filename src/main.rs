use anyhow::{Context, Result};
use log::info;

use pigeon_mix::calculator::MixCalculator;
use pigeon_mix::catalog::IngredientCatalog;
use pigeon_mix::cli::{load_inventory_csv, parse_args, parse_ingredient_spec, resolve_output_path};
use pigeon_mix::optim::Inventory;

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args();

    let mut inventory = match &args.inventory {
        Some(path) => load_inventory_csv(path)
            .with_context(|| format!("Failed to load inventory from {:?}", path))?,
        None => Inventory::new(),
    };
    for spec in &args.ingredients {
        let (name, grams) = parse_ingredient_spec(spec)?;
        *inventory.entry(name).or_insert(0.0) += grams;
    }
    if inventory.is_empty() {
        anyhow::bail!(
            "No inventory given; pass --inventory <csv> and/or --ingredient NAME=GRAMS"
        );
    }
    info!("loaded {} inventory entries", inventory.len());

    let mut calculator = MixCalculator::new(inventory, &args.situation);
    if let Some(path) = &args.catalog {
        let catalog = IngredientCatalog::from_csv(path)
            .with_context(|| format!("Failed to load catalog from {:?}", path))?;
        info!("using catalog from {:?} ({} ingredients)", path, catalog.len());
        calculator = calculator.with_catalog(catalog);
    }
    if let Some(seed) = args.seed {
        calculator = calculator.with_seed(seed);
    }

    let report = calculator
        .calculate(args.batch_size)
        .context("Mix optimization failed")?;

    if report.mix.is_empty() {
        eprintln!("No usable ingredients in inventory - no mix possible.");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.recipe_card);
    }

    if let Some(path) = &args.output {
        let path = resolve_output_path(path, &report.situation);
        std::fs::write(&path, &report.recipe_card)
            .with_context(|| format!("Failed to write recipe card to {:?}", path))?;
        println!("\nRecipe card saved to: {}", path.display());
    }

    Ok(())
}
