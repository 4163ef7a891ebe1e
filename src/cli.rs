use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};

use crate::optim::Inventory;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pigeon situation: maintenance, racing, breeding, molting or winter
    #[arg(short, long, default_value = "maintenance")]
    pub situation: String,

    /// Desired batch size in grams
    #[arg(short, long, default_value_t = 1000.0)]
    pub batch_size: f32,

    /// Inventory entry as NAME=GRAMS; repeatable
    #[arg(short, long = "ingredient", value_name = "NAME=GRAMS")]
    pub ingredients: Vec<String>,

    /// CSV file with inventory rows (columns: Name, Grams)
    #[arg(long, value_name = "FILE")]
    pub inventory: Option<PathBuf>,

    /// Alternate ingredient catalog CSV
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// RNG seed for reproducible candidate generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also write the recipe card to this file, or into this directory
    /// under a timestamped name
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit the full report as JSON instead of the recipe card
    #[arg(long)]
    pub json: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Parses one `--ingredient` argument of the form `name=grams`.
pub fn parse_ingredient_spec(spec: &str) -> Result<(String, f32)> {
    let (name, amount) = spec
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Expected NAME=GRAMS, got '{}'", spec))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow::anyhow!("Empty ingredient name in '{}'", spec));
    }
    let grams: f32 = amount
        .trim()
        .parse()
        .with_context(|| format!("Invalid gram amount in '{}'", spec))?;
    Ok((name.to_string(), grams))
}

/// Resolves where the recipe card is written: when `--output` names a
/// directory, a `pigeon_mix_<situation>_<timestamp>.txt` file inside it;
/// otherwise the path as given.
pub fn resolve_output_path(path: &Path, situation: &str) -> PathBuf {
    if path.is_dir() {
        path.join(format!(
            "pigeon_mix_{}_{}.txt",
            situation,
            Local::now().format("%Y%m%d_%H%M%S")
        ))
    } else {
        path.to_path_buf()
    }
}

const INVENTORY_NAME_COL: &str = "Name";
const INVENTORY_GRAMS_COL: &str = "Grams";

/// Loads an inventory CSV with `Name` and `Grams` columns. Rows with an
/// empty name are skipped; duplicate names pool their amounts.
pub fn load_inventory_csv(csv_path: &Path) -> Result<Inventory> {
    if !csv_path.exists() {
        return Err(anyhow::anyhow!("Inventory CSV file not found at: {:?}", csv_path));
    }

    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open inventory CSV file at {:?}", csv_path))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = rdr.headers()?.clone();
    let name_idx = headers
        .iter()
        .position(|h| h == INVENTORY_NAME_COL)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", INVENTORY_NAME_COL))?;
    let grams_idx = headers
        .iter()
        .position(|h| h == INVENTORY_GRAMS_COL)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", INVENTORY_GRAMS_COL))?;

    let mut inventory = Inventory::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("Failed to read record at row index {}", row_index))?;
        let name = record.get(name_idx).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        let grams: f32 = record
            .get(grams_idx)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("Invalid gram amount for '{}' at row index {}", name, row_index))?;
        *inventory.entry(name.to_string()).or_insert(0.0) += grams;
    }

    if inventory.is_empty() {
        return Err(anyhow::anyhow!("No inventory rows loaded from {:?}", csv_path));
    }
    Ok(inventory)
}
