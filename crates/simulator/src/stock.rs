//! Opening stock: the standard fixture, or a JSON file of items.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use shelflife_inventory::fixtures::standard_stock;
use shelflife_inventory::{Inventory, NamePolicy};

/// One entry of a stock file: `{"name": ..., "sell_in": ..., "quality": ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StockEntry {
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
}

/// Parse a JSON array of stock entries and classify them under `policy`.
pub fn parse_stock(json: &str, policy: NamePolicy) -> Result<Inventory> {
    let entries: Vec<StockEntry> = serde_json::from_str(json).context("malformed stock file")?;
    let inventory = Inventory::from_triples(
        entries.into_iter().map(|e| (e.name, e.sell_in, e.quality)),
        policy,
    )?;
    Ok(inventory)
}

pub fn load_stock(path: Option<&Path>, policy: NamePolicy) -> Result<Inventory> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading stock file {}", path.display()))?;
            let inventory = parse_stock(&json, policy)?;
            tracing::info!(path = %path.display(), items = inventory.len(), "loaded stock file");
            Ok(inventory)
        }
        None => Ok(Inventory::new(standard_stock())),
    }
}
