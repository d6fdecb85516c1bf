//! Day-by-day rendering of the inventory.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use shelflife_inventory::{Inventory, Item};

use crate::config::OutputFormat;

#[derive(Debug, Serialize)]
struct DaySnapshot<'a> {
    day: u32,
    items: &'a [Item],
}

/// Print `days` snapshots, advancing the inventory after each one.
///
/// Day 0 is the opening stock; the inventory ends `days` days older.
pub fn run<W: Write>(
    inventory: &mut Inventory,
    days: u32,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    for day in 0..days {
        match format {
            OutputFormat::Table => write_table(out, day, inventory.items())?,
            OutputFormat::JsonLines => {
                let snapshot = DaySnapshot {
                    day,
                    items: inventory.items(),
                };
                serde_json::to_writer(&mut *out, &snapshot)?;
                writeln!(out)?;
            }
        }
        inventory.advance_one_day();
    }
    out.flush()?;
    Ok(())
}

fn write_table<W: Write>(out: &mut W, day: u32, items: &[Item]) -> Result<()> {
    writeln!(out, "-------- day {day} --------")?;
    writeln!(out, "name, sellIn, quality")?;
    for item in items {
        writeln!(out, "{item}")?;
    }
    writeln!(out)?;
    Ok(())
}
