//! `shelflife-simulator` — runs the inventory forward and prints it day by day.

pub mod config;
pub mod report;
pub mod stock;

pub use config::{OutputFormat, SimulatorConfig};
