//! Simulator entry point.

use anyhow::Result;

use shelflife_simulator::{SimulatorConfig, report, stock};

fn main() -> Result<()> {
    let config = SimulatorConfig::from_env()?;
    shelflife_observability::init(config.log_format);

    tracing::info!(
        days = config.days,
        policy = ?config.name_policy,
        stock = ?config.stock_path,
        "starting simulation"
    );

    let mut inventory = stock::load_stock(config.stock_path.as_deref(), config.name_policy)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::run(&mut inventory, config.days, config.output, &mut out)?;

    tracing::info!(days_elapsed = inventory.days_elapsed(), "simulation finished");
    Ok(())
}
