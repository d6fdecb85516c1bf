//! Simulator configuration: environment defaults, overridden by CLI arguments.
//!
//! Environment:
//! - `SHELFLIFE_DAYS`: number of days to print (default 2)
//! - `SHELFLIFE_STRICT_NAMES`: `1`/`true` to reject misspelled special names
//! - `SHELFLIFE_LOG_FORMAT`: `json` (default) or `compact`
//!
//! Arguments: `[days] [--json] [--strict] [--stock <path>]`

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};

use shelflife_inventory::NamePolicy;
use shelflife_observability::LogFormat;

pub const DEFAULT_DAYS: u32 = 2;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The classic `name, sellIn, quality` table.
    #[default]
    Table,
    /// One JSON object per day.
    JsonLines,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    pub days: u32,
    pub output: OutputFormat,
    pub name_policy: NamePolicy,
    pub log_format: LogFormat,
    /// JSON stock file; the standard stock is used when absent.
    pub stock_path: Option<PathBuf>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            output: OutputFormat::Table,
            name_policy: NamePolicy::Lenient,
            log_format: LogFormat::Json,
            stock_path: None,
        }
    }
}

impl SimulatorConfig {
    /// Load from the process environment and arguments.
    pub fn from_env() -> Result<Self> {
        let vars = |key: &str| std::env::var(key).ok();
        Self::load(vars, std::env::args().skip(1))
    }

    /// Load from an explicit variable lookup and argument list.
    pub fn load<V, A>(vars: V, args: A) -> Result<Self>
    where
        V: Fn(&str) -> Option<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        let mut config = Self::default();

        if let Some(days) = vars("SHELFLIFE_DAYS") {
            config.days = parse_days(&days).context("SHELFLIFE_DAYS")?;
        }
        if let Some(strict) = vars("SHELFLIFE_STRICT_NAMES") {
            if parse_flag(&strict).context("SHELFLIFE_STRICT_NAMES")? {
                config.name_policy = NamePolicy::Strict;
            }
        }
        if let Some(format) = vars("SHELFLIFE_LOG_FORMAT") {
            config.log_format = LogFormat::parse(&format)
                .ok_or_else(|| anyhow!("SHELFLIFE_LOG_FORMAT: unknown format {format:?}"))?;
        }

        config.apply_args(args)?;
        Ok(config)
    }

    fn apply_args<A>(&mut self, args: A) -> Result<()>
    where
        A: IntoIterator,
        A::Item: Into<String>,
    {
        let mut args = args.into_iter().map(Into::<String>::into);
        let mut days_seen = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => self.output = OutputFormat::JsonLines,
                "--strict" => self.name_policy = NamePolicy::Strict,
                "--stock" => {
                    let path = args
                        .next()
                        .ok_or_else(|| anyhow!("--stock requires a path argument"))?;
                    self.stock_path = Some(PathBuf::from(path));
                }
                flag if flag.starts_with("--") => bail!("unknown option {flag:?}"),
                value if !days_seen => {
                    self.days = parse_days(value)?;
                    days_seen = true;
                }
                value => bail!(
                    "unexpected argument {value:?}. Usage: shelflife-simulator [days] [--json] [--strict] [--stock <path>]"
                ),
            }
        }

        Ok(())
    }
}

fn parse_days(value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .with_context(|| format!("invalid day count {value:?}"))
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("invalid boolean {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env_or_args() {
        let config = SimulatorConfig::load(env(&[]), Vec::<String>::new()).unwrap();
        assert_eq!(config, SimulatorConfig::default());
        assert_eq!(config.days, 2);
    }

    #[test]
    fn env_sets_defaults_and_args_override() {
        let config = SimulatorConfig::load(
            env(&[
                ("SHELFLIFE_DAYS", "30"),
                ("SHELFLIFE_STRICT_NAMES", "true"),
                ("SHELFLIFE_LOG_FORMAT", "compact"),
            ]),
            ["5", "--json"],
        )
        .unwrap();

        assert_eq!(config.days, 5);
        assert_eq!(config.output, OutputFormat::JsonLines);
        assert_eq!(config.name_policy, NamePolicy::Strict);
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn stock_path_is_read_from_args() {
        let config =
            SimulatorConfig::load(env(&[]), ["--stock", "stock.json", "--strict"]).unwrap();
        assert_eq!(config.stock_path, Some(PathBuf::from("stock.json")));
        assert_eq!(config.name_policy, NamePolicy::Strict);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(SimulatorConfig::load(env(&[]), ["-3"]).is_err());
        assert!(SimulatorConfig::load(env(&[]), ["3", "4"]).is_err());
        assert!(SimulatorConfig::load(env(&[]), ["--verbose"]).is_err());
        assert!(SimulatorConfig::load(env(&[]), ["--stock"]).is_err());
        assert!(SimulatorConfig::load(env(&[("SHELFLIFE_DAYS", "many")]), Vec::<String>::new()).is_err());
        assert!(
            SimulatorConfig::load(env(&[("SHELFLIFE_STRICT_NAMES", "maybe")]), Vec::<String>::new())
                .is_err()
        );
    }
}
