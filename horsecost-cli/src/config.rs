//! Optional defaults file.
//!
//! `horsecost.toml` in the working directory (or a path given with
//! `--config`) can set the region and inflation rate so they do not have
//! to be repeated on every invocation:
//!
//! ```toml
//! region = "south-east"
//! inflation_rate = 0.045
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use horsecost_core::Region;
use horsecost_core::pricing::retirement::default_inflation_rate;

const DEFAULT_CONFIG_FILE: &str = "horsecost.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct FileConfig {
    region: Option<String>,
    inflation_rate: Option<Decimal>,
}

/// Resolved defaults applied wherever a flag was not given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub region: Region,
    pub inflation_rate: Decimal,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            region: Region::Average,
            inflation_rate: default_inflation_rate(),
        }
    }
}

impl Defaults {
    /// Loads defaults from the given path, or from `horsecost.toml` in the
    /// working directory when no path was given.
    ///
    /// An explicit `--config` path must exist; the implicit file is
    /// optional and silently skipped when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let contents = match path {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("cannot read config file '{}'", path.display()))?,
            None => match fs::read_to_string(DEFAULT_CONFIG_FILE) {
                Ok(contents) => contents,
                Err(_) => {
                    debug!("no {DEFAULT_CONFIG_FILE} in the working directory; using built-in defaults");
                    return Ok(Self::default());
                }
            },
        };

        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(contents).context("invalid config file")?;
        let defaults = Self::default();

        let region = match file.region.as_deref() {
            Some(name) => match Region::parse(name) {
                Some(region) => region,
                None => bail!("unknown region '{name}' in config file"),
            },
            None => defaults.region,
        };
        let inflation_rate = file.inflation_rate.unwrap_or(defaults.inflation_rate);

        Ok(Self {
            region,
            inflation_rate,
        })
    }
}
