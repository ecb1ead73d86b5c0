//! Configuration loading and representation.
//!
//! Settings come from environment variables; the barcode range table may be
//! supplied as a JSON file, otherwise the built-in GS1 table is used.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use mercadofacil_products::{BarcodeRanges, CountryRange, RangeTableError};

pub const BIND_ADDR_ENV: &str = "MERCADOFACIL_BIND_ADDR";
pub const BARCODE_RANGES_ENV: &str = "MERCADOFACIL_BARCODE_RANGES";
pub const SEED_FIXTURES_ENV: &str = "MERCADOFACIL_SEED_FIXTURES";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },

    #[error("failed to read barcode range table {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed barcode range table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid barcode range table: {0}")]
    Table(#[from] RangeTableError),
}

/// On-disk shape of a range table.
#[derive(Debug, Deserialize)]
struct RangeTableFile {
    countries: Vec<CountryRange>,
}

/// Process configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub barcode_ranges: BarcodeRanges,
    /// Seed the store with the catalog fixtures (product 10).
    pub seed_fixtures: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup(BIND_ADDR_ENV) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidVar {
                var: BIND_ADDR_ENV,
                value,
            })?,
            None => default_bind_addr(),
        };

        let barcode_ranges = match lookup(BARCODE_RANGES_ENV) {
            Some(path) => load_barcode_ranges(Path::new(&path))?,
            None => BarcodeRanges::gs1(),
        };

        let seed_fixtures = match lookup(SEED_FIXTURES_ENV) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidVar {
                var: SEED_FIXTURES_ENV,
                value,
            })?,
            None => true,
        };

        Ok(Self {
            bind_addr,
            barcode_ranges,
            seed_fixtures,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            barcode_ranges: BarcodeRanges::gs1(),
            seed_fixtures: true,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

/// Read and validate a JSON range table.
pub fn load_barcode_ranges(path: &Path) -> Result<BarcodeRanges, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let ranges = parse_barcode_ranges(&json)?;
    tracing::info!(
        path = %path.display(),
        countries = ranges.countries().len(),
        "loaded barcode range table"
    );
    Ok(ranges)
}

pub fn parse_barcode_ranges(json: &str) -> Result<BarcodeRanges, ConfigError> {
    let file: RangeTableFile = serde_json::from_str(json)?;
    Ok(BarcodeRanges::new(file.countries)?)
}
