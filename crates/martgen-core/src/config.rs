//! # Configuration File Parser
//!
//! Reads and parses `martgen.toml`, the optional user configuration file
//! that pins row counts, the date range, and the seed without requiring CLI
//! flags. CLI flags take priority over the file.
//!
//! Example `martgen.toml`:
//!
//! ```toml
//! [generate]
//! customers = 100
//! products = 80
//! transactions = 20000
//! seed = 64648
//!
//! [dates]
//! start = "2022-01-01"
//! end = "2024-12-31"
//! ```

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{MartGenError, Result};

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "martgen.toml";

/// Top-level martgen.toml structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MartGenConfig {
    /// Default table sizes and seed.
    pub generate: GenerateConfig,
    /// Date dimension range (quoted `"YYYY-MM-DD"` strings).
    pub dates: DateRangeConfig,
}

/// Default generation settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Customer dimension row count.
    pub customers: Option<usize>,
    /// Product dimension row count.
    pub products: Option<usize>,
    /// Sales fact row count.
    pub transactions: Option<usize>,
    /// Fixed random seed for deterministic generation.
    pub seed: Option<u64>,
}

/// Date dimension range.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DateRangeConfig {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Read and parse a martgen.toml file from the given directory.
///
/// Returns `None` if the file doesn't exist (config is optional).
/// Returns an error if the file exists but can't be parsed.
pub fn read_config(dir: &Path) -> Result<Option<MartGenConfig>> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| MartGenError::Config {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;

    let config: MartGenConfig = toml::from_str(&content).map_err(|e| MartGenError::Config {
        message: format!("Failed to parse {}: {}", path.display(), e),
    })?;

    // Validate semantic constraints that serde can't enforce.
    config.validate()?;

    Ok(Some(config))
}

impl MartGenConfig {
    /// Validate semantic constraints that serde cannot enforce.
    ///
    /// Call this immediately after parsing so configuration mistakes surface
    /// before any generation work runs.
    pub fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.dates.start, self.dates.end) {
            if start > end {
                return Err(MartGenError::Config {
                    message: format!(
                        "[dates]: start {} is after end {}. Swap them or widen the range.",
                        start, end
                    ),
                });
            }
        }

        if let Some(customers) = self.generate.customers {
            if customers < 5 {
                return Err(MartGenError::Config {
                    message: format!(
                        "[generate]: customers = {} is below the minimum of 5 \
                         required for contact-field defect injection.",
                        customers
                    ),
                });
            }
        }

        if let Some(products) = self.generate.products {
            if products < 3 {
                return Err(MartGenError::Config {
                    message: format!(
                        "[generate]: products = {} is below the minimum of 3 \
                         required for price/cost defect injection.",
                        products
                    ),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[generate]
customers = 250
products = 40
transactions = 5000
seed = 64648

[dates]
start = "2022-01-01"
end = "2024-12-31"
"#;

        let config: MartGenConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.generate.customers, Some(250));
        assert_eq!(config.generate.products, Some(40));
        assert_eq!(config.generate.transactions, Some(5000));
        assert_eq!(config.generate.seed, Some(64648));
        assert_eq!(
            config.dates.start,
            NaiveDate::from_ymd_opt(2022, 1, 1)
        );
        assert_eq!(
            config.dates.end,
            NaiveDate::from_ymd_opt(2024, 12, 31)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: MartGenConfig = toml::from_str("").unwrap();

        assert!(config.generate.customers.is_none());
        assert!(config.generate.seed.is_none());
        assert!(config.dates.start.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_inverted_range_fails() {
        let toml = r#"
[dates]
start = "2024-01-01"
end = "2022-01-01"
"#;
        let config: MartGenConfig = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("2024-01-01"), "{}", msg);
    }

    #[test]
    fn test_validate_tiny_counts_fail() {
        let config: MartGenConfig = toml::from_str("[generate]\ncustomers = 3\n").unwrap();
        assert!(config.validate().is_err());

        let config: MartGenConfig = toml::from_str("[generate]\nproducts = 2\n").unwrap();
        assert!(config.validate().is_err());

        let config: MartGenConfig =
            toml::from_str("[generate]\ncustomers = 5\nproducts = 3\n").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_read_config_nonexistent() {
        let result = read_config(Path::new("/nonexistent/dir"));
        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_read_config_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("martgen.toml"),
            r#"
[generate]
transactions = 1000
seed = 7
"#,
        )
        .unwrap();

        let config = read_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.generate.transactions, Some(1000));
        assert_eq!(config.generate.seed, Some(7));
    }

    #[test]
    fn test_read_config_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("martgen.toml"), "this is not valid [[[toml").unwrap();

        let result = read_config(dir.path());
        assert!(result.is_err());
    }
}
