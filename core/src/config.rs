use crate::{types::Money, view::BandSet};
use serde::{Deserialize, Serialize};

/// Presentation and tolerance settings for generated reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Table rows per report page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Largest |assets − (liabilities + equity)| still shown as balanced.
    #[serde(default = "default_balance_tolerance")]
    pub balance_tolerance: Money,
    #[serde(default)]
    pub staff_band_set: BandSet,
    #[serde(default = "default_freelancer_band_set")]
    pub freelancer_band_set: BandSet,
}

fn default_currency_symbol() -> String {
    "₹".into()
}

fn default_page_size() -> usize {
    25
}

fn default_balance_tolerance() -> Money {
    1.0
}

fn default_freelancer_band_set() -> BandSet {
    BandSet::Wide
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            page_size: default_page_size(),
            balance_tolerance: default_balance_tolerance(),
            staff_band_set: BandSet::Compact,
            freelancer_band_set: default_freelancer_band_set(),
        }
    }
}

impl ReportConfig {
    /// Load from the data/ directory.
    /// In tests, use ReportConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/report_config.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: ReportConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        if config.page_size == 0 {
            anyhow::bail!("{path}: page_size must be at least 1");
        }
        Ok(config)
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: ReportConfig = serde_json::from_str(r#"{ "page_size": 40 }"#).unwrap();
        assert_eq!(config.page_size, 40);
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.balance_tolerance, 1.0);
        assert_eq!(config.staff_band_set, BandSet::Compact);
        assert_eq!(config.freelancer_band_set, BandSet::Wide);
    }
}
