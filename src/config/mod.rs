use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::{Metal, Purity};

pub const DATA_GO_KR_KEY_ENV: &str = "DATA_GO_KR_API_KEY";
pub const KAKAO_KEY_ENV: &str = "KAKAO_REST_API_KEY";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub market: MarketConfig,
    pub trade: TradeConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ApiConfig {
    pub data_go_kr_api_key: String,
    pub kakao_rest_api_key: String,
}

/// Market-wide constants: fallback figures used when the price source is
/// unreachable, the fixed gold:silver price ratio, sell-side spread
/// factors and chart variances, plus the purity catalogs. Everything the
/// quote generator and series synthesizer need lives here so the
/// generation logic itself carries no literals.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct MarketConfig {
    pub fallback_gold_price: f64,
    pub fallback_silver_price: f64,
    pub fallback_change_percent: f64,
    pub fallback_change_amount: f64,
    pub gold_silver_ratio: f64,
    pub gold_sell_factor: f64,
    pub silver_sell_factor: f64,
    pub gold_variance: f64,
    pub silver_variance: f64,
    pub gold_purities: Vec<Purity>,
    pub silver_purities: Vec<Purity>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            fallback_gold_price: 265_333.0,
            fallback_silver_price: 1_250.0,
            fallback_change_percent: 1.22,
            fallback_change_amount: 3_200.0,
            gold_silver_ratio: 212.0,
            gold_sell_factor: 0.97,
            silver_sell_factor: 0.94,
            gold_variance: 5_000.0,
            silver_variance: 50.0,
            gold_purities: vec![
                Purity::new("gold_24k", "순금 (24K)", "24K", Metal::Gold, 1.0),
                Purity::new("gold_18k", "18K 금", "18K", Metal::Gold, 0.75),
                Purity::new("gold_14k", "14K 금", "14K", Metal::Gold, 0.585),
            ],
            silver_purities: vec![
                Purity::new("silver_999", "순은 (999)", "999", Metal::Silver, 1.0),
                Purity::new("silver_925", "스털링 실버 (925)", "925", Metal::Silver, 0.925),
            ],
        }
    }
}

impl MarketConfig {
    pub fn base_price_for(&self, metal: Metal) -> f64 {
        match metal {
            Metal::Gold => self.fallback_gold_price,
            Metal::Silver => self.fallback_silver_price,
        }
    }

    pub fn variance_for(&self, metal: Metal) -> f64 {
        match metal {
            Metal::Gold => self.gold_variance,
            Metal::Silver => self.silver_variance,
        }
    }

    pub fn sell_factor_for(&self, metal: Metal) -> f64 {
        match metal {
            Metal::Gold => self.gold_sell_factor,
            Metal::Silver => self.silver_sell_factor,
        }
    }

    pub fn purities_for(&self, metal: Metal) -> &[Purity] {
        match metal {
            Metal::Gold => &self.gold_purities,
            Metal::Silver => &self.silver_purities,
        }
    }

    pub fn find_purity(&self, id: &str) -> Option<&Purity> {
        self.gold_purities
            .iter()
            .chain(self.silver_purities.iter())
            .find(|p| p.id == id)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TradeConfig {
    pub vat_rate: f64,
    pub vat_on_sell: bool,
}

impl Default for TradeConfig {
    fn default() -> Self {
        Self {
            vat_rate: 0.10,
            vat_on_sell: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("bullion-store.json"),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        fs::write(path, config_str)?;
        Ok(())
    }

    /// Environment variables win over the file so keys can stay out of
    /// checked-in config.
    pub fn apply_env(&mut self) {
        if let Ok(key) = env::var(DATA_GO_KR_KEY_ENV) {
            if !key.is_empty() {
                self.api.data_go_kr_api_key = key;
            }
        }
        if let Ok(key) = env::var(KAKAO_KEY_ENV) {
            if !key.is_empty() {
                self.api.kakao_rest_api_key = key;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_market_constants() {
        let market = MarketConfig::default();
        assert_eq!(market.fallback_gold_price, 265_333.0);
        assert_eq!(market.fallback_silver_price, 1_250.0);
        assert_eq!(market.gold_silver_ratio, 212.0);
        assert_eq!(market.gold_sell_factor, 0.97);
        assert_eq!(market.silver_sell_factor, 0.94);
        assert_eq!(market.gold_purities.len(), 3);
        assert_eq!(market.silver_purities.len(), 2);
    }

    #[test]
    fn test_find_purity_across_catalogs() {
        let market = MarketConfig::default();
        assert_eq!(market.find_purity("gold_24k").unwrap().ratio, 1.0);
        assert_eq!(market.find_purity("gold_18k").unwrap().ratio, 0.75);
        assert_eq!(market.find_purity("silver_999").unwrap().metal, Metal::Silver);
        assert!(market.find_purity("gold_10k").is_none());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.api.kakao_rest_api_key = "kakao-test".to_string();
        config.trade.vat_rate = 0.05;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.api.kakao_rest_api_key, "kakao-test");
        assert_eq!(loaded.trade.vat_rate, 0.05);
        assert_eq!(loaded.market.gold_purities.len(), 3);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[api]\nkakao_rest_api_key = \"k\"\n").unwrap();
        assert_eq!(config.api.kakao_rest_api_key, "k");
        assert_eq!(config.market.fallback_gold_price, 265_333.0);
        assert_eq!(config.trade.vat_rate, 0.10);
    }
}
