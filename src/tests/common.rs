use async_trait::async_trait;
use chrono::Utc;

use crate::api::types::BasePrice;
use crate::api::{PriceSource, StoreSource};
use crate::config::{Config, MarketConfig};
use crate::error::{Error, Result};
use crate::models::market::{PriceQuote, StoreInfo};

// Helper to create a default test config with dummy keys
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.api.data_go_kr_api_key = "test".to_string();
    config.api.kakao_rest_api_key = "test".to_string();
    config.storage.path = "test-store.json".into();
    config
}

/// Quote for a catalog purity at an explicit buy price; the sell price
/// applies the metal's configured spread.
pub fn sample_quote(purity_id: &str, buy_price: f64) -> PriceQuote {
    let market = MarketConfig::default();
    let purity = market
        .find_purity(purity_id)
        .expect("purity in default catalog")
        .clone();
    let sell_factor = market.sell_factor_for(purity.metal);
    PriceQuote {
        metal: purity.metal,
        purity,
        buy_price,
        sell_price: buy_price * sell_factor,
        change_amount: 0.0,
        change_percent: 0.0,
        timestamp: Utc::now(),
    }
}

pub struct StaticPriceSource(pub BasePrice);

#[async_trait]
impl PriceSource for StaticPriceSource {
    async fn fetch_base_price(&self) -> Result<BasePrice> {
        Ok(self.0.clone())
    }
}

pub struct FailingPriceSource;

#[async_trait]
impl PriceSource for FailingPriceSource {
    async fn fetch_base_price(&self) -> Result<BasePrice> {
        Err(Error::ApiError("simulated price outage".to_string()))
    }
}

pub struct StaticStoreSource(pub Vec<StoreInfo>);

#[async_trait]
impl StoreSource for StaticStoreSource {
    async fn search_nearby(&self, _latitude: f64, _longitude: f64) -> Result<Vec<StoreInfo>> {
        Ok(self.0.clone())
    }
}

pub struct FailingStoreSource;

#[async_trait]
impl StoreSource for FailingStoreSource {
    async fn search_nearby(&self, _latitude: f64, _longitude: f64) -> Result<Vec<StoreInfo>> {
        Err(Error::ApiError("simulated search outage".to_string()))
    }
}
