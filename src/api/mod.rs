use async_trait::async_trait;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{Config, MarketConfig};
use crate::error::Result;
use crate::models::market::{HistoryPoint, Interval, PriceQuote, StoreInfo};
use crate::models::Metal;
use crate::pricing::{self, history};

pub mod datagokr;
pub mod kakao;
pub mod types;

use types::BasePrice;

/// Something that can produce the gold base price. The live client
/// implements this; tests substitute fixed or failing sources.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch_base_price(&self) -> Result<BasePrice>;
}

#[async_trait]
impl PriceSource for datagokr::DataGoKrClient {
    async fn fetch_base_price(&self) -> Result<BasePrice> {
        datagokr::DataGoKrClient::fetch_base_price(self).await
    }
}

#[async_trait]
pub trait StoreSource: Send + Sync {
    async fn search_nearby(&self, latitude: f64, longitude: f64) -> Result<Vec<StoreInfo>>;
}

#[async_trait]
impl StoreSource for kakao::KakaoLocalClient {
    async fn search_nearby(&self, latitude: f64, longitude: f64) -> Result<Vec<StoreInfo>> {
        kakao::KakaoLocalClient::search_nearby(self, latitude, longitude).await
    }
}

/// Facade over both external sources. All fallback substitution happens
/// here: the pure pricing core below never sees an error, and the clients
/// themselves never decide what "unavailable" means for the app.
pub struct MarketDataCollector<P, S> {
    price_source: P,
    store_source: S,
    market: MarketConfig,
}

impl MarketDataCollector<datagokr::DataGoKrClient, kakao::KakaoLocalClient> {
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            datagokr::DataGoKrClient::new(config.api.data_go_kr_api_key.clone()),
            kakao::KakaoLocalClient::new(config.api.kakao_rest_api_key.clone()),
            config.market.clone(),
        )
    }
}

impl<P: PriceSource, S: StoreSource> MarketDataCollector<P, S> {
    pub fn new(price_source: P, store_source: S, market: MarketConfig) -> Self {
        Self {
            price_source,
            store_source,
            market,
        }
    }

    pub fn market(&self) -> &MarketConfig {
        &self.market
    }

    /// Current quote table for every configured purity, from the live base
    /// price when reachable, otherwise the static fallback figures.
    pub async fn latest_quotes(&self) -> Vec<PriceQuote> {
        match self.price_source.fetch_base_price().await {
            Ok(tick) => pricing::generate_quotes(
                tick.price_per_gram,
                tick.change_percent,
                tick.change_amount,
                &self.market,
            ),
            Err(e) => {
                warn!("price source unavailable, serving fallback table: {}", e);
                pricing::fallback_quotes(&self.market)
            }
        }
    }

    /// Synthesized chart series; entropy-seeded per request.
    pub async fn price_history(&self, metal: Metal, interval: Interval) -> Vec<HistoryPoint> {
        let mut rng = StdRng::from_entropy();
        history::synthesize(metal, interval, &self.market, &mut rng)
    }

    pub async fn nearby_stores(&self, latitude: f64, longitude: f64) -> Vec<StoreInfo> {
        match self.store_source.search_nearby(latitude, longitude).await {
            Ok(stores) if !stores.is_empty() => stores,
            Ok(_) => {
                info!("place search returned nothing, serving fallback stores");
                kakao::fallback_stores()
            }
            Err(e) => {
                warn!("store source unavailable, serving fallback stores: {}", e);
                kakao::fallback_stores()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::{
        create_test_config, FailingPriceSource, FailingStoreSource, StaticPriceSource,
        StaticStoreSource,
    };

    fn collector<P: PriceSource, S: StoreSource>(p: P, s: S) -> MarketDataCollector<P, S> {
        MarketDataCollector::new(p, s, MarketConfig::default())
    }

    #[tokio::test]
    async fn test_live_price_feeds_the_generator() {
        let source = StaticPriceSource(BasePrice {
            price_per_gram: 300_000.0,
            change_percent: 2.5,
            change_amount: 7_000.0,
        });
        let collector = collector(source, FailingStoreSource);

        let quotes = collector.latest_quotes().await;
        let gold_24k = quotes.iter().find(|q| q.purity.id == "gold_24k").unwrap();
        assert_eq!(gold_24k.buy_price, 300_000.0);
        assert_eq!(gold_24k.change_percent, 2.5);
    }

    #[tokio::test]
    async fn test_price_outage_serves_fallback_table() {
        let collector = collector(FailingPriceSource, FailingStoreSource);
        let quotes = collector.latest_quotes().await;
        let gold_24k = quotes.iter().find(|q| q.purity.id == "gold_24k").unwrap();
        assert_eq!(gold_24k.buy_price, 265_333.0);
        assert_eq!(gold_24k.change_percent, 1.22);
    }

    #[tokio::test]
    async fn test_store_outage_serves_fallback_list() {
        let collector = collector(FailingPriceSource, FailingStoreSource);
        let stores = collector.nearby_stores(37.57, 126.99).await;
        assert_eq!(stores.len(), 4);
        assert_eq!(stores[0].name, "골드앤 종로본점");
    }

    #[tokio::test]
    async fn test_live_stores_pass_through() {
        let fixed = kakao::fallback_stores()[..2].to_vec();
        let collector = collector(FailingPriceSource, StaticStoreSource(fixed));
        let stores = collector.nearby_stores(37.57, 126.99).await;
        assert_eq!(stores.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_store_result_falls_back() {
        let collector = collector(FailingPriceSource, StaticStoreSource(Vec::new()));
        let stores = collector.nearby_stores(37.57, 126.99).await;
        assert_eq!(stores.len(), 4);
    }

    #[tokio::test]
    async fn test_collector_from_config() {
        let config = create_test_config();
        let collector = MarketDataCollector::from_config(&config);
        assert_eq!(collector.market().gold_purities.len(), 3);
    }

    #[tokio::test]
    async fn test_history_series_shape() {
        let collector = collector(FailingPriceSource, FailingStoreSource);
        let series = collector.price_history(Metal::Gold, Interval::Year).await;
        assert_eq!(series.len(), 5);
    }
}
