use std::time::Duration;

use log::{error, info};
use reqwest::{Client, StatusCode};

use crate::api::types::{BasePrice, GoldPriceEnvelope, GoldPriceItem};
use crate::error::{Error, Result};
use crate::utils::cache::TtlCache;

const API_BASE_URL: &str = "https://apis.data.go.kr/1160100/service/GetGeneralProductInfoService";
const CACHE_TTL: Duration = Duration::from_secs(60);
const CACHE_KEY: &str = "gold_base_price";
// The listing quotes several bar sizes; the 1kg bar is the reference.
const BULK_BAR_KEYWORD: &str = "1kg";
const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// Client for the public data.go.kr gold price listing. Returns the
/// per-gram base price derived from the 1kg bar closing price; responses
/// are cached briefly so UI refreshes do not hammer the API.
#[derive(Debug, Clone)]
pub struct DataGoKrClient {
    client: Client,
    service_key: String,
    base_url: String,
    cache: TtlCache<BasePrice>,
}

impl DataGoKrClient {
    pub fn new(service_key: String) -> Self {
        Self {
            client: Client::new(),
            service_key,
            base_url: API_BASE_URL.to_string(),
            cache: TtlCache::new(CACHE_TTL),
        }
    }

    pub async fn fetch_base_price(&self) -> Result<BasePrice> {
        if self.service_key.is_empty() {
            return Err(Error::ConfigError(
                "data.go.kr service key is not configured".to_string(),
            ));
        }

        if let Some(cached) = self.cache.get(CACHE_KEY).await {
            info!("using cached gold base price");
            return Ok(cached);
        }

        let url = format!("{}/getGoldPriceInfo", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("serviceKey", self.service_key.as_str()),
                ("numOfRows", "100"),
                ("resultType", "json"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let err = match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Error::ApiAuthFailed("data.go.kr rejected the service key".to_string())
                }
                _ => Error::ApiError(format!("gold price request failed with status: {}", status)),
            };
            error!("{}", err);
            return Err(err);
        }

        let envelope: GoldPriceEnvelope = response.json().await?;
        let items = envelope
            .response
            .body
            .and_then(|body| body.items)
            .map(|items| items.item)
            .unwrap_or_default();

        let tick = base_price_from_items(&items)?;
        info!(
            "fetched gold base price: {:.0} KRW/g ({:+.2}%)",
            tick.price_per_gram, tick.change_percent
        );
        self.cache.set(CACHE_KEY, tick.clone()).await;
        Ok(tick)
    }
}

/// Picks the 1kg bar out of the listing and converts its closing figures
/// to per-gram values.
pub(crate) fn base_price_from_items(items: &[GoldPriceItem]) -> Result<BasePrice> {
    let bulk = items
        .iter()
        .find(|item| {
            item.item_name
                .as_deref()
                .map_or(false, |name| name.contains(BULK_BAR_KEYWORD))
        })
        .ok_or_else(|| Error::ApiInvalidData("no 1kg gold item in price listing".to_string()))?;

    let close = bulk
        .close_price
        .as_deref()
        .ok_or_else(|| Error::ApiInvalidData("1kg gold item has no closing price".to_string()))?;
    let price_per_gram = parse_krw(close)? / GRAMS_PER_KILOGRAM;
    if !price_per_gram.is_finite() || price_per_gram <= 0.0 {
        return Err(Error::ApiInvalidData(format!(
            "non-positive gold price: {}",
            close
        )));
    }

    let change_percent = match bulk.change_rate.as_deref() {
        Some(raw) => parse_krw(raw)?,
        None => 0.0,
    };
    let change_amount = match bulk.change_amount.as_deref() {
        Some(raw) => parse_krw(raw)? / GRAMS_PER_KILOGRAM,
        None => 0.0,
    };

    Ok(BasePrice {
        price_per_gram,
        change_percent,
        change_amount,
    })
}

// Upstream renders KRW amounts with comma separators.
fn parse_krw(raw: &str) -> Result<f64> {
    raw.replace(',', "")
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::ParseError(format!("bad numeric field: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, close: &str, rate: &str, vs: &str) -> GoldPriceItem {
        GoldPriceItem {
            item_name: Some(name.to_string()),
            close_price: Some(close.to_string()),
            change_rate: Some(rate.to_string()),
            change_amount: Some(vs.to_string()),
        }
    }

    #[test]
    fn test_picks_1kg_item_and_divides_to_grams() {
        let items = vec![
            item("금 99.99_100g", "26,700,000", "0.95", "250,000"),
            item("금 99.99_1kg", "265,333,000", "1.22", "3,200,000"),
        ];
        let tick = base_price_from_items(&items).unwrap();
        assert!((tick.price_per_gram - 265_333.0).abs() < 1e-9);
        assert!((tick.change_percent - 1.22).abs() < 1e-9);
        assert!((tick.change_amount - 3_200.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_1kg_item_is_invalid_data() {
        let items = vec![item("금 99.99_100g", "26,700,000", "0.95", "250,000")];
        assert!(matches!(
            base_price_from_items(&items),
            Err(Error::ApiInvalidData(_))
        ));
        assert!(matches!(
            base_price_from_items(&[]),
            Err(Error::ApiInvalidData(_))
        ));
    }

    #[test]
    fn test_missing_change_fields_default_to_zero() {
        let items = vec![GoldPriceItem {
            item_name: Some("금 99.99_1kg".to_string()),
            close_price: Some("265,333,000".to_string()),
            change_rate: None,
            change_amount: None,
        }];
        let tick = base_price_from_items(&items).unwrap();
        assert_eq!(tick.change_percent, 0.0);
        assert_eq!(tick.change_amount, 0.0);
    }

    #[test]
    fn test_garbled_price_is_a_parse_error() {
        let items = vec![item("금 99.99_1kg", "N/A", "1.22", "3,200,000")];
        assert!(matches!(
            base_price_from_items(&items),
            Err(Error::ParseError(_))
        ));
    }

    #[test]
    fn test_envelope_deserialization() {
        let raw = r#"{
            "response": {
                "body": {
                    "items": {
                        "item": [
                            {"itmsNm": "금 99.99_1kg", "clpr": "265,333,000", "fltRt": "1.22", "vs": "3,200,000"}
                        ]
                    }
                }
            }
        }"#;
        let envelope: GoldPriceEnvelope = serde_json::from_str(raw).unwrap();
        let items = envelope.response.body.unwrap().items.unwrap().item;
        let tick = base_price_from_items(&items).unwrap();
        assert!((tick.price_per_gram - 265_333.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_missing_key_is_a_config_error() {
        let client = DataGoKrClient::new(String::new());
        assert!(matches!(
            client.fetch_base_price().await,
            Err(Error::ConfigError(_))
        ));
    }
}
