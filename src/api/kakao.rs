use std::collections::HashSet;

use chrono::{Local, Timelike};
use log::{error, info};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};

use crate::api::types::{KakaoPlace, KakaoSearchResponse};
use crate::error::{Error, Result};
use crate::models::market::StoreInfo;

const API_BASE_URL: &str = "https://dapi.kakao.com/v2/local/search/keyword.json";
// Three keyword passes catch shops that register under different categories.
const SEARCH_KEYWORDS: [&str; 3] = ["금은방", "귀금속", "금거래소"];
const SEARCH_RADIUS_M: u32 = 5_000;
// Typical bullion-shop hours; there is no opening-hours field upstream.
const OPEN_HOUR: u32 = 10;
const CLOSE_HOUR: u32 = 19;
const DEFAULT_HOURS: &str = "10:00 - 19:00";
const NO_PHONE: &str = "전화번호 없음";

/// Client for the Kakao local keyword search, mapping place documents to
/// store records sorted by distance.
#[derive(Debug, Clone)]
pub struct KakaoLocalClient {
    client: Client,
    rest_api_key: String,
    base_url: String,
}

impl KakaoLocalClient {
    pub fn new(rest_api_key: String) -> Self {
        Self {
            client: Client::new(),
            rest_api_key,
            base_url: API_BASE_URL.to_string(),
        }
    }

    pub async fn search_nearby(&self, latitude: f64, longitude: f64) -> Result<Vec<StoreInfo>> {
        if self.rest_api_key.is_empty() {
            return Err(Error::ConfigError(
                "Kakao REST API key is not configured".to_string(),
            ));
        }

        let mut batches = Vec::with_capacity(SEARCH_KEYWORDS.len());
        for keyword in SEARCH_KEYWORDS {
            let response = self
                .client
                .get(&self.base_url)
                .query(&[
                    ("query", keyword.to_string()),
                    ("x", longitude.to_string()),
                    ("y", latitude.to_string()),
                    ("radius", SEARCH_RADIUS_M.to_string()),
                    ("sort", "distance".to_string()),
                ])
                .header(AUTHORIZATION, format!("KakaoAK {}", self.rest_api_key))
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let err = match status {
                    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                        Error::ApiAuthFailed("Kakao rejected the REST API key".to_string())
                    }
                    _ => Error::ApiError(format!(
                        "place search for '{}' failed with status: {}",
                        keyword, status
                    )),
                };
                error!("{}", err);
                return Err(err);
            }

            let parsed: KakaoSearchResponse = response.json().await?;
            batches.push(parsed.documents);
        }

        let stores = merge_places(batches, Local::now().hour());
        info!("found {} stores near {:.4},{:.4}", stores.len(), latitude, longitude);
        Ok(stores)
    }
}

/// Merges keyword batches into one distance-sorted store list, keeping the
/// first occurrence of each place id.
fn merge_places(batches: Vec<Vec<KakaoPlace>>, hour: u32) -> Vec<StoreInfo> {
    let mut seen = HashSet::new();
    let mut stores = Vec::new();
    for batch in batches {
        for place in batch {
            if seen.insert(place.id.clone()) {
                stores.push(map_place(place, hour));
            }
        }
    }
    stores.sort_by_key(|store| store.distance_m);
    stores
}

// Rating and review count are presentation mocks derived from the place id
// digits; the upstream search carries neither.
fn map_place(place: KakaoPlace, hour: u32) -> StoreInfo {
    let KakaoPlace {
        id,
        place_name,
        road_address_name,
        address_name,
        phone,
        distance,
        x,
        y,
        place_url,
    } = place;

    let id_digits: u64 = id.parse().unwrap_or(0);
    let address = if road_address_name.is_empty() {
        address_name
    } else {
        road_address_name
    };

    StoreInfo {
        name: place_name,
        address,
        phone: if phone.is_empty() {
            NO_PHONE.to_string()
        } else {
            phone
        },
        distance_m: distance.parse().unwrap_or(0),
        latitude: y.parse().unwrap_or(0.0),
        longitude: x.parse().unwrap_or(0.0),
        rating: 4.0 + (id_digits % 10) as f64 / 10.0,
        review_count: (id_digits % 500).max(10) as u32,
        is_open: (OPEN_HOUR..CLOSE_HOUR).contains(&hour),
        open_time: DEFAULT_HOURS.to_string(),
        is_partner: false,
        place_url,
        id,
    }
}

/// Static store list substituted when the place search is unavailable.
pub fn fallback_stores() -> Vec<StoreInfo> {
    vec![
        StoreInfo {
            id: "1".to_string(),
            name: "골드앤 종로본점".to_string(),
            address: "서울 종로구 종로3가 125-1".to_string(),
            phone: "02-2266-1234".to_string(),
            distance_m: 300,
            latitude: 37.5704,
            longitude: 126.9922,
            rating: 4.8,
            review_count: 328,
            is_open: true,
            open_time: "10:00 - 19:00".to_string(),
            is_partner: true,
            place_url: None,
        },
        StoreInfo {
            id: "2".to_string(),
            name: "한국금거래소 종로점".to_string(),
            address: "서울 종로구 종로 128".to_string(),
            phone: "02-2278-5678".to_string(),
            distance_m: 500,
            latitude: 37.5700,
            longitude: 126.9850,
            rating: 4.6,
            review_count: 245,
            is_open: true,
            open_time: "09:30 - 18:30".to_string(),
            is_partner: false,
            place_url: None,
        },
        StoreInfo {
            id: "3".to_string(),
            name: "순금마을 강남점".to_string(),
            address: "서울 강남구 테헤란로 123".to_string(),
            phone: "02-555-9012".to_string(),
            distance_m: 2_100,
            latitude: 37.5012,
            longitude: 127.0396,
            rating: 4.5,
            review_count: 189,
            is_open: true,
            open_time: "10:00 - 20:00".to_string(),
            is_partner: false,
            place_url: None,
        },
        StoreInfo {
            id: "4".to_string(),
            name: "프리미엄골드 명동점".to_string(),
            address: "서울 중구 명동길 45".to_string(),
            phone: "02-776-3456".to_string(),
            distance_m: 1_200,
            latitude: 37.5636,
            longitude: 126.9869,
            rating: 4.7,
            review_count: 412,
            is_open: false,
            open_time: "10:00 - 19:00".to_string(),
            is_partner: false,
            place_url: None,
        },
    ]
}
