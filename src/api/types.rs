use serde::{Deserialize, Serialize};

/// What the price source boils down to for the core: one pure-gold base
/// price per gram and the day's change figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasePrice {
    pub price_per_gram: f64,
    pub change_percent: f64,
    pub change_amount: f64,
}

// -- data.go.kr gold price listing -----------------------------------------
// Field names follow the upstream payload (itmsNm, clpr, ...); everything
// arrives as strings, commas included.

#[derive(Debug, Clone, Deserialize)]
pub struct GoldPriceEnvelope {
    pub response: GoldPriceResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldPriceResponse {
    #[serde(default)]
    pub body: Option<GoldPriceBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldPriceBody {
    #[serde(default)]
    pub items: Option<GoldPriceItems>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldPriceItems {
    #[serde(default)]
    pub item: Vec<GoldPriceItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoldPriceItem {
    #[serde(rename = "itmsNm", default)]
    pub item_name: Option<String>,
    #[serde(rename = "clpr", default)]
    pub close_price: Option<String>,
    #[serde(rename = "fltRt", default)]
    pub change_rate: Option<String>,
    #[serde(rename = "vs", default)]
    pub change_amount: Option<String>,
}

// -- Kakao local keyword search --------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct KakaoSearchResponse {
    #[serde(default)]
    pub documents: Vec<KakaoPlace>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KakaoPlace {
    pub id: String,
    pub place_name: String,
    #[serde(default)]
    pub road_address_name: String,
    #[serde(default)]
    pub address_name: String,
    #[serde(default)]
    pub phone: String,
    /// Distance from the search origin in meters, as a string.
    #[serde(default)]
    pub distance: String,
    /// Longitude.
    #[serde(default)]
    pub x: String,
    /// Latitude.
    #[serde(default)]
    pub y: String,
    #[serde(default)]
    pub place_url: Option<String>,
}
