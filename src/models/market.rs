use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Metal, Purity};

/// One buy/sell quote for a single purity, derived from the metal base price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceQuote {
    pub metal: Metal,
    pub purity: Purity,
    pub buy_price: f64,
    pub sell_price: f64,
    pub change_amount: f64,
    pub change_percent: f64,
    pub timestamp: DateTime<Utc>,
}

/// One synthesized observation in a chart series. Prices are whole KRW.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub label: String,
    pub price: i64,
    pub high: i64,
    pub low: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Week,
    Month,
    ThreeMonth,
    Year,
}

impl Interval {
    /// Total, never-failing parse: anything unrecognized falls back to
    /// the monthly series.
    pub fn parse(s: &str) -> Interval {
        match s.to_ascii_lowercase().as_str() {
            "week" => Interval::Week,
            "month" => Interval::Month,
            "3month" | "threemonth" | "quarter" => Interval::ThreeMonth,
            "year" => Interval::Year,
            _ => Interval::Month,
        }
    }

    pub fn point_count(self) -> usize {
        match self {
            Interval::Week => 12,
            Interval::Month => 12,
            Interval::ThreeMonth => 8,
            Interval::Year => 5,
        }
    }
}

/// A nearby bullion shop as returned by the place search (or the static
/// fallback list).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub distance_m: u32,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: f64,
    pub review_count: u32,
    pub is_open: bool,
    pub open_time: String,
    pub is_partner: bool,
    pub place_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_parse_known() {
        assert_eq!(Interval::parse("week"), Interval::Week);
        assert_eq!(Interval::parse("month"), Interval::Month);
        assert_eq!(Interval::parse("3month"), Interval::ThreeMonth);
        assert_eq!(Interval::parse("year"), Interval::Year);
    }

    #[test]
    fn test_interval_parse_falls_back_to_month() {
        assert_eq!(Interval::parse("decade"), Interval::Month);
        assert_eq!(Interval::parse(""), Interval::Month);
    }

    #[test]
    fn test_point_counts() {
        assert_eq!(Interval::Week.point_count(), 12);
        assert_eq!(Interval::Month.point_count(), 12);
        assert_eq!(Interval::ThreeMonth.point_count(), 8);
        assert_eq!(Interval::Year.point_count(), 5);
    }
}
