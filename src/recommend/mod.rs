use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Metal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub confidence: u8,
    pub action: Action,
    pub reasoning: Vec<String>,
    pub target_price: Option<f64>,
    pub risk_level: RiskLevel,
    pub metal: Metal,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketIndicator {
    pub name: String,
    pub value: String,
    pub change: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub recommendations: Vec<Recommendation>,
    pub indicators: Vec<MarketIndicator>,
    pub generated_at: DateTime<Utc>,
}

/// Canned "AI" report shown on the recommendation view. This is demo
/// content, not analytics: the picks and indicator rows are fixed and only
/// the timestamps move.
pub fn daily_report() -> Report {
    let now = Utc::now();

    let recommendations = vec![
        Recommendation {
            id: "1".to_string(),
            title: "금 매수 추천".to_string(),
            description: "단기 상승 모멘텀이 강화되고 있습니다.".to_string(),
            confidence: 78,
            action: Action::Buy,
            reasoning: vec![
                "글로벌 인플레이션 우려 지속".to_string(),
                "달러 약세 전망".to_string(),
                "중앙은행 금 매수 증가".to_string(),
                "지정학적 리스크 확대".to_string(),
            ],
            target_price: Some(275_000.0),
            risk_level: RiskLevel::Medium,
            metal: Metal::Gold,
            timestamp: now,
        },
        Recommendation {
            id: "2".to_string(),
            title: "은 관망 추천".to_string(),
            description: "변동성이 높아 관망을 권장합니다.".to_string(),
            confidence: 62,
            action: Action::Hold,
            reasoning: vec![
                "산업 수요 불확실성".to_string(),
                "금/은 비율 고점 근접".to_string(),
                "단기 조정 가능성".to_string(),
            ],
            target_price: Some(1_300.0),
            risk_level: RiskLevel::High,
            metal: Metal::Silver,
            timestamp: now,
        },
    ];

    let indicators = vec![
        MarketIndicator {
            name: "달러 인덱스".to_string(),
            value: "103.2".to_string(),
            change: -0.3,
            trend: Trend::Down,
        },
        MarketIndicator {
            name: "국제 금 시세".to_string(),
            value: "$2,042".to_string(),
            change: 1.2,
            trend: Trend::Up,
        },
        MarketIndicator {
            name: "금/은 비율".to_string(),
            value: "85.4".to_string(),
            change: -0.8,
            trend: Trend::Down,
        },
        MarketIndicator {
            name: "VIX 지수".to_string(),
            value: "14.2".to_string(),
            change: 2.1,
            trend: Trend::Up,
        },
    ];

    Report {
        recommendations,
        indicators,
        generated_at: now,
    }
}
