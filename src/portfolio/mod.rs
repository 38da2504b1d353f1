use serde::{Deserialize, Serialize};

use crate::config::MarketConfig;
use crate::models::Purity;

pub const HOLDINGS_KEY: &str = "holdings";

/// A quantity of one purity held by the user. Quantities are grams;
/// prices are KRW per gram. Holdings are demo data persisted as plain
/// records; there is no trade execution behind them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub purity: Purity,
    pub quantity: f64,
    pub average_price: f64,
    pub current_price: f64,
}

impl Holding {
    pub fn value(&self) -> f64 {
        self.quantity * self.current_price
    }

    pub fn invested(&self) -> f64 {
        self.quantity * self.average_price
    }

    pub fn pnl(&self) -> f64 {
        self.value() - self.invested()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_invested: f64,
    pub pnl: f64,
    pub pnl_percent: f64,
}

pub fn summarize(holdings: &[Holding]) -> PortfolioSummary {
    let total_value: f64 = holdings.iter().map(Holding::value).sum();
    let total_invested: f64 = holdings.iter().map(Holding::invested).sum();
    let pnl = total_value - total_invested;
    let pnl_percent = if total_invested > 0.0 {
        pnl / total_invested * 100.0
    } else {
        0.0
    };

    PortfolioSummary {
        total_value,
        total_invested,
        pnl,
        pnl_percent,
    }
}

/// Share of total portfolio value per holding, in holding order. Sums to
/// 1.0 when the portfolio has any value.
pub fn weights(holdings: &[Holding]) -> Vec<f64> {
    let total: f64 = holdings.iter().map(Holding::value).sum();
    holdings
        .iter()
        .map(|h| if total > 0.0 { h.value() / total } else { 0.0 })
        .collect()
}

/// The demo holdings seeded for a fresh account.
pub fn dummy_holdings(market: &MarketConfig) -> Vec<Holding> {
    let seed = [
        ("gold_24k", 25.5, 258_000.0, 268_000.0),
        ("gold_18k", 10.0, 195_000.0, 201_000.0),
        ("silver_999", 100.0, 1_150.0, 1_220.0),
    ];

    seed.iter()
        .filter_map(|(id, quantity, average_price, current_price)| {
            market.find_purity(id).map(|purity| Holding {
                purity: purity.clone(),
                quantity: *quantity,
                average_price: *average_price,
                current_price: *current_price,
            })
        })
        .collect()
}
