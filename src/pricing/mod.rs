use chrono::Utc;

use crate::config::MarketConfig;
use crate::models::market::PriceQuote;
use crate::models::Metal;

pub mod history;
pub mod units;

/// Expands one pure-gold base price (KRW/g) into buy/sell quotes for every
/// configured purity of both metals. The silver base price is derived from
/// the configured gold:silver ratio; sell prices apply the per-metal spread
/// factor. Never fails; callers decide whether to feed a live or fallback
/// base price.
pub fn generate_quotes(
    base_price: f64,
    change_percent: f64,
    change_amount: f64,
    market: &MarketConfig,
) -> Vec<PriceQuote> {
    let now = Utc::now();
    let mut quotes = Vec::with_capacity(market.gold_purities.len() + market.silver_purities.len());

    for purity in &market.gold_purities {
        let buy_price = base_price * purity.ratio;
        quotes.push(PriceQuote {
            metal: Metal::Gold,
            purity: purity.clone(),
            buy_price,
            sell_price: buy_price * market.gold_sell_factor,
            change_amount: change_amount * purity.ratio,
            change_percent,
            timestamp: now,
        });
    }

    let silver_base = base_price / market.gold_silver_ratio;
    for purity in &market.silver_purities {
        let buy_price = silver_base * purity.ratio;
        quotes.push(PriceQuote {
            metal: Metal::Silver,
            purity: purity.clone(),
            buy_price,
            sell_price: buy_price * market.silver_sell_factor,
            change_amount: (change_amount / market.gold_silver_ratio) * purity.ratio,
            change_percent,
            timestamp: now,
        });
    }

    quotes
}

/// Quote table built from the static fallback figures, used whenever the
/// live price source is unreachable or unconfigured.
pub fn fallback_quotes(market: &MarketConfig) -> Vec<PriceQuote> {
    generate_quotes(
        market.fallback_gold_price,
        market.fallback_change_percent,
        market.fallback_change_amount,
        market,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market() -> MarketConfig {
        MarketConfig::default()
    }

    #[test]
    fn test_sell_never_exceeds_buy() {
        let quotes = generate_quotes(300_000.0, 0.5, 1_000.0, &market());
        assert_eq!(quotes.len(), 5);
        for q in &quotes {
            assert!(
                q.sell_price <= q.buy_price,
                "{}: sell {} > buy {}",
                q.purity.id,
                q.sell_price,
                q.buy_price
            );
        }
    }

    #[test]
    fn test_buy_price_proportional_to_ratio() {
        let quotes = generate_quotes(265_333.0, 1.22, 3_200.0, &market());
        for metal in [Metal::Gold, Metal::Silver] {
            let bases: Vec<f64> = quotes
                .iter()
                .filter(|q| q.metal == metal)
                .map(|q| q.buy_price / q.purity.ratio)
                .collect();
            for base in &bases {
                assert!((base - bases[0]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_silver_base_is_gold_over_ratio() {
        let m = market();
        let quotes = generate_quotes(265_333.0, 1.22, 3_200.0, &m);
        let silver_999 = quotes.iter().find(|q| q.purity.id == "silver_999").unwrap();
        assert!((silver_999.buy_price - 265_333.0 / m.gold_silver_ratio).abs() < 1e-9);
    }

    #[test]
    fn test_24k_sell_price_scenario() {
        let quotes = generate_quotes(265_333.0, 1.22, 3_200.0, &market());
        let gold_24k = quotes.iter().find(|q| q.purity.id == "gold_24k").unwrap();
        assert!((gold_24k.buy_price - 265_333.0).abs() < 1e-9);
        assert!((gold_24k.sell_price - 257_373.01).abs() < 1e-6);
    }

    #[test]
    fn test_change_amount_scales_with_purity() {
        let m = market();
        let quotes = generate_quotes(265_333.0, 1.22, 3_200.0, &m);
        let gold_18k = quotes.iter().find(|q| q.purity.id == "gold_18k").unwrap();
        assert!((gold_18k.change_amount - 3_200.0 * 0.75).abs() < 1e-9);
        assert_eq!(gold_18k.change_percent, 1.22);

        let silver_999 = quotes.iter().find(|q| q.purity.id == "silver_999").unwrap();
        assert!((silver_999.change_amount - 3_200.0 / m.gold_silver_ratio).abs() < 1e-9);
    }

    #[test]
    fn test_fallback_quotes_use_configured_base() {
        let quotes = fallback_quotes(&market());
        let gold_24k = quotes.iter().find(|q| q.purity.id == "gold_24k").unwrap();
        assert_eq!(gold_24k.buy_price, 265_333.0);
        assert_eq!(gold_24k.change_percent, 1.22);
    }
}
