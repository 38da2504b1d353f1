use serde::Serialize;

use crate::config::TradeConfig;
use crate::models::market::PriceQuote;
use crate::models::{Purity, TradeSide, Unit};
use crate::pricing::units;

/// Itemized result of a trade quote or appraisal. Amounts are KRW.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeBreakdown {
    pub grams: f64,
    /// Price per selected display unit (per don when unit is don).
    pub unit_price: f64,
    pub subtotal: f64,
    pub vat: f64,
    pub total: f64,
}

impl TradeBreakdown {
    fn zero(unit_price: f64) -> Self {
        Self {
            grams: 0.0,
            unit_price,
            subtotal: 0.0,
            vat: 0.0,
            total: 0.0,
        }
    }
}

/// Quotes a buy or sell of `quantity` units against a price-table entry.
/// VAT applies to purchases only unless configured otherwise. Non-finite
/// or non-positive quantities price as zero rather than erroring; the UI
/// disables submission instead.
pub fn quote_trade(
    quote: &PriceQuote,
    quantity: f64,
    unit: Unit,
    side: TradeSide,
    trade: &TradeConfig,
) -> TradeBreakdown {
    let per_gram = match side {
        TradeSide::Buy => quote.buy_price,
        TradeSide::Sell => quote.sell_price,
    };
    let unit_price = per_gram * unit.grams_per_unit();

    let quantity = normalize_quantity(quantity);
    if quantity == 0.0 {
        return TradeBreakdown::zero(unit_price);
    }

    let subtotal = quantity * unit_price;
    let vat = match side {
        TradeSide::Buy => subtotal * trade.vat_rate,
        TradeSide::Sell if trade.vat_on_sell => subtotal * trade.vat_rate,
        TradeSide::Sell => 0.0,
    };

    TradeBreakdown {
        grams: units::to_grams(quantity, unit),
        unit_price,
        subtotal,
        vat,
        total: subtotal + vat,
    }
}

/// Calculator-style appraisal from a caller-supplied pure-metal base price
/// (KRW/g). Unlike [`quote_trade`], VAT is always added here: the
/// calculator shows the all-in purchase figure.
pub fn appraise(
    base_price_per_gram: f64,
    purity: &Purity,
    quantity: f64,
    unit: Unit,
    trade: &TradeConfig,
) -> TradeBreakdown {
    let base = normalize_quantity(base_price_per_gram);
    let per_gram = base * purity.ratio;

    let quantity = normalize_quantity(quantity);
    let grams = units::to_grams(quantity, unit);
    let subtotal = grams * per_gram;
    let vat = subtotal * trade.vat_rate;

    TradeBreakdown {
        grams,
        unit_price: per_gram,
        subtotal,
        vat,
        total: subtotal + vat,
    }
}

// Mirrors the UI rule: anything non-finite or non-positive means "nothing
// entered yet" and prices as zero.
fn normalize_quantity(quantity: f64) -> f64 {
    if quantity.is_finite() && quantity > 0.0 {
        quantity
    } else {
        0.0
    }
}
