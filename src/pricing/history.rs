use chrono::{Datelike, Days, Local, Months, NaiveDate};
use rand::Rng;

use crate::config::MarketConfig;
use crate::models::market::{HistoryPoint, Interval};
use crate::models::Metal;

// Angular step of the sinusoidal trend between adjacent points.
const WAVE_STEP: f64 = 0.8;
// High/low band around the synthesized price, as a fraction of variance.
const BAND_FACTOR: f64 = 0.1;

/// Synthesizes a chart series for the given metal ending today. This is a
/// mock generator, not real history: a sinusoidal trend plus uniform noise
/// around the metal's fallback base price. The RNG is injected so tests
/// can pin exact sequences; production callers seed from entropy.
pub fn synthesize<R: Rng + ?Sized>(
    metal: Metal,
    interval: Interval,
    market: &MarketConfig,
    rng: &mut R,
) -> Vec<HistoryPoint> {
    synthesize_from(Local::now().date_naive(), metal, interval, market, rng)
}

pub fn synthesize_from<R: Rng + ?Sized>(
    today: NaiveDate,
    metal: Metal,
    interval: Interval,
    market: &MarketConfig,
    rng: &mut R,
) -> Vec<HistoryPoint> {
    let base_price = market.base_price_for(metal);
    let variance = market.variance_for(metal);
    let count = interval.point_count();

    (0..count)
        .map(|i| {
            let steps_back = (count - 1 - i) as u64;
            let date = point_date(today, interval, steps_back);
            let wave = (i as f64 * WAVE_STEP).sin() * variance;
            let noise = (rng.gen::<f64>() - 0.5) * variance;
            let price = base_price + wave + noise;
            HistoryPoint {
                date,
                label: format_label(date, interval),
                price: price.round() as i64,
                high: (price + variance * BAND_FACTOR).round() as i64,
                low: (price - variance * BAND_FACTOR).round() as i64,
            }
        })
        .collect()
}

fn point_date(today: NaiveDate, interval: Interval, steps_back: u64) -> NaiveDate {
    match interval {
        Interval::Week => today - Days::new(steps_back * 7),
        Interval::Month => today - Months::new(steps_back as u32),
        Interval::ThreeMonth => today - Months::new(steps_back as u32 * 3),
        Interval::Year => today - Months::new(steps_back as u32 * 12),
    }
}

fn format_label(date: NaiveDate, interval: Interval) -> String {
    match interval {
        Interval::Week => format!("{}/{}", date.month(), date.day()),
        Interval::Month => format!("{}월", date.month()),
        Interval::ThreeMonth => format!("{}.{}월", date.format("%y"), date.month()),
        Interval::Year => format!("{}년", date.year()),
    }
}
