use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::market::PriceQuote;
use crate::models::Purity;
use crate::storage::Store;

pub const ALERTS_KEY: &str = "price_alerts";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertDirection {
    Above,
    Below,
}

impl FromStr for AlertDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "above" => Ok(AlertDirection::Above),
            "below" => Ok(AlertDirection::Below),
            other => Err(Error::ValidationError(format!(
                "unknown alert direction: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceAlert {
    pub id: String,
    pub purity: Purity,
    pub target_price: f64,
    pub direction: AlertDirection,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
}

/// Persisted set of price alerts with the CRUD surface the alerts view
/// needs. Evaluation against a quote table is a separate pure function so
/// callers decide what to do with fired alerts.
#[derive(Debug, Clone)]
pub struct AlertBook {
    store: Store,
}

impl AlertBook {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<PriceAlert> {
        self.store.get_or(ALERTS_KEY, Vec::new())
    }

    pub fn create(
        &self,
        purity: Purity,
        target_price: f64,
        direction: AlertDirection,
    ) -> Result<PriceAlert> {
        let now = Utc::now();
        let alert = PriceAlert {
            id: now.timestamp_millis().to_string(),
            purity,
            target_price,
            direction,
            is_enabled: true,
            created_at: now,
        };

        let mut alerts = self.list();
        alerts.push(alert.clone());
        self.store.set(ALERTS_KEY, &alerts)?;
        Ok(alert)
    }

    /// Flips the enabled flag; returns the new state, or None when no
    /// alert has that id.
    pub fn toggle(&self, id: &str) -> Result<Option<bool>> {
        let mut alerts = self.list();
        let mut state = None;
        for alert in alerts.iter_mut() {
            if alert.id == id {
                alert.is_enabled = !alert.is_enabled;
                state = Some(alert.is_enabled);
            }
        }
        if state.is_some() {
            self.store.set(ALERTS_KEY, &alerts)?;
        }
        Ok(state)
    }

    pub fn remove(&self, id: &str) -> Result<bool> {
        let mut alerts = self.list();
        let before = alerts.len();
        alerts.retain(|a| a.id != id);
        let removed = alerts.len() != before;
        if removed {
            self.store.set(ALERTS_KEY, &alerts)?;
        }
        Ok(removed)
    }
}

/// Enabled alerts whose target has been crossed by the matching purity's
/// buy price. Alerts for purities missing from the table never fire.
pub fn triggered<'a>(alerts: &'a [PriceAlert], quotes: &[PriceQuote]) -> Vec<&'a PriceAlert> {
    alerts
        .iter()
        .filter(|alert| alert.is_enabled)
        .filter(|alert| {
            quotes
                .iter()
                .find(|q| q.purity.id == alert.purity.id)
                .map_or(false, |q| match alert.direction {
                    AlertDirection::Above => q.buy_price >= alert.target_price,
                    AlertDirection::Below => q.buy_price <= alert.target_price,
                })
        })
        .collect()
}
