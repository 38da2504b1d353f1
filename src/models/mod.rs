use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub mod market;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Metal {
    Gold,
    Silver,
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metal::Gold => write!(f, "GOLD"),
            Metal::Silver => write!(f, "SILVER"),
        }
    }
}

impl FromStr for Metal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gold" | "au" => Ok(Metal::Gold),
            "silver" | "ag" => Ok(Metal::Silver),
            other => Err(Error::ValidationError(format!("unknown metal: {}", other))),
        }
    }
}

/// A fractional-fineness grade of a metal, priced as a fraction of the
/// pure-metal base price (24K gold = 1.0, 18K = 0.75, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purity {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub metal: Metal,
    pub ratio: f64,
}

impl Purity {
    pub fn new(id: &str, name: &str, short_name: &str, metal: Metal, ratio: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            short_name: short_name.to_string(),
            metal,
            ratio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Gram,
    Don,
}

impl Unit {
    /// Mass of one display unit in grams (1 don = 3.75 g).
    pub fn grams_per_unit(self) -> f64 {
        match self {
            Unit::Gram => 1.0,
            Unit::Don => crate::pricing::units::GRAMS_PER_DON,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Gram => write!(f, "g"),
            Unit::Don => write!(f, "don"),
        }
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "g" | "gram" | "grams" => Ok(Unit::Gram),
            "don" | "돈" => Ok(Unit::Don),
            other => Err(Error::ValidationError(format!("unknown unit: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "BUY"),
            TradeSide::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for TradeSide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(TradeSide::Buy),
            "sell" => Ok(TradeSide::Sell),
            other => Err(Error::ValidationError(format!("unknown trade side: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metal_parsing() {
        assert_eq!("gold".parse::<Metal>().unwrap(), Metal::Gold);
        assert_eq!("SILVER".parse::<Metal>().unwrap(), Metal::Silver);
        assert!("platinum".parse::<Metal>().is_err());
    }

    #[test]
    fn test_unit_grams() {
        assert_eq!(Unit::Gram.grams_per_unit(), 1.0);
        assert_eq!(Unit::Don.grams_per_unit(), 3.75);
        assert_eq!("don".parse::<Unit>().unwrap(), Unit::Don);
    }

    #[test]
    fn test_trade_side_parsing() {
        assert_eq!("buy".parse::<TradeSide>().unwrap(), TradeSide::Buy);
        assert_eq!("SELL".parse::<TradeSide>().unwrap(), TradeSide::Sell);
        assert!("hold".parse::<TradeSide>().is_err());
    }
}
