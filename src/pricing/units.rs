use crate::models::Unit;

/// One don, the traditional Korean mass unit for precious-metal trade.
pub const GRAMS_PER_DON: f64 = 3.75;

pub fn gram_to_don(grams: f64) -> f64 {
    grams / GRAMS_PER_DON
}

pub fn don_to_gram(don: f64) -> f64 {
    don * GRAMS_PER_DON
}

/// Converts a quantity in the given display unit to grams. Total over all
/// finite inputs; callers own domain checks such as rejecting negatives.
pub fn to_grams(quantity: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Gram => quantity,
        Unit::Don => don_to_gram(quantity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_don_gram_round_trip() {
        for x in [0.0, 1.0, 3.75, 12.5, 100.0, -4.0] {
            assert!((gram_to_don(don_to_gram(x)) - x).abs() < 1e-12);
            assert!((don_to_gram(gram_to_don(x)) - x).abs() < 1e-12);
        }
    }

    #[test]
    fn test_to_grams() {
        assert_eq!(to_grams(10.0, Unit::Don), 37.5);
        assert_eq!(to_grams(10.0, Unit::Gram), 10.0);
        assert_eq!(to_grams(-2.0, Unit::Don), -7.5);
    }
}
