use crate::error::{Error, Result};

/// CLI-side guard. The arithmetic core itself normalizes bad quantities to
/// zero; this exists to give the user a message instead of a silent zero.
pub fn validate_quantity(quantity: f64) -> Result<()> {
    if !quantity.is_finite() {
        return Err(Error::ValidationError("Quantity must be a number".to_string()));
    }
    if quantity <= 0.0 {
        return Err(Error::ValidationError("Quantity must be positive".to_string()));
    }
    Ok(())
}

pub fn validate_target_price(price: f64) -> Result<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(Error::ValidationError(
            "Target price must be a positive number".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::ValidationError(format!(
            "Latitude out of range: {}",
            latitude
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::ValidationError(format!(
            "Longitude out of range: {}",
            longitude
        )));
    }
    Ok(())
}
