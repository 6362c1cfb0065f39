//! Body-mass-index calculation backing the landing page calculator form.

use crate::{Error, Result};

/// Compute a BMI from raw text inputs (weight in kilograms, height in
/// meters), rounded to one decimal place.
///
/// Inputs that are empty, non-numeric, zero, or negative are rejected;
/// callers driving page state treat that as a no-op so any previously
/// displayed result stays put.
pub fn calculate(weight: &str, height: &str) -> Result<f64> {
    let weight = parse_measurement("weight", weight)?;
    let height = parse_measurement("height", height)?;

    Ok(round_to_tenth(weight / (height * height)))
}

/// Round to one decimal place, half away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn parse_measurement(field: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::InvalidMeasurement(format!("{} is not a number: {:?}", field, raw)))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidMeasurement(format!(
            "{} must be a positive number, got {}",
            field, value
        )));
    }

    Ok(value)
}
