//! Conversion arithmetic
//!
//! Temperature uses closed-form pairwise formulas because of the additive offsets
//! between the scales. Every other category scales linearly through its base unit
//! (meters, meters/second, hectopascals).
//!
//! Nothing here rounds. Rounding to the published precision happens once, in
//! [`crate::response`], after all arithmetic is done.

use crate::{ConvResult, ConversionError, Scale, Unit};

const CELSIUS_KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;

/// Convert a value between two canonical units of the same category
pub fn convert(value: f64, from: Unit, to: Unit) -> ConvResult<f64> {
    if from.category() != to.category() {
        return Err(ConversionError::CategoryMismatch {
            from: from.category(),
            to: to.category(),
        });
    }

    if from == to {
        return Ok(value);
    }

    match (from.scale(), to.scale()) {
        (Scale::Temperature, Scale::Temperature) => Ok(convert_temperature(value, from, to)),
        (Scale::Linear(from_factor), Scale::Linear(to_factor)) => {
            Ok(convert_linear(value, from_factor, to_factor))
        }
        // Units of one category always share a scale kind
        _ => Err(ConversionError::CategoryMismatch {
            from: from.category(),
            to: to.category(),
        }),
    }
}

/// Scale to the base unit, then from the base unit to the target
fn convert_linear(value: f64, from_factor: f64, to_factor: f64) -> f64 {
    let base = value * from_factor;
    base / to_factor
}

fn convert_temperature(value: f64, from: Unit, to: Unit) -> f64 {
    match (from, to) {
        (Unit::Fahrenheit, Unit::Celsius) => fahrenheit_to_celsius(value),
        (Unit::Celsius, Unit::Fahrenheit) => celsius_to_fahrenheit(value),
        (Unit::Celsius, Unit::Kelvin) => value + CELSIUS_KELVIN_OFFSET,
        (Unit::Kelvin, Unit::Celsius) => value - CELSIUS_KELVIN_OFFSET,
        (Unit::Fahrenheit, Unit::Kelvin) => fahrenheit_to_celsius(value) + CELSIUS_KELVIN_OFFSET,
        (Unit::Kelvin, Unit::Fahrenheit) => celsius_to_fahrenheit(value - CELSIUS_KELVIN_OFFSET),
        _ => value,
    }
}

fn fahrenheit_to_celsius(value: f64) -> f64 {
    (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0
}

fn celsius_to_fahrenheit(value: f64) -> f64 {
    (value * 9.0 / 5.0) + FAHRENHEIT_OFFSET
}
