//! Unit and category definitions
//!
//! Every supported unit belongs to exactly one category:
//! - Temperature (celsius, fahrenheit, kelvin)
//! - Distance (meters, kilometers, miles, feet, inches, centimeters)
//! - Speed (meters/second, kilometers/hour, miles/hour, knots)
//! - Pressure (hectopascals, millibars, inches and millimeters of mercury, pascals)

use serde::Serialize;
use std::fmt;

/// A measurement category. Conversions only happen within one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Temperature,
    Distance,
    Speed,
    Pressure,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Temperature,
        Category::Distance,
        Category::Speed,
        Category::Pressure,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Temperature => "temperature",
            Category::Distance => "distance",
            Category::Speed => "speed",
            Category::Pressure => "pressure",
        }
    }

    /// Reference unit that linear conversions route through
    pub fn base_unit(&self) -> Unit {
        match self {
            Category::Temperature => Unit::Celsius,
            Category::Distance => Unit::Meters,
            Category::Speed => Unit::MetersPerSecond,
            Category::Pressure => Unit::Hectopascals,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How values of a unit are converted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// Closed-form formulas with additive offsets
    Temperature,
    /// Multiplicative factor to the category's base unit
    Linear(f64),
}

/// A canonical unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    // Temperature
    Celsius,
    Fahrenheit,
    Kelvin,
    // Distance
    Meters,
    Kilometers,
    Miles,
    Feet,
    Inches,
    Centimeters,
    // Speed
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
    Knots,
    // Pressure
    Hectopascals,
    Millibars,
    InchesMercury,
    MillimetersMercury,
    Pascals,
}

impl Unit {
    /// All units in declaration order, grouped by category
    pub const ALL: [Unit; 18] = [
        Unit::Celsius,
        Unit::Fahrenheit,
        Unit::Kelvin,
        Unit::Meters,
        Unit::Kilometers,
        Unit::Miles,
        Unit::Feet,
        Unit::Inches,
        Unit::Centimeters,
        Unit::MetersPerSecond,
        Unit::KilometersPerHour,
        Unit::MilesPerHour,
        Unit::Knots,
        Unit::Hectopascals,
        Unit::Millibars,
        Unit::InchesMercury,
        Unit::MillimetersMercury,
        Unit::Pascals,
    ];

    /// Canonical identifier, e.g. `celsius` or `miles_per_hour`
    pub fn name(&self) -> &'static str {
        self.aliases()[0]
    }

    /// Accepted lower-case spellings. The first entry is the canonical name.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Unit::Celsius => &["celsius", "c"],
            Unit::Fahrenheit => &["fahrenheit", "f"],
            Unit::Kelvin => &["kelvin", "k"],
            Unit::Meters => &["meters", "m"],
            Unit::Kilometers => &["kilometers", "km"],
            Unit::Miles => &["miles", "mi"],
            Unit::Feet => &["feet", "ft"],
            Unit::Inches => &["inches", "in"],
            Unit::Centimeters => &["centimeters", "cm"],
            Unit::MetersPerSecond => &["meters_per_second", "mps"],
            Unit::KilometersPerHour => &["kilometers_per_hour", "kph", "kmh"],
            Unit::MilesPerHour => &["miles_per_hour", "mph"],
            Unit::Knots => &["knots", "kt"],
            Unit::Hectopascals => &["hectopascals", "hpa"],
            Unit::Millibars => &["millibars", "mbar"],
            Unit::InchesMercury => &["inches_mercury", "inhg"],
            Unit::MillimetersMercury => &["millimeters_mercury", "mmhg"],
            Unit::Pascals => &["pascals", "pa"],
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Category::Temperature,
            Unit::Meters
            | Unit::Kilometers
            | Unit::Miles
            | Unit::Feet
            | Unit::Inches
            | Unit::Centimeters => Category::Distance,
            Unit::MetersPerSecond | Unit::KilometersPerHour | Unit::MilesPerHour | Unit::Knots => {
                Category::Speed
            }
            Unit::Hectopascals
            | Unit::Millibars
            | Unit::InchesMercury
            | Unit::MillimetersMercury
            | Unit::Pascals => Category::Pressure,
        }
    }

    /// Conversion strategy for this unit. Linear factors are to the category's base unit.
    pub fn scale(&self) -> Scale {
        match self {
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Scale::Temperature,

            Unit::Meters => Scale::Linear(1.0),
            Unit::Kilometers => Scale::Linear(1000.0),
            Unit::Miles => Scale::Linear(1609.344),
            Unit::Feet => Scale::Linear(0.3048),
            Unit::Inches => Scale::Linear(0.0254),
            Unit::Centimeters => Scale::Linear(0.01),

            Unit::MetersPerSecond => Scale::Linear(1.0),
            Unit::KilometersPerHour => Scale::Linear(1.0 / 3.6),
            Unit::MilesPerHour => Scale::Linear(0.44704),
            Unit::Knots => Scale::Linear(0.514444),

            Unit::Hectopascals => Scale::Linear(1.0),
            Unit::Millibars => Scale::Linear(1.0),
            Unit::InchesMercury => Scale::Linear(33.8639),
            Unit::MillimetersMercury => Scale::Linear(1.33322),
            Unit::Pascals => Scale::Linear(0.01),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
