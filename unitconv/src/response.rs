use crate::{Category, UnitRegistry};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of decimal places published results are rounded to
pub const RESULT_PRECISION: i32 = 6;

/// Round a computed value to [`RESULT_PRECISION`] decimal places.
///
/// Rounding works on the exact binary value, so a stored value just below a decimal
/// halfway point rounds down, and exact ties go to even. Large magnitudes keep every
/// integer digit.
pub fn round_result(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", RESULT_PRECISION as usize, value)
        .parse()
        .unwrap_or(value)
}

/// Result of converting a single value
///
/// `from` and `to` echo the caller's strings as given, not the canonical unit names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub value: f64,
    pub from: String,
    pub to: String,
    pub result: f64,
    pub category: Category,
}

impl ConversionResult {
    pub fn new(value: f64, from: &str, to: &str, raw_result: f64, category: Category) -> Self {
        Self {
            value,
            from: from.to_string(),
            to: to.to_string(),
            result: round_result(raw_result),
            category,
        }
    }
}

/// One converted element of a batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatchEntry {
    pub value: f64,
    pub result: f64,
}

/// Result of converting many values with one unit pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub from: String,
    pub to: String,
    pub category: Category,
    pub count: usize,
    pub conversions: Vec<BatchEntry>,
}

impl BatchResult {
    /// Pair inputs with raw results in input order, rounding each result
    pub fn new(
        from: &str,
        to: &str,
        category: Category,
        values: &[f64],
        raw_results: &[f64],
    ) -> Self {
        let conversions: Vec<BatchEntry> = values
            .iter()
            .zip(raw_results)
            .map(|(value, raw)| BatchEntry {
                value: *value,
                result: round_result(*raw),
            })
            .collect();

        Self {
            from: from.to_string(),
            to: to.to_string(),
            category,
            count: conversions.len(),
            conversions,
        }
    }

    pub fn results(&self) -> Vec<f64> {
        self.conversions.iter().map(|c| c.result).collect()
    }
}

/// Discovery payload: category names plus the accepted aliases of each category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitListing {
    pub categories: Vec<Category>,
    #[serde(flatten)]
    pub units: BTreeMap<Category, Vec<&'static str>>,
}

impl UnitListing {
    pub fn from_registry(registry: &UnitRegistry) -> Self {
        let grouped = registry.list_by_category();
        Self {
            categories: grouped.iter().map(|(category, _)| *category).collect(),
            units: grouped.into_iter().collect(),
        }
    }

    pub fn aliases(&self, category: Category) -> &[&'static str] {
        self.units.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_result() {
        assert_eq!(round_result(37.77777777777778), 37.777778);
        assert_eq!(round_result(160.93439999999998), 160.9344);
        assert_eq!(round_result(-0.0000004), -0.0);
        assert_eq!(round_result(1e300), 1e300);
    }

    #[test]
    fn test_round_result_uses_stored_value() {
        // 37.7777775 is stored slightly below the halfway point
        assert_eq!(round_result(37.7777775), 37.777777);
        assert_eq!(round_result(-37.7777775), -37.777777);
        assert_eq!(round_result(0.0078125), 0.007812);
    }

    #[test]
    fn test_round_result_keeps_large_integers() {
        assert_eq!(round_result(1e17), 1e17);
        assert_eq!(round_result(1e16 + 2.0), 1e16 + 2.0);
        assert_eq!(round_result(-9_007_199_254_740_994.0), -9_007_199_254_740_994.0);
        assert_eq!(round_result(f64::INFINITY), f64::INFINITY);
        assert!(round_result(f64::NAN).is_nan());
    }

    #[test]
    fn test_batch_result_keeps_order() {
        let batch = BatchResult::new(
            "f",
            "c",
            Category::Temperature,
            &[50.0, 32.0],
            &[10.0, 0.0],
        );
        assert_eq!(batch.count, 2);
        assert_eq!(batch.conversions[0].value, 50.0);
        assert_eq!(batch.results(), vec![10.0, 0.0]);
    }
}
