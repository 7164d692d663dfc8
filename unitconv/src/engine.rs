use crate::batch::{convert_batch, parse_values};
use crate::convert::convert;
use crate::{
    BatchResult, ConvResult, ConversionError, ConversionResult, ResourceLimits, Unit, UnitListing,
    UnitRegistry,
};

/// The unit conversion engine.
///
/// Resolves raw unit strings through the shared [`UnitRegistry`], converts, and
/// builds rounded results. Holds no mutable state, so one instance can serve any
/// number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Engine {
    registry: &'static UnitRegistry,
    limits: ResourceLimits,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            registry: UnitRegistry::global(),
            limits: ResourceLimits::default(),
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom resource limits
    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            registry: UnitRegistry::global(),
            limits,
        }
    }

    /// Get the current resource limits
    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    pub fn registry(&self) -> &UnitRegistry {
        self.registry
    }

    pub fn canonicalize(&self, alias: &str) -> ConvResult<Unit> {
        self.registry.canonicalize(alias)
    }

    /// Convert one value. `from` is resolved before `to`, so an unknown `from`
    /// is reported even when `to` is unknown as well.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> ConvResult<ConversionResult> {
        let (from_unit, to_unit) = self.resolve_pair(from, to)?;
        let raw = convert(value, from_unit, to_unit)?;

        Ok(ConversionResult::new(
            value,
            from,
            to,
            raw,
            self.registry.category_of(from_unit),
        ))
    }

    /// Convert already-parsed values with one unit pair
    pub fn convert_batch(&self, values: &[f64], from: &str, to: &str) -> ConvResult<BatchResult> {
        if values.is_empty() {
            return Err(ConversionError::EmptyBatch);
        }
        self.check_batch_size(values.len())?;

        let (from_unit, to_unit) = self.resolve_pair(from, to)?;
        let raw = convert_batch(values, from_unit, to_unit)?;

        Ok(BatchResult::new(
            from,
            to,
            self.registry.category_of(from_unit),
            values,
            &raw,
        ))
    }

    /// Convert a comma-delimited list of values. Every element is parsed before
    /// any unit is resolved or any value is converted.
    pub fn convert_batch_str(&self, values: &str, from: &str, to: &str) -> ConvResult<BatchResult> {
        let parsed = parse_values(values)?;
        self.convert_batch(&parsed, from, to)
    }

    pub fn list_units(&self) -> UnitListing {
        UnitListing::from_registry(self.registry)
    }

    fn resolve_pair(&self, from: &str, to: &str) -> ConvResult<(Unit, Unit)> {
        let from_unit = self.registry.canonicalize(from)?;
        let to_unit = self.registry.canonicalize(to)?;
        Ok((from_unit, to_unit))
    }

    fn check_batch_size(&self, actual: usize) -> ConvResult<()> {
        match self.limits.max_batch_values {
            Some(limit) if actual > limit => {
                Err(ConversionError::BatchTooLarge { limit, actual })
            }
            _ => Ok(()),
        }
    }
}
