//! Alias resolution - maps user-supplied unit strings to canonical units

use crate::{Category, ConvResult, ConversionError, Unit};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Process-wide registry, built on first use and never mutated afterwards
pub static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Lookup table from every accepted alias to its canonical unit
#[derive(Debug)]
pub struct UnitRegistry {
    aliases: HashMap<&'static str, Unit>,
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitRegistry {
    pub fn new() -> Self {
        let aliases = Unit::ALL
            .iter()
            .flat_map(|unit| unit.aliases().iter().map(move |alias| (*alias, *unit)))
            .collect();
        Self { aliases }
    }

    /// Shared registry instance
    pub fn global() -> &'static UnitRegistry {
        &REGISTRY
    }

    /// Resolve an alias to its canonical unit.
    ///
    /// Matching is case-insensitive. No other normalization happens: surrounding
    /// whitespace or punctuation makes the alias unknown.
    pub fn canonicalize(&self, alias: &str) -> ConvResult<Unit> {
        self.aliases
            .get(alias.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| ConversionError::UnknownUnit(alias.to_string()))
    }

    pub fn category_of(&self, unit: Unit) -> Category {
        unit.category()
    }

    /// Accepted aliases grouped by category, in declaration order
    pub fn list_by_category(&self) -> Vec<(Category, Vec<&'static str>)> {
        Category::ALL
            .iter()
            .map(|category| {
                let aliases = Unit::ALL
                    .iter()
                    .filter(|unit| unit.category() == *category)
                    .flat_map(|unit| unit.aliases().iter().copied())
                    .collect();
                (*category, aliases)
            })
            .collect()
    }

    /// Number of accepted aliases across all categories
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
