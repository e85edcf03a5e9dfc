//! Calculator Registry Lookup

use crate::record::CalculatorRecord;
use crate::table::STANDARD_CALCULATORS;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

/// Ordered, name-indexed collection of calculator records
#[derive(Debug, Clone)]
pub struct CalculatorRegistry {
    /// Records in declaration order
    records: Vec<CalculatorRecord>,
    /// Position of each name in `records`
    index: HashMap<&'static str, usize>,
}

impl CalculatorRegistry {
    /// Shared registry holding the built-in calculator table
    pub fn standard() -> &'static CalculatorRegistry {
        static STANDARD: OnceLock<CalculatorRegistry> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let registry = Self::from_records(STANDARD_CALCULATORS.iter().copied());
            debug!("Calculator registry initialised with {} entries", registry.len());
            registry
        })
    }

    /// Create a registry from custom records.
    ///
    /// A repeated name replaces the earlier record but keeps its position.
    pub fn from_records(records: impl IntoIterator<Item = CalculatorRecord>) -> Self {
        let mut registry = Self {
            records: Vec::new(),
            index: HashMap::new(),
        };
        for record in records {
            registry.register(record);
        }
        registry
    }

    /// Add or replace a record
    pub fn register(&mut self, record: CalculatorRecord) {
        match self.index.get(record.name) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.index.insert(record.name, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Look up a calculator by name
    pub fn get(&self, name: &str) -> Option<&CalculatorRecord> {
        self.index.get(name).map(|&pos| &self.records[pos])
    }

    /// Whether a calculator with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate records in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &CalculatorRecord> {
        self.records.iter()
    }

    /// Iterate registered names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.records.iter().map(|r| r.name)
    }

    /// Records matching a predicate, in declaration order
    pub fn filter<P>(&self, predicate: P) -> impl Iterator<Item = &CalculatorRecord>
    where
        P: Fn(&CalculatorRecord) -> bool,
    {
        self.records.iter().filter(move |r| predicate(r))
    }

    /// Number of registered calculators
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for CalculatorRegistry {
    fn default() -> Self {
        Self::standard().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{IndexType, InputKind};

    #[test]
    fn test_standard_lookup() {
        let registry = CalculatorRegistry::standard();
        assert!(registry.contains("mean"));
        assert!(registry.contains("quantile"));
        assert!(!registry.contains("nonexistent_calculator"));

        let mean = registry.get("mean").unwrap();
        assert!(mean.minimal);
        assert!(mean.takes_only_series());

        let quantile = registry.get("quantile").unwrap();
        assert_eq!(quantile.parameters, &["q"]);
    }

    #[test]
    fn test_standard_metadata() {
        let registry = CalculatorRegistry::standard();
        assert!(registry.get("approximate_entropy").unwrap().high_comp_cost);
        assert!(registry.get("sample_entropy").unwrap().high_comp_cost);

        let timewise = registry.get("linear_trend_timewise").unwrap();
        assert_eq!(timewise.input, InputKind::IndexedSeries);
        assert_eq!(timewise.index_type, Some(IndexType::Datetime));
    }

    #[test]
    fn test_iteration_follows_declaration_order() {
        let registry = CalculatorRegistry::from_records([
            CalculatorRecord::simple("b"),
            CalculatorRecord::simple("a"),
            CalculatorRecord::simple("c"),
        ]);
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut registry = CalculatorRegistry::from_records([
            CalculatorRecord::simple("a"),
            CalculatorRecord::simple("b"),
        ]);
        registry.register(CalculatorRecord::simple("a").minimal());

        assert_eq!(registry.len(), 2);
        assert!(registry.get("a").unwrap().minimal);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_filter_minimal() {
        let registry = CalculatorRegistry::standard();
        let minimal: Vec<_> = registry.filter(|r| r.minimal).map(|r| r.name).collect();
        assert_eq!(
            minimal,
            vec![
                "sum_values",
                "median",
                "mean",
                "length",
                "standard_deviation",
                "variance",
                "maximum",
                "minimum",
            ]
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = CalculatorRegistry::from_records(std::iter::empty());
        assert!(registry.is_empty());
        assert!(registry.get("mean").is_none());
    }
}
