//! Settings Variants
//!
//! Each variant narrows the comprehensive settings by a predicate over the
//! registry metadata. Nothing here looks at time-series data.

use crate::builder::comprehensive_with;
use crate::error::SettingsError;
use crate::params::FcParameters;
use calculator_registry::{CalculatorRecord, CalculatorRegistry, IndexType, InputKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Keep the entries whose registry record satisfies `predicate`.
///
/// Entries with no registry record are dropped.
pub fn filter_by<P>(params: &FcParameters, registry: &CalculatorRegistry, predicate: P) -> FcParameters
where
    P: Fn(&CalculatorRecord) -> bool,
{
    let mut filtered = params.clone();
    filtered.retain(|name, _| registry.get(name).is_some_and(&predicate));
    filtered
}

/// Named settings variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FcVariant {
    /// Every calculator with its full grid
    #[default]
    Comprehensive,
    /// Cheap calculators for smoke tests
    Minimal,
    /// Everything except high-cost calculators
    Efficient,
    /// Calculators that need an indexed series
    #[serde(alias = "index_based")]
    IndexBased,
    /// Calculators that need a datetime index
    #[serde(alias = "time_based")]
    TimeBased,
}

impl FcVariant {
    /// All variants, comprehensive first
    pub const ALL: [FcVariant; 5] = [
        FcVariant::Comprehensive,
        FcVariant::Minimal,
        FcVariant::Efficient,
        FcVariant::IndexBased,
        FcVariant::TimeBased,
    ];

    /// Whether a calculator belongs to this variant
    pub fn admits(&self, record: &CalculatorRecord) -> bool {
        match self {
            FcVariant::Comprehensive => true,
            FcVariant::Minimal => record.minimal,
            FcVariant::Efficient => !record.high_comp_cost,
            FcVariant::IndexBased => record.input == InputKind::IndexedSeries,
            FcVariant::TimeBased => record.index_type == Some(IndexType::Datetime),
        }
    }

    /// Build this variant from the standard registry
    pub fn build(&self) -> FcParameters {
        self.build_with(CalculatorRegistry::standard())
    }

    /// Build this variant from a custom registry
    pub fn build_with(&self, registry: &CalculatorRegistry) -> FcParameters {
        let comprehensive = comprehensive_with(registry);
        if *self == FcVariant::Comprehensive {
            return comprehensive;
        }

        let params = filter_by(&comprehensive, registry, |r| self.admits(r));
        debug!(
            "Derived {} settings: {} of {} calculators",
            self,
            params.len(),
            comprehensive.len()
        );
        params
    }

    /// Kebab-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            FcVariant::Comprehensive => "comprehensive",
            FcVariant::Minimal => "minimal",
            FcVariant::Efficient => "efficient",
            FcVariant::IndexBased => "index-based",
            FcVariant::TimeBased => "time-based",
        }
    }
}

impl fmt::Display for FcVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FcVariant {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        FcVariant::ALL
            .into_iter()
            .find(|v| v.as_str() == normalized)
            .ok_or_else(|| SettingsError::UnknownVariant(s.to_string()))
    }
}

/// Every calculator with its full default grid
pub fn comprehensive_fc_parameters() -> FcParameters {
    FcVariant::Comprehensive.build()
}

/// Only calculators flagged minimal
pub fn minimal_fc_parameters() -> FcParameters {
    FcVariant::Minimal.build()
}

/// Comprehensive minus the high-cost calculators
pub fn efficient_fc_parameters() -> FcParameters {
    FcVariant::Efficient.build()
}

/// Only calculators taking an indexed series
pub fn index_based_fc_parameters() -> FcParameters {
    FcVariant::IndexBased.build()
}

/// Only calculators requiring a datetime index
pub fn time_based_fc_parameters() -> FcParameters {
    FcVariant::TimeBased.build()
}
