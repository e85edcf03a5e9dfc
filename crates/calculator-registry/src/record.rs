//! Calculator Records and Capability Tags

use serde::{Deserialize, Serialize};

/// How the extraction pipeline invokes a calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FcType {
    /// Called once per parameter set, returns one value
    Simple,
    /// Called once with every parameter set, returns one value per set
    Combiner,
}

/// Shape of the series a calculator expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Plain numeric sequence
    #[default]
    Array,
    /// Series carrying its index alongside the values
    IndexedSeries,
}

/// Index type a calculator requires on its input series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexType {
    /// Datetime index
    Datetime,
}

/// One registered feature calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculatorRecord {
    /// Calculator name, as used in column names and settings keys
    pub name: &'static str,
    /// Invocation style, `None` for helpers that are not calculators
    pub fctype: Option<FcType>,
    /// Declared arguments after the series itself
    pub parameters: &'static [&'static str],
    /// Part of the minimal smoke-test set
    pub minimal: bool,
    /// Expensive to compute
    pub high_comp_cost: bool,
    /// Required input shape
    pub input: InputKind,
    /// Required index type
    pub index_type: Option<IndexType>,
}

impl CalculatorRecord {
    /// Create a simple calculator taking only the series
    pub const fn simple(name: &'static str) -> Self {
        Self {
            name,
            fctype: Some(FcType::Simple),
            parameters: &[],
            minimal: false,
            high_comp_cost: false,
            input: InputKind::Array,
            index_type: None,
        }
    }

    /// Create a simple calculator with tuning parameters
    pub const fn with_params(name: &'static str, parameters: &'static [&'static str]) -> Self {
        Self {
            parameters,
            ..Self::simple(name)
        }
    }

    /// Create a combiner calculator with tuning parameters
    pub const fn combiner(name: &'static str, parameters: &'static [&'static str]) -> Self {
        Self {
            fctype: Some(FcType::Combiner),
            parameters,
            ..Self::simple(name)
        }
    }

    /// Create an untagged entry (not invocable by the pipeline)
    pub const fn untagged(name: &'static str, parameters: &'static [&'static str]) -> Self {
        Self {
            fctype: None,
            parameters,
            ..Self::simple(name)
        }
    }

    /// Mark as part of the minimal set
    pub const fn minimal(self) -> Self {
        Self {
            minimal: true,
            ..self
        }
    }

    /// Mark as computationally expensive
    pub const fn high_comp_cost(self) -> Self {
        Self {
            high_comp_cost: true,
            ..self
        }
    }

    /// Require an indexed series as input
    pub const fn indexed(self) -> Self {
        Self {
            input: InputKind::IndexedSeries,
            ..self
        }
    }

    /// Require a datetime index
    pub const fn datetime_index(self) -> Self {
        Self {
            index_type: Some(IndexType::Datetime),
            ..self
        }
    }

    /// Whether the pipeline can invoke this entry at all
    pub fn is_invocable(&self) -> bool {
        self.fctype.is_some()
    }

    /// Whether the only argument is the series itself
    pub fn takes_only_series(&self) -> bool {
        self.parameters.is_empty()
    }
}
