//! Feature Calculator Settings
//!
//! Decides which time-series feature calculators run and with which
//! parameters. Provides the default parameter grids, the filtered variants
//! derived from them, and the inverse mapping from generated feature column
//! names back to settings.
//!
//! ```
//! use fc_settings::{from_columns, minimal_fc_parameters};
//!
//! let minimal = minimal_fc_parameters();
//! assert!(minimal.contains("mean"));
//!
//! let kinds = from_columns(&["temp__quantile__q_0.1", "temp__mean"], None).unwrap();
//! assert!(kinds.get("temp").unwrap().contains("quantile"));
//! ```

mod builder;
mod columns;
mod error;
mod params;
mod variants;

pub use builder::{comprehensive_with, default_grids};
pub use columns::{from_columns, from_columns_with, ColumnLabel};
pub use error::SettingsError;
pub use params::{FcParameters, FeatureConfig, KindToFcParameters, OrderedMap};
pub use variants::{
    comprehensive_fc_parameters, efficient_fc_parameters, filter_by, index_based_fc_parameters,
    minimal_fc_parameters, time_based_fc_parameters, FcVariant,
};

pub use calculator_registry::{CalculatorRecord, CalculatorRegistry};
pub use config_codec::{column_name, ParamSet, ParamValue};

/// Column names an extraction with `params` produces for one kind, in
/// settings order
pub fn feature_column_names(kind: &str, params: &FcParameters) -> Vec<String> {
    let mut names = Vec::new();
    for (calculator, config) in params.iter() {
        match config {
            None => names.push(column_name(kind, calculator, None)),
            Some(configs) => names.extend(
                configs
                    .iter()
                    .map(|config| column_name(kind, calculator, Some(config))),
            ),
        }
    }
    names
}
