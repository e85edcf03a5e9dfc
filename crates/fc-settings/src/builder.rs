//! Comprehensive Settings Builder
//!
//! Every invocable calculator that takes only the series is enabled once,
//! then the hand-tuned parameter grids are laid on top.

use crate::params::FcParameters;
use calculator_registry::CalculatorRegistry;
use config_codec::{param_set, ParamSet, ParamValue};
use tracing::debug;

const QUANTILES: [f64; 8] = [0.1, 0.2, 0.3, 0.4, 0.6, 0.7, 0.8, 0.9];
const CWT_WIDTHS: [i64; 4] = [2, 5, 10, 20];

/// One parameter set per value of a single parameter
fn sweep<T, I>(name: &str, values: I) -> Vec<ParamSet>
where
    T: Into<ParamValue>,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .map(|v| param_set([(name, v.into())]))
        .collect()
}

/// Multiples of 0.05, as used by the `r` thresholds
fn twentieths(count: i32) -> impl Iterator<Item = f64> {
    (0..count).map(|k| f64::from(k) * 0.05)
}

/// Default parameter grids, in overlay order
pub fn default_grids() -> Vec<(&'static str, Vec<ParamSet>)> {
    let widths = ParamValue::Tuple(CWT_WIDTHS.into_iter().map(ParamValue::Int).collect());

    vec![
        ("time_reversal_asymmetry_statistic", sweep("lag", 1..4)),
        ("symmetry_looking", sweep("r", twentieths(20))),
        ("large_standard_deviation", sweep("r", twentieths(10))),
        ("quantile", sweep("q", QUANTILES)),
        ("autocorrelation", sweep("lag", 0..10)),
        ("number_cwt_peaks", sweep("n", [1, 5])),
        ("number_peaks", sweep("n", [1, 3, 5])),
        ("large_number_of_peaks", sweep("n", [1, 3, 5])),
        ("binned_entropy", sweep("max_bins", [10])),
        ("index_mass_quantile", sweep("q", QUANTILES)),
        (
            "cwt_coefficients",
            (0..15)
                .flat_map(|coeff| {
                    let widths = widths.clone();
                    CWT_WIDTHS.into_iter().map(move |w| {
                        param_set([
                            ("widths", widths.clone()),
                            ("coeff", coeff.into()),
                            ("w", w.into()),
                        ])
                    })
                })
                .collect(),
        ),
        ("spkt_welch_density", sweep("coeff", [2, 5, 8])),
        (
            "ar_coefficient",
            (0..5)
                .map(|coeff| param_set([("coeff", coeff), ("k", 10)]))
                .collect(),
        ),
        (
            "mean_abs_change_quantiles",
            [0.0, 0.2, 0.4, 0.6, 0.8]
                .into_iter()
                .flat_map(|ql| {
                    [0.2, 0.4, 0.6, 0.8, 1.0]
                        .into_iter()
                        .map(move |qh| param_set([("ql", ql), ("qh", qh)]))
                })
                .collect(),
        ),
        ("fft_coefficient", sweep("coeff", 0..10)),
        (
            "value_count",
            sweep(
                "value",
                [
                    ParamValue::Int(0),
                    ParamValue::Int(1),
                    ParamValue::Float(f64::NAN),
                    ParamValue::Float(f64::INFINITY),
                    ParamValue::Float(f64::NEG_INFINITY),
                ],
            ),
        ),
        ("range_count", vec![param_set([("min", -1), ("max", 1)])]),
        (
            "approximate_entropy",
            [0.1, 0.3, 0.5, 0.7, 0.9]
                .into_iter()
                .map(|r| param_set([("m", ParamValue::Int(2)), ("r", r.into())]))
                .collect(),
        ),
    ]
}

/// Build the comprehensive settings against a registry.
///
/// Grid entries naming calculators the registry does not know are skipped.
pub fn comprehensive_with(registry: &CalculatorRegistry) -> FcParameters {
    let mut params = FcParameters::new();

    for record in registry.filter(|r| r.is_invocable() && r.takes_only_series()) {
        params.insert(record.name, None);
    }

    for (name, grid) in default_grids() {
        if !registry.contains(name) {
            debug!("Skipping parameter grid for unregistered calculator {}", name);
            continue;
        }
        params.insert(name, Some(grid));
    }

    debug!("Built comprehensive settings with {} calculators", params.len());
    params
}
