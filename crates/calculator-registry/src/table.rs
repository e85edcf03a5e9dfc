//! Built-in Calculator Table
//!
//! Every calculator the extraction pipeline knows about, in declaration order.
//! Some of them carry no entry in the default parameter grid and are only
//! reachable through column names or hand-written settings.

use crate::record::CalculatorRecord as C;

/// Standard calculator table
pub static STANDARD_CALCULATORS: &[C] = &[
    C::with_params("time_reversal_asymmetry_statistic", &["lag"]),
    C::with_params("c3", &["lag"]),
    C::with_params("cid_ce", &["normalize"]),
    C::with_params("symmetry_looking", &["r"]),
    C::simple("variance_larger_than_standard_deviation"),
    C::with_params("ratio_beyond_r_sigma", &["r"]),
    C::with_params("large_standard_deviation", &["r"]),
    C::simple("has_duplicate_max"),
    C::simple("has_duplicate_min"),
    C::simple("has_duplicate"),
    C::simple("sum_values").minimal(),
    C::combiner("agg_autocorrelation", &["f_agg", "maxlag"]),
    C::combiner("partial_autocorrelation", &["lag"]),
    C::combiner("augmented_dickey_fuller", &["attr"]),
    C::simple("abs_energy"),
    C::simple("mean_abs_change"),
    C::simple("mean_change"),
    C::simple("mean_second_derivative_central"),
    C::simple("median").minimal(),
    C::simple("mean").minimal(),
    C::simple("length").minimal(),
    C::simple("standard_deviation").minimal(),
    C::simple("variance").minimal(),
    C::simple("skewness"),
    C::simple("kurtosis"),
    C::simple("absolute_sum_of_changes"),
    C::simple("longest_strike_below_mean"),
    C::simple("longest_strike_above_mean"),
    C::simple("count_above_mean"),
    C::simple("count_below_mean"),
    C::simple("last_location_of_maximum"),
    C::simple("first_location_of_maximum"),
    C::simple("last_location_of_minimum"),
    C::simple("first_location_of_minimum"),
    C::simple("percentage_of_reoccurring_datapoints_to_all_datapoints"),
    C::simple("percentage_of_reoccurring_values_to_all_values"),
    C::simple("sum_of_reoccurring_values"),
    C::simple("sum_of_reoccurring_data_points"),
    C::simple("ratio_value_number_to_time_series_length"),
    C::simple("sample_entropy").high_comp_cost(),
    C::with_params("autocorrelation", &["lag"]),
    C::with_params("quantile", &["q"]),
    C::with_params("number_cwt_peaks", &["n"]),
    C::with_params("number_peaks", &["n"]),
    C::with_params("large_number_of_peaks", &["n"]),
    C::with_params("binned_entropy", &["max_bins"]),
    C::with_params("index_mass_quantile", &["q"]),
    C::with_params("cwt_coefficients", &["widths", "coeff", "w"]),
    C::with_params("spkt_welch_density", &["coeff"]),
    C::with_params("ar_coefficient", &["coeff", "k"]),
    C::with_params("mean_abs_change_quantiles", &["ql", "qh"]),
    C::with_params("change_quantiles", &["ql", "qh", "isabs", "f_agg"]),
    C::with_params("fft_coefficient", &["coeff"]),
    C::combiner("fft_aggregated", &["aggtype"]),
    C::with_params("value_count", &["value"]),
    C::with_params("range_count", &["min", "max"]),
    C::with_params("approximate_entropy", &["m", "r"]).high_comp_cost(),
    C::combiner("friedrich_coefficients", &["coeff", "m", "r"]),
    C::with_params("max_langevin_fixed_point", &["m", "r"]),
    C::combiner("linear_trend", &["attr"]),
    C::combiner("agg_linear_trend", &["attr", "chunk_len", "f_agg"]),
    C::with_params("number_crossing_m", &["m"]),
    C::combiner("energy_ratio_by_chunks", &["num_segments", "segment_focus"]),
    C::combiner("linear_trend_timewise", &["attr"])
        .indexed()
        .datetime_index(),
    C::simple("maximum").minimal(),
    C::simple("minimum").minimal(),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = STANDARD_CALCULATORS.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), STANDARD_CALCULATORS.len());
    }

    #[test]
    fn test_names_fit_column_convention() {
        // Calculator names sit between two "__" delimiters in column names
        for record in STANDARD_CALCULATORS {
            assert!(!record.name.contains("__"), "{}", record.name);
            assert!(!record.name.is_empty());
        }
    }

    #[test]
    fn test_minimal_calculators_take_only_series() {
        for record in STANDARD_CALCULATORS.iter().filter(|r| r.minimal) {
            assert!(record.takes_only_series(), "{}", record.name);
        }
    }
}
