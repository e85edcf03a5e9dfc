//! Settings variants against the column-name parser

use fc_settings::{
    comprehensive_fc_parameters, feature_column_names, from_columns, minimal_fc_parameters,
    CalculatorRegistry, FcParameters, FcVariant, KindToFcParameters, ParamValue,
};
use proptest::prelude::*;

fn single_kind(kind: &str, params: FcParameters) -> KindToFcParameters {
    [(kind, params)].into_iter().collect()
}

#[test]
fn test_variants_are_subsets_of_comprehensive() {
    let comprehensive = comprehensive_fc_parameters();
    for variant in FcVariant::ALL {
        let params = variant.build();
        for (name, config) in params.iter() {
            assert_eq!(comprehensive.get(name), Some(config), "{} in {}", name, variant);
        }
    }
}

#[test]
fn test_variants_are_deterministic() {
    for variant in FcVariant::ALL {
        assert_eq!(variant.build(), variant.build(), "{}", variant);
    }
}

#[test]
fn test_every_key_is_registered() {
    let registry = CalculatorRegistry::standard();
    for name in comprehensive_fc_parameters().keys() {
        assert!(registry.contains(name), "{}", name);
    }
}

#[test]
fn test_minimal_only_holds_minimal_calculators() {
    let registry = CalculatorRegistry::standard();
    let minimal = minimal_fc_parameters();
    assert!(!minimal.is_empty());
    for name in minimal.keys() {
        assert!(registry.get(name).unwrap().minimal, "{}", name);
    }
    assert!(comprehensive_fc_parameters().contains("quantile"));
    assert!(!minimal.contains("quantile"));
}

#[test]
fn test_efficient_holds_no_high_cost_calculator() {
    let registry = CalculatorRegistry::standard();
    for name in FcVariant::Efficient.build().keys() {
        assert!(!registry.get(name).unwrap().high_comp_cost, "{}", name);
    }
}

#[test]
fn test_every_variant_round_trips() {
    for variant in FcVariant::ALL {
        let params = variant.build();
        let names = feature_column_names("x", &params);
        let parsed = from_columns(&names, None).unwrap();

        if params.is_empty() {
            assert!(parsed.is_empty());
        } else {
            assert_eq!(parsed, single_kind("x", params), "{}", variant);
        }
    }
}

#[test]
fn test_round_trip_keeps_special_values() {
    let names = feature_column_names("x", &comprehensive_fc_parameters());
    let parsed = from_columns(&names, None).unwrap();
    let x = parsed.get("x").unwrap();

    assert_eq!(x.get("mean"), Some(&None));

    let values: Vec<_> = x
        .get("value_count")
        .unwrap()
        .as_ref()
        .unwrap()
        .iter()
        .map(|config| config["value"].clone())
        .collect();
    assert_eq!(values[0], ParamValue::Int(0));
    assert!(matches!(values[2], ParamValue::Float(v) if v.is_nan()));
    assert_eq!(values[3], ParamValue::Float(f64::INFINITY));
    assert_eq!(values[4], ParamValue::Float(f64::NEG_INFINITY));

    let cwt = x.get("cwt_coefficients").unwrap().as_ref().unwrap();
    assert_eq!(
        cwt[0]["widths"],
        ParamValue::Tuple(vec![
            ParamValue::Int(2),
            ParamValue::Int(5),
            ParamValue::Int(10),
            ParamValue::Int(20),
        ])
    );
}

#[test]
fn test_multiple_kinds_round_trip() {
    let params = FcVariant::Efficient.build();
    let mut names = feature_column_names("speed", &params);
    names.extend(feature_column_names("rpm", &params));
    names.insert(0, "id".to_string());

    let ignore = ["id".to_string()];
    let parsed = from_columns(&names, Some(&ignore[..])).unwrap();

    let expected: KindToFcParameters = [("speed", params.clone()), ("rpm", params)]
        .into_iter()
        .collect();
    assert_eq!(parsed, expected);
}

proptest! {
    #[test]
    fn prop_subsets_round_trip(mask in proptest::collection::vec(any::<bool>(), 51)) {
        let comprehensive = comprehensive_fc_parameters();
        let subset: FcParameters = comprehensive
            .iter()
            .zip(mask.iter().cycle())
            .filter(|(_, keep)| **keep)
            .map(|((name, config), _)| (name, config.clone()))
            .collect();
        prop_assume!(!subset.is_empty());

        let names = feature_column_names("k", &subset);
        let parsed = from_columns(&names, None).unwrap();
        prop_assert_eq!(parsed, single_kind("k", subset));
    }

    #[test]
    fn prop_parameter_lists_keep_column_order(lags in proptest::collection::vec(0i64..100, 1..20)) {
        let names: Vec<String> = lags
            .iter()
            .map(|lag| format!("k__autocorrelation__lag_{}", lag))
            .collect();
        let parsed = from_columns(&names, None).unwrap();
        let configs = parsed.get("k").unwrap().get("autocorrelation").unwrap().as_ref().unwrap();

        let decoded: Vec<ParamValue> = configs.iter().map(|c| c["lag"].clone()).collect();
        let expected: Vec<ParamValue> = lags.into_iter().map(ParamValue::Int).collect();
        prop_assert_eq!(decoded, expected);
    }
}
