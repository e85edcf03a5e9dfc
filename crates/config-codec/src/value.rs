//! Typed Parameter Values
//!
//! Values render as the literals that appear in feature column names
//! (`0.1`, `True`, `"mean"`, `(2, 5, 10, 20)`) and parse back from them.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// One parameter set: parameter name to value, keys kept sorted
pub type ParamSet = BTreeMap<String, ParamValue>;

/// Build a parameter set from `(name, value)` pairs
pub fn param_set<I, K, V>(pairs: I) -> ParamSet
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<ParamValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Scalar or composite calculator parameter
#[derive(Debug, Clone)]
pub enum ParamValue {
    /// Integer
    Int(i64),
    /// Floating point, including NaN and the infinities
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Text
    Str(String),
    /// Fixed composite such as cwt `widths`
    Tuple(Vec<ParamValue>),
    /// Sequence literal
    List(Vec<ParamValue>),
    /// Explicit absence of a value
    None,
}

// NaN equals NaN so grids holding NaN compare equal to themselves
impl PartialEq for ParamValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ParamValue::Int(a), ParamValue::Int(b)) => a == b,
            (ParamValue::Float(a), ParamValue::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (ParamValue::Bool(a), ParamValue::Bool(b)) => a == b,
            (ParamValue::Str(a), ParamValue::Str(b)) => a == b,
            (ParamValue::Tuple(a), ParamValue::Tuple(b)) => a == b,
            (ParamValue::List(a), ParamValue::List(b)) => a == b,
            (ParamValue::None, ParamValue::None) => true,
            _ => false,
        }
    }
}

/// Render a float the way the naming convention expects: always with a
/// decimal point or exponent, `nan`/`inf`/`-inf` for non-finite values
fn fmt_float(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
    }

    let abs = value.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let formatted = format!("{:e}", value);
        // "1e16" -> "1e+16", "1.5e-5" -> "1.5e-05"
        return match formatted.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => f.write_str(&formatted),
        };
    }

    let formatted = value.to_string();
    if formatted.contains('.') {
        f.write_str(&formatted)
    } else {
        write!(f, "{}.0", formatted)
    }
}

fn fmt_items(items: &[ParamValue], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Float(v) => fmt_float(*v, f),
            ParamValue::Bool(true) => f.write_str("True"),
            ParamValue::Bool(false) => f.write_str("False"),
            ParamValue::Str(s) => write!(f, "\"{}\"", s),
            ParamValue::Tuple(items) => {
                f.write_str("(")?;
                fmt_items(items, f)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            ParamValue::List(items) => {
                f.write_str("[")?;
                fmt_items(items, f)?;
                f.write_str("]")
            }
            ParamValue::None => f.write_str("None"),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Int(v) => serializer.serialize_i64(*v),
            ParamValue::Float(v) if v.is_finite() => serializer.serialize_f64(*v),
            // JSON has no NaN or infinity
            ParamValue::Float(_) => serializer.collect_str(self),
            ParamValue::Bool(v) => serializer.serialize_bool(*v),
            ParamValue::Str(s) => serializer.serialize_str(s),
            ParamValue::Tuple(items) | ParamValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ParamValue::None => serializer.serialize_none(),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(i64::from(v))
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_display() {
        assert_eq!(ParamValue::Float(0.0).to_string(), "0.0");
        assert_eq!(ParamValue::Float(1.0).to_string(), "1.0");
        assert_eq!(ParamValue::Float(0.1).to_string(), "0.1");
        assert_eq!(ParamValue::Float(-0.5).to_string(), "-0.5");
        assert_eq!(ParamValue::Float(3.0 * 0.05).to_string(), "0.15000000000000002");
        assert_eq!(ParamValue::Float(1e12).to_string(), "1000000000000.0");
        assert_eq!(ParamValue::Float(1e16).to_string(), "1e+16");
        assert_eq!(ParamValue::Float(1.5e-5).to_string(), "1.5e-05");
    }

    #[test]
    fn test_non_finite_display() {
        assert_eq!(ParamValue::Float(f64::NAN).to_string(), "nan");
        assert_eq!(ParamValue::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(ParamValue::Float(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn test_composite_display() {
        let widths = ParamValue::Tuple(vec![2.into(), 5.into(), 10.into(), 20.into()]);
        assert_eq!(widths.to_string(), "(2, 5, 10, 20)");

        let single = ParamValue::Tuple(vec![1.into()]);
        assert_eq!(single.to_string(), "(1,)");

        let list = ParamValue::List(vec![true.into(), "a".into()]);
        assert_eq!(list.to_string(), "[True, \"a\"]");
        assert_eq!(ParamValue::None.to_string(), "None");
    }

    #[test]
    fn test_nan_equality() {
        assert_eq!(ParamValue::Float(f64::NAN), ParamValue::Float(f64::NAN));
        assert_ne!(ParamValue::Float(1.0), ParamValue::Int(1));
        assert_ne!(ParamValue::Float(f64::NAN), ParamValue::Float(0.0));
    }

    #[test]
    fn test_serialize_json() {
        let set = param_set([
            ("lag", ParamValue::from(3)),
            ("value", ParamValue::Float(f64::NEG_INFINITY)),
            ("widths", ParamValue::Tuple(vec![2.into(), 5.into()])),
        ]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"lag":3,"value":"-inf","widths":[2,5]}"#);
    }
}
