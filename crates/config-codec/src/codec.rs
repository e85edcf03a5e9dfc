//! Parameter Token Encoding and Decoding
//!
//! Feature columns are named `<kind>__<calculator>[__<param>_<value>]*`.
//! Parameter tokens are emitted with their names sorted.

use crate::error::CodecError;
use crate::literal::parse_value;
use crate::value::ParamSet;
use tracing::trace;

/// Delimiter between the fields of a feature column name
pub const FEATURE_DELIMITER: &str = "__";

/// Separator between a parameter name and its value inside one token
pub const VALUE_SEPARATOR: char = '_';

/// Decode the parameter fields of a split column name.
///
/// `parts` is the whole split name; the kind and calculator fields are
/// skipped. Returns `None` when the name carries no parameters. A token is
/// split at its last `_`, so parameter names may themselves contain
/// underscores (`max_bins_10`).
pub fn config_from_parts(parts: &[&str]) -> Result<Option<ParamSet>, CodecError> {
    let tokens = parts.get(2..).unwrap_or_default();
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut config = ParamSet::new();
    for token in tokens {
        let (name, raw) = token.rsplit_once(VALUE_SEPARATOR).ok_or_else(|| {
            CodecError::MissingValueSeparator {
                token: token.to_string(),
            }
        })?;
        let value = parse_value(raw)?;
        trace!("Decoded parameter {} = {}", name, value);
        config.insert(name.to_string(), value);
    }
    Ok(Some(config))
}

/// Encode a parameter set as `k1_v1__k2_v2`, keys in sorted order
pub fn to_output_format(config: &ParamSet) -> String {
    config
        .iter()
        .map(|(name, value)| format!("{}{}{}", name, VALUE_SEPARATOR, value))
        .collect::<Vec<_>>()
        .join(FEATURE_DELIMITER)
}

/// Build the column name for one calculator invocation.
///
/// An empty parameter set is named like a parameterless invocation.
pub fn column_name(kind: &str, calculator: &str, config: Option<&ParamSet>) -> String {
    match config {
        Some(config) if !config.is_empty() => format!(
            "{kind}{d}{calculator}{d}{params}",
            d = FEATURE_DELIMITER,
            params = to_output_format(config)
        ),
        _ => format!("{kind}{FEATURE_DELIMITER}{calculator}"),
    }
}
