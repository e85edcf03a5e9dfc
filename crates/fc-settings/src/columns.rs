//! Column-Name Parser
//!
//! Rebuilds per-kind settings from the column names an extraction run
//! produced, so a later run can compute exactly those features again.

use crate::error::SettingsError;
use crate::params::{FcParameters, KindToFcParameters};
use calculator_registry::CalculatorRegistry;
use config_codec::{config_from_parts, FEATURE_DELIMITER};
use tracing::{debug, trace};

/// A column label as found in a feature table header.
///
/// Only textual labels can name features.
pub trait ColumnLabel {
    /// Label text, `None` when the label is not textual
    fn as_text(&self) -> Option<&str>;

    /// Printable form for error messages
    fn describe(&self) -> String;
}

impl ColumnLabel for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl ColumnLabel for String {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl<T: ColumnLabel + ?Sized> ColumnLabel for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl ColumnLabel for serde_json::Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

macro_rules! non_text_label {
    ($($ty:ty),*) => {
        $(
            impl ColumnLabel for $ty {
                fn as_text(&self) -> Option<&str> {
                    None
                }

                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

non_text_label!(i64, u64, f64);

/// Reconstruct per-kind settings from feature column names, validating
/// calculator names against the standard registry.
///
/// See [`from_columns_with`].
pub fn from_columns<C>(
    columns: &[C],
    columns_to_ignore: Option<&[C]>,
) -> Result<KindToFcParameters, SettingsError>
where
    C: ColumnLabel + PartialEq,
{
    from_columns_with(CalculatorRegistry::standard(), columns, columns_to_ignore)
}

/// Reconstruct per-kind settings from feature column names.
///
/// Columns equal to an entry of `columns_to_ignore` are skipped. Every other
/// column must be text of the form `<kind>__<calculator>[__<param>_<value>]*`
/// with a registered calculator. Parameter sets for one kind and calculator
/// accumulate in column order; a column without parameters sets the entry to
/// `None`, replacing whatever was collected before. The first bad column
/// aborts the whole call.
pub fn from_columns_with<C>(
    registry: &CalculatorRegistry,
    columns: &[C],
    columns_to_ignore: Option<&[C]>,
) -> Result<KindToFcParameters, SettingsError>
where
    C: ColumnLabel + PartialEq,
{
    let ignore = columns_to_ignore.unwrap_or_default();
    let mut kind_to_fc_parameters = KindToFcParameters::new();

    for column in columns {
        if ignore.contains(column) {
            trace!("Ignoring column {}", column.describe());
            continue;
        }

        let name = column.as_text().ok_or_else(|| SettingsError::InvalidType {
            column: column.describe(),
        })?;

        let parts: Vec<&str> = name.split(FEATURE_DELIMITER).collect();
        if parts.len() < 2 {
            return Err(SettingsError::MalformedColumn {
                column: name.to_string(),
            });
        }

        let kind = parts[0];
        let calculator = parts[1];
        let fc_parameters = kind_to_fc_parameters.get_or_insert_with(kind, FcParameters::new);

        if !registry.contains(calculator) {
            return Err(SettingsError::UnknownCalculator {
                name: calculator.to_string(),
            });
        }

        let config = config_from_parts(&parts).map_err(|source| SettingsError::Codec {
            column: name.to_string(),
            source,
        })?;
        trace!("Column {} -> kind {}, calculator {}", name, kind, calculator);

        match config {
            Some(config) => match fc_parameters.get_mut(calculator) {
                Some(Some(configs)) => configs.push(config),
                _ => {
                    fc_parameters.insert(calculator, Some(vec![config]));
                }
            },
            None => {
                fc_parameters.insert(calculator, None);
            }
        }
    }

    debug!(
        "Reconstructed settings for {} kinds from {} columns",
        kind_to_fc_parameters.len(),
        columns.len()
    );
    Ok(kind_to_fc_parameters)
}
