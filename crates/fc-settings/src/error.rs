//! Settings Error Types

use config_codec::CodecError;
use thiserror::Error;

/// Errors while reconstructing settings from column names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Column label is not text
    #[error("Column name {column} should be a string")]
    InvalidType { column: String },

    /// Column name has no `__` delimiter
    #[error("Splitting of column name {column:?} resulted in only one part")]
    MalformedColumn { column: String },

    /// Calculator is not in the registry
    #[error("Unknown feature name {name:?}")]
    UnknownCalculator { name: String },

    /// Parameter tokens could not be decoded
    #[error("Invalid parameters in column {column:?}: {source}")]
    Codec {
        column: String,
        #[source]
        source: CodecError,
    },

    /// Settings variant name not recognised
    #[error("Unknown settings variant: {0}")]
    UnknownVariant(String),
}
