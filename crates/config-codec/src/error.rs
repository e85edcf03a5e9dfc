//! Codec Error Types

use thiserror::Error;

/// Errors while decoding parameter tokens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Token has no `_` between parameter name and value
    #[error("Parameter token {token:?} has no name/value separator")]
    MissingValueSeparator { token: String },

    /// Value is not a supported literal
    #[error("Invalid parameter literal {literal:?}: {reason}")]
    InvalidLiteral { literal: String, reason: String },
}
