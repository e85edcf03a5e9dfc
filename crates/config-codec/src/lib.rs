//! Calculator Parameter Codec
//!
//! Typed calculator parameters and their textual form inside feature column
//! names. Decoding applies the same literal coercion as the naming side
//! produces, so names written by an extraction run decode back to the
//! parameter sets that produced them.

mod codec;
mod error;
mod literal;
mod value;

pub use codec::{column_name, config_from_parts, to_output_format, FEATURE_DELIMITER, VALUE_SEPARATOR};
pub use error::CodecError;
pub use literal::parse_value;
pub use value::{param_set, ParamSet, ParamValue};
