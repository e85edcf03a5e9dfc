//! Feature Calculator Registry
//!
//! Static table of the time-series feature calculators known to the extraction
//! pipeline, with the capability metadata used to classify them into settings
//! variants.

mod record;
mod registry;
mod table;

pub use record::{CalculatorRecord, FcType, IndexType, InputKind};
pub use registry::CalculatorRegistry;
pub use table::STANDARD_CALCULATORS;
