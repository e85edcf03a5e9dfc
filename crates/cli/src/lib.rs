//! Feature Settings Command-Line Tool
//!
//! Prints settings variants and their column names, and turns a list of
//! feature column names back into per-kind settings.

use anyhow::{Context, Result};
use fc_settings::{
    feature_column_names, from_columns, CalculatorRegistry, FcParameters, FcVariant,
    KindToFcParameters,
};
use serde::Serialize;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

pub mod options;

pub use options::CliConfig;

/// Initialize logging to stderr
pub fn init_logging(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Build a variant and drop the excluded calculators
pub fn show(variant: FcVariant, exclude: &[String]) -> FcParameters {
    let mut params = variant.build();
    for name in exclude {
        if params.remove(name).is_none() {
            debug!("Excluded calculator {} is not part of {} settings", name, variant);
        }
    }
    info!("{} settings hold {} calculators", variant, params.len());
    params
}

/// Column names a variant produces for one kind
pub fn columns(variant: FcVariant, kind: &str) -> Vec<String> {
    feature_column_names(kind, &variant.build())
}

/// Parse column names given one per line, or as a JSON array when the
/// input starts with `[`
pub fn parse_input(input: &str, ignore: &[String]) -> Result<KindToFcParameters> {
    let trimmed = input.trim_start();
    let kind_to_fc = if trimmed.starts_with('[') {
        let labels: Vec<serde_json::Value> =
            serde_json::from_str(trimmed).context("Column list is not a JSON array")?;
        let ignore: Vec<serde_json::Value> =
            ignore.iter().cloned().map(serde_json::Value::String).collect();
        from_columns(&labels, Some(ignore.as_slice()))?
    } else {
        let names: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let ignore: Vec<&str> = ignore.iter().map(String::as_str).collect();
        from_columns(&names, Some(ignore.as_slice()))?
    };

    info!("Parsed settings for {} kinds", kind_to_fc.len());
    Ok(kind_to_fc)
}

/// Registry contents as JSON-ready records
pub fn registry_listing() -> Vec<fc_settings::CalculatorRecord> {
    CalculatorRegistry::standard().iter().copied().collect()
}

/// Render a value as JSON
pub fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.context("Failed to serialize output")
}
