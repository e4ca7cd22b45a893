//! Output formatting for parsed records.

use std::collections::BTreeMap;

use switch_report_core::{FieldValue, ParsedRecord, SHOW_INTERFACE_FIELDS};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// Formats a record in the requested output format.
pub fn format_record(record: &ParsedRecord, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(record)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(record).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => Ok(record_to_table(record)),
    }
}

/// Formats several labelled records (e.g. one per input file).
///
/// JSON and YAML produce one map keyed by label; the table format prints one
/// titled table per record.
pub fn format_records(
    records: &[(String, ParsedRecord)],
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Json | OutputFormat::Yaml => {
            let keyed = records
                .iter()
                .map(|(label, record)| (label.as_str(), record))
                .collect::<BTreeMap<_, _>>();
            if format == OutputFormat::Json {
                serde_json::to_string_pretty(&keyed)
                    .map_err(|e| format!("JSON serialization failed: {e}"))
            } else {
                serde_yaml::to_string(&keyed)
                    .map_err(|e| format!("YAML serialization failed: {e}"))
            }
        }
        OutputFormat::Table => Ok(records
            .iter()
            .map(|(label, record)| format!("## {label}\n\n{}", record_to_table(record)))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn record_to_table(record: &ParsedRecord) -> String {
    let rows = ordered_fields(record);
    let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (name, value) in rows {
        out.push_str(&format!("{name:<width$}  {}\n", display_value(value)));
    }
    out
}

/// Known report fields first, in report order, then any others by name.
fn ordered_fields(record: &ParsedRecord) -> Vec<(&str, &FieldValue)> {
    let mut rows = SHOW_INTERFACE_FIELDS
        .iter()
        .filter_map(|name| record.get(name).map(|value| (*name, value)))
        .collect::<Vec<_>>();
    rows.extend(
        record
            .iter()
            .filter(|(name, _)| !SHOW_INTERFACE_FIELDS.contains(name)),
    );
    rows
}

fn display_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Boolean(true) => "on".to_string(),
        FieldValue::Boolean(false) => "off".to_string(),
        other => other.to_string(),
    }
}
