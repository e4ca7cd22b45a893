//! Value and record types for parsed switch reports.
//!
//! A parsed report is a flat map from field name to [`FieldValue`]. The types
//! serialize with [`serde`] so a record prints as a plain JSON/YAML map
//! (`{"port": 1, "autonegotiation": false, "hardware": "Ethernet"}`).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Field names produced by the `show interface` report parser, in report
/// order.
///
/// `conection_type` keeps its historical spelling so existing consumers that
/// key on it continue to work.
pub const SHOW_INTERFACE_FIELDS: &[&str] = &[
    "port",
    "interface_state",
    "state_description",
    "admin_state",
    "state_information",
    "hardware",
    "mac_address",
    "mtu",
    "conection_type",
    "speed",
    "speed_unit",
    "autonegotiation",
    "input_flow_control",
    "output_flow_control",
    "rx_packets",
    "rx_bytes",
    "rx_error",
    "rx_dropped",
    "rx_crc_fcs",
    "tx_packets",
    "tx_bytes",
    "tx_errors",
    "tx_dropped",
    "tx_collisions",
];

/// A single typed value captured from a report.
///
/// Serialized untagged, so JSON `1`, `true` and `"down"` map to
/// `Integer`, `Boolean` and `Text` respectively.
///
/// # Examples
///
/// ```
/// use switch_report_core::FieldValue;
///
/// let value: FieldValue = serde_json::from_str("42").unwrap();
/// assert_eq!(value, FieldValue::Integer(42));
/// assert_eq!(value.as_u64(), Some(42));
/// assert_eq!(FieldValue::from("Mb/s").to_string(), "Mb/s");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Counter or identifier made only of decimal digits.
    Integer(u64),
    /// `on`/`off` flag.
    Boolean(bool),
    /// Anything else, kept verbatim.
    Text(String),
}

impl FieldValue {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Short type label used in diagnostics and table output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Boolean(_) => "bool",
            Self::Text(_) => "str",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A parsed report: field name to typed value.
///
/// Built once by a parser and handed to the caller; the parser never touches
/// it again.
///
/// # Examples
///
/// ```
/// use switch_report_core::{FieldValue, ParsedRecord};
///
/// let mut record = ParsedRecord::new();
/// record.insert("port", FieldValue::Integer(1));
/// record.insert("hardware", FieldValue::from("Ethernet"));
///
/// assert_eq!(record.get_u64("port"), Some(1));
/// assert_eq!(record.get_str("hardware"), Some("Ethernet"));
/// assert_eq!(record.get_bool("port"), None);
/// assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"hardware":"Ethernet","port":1}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl ParsedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, returning the previous value if the name was taken.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        self.fields.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn get_u64(&self, name: &str) -> Option<u64> {
        self.get(name).and_then(FieldValue::as_u64)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(FieldValue::as_bool)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn into_inner(self) -> BTreeMap<String, FieldValue> {
        self.fields
    }
}

impl FromIterator<(String, FieldValue)> for ParsedRecord {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
