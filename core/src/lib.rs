//! Core types for parsed switch CLI reports.
//!
//! This crate defines the data model shared by the report parsers and the
//! CLI:
//!
//! - [`FieldValue`] — one typed value: integer, boolean, or text.
//! - [`ParsedRecord`] — field name to [`FieldValue`] map for one report.
//! - [`SHOW_INTERFACE_FIELDS`] — the fixed field set of a `show interface`
//!   report.
//!
//! Coercion ([`coerce_value`]) turns captured report text into a typed value.
//! Validation ([`validate_record`]) checks a record against an expected field
//! set.
//!
//! # Example
//!
//! ```
//! use switch_report_core::*;
//!
//! let record = [("mtu", "1500"), ("autonegotiation", "on"), ("hardware", "Ethernet")]
//!     .into_iter()
//!     .map(|(name, literal)| (name.to_string(), coerce_value(literal)))
//!     .collect::<ParsedRecord>();
//!
//! assert_eq!(record.get_u64("mtu"), Some(1500));
//! assert_eq!(record.get_bool("autonegotiation"), Some(true));
//! assert_eq!(record.get_str("hardware"), Some("Ethernet"));
//! assert!(validate_record(&record, &["mtu", "autonegotiation", "hardware"]).is_empty());
//! ```

mod coerce;
mod types;
mod validate;

pub use coerce::coerce_value;
pub use types::*;
pub use validate::{ValidationError, validate_record};
