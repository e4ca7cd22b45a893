//! Parsers for switch CLI status reports.
//!
//! This crate turns the captured text of a switch's `show interface` command
//! into a typed [`ParsedRecord`]. It never talks to the device: acquiring the
//! text is the caller's job.
//!
//! # Main entry points
//!
//! - [`parse_show_interface`] — parse one report, failing with
//!   [`ParseError::Malformed`] if the layout does not match.
//! - [`InterfaceStatusParser`] — the same operation as a value, with the
//!   report's field set.
//! - [`output::format_record`] — render a record as JSON, YAML, or a table.
//!
//! # Example
//!
//! ```
//! use switch_report_parser::{ParseError, parse_show_interface};
//!
//! let raw = "\
//! Interface 1 is down (Administratively down)
//! Admin state is down
//! State information: admin_down
//! Hardware: Ethernet, MAC Address: aa:55:aa:55:00:43
//! MTU 0
//! Half-duplex
//! Speed 0 Mb/s
//! Auto-Negotiation is turned off
//! Input flow-control is off, output flow-control is off
//! RX
//!          0 input packets     0 bytes
//!          0 input error       0 dropped     0 CRC/FCS
//! TX
//!          0 output packets    0 bytes
//!          0 input error       0 dropped     0 collision
//! ";
//!
//! let record = parse_show_interface(raw).unwrap();
//! assert_eq!(record.get_u64("port"), Some(1));
//! assert_eq!(record.get_str("state_description"), Some("Administratively down"));
//! assert_eq!(record.get_bool("autonegotiation"), Some(false));
//!
//! let truncated = raw.replace("MTU 0\n", "");
//! assert!(matches!(
//!     parse_show_interface(&truncated),
//!     Err(ParseError::Malformed { section: "MTU line", .. })
//! ));
//! ```
//!
//! [`ParsedRecord`]: switch_report_core::ParsedRecord

mod error;
pub mod output;
mod show_interface;

pub use error::{ParseError, Result};
pub use show_interface::{InterfaceStatusParser, parse_show_interface};
