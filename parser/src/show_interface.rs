//! Parser for the `show interface` report.
//!
//! The report has a fixed layout, so it is matched as a whole against one
//! pattern with a named capture per field. Every capture is then run through
//! [`coerce_value`].
//!
//! ```text
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
//! ```

use std::sync::LazyLock;

use regex::Regex;
use switch_report_core::{ParsedRecord, SHOW_INTERFACE_FIELDS, coerce_value};
use tracing::debug;

use crate::error::{ParseError, Result};

const REPORT: &str = "show interface";

/// Report sections in order, each with the pattern that matches it.
///
/// Sections are joined by `\s+`, so any whitespace run (newlines included)
/// may separate them.
const SECTIONS: &[(&str, &str)] = &[
    (
        "interface line",
        r"Interface\s+(?P<port>[0-9]+)\s+is\s+(?P<interface_state>\S+)\s+\((?P<state_description>.*)\)",
    ),
    ("admin state line", r"Admin\s+state\s+is\s+(?P<admin_state>\S+)"),
    (
        "state information line",
        r"State\s+information:\s+(?P<state_information>\S+)",
    ),
    (
        "hardware line",
        r"Hardware:\s+(?P<hardware>\S+),\s+MAC\s+Address:\s+(?P<mac_address>\S+)",
    ),
    ("MTU line", r"MTU\s+(?P<mtu>[0-9]+)"),
    ("connection type line", r"(?P<conection_type>\S+)"),
    (
        "speed line",
        r"Speed\s+(?P<speed>[0-9]+)\s+(?P<speed_unit>\S+)",
    ),
    (
        "auto-negotiation line",
        r"Auto-Negotiation\s+is\s+turned\s+(?P<autonegotiation>\S+)",
    ),
    (
        "flow-control line",
        r"Input\s+flow-control\s+is\s+(?P<input_flow_control>\w+),\s+output\s+flow-control\s+is\s+(?P<output_flow_control>\w+)",
    ),
    ("RX header", r"RX"),
    (
        "RX counters",
        r"(?P<rx_packets>[0-9]+)\s+input\s+packets\s+(?P<rx_bytes>[0-9]+)\s+bytes\s+(?P<rx_error>[0-9]+)\s+input\s+error\s+(?P<rx_dropped>[0-9]+)\s+dropped\s+(?P<rx_crc_fcs>[0-9]+)\s+CRC/FCS",
    ),
    ("TX header", r"TX"),
    (
        "TX counters",
        r"(?P<tx_packets>[0-9]+)\s+output\s+packets\s+(?P<tx_bytes>[0-9]+)\s+bytes\s+(?P<tx_errors>[0-9]+)\s+input\s+error\s+(?P<tx_dropped>[0-9]+)\s+dropped\s+(?P<tx_collisions>[0-9]+)\s+collision",
    ),
];

static SHOW_INTERFACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&anchored_pattern(SECTIONS)).expect("static regex must compile")
});

/// Builds a start-anchored pattern from a run of sections.
fn anchored_pattern(sections: &[(&str, &str)]) -> String {
    let body = sections
        .iter()
        .map(|(_, pattern)| *pattern)
        .collect::<Vec<_>>()
        .join(r"\s+");
    format!(r"^\s*{body}")
}

/// Parser for one `show interface` report.
///
/// Stateless; the compiled pattern is shared by every instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceStatusParser;

impl InterfaceStatusParser {
    pub fn new() -> Self {
        Self
    }

    /// Report kind handled by this parser.
    pub fn report(&self) -> &'static str {
        REPORT
    }

    /// Fields present in every record this parser returns.
    pub fn fields(&self) -> &'static [&'static str] {
        SHOW_INTERFACE_FIELDS
    }

    /// Parses one report. See [`parse_show_interface`].
    pub fn parse(&self, raw: &str) -> Result<ParsedRecord> {
        let Some(captures) = SHOW_INTERFACE_RE.captures(raw) else {
            let section = first_failing_section(raw);
            debug!(report = REPORT, section, "Report did not match");
            return Err(ParseError::Malformed {
                report: REPORT,
                section,
            });
        };

        let mut record = ParsedRecord::new();
        for &field in SHOW_INTERFACE_FIELDS {
            let Some(literal) = captures.name(field) else {
                return Err(ParseError::Malformed {
                    report: REPORT,
                    section: "report",
                });
            };
            record.insert(field, coerce_value(literal.as_str()));
        }

        debug!(
            report = REPORT,
            port = ?record.get("port"),
            fields = record.len(),
            "Parsed report"
        );
        Ok(record)
    }
}

/// Parses the raw text of a `show interface` report into a typed record.
///
/// The whole text must follow the report layout; whitespace runs between
/// tokens are free-form, and text after the final TX counter is ignored. On
/// success every name in [`SHOW_INTERFACE_FIELDS`] is present. Any structural
/// mismatch returns [`ParseError::Malformed`] and no record.
///
/// # Examples
///
/// ```
/// use switch_report_parser::parse_show_interface;
///
/// let raw = "\
/// Interface 7 is up (Link up)
/// Admin state is up
/// State information: ok
/// Hardware: Ethernet, MAC Address: 70:72:cf:d7:54:10
/// MTU 1500
/// Full-duplex
/// Speed 1000 Mb/s
/// Auto-Negotiation is turned on
/// Input flow-control is on, output flow-control is off
/// RX
///     12 input packets 3400 bytes
///     0 input error 1 dropped 0 CRC/FCS
/// TX
///     9 output packets 2100 bytes
///     0 input error 0 dropped 0 collision
/// ";
///
/// let record = parse_show_interface(raw).unwrap();
/// assert_eq!(record.get_u64("port"), Some(7));
/// assert_eq!(record.get_str("conection_type"), Some("Full-duplex"));
/// assert_eq!(record.get_bool("autonegotiation"), Some(true));
/// assert_eq!(record.get_bool("output_flow_control"), Some(false));
/// assert_eq!(record.get_u64("rx_dropped"), Some(1));
///
/// assert!(parse_show_interface("Interface 7 is up").is_err());
/// ```
pub fn parse_show_interface(raw: &str) -> Result<ParsedRecord> {
    InterfaceStatusParser.parse(raw)
}

/// Finds the first section whose start-anchored prefix no longer matches.
///
/// Only called on failure, so the per-prefix compile cost stays off the
/// success path.
fn first_failing_section(raw: &str) -> &'static str {
    for end in 1..=SECTIONS.len() {
        let Ok(prefix) = Regex::new(&anchored_pattern(&SECTIONS[..end])) else {
            break;
        };
        if !prefix.is_match(raw) {
            return SECTIONS[end - 1].0;
        }
    }
    "report"
}
