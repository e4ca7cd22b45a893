//! Error type for report parsing.

use thiserror::Error;

/// Errors returned by report parsers.
///
/// There is a single failure kind: the text is not a well-formed report. The
/// variant names the first report section that failed to match so callers can
/// tell which part of the device output changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input does not follow the expected report layout.
    #[error("malformed {report} report: {section} does not match the expected layout")]
    Malformed {
        /// Report kind, e.g. `show interface`.
        report: &'static str,
        /// First section that failed to match, e.g. `MTU line`.
        section: &'static str,
    },
}

impl ParseError {
    /// Returns the section that failed to match.
    pub fn section(&self) -> &'static str {
        match self {
            Self::Malformed { section, .. } => section,
        }
    }
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
