//! Value-driven coercion of captured report text.
//!
//! The rule looks only at the captured literal, never at the field it came
//! from: a hardware label that happens to be all digits becomes an integer
//! just like a packet counter does.

use crate::FieldValue;

/// Coerces one captured literal into a [`FieldValue`].
///
/// - non-empty and all ASCII decimal digits → [`FieldValue::Integer`]
/// - exactly `on` / `off` → [`FieldValue::Boolean`]
/// - anything else → [`FieldValue::Text`], unchanged
///
/// A digit run that does not fit in `u64` is kept as text.
///
/// # Examples
///
/// ```
/// use switch_report_core::{FieldValue, coerce_value};
///
/// assert_eq!(coerce_value("1500"), FieldValue::Integer(1500));
/// assert_eq!(coerce_value("on"), FieldValue::Boolean(true));
/// assert_eq!(coerce_value("off"), FieldValue::Boolean(false));
/// assert_eq!(coerce_value("Half-duplex"), FieldValue::Text("Half-duplex".into()));
/// ```
pub fn coerce_value(literal: &str) -> FieldValue {
    if is_decimal_digits(literal) {
        if let Ok(value) = literal.parse::<u64>() {
            return FieldValue::Integer(value);
        }
    }

    match literal {
        "on" => FieldValue::Boolean(true),
        "off" => FieldValue::Boolean(false),
        _ => FieldValue::Text(literal.to_string()),
    }
}

fn is_decimal_digits(literal: &str) -> bool {
    !literal.is_empty() && literal.bytes().all(|b| b.is_ascii_digit())
}
