//! # Free-Text Quantities
//!
//! Every amount in an [`ActivityInput`](crate::ActivityInput) arrives as
//! whatever a person typed into a form field: empty, padded with spaces,
//! negative, or not a number at all. [`Quantity`] keeps that raw text and
//! [`parse_positive_number`] is the single rule deciding whether it counts.
//!
//! ## Validity Rule
//!
//! A quantity is usable when, after trimming surrounding whitespace, it is
//! non-empty, parses as a finite decimal number, and is strictly greater
//! than zero. Anything else yields `None` and the owning entry contributes
//! nothing. Non-finite spellings (`inf`, `NaN`) are rejected here; a finite
//! amount whose contribution overflows is excluded by the estimator.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Parse a user-supplied amount, returning it only if it is a finite number
/// strictly greater than zero.
///
/// ```
/// use footprint_core::parse_positive_number;
///
/// assert_eq!(parse_positive_number(" 12.5 "), Some(12.5));
/// assert_eq!(parse_positive_number(""), None);
/// assert_eq!(parse_positive_number("-5"), None);
/// assert_eq!(parse_positive_number("abc"), None);
/// ```
pub fn parse_positive_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Some(value),
        _ => None,
    }
}

/// Raw text of a numeric form field.
///
/// Deserializes from a JSON/YAML string, integer, float, boolean, or null
/// (null becomes the empty string). Arrays and objects decode as the empty
/// string so a malformed field excludes its entry instead of failing the
/// document. Always serializes as a string so scalar text survives a round
/// trip unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Quantity(String);

impl Quantity {
    /// Wrap raw field text.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The text exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The parsed amount, if it passes the validity rule.
    pub fn positive_value(&self) -> Option<f64> {
        parse_positive_number(&self.0)
    }

    /// Whether the field was left blank.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Quantity {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Quantity {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(QuantityVisitor)
    }
}

struct QuantityVisitor;

impl<'de> Visitor<'de> for QuantityVisitor {
    type Value = Quantity;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a numeric string, a number, or null")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Quantity, E> {
        Ok(Quantity(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Quantity, E> {
        Ok(Quantity::new(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Quantity, E> {
        Ok(Quantity(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Quantity, E> {
        Ok(Quantity(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Quantity, E> {
        Ok(Quantity(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Quantity, E> {
        Ok(Quantity(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Quantity, E> {
        Ok(Quantity::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Quantity, E> {
        Ok(Quantity::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Quantity, D::Error> {
        deserializer.deserialize_any(QuantityVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Quantity, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Quantity::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Quantity, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Quantity::default())
    }
}
