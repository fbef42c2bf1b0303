//! Serde utilities for backend payloads.

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;

/// Module to handle money amounts that travel as JSON numbers but are held as decimals.
pub mod decimal_number {
    use super::{Deserializer, Serializer, Visitor, de, fmt};
    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use std::str::FromStr;

    /// Serializes a decimal as a JSON number.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not fit in an `f64` or the serializer fails.
    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let number = value
            .to_f64()
            .ok_or_else(|| serde::ser::Error::custom(format!("amount out of range: {value}")))?;
        serializer.serialize_f64(number)
    }

    /// Deserializes a decimal from a number or a numeric string.
    ///
    /// Floats are converted through their shortest textual form, so `100.1`
    /// becomes exactly `100.1` rather than its binary approximation.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not numeric.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DecimalVisitor;

        impl Visitor<'_> for DecimalVisitor {
            type Value = Decimal;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number or numeric string")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Decimal::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Decimal::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Decimal::from_str(&value.to_string()).map_err(de::Error::custom)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Decimal::from_str(value.trim()).map_err(de::Error::custom)
            }

            // SUM() over an empty month comes back as null on some backends.
            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Decimal::ZERO)
            }
        }

        deserializer.deserialize_any(DecimalVisitor)
    }
}

/// Module to handle backend timestamps (`YYYY-MM-DD HH:MM:SS` or plain `YYYY-MM-DD`).
pub mod timestamp {
    use super::{Deserializer, Serializer, Visitor, de, fmt};
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    /// Wire format used by the backend when recording a transaction.
    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Parses a backend timestamp.
    ///
    /// # Errors
    ///
    /// Returns a chrono parse error if neither supported layout matches.
    pub fn parse(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        let value = value.trim();
        NaiveDateTime::parse_from_str(value, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
            .or_else(|_| {
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
    }

    /// Serializes a timestamp in the backend layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    /// Deserializes a timestamp from either supported layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a string or cannot be parsed.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = NaiveDateTime;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a timestamp formatted as YYYY-MM-DD[ HH:MM:SS]")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse(value).map_err(|e| de::Error::custom(format!("{e}: {value:?}")))
            }
        }

        deserializer.deserialize_str(TimestampVisitor)
    }
}
