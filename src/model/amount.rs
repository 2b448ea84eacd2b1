//! Amount type for monetary values as they cross the expense API wire.
//!
//! The remote store serializes amounts as decimal strings, but records created by
//! other clients can carry bare JSON numbers instead. `Amount` wraps `Decimal` and
//! accepts both; anything missing or unparseable coerces to zero so one malformed
//! record degrades to a zero line item instead of failing the whole fetch.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Represents a monetary amount.
///
/// This type wraps `Decimal` and provides custom serialization/deserialization to
/// handle amounts that arrive as either strings or numbers. `Display` always renders
/// exactly two fractional digits.
///
/// # Examples
///
/// ```
/// # use expenses_cli::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("25").unwrap();
/// assert_eq!(amount.to_string(), "25.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    /// Creates a new Amount from a Decimal value.
    pub const fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Amount::default());
        }
        Decimal::from_str(trimmed).map(Amount::new)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // The store's serializer speaks decimal strings.
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        // Missing, null and unparseable values all coerce to zero.
        let value = match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Number(n)) => Decimal::from_f64(n).unwrap_or_default(),
            Some(Raw::Text(s)) => Decimal::from_str(s.trim()).unwrap_or_default(),
            None => Decimal::ZERO,
        };
        Ok(Amount::new(value))
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}
