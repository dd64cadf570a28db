//! Conversion of caller-supplied amounts into [`Decimal`].
//!
//! Request handlers receive amounts as form strings or JSON numbers. These
//! helpers are the only place the core rejects input. Anything they accept can
//! go through every VAT computation, and summed over any realistic number of
//! invoice lines, without leaving `Decimal`'s range.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer};

use super::error::VatError;

/// Largest accepted magnitude for a single amount: 10^15 (one quadrillion).
///
/// Together with [`VatRate::MAX`](super::VatRate::MAX) this keeps every
/// product, sum and rescale to cents well inside `Decimal`'s 28 digits.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Reject amounts whose magnitude exceeds [`MAX_AMOUNT`].
pub fn check_amount(value: Decimal) -> Result<Decimal, VatError> {
    if value.abs() > MAX_AMOUNT {
        return Err(too_large(value.to_string()));
    }
    Ok(value)
}

fn too_large(value: String) -> VatError {
    VatError::InvalidAmount {
        value,
        reason: format!("magnitude exceeds {MAX_AMOUNT}"),
    }
}

/// Parse a decimal literal such as `"1250.50"` or `"-3"`.
///
/// Surrounding whitespace is ignored. The value is returned as written,
/// without rounding. Magnitudes above [`MAX_AMOUNT`] are rejected.
pub fn parse_amount(input: &str) -> Result<Decimal, VatError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(VatError::InvalidAmount {
            value: input.into(),
            reason: "empty input".into(),
        });
    }
    let value = Decimal::from_str(trimmed).map_err(|e| VatError::InvalidAmount {
        value: input.into(),
        reason: e.to_string(),
    })?;
    if value.abs() > MAX_AMOUNT {
        return Err(too_large(input.into()));
    }
    Ok(value)
}

/// Convert a float to a [`Decimal`] through its shortest round-trip decimal
/// form, so `33.33_f64` becomes exactly `33.33`.
///
/// NaN and infinities are rejected, as are magnitudes above [`MAX_AMOUNT`].
pub fn amount_from_f64(value: f64) -> Result<Decimal, VatError> {
    if !value.is_finite() {
        return Err(VatError::NonFiniteAmount(value));
    }
    parse_amount(&value.to_string())
}

/// `deserialize_with` helper applying [`check_amount`] to a decoded amount.
pub(crate) fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = <Decimal as Deserialize>::deserialize(deserializer)?;
    check_amount(value).map_err(serde::de::Error::custom)
}
