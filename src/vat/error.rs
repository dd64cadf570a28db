use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from converting caller-supplied amounts and rates.
///
/// The VAT computations themselves never fail.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VatError {
    /// A monetary amount could not be parsed or is out of range.
    #[error("invalid amount '{value}': {reason}")]
    InvalidAmount {
        /// The offending input, as received.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A floating-point amount or rate was NaN or infinite.
    #[error("amount must be finite, got {0}")]
    NonFiniteAmount(f64),

    /// A VAT rate below zero.
    #[error("VAT rate must not be negative, got {0}")]
    NegativeRate(Decimal),

    /// A VAT rate above [`VatRate::MAX`](super::VatRate::MAX).
    #[error("VAT rate must not exceed 1000%, got {0}")]
    RateTooHigh(Decimal),
}
