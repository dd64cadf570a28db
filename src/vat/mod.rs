//! VAT (KDV) amounts, reverse VAT and invoice line aggregation.
//!
//! Every amount is rounded to cents, ties away from zero, after every step
//! rather than only at the end. Per-line results therefore match what a
//! printed invoice shows line by line.
//!
//! # Example
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use sporokul_core::vat::*;
//!
//! let b = vat_breakdown(dec!(100), VatRate::STANDARD);
//! assert_eq!(b.vat_amount, dec!(20.00));
//! assert_eq!(b.amount_including_vat, dec!(120.00));
//!
//! let r = reverse_vat(dec!(120), VatRate::STANDARD);
//! assert_eq!(r.amount_excluding_vat, dec!(100.00));
//!
//! // Amounts from a form post
//! let net = parse_amount("49.90").unwrap();
//! let rate: VatRate = "10%".parse().unwrap();
//! assert_eq!(amount_including_vat(net, rate), dec!(54.89));
//! ```

mod aggregate;
mod amount;
mod calc;
mod error;
mod rate;
mod rounding;

pub use aggregate::{RateSubtotal, VatLineItem, VatTotals, aggregate, aggregate_by_rate};
pub use amount::{MAX_AMOUNT, amount_from_f64, check_amount, parse_amount};
pub use calc::{
    ReverseVat, VatBreakdown, amount_including_vat, reverse_vat, vat_amount, vat_breakdown,
};
pub use error::VatError;
pub use rate::VatRate;
pub use rounding::{MONEY_SCALE, round_money};
