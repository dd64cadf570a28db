//! # sporokul-core
//!
//! Pure validation and invoicing utilities for a sports-school management
//! system: T.C. identity number checksum validation and VAT rounding.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Every amount is rounded to cents (half away from zero) after each step.
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use sporokul_core::identity;
//! use sporokul_core::vat::{self, VatLineItem, VatRate};
//!
//! assert!(identity::validate("10000000146").is_valid());
//! assert_eq!(identity::format("10000000146"), "100 000 00 146");
//!
//! assert_eq!(vat::vat_amount(dec!(33.33), VatRate::STANDARD), dec!(6.67));
//!
//! let totals = vat::aggregate(&[
//!     VatLineItem::new(dec!(100), VatRate::STANDARD),
//!     VatLineItem::new(dec!(50), VatRate::REDUCED_10),
//! ]);
//! assert_eq!(totals.total_including_vat, dec!(175.00));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `identity` (default) | Identity number clean/validate/format/mask |
//! | `vat` (default) | VAT amounts, reverse VAT, line aggregation |
//! | `all` | Everything |

#[cfg(feature = "identity")]
pub mod identity;

#[cfg(feature = "vat")]
pub mod vat;
