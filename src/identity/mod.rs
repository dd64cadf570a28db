//! T.C. identity number (Kimlik No) validation and display helpers.
//!
//! An identity number is 11 decimal digits whose last two digits are
//! checksums over the first nine. Validation checks seven rules in a fixed
//! order and reports the first one that fails.
//!
//! # Example
//!
//! ```rust
//! use sporokul_core::identity::*;
//!
//! let result = validate("100 000 001 46");
//! assert!(result.is_valid());
//!
//! let result = validate("10000000147");
//! assert_eq!(result.rule(), Some(IdentityRule::OddLastDigit));
//!
//! assert_eq!(mask("10000000146"), "100****46");
//! ```

mod error;
mod format;
mod number;
mod validate;

pub use error::IdentityError;
pub use format::{MASK, format, mask};
pub use number::IdentityNumber;
pub use validate::{IDENTITY_LEN, IdentityRule, ValidationResult, clean, is_valid, validate};
