//! Display helpers. These never validate; anything that is not 11 digits
//! after cleaning is returned cleaned but otherwise unchanged.

use super::validate::{IDENTITY_LEN, clean};

/// Replacement for the six hidden middle digits in [`mask`].
pub const MASK: &str = "****";

/// Group an identity number as `XXX XXX XX XXX`.
pub fn format(raw: &str) -> String {
    let digits = clean(raw);
    if digits.len() != IDENTITY_LEN {
        return digits;
    }
    format!(
        "{} {} {} {}",
        &digits[..3],
        &digits[3..6],
        &digits[6..8],
        &digits[8..]
    )
}

/// Redact an identity number to its first three and last two digits.
pub fn mask(raw: &str) -> String {
    let digits = clean(raw);
    if digits.len() != IDENTITY_LEN {
        return digits;
    }
    format!("{}{MASK}{}", &digits[..3], &digits[9..])
}
