use std::fmt;

use serde::Serialize;

/// Number of digits in an identity number.
pub const IDENTITY_LEN: usize = 11;

/// The checksum rules, in the order they are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityRule {
    /// No digits left after cleaning.
    Empty,
    /// Not exactly 11 digits.
    Length,
    /// A character other than `0`-`9`.
    NonDigit,
    /// The first digit is `0`.
    LeadingZero,
    /// The 11th digit is odd.
    OddLastDigit,
    /// The 11th digit is not the sum of the first ten mod 10.
    LastDigitSum,
    /// The 10th digit does not match `(odd * 7 - even) mod 10`.
    TenthDigitChecksum,
}

impl IdentityRule {
    /// Human-readable failure reason for this rule.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "identity number must not be empty",
            Self::Length => "identity number must be exactly 11 digits",
            Self::NonDigit => "identity number must contain only digits",
            Self::LeadingZero => "identity number must not start with 0",
            Self::OddLastDigit => "last digit of the identity number must be even",
            Self::LastDigitSum => "last digit does not match the sum of the first ten digits",
            Self::TenthDigitChecksum => "tenth digit does not match the identity number checksum",
        }
    }
}

impl fmt::Display for IdentityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of [`validate`].
///
/// `error` is set if and only if the number is invalid, and then holds the
/// message of the first failing rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip)]
    rule: Option<IdentityRule>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
            rule: None,
        }
    }

    fn failed(rule: IdentityRule) -> Self {
        Self {
            is_valid: false,
            error: Some(rule.message().to_string()),
            rule: Some(rule),
        }
    }

    /// Whether every rule passed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Failure reason, `None` when valid.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The rule that failed, `None` when valid.
    pub fn rule(&self) -> Option<IdentityRule> {
        self.rule
    }
}

/// Strip every character that is not an ASCII digit.
pub fn clean(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate an identity number.
///
/// The input is [`clean`]ed first, so separators such as spaces or dashes
/// are ignored. Rules are checked in [`IdentityRule`] order and the first
/// failure is returned.
pub fn validate(raw: &str) -> ValidationResult {
    let cleaned = clean(raw);
    match check(&cleaned) {
        Ok(()) => ValidationResult::valid(),
        Err(rule) => {
            tracing::debug!(
                rule = ?rule,
                number = %super::mask(&cleaned),
                "identity number rejected"
            );
            ValidationResult::failed(rule)
        }
    }
}

/// Shorthand for `validate(raw).is_valid()`.
pub fn is_valid(raw: &str) -> bool {
    validate(raw).is_valid()
}

fn check(digits: &str) -> Result<(), IdentityRule> {
    if digits.is_empty() {
        return Err(IdentityRule::Empty);
    }
    if digits.len() != IDENTITY_LEN {
        return Err(IdentityRule::Length);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdentityRule::NonDigit);
    }

    let d: Vec<i32> = digits.bytes().map(|b| i32::from(b - b'0')).collect();

    if d[0] == 0 {
        return Err(IdentityRule::LeadingZero);
    }
    if d[10] % 2 != 0 {
        return Err(IdentityRule::OddLastDigit);
    }

    let first_ten: i32 = d[..10].iter().sum();
    if first_ten % 10 != d[10] {
        return Err(IdentityRule::LastDigitSum);
    }

    // Positions 1,3,5,7,9 and 2,4,6,8 (1-indexed).
    let odd_sum: i32 = d[..9].iter().step_by(2).sum();
    let even_sum: i32 = d[1..8].iter().step_by(2).sum();
    let checksum = (odd_sum * 7 - even_sum).rem_euclid(10);
    if checksum != d[9] {
        return Err(IdentityRule::TenthDigitChecksum);
    }

    Ok(())
}
