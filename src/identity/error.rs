use thiserror::Error;

use super::validate::IdentityRule;

/// Returned by [`super::IdentityNumber::parse`] when a rule fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid identity number: {}", .rule.message())]
pub struct IdentityError {
    /// The first rule that failed.
    pub rule: IdentityRule,
}

impl IdentityError {
    /// Human-readable reason, same text as [`IdentityRule::message`].
    pub fn message(&self) -> &'static str {
        self.rule.message()
    }
}
