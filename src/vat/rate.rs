use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::VatError;

/// A VAT (KDV) rate in percent, between 0 and [`VatRate::MAX`].
///
/// The statutory rates are provided as constants, but any rate in that range
/// is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct VatRate(Decimal);

impl VatRate {
    /// 0 %, exempt supplies.
    pub const ZERO: Self = Self(dec!(0));
    /// 1 %, basic foodstuffs and similar.
    pub const REDUCED_1: Self = Self(dec!(1));
    /// 10 %, reduced rate.
    pub const REDUCED_10: Self = Self(dec!(10));
    /// 20 %, standard rate.
    pub const STANDARD: Self = Self(dec!(20));

    /// All rates currently recognized by law, ascending.
    pub const STATUTORY: [Self; 4] = [
        Self::ZERO,
        Self::REDUCED_1,
        Self::REDUCED_10,
        Self::STANDARD,
    ];

    /// Highest accepted rate, 1000 %.
    pub const MAX: Self = Self(dec!(1000));

    /// Create a rate from a percentage. Rejects negative values and values
    /// above [`VatRate::MAX`].
    pub fn new(percent: Decimal) -> Result<Self, VatError> {
        if percent.is_sign_negative() && !percent.is_zero() {
            return Err(VatError::NegativeRate(percent));
        }
        if percent > Self::MAX.0 {
            return Err(VatError::RateTooHigh(percent));
        }
        let mut percent = percent.normalize();
        if percent.is_zero() {
            percent.set_sign_positive(true);
        }
        Ok(Self(percent))
    }

    /// Create a rate from a float percentage, rejecting NaN, infinity and
    /// out-of-range values.
    pub fn from_f64(percent: f64) -> Result<Self, VatError> {
        Self::new(super::amount_from_f64(percent)?)
    }

    /// The rate as a percentage, e.g. `20` for 20 %.
    pub fn percent(&self) -> Decimal {
        self.0
    }

    /// Whether this is one of [`VatRate::STATUTORY`].
    pub fn is_statutory(&self) -> bool {
        Self::STATUTORY.contains(self)
    }
}

impl TryFrom<Decimal> for VatRate {
    type Error = VatError;

    fn try_from(percent: Decimal) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl From<VatRate> for Decimal {
    fn from(rate: VatRate) -> Self {
        rate.0
    }
}

impl FromStr for VatRate {
    type Err = VatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix('%').unwrap_or(s).trim_end();
        Self::new(super::parse_amount(s)?)
    }
}

impl fmt::Display for VatRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
