use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::rate::VatRate;
use super::rounding::round_money;

/// Net amount, VAT and gross amount for a single net amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VatBreakdown {
    /// Net amount as given, rounded to cents.
    pub amount_excluding_vat: Decimal,
    /// VAT on the net amount.
    pub vat_amount: Decimal,
    /// `amount_excluding_vat + vat_amount`.
    pub amount_including_vat: Decimal,
}

/// Net amount and VAT recovered from a gross amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseVat {
    pub amount_excluding_vat: Decimal,
    pub vat_amount: Decimal,
}

/// VAT on a net amount: `excl * rate / 100`, rounded to cents.
pub fn vat_amount(excl: Decimal, rate: VatRate) -> Decimal {
    round_money(excl * rate.percent() / dec!(100))
}

/// Gross amount for a net amount, rounded to cents.
pub fn amount_including_vat(excl: Decimal, rate: VatRate) -> Decimal {
    round_money(excl + vat_amount(excl, rate))
}

/// Net, VAT and gross for a net amount.
///
/// VAT is computed from `excl` as given; the gross amount is the sum of the
/// two rounded fields, so the three always reconcile.
pub fn vat_breakdown(excl: Decimal, rate: VatRate) -> VatBreakdown {
    let amount_excluding_vat = round_money(excl);
    let vat = vat_amount(excl, rate);
    VatBreakdown {
        amount_excluding_vat,
        vat_amount: vat,
        amount_including_vat: round_money(amount_excluding_vat + vat),
    }
}

/// Split a gross amount into net amount and VAT.
///
/// The net amount is `incl / (1 + rate / 100)` rounded to cents, and the VAT
/// is whatever remains of `incl`, rounded to cents. For gross amounts with at
/// most two decimals the parts add back up to `incl` exactly. A gross amount
/// with sub-cent digits can come back one cent off, since both parts are
/// rounded independently:
///
/// ```rust
/// use rust_decimal_macros::dec;
/// use sporokul_core::vat::{VatRate, reverse_vat};
///
/// let r = reverse_vat(dec!(100.005), VatRate::ZERO);
/// assert_eq!(r.amount_excluding_vat, dec!(100.01));
/// assert_eq!(r.vat_amount, dec!(-0.01));
/// assert_eq!(r.amount_excluding_vat + r.vat_amount, dec!(100.00));
/// ```
pub fn reverse_vat(incl: Decimal, rate: VatRate) -> ReverseVat {
    // rate >= 0, so the divisor is at least 1
    let divisor = Decimal::ONE + rate.percent() / dec!(100);
    let amount_excluding_vat = round_money(incl / divisor);
    ReverseVat {
        amount_excluding_vat,
        vat_amount: round_money(incl - amount_excluding_vat),
    }
}
