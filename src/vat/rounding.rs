use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits of every monetary amount (cents).
pub const MONEY_SCALE: u32 = 2;

/// Round to cents, ties away from zero (commercial rounding).
///
/// The result carries exactly two fractional digits, so `20` comes back as
/// `20.00`. Negative zero is normalized to zero. The scale only holds while
/// the integer part fits in 26 digits, which every amount derived from
/// [`MAX_AMOUNT`](super::MAX_AMOUNT)-bounded input does.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}
