use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::deserialize_amount;
use super::calc::vat_amount;
use super::rate::VatRate;
use super::rounding::round_money;

/// One invoice line: a net amount and its VAT rate.
///
/// Decoding rejects amounts above [`MAX_AMOUNT`](super::MAX_AMOUNT).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatLineItem {
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount_excluding_vat: Decimal,
    pub vat_rate: VatRate,
}

impl VatLineItem {
    pub fn new(amount_excluding_vat: Decimal, vat_rate: VatRate) -> Self {
        Self {
            amount_excluding_vat,
            vat_rate,
        }
    }
}

/// Invoice totals over all lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VatTotals {
    pub total_excluding_vat: Decimal,
    pub total_vat: Decimal,
    pub total_including_vat: Decimal,
}

/// Net and VAT subtotal for all lines sharing one rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSubtotal {
    pub rate: VatRate,
    pub total_excluding_vat: Decimal,
    pub total_vat: Decimal,
}

/// Net amount and VAT of a single line, each rounded to cents.
fn line_amounts(item: &VatLineItem) -> (Decimal, Decimal) {
    let excl = round_money(item.amount_excluding_vat);
    (excl, vat_amount(excl, item.vat_rate))
}

/// Sum invoice lines, rounding each line before summing.
///
/// Every line's net amount is rounded to cents and its VAT computed from that
/// rounded amount. The result generally differs from computing VAT once on
/// the grand total, by up to a cent per line.
pub fn aggregate(items: &[VatLineItem]) -> VatTotals {
    let mut total_excl = Decimal::ZERO;
    let mut total_vat = Decimal::ZERO;

    for item in items {
        let (excl, vat) = line_amounts(item);
        total_excl += excl;
        total_vat += vat;
    }

    let total_excluding_vat = round_money(total_excl);
    let total_vat = round_money(total_vat);
    let totals = VatTotals {
        total_excluding_vat,
        total_vat,
        total_including_vat: round_money(total_excluding_vat + total_vat),
    };

    tracing::trace!(
        lines = items.len(),
        net = %totals.total_excluding_vat,
        vat = %totals.total_vat,
        "aggregated invoice lines"
    );
    totals
}

/// Per-rate subtotals with the same per-line rounding as [`aggregate`],
/// ordered by ascending rate. The subtotals add up to `aggregate`'s totals.
pub fn aggregate_by_rate(items: &[VatLineItem]) -> Vec<RateSubtotal> {
    let mut groups: BTreeMap<VatRate, (Decimal, Decimal)> = BTreeMap::new();

    for item in items {
        let (excl, vat) = line_amounts(item);
        let entry = groups
            .entry(item.vat_rate)
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        entry.0 += excl;
        entry.1 += vat;
    }

    tracing::trace!(
        lines = items.len(),
        rates = groups.len(),
        "grouped invoice lines by rate"
    );

    groups
        .into_iter()
        .map(|(rate, (excl, vat))| RateSubtotal {
            rate,
            total_excluding_vat: round_money(excl),
            total_vat: round_money(vat),
        })
        .collect()
}
