#![cfg(feature = "vat")]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sporokul_core::vat::*;

fn rate(p: Decimal) -> VatRate {
    VatRate::new(p).unwrap()
}

fn line(excl: Decimal, r: VatRate) -> VatLineItem {
    VatLineItem::new(excl, r)
}

// ---------------------------------------------------------------------------
// Forward VAT
// ---------------------------------------------------------------------------

#[test]
fn hundred_at_twenty_percent() {
    assert_eq!(vat_amount(dec!(100), VatRate::STANDARD), dec!(20.00));
    assert_eq!(amount_including_vat(dec!(100), VatRate::STANDARD), dec!(120.00));
}

#[test]
fn half_cent_rounds_up() {
    assert_eq!(vat_amount(dec!(33.33), VatRate::STANDARD), dec!(6.67));
}

#[test]
fn ties_are_not_bankers_rounding() {
    // 0.125 would round to 0.12 under round-half-even
    assert_eq!(vat_amount(dec!(1.25), VatRate::REDUCED_10), dec!(0.13));
    assert_eq!(vat_amount(dec!(-1.25), VatRate::REDUCED_10), dec!(-0.13));
}

#[test]
fn exact_where_binary_floats_are_not() {
    // 1.005 is 1.00499999999999989… as f64
    assert_eq!(vat_amount(dec!(1.005), rate(dec!(100))), dec!(1.01));
    // 0.1 + 0.2 style inputs
    assert_eq!(vat_amount(dec!(0.30), rate(dec!(50))), dec!(0.15));
}

#[test]
fn results_have_two_decimals() {
    assert_eq!(vat_amount(dec!(100), VatRate::STANDARD).to_string(), "20.00");
    assert_eq!(amount_including_vat(dec!(7), VatRate::ZERO).to_string(), "7.00");
    assert_eq!(vat_amount(dec!(-0.001), VatRate::STANDARD).to_string(), "0.00");
}

#[test]
fn one_percent_rate() {
    assert_eq!(vat_amount(dec!(149.50), VatRate::REDUCED_1), dec!(1.50));
    assert_eq!(amount_including_vat(dec!(149.50), VatRate::REDUCED_1), dec!(151.00));
}

#[test]
fn breakdown_fields_reconcile() {
    for (excl, r) in [
        (dec!(33.33), VatRate::STANDARD),
        (dec!(0.01), VatRate::STANDARD),
        (dec!(12345.678), VatRate::REDUCED_10),
        (dec!(-9.99), VatRate::REDUCED_1),
    ] {
        let b = vat_breakdown(excl, r);
        assert_eq!(b.amount_including_vat, b.amount_excluding_vat + b.vat_amount);
    }
}

#[test]
fn breakdown_passes_net_through() {
    let b = vat_breakdown(dec!(250), VatRate::STANDARD);
    assert_eq!(b.amount_excluding_vat, dec!(250.00));
    assert_eq!(b.vat_amount, dec!(50.00));
    assert_eq!(b.amount_including_vat, dec!(300.00));
}

// ---------------------------------------------------------------------------
// Reverse VAT
// ---------------------------------------------------------------------------

#[test]
fn reverse_hundred_twenty() {
    let r = reverse_vat(dec!(120), VatRate::STANDARD);
    assert_eq!(r.amount_excluding_vat, dec!(100.00));
    assert_eq!(r.vat_amount, dec!(20.00));
}

#[test]
fn reverse_reconciles_for_cent_amounts() {
    for incl in [dec!(0.01), dec!(1.00), dec!(99.99), dec!(1234.57), dec!(-50.05)] {
        for r in VatRate::STATUTORY {
            let rev = reverse_vat(incl, r);
            assert_eq!(rev.amount_excluding_vat + rev.vat_amount, incl, "{incl} @ {r}");
        }
    }
}

#[test]
fn reverse_drift_with_sub_cent_input() {
    // Net rounds up and the remainder rounds away from zero, so the parts
    // add up to one cent less than the rounded gross amount.
    let r = reverse_vat(dec!(100.005), VatRate::ZERO);
    assert_eq!(r.amount_excluding_vat, dec!(100.01));
    assert_eq!(r.vat_amount, dec!(-0.01));
    assert_ne!(r.amount_excluding_vat + r.vat_amount, round_money(dec!(100.005)));
}

#[test]
fn reverse_then_forward_round_trips() {
    // 10.00 / 1.2 = 8.333… → 8.33; forward 8.33 * 20% = 1.666 → 1.67
    let r = reverse_vat(dec!(10.00), VatRate::STANDARD);
    assert_eq!(r.amount_excluding_vat, dec!(8.33));
    assert_eq!(r.vat_amount, dec!(1.67));
    assert_eq!(amount_including_vat(r.amount_excluding_vat, VatRate::STANDARD), dec!(10.00));
}

#[test]
fn reverse_then_forward_can_overshoot() {
    // 0.05 / 1.1 = 0.0454… → 0.05, leaving no VAT; forward 0.05 * 10% = 0.005 → 0.01
    let r = reverse_vat(dec!(0.05), VatRate::REDUCED_10);
    assert_eq!(r.amount_excluding_vat, dec!(0.05));
    assert_eq!(r.vat_amount, dec!(0.00));
    assert_eq!(amount_including_vat(r.amount_excluding_vat, VatRate::REDUCED_10), dec!(0.06));
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

#[test]
fn aggregate_two_lines() {
    let items = [
        line(dec!(100), VatRate::STANDARD),
        line(dec!(50), VatRate::REDUCED_10),
    ];
    assert_eq!(vat_amount(dec!(100), VatRate::STANDARD), dec!(20.00));
    assert_eq!(vat_amount(dec!(50), VatRate::REDUCED_10), dec!(5.00));

    let t = aggregate(&items);
    assert_eq!(
        t,
        VatTotals {
            total_excluding_vat: dec!(150.00),
            total_vat: dec!(25.00),
            total_including_vat: dec!(175.00),
        }
    );
}

#[test]
fn per_line_rounding_differs_from_rounding_once() {
    // 40 lessons at 0.35 with 15% VAT: 0.0525 → 0.05 per line = 2.00,
    // but 14.00 * 15% = 2.10 on the total.
    let r = rate(dec!(15));
    let items = vec![line(dec!(0.35), r); 40];

    let t = aggregate(&items);
    assert_eq!(t.total_excluding_vat, dec!(14.00));
    assert_eq!(t.total_vat, dec!(2.00));
    assert_eq!(t.total_including_vat, dec!(16.00));

    let once = vat_amount(t.total_excluding_vat, r);
    assert_eq!(once, dec!(2.10));
    assert_ne!(t.total_vat, once);
}

#[test]
fn aggregate_by_rate_matches_totals() {
    let items: Vec<_> = (1..=30)
        .map(|i| {
            let r = VatRate::STATUTORY[i % 4];
            line(Decimal::new(i as i64 * 333, 3), r)
        })
        .collect();

    let totals = aggregate(&items);
    let groups = aggregate_by_rate(&items);
    assert_eq!(groups.len(), 4);

    let net: Decimal = groups.iter().map(|g| g.total_excluding_vat).sum();
    let vat: Decimal = groups.iter().map(|g| g.total_vat).sum();
    assert_eq!(net, totals.total_excluding_vat);
    assert_eq!(vat, totals.total_vat);
}

#[test]
fn aggregate_does_not_mutate_input() {
    let items = [line(dec!(10.005), VatRate::STANDARD)];
    let _ = aggregate(&items);
    assert_eq!(items[0].amount_excluding_vat, dec!(10.005));
}

#[test]
fn totals_json_shape() {
    let t = aggregate(&[line(dec!(100), VatRate::STANDARD)]);
    assert_eq!(
        serde_json::to_value(t).unwrap(),
        serde_json::json!({
            "totalExcludingVat": "100.00",
            "totalVat": "20.00",
            "totalIncludingVat": "120.00",
        })
    );
}

#[test]
fn line_items_from_request_body() {
    let body = r#"[
        {"amountExcludingVat": "100", "vatRate": "20"},
        {"amountExcludingVat": "50", "vatRate": "10"}
    ]"#;
    let items: Vec<VatLineItem> = serde_json::from_str(body).unwrap();
    assert_eq!(aggregate(&items).total_including_vat, dec!(175.00));
}

// ---------------------------------------------------------------------------
// Input boundary
// ---------------------------------------------------------------------------

#[test]
fn float_inputs_converted_exactly() {
    let excl = amount_from_f64(33.33).unwrap();
    let r = VatRate::from_f64(20.0).unwrap();
    assert_eq!(vat_amount(excl, r), dec!(6.67));
}

#[test]
fn non_finite_inputs_rejected() {
    assert_eq!(
        amount_from_f64(f64::INFINITY),
        Err(VatError::NonFiniteAmount(f64::INFINITY))
    );
    assert!(matches!(
        amount_from_f64(f64::NAN),
        Err(VatError::NonFiniteAmount(v)) if v.is_nan()
    ));
    assert!(VatRate::from_f64(f64::NEG_INFINITY).is_err());
}

#[test]
fn negative_rate_rejected() {
    assert_eq!(
        VatRate::from_f64(-20.0),
        Err(VatError::NegativeRate(dec!(-20)))
    );
}

#[test]
fn form_strings() {
    assert_eq!(parse_amount(" 1500.00 ").unwrap(), dec!(1500.00));
    assert!(parse_amount("").is_err());
    assert!(parse_amount("1.500,00").is_err());
    assert_eq!("1%".parse::<VatRate>().unwrap(), VatRate::REDUCED_1);
}

#[test]
fn largest_amount_goes_through_every_operation() {
    let max = parse_amount("1000000000000000").unwrap();
    assert_eq!(max, MAX_AMOUNT);

    assert_eq!(vat_amount(max, VatRate::STANDARD), dec!(200000000000000.00));
    assert_eq!(
        amount_including_vat(-max, VatRate::STANDARD),
        dec!(-1200000000000000.00)
    );
    assert_eq!(
        vat_amount(max, VatRate::MAX).to_string(),
        "10000000000000000.00"
    );

    let b = vat_breakdown(max, VatRate::STANDARD);
    assert_eq!(b.amount_including_vat.to_string(), "1200000000000000.00");

    let r = reverse_vat(max, VatRate::STANDARD);
    assert_eq!(r.amount_excluding_vat, dec!(833333333333333.33));
    assert_eq!(r.vat_amount, dec!(166666666666666.67));
}

#[test]
fn aggregate_of_largest_lines_stays_in_range() {
    let items = vec![line(MAX_AMOUNT, VatRate::MAX); 1000];
    let t = aggregate(&items);
    assert_eq!(t.total_excluding_vat.to_string(), "1000000000000000000.00");
    assert_eq!(t.total_vat.to_string(), "10000000000000000000.00");
    assert_eq!(t.total_including_vat.to_string(), "11000000000000000000.00");

    let by_rate = aggregate_by_rate(&items);
    assert_eq!(by_rate.len(), 1);
    assert_eq!(by_rate[0].total_vat, t.total_vat);
}

#[test]
fn one_cent_above_limit_rejected() {
    assert!(matches!(
        parse_amount("1000000000000000.01"),
        Err(VatError::InvalidAmount { .. })
    ));
    assert!(matches!(
        parse_amount("-1000000000000000.01"),
        Err(VatError::InvalidAmount { .. })
    ));
    assert!(matches!(
        amount_from_f64(1e16),
        Err(VatError::InvalidAmount { .. })
    ));
    assert!(matches!(
        check_amount(MAX_AMOUNT + dec!(0.01)),
        Err(VatError::InvalidAmount { .. })
    ));
    // Decimal::MAX, which the engine could not multiply by a rate
    assert!(parse_amount("79228162514264337593543950335").is_err());
    assert!(amount_from_f64(5e27).is_err());
}

#[test]
fn rate_above_max_rejected() {
    assert_eq!(VatRate::new(dec!(1000)).unwrap(), VatRate::MAX);
    assert_eq!(
        "1000.01%".parse::<VatRate>(),
        Err(VatError::RateTooHigh(dec!(1000.01)))
    );
}
