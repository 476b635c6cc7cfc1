use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use rewindery::billing::calculator::{self, DocumentTotals};
use rewindery::core::money::{parse_money, round2};

#[test]
fn test_line_amount() {
    assert_eq!(calculator::line_amount(dec!(2), dec!(500)), dec!(1000));
    assert_eq!(calculator::line_amount(dec!(1.5), dec!(100)), dec!(150));
}

#[test]
fn test_workshop_scenario() {
    // One line of quantity 2 at rate 500 with 18% GST
    let amount = calculator::line_amount(dec!(2), dec!(500));
    let totals = calculator::document_totals([amount], true, dec!(18));

    assert_eq!(totals.subtotal, dec!(1000));
    assert_eq!(totals.gst_amount, dec!(180.00));
    assert_eq!(totals.total, dec!(1180.00));
}

#[test]
fn test_totals_without_gst() {
    let totals = calculator::document_totals([dec!(600), dec!(400)], false, dec!(18));

    assert_eq!(totals.subtotal, dec!(1000));
    assert_eq!(totals.gst_amount, Decimal::ZERO);
    assert_eq!(totals.total, dec!(1000));
}

#[test]
fn test_zero_rate_adds_nothing() {
    let totals = calculator::document_totals([dec!(750)], true, Decimal::ZERO);
    assert_eq!(totals.total, dec!(750));
}

#[test]
fn test_empty_amounts() {
    let totals = calculator::document_totals(std::iter::empty(), true, dec!(18));
    assert_eq!(
        totals,
        DocumentTotals {
            subtotal: Decimal::ZERO,
            gst_amount: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    );
}

#[test]
fn test_negative_amounts_propagate() {
    // The calculator is arithmetic only; rejection happens at the API
    let totals = calculator::document_totals([dec!(-100)], true, dec!(18));
    assert_eq!(totals.subtotal, dec!(-100));
    assert_eq!(totals.total, dec!(-118.00));
}

#[test]
fn test_gst_amount_rounds_to_paise() {
    // 333.33 * 18% = 59.9994
    let totals = calculator::document_totals([dec!(333.33)], true, dec!(18));
    assert_eq!(totals.gst_amount, dec!(60.00));
}

#[test]
fn test_parse_money_is_lenient() {
    assert_eq!(parse_money("123.45"), dec!(123.45));
    assert_eq!(parse_money("garbage"), Decimal::ZERO);
    assert_eq!(parse_money(""), Decimal::ZERO);
}

proptest! {
    #[test]
    fn prop_totals_are_consistent(
        amounts in prop::collection::vec(0i64..1_000_000, 0..20),
        rate in 0u32..40,
    ) {
        let amounts: Vec<Decimal> = amounts.into_iter().map(Decimal::from).collect();
        let rate = Decimal::from(rate);

        let totals = calculator::document_totals(amounts.clone(), true, rate);
        prop_assert_eq!(totals.total, totals.subtotal + totals.gst_amount);

        let expected_subtotal: Decimal = amounts.iter().copied().sum();
        prop_assert_eq!(totals.subtotal, expected_subtotal);
    }

    #[test]
    fn prop_no_gst_means_total_equals_subtotal(
        amounts in prop::collection::vec(0i64..1_000_000, 0..20),
    ) {
        let amounts: Vec<Decimal> = amounts.into_iter().map(Decimal::from).collect();
        let totals = calculator::document_totals(amounts, false, dec!(18));
        prop_assert_eq!(totals.total, totals.subtotal);
    }

    #[test]
    fn prop_round2_has_at_most_two_decimals(cents in -1_000_000_000i64..1_000_000_000) {
        let value = Decimal::new(cents, 4);
        prop_assert!(round2(value).scale() <= 2);
    }
}
