use proptest::prelude::*;
use rewindery::billing::amount_in_words;

#[test]
fn test_zero() {
    assert_eq!(amount_in_words(0), "Zero");
}

#[test]
fn test_units_and_teens() {
    assert_eq!(amount_in_words(1), "One");
    assert_eq!(amount_in_words(9), "Nine");
    assert_eq!(amount_in_words(14), "Fourteen");
    assert_eq!(amount_in_words(19), "Nineteen");
}

#[test]
fn test_tens() {
    assert_eq!(amount_in_words(20), "Twenty");
    assert_eq!(amount_in_words(45), "Forty Five");
    assert_eq!(amount_in_words(99), "Ninety Nine");
}

#[test]
fn test_hundreds() {
    assert_eq!(amount_in_words(100), "One Hundred");
    assert_eq!(amount_in_words(145), "One Hundred and Forty Five");
    assert_eq!(amount_in_words(900), "Nine Hundred");
}

#[test]
fn test_thousands() {
    assert_eq!(amount_in_words(1500), "One Thousand Five Hundred");
    assert_eq!(amount_in_words(1180), "One Thousand One Hundred and Eighty");
    assert_eq!(amount_in_words(99999), "Ninety Nine Thousand Nine Hundred and Ninety Nine");
}

#[test]
fn test_lakhs() {
    assert_eq!(amount_in_words(100000), "One Lakh");
    assert_eq!(amount_in_words(250000), "Two Lakh Fifty Thousand");
}

#[test]
fn test_crores() {
    assert_eq!(amount_in_words(10000000), "One Crore");
    assert_eq!(amount_in_words(1000000000), "Ten Crore");
}

#[test]
fn test_and_only_after_a_prior_segment() {
    // Bare final pair carries no "and"
    assert_eq!(amount_in_words(42), "Forty Two");
    // Any emitted segment before it does
    assert_eq!(amount_in_words(1042), "One Thousand and Forty Two");
}

#[test]
fn test_overflow_clips_to_first_nine_digits() {
    assert_eq!(amount_in_words(12345678901), amount_in_words(123456789));
}

proptest! {
    #[test]
    fn prop_never_empty(n in 0u64..10_000_000_000) {
        prop_assert!(!amount_in_words(n).is_empty());
    }

    #[test]
    fn prop_no_leading_or_trailing_whitespace(n in 0u64..10_000_000_000) {
        let words = amount_in_words(n);
        prop_assert_eq!(words.trim(), words.as_str());
        prop_assert!(!words.contains("  "));
    }

    #[test]
    fn prop_zero_word_is_reserved(n in 1u64..1_000_000_000) {
        prop_assert_ne!(amount_in_words(n), "Zero");
    }
}
