use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary scale used throughout the application (rupees with paise)
pub const MONEY_SCALE: u32 = 2;

/// Rounds a monetary value to two decimal places
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp(MONEY_SCALE)
}

/// Parses a monetary value from free-form input.
///
/// Form fields arrive as strings and may be empty or non-numeric; a value
/// that cannot be parsed is treated as zero rather than an error, so
/// recalculation never fails mid-edit.
pub fn parse_money(input: &str) -> Decimal {
    input.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Rounds a total to a whole rupee amount, half away from zero.
///
/// Used as the input to the amount-in-words formatter. Negative values
/// clamp to zero; the formatter is defined for non-negative amounts only.
pub fn whole_rupees(amount: Decimal) -> u64 {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0)
}

/// Formats an amount for display with the rupee sign and two decimals
pub fn format_inr(amount: Decimal) -> String {
    format!("₹{:.2}", amount)
}
