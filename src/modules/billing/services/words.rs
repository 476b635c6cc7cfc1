//! Indian-numbering amount-in-words formatter.
//!
//! Spells a whole rupee amount with crore/lakh/thousand/hundred units, as
//! printed on the invoice and quotation documents. Callers append
//! "Rupees Only".

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Converts a non-negative whole rupee amount into English words.
///
/// The number is decomposed on the fixed Indian pattern 2-2-2-1-2:
/// crore (10^7), lakh (10^5), thousand, hundred, then tens/units. Zero
/// groups are omitted; the final tens/units group is prefixed with "and"
/// only when an earlier group was emitted.
///
/// Amounts of a billion rupees or more are clipped to their first nine
/// digits. This is a known limitation carried over from the original
/// document renderer, not a business rule.
pub fn amount_in_words(amount: u64) -> String {
    let mut n = amount;
    let digits = n.to_string();
    if digits.len() > 9 {
        n = digits[..9].parse().unwrap_or(0);
    }

    if n == 0 {
        return "Zero".to_string();
    }

    let padded = format!("{:09}", n);
    let d: Vec<u32> = padded.chars().filter_map(|c| c.to_digit(10)).collect();

    let groups = [
        (d[0] * 10 + d[1], "Crore"),
        (d[2] * 10 + d[3], "Lakh"),
        (d[4] * 10 + d[5], "Thousand"),
        (d[6], "Hundred"),
    ];

    let mut out = String::new();
    for (value, unit) in groups {
        if value != 0 {
            out.push_str(&pair_words(value));
            out.push(' ');
            out.push_str(unit);
            out.push(' ');
        }
    }

    let last = d[7] * 10 + d[8];
    if last != 0 {
        if !out.is_empty() {
            out.push_str("and ");
        }
        out.push_str(&pair_words(last));
    }

    out.trim_end().to_string()
}

/// Spells a two-digit group: a table word for 1-19, otherwise the tens
/// word with the ones word appended when the units digit is non-zero.
fn pair_words(n: u32) -> String {
    if n < 20 {
        ONES[n as usize].to_string()
    } else {
        let ones = ONES[(n % 10) as usize];
        if ones.is_empty() {
            TENS[(n / 10) as usize].to_string()
        } else {
            format!("{} {}", TENS[(n / 10) as usize], ones)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(amount_in_words(0), "Zero");
    }

    #[test]
    fn test_teens_and_tens() {
        assert_eq!(amount_in_words(7), "Seven");
        assert_eq!(amount_in_words(14), "Fourteen");
        assert_eq!(amount_in_words(20), "Twenty");
        assert_eq!(amount_in_words(45), "Forty Five");
        assert_eq!(amount_in_words(99), "Ninety Nine");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(amount_in_words(100), "One Hundred");
        assert_eq!(amount_in_words(110), "One Hundred and Ten");
        assert_eq!(amount_in_words(999), "Nine Hundred and Ninety Nine");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(amount_in_words(1000), "One Thousand");
        assert_eq!(amount_in_words(1500), "One Thousand Five Hundred");
        assert_eq!(amount_in_words(1180), "One Thousand One Hundred and Eighty");
        assert_eq!(amount_in_words(99999), "Ninety Nine Thousand Nine Hundred and Ninety Nine");
    }

    #[test]
    fn test_lakh_and_crore() {
        assert_eq!(amount_in_words(100000), "One Lakh");
        assert_eq!(amount_in_words(10000000), "One Crore");
        assert_eq!(
            amount_in_words(12345678),
            "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred and Seventy Eight"
        );
    }

    #[test]
    fn test_nine_digit_clip() {
        // 10^9 keeps its first nine digits: 100000000 = ten crore
        assert_eq!(amount_in_words(1_000_000_000), "Ten Crore");
        assert_eq!(amount_in_words(999_999_999), amount_in_words(9_999_999_990));
    }
}
