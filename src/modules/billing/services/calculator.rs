use rust_decimal::Decimal;

use crate::core::money::round2;

/// Totals block for a quotation or invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentTotals {
    pub subtotal: Decimal,
    pub gst_amount: Decimal,
    pub total: Decimal,
}

/// Computes document totals from line-item amounts and a GST configuration.
///
/// Formulas:
/// - subtotal = Σ amount, summed in sequence order
/// - gst_amount = gst_applied ? round2(subtotal × gst_rate / 100) : 0
/// - total = subtotal + gst_amount
///
/// `gst_rate` is a percentage figure (18 means 18%). The calculation is
/// permissive: negative or zero inputs propagate arithmetically and never
/// fail. Validation of inputs belongs to the API boundary.
pub fn document_totals(
    amounts: impl IntoIterator<Item = Decimal>,
    gst_applied: bool,
    gst_rate: Decimal,
) -> DocumentTotals {
    let subtotal: Decimal = amounts.into_iter().sum();

    let gst_amount = if gst_applied {
        round2(subtotal * gst_rate / Decimal::from(100))
    } else {
        Decimal::ZERO
    };

    DocumentTotals {
        subtotal,
        gst_amount,
        total: subtotal + gst_amount,
    }
}

/// Per-item amount for invoice items: quantity × rate.
///
/// Callers feed already-coerced numbers (non-numeric form input becomes
/// zero upstream), so this never fails.
pub fn line_amount(quantity: Decimal, rate: Decimal) -> Decimal {
    quantity * rate
}

/// A line entry carrying a 1-based serial number
pub trait Sequenced {
    fn set_sl_no(&mut self, sl_no: u32);
}

/// Reassigns serial numbers so they are contiguous from 1.
///
/// Called after any insert or delete on a document's item list; the slice
/// order is the document order.
pub fn renumber<T: Sequenced>(items: &mut [T]) {
    for (idx, item) in items.iter_mut().enumerate() {
        item.set_sl_no(idx as u32 + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    struct Row(u32);

    impl Sequenced for Row {
        fn set_sl_no(&mut self, sl_no: u32) {
            self.0 = sl_no;
        }
    }

    #[test]
    fn test_totals_with_gst() {
        let totals = document_totals([dec!(1000)], true, dec!(18));
        assert_eq!(totals.subtotal, dec!(1000));
        assert_eq!(totals.gst_amount, dec!(180.00));
        assert_eq!(totals.total, dec!(1180.00));
    }

    #[test]
    fn test_totals_without_gst() {
        let totals = document_totals([dec!(450.50), dec!(49.50)], false, dec!(18));
        assert_eq!(totals.subtotal, dec!(500.00));
        assert_eq!(totals.gst_amount, Decimal::ZERO);
        assert_eq!(totals.total, dec!(500.00));
    }

    #[test]
    fn test_totals_empty_items() {
        let totals = document_totals([], true, dec!(18));
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_gst_rounding() {
        // 18% of 333.33 = 59.9994, rounds to the paise
        let totals = document_totals([dec!(333.33)], true, dec!(18));
        assert_eq!(totals.gst_amount, dec!(60.00));
        assert_eq!(totals.total, dec!(393.33));
    }

    #[test]
    fn test_negative_amounts_propagate() {
        // The calculator does not reject negatives, only propagates them
        let totals = document_totals([dec!(-100)], true, dec!(18));
        assert_eq!(totals.subtotal, dec!(-100));
        assert_eq!(totals.total, dec!(-118.00));
    }

    #[test]
    fn test_line_amount() {
        assert_eq!(line_amount(dec!(2), dec!(500)), dec!(1000));
        assert_eq!(line_amount(dec!(0), dec!(500)), Decimal::ZERO);
    }

    #[test]
    fn test_renumber_contiguous() {
        let mut rows = vec![Row(1), Row(3), Row(7)];
        renumber(&mut rows);
        let sl_nos: Vec<u32> = rows.iter().map(|r| r.0).collect();
        assert_eq!(sl_nos, vec![1, 2, 3]);
    }
}
