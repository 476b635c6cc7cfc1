use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::core::money::round2;
use crate::modules::goods::models::IncomingGood;
use crate::modules::invoices::models::{InvoiceStatus, InvoiceSummary};
use crate::modules::reports::models::{MonthlySales, OutstandingEntry, StockSlice};

/// Chart palette; slices beyond the sixth cycle back to the start
const PALETTE: [&str; 6] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8", "#82CA9D",
];

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Sum of unpaid invoice totals (pending or overdue)
pub fn pending_amount(invoices: &[InvoiceSummary]) -> Decimal {
    invoices
        .iter()
        .filter(|i| matches!(i.status, InvoiceStatus::Pending | InvoiceStatus::Overdue))
        .map(|i| i.final_amount)
        .sum()
}

/// Sum of paid invoice totals
pub fn total_revenue(invoices: &[InvoiceSummary]) -> Decimal {
    invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Paid)
        .map(|i| i.final_amount)
        .sum()
}

/// Paid revenue of the month containing `today` compared with the
/// immediately preceding calendar month, as a percentage.
///
/// A previous month of zero with current sales reads as 100% growth;
/// two empty months read as 0%.
pub fn monthly_growth_percent(invoices: &[InvoiceSummary], today: NaiveDate) -> Decimal {
    let (cur_month, cur_year) = (today.month(), today.year());
    let (prev_month, prev_year) = if cur_month == 1 {
        (12, cur_year - 1)
    } else {
        (cur_month - 1, cur_year)
    };

    let paid_in = |month: u32, year: i32| -> Decimal {
        invoices
            .iter()
            .filter(|i| {
                i.status == InvoiceStatus::Paid
                    && i.date.month() == month
                    && i.date.year() == year
            })
            .map(|i| i.final_amount)
            .sum()
    };

    let current = paid_in(cur_month, cur_year);
    let previous = paid_in(prev_month, prev_year);

    if previous == Decimal::ZERO {
        if current > Decimal::ZERO {
            Decimal::from(100)
        } else {
            Decimal::ZERO
        }
    } else {
        round2((current - previous) / previous * Decimal::from(100))
    }
}

/// Fixed January to December series over every invoice's total,
/// bucketed by month of year regardless of the year
pub fn sales_by_month(invoices: &[InvoiceSummary]) -> Vec<MonthlySales> {
    let mut buckets = [Decimal::ZERO; 12];
    for invoice in invoices {
        buckets[invoice.date.month0() as usize] += invoice.final_amount;
    }

    MONTH_LABELS
        .iter()
        .zip(buckets)
        .map(|(label, amount)| MonthlySales {
            month: (*label).to_string(),
            amount,
        })
        .collect()
}

/// Unpaid balances grouped by customer, largest first, top `n`
pub fn top_outstanding(invoices: &[InvoiceSummary], n: usize) -> Vec<OutstandingEntry> {
    let mut by_customer: HashMap<&str, Decimal> = HashMap::new();
    for invoice in invoices {
        if matches!(
            invoice.status,
            InvoiceStatus::Pending | InvoiceStatus::Overdue
        ) {
            *by_customer.entry(invoice.customer_name.as_str()).or_default() +=
                invoice.final_amount;
        }
    }

    let mut entries: Vec<OutstandingEntry> = by_customer
        .into_iter()
        .map(|(customer_name, amount)| OutstandingEntry {
            customer_name: customer_name.to_string(),
            amount,
        })
        .collect();

    entries.sort_by(|a, b| b.amount.cmp(&a.amount).then(a.customer_name.cmp(&b.customer_name)));
    entries.truncate(n);
    entries
}

/// Stock value grouped by item name, largest first, optionally capped,
/// each slice colored by its rank in the fixed palette
pub fn stock_distribution(goods: &[IncomingGood], limit: Option<usize>) -> Vec<StockSlice> {
    let mut by_item: HashMap<&str, Decimal> = HashMap::new();
    for good in goods {
        *by_item.entry(good.item_name.as_str()).or_default() += good.price;
    }

    let mut slices: Vec<(String, Decimal)> = by_item
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();

    slices.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    if let Some(limit) = limit {
        slices.truncate(limit);
    }

    slices
        .into_iter()
        .enumerate()
        .map(|(rank, (item_name, value))| StockSlice {
            item_name,
            value,
            color: PALETTE[rank % PALETTE.len()].to_string(),
        })
        .collect()
}

/// Most recently created invoices, top `n`
pub fn recent_invoices(invoices: &[InvoiceSummary], n: usize) -> Vec<InvoiceSummary> {
    let mut sorted = invoices.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.date.cmp(&a.date)));
    sorted.truncate(n);
    sorted
}
