use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use rewindery::modules::goods::models::IncomingGood;
use rewindery::modules::invoices::models::{InvoiceStatus, InvoiceSummary};
use rewindery::reports::aggregator;

fn invoice(
    id: i64,
    customer_name: &str,
    date: NaiveDate,
    status: InvoiceStatus,
    final_amount: Decimal,
) -> InvoiceSummary {
    InvoiceSummary {
        id,
        invoice_id: format!("INV-{:03}", id),
        customer: id,
        customer_name: customer_name.to_string(),
        date,
        status,
        final_amount,
        gst_applied: false,
        gst_rate: Decimal::ZERO,
        notes: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::days(id),
    }
}

fn good(id: i64, item_name: &str, price: Decimal) -> IncomingGood {
    IncomingGood {
        id,
        supplier: 1,
        supplier_name: "Copper Traders".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        item_name: item_name.to_string(),
        quantity: "10 kg".to_string(),
        price,
        created_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_empty_collections_yield_zeros() {
    assert_eq!(aggregator::pending_amount(&[]), Decimal::ZERO);
    assert_eq!(aggregator::total_revenue(&[]), Decimal::ZERO);
    assert_eq!(
        aggregator::monthly_growth_percent(&[], date(2024, 6, 15)),
        Decimal::ZERO
    );
    assert!(aggregator::top_outstanding(&[], 5).is_empty());
    assert!(aggregator::stock_distribution(&[], None).is_empty());
    assert!(aggregator::recent_invoices(&[], 5).is_empty());

    let months = aggregator::sales_by_month(&[]);
    assert_eq!(months.len(), 12);
    assert!(months.iter().all(|m| m.amount == Decimal::ZERO));
}

#[test]
fn test_pending_and_revenue_split_by_status() {
    let invoices = vec![
        invoice(1, "Asha", date(2024, 5, 1), InvoiceStatus::Paid, dec!(1000)),
        invoice(2, "Binod", date(2024, 5, 2), InvoiceStatus::Pending, dec!(500)),
        invoice(3, "Asha", date(2024, 5, 3), InvoiceStatus::Overdue, dec!(250)),
    ];

    // Overdue counts as pending money, not revenue
    assert_eq!(aggregator::pending_amount(&invoices), dec!(750));
    assert_eq!(aggregator::total_revenue(&invoices), dec!(1000));
}

#[test]
fn test_growth_against_previous_month() {
    let invoices = vec![
        invoice(1, "Asha", date(2024, 5, 10), InvoiceStatus::Paid, dec!(1000)),
        invoice(2, "Binod", date(2024, 6, 10), InvoiceStatus::Paid, dec!(1500)),
        // Unpaid and out-of-window entries are ignored
        invoice(3, "Asha", date(2024, 6, 11), InvoiceStatus::Pending, dec!(9999)),
        invoice(4, "Asha", date(2023, 6, 11), InvoiceStatus::Paid, dec!(9999)),
    ];

    assert_eq!(
        aggregator::monthly_growth_percent(&invoices, date(2024, 6, 20)),
        dec!(50.00)
    );
}

#[test]
fn test_growth_from_an_empty_previous_month() {
    let invoices = vec![invoice(
        1,
        "Asha",
        date(2024, 6, 10),
        InvoiceStatus::Paid,
        dec!(100),
    )];

    assert_eq!(
        aggregator::monthly_growth_percent(&invoices, date(2024, 6, 20)),
        Decimal::from(100)
    );
}

#[test]
fn test_growth_crosses_the_year_boundary() {
    let invoices = vec![
        invoice(1, "Asha", date(2023, 12, 20), InvoiceStatus::Paid, dec!(200)),
        invoice(2, "Binod", date(2024, 1, 5), InvoiceStatus::Paid, dec!(100)),
    ];

    assert_eq!(
        aggregator::monthly_growth_percent(&invoices, date(2024, 1, 15)),
        dec!(-50.00)
    );
}

#[test]
fn test_sales_by_month_conflates_years() {
    let invoices = vec![
        invoice(1, "Asha", date(2023, 3, 1), InvoiceStatus::Paid, dec!(100)),
        invoice(2, "Binod", date(2024, 3, 1), InvoiceStatus::Pending, dec!(200)),
        invoice(3, "Asha", date(2024, 7, 1), InvoiceStatus::Paid, dec!(50)),
    ];

    let months = aggregator::sales_by_month(&invoices);
    assert_eq!(months[2].month, "Mar");
    // Both March invoices land in the same bucket regardless of year
    assert_eq!(months[2].amount, dec!(300));
    assert_eq!(months[6].amount, dec!(50));
    assert_eq!(months[0].amount, Decimal::ZERO);
}

#[test]
fn test_top_outstanding_groups_and_caps() {
    let mut invoices = vec![
        invoice(1, "Asha", date(2024, 5, 1), InvoiceStatus::Pending, dec!(300)),
        invoice(2, "Asha", date(2024, 5, 2), InvoiceStatus::Overdue, dec!(200)),
        invoice(3, "Binod", date(2024, 5, 3), InvoiceStatus::Pending, dec!(400)),
        // Paid balances never appear
        invoice(4, "Chitra", date(2024, 5, 4), InvoiceStatus::Paid, dec!(9000)),
    ];
    for (i, name) in ["Dev", "Esha", "Farid", "Gita"].iter().enumerate() {
        invoices.push(invoice(
            5 + i as i64,
            name,
            date(2024, 5, 5),
            InvoiceStatus::Pending,
            Decimal::from(100 - i as i64 * 10),
        ));
    }

    let top = aggregator::top_outstanding(&invoices, 5);
    assert_eq!(top.len(), 5);
    assert_eq!(top[0].customer_name, "Asha");
    assert_eq!(top[0].amount, dec!(500));
    assert_eq!(top[1].customer_name, "Binod");
    // The smallest balance (Gita, 70) falls off the top five
    assert!(top.iter().all(|e| e.customer_name != "Gita"));
}

#[test]
fn test_stock_distribution_groups_sorts_and_colors() {
    let goods = vec![
        good(1, "Copper Wire", dec!(500)),
        good(2, "Bearings", dec!(900)),
        good(3, "Copper Wire", dec!(600)),
        good(4, "Varnish", dec!(100)),
    ];

    let slices = aggregator::stock_distribution(&goods, None);
    assert_eq!(slices.len(), 3);
    assert_eq!(slices[0].item_name, "Copper Wire");
    assert_eq!(slices[0].value, dec!(1100));
    assert_eq!(slices[1].item_name, "Bearings");
    assert_eq!(slices[2].item_name, "Varnish");

    // Colors follow rank in the fixed palette
    assert_eq!(slices[0].color, "#0088FE");
    assert_eq!(slices[1].color, "#00C49F");
}

#[test]
fn test_stock_distribution_cap_and_palette_cycle() {
    let goods: Vec<IncomingGood> = (0..8)
        .map(|i| {
            good(
                i,
                &format!("Item {}", i),
                Decimal::from(800 - i * 100),
            )
        })
        .collect();

    let capped = aggregator::stock_distribution(&goods, Some(6));
    assert_eq!(capped.len(), 6);

    let all = aggregator::stock_distribution(&goods, None);
    assert_eq!(all.len(), 8);
    // Seventh slice wraps back to the first palette color
    assert_eq!(all[6].color, all[0].color);
}

#[test]
fn test_recent_invoices_newest_first() {
    let invoices: Vec<InvoiceSummary> = (1..=7)
        .map(|i| {
            invoice(
                i,
                "Asha",
                date(2024, 4, i as u32),
                InvoiceStatus::Pending,
                dec!(100),
            )
        })
        .collect();

    let recent = aggregator::recent_invoices(&invoices, 5);
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].id, 7);
    assert_eq!(recent[4].id, 3);
}
