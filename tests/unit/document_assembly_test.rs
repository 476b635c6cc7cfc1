use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use rewindery::config::CompanyProfile;
use rewindery::documents::models::{DocumentKind, DocumentSource};
use rewindery::documents::assembler;

fn source(kind: DocumentKind, rows: Vec<(u32, String, Decimal)>) -> DocumentSource {
    let grand_total = {
        let subtotal: Decimal = rows.iter().map(|(_, _, amount)| *amount).sum();
        subtotal
    };
    DocumentSource {
        kind,
        human_id: match kind {
            DocumentKind::Invoice => "INV-042".to_string(),
            DocumentKind::Quotation => "QTN-042".to_string(),
        },
        date: NaiveDate::from_ymd_opt(2024, 4, 12).unwrap(),
        customer_name: "Asha Electricals".to_string(),
        customer_address: Some("14 Market Road".to_string()),
        customer_gst: None,
        customer_phone: Some("  ".to_string()),
        customer_email: Some("asha@example.com".to_string()),
        gst_applied: false,
        gst_rate: Decimal::ZERO,
        grand_total,
        notes: None,
        rows,
    }
}

fn row(sl_no: u32, description: &str, amount: Decimal) -> (u32, String, Decimal) {
    (sl_no, description.to_string(), amount)
}

fn company() -> CompanyProfile {
    CompanyProfile::fallback()
}

#[test]
fn test_short_item_lists_pad_to_five_rows() {
    let source = source(
        DocumentKind::Invoice,
        vec![row(1, "Rewinding", dec!(800)), row(2, "Bearings", dec!(200))],
    );

    let view = assembler::assemble(&source, &company());

    assert_eq!(view.rows.len(), 5);
    assert_eq!(view.rows[0].description, "Rewinding");
    assert!(view.rows[2].is_filler());
    assert!(view.rows[4].is_filler());
}

#[test]
fn test_long_item_lists_are_not_padded() {
    let rows = (1..=6)
        .map(|i| row(i, &format!("Job {}", i), dec!(100)))
        .collect();
    let view = assembler::assemble(&source(DocumentKind::Invoice, rows), &company());

    assert_eq!(view.rows.len(), 6);
    assert!(view.rows.iter().all(|r| !r.is_filler()));
}

#[test]
fn test_itemless_invoice_renders_a_synthetic_row() {
    let mut source = source(DocumentKind::Invoice, vec![]);
    source.grand_total = dec!(2500);

    let view = assembler::assemble(&source, &company());

    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].description, "Total Bill Amount");
    assert_eq!(view.rows[0].sl_no, Some(1));
    assert_eq!(view.rows[0].amount, Some(dec!(2500)));
    assert_eq!(view.totals.subtotal, dec!(2500));
}

#[test]
fn test_itemless_with_gst_backs_out_the_subtotal() {
    let mut source = source(DocumentKind::Invoice, vec![]);
    source.gst_applied = true;
    source.gst_rate = dec!(18);
    source.grand_total = dec!(1180);

    let view = assembler::assemble(&source, &company());

    assert_eq!(view.totals.subtotal, dec!(1000.00));
    assert_eq!(view.totals.gst_amount, Some(dec!(180.00)));
    assert_eq!(view.totals.grand_total, dec!(1180));
}

#[test]
fn test_totals_with_gst_from_items() {
    let mut source = source(
        DocumentKind::Quotation,
        vec![row(1, "Rewinding", dec!(600)), row(2, "Varnish", dec!(400))],
    );
    source.gst_applied = true;
    source.gst_rate = dec!(18);
    source.grand_total = dec!(1180);

    let view = assembler::assemble(&source, &company());

    assert_eq!(view.totals.subtotal, dec!(1000));
    assert_eq!(view.totals.gst_rate, Some(dec!(18)));
    assert_eq!(view.totals.gst_amount, Some(dec!(180.00)));
}

#[test]
fn test_gst_lines_absent_when_not_applied() {
    let view = assembler::assemble(
        &source(DocumentKind::Invoice, vec![row(1, "Rewinding", dec!(500))]),
        &company(),
    );

    assert_eq!(view.totals.gst_rate, None);
    assert_eq!(view.totals.gst_amount, None);
}

#[test]
fn test_blank_contact_fields_are_omitted() {
    let view = assembler::assemble(
        &source(DocumentKind::Invoice, vec![row(1, "Rewinding", dec!(500))]),
        &company(),
    );

    assert_eq!(view.bill_to.name, "Asha Electricals");
    assert_eq!(view.bill_to.address.as_deref(), Some("14 Market Road"));
    // Missing GSTIN and whitespace-only phone both drop out
    assert_eq!(view.bill_to.gstin, None);
    assert_eq!(view.bill_to.phone, None);
}

#[test]
fn test_amount_in_words_line() {
    let mut source = source(DocumentKind::Invoice, vec![]);
    source.grand_total = dec!(1180.40);

    let view = assembler::assemble(&source, &company());
    assert_eq!(
        view.amount_in_words,
        "One Thousand One Hundred and Eighty Rupees Only"
    );
}

#[test]
fn test_company_block_and_signatory() {
    let view = assembler::assemble(
        &source(DocumentKind::Invoice, vec![row(1, "Rewinding", dec!(500))]),
        &company(),
    );

    assert_eq!(view.company.name, "NiYo Motor Windings");
    assert_eq!(view.signatory, "NiYo Motor Windings");
}

#[test]
fn test_empty_notes_are_omitted() {
    let mut with_blank = source(DocumentKind::Invoice, vec![row(1, "Rewinding", dec!(500))]);
    with_blank.notes = Some("   ".to_string());

    let view = assembler::assemble(&with_blank, &company());
    assert_eq!(view.notes, None);
}

#[test]
fn test_invoice_email_draft_wording() {
    let mut source = source(DocumentKind::Invoice, vec![row(1, "Rewinding", dec!(500))]);
    source.grand_total = dec!(590);

    let draft = assembler::email_draft(&source, &company());

    assert_eq!(draft.to, "asha@example.com");
    assert_eq!(draft.subject, "Invoice: INV-042 from NiYo Motor Windings");
    assert_eq!(
        draft.body,
        "Dear Asha Electricals,\n\nPlease find attached the invoice INV-042.\nTotal Amount: ₹590.00\n\nRegards,\nNiYo Motor Windings"
    );
}

#[test]
fn test_quotation_email_draft_wording() {
    let mut source = source(DocumentKind::Quotation, vec![row(1, "Rewinding", dec!(500))]);
    source.grand_total = dec!(500);

    let draft = assembler::email_draft(&source, &company());

    assert_eq!(draft.subject, "Quotation: QTN-042 from NiYo Motor Windings");
    assert!(draft
        .body
        .contains("Please find the details for quotation QTN-042."));
}

#[test]
fn test_missing_customer_email_yields_empty_recipient() {
    let mut source = source(DocumentKind::Invoice, vec![row(1, "Rewinding", dec!(500))]);
    source.customer_email = None;

    let draft = assembler::email_draft(&source, &company());
    assert_eq!(draft.to, "");
}
