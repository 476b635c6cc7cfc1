use rust_decimal::Decimal;

use crate::config::CompanyProfile;
use crate::core::money::{format_inr, round2, whole_rupees};
use crate::modules::billing::amount_in_words;
use crate::modules::documents::models::{
    BillTo, CompanyBlock, DocumentKind, DocumentRow, DocumentSource, DocumentView, EmailDraft,
    TotalsBlock,
};

/// Short item lists are padded with blank rows so printed documents keep
/// a uniform table height
const MIN_TABLE_ROWS: usize = 5;

/// Merge a document source with the company profile into a
/// print-ready view
pub fn assemble(source: &DocumentSource, company: &CompanyProfile) -> DocumentView {
    let rows = build_rows(source);
    let totals = build_totals(source);

    let words = format!(
        "{} Rupees Only",
        amount_in_words(whole_rupees(source.grand_total))
    );

    DocumentView {
        kind: source.kind,
        human_id: source.human_id.clone(),
        date: source.date,
        company: CompanyBlock::from(company),
        bill_to: BillTo {
            name: source.customer_name.clone(),
            address: non_blank(source.customer_address.as_deref()),
            gstin: non_blank(source.customer_gst.as_deref()),
            phone: non_blank(source.customer_phone.as_deref()),
        },
        rows,
        totals,
        amount_in_words: words,
        notes: non_blank(source.notes.as_deref()),
        signatory: company.name.clone(),
    }
}

/// Compose the email that accompanies a document.
///
/// A customer without a stored email yields an empty recipient rather
/// than an error; the caller decides whether that is sendable.
pub fn email_draft(source: &DocumentSource, company: &CompanyProfile) -> EmailDraft {
    let subject = format!(
        "{}: {} from {}",
        source.kind.label(),
        source.human_id,
        company.name
    );

    let attachment_line = match source.kind {
        DocumentKind::Invoice => format!("Please find attached the invoice {}.", source.human_id),
        DocumentKind::Quotation => {
            format!("Please find the details for quotation {}.", source.human_id)
        }
    };

    let body = format!(
        "Dear {},\n\n{}\nTotal Amount: {}\n\nRegards,\n{}",
        source.customer_name,
        attachment_line,
        format_inr(source.grand_total),
        company.name
    );

    EmailDraft {
        to: source.customer_email.clone().unwrap_or_default(),
        subject,
        body,
    }
}

fn build_rows(source: &DocumentSource) -> Vec<DocumentRow> {
    if source.rows.is_empty() {
        // A grand total entered without a breakdown still prints one row
        return vec![DocumentRow {
            sl_no: Some(1),
            description: "Total Bill Amount".to_string(),
            amount: Some(source.grand_total),
        }];
    }

    let mut rows: Vec<DocumentRow> = source
        .rows
        .iter()
        .map(|(sl_no, description, amount)| DocumentRow {
            sl_no: Some(*sl_no),
            description: description.clone(),
            amount: Some(*amount),
        })
        .collect();

    while rows.len() < MIN_TABLE_ROWS {
        rows.push(DocumentRow::filler());
    }

    rows
}

fn build_totals(source: &DocumentSource) -> TotalsBlock {
    let subtotal = if source.rows.is_empty() {
        if source.gst_applied {
            // Back out the pre-tax figure from the entered grand total
            let divisor = Decimal::ONE + source.gst_rate / Decimal::from(100);
            round2(source.grand_total / divisor)
        } else {
            source.grand_total
        }
    } else {
        source.rows.iter().map(|(_, _, amount)| *amount).sum()
    };

    let (gst_rate, gst_amount) = if source.gst_applied {
        (
            Some(source.gst_rate),
            Some(round2(source.grand_total - subtotal)),
        )
    } else {
        (None, None)
    };

    TotalsBlock {
        subtotal,
        gst_rate,
        gst_amount,
        grand_total: source.grand_total,
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
