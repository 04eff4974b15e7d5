//! Integration tests for fiscal-core

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use fiscal_core::{
    compute_purchase_totals, compute_sales_totals, validate_balance, ItbmsCategory, JournalEntry,
    JournalEntryBuilder, JournalLine, PurchaseLineItem, PurchaseTerms, SalesDocument,
    SalesLineItem, SupplierType,
};

fn dec(s: &str) -> BigDecimal {
    s.parse().unwrap()
}

#[test]
fn test_sales_invoice_to_journal_entry_workflow() {
    // Capture a sales document as a user would, line by line
    let mut invoice = SalesDocument::new(
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
        Some("FAC-2024-0173".to_string()),
    );

    invoice.add_item(SalesLineItem::new(
        BigDecimal::from(2),
        BigDecimal::from(50),
        BigDecimal::from(0),
        ItbmsCategory::General.rate(),
    ));
    invoice.add_item(SalesLineItem::new(
        BigDecimal::from(10),
        dec("4.50"),
        dec("5.00"),
        BigDecimal::from(0),
    ));

    let totals = invoice.totals();
    assert_eq!(totals.subtotal_taxable, BigDecimal::from(100));
    assert_eq!(totals.subtotal_exempt, BigDecimal::from(40));
    assert_eq!(totals.total_discount, dec("5.00"));
    assert_eq!(totals.total_tax, BigDecimal::from(7));
    assert_eq!(totals.total_amount, BigDecimal::from(147));

    // Post the invoice: receivable against revenue and tax payable
    let entry = JournalEntryBuilder::new(invoice.date, "Sales invoice FAC-2024-0173")
        .debit("130-001", totals.total_amount.clone())
        .credit(
            "410-001",
            &totals.subtotal_taxable + &totals.subtotal_exempt,
        )
        .credit("210-003", totals.total_tax.clone())
        .build()
        .unwrap();

    let report = entry.balance_report();
    assert!(report.is_balanced);
    assert_eq!(report.total_debit, BigDecimal::from(147));
}

#[test]
fn test_purchase_retention_workflow_local_supplier() {
    let items = vec![PurchaseLineItem::new(
        BigDecimal::from(1),
        BigDecimal::from(1000),
        ItbmsCategory::General.rate(),
    )];
    let terms = PurchaseTerms::new(SupplierType::Local, true);

    let totals = compute_purchase_totals(&items, &terms);
    assert_eq!(totals.subtotal, BigDecimal::from(1000));
    assert_eq!(totals.total_tax, BigDecimal::from(70));
    assert_eq!(totals.retention, BigDecimal::from(35));
    assert_eq!(totals.total_invoice, BigDecimal::from(1070));
    assert_eq!(totals.payable, BigDecimal::from(1035));

    // Post the bill: expense and recoverable tax against the payable and
    // the retained tax owed to the authority
    let entry = JournalEntryBuilder::new(
        NaiveDate::from_ymd_opt(2024, 5, 12).unwrap(),
        "Supplier bill with retention",
    )
    .debit("610-001", totals.subtotal.clone())
    .debit("140-002", totals.total_tax.clone())
    .credit("210-001", totals.payable.clone())
    .credit("210-004", totals.retention.clone())
    .build()
    .unwrap();

    assert!(entry.balance_report().is_balanced);
}

#[test]
fn test_foreign_supplier_pays_only_the_principal() {
    let items = vec![
        PurchaseLineItem::new(BigDecimal::from(4), dec("212.50"), ItbmsCategory::General.rate()),
        PurchaseLineItem::new(BigDecimal::from(1), dec("150.00"), ItbmsCategory::General.rate()),
    ];
    let terms = PurchaseTerms::new(SupplierType::Foreign, true);

    let totals = compute_purchase_totals(&items, &terms);

    assert_eq!(totals.subtotal, dec("1000.00"));
    assert_eq!(totals.retention, totals.total_tax);
    assert_eq!(totals.payable, totals.subtotal);
}

#[test]
fn test_live_recompute_matches_submit_time_recompute() {
    // The engine is invoked on every edit and again at submit time; both
    // calls must agree because there is no hidden incremental state.
    let mut items = Vec::new();
    let mut live_totals = compute_sales_totals(&items);
    assert_eq!(live_totals.total_amount, BigDecimal::from(0));

    for i in 1..=5 {
        items.push(SalesLineItem::new(
            BigDecimal::from(i),
            dec("9.99"),
            BigDecimal::from(0),
            ItbmsCategory::General.rate(),
        ));
        live_totals = compute_sales_totals(&items);
    }

    let submit_totals = compute_sales_totals(&items);
    assert_eq!(live_totals, submit_totals);
    assert_eq!(
        submit_totals.total_amount,
        &submit_totals.subtotal_taxable + &submit_totals.subtotal_exempt + &submit_totals.total_tax
    );
}

#[test]
fn test_journal_entry_gate_blocks_one_cent_drift() {
    let lines = vec![
        JournalLine::debit("110-001", BigDecimal::from(100)),
        JournalLine::credit("410-001", dec("99.99")),
    ];

    let report = validate_balance(&lines);
    assert_eq!(report.difference, dec("0.01"));
    assert!(!report.is_balanced);

    let mut entry = JournalEntry::new(
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        "Drifted entry",
        None,
    );
    for line in lines {
        entry.add_line(line);
    }
    assert!(entry.validate().is_err());
}

#[test]
fn test_document_serialization_round_trip() {
    let mut invoice = SalesDocument::new(
        NaiveDate::from_ymd_opt(2024, 8, 20).unwrap(),
        Some("FAC-2024-0500".to_string()),
    );
    invoice.add_item(SalesLineItem::new(
        dec("2.5"),
        dec("19.99"),
        dec("1.50"),
        dec("0.07"),
    ));

    let json = serde_json::to_string(&invoice).unwrap();
    let restored: SalesDocument = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, invoice);
    assert_eq!(restored.totals(), invoice.totals());
}
