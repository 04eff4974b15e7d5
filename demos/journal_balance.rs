//! Journal entry balance validation examples

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use fiscal_core::{validate_balance, JournalEntryBuilder, JournalLine};

fn main() {
    println!("🧾 Fiscal Core - Ledger Balance Examples\n");

    // 1. A balanced manual entry assembled with the builder
    let entry = JournalEntryBuilder::new(
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        "Cash sale with ITBMS",
    )
    .reference("AS-0042")
    .debit("110-001", BigDecimal::from(107))
    .credit("410-001", BigDecimal::from(100))
    .credit("210-003", BigDecimal::from(7))
    .build()
    .expect("entry is balanced");

    let report = entry.balance_report();
    println!("✅ {}:", entry.description);
    println!("  Debits:     B/.{}", report.total_debit);
    println!("  Credits:    B/.{}", report.total_credit);
    println!("  Difference: B/.{}", report.difference);
    println!("  Balanced:   {}\n", report.is_balanced);

    // 2. One cent of drift is rejected at the default tolerance
    let drifted = vec![
        JournalLine::debit("110-001", BigDecimal::from(100)),
        JournalLine::credit("410-001", "99.99".parse().unwrap()),
    ];
    let report = validate_balance(&drifted);
    println!("❌ Drifted entry:");
    println!("  Out of balance by B/.{}", report.difference);
    println!("  Balanced: {}\n", report.is_balanced);

    // 3. An empty entry is vacuous, not balanced
    let report = validate_balance(&[]);
    println!("⚠️  Empty entry: balanced = {}", report.is_balanced);
}
