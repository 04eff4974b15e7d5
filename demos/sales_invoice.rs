//! Sales document totals examples

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use fiscal_core::{compute_sales_totals, round_to_cents, ItbmsCategory, SalesDocument, SalesLineItem};

fn main() {
    println!("🧾 Fiscal Core - Sales Totals Examples\n");

    // 1. Statutory ITBMS rate categories
    println!("📊 ITBMS Rate Categories:");
    let categories = [
        (ItbmsCategory::Exempt, "Exempt goods and services"),
        (ItbmsCategory::General, "General rate"),
        (ItbmsCategory::SelectedServices, "Alcohol and lodging"),
        (ItbmsCategory::Tobacco, "Tobacco products"),
    ];
    for (category, description) in categories.iter() {
        println!("  {:?}: {} - {}", category, category.rate(), description);
    }
    println!();

    // 2. A mixed invoice: taxable, exempt, and discounted lines
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
        "4.50".parse().unwrap(),
        "5.00".parse().unwrap(),
        BigDecimal::from(0),
    ));

    let totals = invoice.totals();
    println!("🏷️  Invoice {}:", invoice.reference.as_deref().unwrap_or("-"));
    println!("  Taxable subtotal: B/.{}", round_to_cents(&totals.subtotal_taxable));
    println!("  Exempt subtotal:  B/.{}", round_to_cents(&totals.subtotal_exempt));
    println!("  Discount granted: B/.{}", round_to_cents(&totals.total_discount));
    println!("  ITBMS:            B/.{}", round_to_cents(&totals.total_tax));
    println!("  Total:            B/.{}", round_to_cents(&totals.total_amount));
    println!();

    // 3. Discount floor: a discount larger than the line never goes negative
    let clipped = compute_sales_totals(&[SalesLineItem::new(
        BigDecimal::from(1),
        BigDecimal::from(10),
        BigDecimal::from(15),
        ItbmsCategory::General.rate(),
    )]);
    println!("✂️  Over-discounted line (gross 10, discount 15):");
    println!("  Net contribution: B/.{}", clipped.subtotal_taxable);
    println!("  Discount granted: B/.{}", clipped.total_discount);
}
