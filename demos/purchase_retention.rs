//! Purchase withholding ("retención") examples

use bigdecimal::BigDecimal;
use fiscal_core::{
    compute_purchase_totals, round_to_cents, ItbmsCategory, PurchaseLineItem, PurchaseTerms,
    SupplierType,
};

fn print_totals(label: &str, totals: &fiscal_core::PurchaseTotals) {
    println!("{}", label);
    println!("  Subtotal:       B/.{}", round_to_cents(&totals.subtotal));
    println!("  ITBMS:          B/.{}", round_to_cents(&totals.total_tax));
    println!("  Retained:       B/.{}", round_to_cents(&totals.retention));
    println!("  Invoice total:  B/.{}", round_to_cents(&totals.total_invoice));
    println!("  Payable:        B/.{}", round_to_cents(&totals.payable));
    println!();
}

fn main() {
    println!("🧾 Fiscal Core - Purchase Withholding Examples\n");

    let items = vec![PurchaseLineItem::new(
        BigDecimal::from(1),
        BigDecimal::from(1000),
        ItbmsCategory::General.rate(),
    )];

    // Local supplier: the retention agent keeps 50% of the tax
    let local = compute_purchase_totals(&items, &PurchaseTerms::new(SupplierType::Local, true));
    print_totals("🏢 Local supplier, retention on:", &local);

    // Foreign supplier: payments to the exterior retain 100% of the tax
    let foreign = compute_purchase_totals(&items, &PurchaseTerms::new(SupplierType::Foreign, true));
    print_totals("🌍 Foreign supplier, retention on:", &foreign);

    // Retention disabled: the full invoice is paid out
    let plain = compute_purchase_totals(&items, &PurchaseTerms::new(SupplierType::Local, false));
    print_totals("🚫 Retention disabled:", &plain);
}
