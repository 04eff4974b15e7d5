//! Purchase document totals and statutory withholding ("retención")
//!
//! Withholding follows the DGI retention-agent rules: a designated agent
//! retains 50% of the tax billed by a local supplier and 100% of the tax on
//! payments to foreign suppliers. Retention is always a fraction of the
//! computed tax, never of the principal.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::SupplierType;

/// Single line of a purchase document
///
/// Purchase lines carry no discount field; `tax_rate` is a decimal fraction
/// in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseLineItem {
    /// Quantity purchased
    pub quantity: BigDecimal,
    /// Unit price before tax
    pub unit_price: BigDecimal,
    /// Tax rate as a fraction (0.07 for 7%); 0 denotes an exempt line
    pub tax_rate: BigDecimal,
}

impl PurchaseLineItem {
    /// Create a new purchase line item
    pub fn new(quantity: BigDecimal, unit_price: BigDecimal, tax_rate: BigDecimal) -> Self {
        Self {
            quantity,
            unit_price,
            tax_rate,
        }
    }

    /// Line total before tax (`quantity × unit_price`)
    pub fn line_total(&self) -> BigDecimal {
        &self.quantity * &self.unit_price
    }
}

/// Document-level terms that drive the withholding computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTerms {
    /// Classification of the supplier
    pub supplier_type: SupplierType,
    /// Whether withholding applies to this document at all
    pub apply_retention: bool,
}

impl PurchaseTerms {
    /// Create purchase terms
    pub fn new(supplier_type: SupplierType, apply_retention: bool) -> Self {
        Self {
            supplier_type,
            apply_retention,
        }
    }

    /// Fraction of the document tax retained for this supplier class
    ///
    /// Local suppliers: 50% of the tax. Foreign suppliers: 100%.
    pub fn retention_fraction(&self) -> BigDecimal {
        match self.supplier_type {
            SupplierType::Local => BigDecimal::from(1) / BigDecimal::from(2),
            SupplierType::Foreign => BigDecimal::from(1),
        }
    }
}

/// Aggregate totals of a purchase document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseTotals {
    /// Sum of line totals before tax
    pub subtotal: BigDecimal,
    /// Total tax billed on the document
    pub total_tax: BigDecimal,
    /// Tax withheld from the supplier
    pub retention: BigDecimal,
    /// Invoice total: `subtotal + total_tax`
    pub total_invoice: BigDecimal,
    /// Amount actually paid out: `total_invoice − retention`
    pub payable: BigDecimal,
}

impl PurchaseTotals {
    /// All-zero totals, the result for an empty document
    pub fn zero() -> Self {
        Self {
            subtotal: BigDecimal::from(0),
            total_tax: BigDecimal::from(0),
            retention: BigDecimal::from(0),
            total_invoice: BigDecimal::from(0),
            payable: BigDecimal::from(0),
        }
    }
}

/// Compute the aggregate totals and withholding of a purchase document
///
/// Lines accumulate into `subtotal` and `total_tax` in one pass. Withholding
/// is evaluated once over the aggregate tax, not per line, so it is not
/// affected by per-line rounding: zero when retention is disabled or there
/// is no tax, otherwise `total_tax × retention_fraction` for the supplier
/// class. Inputs pass through arithmetically; negative quantities or prices
/// are a caller-side validation concern and are not clamped here.
pub fn compute_purchase_totals(
    items: &[PurchaseLineItem],
    terms: &PurchaseTerms,
) -> PurchaseTotals {
    let mut totals = PurchaseTotals::zero();

    for item in items {
        let line_total = item.line_total();
        totals.total_tax += &line_total * &item.tax_rate;
        totals.subtotal += line_total;
    }

    totals.total_invoice = &totals.subtotal + &totals.total_tax;

    if terms.apply_retention && totals.total_tax > BigDecimal::from(0) {
        totals.retention = &totals.total_tax * terms.retention_fraction();
    }

    totals.payable = &totals.total_invoice - &totals.retention;
    totals
}

/// Purchase document snapshot: header, terms, and line items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseDocument {
    /// Unique identifier for the document
    pub id: Uuid,
    /// Date the document was issued
    pub date: NaiveDate,
    /// Optional external reference (supplier invoice number)
    pub reference: Option<String>,
    /// Withholding terms for the document
    pub terms: PurchaseTerms,
    /// Ordered line items
    pub items: Vec<PurchaseLineItem>,
}

impl PurchaseDocument {
    /// Create a new purchase document with no lines
    pub fn new(date: NaiveDate, reference: Option<String>, terms: PurchaseTerms) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            reference,
            terms,
            items: Vec::new(),
        }
    }

    /// Add a line item to the document
    pub fn add_item(&mut self, item: PurchaseLineItem) {
        self.items.push(item);
    }

    /// Recompute the document totals from the current line items and terms
    pub fn totals(&self) -> PurchaseTotals {
        compute_purchase_totals(&self.items, &self.terms)
    }
}
