//! Sales document totals: taxable/exempt split, discount, and ITBMS tax

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Single line of a sales document
///
/// `tax_rate` is a decimal fraction in `[0, 1]` (0.07 for 7%); a rate of
/// zero marks the line as tax-exempt. `discount` is a monetary amount
/// applied to the line before tax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesLineItem {
    /// Quantity sold
    pub quantity: BigDecimal,
    /// Unit price before tax
    pub unit_price: BigDecimal,
    /// Commercial discount on the line, reduces the taxable base
    pub discount: BigDecimal,
    /// Tax rate as a fraction (0.07 for 7%); 0 denotes an exempt line
    pub tax_rate: BigDecimal,
}

impl SalesLineItem {
    /// Create a new sales line item
    pub fn new(
        quantity: BigDecimal,
        unit_price: BigDecimal,
        discount: BigDecimal,
        tax_rate: BigDecimal,
    ) -> Self {
        Self {
            quantity,
            unit_price,
            discount,
            tax_rate,
        }
    }

    /// Gross amount of the line before discount (`quantity × unit_price`)
    pub fn gross(&self) -> BigDecimal {
        &self.quantity * &self.unit_price
    }

    /// Net amount of the line after discount, floored at zero
    ///
    /// A discount larger than the gross amount clips the net to zero; the
    /// excess is still reported as discount granted.
    pub fn net(&self) -> BigDecimal {
        let net = self.gross() - &self.discount;
        if net < BigDecimal::from(0) {
            BigDecimal::from(0)
        } else {
            net
        }
    }

    /// Whether the line carries tax
    pub fn is_taxable(&self) -> bool {
        self.tax_rate > BigDecimal::from(0)
    }
}

/// Aggregate totals of a sales document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTotals {
    /// Sum of line nets carrying a non-zero tax rate
    pub subtotal_taxable: BigDecimal,
    /// Sum of line nets with a zero tax rate
    pub subtotal_exempt: BigDecimal,
    /// Sum of all line discounts, including any clipped excess
    pub total_discount: BigDecimal,
    /// Total tax over the taxable nets
    pub total_tax: BigDecimal,
    /// `subtotal_taxable + subtotal_exempt + total_tax`
    pub total_amount: BigDecimal,
}

impl SalesTotals {
    /// All-zero totals, the result for an empty document
    pub fn zero() -> Self {
        Self {
            subtotal_taxable: BigDecimal::from(0),
            subtotal_exempt: BigDecimal::from(0),
            total_discount: BigDecimal::from(0),
            total_tax: BigDecimal::from(0),
            total_amount: BigDecimal::from(0),
        }
    }
}

/// Compute the aggregate totals of a sales document in a single pass
///
/// Per line: `gross = quantity × unit_price`, `net = max(0, gross − discount)`.
/// The discount accumulates in full even when the net floor clipped it.
/// Taxable nets (rate > 0) feed `subtotal_taxable` and `total_tax`; exempt
/// nets feed `subtotal_exempt`. The computation is pure: no rounding is
/// applied and the caller's line items are not modified.
pub fn compute_sales_totals(items: &[SalesLineItem]) -> SalesTotals {
    let mut totals = SalesTotals::zero();

    for item in items {
        let net = item.net();

        totals.total_discount += &item.discount;

        if item.is_taxable() {
            totals.total_tax += &net * &item.tax_rate;
            totals.subtotal_taxable += net;
        } else {
            totals.subtotal_exempt += net;
        }
    }

    totals.total_amount = &totals.subtotal_taxable + &totals.subtotal_exempt + &totals.total_tax;
    totals
}

/// Sales document snapshot: header plus its line items
///
/// The document owns no derived state; totals are recomputed wholesale from
/// the current line items on every call, never patched incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesDocument {
    /// Unique identifier for the document
    pub id: Uuid,
    /// Date the document was issued
    pub date: NaiveDate,
    /// Optional external reference (invoice number, order number)
    pub reference: Option<String>,
    /// Ordered line items
    pub items: Vec<SalesLineItem>,
}

impl SalesDocument {
    /// Create a new sales document with no lines
    pub fn new(date: NaiveDate, reference: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            reference,
            items: Vec::new(),
        }
    }

    /// Add a line item to the document
    pub fn add_item(&mut self, item: SalesLineItem) {
        self.items.push(item);
    }

    /// Recompute the document totals from the current line items
    pub fn totals(&self) -> SalesTotals {
        compute_sales_totals(&self.items)
    }
}
