//! Caller-side input validation helpers
//!
//! The calculators themselves never reject input; the form or request layer
//! runs these checks before handing a snapshot to the engine.

use bigdecimal::BigDecimal;

use crate::document::{PurchaseLineItem, SalesLineItem};
use crate::types::{FiscalError, FiscalResult};

/// Validate that an amount is not negative
pub fn validate_non_negative(field: &str, amount: &BigDecimal) -> FiscalResult<()> {
    if *amount < BigDecimal::from(0) {
        Err(FiscalError::Validation(format!(
            "{} cannot be negative",
            field
        )))
    } else {
        Ok(())
    }
}

/// Validate that a tax rate is a fraction within `[0, 1]`
pub fn validate_tax_rate(rate: &BigDecimal) -> FiscalResult<()> {
    if *rate < BigDecimal::from(0) || *rate > BigDecimal::from(1) {
        return Err(FiscalError::Validation(format!(
            "Tax rate must be a fraction between 0 and 1, got {}",
            rate
        )));
    }
    Ok(())
}

/// Validate a sales line item before computing totals
pub fn validate_sales_line_item(item: &SalesLineItem) -> FiscalResult<()> {
    validate_non_negative("Quantity", &item.quantity)?;
    validate_non_negative("Unit price", &item.unit_price)?;
    validate_non_negative("Discount", &item.discount)?;
    validate_tax_rate(&item.tax_rate)
}

/// Validate a purchase line item before computing totals
pub fn validate_purchase_line_item(item: &PurchaseLineItem) -> FiscalResult<()> {
    validate_non_negative("Quantity", &item.quantity)?;
    validate_non_negative("Unit price", &item.unit_price)?;
    validate_tax_rate(&item.tax_rate)
}

/// Validate that an account code is well-formed
pub fn validate_account_code(code: &str) -> FiscalResult<()> {
    if code.trim().is_empty() {
        return Err(FiscalError::Validation(
            "Account code cannot be empty".to_string(),
        ));
    }

    if code.len() > 20 {
        return Err(FiscalError::Validation(
            "Account code cannot exceed 20 characters".to_string(),
        ));
    }

    if !code.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(FiscalError::Validation(
            "Account code can only contain alphanumeric characters and dashes".to_string(),
        ));
    }

    Ok(())
}
