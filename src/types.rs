//! Core types shared across the fiscal computation modules

use serde::{Deserialize, Serialize};

/// Classification of a supplier for statutory withholding purposes
///
/// The withholding percentage applied to a purchase document depends on
/// whether the counterparty is a local or a foreign supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplierType {
    /// Supplier domiciled in the local jurisdiction
    Local,
    /// Supplier domiciled abroad (payments to the exterior)
    Foreign,
}

/// Errors that can occur in the fiscal engine
///
/// The totals calculators and the balance validator are infallible; these
/// errors come from the caller-side validation helpers and submit gates.
#[derive(Debug, thiserror::Error)]
pub enum FiscalError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invalid journal entry: {0}")]
    InvalidEntry(String),
    #[error("Invalid fiscal id: {0}")]
    InvalidFiscalId(String),
}

/// Result type for fiscal operations
pub type FiscalResult<T> = Result<T, FiscalError>;
