//! # Fiscal Core
//!
//! A fiscal document computation and ledger-balance engine: given the line
//! items of a sales or purchase document it derives taxable/exempt
//! subtotals, tax, discounts, and statutory withholding; given the lines of
//! a manual journal entry it checks the double-entry balance invariant.
//!
//! ## Features
//!
//! - **Sales totals**: taxable/exempt split, discount with a zero floor, ITBMS tax
//! - **Purchase totals**: subtotal, tax, and DGI withholding (50% local / 100% foreign)
//! - **Balance validation**: debit/credit totals with a configurable tolerance
//! - **ITBMS rate table**: statutory 0%, 7%, 10%, and 15% categories
//! - **RUC validation**: format check for Panamanian taxpayer ids
//!
//! All computations are pure: every call recomputes wholesale from a
//! caller-owned snapshot using exact decimals, with no I/O and no shared
//! state.
//!
//! ## Quick Start
//!
//! ```rust
//! use fiscal_core::{compute_sales_totals, SalesLineItem};
//! use bigdecimal::BigDecimal;
//!
//! let items = vec![SalesLineItem::new(
//!     BigDecimal::from(2),
//!     BigDecimal::from(50),
//!     BigDecimal::from(0),
//!     "0.07".parse().unwrap(),
//! )];
//!
//! let totals = compute_sales_totals(&items);
//! assert_eq!(totals.total_amount, BigDecimal::from(107));
//! ```

pub mod document;
pub mod ledger;
pub mod party;
pub mod tax;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use document::*;
pub use ledger::*;
pub use party::*;
pub use tax::*;
pub use types::*;
