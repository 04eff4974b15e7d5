//! Double-entry balance validation for journal entries

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::ledger::entry::JournalLine;

/// Default balance tolerance: one cent in the document's monetary unit
///
/// The tolerance is a parameter of [`validate_balance_with_tolerance`] so
/// currencies with a different minor-unit granularity can supply their own.
pub fn default_tolerance() -> BigDecimal {
    BigDecimal::from(1) / BigDecimal::from(100)
}

/// Outcome of a balance check over a set of journal lines
///
/// `is_balanced = false` is a normal computed result, not an error; the
/// caller blocks submission and surfaces `difference` as feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Sum of all debit amounts
    pub total_debit: BigDecimal,
    /// Sum of all credit amounts
    pub total_credit: BigDecimal,
    /// `total_debit − total_credit`
    pub difference: BigDecimal,
    /// Whether the lines balance within tolerance and are non-trivial
    pub is_balanced: bool,
}

/// Check whether a set of journal lines balances under the default one-cent
/// tolerance
pub fn validate_balance(lines: &[JournalLine]) -> BalanceReport {
    validate_balance_with_tolerance(lines, &default_tolerance())
}

/// Check whether a set of journal lines balances under a caller-supplied
/// tolerance
///
/// `is_balanced` requires `|total_debit − total_credit| < tolerance` and
/// `total_debit > 0`. The strict positivity guard rejects an all-zero line
/// set: an entry with no postings must not pass as balanced.
pub fn validate_balance_with_tolerance(
    lines: &[JournalLine],
    tolerance: &BigDecimal,
) -> BalanceReport {
    let total_debit: BigDecimal = lines.iter().map(|line| &line.debit).sum();
    let total_credit: BigDecimal = lines.iter().map(|line| &line.credit).sum();
    let difference = &total_debit - &total_credit;

    let is_balanced = difference.abs() < *tolerance && total_debit > BigDecimal::from(0);

    BalanceReport {
        total_debit,
        total_credit,
        difference,
        is_balanced,
    }
}
