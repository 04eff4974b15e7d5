//! Journal entries and their lines

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ledger::balance::{validate_balance, BalanceReport};
use crate::types::{FiscalError, FiscalResult};

/// Single line of a manual journal entry
///
/// In practice exactly one of `debit` and `credit` is non-zero per line;
/// [`JournalLine::validate`] enforces this, while the aggregate balance
/// check operates on whatever the caller supplies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Code of the account being posted to (e.g. "110-001")
    pub account_code: String,
    /// Debit amount, zero when the line is a credit
    pub debit: BigDecimal,
    /// Credit amount, zero when the line is a debit
    pub credit: BigDecimal,
    /// Optional description for this specific line
    pub description: Option<String>,
}

impl JournalLine {
    /// Create a new journal line
    pub fn new(
        account_code: impl Into<String>,
        debit: BigDecimal,
        credit: BigDecimal,
        description: Option<String>,
    ) -> Self {
        Self {
            account_code: account_code.into(),
            debit,
            credit,
            description,
        }
    }

    /// Create a debit line
    pub fn debit(account_code: impl Into<String>, amount: BigDecimal) -> Self {
        Self::new(account_code, amount, BigDecimal::from(0), None)
    }

    /// Create a credit line
    pub fn credit(account_code: impl Into<String>, amount: BigDecimal) -> Self {
        Self::new(account_code, BigDecimal::from(0), amount, None)
    }

    /// Validate that the line posts to exactly one side
    ///
    /// A line may not carry both a debit and a credit, and must carry one
    /// of the two.
    pub fn validate(&self) -> FiscalResult<()> {
        let zero = BigDecimal::from(0);

        if self.debit > zero && self.credit > zero {
            return Err(FiscalError::InvalidEntry(format!(
                "Line for account '{}' cannot have both a debit and a credit",
                self.account_code
            )));
        }

        if self.debit == zero && self.credit == zero {
            return Err(FiscalError::InvalidEntry(format!(
                "Line for account '{}' must have a debit or a credit amount",
                self.account_code
            )));
        }

        Ok(())
    }
}

/// Manual journal entry: header plus its debit/credit lines
///
/// The entry holds no derived balance state; the balance report is
/// recomputed from the full line set on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier for the entry
    pub id: Uuid,
    /// Date the entry is posted for
    pub date: NaiveDate,
    /// Description of the entry
    pub description: String,
    /// Optional reference (voucher number, source document)
    pub reference: Option<String>,
    /// Ordered debit/credit lines
    pub lines: Vec<JournalLine>,
}

impl JournalEntry {
    /// Create a new journal entry with no lines
    pub fn new(date: NaiveDate, description: impl Into<String>, reference: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            description: description.into(),
            reference,
            lines: Vec::new(),
        }
    }

    /// Add a line to the entry
    pub fn add_line(&mut self, line: JournalLine) {
        self.lines.push(line);
    }

    /// Total of all debit amounts
    pub fn total_debits(&self) -> BigDecimal {
        self.lines.iter().map(|line| &line.debit).sum()
    }

    /// Total of all credit amounts
    pub fn total_credits(&self) -> BigDecimal {
        self.lines.iter().map(|line| &line.credit).sum()
    }

    /// Recompute the balance report from the current lines
    pub fn balance_report(&self) -> BalanceReport {
        validate_balance(&self.lines)
    }

    /// Validate the entry as a submit gate
    ///
    /// Requires at least two lines, each posting to exactly one side, and
    /// the whole set balanced under the default tolerance.
    pub fn validate(&self) -> FiscalResult<()> {
        if self.lines.is_empty() {
            return Err(FiscalError::InvalidEntry(
                "Journal entry must have at least one line".to_string(),
            ));
        }

        if self.lines.len() < 2 {
            return Err(FiscalError::InvalidEntry(
                "Journal entry must have at least two lines for double-entry bookkeeping"
                    .to_string(),
            ));
        }

        for line in &self.lines {
            line.validate()?;
        }

        let report = self.balance_report();
        if !report.is_balanced {
            return Err(FiscalError::InvalidEntry(format!(
                "Journal entry is not balanced: debits = {}, credits = {}",
                report.total_debit, report.total_credit
            )));
        }

        Ok(())
    }
}

/// Builder for assembling journal entries line by line
#[derive(Debug)]
pub struct JournalEntryBuilder {
    entry: JournalEntry,
}

impl JournalEntryBuilder {
    /// Create a new builder
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            entry: JournalEntry::new(date, description, None),
        }
    }

    /// Set the reference for the entry
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.entry.reference = Some(reference.into());
        self
    }

    /// Add a debit line
    pub fn debit(mut self, account_code: impl Into<String>, amount: BigDecimal) -> Self {
        self.entry.add_line(JournalLine::debit(account_code, amount));
        self
    }

    /// Add a credit line
    pub fn credit(mut self, account_code: impl Into<String>, amount: BigDecimal) -> Self {
        self.entry.add_line(JournalLine::credit(account_code, amount));
        self
    }

    /// Add a custom line
    pub fn line(mut self, line: JournalLine) -> Self {
        self.entry.add_line(line);
        self
    }

    /// Validate and return the entry
    pub fn build(self) -> FiscalResult<JournalEntry> {
        self.entry.validate()?;
        Ok(self.entry)
    }
}
