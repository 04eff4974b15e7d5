//! Ledger module containing journal entries and balance validation

pub mod balance;
pub mod entry;

pub use balance::*;
pub use entry::*;
