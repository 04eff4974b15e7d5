//! Document totals calculators for sales and purchase documents

pub mod purchase;
pub mod sales;

pub use purchase::*;
pub use sales::*;
