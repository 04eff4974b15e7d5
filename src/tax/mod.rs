//! Tax module containing the ITBMS rate table and rounding helpers

pub mod itbms;

pub use itbms::*;
