//! Party module containing fiscal-id validation

pub mod ruc;

pub use ruc::*;
