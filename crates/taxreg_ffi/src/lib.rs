//! Presentation-layer boundary for the taxpayer registry.
//!
//! Exposes `get_tax_payers`, `add_tax_payer` and `search_tax_payer` as
//! flutter_rust_bridge sync calls.

pub mod api;
