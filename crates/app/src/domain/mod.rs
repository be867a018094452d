//! Storefront Domain Concerns

pub mod catalog;
pub mod checkout;
pub mod orders;
