//! Command handlers for the `mapleshop` binary.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod favorites;
