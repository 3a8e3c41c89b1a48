//! `tellerkit-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no account business rules).

pub mod error;
pub mod money;

pub use error::{MoneyError, MoneyResult};
pub use money::Money;
