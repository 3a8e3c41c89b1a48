//! `tellerkit-accounts` — account variants and their business rules.
//!
//! The hierarchy is composition, not inheritance: a [`TrustAccount`] holds a
//! [`SavingsAccount`] which holds an [`Account`], and each variant delegates
//! explicitly to the behavior it keeps. The variant set is closed; callers
//! that need heterogeneous collections use [`AnyAccount`].

pub mod account;
pub mod any;
pub mod checking;
pub mod report;
pub mod savings;
pub mod trust;

pub use account::{Account, BankAccount};
pub use any::AnyAccount;
pub use checking::CheckingAccount;
pub use report::{print_accounts, write_summaries};
pub use savings::SavingsAccount;
pub use trust::TrustAccount;
