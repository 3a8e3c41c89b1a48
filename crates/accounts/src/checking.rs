use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use tellerkit_core::Money;

use crate::account::{Account, BankAccount};

/// Checking account: every withdrawal carries a flat fee on top of the
/// requested amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckingAccount {
    inner: Account,
}

impl CheckingAccount {
    /// Flat per-withdrawal fee, charged all-or-nothing together with the
    /// requested amount. Not tracked or reported separately.
    pub const WITHDRAWAL_FEE: Money = Money::new(dec!(1.50));

    pub fn new(name: impl Into<String>, opening_balance: Money) -> Self {
        Self {
            inner: Account::new(name, opening_balance),
        }
    }
}

impl BankAccount for CheckingAccount {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn balance(&self) -> Money {
        self.inner.balance()
    }

    fn deposit(&mut self, amount: Money) -> bool {
        self.inner.deposit(amount)
    }

    /// The base check sees `amount + fee`, so a balance that covers the
    /// amount but not the fee fails the whole withdrawal.
    ///
    /// The sign is checked before the fee is added; otherwise a non-positive
    /// request could smuggle a fee-only deduction past the base check.
    fn withdraw(&mut self, amount: Money) -> bool {
        if amount <= Money::ZERO {
            return false;
        }
        self.inner.withdraw(amount + Self::WITHDRAWAL_FEE)
    }
}
