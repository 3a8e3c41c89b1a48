use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tellerkit_core::Money;

/// Shared capability of every account variant.
///
/// All domain failure is a boolean return: a deposit or withdrawal either
/// applies in full or leaves the balance untouched. There is no error object
/// and no partial mutation.
pub trait BankAccount {
    /// Immutable account identifier.
    fn name(&self) -> &str;

    /// Current balance.
    fn balance(&self) -> Money;

    /// Add `amount` to the balance.
    ///
    /// Returns `false` (no mutation) if `amount <= 0`.
    fn deposit(&mut self, amount: Money) -> bool;

    /// Remove `amount` from the balance.
    ///
    /// Returns `false` (no mutation) if `amount <= 0` or the balance cannot
    /// cover it. A successful withdrawal never leaves the balance negative.
    fn withdraw(&mut self, amount: Money) -> bool;

    /// One-line summary: `"<name>: Balance = <currency>"`.
    fn describe(&self) -> String {
        format!("{}: Balance = {}", self.name(), self.balance())
    }
}

/// Plain account: a name and a balance.
///
/// The balance field is private; it moves only through
/// [`BankAccount::deposit`], [`BankAccount::withdraw`] and the
/// crate-internal credit path used for interest and bonuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    name: String,
    balance: Money,
    opened_at: DateTime<Utc>,
}

impl Account {
    /// Opening balances are taken as-is; validating them is the caller's
    /// concern.
    pub fn new(name: impl Into<String>, opening_balance: Money) -> Self {
        Self {
            name: name.into(),
            balance: opening_balance,
            opened_at: Utc::now(),
        }
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Credit that bypasses the deposit sign check. Reserved for
    /// rule-generated amounts (interest, bonuses) inside this crate.
    pub(crate) fn credit(&mut self, amount: Money) {
        self.balance += amount;
    }
}

impl BankAccount for Account {
    fn name(&self) -> &str {
        &self.name
    }

    fn balance(&self) -> Money {
        self.balance
    }

    fn deposit(&mut self, amount: Money) -> bool {
        if amount <= Money::ZERO {
            return false;
        }
        self.balance += amount;
        true
    }

    fn withdraw(&mut self, amount: Money) -> bool {
        if amount <= Money::ZERO || amount > self.balance {
            return false;
        }
        self.balance -= amount;
        true
    }
}
