use serde::{Deserialize, Serialize};

use tellerkit_core::Money;

use crate::account::{Account, BankAccount};
use crate::checking::CheckingAccount;
use crate::savings::SavingsAccount;
use crate::trust::TrustAccount;

/// Closed set of account variants.
///
/// Dispatch is a plain match, so adding a variant is a compile-time event for
/// every exhaustive caller. This stands in for open subclassing: the system
/// knows exactly four kinds of account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnyAccount {
    Base(Account),
    Savings(SavingsAccount),
    Checking(CheckingAccount),
    Trust(TrustAccount),
}

impl BankAccount for AnyAccount {
    fn name(&self) -> &str {
        match self {
            AnyAccount::Base(a) => a.name(),
            AnyAccount::Savings(a) => a.name(),
            AnyAccount::Checking(a) => a.name(),
            AnyAccount::Trust(a) => a.name(),
        }
    }

    fn balance(&self) -> Money {
        match self {
            AnyAccount::Base(a) => a.balance(),
            AnyAccount::Savings(a) => a.balance(),
            AnyAccount::Checking(a) => a.balance(),
            AnyAccount::Trust(a) => a.balance(),
        }
    }

    fn deposit(&mut self, amount: Money) -> bool {
        match self {
            AnyAccount::Base(a) => a.deposit(amount),
            AnyAccount::Savings(a) => a.deposit(amount),
            AnyAccount::Checking(a) => a.deposit(amount),
            AnyAccount::Trust(a) => a.deposit(amount),
        }
    }

    fn withdraw(&mut self, amount: Money) -> bool {
        match self {
            AnyAccount::Base(a) => a.withdraw(amount),
            AnyAccount::Savings(a) => a.withdraw(amount),
            AnyAccount::Checking(a) => a.withdraw(amount),
            AnyAccount::Trust(a) => a.withdraw(amount),
        }
    }
}

impl From<Account> for AnyAccount {
    fn from(account: Account) -> Self {
        AnyAccount::Base(account)
    }
}

impl From<SavingsAccount> for AnyAccount {
    fn from(account: SavingsAccount) -> Self {
        AnyAccount::Savings(account)
    }
}

impl From<CheckingAccount> for AnyAccount {
    fn from(account: CheckingAccount) -> Self {
        AnyAccount::Checking(account)
    }
}

impl From<TrustAccount> for AnyAccount {
    fn from(account: TrustAccount) -> Self {
        AnyAccount::Trust(account)
    }
}
