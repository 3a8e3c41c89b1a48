use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tellerkit_core::Money;

use crate::account::{Account, BankAccount};

/// Interest-bearing account: each deposit is credited with simple interest
/// on the deposited amount (not on the running balance).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsAccount {
    inner: Account,
    /// Percentage, expected non-negative (e.g. `5` for 5%).
    interest_rate: Decimal,
}

impl SavingsAccount {
    pub fn new(name: impl Into<String>, opening_balance: Money, interest_rate: Decimal) -> Self {
        Self {
            inner: Account::new(name, opening_balance),
            interest_rate,
        }
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    pub(crate) fn credit(&mut self, amount: Money) {
        self.inner.credit(amount);
    }
}

impl BankAccount for SavingsAccount {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn balance(&self) -> Money {
        self.inner.balance()
    }

    /// Base deposit first; only a successful deposit earns interest.
    fn deposit(&mut self, amount: Money) -> bool {
        if !self.inner.deposit(amount) {
            return false;
        }
        self.inner.credit(amount.percent(self.interest_rate));
        true
    }

    fn withdraw(&mut self, amount: Money) -> bool {
        self.inner.withdraw(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn deposit_credits_simple_interest() {
        let mut account = SavingsAccount::new("Alice", Money::new(dec!(2000)), dec!(5));
        assert!(account.deposit(Money::new(dec!(1000))));
        // 2000 + 1000 + 5% of 1000
        assert_eq!(account.balance(), Money::new(dec!(3050)));
    }

    #[test]
    fn failed_deposit_earns_no_interest() {
        let mut account = SavingsAccount::new("Alice", Money::new(dec!(2000)), dec!(5));
        assert!(!account.deposit(Money::new(dec!(-1000))));
        assert_eq!(account.balance(), Money::new(dec!(2000)));
    }

    #[test]
    fn zero_rate_behaves_like_plain_deposit() {
        let mut account = SavingsAccount::new("Alice", Money::new(dec!(100)), dec!(0));
        assert!(account.deposit(Money::new(dec!(50))));
        assert_eq!(account.balance(), Money::new(dec!(150)));
    }

    #[test]
    fn withdraw_is_plain_base_behavior() {
        let mut account = SavingsAccount::new("Alice", Money::new(dec!(1000)), dec!(5));
        assert!(account.withdraw(Money::new(dec!(400))));
        assert!(!account.withdraw(Money::new(dec!(601))));
        assert_eq!(account.balance(), Money::new(dec!(600)));
    }

    #[test]
    fn fractional_rates_stay_exact() {
        let mut account = SavingsAccount::new("Alice", Money::ZERO, dec!(2.5));
        assert!(account.deposit(Money::new(dec!(1000))));
        assert_eq!(account.balance(), Money::new(dec!(1025)));
    }
}
