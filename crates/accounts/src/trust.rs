use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use tellerkit_core::Money;

use crate::account::BankAccount;
use crate::savings::SavingsAccount;

/// Trust account: interest-bearing like savings, plus a deposit bonus and
/// strict withdrawal limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustAccount {
    savings: SavingsAccount,
    withdrawals_this_year: u32,
}

impl TrustAccount {
    pub const MAX_WITHDRAWALS_PER_YEAR: u32 = 3;
    /// Minimum single deposit that earns the flat bonus.
    pub const BONUS_THRESHOLD: Money = Money::new(dec!(5000.00));
    pub const BONUS_AMOUNT: Money = Money::new(dec!(50.00));
    /// A single withdrawal must stay under this percentage of the balance.
    const WITHDRAWAL_CAP_PCT: Decimal = dec!(20);

    pub fn new(name: impl Into<String>, opening_balance: Money, interest_rate: Decimal) -> Self {
        Self {
            savings: SavingsAccount::new(name, opening_balance, interest_rate),
            withdrawals_this_year: 0,
        }
    }

    pub fn interest_rate(&self) -> Decimal {
        self.savings.interest_rate()
    }

    pub fn withdrawals_this_year(&self) -> u32 {
        self.withdrawals_this_year
    }

    /// Zero the yearly withdrawal counter. The account itself keeps no
    /// calendar; whoever owns the year roll-over calls this.
    pub fn reset_yearly_withdrawals(&mut self) {
        self.withdrawals_this_year = 0;
    }
}

impl BankAccount for TrustAccount {
    fn name(&self) -> &str {
        self.savings.name()
    }

    fn balance(&self) -> Money {
        self.savings.balance()
    }

    /// Savings deposit (base + interest) first; the bonus is keyed on the
    /// **requested** amount, not the interest-augmented credit.
    fn deposit(&mut self, amount: Money) -> bool {
        if !self.savings.deposit(amount) {
            return false;
        }
        if amount >= Self::BONUS_THRESHOLD {
            self.savings.credit(Self::BONUS_AMOUNT);
        }
        true
    }

    /// Guards fire before any mutation; the counter only moves on a
    /// successful base withdrawal.
    fn withdraw(&mut self, amount: Money) -> bool {
        if self.withdrawals_this_year >= Self::MAX_WITHDRAWALS_PER_YEAR {
            return false;
        }
        if amount >= self.balance().percent(Self::WITHDRAWAL_CAP_PCT) {
            return false;
        }
        if !self.savings.withdraw(amount) {
            return false;
        }
        self.withdrawals_this_year += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn charlie() -> TrustAccount {
        TrustAccount::new("Charlie", Money::new(dec!(10000)), dec!(4))
    }

    #[test]
    fn deposit_at_threshold_earns_interest_and_bonus() {
        let mut account = charlie();
        assert!(account.deposit(Money::new(dec!(5000))));
        // 10000 + 5000 + 4% of 5000 + 50 bonus
        assert_eq!(account.balance(), Money::new(dec!(15250)));
    }

    #[test]
    fn deposit_below_threshold_earns_interest_only() {
        let mut account = charlie();
        assert!(account.deposit(Money::new(dec!(4999.99))));
        assert_eq!(account.balance(), Money::new(dec!(15199.9896)));
    }

    #[test]
    fn failed_deposit_earns_nothing() {
        let mut account = charlie();
        assert!(!account.deposit(Money::new(dec!(-5000))));
        assert_eq!(account.balance(), Money::new(dec!(10000)));
    }

    #[test]
    fn withdrawal_at_twenty_percent_cap_is_rejected() {
        let mut account = charlie();
        assert!(!account.withdraw(Money::new(dec!(2000))));
        assert!(!account.withdraw(Money::new(dec!(3000))));
        assert_eq!(account.balance(), Money::new(dec!(10000)));
        assert_eq!(account.withdrawals_this_year(), 0);
    }

    #[test]
    fn withdrawal_under_cap_succeeds_and_counts() {
        let mut account = charlie();
        assert!(account.withdraw(Money::new(dec!(1999.99))));
        assert_eq!(account.balance(), Money::new(dec!(8000.01)));
        assert_eq!(account.withdrawals_this_year(), 1);
    }

    #[test]
    fn fourth_withdrawal_in_a_year_is_rejected() {
        let mut account = TrustAccount::new("Charlie", Money::new(dec!(100000)), dec!(4));
        for _ in 0..3 {
            assert!(account.withdraw(Money::new(dec!(100))));
        }
        let balance = account.balance();
        assert!(!account.withdraw(Money::new(dec!(100))));
        assert_eq!(account.balance(), balance);
        assert_eq!(account.withdrawals_this_year(), 3);
    }

    #[test]
    fn reset_reopens_the_yearly_allowance() {
        let mut account = TrustAccount::new("Charlie", Money::new(dec!(100000)), dec!(4));
        for _ in 0..3 {
            assert!(account.withdraw(Money::new(dec!(100))));
        }
        account.reset_yearly_withdrawals();
        assert_eq!(account.withdrawals_this_year(), 0);
        assert!(account.withdraw(Money::new(dec!(100))));
    }

    proptest! {
        /// The yearly counter never exceeds the maximum, whatever the
        /// withdrawal sequence.
        #[test]
        fn counter_never_exceeds_max(
            amounts in prop::collection::vec(1i64..5_000, 0..20),
        ) {
            let mut account = TrustAccount::new("P", Money::from(1_000_000i64), dec!(4));

            for amount in amounts {
                account.withdraw(Money::from(amount));
                prop_assert!(
                    account.withdrawals_this_year() <= TrustAccount::MAX_WITHDRAWALS_PER_YEAR
                );
            }
        }
    }
}
