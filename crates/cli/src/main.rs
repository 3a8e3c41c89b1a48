//! Fixed demonstration run: three accounts, one deposit and one withdrawal
//! each, then a summary per account. Takes no arguments and exits 0.

use std::io::Write;

use anyhow::Result;
use rust_decimal_macros::dec;

use tellerkit_accounts::{
    AnyAccount, BankAccount, CheckingAccount, SavingsAccount, TrustAccount, write_summaries,
};
use tellerkit_core::Money;

fn main() -> Result<()> {
    tellerkit_observability::init();

    let mut accounts: Vec<AnyAccount> = vec![
        SavingsAccount::new("Alice", Money::new(dec!(1000)), dec!(5)).into(),
        CheckingAccount::new("Bob", Money::new(dec!(1500))).into(),
        TrustAccount::new("Charlie", Money::new(dec!(10000)), dec!(4)).into(),
    ];

    let deposit = Money::new(dec!(5000));
    let withdrawal = Money::new(dec!(1000));

    for account in &mut accounts {
        let accepted = account.deposit(deposit);
        tracing::debug!(name = account.name(), %deposit, accepted, "deposit");

        let accepted = account.withdraw(withdrawal);
        tracing::debug!(name = account.name(), %withdrawal, accepted, "withdrawal");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out)?;
    writeln!(out, "--- Account Summaries ---")?;
    write_summaries(&mut out, &accounts)?;

    Ok(())
}
