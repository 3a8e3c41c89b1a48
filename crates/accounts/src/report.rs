use std::io::{self, Write};

use crate::account::BankAccount;

/// Write one [`BankAccount::describe`] line per account, preserving order.
pub fn write_summaries<A, W>(out: &mut W, accounts: &[A]) -> io::Result<()>
where
    A: BankAccount,
    W: Write,
{
    for account in accounts {
        writeln!(out, "{}", account.describe())?;
    }
    Ok(())
}

/// Stdout convenience wrapper over [`write_summaries`].
pub fn print_accounts<A: BankAccount>(accounts: &[A]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    // Writing to stdout only fails on a closed pipe; nothing to report then.
    let _ = write_summaries(&mut out, accounts);
}
