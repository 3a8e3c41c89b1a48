//! Single-currency monetary amount.
//!
//! Backed by [`rust_decimal::Decimal`] so business rules (interest, fees,
//! bonuses) compute exactly, with no binary-float drift. The system models a
//! single currency, so `Money` carries no currency code.

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::MoneyError;

/// A monetary amount, compared and serialized by value.
///
/// Serializes as a decimal string (e.g. `"1234.50"`), never as a float.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// `rate` percent of this amount (`self * rate / 100`), computed exactly.
    pub fn percent(&self, rate: Decimal) -> Money {
        Money(self.0 * rate / Decimal::ONE_HUNDRED)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<i64> for Money {
    fn from(units: i64) -> Self {
        Self(Decimal::from(units))
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|e| MoneyError::invalid_amount(format!("{s:?}: {e}")))?;
        Ok(Self(amount))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Money {
    /// En-US currency text: `$1,234.56`, negative as `-$1,234.56`, always two
    /// fraction digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp(2);
        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        let abs = rounded.abs();
        let units = abs.trunc();
        let cents = ((abs - units) * Decimal::ONE_HUNDRED)
            .round()
            .to_u32()
            .unwrap_or(0);
        let grouped = group_thousands(&units.normalize().to_string());
        write!(f, "{sign}${grouped}.{cents:02}")
    }
}

/// Insert `,` separators into a plain digit string (`"1234567"` → `"1,234,567"`).
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
