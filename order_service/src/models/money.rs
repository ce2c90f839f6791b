// order_service/src/models/money.rs

use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;
use thiserror::Error;

/// A currency amount held in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(i64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
  #[error("amount is empty")]
  Empty,
  #[error("amount '{0}' is not a decimal number")]
  Malformed(String),
  #[error("amount '{0}' has more than two decimal places")]
  TooPrecise(String),
  #[error("amount '{0}' is out of range")]
  OutOfRange(String),
}

impl Money {
  pub const ZERO: Money = Money(0);

  pub const fn from_cents(cents: i64) -> Self {
    Money(cents)
  }

  pub const fn cents(self) -> i64 {
    self.0
  }
}

impl Add for Money {
  type Output = Money;

  fn add(self, rhs: Money) -> Money {
    Money(self.0 + rhs.0)
  }
}

impl Sum for Money {
  fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
    iter.fold(Money::ZERO, Add::add)
  }
}

impl fmt::Display for Money {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let sign = if self.0 < 0 { "-" } else { "" };
    let abs = self.0.unsigned_abs();
    write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
  }
}

/// Parses a non-negative decimal such as `18.98`, `7.5` or `12`.
impl FromStr for Money {
  type Err = MoneyParseError;

  fn from_str(raw: &str) -> Result<Self, Self::Err> {
    let s = raw.trim();
    if s.is_empty() {
      return Err(MoneyParseError::Empty);
    }

    let (whole, frac) = match s.split_once('.') {
      Some((w, f)) => (w, f),
      None => (s, ""),
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
      return Err(MoneyParseError::Malformed(raw.to_string()));
    }
    if frac.len() > 2 {
      return Err(MoneyParseError::TooPrecise(raw.to_string()));
    }

    let out_of_range = || MoneyParseError::OutOfRange(raw.to_string());
    let whole_units: i64 = if whole.is_empty() { 0 } else { whole.parse().map_err(|_| out_of_range())? };
    let frac_cents: i64 = match frac.len() {
      0 => 0,
      1 => frac.parse::<i64>().map_err(|_| out_of_range())? * 10,
      _ => frac.parse().map_err(|_| out_of_range())?,
    };

    whole_units
      .checked_mul(100)
      .and_then(|c| c.checked_add(frac_cents))
      .map(Money)
      .ok_or_else(out_of_range)
  }
}
