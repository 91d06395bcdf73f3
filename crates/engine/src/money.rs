use std::{
    fmt,
    ops::{Add, AddAssign, Sub},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::LedgerError;

/// Signed money amount represented as **integer cents**.
///
/// Every monetary value in the ledger (entry amounts, report totals) is a
/// `Cents`, so sums never drift the way floating point does.
///
/// # Examples
///
/// ```rust
/// use engine::Cents;
///
/// let amount = Cents::new(12_34);
/// assert_eq!(amount.minor(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Parsing from user input accepts `.` or `,` as decimal separator and at
/// most two fractional digits:
///
/// ```rust
/// use engine::Cents;
///
/// assert_eq!("10".parse::<Cents>().unwrap().minor(), 1000);
/// assert_eq!("10,5".parse::<Cents>().unwrap().minor(), 1050);
/// assert!("12.345".parse::<Cents>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl From<i64> for Cents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Cents> for i64 {
    fn from(value: Cents) -> Self {
        value.0
    }
}

impl Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Self::Output {
        Cents(self.0 + rhs.0)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Cents) {
        self.0 += rhs.0;
    }
}

impl Sub for Cents {
    type Output = Cents;

    fn sub(self, rhs: Cents) -> Self::Output {
        Cents(self.0 - rhs.0)
    }
}

impl FromStr for Cents {
    type Err = LedgerError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts an optional leading `+`/`-`, `.` or `,` as decimal separator
    /// and at most two fractional digits. Rejects everything else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LedgerError::InvalidAmount(s.trim().to_string());

        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if digits.is_empty() {
            return Err(invalid());
        }

        let normalized = digits.replace(',', ".");
        let (whole, frac) = match normalized.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (normalized.as_str(), ""),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(frac))
            .ok_or_else(invalid)?;
        Ok(Cents(if negative { -cents } else { cents }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Cents::new(0).to_string(), "0.00");
        assert_eq!(Cents::new(1).to_string(), "0.01");
        assert_eq!(Cents::new(10).to_string(), "0.10");
        assert_eq!(Cents::new(1050).to_string(), "10.50");
        assert_eq!(Cents::new(-1050).to_string(), "-10.50");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("10".parse::<Cents>().unwrap().minor(), 1000);
        assert_eq!("10.5".parse::<Cents>().unwrap().minor(), 1050);
        assert_eq!("10,50".parse::<Cents>().unwrap().minor(), 1050);
        assert_eq!("+1.00".parse::<Cents>().unwrap().minor(), 100);
        assert_eq!("-0.01".parse::<Cents>().unwrap().minor(), -1);
        assert_eq!("  2.30 ".parse::<Cents>().unwrap().minor(), 230);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Cents>().is_err());
        assert!("abc".parse::<Cents>().is_err());
        assert!("10 euro".parse::<Cents>().is_err());
        assert!("1.2.3".parse::<Cents>().is_err());
        assert!(".5".parse::<Cents>().is_err());
    }

    #[test]
    fn parse_rejects_more_than_two_decimals() {
        assert!("12.345".parse::<Cents>().is_err());
        assert!("0.001".parse::<Cents>().is_err());
    }
}
