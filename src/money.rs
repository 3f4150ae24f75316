//! Fixed-point chip amounts.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use core::str::FromStr;

use crate::error::ParseMoneyError;

/// Decimal places kept by [`Money`].
pub const MONEY_DECIMALS: u32 = 3;

const SCALE: i64 = 10_i64.pow(MONEY_DECIMALS);

/// An amount of chips, stored exactly in thousandths of a chip.
///
/// Wagers may be fractional, and a 3:2 bonus on any wager with at most two
/// decimal places is exact at this scale.
///
/// ```
/// use bjsolo::Money;
///
/// let bet: Money = "12.5".parse().unwrap();
/// assert_eq!(bet.mills(), 12_500);
///
/// // A 3:2 natural returns the stake plus one and a half times it.
/// let payout = bet + Money::from_mills(bet.mills() * 3 / 2);
/// assert_eq!(payout.to_string(), "31.25");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// No chips.
    pub const ZERO: Self = Self(0);

    /// Creates an amount of whole chips.
    #[must_use]
    pub const fn from_chips(chips: i64) -> Self {
        Self(chips * SCALE)
    }

    /// Creates an amount from thousandths of a chip.
    #[must_use]
    pub const fn from_mills(mills: i64) -> Self {
        Self(mills)
    }

    /// Returns the amount in thousandths of a chip.
    #[must_use]
    pub const fn mills(self) -> i64 {
        self.0
    }

    /// Returns whether the amount is exactly zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns whether the amount is greater than zero.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self(self.0 * rhs)
    }
}

impl fmt::Display for Money {
    /// Prints whole chips bare and drops trailing zeros from fractions, so
    /// `1001.500` shows as `1001.5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let mills = self.0.unsigned_abs();
        let whole = mills / SCALE.unsigned_abs();
        let frac = mills % SCALE.unsigned_abs();

        if frac == 0 {
            write!(f, "{sign}{whole}")
        } else if frac % 100 == 0 {
            write!(f, "{sign}{whole}.{}", frac / 100)
        } else if frac % 10 == 0 {
            write!(f, "{sign}{whole}.{:02}", frac / 10)
        } else {
            write!(f, "{sign}{whole}.{frac:03}")
        }
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    /// Parses a plain decimal such as `100`, `-5`, `12.5` or `.25`.
    ///
    /// Surrounding whitespace is ignored. Exponents, separators, and more
    /// than three decimal places are rejected.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let (negative, digits) = match input.as_bytes().first() {
            Some(b'-') => (true, &input[1..]),
            Some(b'+') => (false, &input[1..]),
            _ => (false, input),
        };

        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(ParseMoneyError::Invalid);
        }
        if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(ParseMoneyError::Invalid);
        }
        if frac.len() > MONEY_DECIMALS as usize {
            return Err(ParseMoneyError::TooPrecise);
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| ParseMoneyError::OutOfRange)?
        };
        let mut fraction: i64 = 0;
        for (place, digit) in frac.bytes().enumerate() {
            fraction += i64::from(digit - b'0') * 10_i64.pow(MONEY_DECIMALS - 1 - place as u32);
        }

        let mills = whole
            .checked_mul(SCALE)
            .and_then(|mills| mills.checked_add(fraction))
            .ok_or(ParseMoneyError::OutOfRange)?;

        Ok(Self(if negative { -mills } else { mills }))
    }
}
