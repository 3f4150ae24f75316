//! Decisions supplied by the frontend, and the predicates that validate them.
//!
//! Re-prompting on bad input is the frontend's job; this module only says
//! whether a given answer is acceptable.

use core::str::FromStr;

use crate::error::{BetError, DecisionError, ParseMoneyError};
use crate::money::Money;

/// A player's choice during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl FromStr for Decision {
    type Err = DecisionError;

    /// Accepts `hit`/`h` and `stand`/`stay`/`s`, ignoring case and
    /// surrounding whitespace.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if matches_any(input, &["hit", "h"]) {
            Ok(Self::Hit)
        } else if matches_any(input, &["stand", "stay", "s"]) {
            Ok(Self::Stand)
        } else {
            Err(DecisionError::Unrecognized)
        }
    }
}

/// Whether to play another round once one has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continue {
    /// Deal another round.
    Continue,
    /// Leave the table.
    Quit,
}

impl FromStr for Continue {
    type Err = DecisionError;

    /// Accepts `y`/`yes` and `n`/`no`, ignoring case and surrounding
    /// whitespace. Anything else is unrecognized.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if matches_any(input, &["y", "yes"]) {
            Ok(Self::Continue)
        } else if matches_any(input, &["n", "no"]) {
            Ok(Self::Quit)
        } else {
            Err(DecisionError::Unrecognized)
        }
    }
}

fn matches_any(input: &str, words: &[&str]) -> bool {
    words.iter().any(|word| input.eq_ignore_ascii_case(word))
}

/// Checks that a wager is positive and covered by the purse.
///
/// # Errors
///
/// Returns [`BetError::NonPositive`] for a zero or negative wager and
/// [`BetError::TooLarge`] when the wager exceeds `purse`.
pub const fn validate_wager(amount: Money, purse: Money) -> Result<Money, BetError> {
    if !amount.is_positive() {
        return Err(BetError::NonPositive);
    }
    if amount.mills() > purse.mills() {
        return Err(BetError::TooLarge { available: purse });
    }
    Ok(amount)
}

/// Parses typed wager text and validates it against the purse.
///
/// # Errors
///
/// Returns [`BetError::NotANumber`] for text that is not a decimal number,
/// [`BetError::TooPrecise`] for more than three decimal places, and the
/// errors of [`validate_wager`] otherwise.
///
/// ```
/// use bjsolo::{BetError, Money, parse_wager};
///
/// let purse = Money::from_chips(900);
/// assert_eq!(parse_wager(" 100 ", purse), Ok(Money::from_chips(100)));
/// assert_eq!(parse_wager("12.5", purse), Ok(Money::from_mills(12_500)));
/// assert_eq!(parse_wager("-5", purse), Err(BetError::NonPositive));
/// ```
pub fn parse_wager(input: &str, purse: Money) -> Result<Money, BetError> {
    let amount: Money = input.parse().map_err(|err| match err {
        ParseMoneyError::TooPrecise => BetError::TooPrecise,
        ParseMoneyError::Invalid => BetError::NotANumber,
        ParseMoneyError::OutOfRange => BetError::TooLarge { available: purse },
    })?;
    validate_wager(amount, purse)
}
