//! Error types for game operations.

use thiserror::Error;

use crate::money::Money;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Fewer cards remain than were requested.
    #[error("deck exhausted: requested {requested} card(s), {remaining} remaining")]
    Empty {
        /// Cards requested by the draw.
        requested: usize,
        /// Cards left in the deck.
        remaining: usize,
    },
    /// The deck was never shuffled.
    #[error("deck has not been shuffled")]
    NotShuffled,
}

/// Errors raised when text is not a chip amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    /// The text is not a plain decimal number.
    #[error("not a number")]
    Invalid,
    /// More decimal places than a chip amount keeps.
    #[error("at most three decimal places are allowed")]
    TooPrecise,
    /// The amount does not fit.
    #[error("amount out of range")]
    OutOfRange,
}

/// Errors that can occur while placing a wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// The wager text is not a number.
    #[error("wager must be a number")]
    NotANumber,
    /// The wager has more decimal places than chips are counted in.
    #[error("wager has too many decimal places")]
    TooPrecise,
    /// Wager is zero or negative.
    #[error("wager must be greater than zero")]
    NonPositive,
    /// Wager exceeds the purse.
    #[error("wager is too large, only {available} available")]
    TooLarge {
        /// Funds the player can still wager.
        available: Money,
    },
}

/// Error returned when player input does not name a known decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// Input matched none of the accepted words.
    #[error("unrecognized decision")]
    Unrecognized,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The deck could not supply the opening cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The deck could not supply a card.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during dealer play and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// The deck could not supply a card for the dealer.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for starting another round.
    #[error("invalid game state for starting another round")]
    InvalidState,
}

/// Errors reported by a [`Frontend`](crate::Frontend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrontendError {
    /// The frontend can no longer provide input.
    #[error("frontend input closed")]
    Closed,
}

/// Errors that end a session early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The frontend supplied a wager that fails validation.
    #[error("rejected wager: {0}")]
    Bet(#[from] BetError),
    /// Dealing failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error("player action failed: {0}")]
    Action(#[from] ActionError),
    /// Dealer play or settlement failed.
    #[error("showdown failed: {0}")]
    Showdown(#[from] ShowdownError),
    /// Starting the next round failed.
    #[error("round transition failed: {0}")]
    Round(#[from] RoundError),
    /// The frontend stopped answering.
    #[error(transparent)]
    Frontend(#[from] FrontendError),
}

impl SessionError {
    /// Returns the deck error behind this failure, if the deck ran out.
    #[must_use]
    pub const fn deck_error(&self) -> Option<DeckError> {
        match self {
            Self::Deal(DealError::Deck(err))
            | Self::Action(ActionError::Deck(err))
            | Self::Showdown(ShowdownError::Deck(err)) => Some(*err),
            _ => None,
        }
    }
}
