//! Round and session result types.

use crate::hand::BLACKJACK;
use crate::money::Money;

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player holds a natural 21 on the opening two cards.
    PlayerBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Equal totals.
    Push,
    /// Dealer finished closer to 21.
    DealerWin,
    /// Player finished closer to 21.
    PlayerWin,
}

impl Outcome {
    /// Amount returned to the purse for a settled wager.
    ///
    /// The wager has already left the purse, so this is the whole purse
    /// change at settlement: the stake plus any winnings. `blackjack_profit`
    /// is the bonus paid on a natural.
    #[must_use]
    pub fn payout(self, bet: Money, blackjack_profit: Money) -> Money {
        match self {
            Self::PlayerBlackjack => bet + blackjack_profit,
            Self::DealerBust | Self::PlayerWin => bet * 2,
            Self::Push => bet,
            Self::PlayerBust | Self::DealerWin => Money::ZERO,
        }
    }

    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(
            self,
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWin
        )
    }
}

/// Decides the outcome of a round from the final totals.
///
/// Precedence: a natural wins outright, then a player bust loses, then a
/// dealer bust wins, and only then are the totals compared.
#[must_use]
pub const fn resolve_outcome(player_value: u8, player_natural: bool, dealer_value: u8) -> Outcome {
    if player_natural {
        Outcome::PlayerBlackjack
    } else if player_value > BLACKJACK {
        Outcome::PlayerBust
    } else if dealer_value > BLACKJACK {
        Outcome::DealerBust
    } else if dealer_value == player_value {
        Outcome::Push
    } else if dealer_value > player_value {
        Outcome::DealerWin
    } else {
        Outcome::PlayerWin
    }
}

/// Settlement of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The round number, starting at 1.
    pub round: u32,
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The wager that was at risk.
    pub bet: Money,
    /// Amount credited to the purse at settlement.
    pub payout: Money,
    /// Purse after settlement.
    pub purse: Money,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}

impl Settlement {
    /// Net result of the round (positive = profit, negative = loss).
    #[must_use]
    pub fn net(&self) -> Money {
        self.payout - self.bet
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionOutcome {
    /// The purse ran dry.
    Broke,
    /// The player chose to leave.
    Quit,
}

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Why the session ended.
    pub outcome: SessionOutcome,
    /// Rounds settled.
    pub rounds: u32,
    /// Purse at the end of the session.
    pub purse: Money,
}
