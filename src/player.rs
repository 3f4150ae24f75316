//! The seated player.

extern crate alloc;

use alloc::string::String;

use uuid::Uuid;

use crate::hand::Hand;
use crate::money::Money;

/// The single player at the table.
///
/// The purse persists for the whole session and only holds funds that are
/// not currently at risk: a wager leaves the purse when it is placed and
/// comes back, with any winnings, at settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Player ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Current hand.
    pub hand: Hand,
    /// Wager for the current round, zero between rounds.
    pub bet: Money,
    /// Funds not at risk.
    pub purse: Money,
}

impl Player {
    /// Creates a player with an empty hand and no wager.
    #[must_use]
    pub fn new(id: Uuid, name: impl Into<String>, purse: Money) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(),
            bet: Money::ZERO,
            purse,
        }
    }

    /// Returns whether the player has nothing left to wager.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        !self.purse.is_positive()
    }
}
