//! Game state types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::money::Money;

/// Game state.
///
/// A round moves through these states in order. `RoundEnd` either loops back
/// to `Betting` or the session closes in `SessionOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for a wager.
    Betting,
    /// Wager reserved, opening cards not yet dealt.
    Dealing,
    /// Waiting for hit/stand decisions.
    PlayerTurn,
    /// Dealer reveals the hole card and plays out their hand.
    DealerTurn,
    /// Both hands are final and the wager can be settled.
    Settlement,
    /// Round settled; waiting to hear whether to continue.
    RoundEnd,
    /// No further rounds will be dealt.
    SessionOver,
}

/// What the player can see of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// The player's cards.
    pub player: Vec<Card>,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's face-up cards.
    pub dealer: Vec<Card>,
    /// Value of the dealer's face-up cards.
    pub dealer_value: u8,
    /// Whether the dealer still holds a face-down card.
    pub hole_hidden: bool,
    /// The wager at risk.
    pub bet: Money,
    /// Funds not at risk.
    pub purse: Money,
}
