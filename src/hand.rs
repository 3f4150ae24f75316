//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.rank.primary_value());
    }

    // Reinterpret one ace at a time as 1 until the hand stops busting.
    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Best total for a sequence of cards.
///
/// Every ace counts as 11 until that would bust the hand, then aces are
/// counted as 1 one at a time. A total above 21 is returned as is when no
/// ace is left to reduce.
///
/// ```
/// use bjsolo::{Card, Rank, Suit, hand_value};
///
/// let cards = [
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Clubs, Rank::Nine),
/// ];
/// assert_eq!(hand_value(&cards), 21);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood, or reached 21 by drawing.
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a blackjack (natural 21).
    Blackjack,
}

/// A player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Current status of the hand.
    status: HandStatus,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        let value = self.value();

        if value > BLACKJACK {
            self.status = HandStatus::Bust;
        } else if self.is_natural() {
            self.status = HandStatus::Blackjack;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Calculates the value of the hand. See [`hand_value`].
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is exactly two cards totalling 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.status = HandStatus::Active;
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

/// The dealer's hand: the shown cards plus one face-down hole card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Face-up cards. The hole card joins them once revealed.
    shown: Vec<Card>,
    /// Face-down card, `None` before the deal and after the reveal.
    hole: Option<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            shown: Vec::new(),
            hole: None,
        }
    }

    /// Adds a face-up card.
    pub fn add_card(&mut self, card: Card) {
        self.shown.push(card);
    }

    /// Places the face-down hole card.
    pub const fn set_hole(&mut self, card: Card) {
        self.hole = Some(card);
    }

    /// Returns the face-up cards.
    #[must_use]
    pub fn shown(&self) -> &[Card] {
        &self.shown
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.shown.first()
    }

    /// Returns whether the hole card is still face down.
    #[must_use]
    pub const fn has_hidden_hole(&self) -> bool {
        self.hole.is_some()
    }

    /// Turns the hole card face up, appending it to the shown cards.
    ///
    /// Returns the revealed card, or `None` if there was nothing to reveal.
    pub fn reveal_hole(&mut self) -> Option<Card> {
        let card = self.hole.take()?;
        self.shown.push(card);
        Some(card)
    }

    /// Value of the face-up cards only.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.shown).0
    }

    /// Returns whether the shown cards are over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the shown cards are soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.shown).1
    }

    /// Returns the number of cards, hole card included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shown.len() + usize::from(self.hole.is_some())
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.shown.clear();
        self.hole = None;
    }
}
