//! The single 52-card deck used for one round.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck, dealt from the front.
///
/// A deck is built fresh for every round and never refilled. Drawing from a
/// deck that has not been shuffled is rejected with [`DeckError::NotShuffled`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
    shuffled: bool,
}

impl Deck {
    /// Builds the 52 canonical cards in suit-major, rank-minor order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }

        Self {
            cards,
            shuffled: false,
        }
    }

    /// Builds a deck whose draws come out in exactly the given order.
    ///
    /// The arrangement stands in for a shuffle, so the deck is ready to deal.
    #[must_use]
    pub fn arranged(draws: &[Card]) -> Self {
        Self {
            cards: draws.iter().copied().collect(),
            shuffled: true,
        }
    }

    /// Shuffles the deck in place and marks it ready to deal.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
        self.shuffled = true;
    }

    /// Returns whether the deck has been shuffled (or arranged).
    #[must_use]
    pub const fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Number of cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the undealt cards, next draw first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is unshuffled or empty.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.ensure(1)?;
        self.cards.pop_front().ok_or(DeckError::Empty {
            requested: 1,
            remaining: 0,
        })
    }

    /// Removes and returns the next `count` cards in draw order.
    ///
    /// Nothing is drawn unless all `count` cards are available.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is unshuffled or holds fewer than `count`
    /// cards.
    pub fn draw_many(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        self.ensure(count)?;
        Ok(self.cards.drain(..count).collect())
    }

    fn ensure(&self, requested: usize) -> Result<(), DeckError> {
        if !self.shuffled {
            return Err(DeckError::NotShuffled);
        }
        if self.cards.len() < requested {
            return Err(DeckError::Empty {
                requested,
                remaining: self.cards.len(),
            });
        }
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
