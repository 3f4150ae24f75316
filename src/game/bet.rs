use crate::card::Card;
use crate::error::{BetError, DealError};
use crate::hand::HandStatus;
use crate::input::validate_wager;
use crate::money::Money;

use super::{Game, GameState, TableView};

/// Recipient of each opening card, in dealing order.
#[derive(Debug, Clone, Copy)]
enum Seat {
    Player,
    DealerUp,
    DealerHole,
}

const DEAL_ORDER: [Seat; 4] = [Seat::Player, Seat::DealerUp, Seat::Player, Seat::DealerHole];

impl Game {
    fn seat_card(&mut self, seat: Seat, card: Card) {
        match seat {
            Seat::Player => self.player.hand.add_card(card),
            Seat::DealerUp => self.dealer.add_card(card),
            Seat::DealerHole => self.dealer.set_hole(card),
        }
    }

    /// Places the round's wager and reserves it from the purse.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the wager is not
    /// positive, or it exceeds the purse. The purse is untouched on error.
    pub fn place_bet(&mut self, amount: Money) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        let bet = validate_wager(amount, self.player.purse)?;

        self.player.purse -= bet;
        self.player.bet = bet;
        self.state = GameState::Dealing;
        log::debug!("round {}: wager {bet}, purse now {}", self.round, self.player.purse);

        Ok(())
    }

    /// Deals two cards each to the player and the dealer.
    ///
    /// Cards go player, dealer up, player, dealer hole. A natural skips the
    /// player's turn entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealing state or the deck
    /// cannot supply four cards. Nothing is dealt on error.
    pub fn deal(&mut self) -> Result<TableView, DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        let cards = self.deck.draw_many(DEAL_ORDER.len())?;
        for (seat, card) in DEAL_ORDER.into_iter().zip(cards) {
            self.seat_card(seat, card);
        }

        self.state = if self.player.hand.status() == HandStatus::Blackjack {
            GameState::DealerTurn
        } else {
            GameState::PlayerTurn
        };
        log::debug!(
            "round {}: dealt player {:?} ({}), dealer shows {:?}",
            self.round,
            self.player.hand.cards(),
            self.player.hand.value(),
            self.dealer.up_card()
        );

        Ok(self.view())
    }
}
