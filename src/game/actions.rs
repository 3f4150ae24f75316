use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{BLACKJACK, HandStatus};
use crate::input::Decision;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Reaching 21 or busting ends the turn at once; no further decision is
    /// requested.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck
    /// is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.draw()?;
        let hand = &mut self.player.hand;
        hand.add_card(card);

        let value = hand.value();
        if value == BLACKJACK {
            hand.set_status(HandStatus::Stand);
        }
        if value >= BLACKJACK {
            self.state = GameState::DealerTurn;
        }
        log::debug!("round {}: player hits {card}, total {value}", self.round);

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.player.hand.set_status(HandStatus::Stand);
        self.state = GameState::DealerTurn;
        log::debug!(
            "round {}: player stands on {}",
            self.round,
            self.player.hand.value()
        );

        Ok(())
    }

    /// Applies a decision, returning the drawn card on a hit.
    ///
    /// # Errors
    ///
    /// See [`Game::hit`] and [`Game::stand`].
    pub fn act(&mut self, decision: Decision) -> Result<Option<Card>, ActionError> {
        match decision {
            Decision::Hit => self.hit().map(Some),
            Decision::Stand => self.stand().map(|()| None),
        }
    }
}
