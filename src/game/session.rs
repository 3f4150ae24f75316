use crate::error::{RoundError, SessionError};
use crate::frontend::Frontend;
use crate::input::Continue;
use crate::result::{SessionOutcome, SessionSummary, Settlement};

use super::{Game, GameState};

impl Game {
    /// Starts another round or ends the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-end state.
    pub fn next_round(&mut self, choice: Continue) -> Result<(), RoundError> {
        if self.state != GameState::RoundEnd {
            return Err(RoundError::InvalidState);
        }

        match choice {
            Continue::Continue => self.start_round(),
            Continue::Quit => self.close(SessionOutcome::Quit),
        }

        Ok(())
    }

    /// Plays one round from wager to settlement against the frontend.
    ///
    /// If the deck runs out the round is aborted, the wager refunded, and the
    /// deck error returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the frontend
    /// returns an invalid wager or stops answering, or the deck runs out.
    pub fn play_round<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
    ) -> Result<Settlement, SessionError> {
        let result = self.run_round(frontend);
        if let Some(deck_err) = result.as_ref().err().and_then(SessionError::deck_error) {
            log::error!("round {} cannot continue: {deck_err}", self.round);
            self.abort_round();
        }
        result
    }

    fn run_round<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
    ) -> Result<Settlement, SessionError> {
        let wager = frontend.request_wager(self.player.purse)?;
        self.place_bet(wager)?;

        frontend.render_state(&self.deal()?);

        while self.state == GameState::PlayerTurn {
            let decision = frontend.request_decision()?;
            self.act(decision)?;
            frontend.render_state(&self.view());
        }

        self.dealer_play()?;
        frontend.render_state(&self.view());

        let settlement = self.settle()?;
        frontend.render_outcome(&settlement);

        Ok(settlement)
    }

    /// Plays rounds until the purse runs dry or the player quits.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`Game::play_round`] or
    /// [`Game::next_round`], or a frontend error while asking to continue.
    pub fn play<F: Frontend + ?Sized>(
        &mut self,
        frontend: &mut F,
    ) -> Result<SessionSummary, SessionError> {
        let outcome = loop {
            if let Some(outcome) = self.session_outcome {
                break outcome;
            }

            if self.state == GameState::Betting {
                self.play_round(frontend)?;
                continue;
            }

            let choice = frontend.request_continue()?;
            self.next_round(choice)?;
        };

        Ok(SessionSummary {
            outcome,
            rounds: self.settled,
            purse: self.player.purse,
        })
    }
}
