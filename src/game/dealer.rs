extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::HandStatus;
use crate::money::Money;
use crate::options::RoundingMode;
use crate::result::{SessionOutcome, Settlement, resolve_outcome};

use super::{Game, GameState};

/// Products this close to a whole thousandth are float noise, not a fraction.
const SNAP: f64 = 1e-6;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> i64 {
    let nearest = amount.round();
    if (amount - nearest).abs() < SNAP {
        return nearest as i64;
    }
    match mode {
        RoundingMode::Up => amount.ceil() as i64,
        RoundingMode::Down => amount.floor() as i64,
        RoundingMode::Nearest => amount.round() as i64,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> i64 {
    let nearest = libm::round(amount);
    if libm::fabs(amount - nearest) < SNAP {
        return nearest as i64;
    }
    match mode {
        RoundingMode::Up => libm::ceil(amount) as i64,
        RoundingMode::Down => libm::floor(amount) as i64,
        RoundingMode::Nearest => libm::round(amount) as i64,
    }
}

impl Game {
    /// Dealer reveals the hole card and plays out their hand.
    ///
    /// The dealer draws while below `dealer_stands_on` and stands on the first
    /// total at or above it, soft or hard. Against a busted player the dealer
    /// only reveals.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        if let Some(hole) = self.dealer.reveal_hole() {
            log::debug!("round {}: dealer reveals {hole}", self.round);
        }

        let mut drawn_cards = Vec::new();

        if self.player.hand.status() != HandStatus::Bust {
            while self.dealer.value() < self.options.dealer_stands_on {
                let card = self.deck.draw()?;
                self.dealer.add_card(card);
                drawn_cards.push(card);
                log::debug!(
                    "round {}: dealer draws {card}, total {}",
                    self.round,
                    self.dealer.value()
                );
            }
        }

        self.state = GameState::Settlement;

        Ok(drawn_cards)
    }

    /// Bonus paid on a natural, on top of the returned stake.
    ///
    /// The bonus is computed in thousandths of a chip, so `1.5` times any
    /// wager counted in cents comes out exact. The rounding mode only decides
    /// ratios that land between thousandths.
    #[must_use]
    pub fn blackjack_profit(&self, bet: Money) -> Money {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 holds any chip amount a purse can reach exactly"
        )]
        let winnings = (bet.mills() as f64) * self.options.blackjack_pays;
        Money::from_mills(round_amount(winnings, self.options.rounding_blackjack))
    }

    /// Settles the wager against the purse.
    ///
    /// The purse is credited exactly once and the wager resets to zero. If
    /// the purse is empty afterwards the session is over.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in settlement state.
    pub fn settle(&mut self) -> Result<Settlement, ShowdownError> {
        if self.state != GameState::Settlement {
            return Err(ShowdownError::InvalidState);
        }

        let hand = &self.player.hand;
        let player_value = hand.value();
        let dealer_value = self.dealer.value();
        let outcome = resolve_outcome(player_value, hand.is_natural(), dealer_value);

        let bet = self.player.bet;
        let payout = outcome.payout(bet, self.blackjack_profit(bet));

        self.player.purse += payout;
        self.player.bet = Money::ZERO;
        self.settled += 1;

        let settlement = Settlement {
            round: self.round,
            outcome,
            bet,
            payout,
            purse: self.player.purse,
            player_value,
            dealer_value,
        };
        log::info!(
            "round {}: {outcome:?} ({player_value} vs {dealer_value}), bet {bet}, paid {payout}, purse {}",
            self.round,
            self.player.purse
        );

        if self.player.is_broke() {
            self.close(SessionOutcome::Broke);
        } else {
            self.state = GameState::RoundEnd;
        }

        Ok(settlement)
    }
}
