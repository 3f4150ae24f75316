//! Game engine and state management.

extern crate alloc;

use alloc::string::String;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::{Builder, Uuid};

use crate::deck::Deck;
use crate::hand::DealerHand;
use crate::money::Money;
use crate::options::TableOptions;
use crate::player::Player;
use crate::result::SessionOutcome;

mod actions;
mod bet;
mod dealer;
mod session;
pub mod state;

pub use state::{GameState, TableView};

/// A single-player blackjack table that runs one round at a time.
///
/// The game owns the round's deck, the player with their purse, and the
/// dealer's hand. Each round starts from a freshly built and shuffled deck;
/// only the purse carries over.
#[derive(Debug)]
pub struct Game {
    /// Game ID.
    id: Uuid,
    /// Table options.
    pub options: TableOptions,
    /// Cards left in this round's deck.
    pub deck: Deck,
    /// The seated player.
    pub player: Player,
    /// Dealer's hand.
    pub dealer: DealerHand,
    /// Current game state.
    state: GameState,
    /// Current round number, starting at 1.
    round: u32,
    /// Rounds that reached settlement.
    settled: u32,
    /// Set once the session is over.
    session_outcome: Option<SessionOutcome>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, GameState, TableOptions};
    ///
    /// let game = Game::new(TableOptions::default(), "Ada", 42);
    /// assert_eq!(game.state(), GameState::Betting);
    /// assert_eq!(game.player.purse, bjsolo::Money::from_chips(1000));
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, name: impl Into<String>, seed: u64) -> Self {
        Self::with_rng(options, name, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game that shuffles with the given generator.
    #[must_use]
    pub fn with_rng(options: TableOptions, name: impl Into<String>, mut rng: ChaCha8Rng) -> Self {
        let id = Builder::from_random_bytes(rng.random()).into_uuid();
        let player_id = Builder::from_random_bytes(rng.random()).into_uuid();
        let player = Player::new(player_id, name, options.starting_purse);

        let mut game = Self {
            id,
            options,
            deck: Deck::new(),
            player,
            dealer: DealerHand::new(),
            state: GameState::Betting,
            round: 0,
            settled: 0,
            session_outcome: None,
            rng,
        };

        if game.player.is_broke() {
            game.close(SessionOutcome::Broke);
        } else {
            game.start_round();
        }
        game
    }

    /// Rebuilds and shuffles the deck, clears both hands, and opens betting.
    fn start_round(&mut self) {
        self.round += 1;
        self.deck = Deck::new();
        self.deck.shuffle(&mut self.rng);
        self.player.hand.clear();
        self.player.bet = Money::ZERO;
        self.dealer.clear();
        self.state = GameState::Betting;
        log::info!(
            "round {} opened for {} with purse {}",
            self.round,
            self.player.name,
            self.player.purse
        );
    }

    fn close(&mut self, outcome: SessionOutcome) {
        self.state = GameState::SessionOver;
        self.session_outcome = Some(outcome);
        log::info!(
            "session over ({outcome:?}) after {} settled round(s), purse {}",
            self.settled,
            self.player.purse
        );
    }

    /// Returns the game ID.
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current round number, starting at 1.
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the number of rounds that reached settlement.
    pub const fn rounds_settled(&self) -> u32 {
        self.settled
    }

    /// Returns why the session ended, or `None` while it is still running.
    pub const fn session_outcome(&self) -> Option<SessionOutcome> {
        self.session_outcome
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns what the player can currently see.
    pub fn view(&self) -> TableView {
        TableView {
            player: self.player.hand.cards().to_vec(),
            player_value: self.player.hand.value(),
            dealer: self.dealer.shown().to_vec(),
            dealer_value: self.dealer.value(),
            hole_hidden: self.dealer.has_hidden_hole(),
            bet: self.player.bet,
            purse: self.player.purse,
        }
    }

    /// Abandons the round in progress and returns the reserved wager.
    ///
    /// Used when the deck runs out mid-round. The game moves to `RoundEnd`,
    /// so the caller may still start another round or quit. Does nothing
    /// outside a round.
    pub fn abort_round(&mut self) {
        if matches!(
            self.state,
            GameState::Betting | GameState::RoundEnd | GameState::SessionOver
        ) {
            return;
        }

        log::warn!(
            "round {} aborted in {:?}, refunding {}",
            self.round,
            self.state,
            self.player.bet
        );
        self.player.purse += self.player.bet;
        self.player.bet = Money::ZERO;
        self.state = GameState::RoundEnd;
    }
}
