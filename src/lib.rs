//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time against a
//! persistent purse: wager, deal, player decisions, dealer play, and
//! settlement. Chip amounts are exact [`Money`] values, so a natural pays
//! precisely one and a half times the wager. Input and display belong to a
//! [`Frontend`]; [`Game::play`] drives a whole session through one.
//!
//! # Example
//!
//! ```
//! use bjsolo::{Card, Deck, Game, Money, Outcome, Rank, Suit, TableOptions};
//!
//! let mut game = Game::new(TableOptions::default(), "Ada", 42);
//! game.place_bet("12.5".parse().unwrap()).unwrap();
//! game.deck = Deck::arranged(&[
//!     Card::new(Suit::Spades, Rank::Ace),
//!     Card::new(Suit::Hearts, Rank::Nine),
//!     Card::new(Suit::Clubs, Rank::King),
//!     Card::new(Suit::Diamonds, Rank::Seven),
//!     Card::new(Suit::Spades, Rank::Two),
//! ]);
//! game.deal().unwrap();
//! game.dealer_play().unwrap();
//!
//! let settlement = game.settle().unwrap();
//! assert_eq!(settlement.outcome, Outcome::PlayerBlackjack);
//! assert_eq!(game.player.purse.to_string(), "1018.75");
//! assert_eq!(settlement.net(), Money::from_mills(18_750));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod frontend;
pub mod game;
pub mod hand;
pub mod input;
pub mod money;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, DealError, DecisionError, DeckError, FrontendError, ParseMoneyError,
    RoundError, SessionError, ShowdownError,
};
pub use frontend::Frontend;
pub use game::{Game, GameState, TableView};
pub use hand::{BLACKJACK, DealerHand, Hand, HandStatus, hand_value};
pub use input::{Continue, Decision, parse_wager, validate_wager};
pub use money::{MONEY_DECIMALS, Money};
pub use options::{RoundingMode, TableOptions};
pub use player::Player;
pub use result::{Outcome, SessionOutcome, SessionSummary, Settlement, resolve_outcome};
