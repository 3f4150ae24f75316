//! Session driver tests with a scripted frontend.

use std::collections::VecDeque;

use bjsolo::{
    ActionError, BetError, Card, Continue, DealError, Decision, Deck, DeckError, Frontend,
    FrontendError, Game, GameState, Money, Outcome, Rank, SessionError, SessionOutcome,
    Settlement, Suit, TableOptions, TableView,
};

/// Replays canned answers and records everything rendered.
#[derive(Default)]
struct Script {
    wager: Option<Money>,
    decisions: VecDeque<Decision>,
    continues: VecDeque<Continue>,
    wager_requests: Vec<Money>,
    continue_requests: usize,
    views: Vec<TableView>,
    outcomes: Vec<Settlement>,
}

impl Frontend for Script {
    fn request_wager(&mut self, purse: Money) -> Result<Money, FrontendError> {
        self.wager_requests.push(purse);
        // All-in unless a fixed wager was scripted.
        Ok(self.wager.unwrap_or(purse))
    }

    fn request_decision(&mut self) -> Result<Decision, FrontendError> {
        Ok(self.decisions.pop_front().unwrap_or(Decision::Stand))
    }

    fn request_continue(&mut self) -> Result<Continue, FrontendError> {
        self.continue_requests += 1;
        self.continues.pop_front().ok_or(FrontendError::Closed)
    }

    fn render_state(&mut self, view: &TableView) {
        self.views.push(view.clone());
    }

    fn render_outcome(&mut self, settlement: &Settlement) {
        self.outcomes.push(*settlement);
    }
}

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

const fn chips(amount: i64) -> Money {
    Money::from_chips(amount)
}

#[test]
fn all_in_play_stops_once_broke() {
    let mut game = Game::new(TableOptions::default().with_starting_purse(chips(100)), "Ada", 21);
    let mut script = Script {
        continues: std::iter::repeat_n(Continue::Continue, 200).collect(),
        ..Script::default()
    };

    let summary = game.play(&mut script).unwrap();

    assert_eq!(summary.outcome, SessionOutcome::Broke);
    assert_eq!(summary.purse, Money::ZERO);
    assert_eq!(game.state(), GameState::SessionOver);

    // One wager per settled round, never one after the purse emptied.
    let rounds = summary.rounds as usize;
    assert_eq!(script.outcomes.len(), rounds);
    assert_eq!(script.wager_requests.len(), rounds);
    assert!(script.wager_requests.iter().all(|purse| purse.is_positive()));
    assert_eq!(script.continue_requests, rounds - 1);

    let last = script.outcomes.last().unwrap();
    assert!(last.purse.is_zero());
    assert!(!last.outcome.is_win());
}

#[test]
fn quitting_after_first_round() {
    let mut game = Game::new(TableOptions::default(), "Ada", 4);
    let mut script = Script {
        wager: Some(chips(10)),
        continues: VecDeque::from([Continue::Quit]),
        ..Script::default()
    };

    let summary = game.play(&mut script).unwrap();

    assert_eq!(summary.outcome, SessionOutcome::Quit);
    assert_eq!(summary.rounds, 1);
    let settlement = script.outcomes[0];
    assert_eq!(summary.purse, settlement.purse);
    assert_eq!(summary.purse, chips(1000) + settlement.net());
}

#[test]
fn continuing_carries_the_purse_forward() {
    let mut game = Game::new(TableOptions::default(), "Ada", 8);
    let mut script = Script {
        wager: Some(chips(10)),
        continues: VecDeque::from([Continue::Continue, Continue::Continue, Continue::Quit]),
        ..Script::default()
    };

    let summary = game.play(&mut script).unwrap();

    assert_eq!(summary.rounds, 3);
    assert_eq!(script.wager_requests[0], chips(1000));
    for (index, settlement) in script.outcomes.iter().enumerate().skip(1) {
        assert_eq!(script.wager_requests[index], script.outcomes[index - 1].purse);
        assert_eq!(settlement.round as usize, index + 1);
    }
}

#[test]
fn round_renders_each_step() {
    let mut game = Game::new(TableOptions::default(), "Ada", 1);
    game.deck = Deck::arranged(&[
        card(Suit::Spades, Rank::Ten),   // player
        card(Suit::Hearts, Rank::Six),   // dealer up
        card(Suit::Clubs, Rank::Five),   // player
        card(Suit::Diamonds, Rank::Ten), // dealer hole
        card(Suit::Spades, Rank::Nine),  // player hit
    ]);
    let mut script = Script {
        wager: Some(chips(100)),
        decisions: VecDeque::from([Decision::Hit, Decision::Hit]),
        ..Script::default()
    };

    let settlement = game.play_round(&mut script).unwrap();

    assert_eq!(settlement.outcome, Outcome::PlayerBust);
    assert_eq!(game.player.purse, chips(900));
    // The bust ends the turn before the second hit is requested.
    assert_eq!(script.decisions.len(), 1);

    assert_eq!(script.views.len(), 3);
    assert!(script.views[0].hole_hidden);
    assert_eq!(script.views[0].dealer_value, 6);
    assert_eq!(script.views[1].player_value, 24);
    assert!(!script.views[2].hole_hidden);
    assert_eq!(script.views[2].dealer_value, 16);
    assert_eq!(script.outcomes, vec![settlement]);
}

#[test]
fn invalid_wager_from_frontend_is_rejected() {
    let mut game = Game::new(TableOptions::default(), "Ada", 1);
    let mut script = Script {
        wager: Some(chips(5000)),
        ..Script::default()
    };

    let err = game.play(&mut script).unwrap_err();

    assert_eq!(err, SessionError::Bet(BetError::TooLarge { available: chips(1000) }));
    assert_eq!(game.player.purse, chips(1000));
    assert_eq!(game.state(), GameState::Betting);
}

#[test]
fn closed_frontend_stops_the_session() {
    let mut game = Game::new(TableOptions::default(), "Ada", 2);
    let mut script = Script {
        wager: Some(chips(10)),
        ..Script::default()
    };

    let err = game.play(&mut script).unwrap_err();

    assert_eq!(err, SessionError::Frontend(FrontendError::Closed));
    assert_eq!(game.rounds_settled(), 1);
    assert_eq!(game.state(), GameState::RoundEnd);
}

#[test]
fn short_deck_aborts_round_and_refunds() {
    let mut game = Game::new(TableOptions::default(), "Ada", 1);
    game.deck = Deck::arranged(&[
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Six),
    ]);
    let mut script = Script {
        wager: Some(chips(100)),
        ..Script::default()
    };

    let err = game.play_round(&mut script).unwrap_err();

    assert_eq!(
        err,
        SessionError::Deal(DealError::Deck(DeckError::Empty {
            requested: 4,
            remaining: 2
        }))
    );
    assert_eq!(err.deck_error(), Some(DeckError::Empty { requested: 4, remaining: 2 }));
    assert_eq!(game.player.purse, chips(1000));
    assert_eq!(game.player.bet, Money::ZERO);
    assert_eq!(game.state(), GameState::RoundEnd);
    assert!(script.outcomes.is_empty());

    // The table can still carry on with a fresh deck.
    game.next_round(Continue::Continue).unwrap();
    assert_eq!(game.state(), GameState::Betting);
}

#[test]
fn deck_running_out_mid_turn_aborts_round() {
    let mut game = Game::new(TableOptions::default(), "Ada", 1);
    game.deck = Deck::arranged(&[
        card(Suit::Spades, Rank::Two),
        card(Suit::Hearts, Rank::Six),
        card(Suit::Clubs, Rank::Three),
        card(Suit::Diamonds, Rank::Ten),
    ]);
    let mut script = Script {
        wager: Some(chips(50)),
        decisions: VecDeque::from([Decision::Hit]),
        ..Script::default()
    };

    let err = game.play_round(&mut script).unwrap_err();

    assert_eq!(
        err,
        SessionError::Action(ActionError::Deck(DeckError::Empty {
            requested: 1,
            remaining: 0
        }))
    );
    assert_eq!(game.player.purse, chips(1000));
    assert_eq!(game.state(), GameState::RoundEnd);
}
