//! Terminal blackjack table.

use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::{
    Card, Continue, Decision, Frontend, FrontendError, Game, Money, Outcome, RoundingMode,
    SessionOutcome, Settlement, Suit, TableOptions, TableView, parse_wager,
};
use clap::{Parser, ValueEnum};
use dialoguer::Input;

#[derive(Parser)]
#[command(name = "bjsolo", about = "Play single-player blackjack in the terminal")]
struct Args {
    /// Player name (asked for when omitted)
    #[arg(long)]
    name: Option<String>,

    /// Shuffle seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Purse to sit down with
    #[arg(long, default_value = "1000")]
    purse: Money,

    /// Profit ratio paid on a natural 21
    #[arg(long, default_value_t = 1.5)]
    blackjack_pays: f64,

    /// Rounding for natural bonuses that fall between thousandths of a chip
    #[arg(long, value_enum, default_value_t = Rounding::Down)]
    rounding: Rounding,

    /// Dealer stands on this total or higher
    #[arg(long, default_value_t = 17)]
    dealer_stands_on: u8,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let options = TableOptions::default()
        .with_starting_purse(args.purse)
        .with_blackjack_pays(args.blackjack_pays)
        .with_rounding_blackjack(args.rounding.into())
        .with_dealer_stands_on(args.dealer_stands_on);

    let seed = args.seed.unwrap_or_else(clock_seed);

    println!("Welcome to the blackjack table. Good luck!");
    let name = match args.name {
        Some(name) => name,
        None => Input::<String>::new()
            .with_prompt("Your name")
            .interact_text()?,
    };

    let mut game = Game::new(options, name.as_str(), seed);
    log::info!("game {} for player {} seeded with {seed}", game.id(), game.player.id);
    println!("\nGreat to meet you, {name}! Let's play.");

    let mut terminal = Terminal { name };
    let summary = game.play(&mut terminal)?;

    match summary.outcome {
        SessionOutcome::Broke => println!(
            "You're out of money after {} round(s). Thanks for playing, {}!",
            summary.rounds, terminal.name
        ),
        SessionOutcome::Quit => println!(
            "Leaving with ${} after {} round(s). Good luck, {}!",
            summary.purse, summary.rounds, terminal.name
        ),
    }

    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Rounding {
    Down,
    Up,
    Nearest,
}

impl From<Rounding> for RoundingMode {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::Down => Self::Down,
            Rounding::Up => Self::Up,
            Rounding::Nearest => Self::Nearest,
        }
    }
}

struct Terminal {
    name: String,
}

fn closed(err: dialoguer::Error) -> FrontendError {
    log::error!("input failed: {err}");
    FrontendError::Closed
}

impl Frontend for Terminal {
    fn request_wager(&mut self, purse: Money) -> Result<Money, FrontendError> {
        println!("Your current cash: ${purse}");
        let text = Input::<String>::new()
            .with_prompt("What would you like to wager?")
            .validate_with(move |input: &String| parse_wager(input, purse).map(|_| ()))
            .interact_text()
            .map_err(closed)?;

        // Already validated above.
        parse_wager(&text, purse).map_err(|_| FrontendError::Closed)
    }

    fn request_decision(&mut self) -> Result<Decision, FrontendError> {
        let text = Input::<String>::new()
            .with_prompt("Would you like to HIT or STAY?")
            .validate_with(|input: &String| input.parse::<Decision>().map(|_| ()))
            .interact_text()
            .map_err(closed)?;

        text.parse().map_err(|_| FrontendError::Closed)
    }

    fn request_continue(&mut self) -> Result<Continue, FrontendError> {
        let text = Input::<String>::new()
            .with_prompt("Would you like to keep playing? y/n")
            .validate_with(|input: &String| input.parse::<Continue>().map(|_| ()))
            .interact_text()
            .map_err(closed)?;

        text.parse().map_err(|_| FrontendError::Closed)
    }

    fn render_state(&mut self, view: &TableView) {
        let dealer = if view.hole_hidden {
            format!("{} ??", format_cards(&view.dealer))
        } else {
            format_cards(&view.dealer)
        };

        println!();
        println!(
            "   {}: {} (total {})",
            self.name,
            format_cards(&view.player),
            view.player_value
        );
        println!("   Dealer: {dealer} (showing {})", view.dealer_value);
        println!("------------------------------------------------------");
        println!("Your current wager: ${}", view.bet);
    }

    fn render_outcome(&mut self, settlement: &Settlement) {
        let bet = settlement.bet;
        let message = match settlement.outcome {
            Outcome::PlayerBlackjack => {
                format!("Blackjack! {} wins ${}!", self.name, settlement.payout - bet)
            }
            Outcome::PlayerBust => format!("Bust! {} loses ${bet}.", self.name),
            Outcome::DealerBust => format!("Dealer busts! {} wins ${bet}!", self.name),
            Outcome::Push => "Push. Your wager is returned.".to_string(),
            Outcome::DealerWin => format!("Dealer wins. {} loses ${bet}.", self.name),
            Outcome::PlayerWin => format!("You beat the dealer! {} wins ${bet}!", self.name),
        };

        let code = if settlement.outcome.is_win() { "32" } else { "33" };
        println!("{}", colorize(&message, code));
        println!("Your current cash: ${}\n", settlement.purse);
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_and_purse_are_parsed_by_clap() {
        let args = Args::try_parse_from(["bjsolo", "--rounding", "nearest", "--purse", "250.5"])
            .unwrap();
        assert!(matches!(
            RoundingMode::from(args.rounding),
            RoundingMode::Nearest
        ));
        assert_eq!(args.purse, Money::from_mills(250_500));

        let defaults = Args::try_parse_from(["bjsolo"]).unwrap();
        assert!(matches!(RoundingMode::from(defaults.rounding), RoundingMode::Down));
        assert_eq!(defaults.purse, Money::from_chips(1000));

        assert!(Args::try_parse_from(["bjsolo", "--rounding", "sideways"]).is_err());
        assert!(Args::try_parse_from(["bjsolo", "--purse", "ten"]).is_err());
    }
}
