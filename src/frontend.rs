//! The presentation boundary.

use crate::error::FrontendError;
use crate::game::TableView;
use crate::input::{Continue, Decision};
use crate::money::Money;
use crate::result::Settlement;

/// Supplies player decisions and renders what the engine emits.
///
/// Implementations own all input handling, including re-prompting until an
/// answer is valid. Use [`parse_wager`](crate::parse_wager) and the
/// [`FromStr`](core::str::FromStr) impls of [`Decision`] and [`Continue`] to
/// check raw input.
pub trait Frontend {
    /// Asks for a wager. Must return a positive amount no larger than `purse`.
    ///
    /// # Errors
    ///
    /// Returns an error if no more input can be read.
    fn request_wager(&mut self, purse: Money) -> Result<Money, FrontendError>;

    /// Asks whether to hit or stand.
    ///
    /// # Errors
    ///
    /// Returns an error if no more input can be read.
    fn request_decision(&mut self) -> Result<Decision, FrontendError>;

    /// Asks whether to play another round.
    ///
    /// # Errors
    ///
    /// Returns an error if no more input can be read.
    fn request_continue(&mut self) -> Result<Continue, FrontendError>;

    /// Shows the visible table after dealing, hitting, and dealer play.
    fn render_state(&mut self, view: &TableView);

    /// Shows the result of a settled round.
    fn render_outcome(&mut self, settlement: &Settlement);
}
