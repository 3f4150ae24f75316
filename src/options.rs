//! Table configuration options.

use crate::money::Money;

/// Rounding mode for natural bonuses that fall between thousandths of a
/// chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsolo::{Money, TableOptions};
///
/// let options = TableOptions::default()
///     .with_starting_purse(Money::from_chips(500))
///     .with_blackjack_pays(1.5)
///     .with_dealer_stands_on(17);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Purse the player sits down with.
    pub starting_purse: Money,
    /// Profit ratio paid on a natural (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding applied when the natural bonus is not a whole number of
    /// thousandths, which a 3:2 ratio never produces for wagers in cents.
    pub rounding_blackjack: RoundingMode,
    /// Dealer draws while below this total.
    pub dealer_stands_on: u8,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_purse: Money::from_chips(1000),
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            dealer_stands_on: 17,
        }
    }
}

impl TableOptions {
    /// Sets the starting purse.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Money, TableOptions};
    ///
    /// let options = TableOptions::default().with_starting_purse(Money::from_chips(250));
    /// assert_eq!(options.starting_purse.to_string(), "250");
    /// ```
    #[must_use]
    pub const fn with_starting_purse(mut self, purse: Money) -> Self {
        self.starting_purse = purse;
        self
    }

    /// Sets the natural payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for natural payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{RoundingMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }
}
