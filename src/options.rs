//! Round configuration options.

use core::time::Duration;

use crate::error::OptionsError;
use crate::hand::Seat;

/// A point in table space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Horizontal axis.
    pub x: f32,
    /// Vertical axis (card stacking depth).
    pub y: f32,
    /// Depth axis, away from the player.
    pub z: f32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Which dealer card in the initial deal is the hole card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HoleCard {
    /// The dealer's first card is face down.
    First,
    /// The dealer's second card is face down.
    #[default]
    Second,
}

/// Where dealt cards land on the table.
///
/// Player cards fan to the right and away from the player; dealer cards fan
/// to the left. Every card is raised by `card_depth` per slot so later cards
/// sit on top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    /// Anchor of the player's first card.
    pub player_spot: Position,
    /// Anchor of the dealer's first card.
    pub dealer_spot: Position,
    /// Horizontal step between player cards.
    pub player_horizontal_spacing: f32,
    /// Depth step between player cards.
    pub player_vertical_spacing: f32,
    /// Horizontal step between dealer cards.
    pub dealer_horizontal_spacing: f32,
    /// Height of a single card.
    pub card_depth: f32,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            player_spot: Position::new(0.0, 0.0, -0.2),
            dealer_spot: Position::new(0.0, 0.0, 0.2),
            player_horizontal_spacing: 0.03,
            player_vertical_spacing: 0.02,
            dealer_horizontal_spacing: 0.07,
            card_depth: 0.001,
        }
    }
}

impl CardLayout {
    /// Returns where the card at `index` of `seat`'s hand is placed.
    #[must_use]
    #[expect(
        clippy::suboptimal_flops,
        reason = "mul_add is not available without std"
    )]
    pub fn placement(&self, seat: Seat, index: usize) -> Position {
        let slot = index as f32;
        match seat {
            Seat::Player => Position::new(
                self.player_spot.x + self.player_horizontal_spacing * slot,
                self.player_spot.y + self.card_depth * slot,
                self.player_spot.z + self.player_vertical_spacing * slot,
            ),
            Seat::Dealer => Position::new(
                self.dealer_spot.x - self.dealer_horizontal_spacing * slot,
                self.dealer_spot.y + self.card_depth * slot,
                self.dealer_spot.z,
            ),
        }
    }
}

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use bjround::{HoleCard, RoundOptions};
///
/// let options = RoundOptions::default()
///     .with_stay_hold_time(Duration::from_millis(800))
///     .with_hole_card(HoleCard::First)
///     .with_settle_naturals(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOptions {
    /// How long the pointer must be held during the player's turn to stay.
    pub stay_hold_time: Duration,
    /// Pause between the steps of the initial deal.
    pub deal_delay: Duration,
    /// Pause before a dealer hit card lands.
    pub dealer_hit_delay: Duration,
    /// Pause between settlement and clearing the table.
    pub reset_delay: Duration,
    /// Card placement on the table.
    pub layout: CardLayout,
    /// Which dealer card is dealt face down.
    pub hole_card: HoleCard,
    /// Whether a player natural settles right after the initial deal instead
    /// of going through the dealer's turn.
    pub settle_naturals: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            stay_hold_time: Duration::from_millis(500),
            deal_delay: Duration::from_millis(100),
            dealer_hit_delay: Duration::from_millis(100),
            reset_delay: Duration::from_secs(1),
            layout: CardLayout::default(),
            hole_card: HoleCard::Second,
            settle_naturals: false,
        }
    }
}

impl RoundOptions {
    /// Sets how long the pointer must be held to stay.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_stay_hold_time(Duration::from_secs(1));
    /// assert_eq!(options.stay_hold_time, Duration::from_secs(1));
    /// ```
    #[must_use]
    pub const fn with_stay_hold_time(mut self, hold: Duration) -> Self {
        self.stay_hold_time = hold;
        self
    }

    /// Sets the pause between initial-deal steps.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_deal_delay(Duration::ZERO);
    /// assert_eq!(options.deal_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_deal_delay(mut self, delay: Duration) -> Self {
        self.deal_delay = delay;
        self
    }

    /// Sets the pause before a dealer hit card lands.
    #[must_use]
    pub const fn with_dealer_hit_delay(mut self, delay: Duration) -> Self {
        self.dealer_hit_delay = delay;
        self
    }

    /// Sets the pause between settlement and clearing the table.
    #[must_use]
    pub const fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    /// Sets the card layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: CardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets which dealer card is the hole card.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{HoleCard, RoundOptions};
    ///
    /// let options = RoundOptions::default().with_hole_card(HoleCard::First);
    /// assert_eq!(options.hole_card, HoleCard::First);
    /// ```
    #[must_use]
    pub const fn with_hole_card(mut self, hole_card: HoleCard) -> Self {
        self.hole_card = hole_card;
        self
    }

    /// Sets whether a player natural settles immediately.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_settle_naturals(true);
    /// assert!(options.settle_naturals);
    /// ```
    #[must_use]
    pub const fn with_settle_naturals(mut self, settle: bool) -> Self {
        self.settle_naturals = settle;
        self
    }

    /// Checks that the options describe a playable round.
    ///
    /// # Errors
    ///
    /// Returns an error if the stay hold time is zero, since a tap could then
    /// never be told apart from a hold.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.stay_hold_time.is_zero() {
            return Err(OptionsError::ZeroStayHoldTime);
        }
        Ok(())
    }
}
