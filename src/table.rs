//! Contracts for the collaborators a round drives.
//!
//! The round engine never renders, shuffles, or moves money. It reaches the
//! rest of the table through these traits, which are injected when a
//! [`RoundMachine`](crate::RoundMachine) is built. Each trait is also
//! implemented for `&mut T`, so callers may lend collaborators instead of
//! handing them over.

use core::time::Duration;

use crate::card::Card;
use crate::options::Position;

/// Source of cards.
pub trait CardSupply {
    /// Draws the next card, face down, with its preset value.
    ///
    /// Returning `None` ends the round with
    /// [`RoundError::CardSupplyExhausted`](crate::RoundError::CardSupplyExhausted).
    fn draw_next_card(&mut self) -> Option<Card>;
}

/// Chip handling while the player is betting.
pub trait BetDesk {
    /// Selects the targeted chip and every chip stacked above it.
    fn select_chips_above(&mut self, chip: ChipId);

    /// Drops the current chip selection.
    fn deselect_chips(&mut self);

    /// Moves the selected chips to follow the pointer.
    fn move_selected_chips(&mut self, to: Position);

    /// Tries to place the selected chips as the bet. Returns whether a bet
    /// was placed.
    fn attempt_place_selected_bet(&mut self) -> bool;
}

/// Chip movements when a round is settled.
pub trait Settlement {
    /// The dealer takes the player's bet.
    fn dealer_collects_bet(&mut self);

    /// The dealer pays the player, at the blackjack rate when `blackjack`.
    fn dealer_pays(&mut self, blackjack: bool);

    /// The player takes back the chips in the betting area.
    fn player_collects(&mut self);
}

/// A chip collaborator handles both betting and settlement.
pub trait Chips: BetDesk + Settlement {}

impl<T: BetDesk + Settlement + ?Sized> Chips for T {}

/// Identifier of a chip object on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChipId(pub u32);

/// The object the pointer is currently aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerTarget {
    /// A chip.
    Chip(ChipId),
    /// Anything that is not a chip.
    Other,
}

/// Pointer state beyond the discrete button events.
pub trait Pointer {
    /// Returns what the pointer is aimed at, if anything.
    fn target(&self) -> Option<PointerTarget>;

    /// Returns the pointer position in table space.
    fn position(&self) -> Position;

    /// Enables or disables picking up new targets. Disabled while chips are
    /// being dragged so the selection does not jump.
    fn set_detect_new_targets(&mut self, detect: bool);
}

/// Kind of pointer button event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// Button went down.
    Down,
    /// Button is still down.
    Held,
    /// Button was released.
    Up,
}

/// A timestamped pointer button event.
///
/// Timestamps are measured on the same clock as the round: the sum of every
/// `elapsed` passed to [`RoundMachine::tick`](crate::RoundMachine::tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerEvent {
    /// What happened.
    pub action: PointerAction,
    /// When it happened.
    pub at: Duration,
}

impl PointerEvent {
    /// Creates a button-down event.
    #[must_use]
    pub const fn down(at: Duration) -> Self {
        Self {
            action: PointerAction::Down,
            at,
        }
    }

    /// Creates a button-held event.
    #[must_use]
    pub const fn held(at: Duration) -> Self {
        Self {
            action: PointerAction::Held,
            at,
        }
    }

    /// Creates a button-up event.
    #[must_use]
    pub const fn up(at: Duration) -> Self {
        Self {
            action: PointerAction::Up,
            at,
        }
    }
}

impl<T: CardSupply + ?Sized> CardSupply for &mut T {
    fn draw_next_card(&mut self) -> Option<Card> {
        (**self).draw_next_card()
    }
}

impl<T: BetDesk + ?Sized> BetDesk for &mut T {
    fn select_chips_above(&mut self, chip: ChipId) {
        (**self).select_chips_above(chip);
    }

    fn deselect_chips(&mut self) {
        (**self).deselect_chips();
    }

    fn move_selected_chips(&mut self, to: Position) {
        (**self).move_selected_chips(to);
    }

    fn attempt_place_selected_bet(&mut self) -> bool {
        (**self).attempt_place_selected_bet()
    }
}

impl<T: Settlement + ?Sized> Settlement for &mut T {
    fn dealer_collects_bet(&mut self) {
        (**self).dealer_collects_bet();
    }

    fn dealer_pays(&mut self, blackjack: bool) {
        (**self).dealer_pays(blackjack);
    }

    fn player_collects(&mut self) {
        (**self).player_collects();
    }
}

impl<T: Pointer + ?Sized> Pointer for &mut T {
    fn target(&self) -> Option<PointerTarget> {
        (**self).target()
    }

    fn position(&self) -> Position {
        (**self).position()
    }

    fn set_detect_new_targets(&mut self, detect: bool) {
        (**self).set_detect_new_targets(detect);
    }
}
