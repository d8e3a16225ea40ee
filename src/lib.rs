//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`RoundMachine`] that runs one player against the
//! house: betting, a timed initial deal, hit-or-stay by pointer tap or hold,
//! the dealer's draw-to-17 policy, and settlement. Rendering, chips, and the
//! card supply live outside the engine and are reached through the traits in
//! [`table`].
//!
//! # Example
//!
//! ```no_run
//! use core::time::Duration;
//! use bjround::{ChipId, Position, Pointer, PointerTarget, RoundMachine, RoundOptions, Shoe};
//! use bjround::{BetDesk, Settlement};
//!
//! struct Chips;
//!
//! impl BetDesk for Chips {
//!     fn select_chips_above(&mut self, _chip: ChipId) {}
//!     fn deselect_chips(&mut self) {}
//!     fn move_selected_chips(&mut self, _to: Position) {}
//!     fn attempt_place_selected_bet(&mut self) -> bool {
//!         true
//!     }
//! }
//!
//! impl Settlement for Chips {
//!     fn dealer_collects_bet(&mut self) {}
//!     fn dealer_pays(&mut self, _blackjack: bool) {}
//!     fn player_collects(&mut self) {}
//! }
//!
//! struct Crosshair;
//!
//! impl Pointer for Crosshair {
//!     fn target(&self) -> Option<PointerTarget> {
//!         None
//!     }
//!     fn position(&self) -> Position {
//!         Position::default()
//!     }
//!     fn set_detect_new_targets(&mut self, _detect: bool) {}
//! }
//!
//! let mut round = RoundMachine::new(RoundOptions::default(), Shoe::new(6, 42), Chips, Crosshair)
//!     .expect("default options are valid");
//! let events = round.tick(&[], Duration::from_millis(16));
//! let _ = events;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod eval;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod shoe;
pub mod table;

// Re-export main types
pub use card::{ACE_HIGH, ACE_LOW, Card, DECK_SIZE, Suit};
pub use error::{OptionsError, RoundError};
pub use eval::{
    AceCorrection, BLACKJACK, DEALER_STANDS_ON, DealerPolicy, Evaluation, dealer_policy, evaluate,
    is_blackjack, sum_and_correct,
};
pub use hand::{Hand, Seat};
pub use options::{CardLayout, HoleCard, Position, RoundOptions};
pub use result::{RoundOutcome, Winner};
pub use round::{RoundEvent, RoundMachine, RoundPhase};
pub use shoe::Shoe;
pub use table::{
    BetDesk, CardSupply, ChipId, Chips, Pointer, PointerAction, PointerEvent, PointerTarget,
    Settlement,
};
