//! Error types for round operations.

use thiserror::Error;

use crate::hand::Seat;

/// Errors that stop a round.
///
/// Every variant is fatal for the round in progress: the machine does not
/// retry, it stays in the phase it was in when the error surfaced, and every
/// later tick returns the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The card supply could not produce a card.
    #[error("card supply exhausted while dealing to the {seat:?}")]
    CardSupplyExhausted {
        /// The seat that was being dealt to.
        seat: Seat,
    },
}

/// Errors in round configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The stay hold time is zero.
    #[error("stay hold time must be greater than zero")]
    ZeroStayHoldTime,
}
