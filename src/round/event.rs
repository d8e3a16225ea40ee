//! Effects a round reports back to renderers.

use crate::card::Card;
use crate::hand::Seat;
use crate::options::Position;
use crate::result::RoundOutcome;

use super::phase::RoundPhase;

/// Something that happened during a tick.
///
/// Events are returned in the order they happened. A renderer that mirrors
/// card values should apply [`RoundEvent::AceCorrected`] before showing sums,
/// since the correction is the authoritative value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundEvent {
    /// The phase moved.
    PhaseChanged {
        /// The phase that was left.
        from: RoundPhase,
        /// The phase that was entered.
        to: RoundPhase,
    },
    /// A card was dealt.
    CardDealt {
        /// Who received the card.
        seat: Seat,
        /// Index of the card in the receiving hand.
        index: usize,
        /// The card as dealt.
        card: Card,
        /// Where the card lands on the table.
        placement: Position,
    },
    /// The dealer's hole card was turned face up.
    HoleRevealed {
        /// Index of the hole card in the dealer's hand.
        index: usize,
        /// The card after reveal.
        card: Card,
    },
    /// A soft ace was recounted as 1.
    AceCorrected {
        /// Whose hand the ace is in.
        seat: Seat,
        /// Index of the ace in that hand.
        index: usize,
        /// The ace after correction.
        card: Card,
    },
    /// The round was settled.
    Settled(RoundOutcome),
    /// Both hands were cleared for the next round.
    HandsCleared,
}
