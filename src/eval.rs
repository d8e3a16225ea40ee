//! Hand evaluation: sums with soft-ace correction, blackjack detection, and
//! the dealer's drawing policy.
//!
//! These are plain functions over a [`Hand`]. The only side effect is the
//! in-place correction of a soft ace from 11 to 1, which is reported back in
//! the [`Evaluation`] so the caller knows exactly which cards changed.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{ACE_HIGH, ACE_LOW, Card};
use crate::hand::Hand;

/// Highest sum that does not bust.
pub const BLACKJACK: u32 = 21;

/// Lowest sum the dealer stands on (hard or soft).
pub const DEALER_STANDS_ON: u32 = 17;

const ACE_CORRECTION: u32 = (ACE_HIGH - ACE_LOW) as u32;

/// What the dealer must do with a given sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerPolicy {
    /// Sum is below 17; the dealer draws.
    MustHit,
    /// Sum is 17 through 21; the dealer stands.
    MustStay,
    /// Sum is over 21.
    Busted,
}

/// A soft ace that was recounted as 1 during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AceCorrection {
    /// Index of the card within its hand.
    pub index: usize,
    /// The card after correction.
    pub card: Card,
}

/// Result of evaluating a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The final sum. May exceed 21 when no soft ace was left to correct.
    pub sum: u32,
    /// Aces corrected during this pass, in the order they were corrected.
    pub corrections: Vec<AceCorrection>,
}

impl Evaluation {
    /// Returns whether the final sum is a bust.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.sum > BLACKJACK
    }
}

/// Sums the hand, correcting soft aces left to right until the sum is at
/// most 21 or no soft ace remains.
pub fn evaluate(hand: &mut Hand) -> Evaluation {
    let mut sum = hand.raw_sum();
    let mut corrections = Vec::new();
    let soft_aces = hand.cards().iter().filter(|c| c.is_soft_ace()).count();

    for (index, card) in hand.cards_mut().iter_mut().enumerate() {
        if sum <= BLACKJACK {
            break;
        }
        if let Some(card) = card.correct_ace() {
            sum -= ACE_CORRECTION;
            corrections.push(AceCorrection { index, card });
        }
    }

    debug_assert!(corrections.len() <= soft_aces);
    Evaluation { sum, corrections }
}

/// Sums the hand with soft-ace correction and returns the final sum.
///
/// A sum above 21 means the hand is bust.
pub fn sum_and_correct(hand: &mut Hand) -> u32 {
    evaluate(hand).sum
}

/// Returns the dealer's policy for `sum`.
#[must_use]
pub const fn dealer_policy(sum: u32) -> DealerPolicy {
    if sum < DEALER_STANDS_ON {
        DealerPolicy::MustHit
    } else if sum <= BLACKJACK {
        DealerPolicy::MustStay
    } else {
        DealerPolicy::Busted
    }
}

/// Returns whether the hand is a natural: exactly two cards valued 10 and 11.
///
/// Runs on the values as dealt. A two-card hand never needs correction to
/// reach 21, so a natural is never disturbed by [`sum_and_correct`].
#[must_use]
pub fn is_blackjack(hand: &Hand) -> bool {
    matches!(
        hand.cards(),
        [a, b] if matches!((a.value(), b.value()), (10, ACE_HIGH) | (ACE_HIGH, 10))
    )
}
