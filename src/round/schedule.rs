//! Timed step sequences.
//!
//! A sequence is a list of steps run in order. `Wait` suspends the sequence
//! until the round clock has advanced by the given delay; every other step
//! runs as soon as it is reached. The machine owns at most one sequence at a
//! time, and the phase stays pinned until the sequence enters the next one.

extern crate alloc;

use alloc::collections::VecDeque;
use core::time::Duration;

use crate::hand::Seat;
use crate::options::HoleCard;

use super::phase::RoundPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Step {
    Wait(Duration),
    Deal { seat: Seat, face_up: bool },
    ClearHands,
    Enter(RoundPhase),
}

#[derive(Debug, Clone)]
pub(super) struct Sequence {
    steps: VecDeque<Step>,
    resume_at: Option<Duration>,
}

impl Sequence {
    fn from_steps(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            resume_at: None,
        }
    }

    /// Player, dealer, player, dealer, with `delay` after each card.
    pub(super) fn initial_deal(delay: Duration, hole_card: HoleCard) -> Self {
        let (first_up, second_up) = match hole_card {
            HoleCard::First => (false, true),
            HoleCard::Second => (true, false),
        };

        Self::from_steps([
            Step::Deal {
                seat: Seat::Player,
                face_up: true,
            },
            Step::Wait(delay),
            Step::Deal {
                seat: Seat::Dealer,
                face_up: first_up,
            },
            Step::Wait(delay),
            Step::Deal {
                seat: Seat::Player,
                face_up: true,
            },
            Step::Wait(delay),
            Step::Deal {
                seat: Seat::Dealer,
                face_up: second_up,
            },
            Step::Wait(delay),
            Step::Enter(RoundPhase::PlayerTurn),
        ])
    }

    pub(super) fn dealer_hit(delay: Duration) -> Self {
        Self::from_steps([
            Step::Wait(delay),
            Step::Deal {
                seat: Seat::Dealer,
                face_up: true,
            },
            Step::Enter(RoundPhase::DealerTurn),
        ])
    }

    pub(super) fn reset(delay: Duration) -> Self {
        Self::from_steps([
            Step::Wait(delay),
            Step::ClearHands,
            Step::Enter(RoundPhase::Betting),
        ])
    }

    /// Returns the next step that is ready to run at `now`.
    ///
    /// Waits are consumed here; a wait starts counting from the first call
    /// that reaches it.
    pub(super) fn next_ready(&mut self, now: Duration) -> Option<Step> {
        loop {
            match *self.steps.front()? {
                Step::Wait(delay) => {
                    let resume_at = *self.resume_at.get_or_insert(now + delay);
                    if now < resume_at {
                        return None;
                    }
                    self.resume_at = None;
                    self.steps.pop_front();
                }
                _ => return self.steps.pop_front(),
            }
        }
    }

    pub(super) fn is_finished(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn waits_hold_back_later_steps() {
        let mut seq = Sequence::reset(Duration::from_millis(100));

        assert_eq!(seq.next_ready(Duration::ZERO), None);
        assert_eq!(seq.next_ready(Duration::from_millis(99)), None);
        assert_eq!(
            seq.next_ready(Duration::from_millis(100)),
            Some(Step::ClearHands)
        );
        assert_eq!(
            seq.next_ready(Duration::from_millis(100)),
            Some(Step::Enter(RoundPhase::Betting))
        );
        assert!(seq.is_finished());
    }

    #[test]
    fn zero_wait_passes_immediately() {
        let mut seq = Sequence::reset(Duration::ZERO);
        assert_eq!(seq.next_ready(Duration::from_secs(3)), Some(Step::ClearHands));
    }

    #[test]
    fn initial_deal_follows_hole_card_convention() {
        let deals = |hole| {
            let mut seq = Sequence::initial_deal(Duration::ZERO, hole);
            let mut out = Vec::new();
            while let Some(step) = seq.next_ready(Duration::ZERO) {
                out.push(step);
            }
            out
        };

        let second = deals(HoleCard::Second);
        assert_eq!(
            second[1],
            Step::Deal {
                seat: Seat::Dealer,
                face_up: true
            }
        );
        assert_eq!(
            second[3],
            Step::Deal {
                seat: Seat::Dealer,
                face_up: false
            }
        );
        assert_eq!(second[4], Step::Enter(RoundPhase::PlayerTurn));

        let first = deals(HoleCard::First);
        assert_eq!(
            first[1],
            Step::Deal {
                seat: Seat::Dealer,
                face_up: false
            }
        );
    }
}
