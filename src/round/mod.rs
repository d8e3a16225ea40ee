//! Round engine and phase management.

extern crate alloc;

use alloc::vec::Vec;
use core::time::Duration;

use tracing::debug;

use crate::error::{OptionsError, RoundError};
use crate::eval::{self, DealerPolicy};
use crate::hand::Hand;
use crate::options::RoundOptions;
use crate::result::{RoundOutcome, Winner};
use crate::table::{CardSupply, Chips, Pointer, PointerEvent};

mod dealing;
pub mod event;
pub mod phase;
mod schedule;
mod settle;
mod turns;

pub use event::RoundEvent;
pub use phase::RoundPhase;

use schedule::{Sequence, Step};

/// A single-player blackjack round engine.
///
/// The machine is advanced by calling [`tick`](Self::tick) once per frame.
/// Each tick advances the round clock, resumes the in-flight dealing or reset
/// sequence if its delay has elapsed, runs one step of the current phase, and
/// resumes again so a sequence launched by that step starts in the same tick.
///
/// A new machine starts in [`RoundPhase::Resetting`] with an empty table and
/// enters [`RoundPhase::Betting`] on the first tick.
pub struct RoundMachine<S, C, P> {
    options: RoundOptions,
    supply: S,
    chips: C,
    pointer: P,
    phase: RoundPhase,
    player: Hand,
    dealer: Hand,
    /// Index of the face-down dealer card, until it is revealed.
    hole_index: Option<usize>,
    sequence: Option<Sequence>,
    /// Round clock: the sum of every tick's elapsed time.
    now: Duration,
    /// When the pointer went down during the player's turn.
    pressed_at: Option<Duration>,
    last_outcome: Option<RoundOutcome>,
    /// Set by the first error; every later tick returns it.
    failed: Option<RoundError>,
}

impl<S, C, P> RoundMachine<S, C, P>
where
    S: CardSupply,
    C: Chips,
    P: Pointer,
{
    /// Creates a new round engine with its collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`RoundOptions::validate`].
    pub fn new(
        options: RoundOptions,
        supply: S,
        chips: C,
        pointer: P,
    ) -> Result<Self, OptionsError> {
        options.validate()?;

        Ok(Self {
            options,
            supply,
            chips,
            pointer,
            phase: RoundPhase::Resetting,
            player: Hand::new(),
            dealer: Hand::new(),
            hole_index: None,
            sequence: Some(Sequence::reset(Duration::ZERO)),
            now: Duration::ZERO,
            pressed_at: None,
            last_outcome: None,
            failed: None,
        })
    }

    /// Advances the round by one frame.
    ///
    /// `events` are the pointer events seen since the previous tick, in
    /// order; `elapsed` is the time since the previous tick. Returns what
    /// happened, in order.
    ///
    /// The events go to the phase that is current after the in-flight
    /// sequence has resumed, so a press in the frame that enters
    /// [`RoundPhase::PlayerTurn`] counts.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::CardSupplyExhausted`] if a card could not be
    /// drawn. The machine is then frozen: every later tick returns the same
    /// error without advancing the clock or touching the hands.
    pub fn tick(
        &mut self,
        events: &[PointerEvent],
        elapsed: Duration,
    ) -> Result<Vec<RoundEvent>, RoundError> {
        if let Some(err) = self.failed {
            return Err(err);
        }
        self.now += elapsed;

        let mut out = Vec::new();
        self.advance(events, &mut out)
            .inspect_err(|&err| self.failed = Some(err))?;
        Ok(out)
    }

    fn advance(
        &mut self,
        events: &[PointerEvent],
        out: &mut Vec<RoundEvent>,
    ) -> Result<(), RoundError> {
        self.resume_sequence(out)?;
        self.step(events, out)?;
        self.resume_sequence(out)
    }

    fn step(
        &mut self,
        events: &[PointerEvent],
        out: &mut Vec<RoundEvent>,
    ) -> Result<(), RoundError> {
        match self.phase {
            RoundPhase::Betting => self.betting(events, out),
            RoundPhase::DealerShouldDeal => {
                self.set_phase(RoundPhase::DealerDealing, out);
                self.launch(Sequence::initial_deal(
                    self.options.deal_delay,
                    self.options.hole_card,
                ));
            }
            RoundPhase::DealerDealing | RoundPhase::Resetting => {}
            RoundPhase::PlayerTurn => self.player_turn(events, out)?,
            RoundPhase::DealerRevealHole => {
                self.reveal_hole(out);
                self.set_phase(RoundPhase::DealerTurn, out);
            }
            RoundPhase::DealerTurn => self.dealer_turn(out),
            RoundPhase::PlayerWin => self.settle(Winner::Player, out),
            RoundPhase::DealerWin => self.settle(Winner::Dealer, out),
            RoundPhase::Push => self.settle(Winner::Push, out),
        }
        Ok(())
    }

    fn launch(&mut self, sequence: Sequence) {
        debug_assert!(self.sequence.is_none(), "a sequence is already in flight");
        debug_assert!(self.phase.is_pinned(), "sequence launched in {:?}", self.phase);
        self.sequence = Some(sequence);
    }

    fn resume_sequence(&mut self, out: &mut Vec<RoundEvent>) -> Result<(), RoundError> {
        while let Some(step) = self
            .sequence
            .as_mut()
            .and_then(|seq| seq.next_ready(self.now))
        {
            match step {
                Step::Wait(_) => {}
                Step::Deal { seat, face_up } => {
                    self.deal_card(seat, face_up, out)?;
                }
                Step::ClearHands => self.clear_hands(out),
                Step::Enter(phase) => self.set_phase(phase, out),
            }
        }

        if self.sequence.as_ref().is_some_and(Sequence::is_finished) {
            self.sequence = None;
        }
        Ok(())
    }

    fn set_phase(&mut self, to: RoundPhase, out: &mut Vec<RoundEvent>) {
        let from = self.phase;
        if from == to {
            return;
        }
        debug!(?from, ?to, "phase changed");
        self.phase = to;
        out.push(RoundEvent::PhaseChanged { from, to });
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the options the round was built with.
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the round clock.
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Returns whether a dealing or reset sequence is in flight.
    pub const fn is_sequence_active(&self) -> bool {
        self.sequence.is_some()
    }

    /// Returns the outcome of the most recently settled round.
    pub const fn last_outcome(&self) -> Option<RoundOutcome> {
        self.last_outcome
    }

    /// Returns what the dealer must do with the current dealer hand.
    ///
    /// Computed on a copy of the hand, so no ace is corrected in place.
    pub fn dealer_policy(&self) -> DealerPolicy {
        let mut hand = self.dealer.clone();
        eval::dealer_policy(eval::sum_and_correct(&mut hand))
    }

    /// Returns the card supply.
    pub const fn supply(&self) -> &S {
        &self.supply
    }

    /// Returns the card supply mutably, e.g. to refill a shoe between rounds.
    pub const fn supply_mut(&mut self) -> &mut S {
        &mut self.supply
    }

    /// Returns the chip collaborator.
    pub const fn chips(&self) -> &C {
        &self.chips
    }

    /// Returns the pointer collaborator.
    pub const fn pointer(&self) -> &P {
        &self.pointer
    }

    /// Returns the pointer collaborator mutably.
    pub const fn pointer_mut(&mut self) -> &mut P {
        &mut self.pointer
    }
}
