extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use tracing::debug;

use crate::error::RoundError;
use crate::eval::{self, BLACKJACK, DealerPolicy};
use crate::hand::Seat;
use crate::table::{CardSupply, Chips, Pointer, PointerAction, PointerEvent, PointerTarget};

use super::schedule::Sequence;
use super::{RoundEvent, RoundMachine, RoundPhase};

impl<S, C, P> RoundMachine<S, C, P>
where
    S: CardSupply,
    C: Chips,
    P: Pointer,
{
    /// Forwards chip selection and dragging, and places the bet when the
    /// pointer is released over a valid selection.
    pub(super) fn betting(&mut self, events: &[PointerEvent], out: &mut Vec<RoundEvent>) {
        match self.pointer.target() {
            Some(PointerTarget::Chip(chip)) => self.chips.select_chips_above(chip),
            Some(PointerTarget::Other) | None => self.chips.deselect_chips(),
        }

        for event in events {
            match event.action {
                PointerAction::Down | PointerAction::Held => {
                    self.pointer.set_detect_new_targets(false);
                    self.chips.move_selected_chips(self.pointer.position());
                }
                PointerAction::Up => {
                    self.pointer.set_detect_new_targets(true);
                    if self.chips.attempt_place_selected_bet() {
                        debug!("bet placed");
                        self.set_phase(RoundPhase::DealerShouldDeal, out);
                        return;
                    }
                }
            }
        }
    }

    /// A tap deals the player a card; holding for the stay threshold hands
    /// the round to the dealer.
    pub(super) fn player_turn(
        &mut self,
        events: &[PointerEvent],
        out: &mut Vec<RoundEvent>,
    ) -> Result<(), RoundError> {
        if self.options.settle_naturals && eval::is_blackjack(&self.player) {
            self.settle_natural(out);
            return Ok(());
        }

        for event in events {
            match event.action {
                PointerAction::Down => self.pressed_at = Some(event.at),
                PointerAction::Held => {
                    if self.held_long_enough(event) {
                        self.stay(out);
                    }
                }
                PointerAction::Up => {
                    if self.held_long_enough(event) {
                        self.stay(out);
                    } else if self.pressed_at.take().is_some() {
                        self.hit(out)?;
                    }
                }
            }

            if self.phase != RoundPhase::PlayerTurn {
                break;
            }
        }
        Ok(())
    }

    fn held_long_enough(&self, event: &PointerEvent) -> bool {
        self.pressed_at
            .is_some_and(|start| event.at.saturating_sub(start) >= self.options.stay_hold_time)
    }

    fn stay(&mut self, out: &mut Vec<RoundEvent>) {
        self.pressed_at = None;
        debug!("player stays");
        self.set_phase(RoundPhase::DealerRevealHole, out);
    }

    fn hit(&mut self, out: &mut Vec<RoundEvent>) -> Result<(), RoundError> {
        self.deal_card(Seat::Player, true, out)?;
        let sum = self.evaluate_seat(Seat::Player, out);
        debug!(sum, "player hits");
        if sum > BLACKJACK {
            self.set_phase(RoundPhase::DealerWin, out);
        }
        Ok(())
    }

    fn settle_natural(&mut self, out: &mut Vec<RoundEvent>) {
        self.pressed_at = None;
        self.reveal_hole(out);
        let next = if eval::is_blackjack(&self.dealer) {
            RoundPhase::Push
        } else {
            RoundPhase::PlayerWin
        };
        debug!(?next, "player natural settles immediately");
        self.set_phase(next, out);
    }

    /// Stands, busts, or launches a delayed hit, by house policy.
    pub(super) fn dealer_turn(&mut self, out: &mut Vec<RoundEvent>) {
        let dealer_sum = self.evaluate_seat(Seat::Dealer, out);

        match eval::dealer_policy(dealer_sum) {
            DealerPolicy::MustStay => {
                let player_sum = self.evaluate_seat(Seat::Player, out);
                let next = match player_sum.cmp(&dealer_sum) {
                    Ordering::Less => RoundPhase::DealerWin,
                    Ordering::Greater => RoundPhase::PlayerWin,
                    Ordering::Equal => RoundPhase::Push,
                };
                self.set_phase(next, out);
            }
            DealerPolicy::Busted => self.set_phase(RoundPhase::PlayerWin, out),
            DealerPolicy::MustHit => {
                debug!(dealer_sum, "dealer hits");
                self.set_phase(RoundPhase::DealerDealing, out);
                self.launch(Sequence::dealer_hit(self.options.dealer_hit_delay));
            }
        }
    }
}
