extern crate alloc;

use alloc::vec::Vec;

use tracing::{debug, error, info};

use crate::error::RoundError;
use crate::eval;
use crate::hand::{Hand, Seat};
use crate::table::{CardSupply, Chips, Pointer};

use super::{RoundEvent, RoundMachine};

impl<S, C, P> RoundMachine<S, C, P>
where
    S: CardSupply,
    C: Chips,
    P: Pointer,
{
    const fn hand_mut(&mut self, seat: Seat) -> &mut Hand {
        match seat {
            Seat::Player => &mut self.player,
            Seat::Dealer => &mut self.dealer,
        }
    }

    /// Draws a card for `seat` and places it in the next slot of that hand.
    pub(super) fn deal_card(
        &mut self,
        seat: Seat,
        face_up: bool,
        out: &mut Vec<RoundEvent>,
    ) -> Result<usize, RoundError> {
        let Some(mut card) = self.supply.draw_next_card() else {
            error!(?seat, "card supply exhausted");
            return Err(RoundError::CardSupplyExhausted { seat });
        };
        if face_up {
            card.reveal();
        } else {
            card.conceal();
        }

        let index = self.hand_mut(seat).add_card(card);
        if seat == Seat::Dealer && !face_up {
            self.hole_index = Some(index);
        }

        let placement = self.options.layout.placement(seat, index);
        debug!(?seat, index, rank = card.rank, value = card.value(), face_up, "card dealt");
        out.push(RoundEvent::CardDealt {
            seat,
            index,
            card,
            placement,
        });
        Ok(index)
    }

    /// Sums `seat`'s hand, correcting soft aces in place, and reports each
    /// correction.
    pub(super) fn evaluate_seat(&mut self, seat: Seat, out: &mut Vec<RoundEvent>) -> u32 {
        let evaluation = eval::evaluate(self.hand_mut(seat));
        for correction in &evaluation.corrections {
            debug!(?seat, index = correction.index, "soft ace counted as 1");
            out.push(RoundEvent::AceCorrected {
                seat,
                index: correction.index,
                card: correction.card,
            });
        }
        evaluation.sum
    }

    pub(super) fn reveal_hole(&mut self, out: &mut Vec<RoundEvent>) {
        let Some(index) = self.hole_index.take() else {
            return;
        };
        if let Some(card) = self.dealer.reveal(index) {
            debug!(index, rank = card.rank, "hole card revealed");
            out.push(RoundEvent::HoleRevealed { index, card });
        }
    }

    pub(super) fn clear_hands(&mut self, out: &mut Vec<RoundEvent>) {
        self.player.clear();
        self.dealer.clear();
        self.hole_index = None;
        self.pressed_at = None;
        info!("table cleared for the next round");
        out.push(RoundEvent::HandsCleared);
    }
}
