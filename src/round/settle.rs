extern crate alloc;

use alloc::vec::Vec;

use tracing::info;

use crate::eval;
use crate::hand::Seat;
use crate::result::{RoundOutcome, Winner};
use crate::table::{CardSupply, Chips, Pointer};

use super::schedule::Sequence;
use super::{RoundEvent, RoundMachine, RoundPhase};

impl<S, C, P> RoundMachine<S, C, P>
where
    S: CardSupply,
    C: Chips,
    P: Pointer,
{
    /// Moves the chips for a decided round and schedules the table reset.
    pub(super) fn settle(&mut self, winner: Winner, out: &mut Vec<RoundEvent>) {
        debug_assert!(self.phase.is_settling(), "settling from {:?}", self.phase);
        let player_sum = self.evaluate_seat(Seat::Player, out);
        let dealer_sum = self.evaluate_seat(Seat::Dealer, out);
        let player_blackjack = eval::is_blackjack(&self.player);

        match winner {
            Winner::Dealer => self.chips.dealer_collects_bet(),
            Winner::Player => {
                self.chips.dealer_pays(player_blackjack);
                self.chips.player_collects();
            }
            Winner::Push => self.chips.player_collects(),
        }

        let outcome = RoundOutcome {
            winner,
            player_sum,
            dealer_sum,
            player_blackjack,
        };
        info!(
            ?winner,
            player_sum, dealer_sum, player_blackjack, "round settled"
        );
        self.last_outcome = Some(outcome);
        out.push(RoundEvent::Settled(outcome));

        self.set_phase(RoundPhase::Resetting, out);
        self.launch(Sequence::reset(self.options.reset_delay));
    }
}
