//! Round phase types.

/// Round phase.
///
/// Exactly one phase is active at a time. Phases ending in `Dealing` or
/// `Resetting` are pinned while a timed sequence runs; nothing else moves
/// the round forward until that sequence completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// Waiting for the player to place a bet.
    Betting,
    /// A bet is down; the initial deal starts on the next step.
    DealerShouldDeal,
    /// A dealing sequence is in flight.
    DealerDealing,
    /// Waiting for the player to hit (tap) or stay (hold).
    PlayerTurn,
    /// The player stayed; the hole card is turned over next.
    DealerRevealHole,
    /// The dealer draws to 17 or stands.
    DealerTurn,
    /// Player won; settlement runs next.
    PlayerWin,
    /// Dealer won; settlement runs next.
    DealerWin,
    /// Tie; settlement runs next.
    Push,
    /// Waiting to clear the table for the next round.
    Resetting,
}

impl RoundPhase {
    /// Returns whether a timed sequence owns the round in this phase.
    #[must_use]
    pub const fn is_pinned(self) -> bool {
        matches!(self, Self::DealerDealing | Self::Resetting)
    }

    /// Returns whether the round has been decided.
    #[must_use]
    pub const fn is_settling(self) -> bool {
        matches!(self, Self::PlayerWin | Self::DealerWin | Self::Push)
    }
}
