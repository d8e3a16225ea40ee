//! Round result types for settlement.

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// Player wins (dealer busts or player has the higher sum).
    Player,
    /// Dealer wins (player busts or dealer has the higher sum).
    Dealer,
    /// Push (tie); the bet is returned.
    Push,
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Who won.
    pub winner: Winner,
    /// The player's final sum.
    pub player_sum: u32,
    /// The dealer's sum at settlement, hole card included.
    pub dealer_sum: u32,
    /// Whether the player held a natural. Only pays extra on a player win.
    pub player_blackjack: bool,
}
