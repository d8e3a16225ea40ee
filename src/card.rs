//! Card types.

/// Value an ace carries when it is dealt.
pub const ACE_HIGH: u8 = 11;

/// Value an ace carries after it has been corrected to avoid a bust.
pub const ACE_LOW: u8 = 1;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

const fn preset_value(rank: u8) -> u8 {
    match rank {
        1 => ACE_HIGH,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// A playing card on the table.
///
/// The suit and rank are the card's identity. `value` is what the card counts
/// for in a hand sum; it starts at the preset value for the rank and only
/// ever changes when an ace is corrected from 11 to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    value: u8,
    face_up: bool,
}

impl Card {
    /// Creates a new face-down card with the preset value for its rank.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted and count for 0.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            value: preset_value(rank),
            face_up: false,
        }
    }

    /// Returns the value this card currently counts for.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Returns whether this is an ace still counted as 11.
    #[must_use]
    pub const fn is_soft_ace(&self) -> bool {
        self.value == ACE_HIGH
    }

    /// Turns the card face up.
    pub const fn reveal(&mut self) {
        self.face_up = true;
    }

    /// Turns the card face down.
    pub const fn conceal(&mut self) {
        self.face_up = false;
    }

    /// Recounts a soft ace as 1 and returns the corrected card.
    ///
    /// Returns `None` and leaves the card untouched if it is not a soft ace.
    pub const fn correct_ace(&mut self) -> Option<Self> {
        if self.is_soft_ace() {
            self.value = ACE_LOW;
            Some(*self)
        } else {
            None
        }
    }
}
