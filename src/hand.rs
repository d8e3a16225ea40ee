//! Hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Who a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The single player at the table.
    Player,
    /// The house dealer.
    Dealer,
}

/// An ordered hand of cards.
///
/// Insertion order is deal order, which is also the visual slot order used
/// for card placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand from cards in deal order.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand and returns its index.
    pub fn add_card(&mut self, card: Card) -> usize {
        self.cards.push(card);
        self.cards.len() - 1
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Turns the card at `index` face up and returns it.
    pub fn reveal(&mut self, index: usize) -> Option<Card> {
        let card = self.cards.get_mut(index)?;
        card.reveal();
        Some(*card)
    }

    /// Sums the current card values without correcting anything.
    #[must_use]
    pub fn raw_sum(&self) -> u32 {
        self.cards.iter().map(|c| u32::from(c.value())).sum()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card from the hand.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
