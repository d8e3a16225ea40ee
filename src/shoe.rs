//! A shuffled shoe that can serve as the round's card supply.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::table::CardSupply;

/// A multi-deck shoe.
///
/// Cards are drawn from the end of the internal vector. A shoe never
/// reshuffles on its own; when it runs dry the round reports the supply as
/// exhausted and the caller decides whether to [`refill`](Self::refill).
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled shoe of `decks` decks from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{DECK_SIZE, Shoe};
    ///
    /// let shoe = Shoe::new(2, 42);
    /// assert_eq!(shoe.cards_remaining(), 2 * DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::shuffled(decks, &mut rng);
        Self { cards, decks, rng }
    }

    /// Creates a shoe that deals exactly `draws`, in order, then runs dry.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            decks: 0,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    fn shuffled(decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Replaces the remaining cards with freshly shuffled decks.
    pub fn refill(&mut self) {
        self.cards = Self::shuffled(self.decks, &mut self.rng);
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }
}

impl CardSupply for Shoe {
    fn draw_next_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}
