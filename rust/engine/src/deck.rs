use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::RulesError;
use crate::hand::Hand;
use crate::rules::hand_size;

/// Returns a freshly shuffled copy of the full deck.
///
/// Each call builds a new vector, so callers may mutate the result freely.
pub fn get_deck() -> Vec<Card> {
    let mut cards = full_deck();
    cards.shuffle(&mut rand::rng());
    cards
}

/// Seeded deck for reproducible deals.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep catalog order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Deals up to `size` cards; the hand comes up short if the deck runs dry.
    pub fn deal_hand(&mut self, size: usize) -> Hand {
        Hand::new((0..size).map_while(|_| self.deal_card()).collect())
    }

    /// Deals one full hand per player, sized for the table.
    pub fn deal_hands(&mut self, num_players: usize) -> Result<Vec<Hand>, RulesError> {
        let size = hand_size(num_players)?;
        Ok((0..num_players).map(|_| self.deal_hand(size)).collect())
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
