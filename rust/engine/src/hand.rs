use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::RulesError;

/// Cards held by a single player.
///
/// A hand only ever shrinks by [`Hand::remove_card`] and grows by
/// [`Hand::add_chopsticks`]; the driver owns everything else.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|&&c| c == card).count()
    }

    /// Removes the first copy of `card`.
    ///
    /// # Errors
    ///
    /// [`RulesError::CardNotFound`] if the hand holds no such card; the hand
    /// is left untouched.
    pub fn remove_card(&mut self, card: Card) -> Result<(), RulesError> {
        let index = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(RulesError::CardNotFound(card))?;
        self.cards.remove(index);
        Ok(())
    }

    /// Distinct kinds currently held.
    pub fn unique_cards(&self) -> BTreeSet<Card> {
        self.cards.iter().copied().collect()
    }

    pub fn add_chopsticks(&mut self) {
        self.cards.push(Card::Chopsticks);
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

impl AsRef<[Card]> for Hand {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}
