use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("Unsupported player count: {0} (only 2 to 5 players are allowed)")]
    UnsupportedPlayerCount(usize),
    #[error("Card {0} is not part of hand")]
    CardNotFound(Card),
    #[error("Unknown card name: {0}")]
    UnknownCard(String),
}
