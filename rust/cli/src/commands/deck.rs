//! Deck command: print a shuffled deck, one card per line.

use crate::error::CliError;
use std::io::Write;
use sushigo_engine::deck::{get_deck, Deck};
use sushigo_engine::Card;
use tracing::debug;

/// Prints all 108 cards. With a seed the order is reproducible.
pub fn handle_deck_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let cards: Vec<Card> = match seed {
        Some(seed) => {
            debug!(seed, "seeded deck");
            let mut deck = Deck::new_with_seed(seed);
            deck.shuffle();
            std::iter::from_fn(|| deck.deal_card()).collect()
        }
        None => get_deck(),
    };
    for card in cards {
        writeln!(out, "{}", card)?;
    }
    Ok(())
}
