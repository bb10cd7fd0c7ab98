//! Deal command handler.
//!
//! Shuffles a seeded deck and deals one hand per player, sized by the
//! player count. Without a seed a random one is drawn and reported on the
//! first line so the deal can be repeated.

use crate::error::CliError;
use crate::formatters::format_cards;
use std::io::Write;
use sushigo_engine::deck::Deck;
use tracing::info;

pub fn handle_deal_command(
    players: usize,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(base_seed);
    deck.shuffle();
    let hands = deck.deal_hands(players)?;
    info!(seed = base_seed, players, remaining = deck.remaining(), "dealt");

    writeln!(out, "Seed: {}", base_seed)?;
    for (i, hand) in hands.iter().enumerate() {
        writeln!(out, "P{}: {}", i + 1, format_cards(hand.cards()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deals_one_line_per_player() {
        let mut out = Vec::new();
        handle_deal_command(3, Some(42), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Seed: 42");
        assert!(lines[1].starts_with("P1: "));
        assert_eq!(lines[3].trim_start_matches("P3: ").split(", ").count(), 9);
    }

    #[test]
    fn same_seed_same_deal() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_deal_command(2, Some(12345), &mut out1).unwrap();
        handle_deal_command(2, Some(12345), &mut out2).unwrap();
        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn unsupported_table_writes_nothing() {
        let mut out = Vec::new();
        assert!(handle_deal_command(1, Some(1), &mut out).is_err());
        assert!(out.is_empty());
    }
}
