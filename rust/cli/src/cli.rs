//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "sushigo",
    version,
    about = "Sushi Go scoring rules: decks, hand sizes and round scores"
)]
pub struct SushiGoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print how many cards each player is dealt
    HandSize {
        #[arg(long)]
        players: usize,
    },
    /// Print a shuffled 108-card deck, one card per line
    Deck {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Deal one hand per player from a seeded deck
    Deal {
        #[arg(long)]
        players: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Score one played sequence (JSON array of card names)
    Score {
        #[arg(long)]
        input: String,
        #[arg(long)]
        pretty: bool,
    },
    /// Score a round: maki majorities plus combos (JSON array of arrays)
    Round {
        #[arg(long)]
        input: String,
        #[arg(long)]
        pretty: bool,
    },
    /// End-of-game pudding bonuses and penalties (JSON array of arrays)
    Puddings {
        #[arg(long)]
        input: String,
        #[arg(long)]
        pretty: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Subcommand names as typed on the command line.
pub const COMMANDS: &[&str] = &[
    "hand-size", "deck", "deal", "score", "round", "puddings", "cfg",
];
