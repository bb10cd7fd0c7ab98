use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::Card;

const DUMPLING_POINTS: [u32; 6] = [0, 1, 3, 6, 10, 15];

/// Per-category points for one played sequence.
/// Maki rolls and puddings are scored across hands and never appear here.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub dumplings: u32,
    pub sashimi: u32,
    pub tempura: u32,
    /// Face value of every nigiri, paired with wasabi or not
    pub nigiri: u32,
    /// Extra points from nigiri played onto wasabi
    pub wasabi: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.dumplings + self.sashimi + self.tempura + self.nigiri + self.wasabi
    }
}

fn count_of(cards: &[Card], kind: Card) -> usize {
    cards.iter().filter(|&&c| c == kind).count()
}

/// Number of pudding cards in `cards`.
pub fn pudding_count(cards: &[Card]) -> usize {
    count_of(cards, Card::Pudding)
}

/// Total roll icons across the maki cards in `cards`.
pub fn maki_count(cards: &[Card]) -> u32 {
    cards.iter().map(|c| c.maki_value()).sum()
}

/// Scores one played sequence category by category.
///
/// `cards` must be in play order: a wasabi only boosts a nigiri played after it.
/// Each wasabi takes the nearest later nigiri that no earlier wasabi has
/// already claimed.
pub fn score_breakdown(cards: &[Card]) -> ScoreBreakdown {
    let dumplings = count_of(cards, Card::Dumpling).min(DUMPLING_POINTS.len() - 1);
    let sashimi = count_of(cards, Card::Sashimi) as u32;
    let tempura = count_of(cards, Card::Tempura) as u32;

    ScoreBreakdown {
        dumplings: DUMPLING_POINTS[dumplings],
        sashimi: sashimi / 3 * 10,
        tempura: tempura / 2 * 5,
        nigiri: cards.iter().map(|c| c.nigiri_value()).sum(),
        wasabi: wasabi_bonus(cards),
    }
}

/// Scores one played sequence; see [`score_breakdown`].
///
/// # Examples
///
/// ```
/// use sushigo_engine::cards::Card::*;
/// use sushigo_engine::scoring::calc_score;
///
/// assert_eq!(calc_score(&[]), 0);
/// assert_eq!(calc_score(&[Wasabi, SquidNigiri, Wasabi, SalmonNigiri, EggNigiri]), 16);
/// assert_eq!(calc_score(&[SquidNigiri, Wasabi]), 3);
/// ```
pub fn calc_score(cards: &[Card]) -> u32 {
    score_breakdown(cards).total()
}

fn wasabi_bonus(cards: &[Card]) -> u32 {
    // Unclaimed nigiri positions, ascending.
    let mut open: VecDeque<usize> = cards
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_nigiri())
        .map(|(i, _)| i)
        .collect();

    let mut bonus = 0;
    for (w, _) in cards.iter().enumerate().filter(|&(_, &c)| c == Card::Wasabi) {
        // Nigiri before this wasabi can never be claimed by a later one either.
        while open.front().is_some_and(|&n| n < w) {
            open.pop_front();
        }
        let Some(n) = open.pop_front() else {
            break;
        };
        let extra = cards[n].nigiri_value() * 2;
        trace!(wasabi = w, nigiri = n, card = %cards[n], extra, "wasabi paired");
        bonus += extra;
    }
    bonus
}
