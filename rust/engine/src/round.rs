use tracing::debug;

use crate::cards::Card;
use crate::scoring::{calc_score, maki_count};

/// Points for the most maki rolls in a round.
pub const MAKI_FIRST: u32 = 6;
/// Points for the second most maki rolls in a round.
pub const MAKI_SECOND: u32 = 3;

/// Maki majority points for each hand, aligned with `counts`.
///
/// Ties for first split [`MAKI_FIRST`] and cancel second place. A tie for
/// second splits [`MAKI_SECOND`]. Splits round down.
pub fn maki_awards(counts: &[u32]) -> Vec<u32> {
    let mut awards = vec![0; counts.len()];
    let mut ranked = counts.to_vec();
    ranked.sort_unstable_by(|a, b| b.cmp(a));
    let Some(&first) = ranked.first() else {
        return awards;
    };
    let second = ranked.get(1).copied();

    let holding = |target: Option<u32>| -> Vec<usize> {
        counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| Some(c) == target)
            .map(|(i, _)| i)
            .collect()
    };

    if second == Some(first) {
        let winners = holding(Some(first));
        debug!(?winners, count = first, "maki tie for first");
        split(&mut awards, &winners, MAKI_FIRST);
    } else {
        // A tie for second shares the runner-up points. With a single hand
        // there is no runner-up and the group is empty.
        let winners = holding(Some(first));
        let seconds = holding(second);
        debug!(?winners, ?seconds, "maki placings");
        split(&mut awards, &winners, MAKI_FIRST);
        split(&mut awards, &seconds, MAKI_SECOND);
    }
    awards
}

fn split(awards: &mut [u32], group: &[usize], points: u32) {
    if group.is_empty() {
        return;
    }
    let share = points / group.len() as u32;
    for &i in group {
        awards[i] += share;
    }
}

/// Scores a finished round: maki majorities plus each hand's own combos.
///
/// The result is aligned with `hands`. Puddings are left for
/// [`crate::pudding::calc_puddings`] at the end of the game.
///
/// # Examples
///
/// ```
/// use sushigo_engine::cards::Card::*;
/// use sushigo_engine::round::calc_round;
///
/// let hands = vec![
///     vec![MakiRoll],
///     vec![ThreeMakiRoll, MakiRoll],
///     vec![MakiRoll, MakiRoll, Dumpling],
///     vec![MakiRoll, MakiRoll, MakiRoll, Sashimi, Sashimi, Sashimi],
/// ];
/// assert_eq!(calc_round(&hands), vec![0, 6, 1, 13]);
/// ```
pub fn calc_round<H: AsRef<[Card]>>(hands: &[H]) -> Vec<u32> {
    let counts: Vec<u32> = hands.iter().map(|h| maki_count(h.as_ref())).collect();
    maki_awards(&counts)
        .into_iter()
        .zip(hands)
        .map(|(maki, hand)| maki + calc_score(hand.as_ref()))
        .collect()
}
