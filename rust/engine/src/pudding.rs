use tracing::debug;

use crate::cards::Card;
use crate::scoring::pudding_count;

/// Points shared by the players holding the most puddings.
pub const PUDDING_AWARD: i32 = 6;

/// End-of-game pudding adjustments, aligned with `hands`.
///
/// Every hand at the highest count gains `6 / winners`; every hand at the
/// lowest count loses the same amount. When all counts are equal nobody
/// gains or loses.
///
/// Pass each player's full set of kept cards from the whole game.
///
/// # Examples
///
/// ```
/// use sushigo_engine::cards::Card::Pudding;
/// use sushigo_engine::pudding::calc_puddings;
///
/// let hands = vec![vec![Pudding], vec![], vec![Pudding], vec![Pudding, Pudding]];
/// assert_eq!(calc_puddings(&hands), vec![0, -6, 0, 6]);
/// ```
pub fn calc_puddings<H: AsRef<[Card]>>(hands: &[H]) -> Vec<i32> {
    let counts: Vec<usize> = hands.iter().map(|h| pudding_count(h.as_ref())).collect();
    pudding_awards(&counts)
}

/// Pudding adjustments for precomputed per-hand counts.
pub fn pudding_awards(counts: &[usize]) -> Vec<i32> {
    let mut scores = vec![0; counts.len()];
    let (Some(&win_count), Some(&lose_count)) = (counts.iter().max(), counts.iter().min()) else {
        return scores;
    };
    if win_count == lose_count {
        return scores;
    }

    let winners: Vec<usize> = (0..counts.len()).filter(|&i| counts[i] == win_count).collect();
    let losers: Vec<usize> = (0..counts.len()).filter(|&i| counts[i] == lose_count).collect();
    debug!(?winners, ?losers, win_count, lose_count, "pudding placings");

    // The penalty is divided by the number of winners, not losers.
    let share = PUDDING_AWARD / winners.len() as i32;
    for &i in &winners {
        scores[i] += share;
    }
    for &i in &losers {
        scores[i] -= share;
    }
    scores
}
