use crate::errors::RulesError;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 5;

/// Returns how many cards each player is dealt at the start of a round.
///
/// # Errors
///
/// Returns [`RulesError::UnsupportedPlayerCount`] for anything outside
/// 2 to 5 players.
///
/// # Examples
///
/// ```
/// use sushigo_engine::rules::hand_size;
/// use sushigo_engine::errors::RulesError;
///
/// assert_eq!(hand_size(2), Ok(10));
/// assert_eq!(hand_size(5), Ok(7));
/// assert!(matches!(hand_size(6), Err(RulesError::UnsupportedPlayerCount(6))));
/// ```
pub fn hand_size(num_players: usize) -> Result<usize, RulesError> {
    match num_players {
        2 => Ok(10),
        3 => Ok(9),
        4 => Ok(8),
        5 => Ok(7),
        n => Err(RulesError::UnsupportedPlayerCount(n)),
    }
}

/// Convenience check used by callers validating input before dealing.
pub fn is_supported_player_count(num_players: usize) -> bool {
    (MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players)
}
