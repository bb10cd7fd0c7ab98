//! Command handler modules for the sushigo CLI.
//!
//! Each command lives in its own file and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`, writing to
//! the `&mut dyn Write` streams it is given.

mod cfg;
mod deal;
mod deck;
mod hand_size;
mod puddings;
mod round;
mod score;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use deck::handle_deck_command;
pub use hand_size::handle_hand_size_command;
pub use puddings::handle_puddings_command;
pub use round::handle_round_command;
pub use score::handle_score_command;
