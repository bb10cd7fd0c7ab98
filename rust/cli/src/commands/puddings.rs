use crate::error::CliError;
use crate::formatters::write_json;
use crate::io_utils::read_hands;
use crate::ui;
use std::io::Write;
use sushigo_engine::pudding::calc_puddings;

/// Prints end-of-game pudding adjustments as a JSON array.
///
/// `input` should hold every card each player kept over the whole game.
pub fn handle_puddings_command(
    input: &str,
    pretty: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let hands = read_hands(input)?;
    if hands.is_empty() {
        ui::display_warning(err, "input contains no hands")?;
    }
    write_json(out, &calc_puddings(&hands), pretty)
}
