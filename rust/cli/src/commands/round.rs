use crate::error::CliError;
use crate::formatters::write_json;
use crate::io_utils::read_hands;
use crate::ui;
use std::io::Write;
use sushigo_engine::round::calc_round;

/// Prints the per-player round scores (maki plus combos) as a JSON array.
pub fn handle_round_command(
    input: &str,
    pretty: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let hands = read_hands(input)?;
    if hands.is_empty() {
        ui::display_warning(err, "input contains no hands")?;
    }
    write_json(out, &calc_round(&hands), pretty)
}
