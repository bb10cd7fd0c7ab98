use crate::error::CliError;
use crate::formatters::{write_json, ScoreReport};
use crate::io_utils::read_cards;
use std::io::Write;
use sushigo_engine::scoring::score_breakdown;

/// Scores the played sequence in `input` and prints the breakdown as JSON.
pub fn handle_score_command(
    input: &str,
    pretty: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = read_cards(input)?;
    let report = ScoreReport::from(score_breakdown(&cards));
    write_json(out, &report, pretty)
}
