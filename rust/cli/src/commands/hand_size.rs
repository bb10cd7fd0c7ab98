use crate::error::CliError;
use std::io::Write;
use sushigo_engine::rules::hand_size;

pub fn handle_hand_size_command(players: usize, out: &mut dyn Write) -> Result<(), CliError> {
    let size = hand_size(players)?;
    writeln!(out, "{}", size)?;
    Ok(())
}
