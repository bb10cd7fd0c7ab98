//! Reading played cards from JSON input files.
//!
//! Card names are the engine's serde names (`"wasabi"`, `"squidNigiri"`,
//! `"twoMakiRoll"`, ...). A single played sequence is a JSON array of names;
//! a round or a whole game is an array of such arrays, one per player.

use std::path::Path;

use serde::de::DeserializeOwned;
use sushigo_engine::Card;

use crate::error::CliError;

/// Read a text file, stripping a UTF-8 BOM if present.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, CliError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        CliError::InvalidInput(format!("cannot read {}: {}", path.display(), e))
    })?;
    Ok(content
        .strip_prefix('\u{feff}')
        .map(str::to_string)
        .unwrap_or(content))
}

fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, CliError> {
    let path = path.as_ref();
    let text = read_text(path)?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::InvalidInput(format!("{}: {}", path.display(), e)))
}

/// One played sequence, in play order.
pub fn read_cards<P: AsRef<Path>>(path: P) -> Result<Vec<Card>, CliError> {
    read_json(path)
}

/// One sequence per player.
pub fn read_hands<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<Card>>, CliError> {
    read_json(path)
}
