//! Output formatting shared by the commands.

use std::io::Write;

use serde::Serialize;
use sushigo_engine::{Card, ScoreBreakdown};

use crate::error::CliError;

/// Combo breakdown plus its total, as printed by `score`.
#[derive(Debug, Serialize)]
pub struct ScoreReport {
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
    pub total: u32,
}

impl From<ScoreBreakdown> for ScoreReport {
    fn from(breakdown: ScoreBreakdown) -> Self {
        Self {
            total: breakdown.total(),
            breakdown,
        }
    }
}

/// Write `value` as one JSON document followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(
    out: &mut dyn Write,
    value: &T,
    pretty: bool,
) -> Result<(), CliError> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(out, "{}", s)?;
    Ok(())
}

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
