//! `sixmax eval`: scores card tokens with the hand evaluator.

use std::collections::HashSet;
use std::io::Write;

use sixmax_engine::cards::{format_cards, parse_cards, Card};
use sixmax_engine::hand::best_of;

use crate::error::CliError;

/// Prints the best five card hand for `cards` (hole cards, or hole cards
/// followed by the board) and an optional separate `board`.
pub fn handle_eval_command(
    cards: &[String],
    board: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut all = parse_cards(&cards.join(" "))?;
    if let Some(b) = board {
        if all.len() != 2 {
            return Err(CliError::InvalidInput(format!(
                "expected 2 hole cards with --board, got {}",
                all.len()
            )));
        }
        all.extend(parse_cards(b)?);
    }
    if !(5..=7).contains(&all.len()) {
        return Err(CliError::InvalidInput(format!(
            "expected 5 to 7 cards in total, got {}",
            all.len()
        )));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = all.iter().find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!("duplicate card {}", dup)));
    }

    let hole: [Card; 2] = [all[0], all[1]];
    let rank = best_of(&hole, &all[2..])?;
    writeln!(out, "[{}] [{}]: {}", format_cards(&hole), format_cards(&all[2..]), rank)?;
    Ok(())
}
