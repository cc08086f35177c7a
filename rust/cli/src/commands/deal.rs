//! `sixmax deal`: plays one seeded hand and prints its full history.

use std::io::Write;

use sixmax_engine::cards::format_cards;
use sixmax_engine::session::Session;

use crate::cli::TableArgs;
use crate::error::CliError;
use crate::ui;

pub fn handle_deal_command(
    table: &TableArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = super::resolve(table, err)?.config;
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let mut session = Session::new(cfg.session(seed))?;
    let mut policies = sixmax_ai::table_policies(&cfg.policy, seed)?;
    let hand = session.play_hand(&mut policies)?;

    writeln!(out, "{}", ui::field_line("Seed", seed))?;
    for line in hand.history.lines() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", ui::field_line("Board", format_cards(&hand.outcome.board)))?;
    writeln!(out, "{}", ui::field_line("Pot", hand.outcome.pot))?;
    let winners: Vec<String> = hand.outcome.winners.iter().map(|s| format!("seat {}", s + 1)).collect();
    let result = match &hand.outcome.showdown {
        Some(sd) => format!("{} with {}", winners.join(", "), sd.rank),
        None => format!("{} uncontested", winners.join(", ")),
    };
    writeln!(out, "{}", ui::field_line("Winner", result))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(seed: u64) -> String {
        let table = TableArgs {
            seed: Some(seed),
            policy: Some("passive".into()),
            ..TableArgs::default()
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_deal_command(&table, &mut out, &mut err).unwrap();
        assert!(err.is_empty());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn same_seed_same_hand() {
        assert_eq!(deal(42), deal(42));
        assert_ne!(deal(42), deal(43));
    }

    #[test]
    fn passive_table_reaches_showdown_with_six_units() {
        let text = deal(7);
        assert!(text.starts_with("Seed:         7\n"));
        assert_eq!(text.matches(" received [").count(), 6);
        assert!(text.contains("*** River ***"));
        assert!(text.contains("Pot:          6.00"));
        assert!(text.contains(" with "));
    }
}
