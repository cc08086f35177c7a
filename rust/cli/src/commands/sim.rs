//! `sixmax sim`: plays a session and appends its hands to a history file.

use std::io::Write;
use std::path::Path;

use sixmax_engine::chips::Chips;
use sixmax_engine::session::Session;
use tracing::{info, warn};

use crate::cli::TableArgs;
use crate::error::CliError;
use crate::hand_log::{HandLogWriter, HistoryFormat};
use crate::ui;

/// Plays up to `hands` hands with stacks carried over and prints a summary.
///
/// A hand aborted by a policy violation is reported on `err` and counts
/// toward the hand limit; an engine invariant failure stops the run.
pub fn handle_sim_command(
    table: &TableArgs,
    output: Option<&Path>,
    format: HistoryFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = super::resolve(table, err)?.config;
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let mut session = Session::new(cfg.session(seed))?;
    let mut policies = sixmax_ai::table_policies(&cfg.policy, seed)?;
    let mut log = match output {
        Some(path) => match HandLogWriter::open(path, format, seed) {
            Ok(w) => Some(w),
            Err(e) => {
                let msg = format!("failed to open {}: {}", path.display(), e);
                return Err(CliError::Io(std::io::Error::new(e.kind(), msg)));
            }
        },
        None => None,
    };
    info!(seed, hands = cfg.hands, policy = %cfg.policy, "simulation started");

    let mut played = 0u64;
    let mut aborted = 0u64;
    let mut showdowns = 0u64;
    for _ in 0..cfg.hands {
        if !session.can_continue() {
            break;
        }
        match session.play_hand(&mut policies) {
            Ok(hand) => {
                played += 1;
                if hand.outcome.reached_showdown() {
                    showdowns += 1;
                }
                if let Some(w) = log.as_mut() {
                    w.append(&hand)?;
                }
            }
            Err(e) if e.is_recoverable() => {
                aborted += 1;
                warn!(error = %e, "hand aborted");
                ui::display_warning(err, &format!("hand aborted: {}", e))?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    writeln!(out, "Simulated: {} hands", played)?;
    writeln!(out, "{}", ui::field_line("Seed", seed))?;
    writeln!(out, "{}", ui::field_line("Policy", &cfg.policy))?;
    writeln!(out, "{}", ui::field_line("Showdowns", showdowns))?;
    if aborted > 0 {
        writeln!(out, "{}", ui::field_line("Aborted", aborted))?;
    }
    for p in session.players() {
        let (sign, delta) = if p.stack() >= cfg.starting_stack {
            ('+', p.stack() - cfg.starting_stack)
        } else {
            ('-', cfg.starting_stack - p.stack())
        };
        writeln!(
            out,
            "{}",
            ui::field_line(&format!("Seat {}", p.seat() + 1), format!("{} ({}{})", p.stack(), sign, delta))
        )?;
    }
    let total: Chips = session.total_chips();
    writeln!(out, "{}", ui::field_line("Table total", total))?;

    if let Some(w) = log {
        let path = w.path().to_path_buf();
        let n = w.finish()?;
        writeln!(out, "Wrote {} hands to {}", n, path.display())?;
    }
    Ok(())
}
