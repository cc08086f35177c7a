//! Appends played hands to a history file.
//!
//! The text format starts a new file with the `Poker Hand Log` header and
//! writes every hand as its history lines closed by a separator. The JSONL
//! format writes one [`HandRecord`] per line.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use sixmax_engine::logger::{format_hand_id, log_header, HandRecord};
use sixmax_engine::session::HandSummary;

use crate::error::CliError;
use crate::io_utils::{ensure_parent_dir, is_empty_file};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HistoryFormat {
    #[default]
    Text,
    Jsonl,
}

/// Builds the JSONL record for a finished hand. Hand ids are
/// `<seed>-<hand number>` so a record can be traced back to its run.
pub fn hand_record(hand: &HandSummary, seed: u64) -> HandRecord {
    HandRecord {
        hand_id: format_hand_id(&seed.to_string(), hand.hand_no),
        seed: Some(seed),
        button_seat: hand.button_seat,
        board: hand.outcome.board.clone(),
        pot: hand.outcome.pot,
        winners: hand.outcome.winners.clone(),
        showdown: hand.outcome.showdown.clone(),
        history: hand.history.clone(),
    }
}

#[derive(Debug)]
pub struct HandLogWriter {
    path: PathBuf,
    out: BufWriter<File>,
    format: HistoryFormat,
    seed: u64,
    written: u64,
}

impl HandLogWriter {
    /// Opens `path` for appending, creating it (and its directory) if
    /// needed. A new text log gets the header first.
    pub fn open(path: &Path, format: HistoryFormat, seed: u64) -> std::io::Result<Self> {
        ensure_parent_dir(path)?;
        let fresh = is_empty_file(path);
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut out = BufWriter::new(file);
        if fresh && format == HistoryFormat::Text {
            for line in log_header() {
                writeln!(out, "{}", line)?;
            }
        }
        Ok(Self {
            path: path.to_path_buf(),
            out,
            format,
            seed,
            written: 0,
        })
    }

    pub fn append(&mut self, hand: &HandSummary) -> Result<(), CliError> {
        match self.format {
            HistoryFormat::Text => {
                for line in hand.history.lines() {
                    writeln!(self.out, "{}", line)?;
                }
            }
            HistoryFormat::Jsonl => {
                let line = hand_record(hand, self.seed).to_jsonl()?;
                writeln!(self.out, "{}", line)?;
            }
        }
        self.written += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes and returns the number of hands written.
    pub fn finish(mut self) -> std::io::Result<u64> {
        self.out.flush()?;
        Ok(self.written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sixmax_engine::config::SessionConfig;
    use sixmax_engine::session::Session;
    use sixmax_ai::simple::PassivePolicy;

    fn two_hands() -> Vec<HandSummary> {
        let mut session = Session::new(SessionConfig {
            hands: 2,
            seed: 5,
            ..SessionConfig::default()
        })
        .unwrap();
        let mut policies = vec![PassivePolicy; 6];
        session.run(&mut policies).unwrap()
    }

    #[test]
    fn text_log_gets_one_header_across_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs/hands.txt");
        let hands = two_hands();
        for hand in &hands {
            let mut w = HandLogWriter::open(&path, HistoryFormat::Text, 5).unwrap();
            w.append(hand).unwrap();
            assert_eq!(w.finish().unwrap(), 1);
        }
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("Poker Hand Log").count(), 1);
        assert!(text.starts_with(&format!("Poker Hand Log\n{}\n", "=".repeat(40))));
        assert_eq!(text.matches(&format!("\n{}\n", "-".repeat(40))).count(), 2);
        assert!(text.contains("Hand #2: button is seat 2"));
    }

    #[test]
    fn jsonl_has_one_record_per_hand() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hands.jsonl");
        let mut w = HandLogWriter::open(&path, HistoryFormat::Jsonl, 5).unwrap();
        for hand in &two_hands() {
            w.append(hand).unwrap();
        }
        assert_eq!(w.path(), path.as_path());
        w.finish().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let records: Vec<HandRecord> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].hand_id, "5-000001");
        assert_eq!(records[1].button_seat, 1);
    }
}
