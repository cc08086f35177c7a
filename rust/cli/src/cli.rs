//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sixmax_engine::chips::Chips;

use crate::config::Overrides;
use crate::hand_log::HistoryFormat;

#[derive(Parser, Debug)]
#[command(
    name = "sixmax",
    version,
    about = "Six-max no-limit hold'em hand simulator"
)]
pub struct SixmaxCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a number of hands between policies and write the hand log
    Sim {
        #[command(flatten)]
        table: TableArgs,
        /// History file to append to
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = HistoryFormat::Text)]
        format: HistoryFormat,
    },
    /// Play one seeded hand and print its history
    Deal {
        #[command(flatten)]
        table: TableArgs,
    },
    /// Score hole cards against a board, e.g. `eval As Kd --board "Qh Jc Ts"`
    Eval {
        /// Two hole cards, or five to seven cards when no board is given
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Three to five community cards
        #[arg(long)]
        board: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg {
        #[command(flatten)]
        table: TableArgs,
    },
}

/// Settings shared by every command that sets up a table.
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// TOML configuration file (overrides SIXMAX_CONFIG)
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub hands: Option<u64>,
    /// Starting stack in big blinds, up to two decimals
    #[arg(long)]
    pub stack: Option<Chips>,
    /// One policy name for every seat, or six comma separated names
    #[arg(long)]
    pub policy: Option<String>,
    /// Button seat for the first hand
    #[arg(long)]
    pub button: Option<usize>,
}

impl TableArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            config_path: self.config.clone(),
            seed: self.seed,
            hands: self.hands,
            stack: self.stack,
            policy: self.policy.clone(),
            button: self.button,
        }
    }
}
