//! Command handlers, one module per subcommand.
//!
//! Each handler has the shape `handle_X_command(..., out, err) -> Result<(), CliError>`
//! and writes only to the streams it is given.

mod cfg;
mod deal;
mod eval;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use sim::handle_sim_command;

use std::io::Write;

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use crate::ui;

/// Resolves the configuration, reporting a failure on `err` first.
fn resolve(
    table: &crate::cli::TableArgs,
    err: &mut dyn Write,
) -> Result<ConfigResolved, CliError> {
    config::load_with_sources(&table.overrides()).map_err(|e| {
        let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
        CliError::Config(e)
    })
}
