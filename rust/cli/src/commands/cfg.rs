//! `sixmax cfg`: prints the resolved configuration as JSON, each value with
//! the layer it came from.
//!
//! ```json
//! {
//!   "seed": { "value": null, "source": "default" },
//!   "hands": { "value": 10, "source": "default" },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::cli::TableArgs;
use crate::config::ConfigResolved;
use crate::error::CliError;

pub fn handle_cfg_command(
    table: &TableArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = super::resolve(table, err)?;
    let display = serde_json::json!({
        "seed": { "value": config.seed, "source": sources.seed },
        "hands": { "value": config.hands, "source": sources.hands },
        "starting_stack": {
            "value": config.starting_stack.to_string(),
            "source": sources.starting_stack,
        },
        "small_blind": {
            "value": config.small_blind.to_string(),
            "source": sources.small_blind,
        },
        "big_blind": {
            "value": config.big_blind.to_string(),
            "source": sources.big_blind,
        },
        "policy": { "value": config.policy, "source": sources.policy },
        "button": { "value": config.button, "source": sources.button },
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
    Ok(())
}
