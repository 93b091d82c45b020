//! Command handler modules for the fivecard CLI.
//!
//! Each command lives in its own file and follows one pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) passed in
//! - Errors propagated via the `CliError` enum

mod cfg;
mod deal;
mod eval;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;

use crate::config::{self, Config};
use crate::error::CliError;
use crate::validation::validate_player_names;

/// Loads the configuration and applies command-line overrides on top.
pub(crate) fn game_settings(
    seed: Option<u64>,
    p1: Option<String>,
    p2: Option<String>,
) -> Result<Config, CliError> {
    let mut cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    apply_overrides(&mut cfg, seed, p1, p2)?;
    Ok(cfg)
}

fn apply_overrides(
    cfg: &mut Config,
    seed: Option<u64>,
    p1: Option<String>,
    p2: Option<String>,
) -> Result<(), CliError> {
    if seed.is_some() {
        cfg.seed = seed;
    }
    if let Some(name) = p1 {
        cfg.player_one = name;
    }
    if let Some(name) = p2 {
        cfg.player_two = name;
    }
    validate_player_names(&cfg.player_one, &cfg.player_two).map_err(CliError::InvalidInput)
}
