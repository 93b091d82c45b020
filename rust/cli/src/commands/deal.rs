//! Deal command handler.
//!
//! Deals a single game and shows both starting hands with the card ids a
//! player would type to discard. `--json` prints the encoded game state
//! instead, suitable for feeding to another tool.

use crate::commands::game_settings;
use crate::error::CliError;
use crate::formatters::format_hand_with_ids;
use fivecard_engine::codec::encode_game;
use fivecard_engine::engine::Engine;
use std::io::Write;

pub fn handle_deal_command(
    seed: Option<u64>,
    p1: Option<String>,
    p2: Option<String>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = game_settings(seed, p1, p2)?;
    let mut eng = Engine::new(cfg.seed);
    let game = eng.new_game(&cfg.player_one, &cfg.player_two)?;

    if json {
        writeln!(out, "{}", encode_game(&game)?)?;
        return Ok(());
    }

    writeln!(out, "Seed: {}", eng.seed())?;
    for seat in [game.player_one(), game.player_two()] {
        writeln!(out, "{}:", seat.id())?;
        for line in format_hand_with_ids(seat.hand()) {
            writeln!(out, "{}", line)?;
        }
    }
    writeln!(out, "Deck: {} cards remaining", game.deck().remaining())?;
    Ok(())
}
