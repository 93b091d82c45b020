//! # Play Command
//!
//! Hot-seat five-card draw: both players share one terminal and take their
//! single exchange in turn.
//!
//! - The active player sees their hand with card ids and types the ids to
//!   discard, separated by commas or spaces
//! - A blank line keeps the whole hand
//! - `q`/`quit` (or end of input) forfeits the game for the active player
//! - Rejected input is reported on stderr and the prompt is repeated

use crate::commands::game_settings;
use crate::error::CliError;
use crate::formatters::{format_game_result, format_hand, format_hand_with_ids};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_discard_input};
use fivecard_engine::engine::Engine;
use fivecard_engine::game::GameState;
use fivecard_engine::hand::Hand;
use std::io::{BufRead, Write};

const PROMPT: &str = "Discard (card ids, blank keeps hand, q forfeits): ";

/// Handle the play command: one interactive game between two local players.
///
/// # Arguments
///
/// * `seed` - RNG seed for reproducibility (default: config, then random)
/// * `p1`, `p2` - Player names overriding the configuration
/// * `out` - Output stream for game display
/// * `err` - Error stream for rejected input
/// * `stdin` - Input stream for discard choices
pub fn handle_play_command(
    seed: Option<u64>,
    p1: Option<String>,
    p2: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = game_settings(seed, p1, p2)?;
    let mut eng = Engine::new(cfg.seed);
    let mut game = eng.new_game(&cfg.player_one, &cfg.player_two)?;
    writeln!(
        out,
        "Five-card draw: {} vs {} (seed {})",
        game.player_one_id(),
        game.player_two_id(),
        eng.seed()
    )?;

    while let Some(active) = game.active_player_id().cloned() {
        writeln!(out)?;
        writeln!(out, "{} to act", active)?;
        for line in format_hand_with_ids(active_hand(&game, active.as_str())?) {
            writeln!(out, "{}", line)?;
        }

        game = loop {
            ui::prompt(out, PROMPT)?;
            let Some(input) = read_stdin_line(stdin) else {
                writeln!(out)?;
                break eng.forfeit(&game, active.as_str())?;
            };
            match parse_discard_input(&input) {
                ParseResult::Discard(ids) => match eng.make_move(&game, active.as_str(), &ids) {
                    Ok((next, hand)) => {
                        writeln!(
                            out,
                            "{} discards {} and holds {}",
                            active,
                            ids.len(),
                            format_hand(&hand)
                        )?;
                        break next;
                    }
                    Err(e) => ui::write_error(err, &e.to_string())?,
                },
                ParseResult::Quit => break eng.forfeit(&game, active.as_str())?,
                ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            }
        };
    }

    writeln!(out)?;
    for line in format_game_result(&game) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn active_hand<'a>(game: &'a GameState, id: &str) -> Result<&'a Hand, CliError> {
    game.seat(id)
        .map(|seat| seat.hand())
        .ok_or_else(|| CliError::InvalidInput(format!("unknown player {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(seed: u64, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.to_string());
        let res = handle_play_command(
            Some(seed),
            Some("alice".into()),
            Some("bob".into()),
            &mut out,
            &mut err,
            &mut stdin,
        );
        (
            res,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn both_players_stand_pat() {
        let (res, out, err) = play(42, "\n\n");
        assert!(res.is_ok());
        assert!(err.is_empty());
        assert!(out.contains("alice to act"));
        assert!(out.contains("bob to act"));
        assert!(out.contains("alice discards 0"));
        assert!(out.contains("bob discards 0"));
        assert!(out.contains("Winner: ") || out.contains("Result: tie"));
    }

    #[test]
    fn quit_forfeits_for_active_player() {
        let (res, out, _) = play(42, "\nq\n");
        assert!(res.is_ok());
        assert!(out.contains("bob forfeits"));
        assert!(out.trim_end().ends_with("Winner: alice"));
    }

    #[test]
    fn end_of_input_forfeits() {
        let (res, out, _) = play(3, "");
        assert!(res.is_ok());
        assert!(out.contains("alice forfeits"));
    }

    #[test]
    fn bad_input_reprompts() {
        let six = "club_two,club_three,club_four,club_five,club_six,club_seven";
        let (res, out, err) = play(5, &format!("spade_one\n{}\n\n\n", six));
        assert!(res.is_ok());
        assert_eq!(err.lines().count(), 2);
        assert!(err.lines().all(|l| l.starts_with("Error: ")));
        assert_eq!(out.matches(PROMPT).count(), 4);
    }

    #[test]
    fn exchange_shows_new_hand() {
        let mut eng = Engine::new(Some(9));
        let game = eng.new_game("alice", "bob").unwrap();
        let ids = game.player_one_hand().ids()[..2].join(",");

        let (res, out, err) = play(9, &format!("{}\n\n", ids));
        assert!(res.is_ok(), "{:?} {}", res, err);
        assert!(out.contains("alice discards 2"));
    }
}
