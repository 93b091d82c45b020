//! Eval command handler: compare two hands given as card ids.

use crate::error::CliError;
use crate::formatters::{format_hand, format_outcome};
use crate::validation::parse_hand;
use fivecard_engine::hand::evaluate;
use std::io::Write;

pub fn handle_eval_command(hand1: &str, hand2: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let first = parse_hand(hand1).map_err(|e| CliError::InvalidInput(format!("hand 1: {}", e)))?;
    let second =
        parse_hand(hand2).map_err(|e| CliError::InvalidInput(format!("hand 2: {}", e)))?;

    writeln!(
        out,
        "Hand 1: {} {}",
        format_hand(&first),
        first.strength().category
    )?;
    writeln!(
        out,
        "Hand 2: {} {}",
        format_hand(&second),
        second.strength().category
    )?;
    writeln!(
        out,
        "{}",
        format_outcome(evaluate(&first, &second), "hand 1", "hand 2")
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROYAL: &str = "spade_ten,spade_jack,spade_queen,spade_king,spade_ace";
    const SIX_HIGH: &str = "heart_two,heart_three,heart_four,diamond_five,club_six";

    fn eval(a: &str, b: &str) -> Result<String, CliError> {
        let mut out = Vec::new();
        handle_eval_command(a, b, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn royal_beats_straight() {
        let output = eval(ROYAL, SIX_HIGH).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].ends_with("Royal Flush"));
        assert!(lines[1].ends_with("Straight"));
        assert_eq!(lines[2], "Winner: hand 1");
    }

    #[test]
    fn order_of_arguments_mirrors_result() {
        assert!(eval(SIX_HIGH, ROYAL).unwrap().ends_with("Winner: hand 2\n"));
    }

    #[test]
    fn same_hand_ranks_tie() {
        let other = "heart_two,club_three,spade_four,spade_five,diamond_six";
        assert!(eval(SIX_HIGH, other).unwrap().ends_with("Result: tie\n"));
    }

    #[test]
    fn bad_hand_is_reported_by_position() {
        match eval(ROYAL, "heart_two") {
            Err(CliError::InvalidInput(msg)) => assert!(msg.starts_with("hand 2:")),
            other => panic!("expected invalid input, got {:?}", other),
        }
    }
}
