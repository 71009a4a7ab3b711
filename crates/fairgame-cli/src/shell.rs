//! Interactive game loop: menu rendering and input handling.

use anyhow::Result;
use fairgame_core::{CommittedRound, MoveSet, RoundOutcome};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Player's selection for one prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Selection {
    Exit,
    /// 0-based index into the move set
    Move(usize),
}

/// Parse one input line against a move set of `move_count` entries.
///
/// Accepts integers in `[0, move_count]`: `0` is the exit sentinel and
/// `1..=move_count` select a move. Anything else is rejected and the caller
/// re-prompts without touching round state.
fn parse_selection(line: &str, move_count: usize) -> Option<Selection> {
    let value: usize = line.trim().parse().ok()?;
    match value {
        0 => Some(Selection::Exit),
        v if v <= move_count => Some(Selection::Move(v - 1)),
        _ => None,
    }
}

fn print_menu(moves: &MoveSet) {
    println!("Available moves:");
    for (i, name) in moves.iter().enumerate() {
        println!("{} - {}", i + 1, name);
    }
    println!("0 - exit");
}

fn outcome_message(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::FirstWins => "You win",
        RoundOutcome::SecondWins => "Computer win",
        RoundOutcome::Draw => "Draw",
    }
}

/// Run rounds until the player exits or stdin closes.
pub fn run(moves: &MoveSet) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Game started");

    loop {
        println!();
        println!("Round started");

        let round = CommittedRound::open(moves)?;
        debug!(commitment = %round.commitment(), "round committed");

        // The commitment goes out strictly before any input is read.
        println!("HMAC of computer move: {}", round.commitment());
        println!("It can be used to check that the computer played fair.");
        print_menu(moves);

        let selection = loop {
            print!("Enter your move: ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                // stdin closed; nothing more to play
                return Ok(());
            };
            if let Some(selection) = parse_selection(&line?, moves.len()) {
                break selection;
            }
        };

        let player_index = match selection {
            Selection::Exit => return Ok(()),
            Selection::Move(index) => index,
        };

        let revealed = round.resolve(player_index)?;
        debug!(outcome = %revealed.outcome(), "round resolved");

        println!("Your move: {}", revealed.player_move());
        println!("Computer move: {}", revealed.computer_move());
        println!("{}", outcome_message(revealed.outcome()));
        println!("HMAC key: {}", revealed.secret().to_hex());
        println!(
            "To verify, recompute HMAC-SHA256 over the computer move with the \
             revealed key (hex) and compare it to the published HMAC."
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_accepts_moves_in_range() {
        assert_eq!(parse_selection("1", 3), Some(Selection::Move(0)));
        assert_eq!(parse_selection("3", 3), Some(Selection::Move(2)));
    }

    #[test]
    fn test_parse_selection_accepts_exit_sentinel() {
        assert_eq!(parse_selection("0", 3), Some(Selection::Exit));
    }

    #[test]
    fn test_parse_selection_trims_whitespace() {
        assert_eq!(parse_selection("  2 \n", 3), Some(Selection::Move(1)));
    }

    #[test]
    fn test_parse_selection_rejects_out_of_range() {
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("100", 3), None);
    }

    #[test]
    fn test_parse_selection_rejects_non_numeric() {
        assert_eq!(parse_selection("rock", 3), None);
        assert_eq!(parse_selection("", 3), None);
        assert_eq!(parse_selection("1.5", 3), None);
        assert_eq!(parse_selection("-1", 3), None);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(outcome_message(RoundOutcome::FirstWins), "You win");
        assert_eq!(outcome_message(RoundOutcome::SecondWins), "Computer win");
        assert_eq!(outcome_message(RoundOutcome::Draw), "Draw");
    }
}
