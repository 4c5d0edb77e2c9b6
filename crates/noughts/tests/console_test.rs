//! Tests for the terminal front-end driven by scripted input.

use noughts::{Names, run_console};
use noughts_core::{EventLog, GameSession, HeuristicSelector, Player, Position, ScriptedSelector};

fn names() -> Names {
    Names::new("Ada".to_string(), "Cpu".to_string())
}

fn scripted(cells: &[usize]) -> GameSession<ScriptedSelector, EventLog> {
    let moves = cells.iter().map(|i| Position::from_index(*i).unwrap());
    GameSession::new(ScriptedSelector::new(moves), EventLog::new())
}

fn run(session: &mut GameSession<ScriptedSelector, EventLog>, input: &str) -> String {
    let mut output = Vec::new();
    run_console(session, &names(), input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_human_win_is_announced() {
    let mut session = scripted(&[4, 5]);
    let output = run(&mut session, "1\n2\n3\nq\n");

    assert!(output.contains("Ada takes Top-left."));
    assert!(output.contains("Cpu takes Center."));
    assert!(output.contains("Ada wins!"));
    assert!(output.contains("Score: Ada 1 - 0 Cpu"));
    assert!(output.ends_with("Goodbye.\n"));
    assert_eq!(session.scores().score(Player::X), 1);
}

#[test]
fn test_rejected_moves_are_reported_and_play_continues() {
    let mut session = scripted(&[0]);
    let output = run(&mut session, "5\n1\n1\nbanana\n");

    assert!(output.contains("Invalid move: square Top-left is already occupied"));
    assert!(output.contains("Unrecognised input \"banana\""));
    assert_eq!(*session.state().move_count(), 2);
}

#[test]
fn test_move_after_game_over_needs_restart() {
    let mut session = scripted(&[4, 5, 4, 5]);
    let output = run(&mut session, "1\n2\n3\n7\nr\n1\n2\n3\n");

    assert!(output.contains("Game is already over"));
    assert!(output.contains("New game."));
    assert!(output.contains("Score: Ada 2 - 0 Cpu"));
}

#[test]
fn test_end_of_input_quits() {
    let mut session = scripted(&[]);
    let output = run(&mut session, "s\n");
    assert!(output.contains("Score: Ada 0 - 0 Cpu"));
    assert!(output.ends_with("Goodbye.\n"));
}

#[test]
fn test_heuristic_session_through_console() {
    let mut session = GameSession::new(HeuristicSelector::seeded(8), EventLog::new());
    let mut output = Vec::new();
    run_console(&mut session, &names(), "5\nq\n".as_bytes(), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Ada takes Center."));
    let corner_taken = Position::CORNERS
        .iter()
        .any(|c| output.contains(&format!("Cpu takes {}.", c)));
    assert!(corner_taken, "{output}");
}
