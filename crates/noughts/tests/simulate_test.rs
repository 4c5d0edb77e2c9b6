//! Tests for headless simulation.

use noughts::{SimulationReport, simulate};

#[test]
fn test_tally_adds_up() {
    let report = simulate(50, 17).unwrap();
    assert_eq!(*report.games(), 50);
    assert_eq!(report.x_wins() + report.o_wins() + report.draws(), 50);
}

#[test]
fn test_same_seed_same_report() {
    assert_eq!(simulate(30, 5).unwrap(), simulate(30, 5).unwrap());
}

#[test]
fn test_zero_games() {
    assert_eq!(simulate(0, 1).unwrap(), SimulationReport::default());
}

#[test]
fn test_heuristic_beats_random_player_more_often_than_not() {
    let report = simulate(300, 2024).unwrap();
    assert!(report.o_wins() > report.x_wins(), "{report}");
}

#[test]
fn test_report_json_shape() {
    let report = simulate(3, 9).unwrap();
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["games"], 3);
    assert!(json.get("draws").is_some());
}
