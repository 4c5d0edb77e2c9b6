//! Tests for full human-versus-computer turns.

use noughts_core::{
    EventLog, GameError, GameEvent, GameSession, HeuristicSelector, MoveRejection, Outcome,
    Player, Position, ScriptedSelector, TurnResult,
};

fn scripted(moves: &[usize]) -> GameSession<ScriptedSelector, EventLog> {
    let moves = moves.iter().map(|i| Position::from_index(*i).unwrap());
    GameSession::new(ScriptedSelector::new(moves), EventLog::new())
}

fn marked(cell: usize, player: Player) -> GameEvent {
    GameEvent::CellMarked {
        position: Position::from_index(cell).unwrap(),
        player,
    }
}

#[test]
fn test_human_win_ends_turn_before_computer() {
    let mut session = scripted(&[3, 4, 8]);

    session.cell_selected(0).unwrap();
    session.cell_selected(1).unwrap();
    let turn = session.cell_selected(2).unwrap();

    assert_eq!(
        turn,
        TurnResult {
            winner: Some(Player::X),
            is_draw: false,
            computer_move: None,
        }
    );
    assert_eq!(session.selector().remaining(), 1);
    assert_eq!(session.scores().score(Player::X), 1);
    assert_eq!(session.scores().score(Player::O), 0);
    assert_eq!(
        session.listener().events(),
        &[
            marked(0, Player::X),
            marked(3, Player::O),
            marked(1, Player::X),
            marked(4, Player::O),
            marked(2, Player::X),
            GameEvent::ButtonsDisabled,
            GameEvent::ScoreChanged { x: 1, o: 0 },
            GameEvent::GameOver(Outcome::Winner(Player::X)),
        ]
    );
}

#[test]
fn test_computer_win_reported() {
    let mut session = scripted(&[0, 4, 8]);

    session.cell_selected(1).unwrap();
    session.cell_selected(2).unwrap();
    let turn = session.cell_selected(3).unwrap();

    assert_eq!(turn.winner, Some(Player::O));
    assert_eq!(turn.computer_move, Some(Position::BottomRight));
    assert!(turn.is_game_over());
    assert_eq!(session.scores().score(Player::O), 1);
}

#[test]
fn test_draw_on_last_human_move() {
    let mut session = scripted(&[1, 4, 5, 6]);

    for cell in [0, 2, 3, 7] {
        let turn = session.cell_selected(cell).unwrap();
        assert!(!turn.is_game_over());
    }
    let turn = session.cell_selected(8).unwrap();

    assert!(turn.is_draw);
    assert_eq!(turn.winner, None);
    assert_eq!(turn.computer_move, None);
    assert_eq!(*session.scores().x_points(), 0);
    assert_eq!(*session.scores().o_points(), 0);

    let tail = &session.listener().events()[9..];
    assert_eq!(
        tail,
        &[
            GameEvent::ButtonsDisabled,
            GameEvent::GameOver(Outcome::Draw)
        ]
    );
}

#[test]
fn test_moves_rejected_after_game_over() {
    let mut session = scripted(&[3, 4, 8]);
    for cell in [0, 1, 2] {
        session.cell_selected(cell).unwrap();
    }
    let state_before = session.state().clone();
    let events_before = session.listener().events().len();

    let result = session.cell_selected(5);

    assert_eq!(
        result,
        Err(GameError::IllegalStateTransition(Outcome::Winner(Player::X)))
    );
    assert_eq!(session.state(), &state_before);
    assert_eq!(session.listener().events().len(), events_before);
}

#[test]
fn test_invalid_human_move_does_not_trigger_computer() {
    let mut session = scripted(&[3, 4]);
    session.cell_selected(0).unwrap();

    let occupied = session.cell_selected(3);
    assert_eq!(
        occupied,
        Err(GameError::InvalidMove(MoveRejection::Occupied(Position::MiddleLeft)))
    );
    let out_of_range = session.cell_selected(42);
    assert_eq!(
        out_of_range,
        Err(GameError::InvalidMove(MoveRejection::OutOfRange(42)))
    );

    assert_eq!(session.selector().remaining(), 1);
    assert_eq!(*session.state().move_count(), 2);
}

#[test]
fn test_restart_keeps_scores_and_replays_identically() {
    let mut session = scripted(&[3, 4, 3, 4]);
    for cell in [0, 1, 2] {
        session.cell_selected(cell).unwrap();
    }
    let first = session.state().check_winner();

    session.restart_game();
    assert!(!session.is_game_over());
    assert_eq!(*session.state().move_count(), 0);
    assert_eq!(session.state().available().len(), 9);
    assert_eq!(session.scores().score(Player::X), 1);
    assert_eq!(session.listener().events().last(), Some(&GameEvent::Restarted));

    let mut last = None;
    for cell in [0, 1, 2] {
        last = Some(session.cell_selected(cell).unwrap());
    }

    assert_eq!(session.state().check_winner(), first);
    assert_eq!(last.and_then(|t| t.winner), first);
    assert_eq!(session.scores().score(Player::X), 2);
    assert_eq!(session.scores().to_string(), "2 - 0");
}

#[test]
fn test_heuristic_session_answers_center_with_corner() {
    let mut session = GameSession::seeded(2024);
    let turn = session.cell_selected(4).unwrap();

    let reply = turn.computer_move.expect("Computer should reply");
    assert!(Position::CORNERS.contains(&reply));
    assert_eq!(*session.state().move_count(), 2);
}

#[test]
fn test_heuristic_session_plays_to_completion() {
    for seed in 0..20 {
        let mut session = GameSession::new(HeuristicSelector::seeded(seed), EventLog::new());
        while !session.is_game_over() {
            let cell = session.state().available()[0].to_index();
            session.cell_selected(cell).unwrap();
        }
        let outcome = session.state().outcome().unwrap();
        let total = session.scores().score(Player::X) + session.scores().score(Player::O);
        assert_eq!(total, u32::from(!outcome.is_draw()));
        assert_eq!(
            session.listener().events().last(),
            Some(&GameEvent::GameOver(outcome))
        );
    }
}

#[test]
fn test_turn_result_serializes() {
    let turn = TurnResult {
        winner: Some(Player::O),
        is_draw: false,
        computer_move: Some(Position::Center),
    };
    let json = serde_json::to_value(turn).unwrap();
    assert_eq!(json["winner"], "O");
    assert_eq!(json["computer_move"], "Center");
    assert_eq!(json["is_draw"], false);
}
