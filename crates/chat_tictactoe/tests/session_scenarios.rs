//! End-to-end scenarios against the session store.

use chat_tictactoe::{Cell, GameError, GameSnapshot, Player, SessionId, SessionStore, SnapshotOutcome};

fn play(store: &SessionStore, id: &SessionId, moves: &[usize]) -> GameSnapshot {
    let mut last = store.get_session(id).expect("session exists");
    for &cell in moves {
        last = store.submit_move(id, cell).expect("valid move");
    }
    last
}

#[test]
fn test_start_then_first_move() {
    let store = SessionStore::new();
    let c1 = SessionId::from("c1");

    let snapshot = store.start_session(&c1);
    assert!(snapshot.board().iter().all(|cell| *cell == Cell::Empty));
    assert_eq!(*snapshot.turn(), Player::MarkA);
    assert_eq!(*snapshot.outcome(), SnapshotOutcome::InProgress);

    let snapshot = store.submit_move(&c1, 0).unwrap();
    assert_eq!(snapshot.board()[0], Cell::MarkA);
    assert_eq!(*snapshot.turn(), Player::MarkB);
    assert_eq!(*snapshot.outcome(), SnapshotOutcome::InProgress);
}

#[test]
fn test_top_row_wins_for_crosses() {
    let store = SessionStore::new();
    let c1 = SessionId::from("c1");
    store.start_session(&c1);

    let snapshot = play(&store, &c1, &[0, 3, 1, 4, 2]);
    assert_eq!(*snapshot.outcome(), SnapshotOutcome::WonMarkA);
}

#[test]
fn test_full_board_is_draw() {
    let store = SessionStore::new();
    let c1 = SessionId::from("c1");
    store.start_session(&c1);

    let moves = [0, 1, 3, 4, 2, 5, 7, 6, 8];
    for (n, &cell) in moves.iter().enumerate() {
        let snapshot = store.submit_move(&c1, cell).unwrap();
        let expected = if n == moves.len() - 1 {
            SnapshotOutcome::Draw
        } else {
            SnapshotOutcome::InProgress
        };
        assert_eq!(*snapshot.outcome(), expected, "after move {}", n + 1);
    }
}

#[test]
fn test_unknown_session_not_found() {
    let store = SessionStore::new();
    let unknown = SessionId::from("unknown");
    assert_eq!(
        store.submit_move(&unknown, 0),
        Err(GameError::NotFound {
            session_id: unknown.clone()
        })
    );
    assert!(store.get_session(&unknown).is_err());
}

#[test]
fn test_move_after_win_rejected() {
    let store = SessionStore::new();
    let c1 = SessionId::from("c1");
    store.start_session(&c1);
    let won = play(&store, &c1, &[0, 3, 1, 4, 2]);

    assert_eq!(store.submit_move(&c1, 8), Err(GameError::GameAlreadyOver));
    assert_eq!(store.get_session(&c1).unwrap(), won);
}

#[test]
fn test_occupied_cell_changes_nothing() {
    let store = SessionStore::new();
    let c1 = SessionId::from("c1");
    store.start_session(&c1);
    let before = play(&store, &c1, &[4, 0]);

    assert_eq!(
        store.submit_move(&c1, 0),
        Err(GameError::CellOccupied { index: 0 })
    );
    assert_eq!(store.get_session(&c1).unwrap(), before);
}

#[test]
fn test_out_of_range_index() {
    let store = SessionStore::new();
    let c1 = SessionId::from("c1");
    store.start_session(&c1);
    assert_eq!(
        store.submit_move(&c1, 9),
        Err(GameError::IndexOutOfRange { index: 9 })
    );
}

#[test]
fn test_turn_alternates_until_terminal() {
    let store = SessionStore::new();
    let c1 = SessionId::from("c1");
    store.start_session(&c1);

    let mut expected = Player::MarkA;
    for cell in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
        assert_eq!(*store.get_session(&c1).unwrap().turn(), expected);
        let snapshot = store.submit_move(&c1, cell).unwrap();
        if snapshot.is_over() {
            break;
        }
        expected = expected.opponent();
    }
}

#[test]
fn test_column_and_diagonal_win_before_board_full() {
    let store = SessionStore::new();
    let column = SessionId::from("column");
    let diagonal = SessionId::from("diagonal");
    store.start_session(&column);
    store.start_session(&diagonal);

    // Noughts complete the middle column.
    let snapshot = play(&store, &column, &[0, 1, 2, 4, 6, 7]);
    assert_eq!(*snapshot.outcome(), SnapshotOutcome::WonMarkB);

    let snapshot = play(&store, &diagonal, &[2, 0, 4, 1, 6]);
    assert_eq!(*snapshot.outcome(), SnapshotOutcome::WonMarkA);
    assert!(snapshot.board().contains(&Cell::Empty));
}

#[test]
fn test_new_game_after_finish() {
    let store = SessionStore::new();
    let c1 = SessionId::from("c1");
    store.start_session(&c1);
    play(&store, &c1, &[0, 3, 1, 4, 2]);

    let fresh = store.start_session(&c1);
    assert_eq!(*fresh.outcome(), SnapshotOutcome::InProgress);
    assert!(store.submit_move(&c1, 8).is_ok());
}

#[test]
fn test_move_after_draw_rejected() {
    let store = SessionStore::new();
    let c1 = SessionId::from("c1");
    store.start_session(&c1);
    let drawn = play(&store, &c1, &[0, 1, 3, 4, 2, 5, 7, 6, 8]);
    assert_eq!(*drawn.outcome(), SnapshotOutcome::Draw);

    for cell in [0, 4, 9] {
        assert_eq!(store.submit_move(&c1, cell), Err(GameError::GameAlreadyOver));
    }
    assert_eq!(store.get_session(&c1).unwrap(), drawn);
}
