//! Concurrent access to the session store.

use chat_tictactoe::{Cell, SessionId, SessionStore};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_racing_taps_on_one_cell_accept_exactly_one() {
    let store = SessionStore::new();
    let id = SessionId::from("race");
    store.start_session(&id);

    let barrier = Arc::new(Barrier::new(8));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            let id = id.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.submit_move(&id, 4).is_ok()
            })
        })
        .collect();

    let accepted = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(accepted, 1);

    let snapshot = store.get_session(&id).unwrap();
    assert_eq!(snapshot.board()[4], Cell::MarkA);
}

#[test]
fn test_no_lost_updates_within_a_session() {
    let store = SessionStore::new();
    let id = SessionId::from("busy");
    store.start_session(&id);

    let handles: Vec<_> = (0..9)
        .map(|cell| {
            let store = store.clone();
            let id = id.clone();
            thread::spawn(move || store.submit_move(&id, cell).is_ok())
        })
        .collect();

    let accepted = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    let snapshot = store.get_session(&id).unwrap();
    let marks = snapshot.board().iter().filter(|c| **c != Cell::Empty).count();
    let crosses = snapshot.board().iter().filter(|c| **c == Cell::MarkA).count();
    let noughts = snapshot.board().iter().filter(|c| **c == Cell::MarkB).count();

    assert_eq!(marks, accepted);
    assert!(crosses == noughts || crosses == noughts + 1);
}

#[test]
fn test_sessions_are_independent_under_load() {
    let store = SessionStore::new();
    let handles: Vec<_> = (0..16)
        .map(|n| {
            let store = store.clone();
            thread::spawn(move || {
                let id = SessionId::from(format!("chat-{}", n));
                store.start_session(&id);
                for cell in [0, 3, 1, 4, 2] {
                    store.submit_move(&id, cell).unwrap();
                }
                store.get_session(&id).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let snapshot = handle.join().unwrap();
        assert!(snapshot.is_over());
    }
    assert_eq!(store.len(), 16);
}
