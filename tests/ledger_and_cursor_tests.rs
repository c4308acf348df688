// tests/ledger_and_cursor_tests.rs
//
// Журнал транзакций (лимит, порядок, метки времени) и курсор выбранного игрока.

use chip_ledger::domain::{Chips, SessionConfig, TransactionKind};
use chip_ledger::engine::{Session, DEFAULT_LEDGER_CAPACITY};
use chip_ledger::infra::FixedClock;

fn funded_session(seats: usize) -> Session<FixedClock> {
    let cfg = SessionConfig {
        seats,
        ..SessionConfig::default()
    };
    let mut session =
        Session::with_clock(cfg, FixedClock::with_step(10_000, 5)).expect("валидный конфиг");
    session.reset_game();
    session
}

// -----------------------------
// Журнал
// -----------------------------

#[test]
fn ledger_keeps_only_twenty_newest_entries() {
    let mut s = funded_session(2);
    for _ in 0..25 {
        s.add_money(1, Chips(1)).unwrap();
    }

    assert_eq!(DEFAULT_LEDGER_CAPACITY, 20);
    assert_eq!(s.ledger().len(), 20);

    let ids: Vec<u64> = s.ledger().recent().map(|t| t.id).collect();
    assert_eq!(ids.first(), Some(&25), "первая запись – самая новая");
    assert_eq!(ids.last(), Some(&6), "записи 1..5 вытеснены");
    assert!(ids.windows(2).all(|w| w[0] > w[1]));

    // Вытеснение из журнала не откатывает деньги.
    assert_eq!(s.player(1).unwrap().balance, Chips(125));
}

#[test]
fn timestamps_come_from_session_clock() {
    let mut s = funded_session(2);
    s.fold(1).unwrap();
    s.fold(2).unwrap();

    let stamps: Vec<u64> = s.ledger().recent().map(|t| t.timestamp).collect();
    assert_eq!(stamps, vec![10_005, 10_000]);
}

#[test]
fn custom_capacity_is_respected() {
    let cfg = SessionConfig {
        seats: 2,
        ledger_capacity: 3,
        ..SessionConfig::default()
    };
    let mut s = Session::with_clock(cfg, FixedClock::new(0)).unwrap();
    s.reset_game();
    for _ in 0..5 {
        s.fold(1).unwrap();
    }

    assert_eq!(s.ledger().capacity(), 3);
    assert_eq!(s.ledger().len(), 3);
}

#[test]
fn ledger_records_player_and_kind_for_each_action() {
    let mut s = funded_session(2);
    s.place_bet(1, Chips(30)).unwrap();
    s.match_bet(2).unwrap();
    s.win(2, Chips(10)).unwrap();

    let entries: Vec<(u64, TransactionKind, i64, String)> = s
        .ledger()
        .recent()
        .map(|t| (t.player_id, t.kind, t.amount.0, t.description.clone()))
        .collect();

    assert_eq!(
        entries,
        vec![
            (2, TransactionKind::Win, 10, "Won 10".to_string()),
            (2, TransactionKind::Bet, 30, "Called 30".to_string()),
            (1, TransactionKind::Bet, 30, "Bet 30".to_string()),
        ]
    );
}

#[test]
fn reset_clears_ledger_but_ids_keep_growing() {
    let mut s = funded_session(2);
    s.fold(1).unwrap();
    s.fold(2).unwrap();
    s.reset_game();
    assert!(s.ledger().is_empty());

    s.fold(1).unwrap();
    assert_eq!(s.ledger().latest().map(|t| t.id), Some(3));
}

// -----------------------------
// Курсор
// -----------------------------

#[test]
fn next_player_cycles_through_players_still_in_round() {
    let mut s = funded_session(4);
    s.fold(3).unwrap();
    s.toggle_active(4).unwrap();

    assert_eq!(s.selected_player(), None);
    assert_eq!(s.select_next_player(), Some(1), "без курсора – первый подходящий");
    assert_eq!(s.select_next_player(), Some(2));
    assert_eq!(s.select_next_player(), Some(1), "3 сфолдил, 4 выключен");
}

#[test]
fn next_player_from_folded_selection_starts_over() {
    let mut s = funded_session(3);
    s.select_player(Some(2)).unwrap();
    s.fold(2).unwrap();

    assert_eq!(s.select_next_player(), Some(1));
}

#[test]
fn next_player_without_candidates_keeps_cursor() {
    let mut s = funded_session(2);
    s.select_player(Some(2)).unwrap();
    s.fold(1).unwrap();
    s.fold(2).unwrap();

    assert_eq!(s.select_next_player(), Some(2));
    assert_eq!(s.selected_player(), Some(2));
}

#[test]
fn deactivating_selected_player_moves_cursor() {
    let mut s = funded_session(3);
    s.fold(1).unwrap();
    s.select_player(Some(3)).unwrap();

    s.toggle_active(3).unwrap();

    assert_eq!(s.selected_player(), Some(2));
}

#[test]
fn selection_can_be_cleared() {
    let mut s = funded_session(2);
    s.select_player(Some(1)).unwrap();
    s.select_player(None).unwrap();
    assert_eq!(s.selected_player(), None);
}
