// tests/engine_errors_tests.rs
//
// Отказы движка. Для каждого отказа проверяем, что состояние
// (снапшот, журнал, банк) осталось прежним.

use chip_ledger::domain::{Chips, SessionConfig};
use chip_ledger::engine::{EngineError, RoundPhase, Session};
use chip_ledger::infra::FixedClock;

fn funded_session(seats: usize) -> Session<FixedClock> {
    let cfg = SessionConfig {
        seats,
        ..SessionConfig::default()
    };
    let mut session = Session::with_clock(cfg, FixedClock::new(0)).expect("валидный конфиг");
    session.reset_game();
    session
}

/// Выполнить действие, ожидать ошибку и убедиться, что ничего не изменилось.
fn assert_rejected<T: std::fmt::Debug>(
    session: &mut Session<FixedClock>,
    expected: EngineError,
    action: impl FnOnce(&mut Session<FixedClock>) -> Result<T, EngineError>,
) {
    let snapshot = session.export_snapshot();
    let ledger_len = session.ledger().len();
    let bank = session.bank_balance();

    let result = action(&mut *session);

    assert_eq!(result.unwrap_err(), expected);
    assert_eq!(session.export_snapshot(), snapshot, "снапшот не должен меняться");
    assert_eq!(session.ledger().len(), ledger_len, "журнал не должен расти");
    assert_eq!(session.bank_balance(), bank);
}

#[test]
fn bet_over_balance_is_rejected() {
    let mut s = funded_session(2);
    assert_rejected(
        &mut s,
        EngineError::InsufficientPlayerFunds {
            player_id: 1,
            balance: Chips(100),
            requested: Chips(150),
        },
        |s| s.place_bet(1, Chips(150)),
    );
}

#[test]
fn non_positive_amounts_are_rejected() {
    let mut s = funded_session(2);
    assert_rejected(&mut s, EngineError::InvalidAmount(Chips(0)), |s| {
        s.place_bet(1, Chips(0))
    });
    assert_rejected(&mut s, EngineError::InvalidAmount(Chips(-5)), |s| {
        s.add_money(1, Chips(-5))
    });
    assert_rejected(&mut s, EngineError::InvalidAmount(Chips(0)), |s| s.win(1, Chips(0)));
}

#[test]
fn negative_settings_are_rejected() {
    let mut s = funded_session(2);
    assert_rejected(&mut s, EngineError::InvalidAmount(Chips(-1)), |s| {
        s.set_small_blind(Chips(-1))
    });
    assert_rejected(&mut s, EngineError::InvalidAmount(Chips(-10)), |s| {
        s.set_big_blind(Chips(-10))
    });
    assert_rejected(&mut s, EngineError::InvalidAmount(Chips(-100)), |s| {
        s.set_starting_money(Chips(-100))
    });

    // Ноль для настроек допустим.
    s.set_small_blind(Chips::ZERO).expect("нулевой блайнд допустим");
    assert_eq!(s.small_blind(), Chips::ZERO);
}

#[test]
fn win_cannot_exceed_bank() {
    let mut s = funded_session(3);
    assert_eq!(s.bank_balance(), Chips::ZERO);

    assert_rejected(
        &mut s,
        EngineError::InsufficientBankFunds {
            bank: Chips(0),
            requested: Chips(10),
        },
        |s| s.win(1, Chips(10)),
    );

    s.place_bet(1, Chips(30)).unwrap();
    assert_rejected(
        &mut s,
        EngineError::InsufficientBankFunds {
            bank: Chips(30),
            requested: Chips(31),
        },
        |s| s.win(2, Chips(31)),
    );
}

#[test]
fn match_with_nothing_owed_is_rejected() {
    let mut s = funded_session(2);
    assert_rejected(&mut s, EngineError::AlreadyCalled(1), |s| s.match_bet(1));

    s.place_bet(1, Chips(20)).unwrap();
    assert_rejected(&mut s, EngineError::AlreadyCalled(1), |s| s.match_bet(1));
}

#[test]
fn match_without_enough_balance_is_rejected() {
    let mut s = funded_session(2);
    s.add_money(1, Chips(100)).unwrap();
    s.place_bet(1, Chips(150)).unwrap();

    assert_rejected(
        &mut s,
        EngineError::InsufficientPlayerFunds {
            player_id: 2,
            balance: Chips(100),
            requested: Chips(150),
        },
        |s| s.match_bet(2),
    );
}

#[test]
fn unknown_player_is_invalid_target() {
    let mut s = funded_session(2);
    assert_rejected(&mut s, EngineError::InvalidTarget(99), |s| {
        s.place_bet(99, Chips(1))
    });
    assert_rejected(&mut s, EngineError::InvalidTarget(99), |s| s.toggle_active(99));
    assert_rejected(&mut s, EngineError::InvalidTarget(99), |s| s.rename(99, "X"));
    assert_rejected(&mut s, EngineError::InvalidTarget(99), |s| {
        s.select_player(Some(99))
    });
}

#[test]
fn inactive_player_cannot_act() {
    let mut s = funded_session(3);
    s.toggle_active(2).unwrap();

    assert_rejected(&mut s, EngineError::InactivePlayer(2), |s| {
        s.place_bet(2, Chips(10))
    });
    assert_rejected(&mut s, EngineError::InactivePlayer(2), |s| s.match_bet(2));
    assert_rejected(&mut s, EngineError::InactivePlayer(2), |s| s.fold(2));
    assert_rejected(&mut s, EngineError::InactivePlayer(2), |s| s.unfold(2));
    assert_rejected(&mut s, EngineError::InactivePlayer(2), |s| {
        s.add_money(2, Chips(10))
    });

    // Переименовать можно и выключенного.
    s.rename(2, "Запасной").expect("переименование всегда доступно");
}

#[test]
fn round_with_no_active_players_is_rejected() {
    let mut s = funded_session(2);
    s.toggle_active(1).unwrap();
    s.toggle_active(2).unwrap();

    assert_rejected(&mut s, EngineError::DegenerateActiveSet, |s| {
        s.start_or_advance_round()
    });
    assert_eq!(s.phase(), RoundPhase::NotStarted);
}

#[test]
fn advancing_after_everyone_left_is_rejected() {
    let mut s = funded_session(2);
    s.start_or_advance_round().unwrap();
    s.toggle_active(1).unwrap();
    s.toggle_active(2).unwrap();

    assert_rejected(&mut s, EngineError::DegenerateActiveSet, |s| {
        s.start_or_advance_round()
    });
    assert_eq!(s.phase(), RoundPhase::InProgress { round: 1 });
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let cfg = SessionConfig {
        seats: 0,
        ..SessionConfig::default()
    };
    assert!(matches!(
        Session::with_clock(cfg, FixedClock::new(0)),
        Err(EngineError::InvalidConfig(_))
    ));

    let cfg = SessionConfig {
        small_blind: Chips(-5),
        ..SessionConfig::default()
    };
    assert!(matches!(Session::new(cfg), Err(EngineError::InvalidConfig(_))));
}

#[test]
fn error_messages_are_human_readable() {
    let err = EngineError::InsufficientBankFunds {
        bank: Chips(30),
        requested: Chips(31),
    };
    let text = err.to_string();
    assert!(text.contains("30") && text.contains("31"), "в сообщении есть суммы: {text}");
}
