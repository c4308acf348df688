// tests/invariants_random_tests.rs
//
// Случайные последовательности команд дилера (фиксированный seed).
// После каждой команды проверяем:
//  - банк = активные × стартовый стек − сумма балансов активных;
//  - журнал не длиннее лимита, от новых к старым;
//  - ставки не отрицательные;
//  - отклонённая команда ничего не меняет.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use chip_ledger::api::{execute_command, Command, Role};
use chip_ledger::domain::{Chips, SessionConfig};
use chip_ledger::engine::Session;
use chip_ledger::infra::FixedClock;

const SEATS: u64 = 6;

fn random_command(rng: &mut StdRng) -> Command {
    let player_id = rng.gen_range(1..=SEATS + 1);
    let amount = Chips(rng.gen_range(-5..=120));

    match rng.gen_range(0..14) {
        0 | 1 | 2 => Command::PlaceBet { player_id, amount },
        3 | 4 => Command::MatchBet { player_id },
        5 => Command::Win { player_id, amount },
        6 => Command::AddMoney { player_id, amount },
        7 => Command::Fold { player_id },
        8 => Command::Unfold { player_id },
        9 => Command::ToggleActive { player_id },
        10 => Command::StartOrAdvanceRound,
        11 => Command::SetStartingMoney { amount },
        12 => Command::SelectNextPlayer,
        _ => {
            if rng.gen_bool(0.1) {
                Command::ResetGame
            } else {
                Command::SetBigBlind { amount }
            }
        }
    }
}

fn check_invariants(s: &Session<FixedClock>, step: usize) {
    let active: Vec<_> = s.players().iter().filter(|p| p.is_active).collect();
    let expected_bank = Chips(
        s.starting_money().0 * active.len() as i64 - active.iter().map(|p| p.balance.0).sum::<i64>(),
    );
    assert_eq!(s.bank_balance(), expected_bank, "шаг {step}: банк разошёлся с формулой");

    assert!(s.ledger().len() <= 20, "шаг {step}: журнал длиннее лимита");
    let ids: Vec<u64> = s.ledger().recent().map(|t| t.id).collect();
    assert!(
        ids.windows(2).all(|w| w[0] > w[1]),
        "шаг {step}: журнал не упорядочен от новых к старым"
    );

    assert!(
        s.players().iter().all(|p| !p.current_bet.is_negative()),
        "шаг {step}: отрицательная ставка"
    );
}

fn run_seed(seed: u64, steps: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let cfg = SessionConfig {
        seats: SEATS as usize,
        ..SessionConfig::default()
    };
    let mut s = Session::with_clock(cfg, FixedClock::with_step(0, 1)).expect("валидный конфиг");
    s.reset_game();

    for step in 0..steps {
        let command = random_command(&mut rng);
        let before = s.export_snapshot();
        let ledger_len = s.ledger().len();

        if execute_command(&mut s, Role::Dealer, command.clone()).is_err() {
            assert_eq!(s.export_snapshot(), before, "шаг {step}: {command:?} отклонена, но изменила состояние");
            assert_eq!(s.ledger().len(), ledger_len);
        }

        check_invariants(&s, step);
    }
}

#[test]
fn random_dealer_sessions_keep_invariants() {
    for seed in [1, 7, 42, 2024] {
        run_seed(seed, 400);
    }
}

#[test]
fn viewer_never_mutates_under_random_commands() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut s = Session::with_clock(SessionConfig::default(), FixedClock::new(0)).unwrap();
    s.reset_game();
    let before = s.export_snapshot();

    for _ in 0..100 {
        let command = random_command(&mut rng);
        assert!(execute_command(&mut s, Role::Viewer, command).is_err());
    }

    assert_eq!(s.export_snapshot(), before);
    assert!(s.ledger().is_empty());
}
