// src/bin/chip_ledger_dev_cli.rs

use chip_ledger::api::{
    build_session_view, execute_command, import_remote_snapshot, ApiError, Command, Role,
    SessionViewDto,
};
use chip_ledger::domain::{Chips, SessionConfig};
use chip_ledger::engine::Session;
use chip_ledger::infra::{AccessGate, InMemorySnapshotStore, SnapshotStore};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    println!("chip_ledger_dev_cli: стартуем dev-CLI учёта фишек…");

    // 1. Конфиг: из файла (первый аргумент) или по умолчанию.
    let config = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|raw| SessionConfig::from_json_str(&raw))
        {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("[CLI] Не удалось прочитать конфиг {path}: {e}");
                std::process::exit(1);
            }
        },
        None => SessionConfig::default(),
    };

    // 2. Вход дилера по коду.
    let gate = AccessGate::new(config.dealer_code.clone());
    let dealer = match gate.verify(&config.dealer_code) {
        Ok(role) => role,
        Err(e) => {
            eprintln!("[CLI] {e}");
            std::process::exit(1);
        }
    };

    let mut session = match Session::new(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("[CLI] {e}");
            std::process::exit(1);
        }
    };

    println!();
    println!("================ DEALER SESSION =================");

    let script = vec![
        Command::Rename { player_id: 1, name: "Alice".into() },
        Command::Rename { player_id: 2, name: "Bob".into() },
        Command::ToggleActive { player_id: 6 },
        Command::ResetGame,
        Command::StartOrAdvanceRound,
        Command::PlaceBet { player_id: 4, amount: Chips(20) },
        Command::MatchBet { player_id: 5 },
        Command::MatchBet { player_id: 1 },
        Command::Fold { player_id: 2 },
        Command::MatchBet { player_id: 3 },
        Command::PlaceBet { player_id: 1, amount: Chips(500) },
        Command::StartOrAdvanceRound,
        Command::Win { player_id: 3, amount: Chips(15) },
        Command::AddMoney { player_id: 2, amount: Chips(50) },
        Command::SelectNextPlayer,
    ];

    for command in script {
        run(&mut session, dealer, command);
    }

    debug_print_session(&build_session_view(&session));

    // 3. Зритель: пытается ставить, потом получает снапшот через хранилище.
    println!();
    println!("================ VIEWER SYNC =================");

    let mut store = InMemorySnapshotStore::new();
    store.save(&session.export_snapshot(), 0);

    let mut viewer = match Session::new(SessionConfig::default()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("[CLI] {e}");
            std::process::exit(1);
        }
    };
    run(&mut viewer, Role::Viewer, Command::StartOrAdvanceRound);

    match store.load() {
        Some(snapshot) => match import_remote_snapshot(&mut viewer, Role::Viewer, snapshot) {
            Ok(()) => println!("[CLI] Зритель получил снапшот."),
            Err(e) => println!("[CLI] Ошибка импорта: {e}"),
        },
        None => println!("[CLI] Хранилище пустое."),
    }

    debug_print_session(&build_session_view(&viewer));

    println!("[CLI] Завершение работы dev-CLI.");
}

fn run(session: &mut Session, role: Role, command: Command) {
    match execute_command(session, role, command) {
        Ok(resp) => println!("[CLI] OK: {}", resp.notice()),
        Err(ApiError::Unauthorized) => println!("[CLI] Отказ: команда только для дилера"),
        Err(e) => println!("[CLI] Отказ: {e}"),
    }
}

fn debug_print_session(view: &SessionViewDto) {
    println!();
    println!(
        "[SESSION] round={} started={} bank={} pot={} highest_bet={} blinds={}/{}",
        view.round,
        view.game_started,
        view.bank_balance,
        view.pot,
        view.highest_bet,
        view.small_blind,
        view.big_blind
    );
    for p in &view.players {
        println!(
            "  #{} {:<10} balance={:<5} bet={:<4} active={} folded={} role={:?}{}",
            p.player_id,
            p.name,
            p.balance,
            p.current_bet,
            p.is_active,
            p.has_folded,
            p.role,
            if p.is_selected { " <" } else { "" }
        );
    }
    println!("  ledger ({} entries):", view.ledger.len());
    for tx in &view.ledger {
        println!(
            "    #{} {:<8} {:?} {} – {}",
            tx.id, tx.player_name, tx.kind, tx.amount, tx.description
        );
    }
}
