use serde::{Deserialize, Serialize};

use crate::domain::Transaction;
use crate::engine::{SeatPositions, Session, SessionSnapshot};
use crate::infra::clock::Clock;

use super::dto::{PlayerDto, SessionViewDto, TransactionDto};

/// Запросы "только чтение". Доступны любой роли.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Полный вид сессии.
    GetSession,

    /// Журнал (от новых к старым).
    GetLedger,

    /// Дилер и блайнды.
    GetPositions,

    /// Снапшот для внешнего хранилища.
    ExportSnapshot,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Session(SessionViewDto),
    Ledger(Vec<TransactionDto>),
    Positions(Option<SeatPositions>),
    Snapshot(SessionSnapshot),
}

pub fn run_query<C: Clock>(session: &Session<C>, query: &Query) -> QueryResponse {
    match query {
        Query::GetSession => QueryResponse::Session(build_session_view(session)),
        Query::GetLedger => QueryResponse::Ledger(build_ledger_dto(session)),
        Query::GetPositions => QueryResponse::Positions(session.positions()),
        Query::ExportSnapshot => QueryResponse::Snapshot(session.export_snapshot()),
    }
}

/// Собрать DTO сессии.
pub fn build_session_view<C: Clock>(session: &Session<C>) -> SessionViewDto {
    let round = session.round_state();

    SessionViewDto {
        players: build_players_dto(session),
        bank_balance: session.bank_balance(),
        pot: session.roster().pot_total(),
        ledger: build_ledger_dto(session),
        round: round.round,
        highest_bet: round.highest_bet,
        game_started: round.started,
        starting_money: session.starting_money(),
        small_blind: session.small_blind(),
        big_blind: session.big_blind(),
        dealer_position: round.dealer_position,
        positions: session.positions(),
        selected_player_id: session.selected_player(),
    }
}

fn build_players_dto<C: Clock>(session: &Session<C>) -> Vec<PlayerDto> {
    let roster = session.roster();

    roster
        .players()
        .iter()
        .map(|p| PlayerDto {
            player_id: p.id,
            name: p.name.clone(),
            balance: p.balance,
            current_bet: p.current_bet,
            is_active: p.is_active,
            has_folded: p.has_folded,
            role: session.role_of(p.id),
            active_index: roster.active_index_of(p.id),
            is_selected: session.selected_player() == Some(p.id),
        })
        .collect()
}

fn build_ledger_dto<C: Clock>(session: &Session<C>) -> Vec<TransactionDto> {
    session
        .ledger()
        .recent()
        .map(|tx| transaction_dto(session, tx))
        .collect()
}

fn transaction_dto<C: Clock>(session: &Session<C>, tx: &Transaction) -> TransactionDto {
    let player_name = session
        .player(tx.player_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| format!("Player {}", tx.player_id));

    TransactionDto {
        id: tx.id,
        player_id: tx.player_id,
        player_name,
        amount: tx.amount,
        kind: tx.kind,
        timestamp: tx.timestamp,
        description: tx.description.clone(),
    }
}
