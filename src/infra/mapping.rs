use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Player, PlayerId, Roster};
use crate::engine::positions::{compute_positions, SeatRole};
use crate::engine::snapshot::SessionSnapshot;

/// Стартовый стек, если во внешней записи его нет.
pub const FALLBACK_STARTING_MONEY: Chips = Chips(100);
pub const FALLBACK_SMALL_BLIND: Chips = Chips(5);
pub const FALLBACK_BIG_BLIND: Chips = Chips(10);

/// Плоская запись об игроке во внешнем хранилище (одна строка на игрока).
///
/// Параметры раунда дублируются в каждой строке; при чтении берутся из
/// самой свежей записи (`last_updated`).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlayerRecord {
    pub player_id: PlayerId,
    pub name: String,
    pub balance: Chips,
    pub current_bet: Chips,
    pub is_active: bool,
    pub has_folded: bool,
    /// Роль места: dealer / small_blind / big_blind / normal.
    pub status: SeatRole,
    pub is_selected: bool,
    pub game_round: u32,
    pub highest_bet: Chips,
    pub starting_money: Option<Chips>,
    pub small_blind_amount: Option<Chips>,
    pub big_blind_amount: Option<Chips>,
    pub game_started: bool,
    pub dealer_position: usize,
    /// Unix-время записи в миллисекундах.
    pub last_updated: u64,
}

/// Снапшот -> записи внешнего хранилища.
pub fn snapshot_to_records(snapshot: &SessionSnapshot, now_millis: u64) -> Vec<PlayerRecord> {
    let roster = Roster::from_players(snapshot.players.clone());
    let positions = compute_positions(&roster, snapshot.dealer_position);

    snapshot
        .players
        .iter()
        .map(|p| {
            let status = match positions {
                Some(pos) if p.is_active => pos.role_of(p.id),
                _ => SeatRole::Normal,
            };

            PlayerRecord {
                player_id: p.id,
                name: p.name.clone(),
                balance: p.balance,
                current_bet: p.current_bet,
                is_active: p.is_active,
                has_folded: p.has_folded,
                status,
                is_selected: snapshot.selected_player_id == Some(p.id),
                game_round: snapshot.game_round,
                highest_bet: snapshot.highest_bet,
                starting_money: Some(snapshot.starting_money),
                small_blind_amount: Some(snapshot.small_blind),
                big_blind_amount: Some(snapshot.big_blind),
                game_started: snapshot.game_started,
                dealer_position: snapshot.dealer_position,
                last_updated: now_millis,
            }
        })
        .collect()
}

/// Записи внешнего хранилища -> снапшот. Пустой набор – снапшота нет.
pub fn records_to_snapshot(records: &[PlayerRecord]) -> Option<SessionSnapshot> {
    let latest = records.iter().max_by_key(|r| r.last_updated)?;

    let mut sorted: Vec<&PlayerRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.player_id);

    let players = sorted
        .iter()
        .map(|r| Player {
            id: r.player_id,
            name: if r.name.is_empty() {
                format!("Player {}", r.player_id)
            } else {
                r.name.clone()
            },
            balance: r.balance,
            current_bet: r.current_bet,
            is_active: r.is_active,
            has_folded: r.has_folded,
        })
        .collect();

    let selected_player_id = sorted.iter().find(|r| r.is_selected).map(|r| r.player_id);

    Some(SessionSnapshot {
        players,
        selected_player_id,
        game_round: latest.game_round,
        highest_bet: latest.highest_bet,
        starting_money: latest.starting_money.unwrap_or(FALLBACK_STARTING_MONEY),
        small_blind: latest.small_blind_amount.unwrap_or(FALLBACK_SMALL_BLIND),
        big_blind: latest.big_blind_amount.unwrap_or(FALLBACK_BIG_BLIND),
        game_started: latest.game_started,
        dealer_position: latest.dealer_position,
    })
}
