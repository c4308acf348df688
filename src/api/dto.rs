use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId, TransactionId, TransactionKind};
use crate::engine::{RoundStart, SeatPositions, SeatRole};

/// DTO игрока для экрана.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerDto {
    pub player_id: PlayerId,
    pub name: String,
    pub balance: Chips,
    pub current_bet: Chips,
    pub is_active: bool,
    pub has_folded: bool,
    /// Вычисленная роль места (дилер / SB / BB).
    pub role: SeatRole,
    /// Индекс среди активных игроков (None – игрок выключен).
    pub active_index: Option<usize>,
    pub is_selected: bool,
}

/// DTO записи журнала.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionDto {
    pub id: TransactionId,
    pub player_id: PlayerId,
    pub player_name: String,
    pub amount: Chips,
    pub kind: TransactionKind,
    pub timestamp: u64,
    pub description: String,
}

/// Полный read-only вид сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionViewDto {
    pub players: Vec<PlayerDto>,
    pub bank_balance: Chips,
    /// Сумма текущих ставок активных игроков.
    pub pot: Chips,
    /// От новых к старым.
    pub ledger: Vec<TransactionDto>,
    pub round: u32,
    pub highest_bet: Chips,
    pub game_started: bool,
    pub starting_money: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub dealer_position: usize,
    pub positions: Option<SeatPositions>,
    pub selected_player_id: Option<PlayerId>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Команда применена. `notice` – сообщение для пользователя.
    Applied {
        notice: String,
        session: SessionViewDto,
    },

    /// Команда валидна, но менять было нечего (например, unfold несфолдившего).
    NoChange { notice: String },

    /// Старт игры / нового раунда.
    RoundStarted {
        notice: String,
        summary: RoundStart,
        session: SessionViewDto,
    },
}

impl CommandResponse {
    pub fn notice(&self) -> &str {
        match self {
            CommandResponse::Applied { notice, .. }
            | CommandResponse::NoChange { notice }
            | CommandResponse::RoundStarted { notice, .. } => notice,
        }
    }
}
