use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Chips, PlayerId};

/// Причины, по которым команда отклонена.
///
/// Любая ошибка означает, что состояние сессии не изменилось.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum EngineError {
    #[error("Игрок {player_id}: недостаточно фишек (баланс {balance}, нужно {requested})")]
    InsufficientPlayerFunds {
        player_id: PlayerId,
        balance: Chips,
        requested: Chips,
    },

    #[error("В банке недостаточно фишек для выплаты (в банке {bank}, запрошено {requested})")]
    InsufficientBankFunds { bank: Chips, requested: Chips },

    #[error("Игрок {0} уже уравнял текущую ставку")]
    AlreadyCalled(PlayerId),

    #[error("Игрок {0} не найден")]
    InvalidTarget(PlayerId),

    #[error("Игрок {0} не участвует в игре")]
    InactivePlayer(PlayerId),

    #[error("Нет ни одного активного игрока – раунд не запустить")]
    DegenerateActiveSet,

    #[error("Недопустимая сумма: {0}")]
    InvalidAmount(Chips),

    #[error("Некорректный конфиг: {0}")]
    InvalidConfig(String),

    #[error("Некорректный снапшот: {0}")]
    InvalidSnapshot(String),
}
