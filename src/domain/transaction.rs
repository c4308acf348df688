use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{PlayerId, TransactionId};

/// Тип записи в журнале.
///
/// Разморозка (unfold) пишется как `Add` с нулевой суммой – так было в
/// исходном формате журнала, новый тип не вводим.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Bet,
    Win,
    Add,
    /// Маркер, а не перевод: сумма всегда 0.
    Fold,
}

/// Одна запись журнала.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub player_id: PlayerId,
    pub amount: Chips,
    pub kind: TransactionKind,
    /// Unix-время в миллисекундах.
    pub timestamp: u64,
    pub description: String,
}
