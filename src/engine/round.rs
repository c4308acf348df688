use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId};

/// Фаза игры. Терминального состояния нет – только сброс.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    NotStarted,
    InProgress { round: u32 },
}

/// Состояние раундов: номер, позиция дилера, максимальная ставка.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundState {
    pub started: bool,
    pub round: u32,
    /// Индекс дилера в *активной* выборке, а не id игрока.
    pub dealer_position: usize,
    /// Максимальная текущая ставка среди активных игроков.
    pub highest_bet: Chips,
}

impl RoundState {
    pub fn phase(&self) -> RoundPhase {
        if self.started {
            RoundPhase::InProgress { round: self.round }
        } else {
            RoundPhase::NotStarted
        }
    }

    /// Перейти к следующему раунду: номер +1, кнопка дилера сдвигается.
    /// `active_count` > 0 гарантирует вызывающий код.
    pub fn advance(&mut self, active_count: usize) {
        self.round = self.round.saturating_add(1);
        self.dealer_position = (self.dealer_position % active_count + 1) % active_count;
    }

    pub fn reset(&mut self) {
        *self = RoundState::default();
    }
}

/// Итог раздачи банка в конце раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotDistribution {
    pub pot: Chips,
    pub share: Chips,
    pub recipients: Vec<PlayerId>,
    /// Остаток от целочисленного деления – никому не достаётся.
    pub burned: Chips,
}

/// Итог старта/перехода раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundStart {
    pub round: u32,
    pub dealer: PlayerId,
    pub small_blind: PlayerId,
    pub big_blind: PlayerId,
    /// Раздача банка предыдущего раунда (если она была).
    pub distribution: Option<PotDistribution>,
}
