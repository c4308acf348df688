use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Игрок за столом: баланс, ставка в текущем раунде и флаги участия.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    /// Отображаемое имя (меняет только дилер).
    pub name: String,
    /// Баланс. Может быть отрицательным – игрок должен банку.
    pub balance: Chips,
    /// Сколько игрок поставил в текущем раунде.
    pub current_bet: Chips,
    /// Участвует ли игрок в игре (учитывается в банке и ротации).
    pub is_active: bool,
    /// Сбросил карты в текущем раунде, но место за ним.
    pub has_folded: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            balance: Chips::ZERO,
            current_bet: Chips::ZERO,
            is_active: true,
            has_folded: false,
        }
    }

    /// Может ли игрок претендовать на банк раунда.
    pub fn is_in_pot(&self) -> bool {
        self.is_active && !self.has_folded
    }

    /// Сколько нужно доставить, чтобы уравнять `highest_bet`.
    pub fn to_call(&self, highest_bet: Chips) -> Chips {
        highest_bet - self.current_bet
    }

    /// Переключить флаг активности.
    ///
    /// Включение – "чистое" место: баланс, ставка и фолд обнуляются.
    /// Выключение – баланс остаётся на учёте, сбрасываются только ставка и фолд.
    pub fn toggle_active(&mut self) {
        self.is_active = !self.is_active;
        if self.is_active {
            self.balance = Chips::ZERO;
        }
        self.current_bet = Chips::ZERO;
        self.has_folded = false;
    }
}
