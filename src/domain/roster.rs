use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::PlayerId;

/// Реестр игроков: фиксированный набор мест в порядке рассадки.
///
/// Игроков не удаляют, только выключают. Порядок вектора стабилен –
/// от него зависят индексы дилера и блайндов.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Ростер из `seats` мест: id 1..=seats, имена "Player N".
    pub fn with_seats(seats: usize) -> Self {
        let players = (1..=seats as PlayerId)
            .map(|id| Player::new(id, format!("Player {id}")))
            .collect();
        Self { players }
    }

    pub fn from_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    /// Активные игроки в порядке рассадки.
    pub fn active(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Индекс игрока среди активных (None – игрок выключен или не найден).
    pub fn active_index_of(&self, id: PlayerId) -> Option<usize> {
        self.active().position(|p| p.id == id)
    }

    /// Активный игрок по индексу в активной выборке.
    pub fn active_at(&self, index: usize) -> Option<&Player> {
        self.active().nth(index)
    }

    /// Сумма балансов активных игроков.
    pub fn active_balance_total(&self) -> Chips {
        self.active().map(|p| p.balance).sum()
    }

    /// Банк раунда: сумма текущих ставок активных игроков (сфолдивших тоже).
    pub fn pot_total(&self) -> Chips {
        self.active().map(|p| p.current_bet).sum()
    }

    /// Есть ли повторяющиеся id (для проверки импортированных снапшотов).
    pub fn first_duplicate_id(&self) -> Option<PlayerId> {
        self.players.iter().enumerate().find_map(|(i, p)| {
            self.players[..i]
                .iter()
                .any(|q| q.id == p.id)
                .then_some(p.id)
        })
    }
}
