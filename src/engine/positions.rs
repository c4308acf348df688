use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, Roster};

/// Роль места в текущем раунде. Не хранится у игрока – всегда вычисляется.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeatRole {
    Dealer,
    SmallBlind,
    BigBlind,
    #[default]
    Normal,
}

/// Позиции дилера и блайндов: индексы в активной выборке + id игроков.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatPositions {
    pub active_count: usize,
    pub dealer_index: usize,
    pub small_blind_index: usize,
    pub big_blind_index: usize,
    pub dealer: PlayerId,
    pub small_blind: PlayerId,
    pub big_blind: PlayerId,
}

impl SeatPositions {
    /// Роль игрока. Приоритет: дилер, затем малый, затем большой блайнд.
    pub fn role_of(&self, player_id: PlayerId) -> SeatRole {
        if player_id == self.dealer {
            SeatRole::Dealer
        } else if player_id == self.small_blind {
            SeatRole::SmallBlind
        } else if player_id == self.big_blind {
            SeatRole::BigBlind
        } else {
            SeatRole::Normal
        }
    }
}

/// Индексы (дилер, SB, BB) по модулю количества активных игроков.
/// None – активных нет, индексная арифметика не определена.
pub fn blind_indexes(dealer_position: usize, active_count: usize) -> Option<(usize, usize, usize)> {
    if active_count == 0 {
        return None;
    }
    let dealer = dealer_position % active_count;
    Some((
        dealer,
        (dealer + 1) % active_count,
        (dealer + 2) % active_count,
    ))
}

/// Вычислить позиции для текущего порядка активных игроков.
pub fn compute_positions(roster: &Roster, dealer_position: usize) -> Option<SeatPositions> {
    let active_count = roster.active_count();
    let (d, sb, bb) = blind_indexes(dealer_position, active_count)?;
    let id_at = |index: usize| roster.active_at(index).map(|p| p.id);

    Some(SeatPositions {
        active_count,
        dealer_index: d,
        small_blind_index: sb,
        big_blind_index: bb,
        dealer: id_at(d)?,
        small_blind: id_at(sb)?,
        big_blind: id_at(bb)?,
    })
}
