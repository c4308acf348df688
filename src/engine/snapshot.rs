use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Player, PlayerId};

/// Полное состояние стола для синхронизации между дилером и зрителями.
///
/// Журнал сюда не входит: зрители видят только игроков и параметры раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub players: Vec<Player>,
    pub selected_player_id: Option<PlayerId>,
    pub game_round: u32,
    pub highest_bet: Chips,
    pub starting_money: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub game_started: bool,
    /// Старые снапшоты могут не содержать позицию дилера.
    #[serde(default)]
    pub dealer_position: usize,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
