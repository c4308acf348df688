// src/domain/config.rs

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Конфиг сессии: размер ростера, стартовый стек, блайнды, длина журнала и
/// общий код доступа дилера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Количество мест в ростере (обычно 6).
    pub seats: usize,
    /// Стартовый стек каждого активного игрока.
    pub starting_money: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Сколько последних записей хранит журнал.
    pub ledger_capacity: usize,
    /// Общий статический код, дающий роль дилера.
    pub dealer_code: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seats: 6,
            starting_money: Chips(100),
            small_blind: Chips(5),
            big_blind: Chips(10),
            ledger_capacity: 20,
            dealer_code: "1211".to_string(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.seats == 0 {
            return Err("seats = 0".to_string());
        }
        if self.ledger_capacity == 0 {
            return Err("ledger_capacity = 0".to_string());
        }
        if self.starting_money.is_negative() {
            return Err(format!("starting_money ({}) < 0", self.starting_money));
        }
        if self.small_blind.is_negative() {
            return Err(format!("small_blind ({}) < 0", self.small_blind));
        }
        if self.big_blind.is_negative() {
            return Err(format!("big_blind ({}) < 0", self.big_blind));
        }
        if self.dealer_code.is_empty() {
            return Err("dealer_code пустой".to_string());
        }
        Ok(())
    }

    /// Загрузить конфиг из JSON. Отсутствующие поля берутся из `Default`.
    pub fn from_json_str(raw: &str) -> Result<Self, String> {
        let cfg: SessionConfig =
            serde_json::from_str(raw).map_err(|e| format!("битый JSON конфига: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg = SessionConfig::from_json_str(r#"{ "starting_money": 250, "seats": 4 }"#)
            .expect("валидный конфиг");
        assert_eq!(cfg.seats, 4);
        assert_eq!(cfg.starting_money, Chips(250));
        assert_eq!(cfg.small_blind, Chips(5));
        assert_eq!(cfg.big_blind, Chips(10));
        assert_eq!(cfg.ledger_capacity, 20);
    }

    #[test]
    fn rejects_zero_seats_and_negative_blinds() {
        assert!(SessionConfig::from_json_str(r#"{ "seats": 0 }"#).is_err());
        assert!(SessionConfig::from_json_str(r#"{ "big_blind": -1 }"#).is_err());
        assert!(SessionConfig::from_json_str("not json").is_err());
    }
}
