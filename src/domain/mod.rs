//! Доменная модель учёта фишек: игроки, ростер, фишки, записи журнала, конфиг сессии.

pub mod chips;
pub mod config;
pub mod player;
pub mod roster;
pub mod transaction;

// Базовые идентификаторы
pub type PlayerId = u64;
pub type TransactionId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Chips и т.п.
pub use chips::*;
pub use config::*;
pub use player::*;
pub use roster::*;
pub use transaction::*;
