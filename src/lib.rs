//! Общий учёт фишек для покера на игрушечные деньги.
//!
//! Здесь описываем ABI (Operation / Query / Response) и
//! связываем команды дилера и запросы зрителей с `engine::Session`.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, Command, CommandResponse, Query, QueryResponse};

/// Операции (внешние команды), которые модуль принимает.
///
/// Для простоты: одна операция = одна команда дилера из api::Command.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LedgerOperation {
    Command(Command),
}

/// Запросы к сервису (read-only).
pub type LedgerQuery = Query;

/// Ответы на запросы.
pub type LedgerQueryResponse = QueryResponse;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct ChipLedgerAbi;

impl ContractAbi for ChipLedgerAbi {
    type Operation = LedgerOperation;
    type Response = Result<CommandResponse, ApiError>;
}

impl ServiceAbi for ChipLedgerAbi {
    type Query = LedgerQuery;
    type QueryResponse = LedgerQueryResponse;
}
