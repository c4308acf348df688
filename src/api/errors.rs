use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    #[error("Неверный запрос: {0}")]
    BadRequest(String),

    /// Изменять состояние может только дилер.
    #[error("Действие доступно только дилеру")]
    Unauthorized,

    /// Команда не может быть выполнена этой ролью / в этом режиме.
    #[error("Команда не может быть выполнена: {0}")]
    InvalidCommand(String),

    /// Движок отклонил команду (фишки, банк, цели).
    #[error("{0}")]
    Engine(EngineError),

    /// Внутренняя ошибка сервера.
    #[error("Внутренняя ошибка: {0}")]
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::Engine(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
