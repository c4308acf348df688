//! Внешний API учёта фишек.
//!
//! Здесь описываются:
//! - команды (commands.rs): всё, что меняет состояние; доступны только дилеру;
//! - запросы (queries.rs): только чтение;
//! - DTO (dto.rs): удобные структуры для фронта;
//! - ошибки (errors.rs): то, что видит клиент;
//! - handle (handle.rs): потокобезопасная обёртка над сессией.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod handle;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use handle::SessionHandle;
pub use queries::*;
