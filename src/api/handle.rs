// src/api/handle.rs

use std::sync::{Arc, Mutex, MutexGuard};

use crate::engine::{Session, SessionSnapshot};
use crate::infra::clock::{Clock, SystemClock};

use super::commands::{execute_command, import_remote_snapshot, Command, Role};
use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::{run_query, Query, QueryResponse};

/// Разделяемая ссылка на сессию для конкурентных обработчиков.
///
/// Все команды и запросы одной сессии идут через один мьютекс: промежуточные
/// состояния (например, посреди раздачи банка) снаружи не видны.
pub struct SessionHandle<C: Clock = SystemClock> {
    inner: Arc<Mutex<Session<C>>>,
}

impl<C: Clock> Clone for SessionHandle<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> SessionHandle<C> {
    pub fn new(session: Session<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn execute(&self, role: Role, command: Command) -> Result<CommandResponse, ApiError> {
        let mut session = self.lock()?;
        execute_command(&mut *session, role, command)
    }

    pub fn query(&self, query: &Query) -> Result<QueryResponse, ApiError> {
        let session = self.lock()?;
        Ok(run_query(&*session, query))
    }

    pub fn import(&self, role: Role, snapshot: SessionSnapshot) -> Result<(), ApiError> {
        let mut session = self.lock()?;
        import_remote_snapshot(&mut *session, role, snapshot)
    }

    /// Прочитать что-то из сессии под блокировкой.
    pub fn read<T>(&self, f: impl FnOnce(&Session<C>) -> T) -> Result<T, ApiError> {
        let session = self.lock()?;
        Ok(f(&*session))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Session<C>>, ApiError> {
        self.inner
            .lock()
            .map_err(|_| ApiError::Internal("мьютекс сессии отравлен".to_string()))
    }
}
