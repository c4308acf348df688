use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::Transaction;

/// Вместимость журнала по умолчанию.
pub const DEFAULT_LEDGER_CAPACITY: usize = 20;

/// Журнал операций: только добавление, новые записи в начале.
///
/// Хранит не больше `capacity` последних записей – самые старые вытесняются.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ledger {
    capacity: usize,
    entries: VecDeque<Transaction>,
}

impl Ledger {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, tx: Transaction) {
        self.entries.push_front(tx);
        self.entries.truncate(self.capacity);
    }

    /// Записи от новых к старым.
    pub fn recent(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Transaction> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Полная очистка – только для сброса игры.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(DEFAULT_LEDGER_CAPACITY)
    }
}
