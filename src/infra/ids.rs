use serde::{Deserialize, Serialize};

use crate::domain::TransactionId;

/// Монотонный счётчик id записей журнала.
///
/// Живёт внутри сессии. Сброс игры счётчик не трогает: id уникальны
/// в рамках сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdSequence {
    next: TransactionId,
}

impl IdSequence {
    /// Счётчик с начальным значением 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    #[inline]
    pub fn next_id(&mut self) -> TransactionId {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_grow() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }
}
