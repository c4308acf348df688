use crate::engine::snapshot::SessionSnapshot;
use crate::infra::mapping::{records_to_snapshot, snapshot_to_records, PlayerRecord};

/// Абстракция внешнего хранилища снапшотов.
///
/// Реальный транспорт (какая таблица, как часто опрашивать, ретраи) живёт
/// снаружи крейта; здесь только форма данных и удобная реализация для тестов.
pub trait SnapshotStore {
    /// Последнее сохранённое состояние (None – хранилище пустое).
    fn load(&self) -> Option<SessionSnapshot>;

    /// Сохранить состояние. Последняя запись побеждает.
    fn save(&mut self, snapshot: &SessionSnapshot, now_millis: u64);
}

/// In-memory хранилище, устроенное как таблица записей "по строке на игрока".
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    records: Vec<PlayerRecord>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> Option<SessionSnapshot> {
        records_to_snapshot(&self.records)
    }

    fn save(&mut self, snapshot: &SessionSnapshot, now_millis: u64) {
        // Обновляем существующие строки по player_id, новых игроков дописываем.
        for record in snapshot_to_records(snapshot, now_millis) {
            match self
                .records
                .iter_mut()
                .find(|r| r.player_id == record.player_id)
            {
                Some(existing) => *existing = record,
                None => self.records.push(record),
            }
        }
    }
}
