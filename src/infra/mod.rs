//! Инфраструктурный слой вокруг движка:
//! - часы для меток журнала;
//! - счётчик id;
//! - вход в роль дилера по коду;
//! - маппинг снапшота в плоские записи внешнего хранилища;
//! - абстракция хранилища снапшотов.

pub mod auth;
pub mod clock;
pub mod ids;
pub mod mapping;
pub mod persistence;

pub use auth::AccessGate;
pub use clock::{Clock, FixedClock, SystemClock};
pub use ids::IdSequence;
pub use mapping::*;
pub use persistence::{InMemorySnapshotStore, SnapshotStore};
