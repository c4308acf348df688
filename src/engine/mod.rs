//! Движок учёта фишек: журнал, банк, позиции, раунды.
//!
//! Высокоуровневый объект: `Session`
//! Основные операции:
//!   - `place_bet` / `match_bet` / `win` / `add_money` – денежные действия
//!   - `fold` / `unfold` – выход из раунда и возврат
//!   - `start_or_advance_round` – старт игры / следующий раунд с раздачей банка
//!   - `reset_game` – полный сброс
//!   - `export_snapshot` / `import_snapshot` – синхронизация дилер → зрители

pub mod bank;
pub mod errors;
pub mod ledger;
pub mod positions;
pub mod round;
pub mod session;
pub mod snapshot;
pub mod validation;

pub use bank::bank_balance;
pub use errors::EngineError;
pub use ledger::{Ledger, DEFAULT_LEDGER_CAPACITY};
pub use positions::{compute_positions, SeatPositions, SeatRole};
pub use round::{PotDistribution, RoundPhase, RoundStart, RoundState};
pub use session::Session;
pub use snapshot::SessionSnapshot;
