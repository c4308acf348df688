// src/infra/clock.rs
//! Источник времени для меток записей журнала.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Часы сессии: текущее unix-время в миллисекундах.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Настоящие системные часы.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            // Часы до 1970 года – считаем нулём, а не паникуем.
            .unwrap_or(0)
    }
}

/// Детерминированные часы для тестов и реплея.
/// Каждое чтение сдвигает время на `step` миллисекунд.
#[derive(Debug)]
pub struct FixedClock {
    now: AtomicU64,
    step: u64,
}

impl FixedClock {
    pub fn new(start: u64) -> Self {
        Self::with_step(start, 0)
    }

    pub fn with_step(start: u64, step: u64) -> Self {
        Self {
            now: AtomicU64::new(start),
            step,
        }
    }

    pub fn set(&self, millis: u64) {
        self.now.store(millis, Ordering::Relaxed);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.now.fetch_add(self.step, Ordering::Relaxed)
    }
}
