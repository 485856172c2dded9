//! Raw device clock sources

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Raw device clock: integer milliseconds since the Unix epoch
///
/// This is the only input a timer reads; everything downstream is pure
/// arithmetic over it.
pub trait TimeSource: Send + Sync {
    fn now_ms(&self) -> i64;
}

/// Wall clock source for production use
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_ms(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since_epoch) => since_epoch.as_millis() as i64,
            // Clock set before 1970: count backward from the epoch
            Err(e) => -(e.duration().as_millis() as i64),
        }
    }
}

/// Manually driven source for tests and simulation
///
/// Time stands still until `set` or `advance` moves it, so reads taken at
/// "the same instant" are actually the same instant.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    now_ms: AtomicI64,
}

impl ManualTimeSource {
    pub fn new(start_ms: i64) -> Self {
        ManualTimeSource {
            now_ms: AtomicI64::new(start_ms),
        }
    }

    /// Jump to an absolute raw time
    pub fn set(&self, ms: i64) {
        self.now_ms.store(ms, Ordering::SeqCst);
    }

    /// Move raw time forward (or backward, with a negative amount)
    pub fn advance(&self, ms: i64) {
        self.now_ms.fetch_add(ms, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now_ms(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}
