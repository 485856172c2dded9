//! The bendable Timer

use std::sync::Arc;

use kairos_core::{BendConfig, KairosResult, TimeUnit};
use parking_lot::RwLock;

use crate::{SystemTimeSource, TimeSource};

/// A reconfigurable transform from raw device time onto a bent timeline
///
/// A fresh timer carries the identity configuration, so it reads plain raw
/// device time until someone reconfigures it. `configure` replaces the
/// whole three-field configuration at once and every read takes a single
/// snapshot of it, so no read can observe a mix of two configurations.
pub struct Timer {
    source: Arc<dyn TimeSource>,
    config: RwLock<BendConfig>,
}

impl Timer {
    /// Create a timer over the system wall clock
    pub fn new() -> Self {
        Self::with_source(Arc::new(SystemTimeSource))
    }

    /// Create a timer over a caller-supplied raw time source
    pub fn with_source(source: Arc<dyn TimeSource>) -> Self {
        Timer {
            source,
            config: RwLock::new(BendConfig::IDENTITY),
        }
    }

    /// Current logical time in the requested unit
    pub fn now(&self, unit: TimeUnit) -> i64 {
        unit.from_millis(self.config.read().apply(self.source.now_ms()))
    }

    /// Current logical time in milliseconds
    pub fn msec(&self) -> i64 {
        self.now(TimeUnit::Milliseconds)
    }

    /// Current logical time in whole seconds
    pub fn sec(&self) -> i64 {
        self.now(TimeUnit::Seconds)
    }

    /// Re-express an arbitrary raw timestamp on this timer's timeline
    ///
    /// Applies the same forward transform as `now` to a caller-supplied
    /// timestamp. The output unit matches the unit of the input.
    pub fn translate(&self, timestamp: i64, unit: TimeUnit) -> i64 {
        unit.from_millis(self.config.read().apply(unit.to_millis(timestamp)))
    }

    /// Atomically replace the active configuration
    ///
    /// A rejected configuration (negative acceleration) leaves the
    /// previous one in place.
    pub fn configure(
        &self,
        offset: i64,
        acceleration_factor: f64,
        start_at: i64,
    ) -> KairosResult<()> {
        let next = BendConfig::new(offset, acceleration_factor, start_at);
        next.validate()?;
        *self.config.write() = next;
        Ok(())
    }

    /// Snapshot of the active configuration
    pub fn config(&self) -> BendConfig {
        *self.config.read()
    }

    /// Offset of the active configuration, in milliseconds
    pub fn offset(&self) -> i64 {
        self.config.read().offset
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
