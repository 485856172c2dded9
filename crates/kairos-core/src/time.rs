//! Time primitives for the KAIROS dual clock
//!
//! KAIROS expresses raw device time as integer milliseconds since the Unix
//! epoch. A `BendConfig` maps raw time onto a "bent" logical timeline: a
//! fixed offset shift, plus optional acceleration from a pivot instant.

use crate::{KairosError, KairosResult};

/// Unit for clock reads and translations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Milliseconds,
    /// Whole seconds, truncated from milliseconds
    Seconds,
}

impl TimeUnit {
    /// Convert a millisecond value into this unit
    #[inline]
    pub fn from_millis(self, ms: i64) -> i64 {
        match self {
            TimeUnit::Milliseconds => ms,
            TimeUnit::Seconds => ms / 1000,
        }
    }

    /// Convert a value in this unit into milliseconds
    #[inline]
    pub fn to_millis(self, value: i64) -> i64 {
        match self {
            TimeUnit::Milliseconds => value,
            TimeUnit::Seconds => value * 1000,
        }
    }
}

/// A timer's bend configuration: offset, acceleration, and the pivot the
/// acceleration is measured from
///
/// The three fields are only ever replaced together; readers take a copy
/// and apply it as one consistent transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BendConfig {
    /// Milliseconds added to raw device time before acceleration
    pub offset: i64,
    /// Time flow multiplier past the pivot (1.0 = real-time)
    pub acceleration_factor: f64,
    /// Bent-time instant from which acceleration is measured
    pub start_at: i64,
}

impl BendConfig {
    /// Identity configuration: logical time equals raw device time
    pub const IDENTITY: BendConfig = BendConfig {
        offset: 0,
        acceleration_factor: 1.0,
        start_at: 0,
    };

    pub fn new(offset: i64, acceleration_factor: f64, start_at: i64) -> Self {
        BendConfig {
            offset,
            acceleration_factor,
            start_at,
        }
    }

    /// Check that the configuration is usable
    ///
    /// The acceleration factor must be finite and non-negative; bent time
    /// never flows backward.
    pub fn validate(&self) -> KairosResult<()> {
        if !self.acceleration_factor.is_finite() || self.acceleration_factor < 0.0 {
            return Err(KairosError::NegativeAcceleration(self.acceleration_factor));
        }
        Ok(())
    }

    /// Apply the forward transform to a raw device timestamp (milliseconds)
    ///
    /// Time before the pivot is only shifted; past the pivot the elapsed
    /// portion is scaled by the acceleration factor. Both branches meet at
    /// `start_at`, so the timeline has no jump at the pivot.
    #[inline]
    pub fn apply(&self, raw_ms: i64) -> i64 {
        let bent = raw_ms + self.offset;
        if bent <= self.start_at {
            bent
        } else {
            self.start_at + ((bent - self.start_at) as f64 * self.acceleration_factor) as i64
        }
    }
}

impl Default for BendConfig {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One authority response: the measured skew plus the canonical bend rules
///
/// Positive `delta` means this device's raw clock reads ahead of the
/// server's; negative means the server is ahead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SyncResult {
    /// Server-observed minus client-observed time for this round trip (ms)
    pub delta: i64,
    /// Canonical server-side bend configuration
    pub timer: BendConfig,
}
